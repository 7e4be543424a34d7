use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }

    /// Production deployments log as JSON lines.
    #[must_use]
    pub fn json_logs(&self) -> bool {
        *self == Self::Prod
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Greenhouse API
    pub api_url: String,
    pub api_timeout_ms: u64,

    // Console server
    pub console_host: String,
    pub console_port: u16,

    // List pages
    pub page_size: u32,

    // Application metadata
    pub deployment: Deployment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8005".to_string(),
            api_timeout_ms: 10_000,
            console_host: "0.0.0.0".to_string(),
            console_port: 3000,
            page_size: 100,
            deployment: Deployment::Local,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            // Greenhouse API
            api_url: env::var("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            api_timeout_ms: parse_var("API_TIMEOUT_MS", defaults.api_timeout_ms)?,

            // Console server
            console_host: env::var("CONSOLE_HOST").unwrap_or(defaults.console_host),
            console_port: parse_var("CONSOLE_PORT", defaults.console_port)?,

            // List pages
            page_size: parse_var("PAGE_SIZE", defaults.page_size)?,

            // Application metadata
            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.console_host, self.console_port)
    }

    #[must_use]
    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key, raw)),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
