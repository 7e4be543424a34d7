use reqwest::StatusCode;
use serde_json::Value;

/// Failure of a single call to the greenhouse API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Status {
        status: StatusCode,
        /// `detail` field of the error body, when the backend sent one
        detail: Option<String>,
        body: String,
    },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("No response from server: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from the raw response body.
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let detail = extract_detail(&body);
        Self::Status {
            status,
            detail,
            body,
        }
    }

    /// The backend's human-readable error text, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text to show the operator: the backend's detail, or `fallback`.
    #[must_use]
    pub fn banner_message(&self, fallback: &str) -> String {
        self.detail()
            .filter(|d| !d.trim().is_empty())
            .map_or_else(|| fallback.to_string(), ToString::to_string)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Pull the `detail` field out of an error body.
///
/// FastAPI sends either `{"detail": "text"}` or, for validation failures,
/// `{"detail": [{"msg": "...", ...}, ...]}`; the latter is joined with `; `.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Process-level failures surfaced from `main`.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Greenhouse API error: {0}")]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_extracted() {
        let err = ApiError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"detail":"Sensor no encontrado"}"#.to_string(),
        );
        assert_eq!(err.detail(), Some("Sensor no encontrado"));
        assert_eq!(err.banner_message("fallback"), "Sensor no encontrado");
    }

    #[test]
    fn validation_list_is_joined() {
        let body = r#"{"detail":[{"loc":["body","name"],"msg":"field required"},{"msg":"too short"}]}"#;
        let err = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body.to_string());
        assert_eq!(err.detail(), Some("field required; too short"));
    }

    #[test]
    fn missing_detail_uses_fallback() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "oops".to_string());
        assert_eq!(err.detail(), None);
        assert_eq!(err.banner_message("Error al crear sensor"), "Error al crear sensor");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.banner_message("Error al cargar usuarios"), "Error al cargar usuarios");
    }
}
