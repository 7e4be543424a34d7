use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Query parameters appended to a request, e.g. `[("user_id", "3".into())]`.
pub type Query<'a> = &'a [(&'a str, String)];

/// HTTP transport shared by every service.
///
/// One reqwest client with the backend base URL, a fixed request timeout and
/// JSON headers. Failures are logged once here, categorized by status, and
/// handed back to the caller untouched: there is no retry and no token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> ApiResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = Client::builder()
            .timeout(config.api_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails, times out, returns an error
    /// status, or the body does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Query<'_>) -> ApiResult<T> {
        let response = self.send(Method::GET, path, query, None::<&()>).await?;
        decode(response).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post<B, T>(&self, path: &str, query: Query<'_>, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, query, Some(body)).await?;
        decode(response).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn patch<B, T>(&self, path: &str, query: Query<'_>, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PATCH, path, query, Some(body)).await?;
        decode(response).await
    }

    /// The response body, if any, is discarded.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or returns an error status.
    pub async fn delete(&self, path: &str, query: Query<'_>) -> ApiResult<()> {
        self.send(Method::DELETE, path, query, None::<&()>).await?;
        Ok(())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&B>,
    ) -> ApiResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "Greenhouse API request");

        let mut request: RequestBuilder = self.http_client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = match request.send().await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::from_status(status, text))
            }
            Err(e) => Err(ApiError::from(e)),
        };

        if let Err(e) = &result {
            log_failure(&method, path, e);
        }
        result
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(format!("Failed to get response text: {e}")))?;

    serde_json::from_str(&text).map_err(|e| {
        tracing::error!(
            error = %e,
            body_preview = %text.chars().take(500).collect::<String>(),
            "Failed to parse greenhouse API response"
        );
        ApiError::Decode(e.to_string())
    })
}

fn log_failure(method: &Method, path: &str, error: &ApiError) {
    match error {
        ApiError::Status { status, body, .. } => match *status {
            StatusCode::UNAUTHORIZED => {
                tracing::error!(%method, path, "Greenhouse API: unauthorized");
            }
            StatusCode::FORBIDDEN => {
                tracing::error!(%method, path, "Greenhouse API: forbidden");
            }
            StatusCode::NOT_FOUND => {
                tracing::error!(%method, path, "Greenhouse API: resource not found");
            }
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(%method, path, "Greenhouse API: server error");
            }
            other => {
                tracing::error!(%method, path, status = %other, body = %body, "Greenhouse API error");
            }
        },
        ApiError::Timeout(msg) | ApiError::Network(msg) => {
            tracing::error!(%method, path, error = %msg, "No response from greenhouse API");
        }
        ApiError::Decode(msg) => {
            tracing::error!(%method, path, error = %msg, "Greenhouse API request failed");
        }
    }
}
