use crate::api::models::{LoginResponse, UserLogin};
use crate::api::{endpoints, ApiClient};
use crate::error::ApiResult;

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Check credentials against the backend.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged; a rejected login is a 401 with a `detail`.
    pub async fn login(&self, credentials: &UserLogin) -> ApiResult<LoginResponse> {
        self.client.post(endpoints::LOGIN, &[], credentials).await
    }
}
