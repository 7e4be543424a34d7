use crate::api::models::{User, UserCreate, UserUpdate};
use crate::api::{endpoints::users, ApiClient};
use crate::error::ApiResult;

#[derive(Debug, Clone)]
pub struct UsersService {
    client: ApiClient,
}

impl UsersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_all(&self) -> ApiResult<Vec<User>> {
        self.client.get(users::BASE, &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_id(&self, id: i64) -> ApiResult<User> {
        self.client.get(&users::by_id(id), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create(&self, user: &UserCreate) -> ApiResult<User> {
        self.client.post(users::BASE, &[], user).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update(&self, id: i64, user: &UserUpdate) -> ApiResult<User> {
        self.client.patch(&users::by_id(id), &[], user).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&users::by_id(id), &[]).await
    }
}
