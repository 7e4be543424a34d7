use crate::api::models::{Greenhouse, GreenhouseCreate, GreenhouseUpdate};
use crate::api::{endpoints::greenhouses, ApiClient};
use crate::error::ApiResult;

use super::owner;

#[derive(Debug, Clone)]
pub struct GreenhousesService {
    client: ApiClient,
}

impl GreenhousesService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_user(&self, user_id: i64) -> ApiResult<Vec<Greenhouse>> {
        self.client.get(&greenhouses::by_user(user_id), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Greenhouse> {
        self.client.get(&greenhouses::by_id(id), &[]).await
    }

    /// Create a greenhouse owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create(&self, greenhouse: &GreenhouseCreate, user_id: i64) -> ApiResult<Greenhouse> {
        self.client
            .post(greenhouses::BASE, &owner(user_id), greenhouse)
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update(
        &self,
        id: i64,
        greenhouse: &GreenhouseUpdate,
        user_id: i64,
    ) -> ApiResult<Greenhouse> {
        self.client
            .patch(&greenhouses::by_id(id), &owner(user_id), greenhouse)
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete(&self, id: i64, user_id: i64) -> ApiResult<()> {
        self.client
            .delete(&greenhouses::by_id(id), &owner(user_id))
            .await
    }
}
