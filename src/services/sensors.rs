use crate::api::models::{Pagination, Sensor, SensorCreate, SensorUpdate};
use crate::api::{endpoints::sensors, ApiClient};
use crate::error::ApiResult;

use super::owner;

#[derive(Debug, Clone)]
pub struct SensorsService {
    client: ApiClient,
}

impl SensorsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_greenhouse(
        &self,
        greenhouse_id: i64,
        active_only: bool,
        pagination: Pagination,
    ) -> ApiResult<Vec<Sensor>> {
        self.client
            .get(
                &sensors::by_greenhouse(greenhouse_id),
                &[
                    ("active_only", active_only.to_string()),
                    ("skip", pagination.skip.to_string()),
                    ("limit", pagination.limit.to_string()),
                ],
            )
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Sensor> {
        self.client.get(&sensors::by_id(id), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create(&self, sensor: &SensorCreate, user_id: i64) -> ApiResult<Sensor> {
        self.client.post(sensors::BASE, &owner(user_id), sensor).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update(&self, id: i64, sensor: &SensorUpdate, user_id: i64) -> ApiResult<Sensor> {
        self.client
            .patch(&sensors::by_id(id), &owner(user_id), sensor)
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete(&self, id: i64, user_id: i64) -> ApiResult<()> {
        self.client.delete(&sensors::by_id(id), &owner(user_id)).await
    }
}
