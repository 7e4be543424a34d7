use crate::api::models::{Pagination, SensorReading, SensorReadingBulkCreate, SensorReadingCreate};
use crate::api::{endpoints::sensor_readings, ApiClient};
use crate::error::ApiResult;

/// Sensor readings. No console page renders these yet.
#[derive(Debug, Clone)]
pub struct SensorReadingsService {
    client: ApiClient,
}

impl SensorReadingsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_sensor(
        &self,
        sensor_id: i64,
        pagination: Pagination,
    ) -> ApiResult<Vec<SensorReading>> {
        self.client
            .get(
                &sensor_readings::by_sensor(sensor_id),
                &[
                    ("skip", pagination.skip.to_string()),
                    ("limit", pagination.limit.to_string()),
                ],
            )
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn latest(&self, sensor_id: i64) -> ApiResult<SensorReading> {
        self.client
            .get(&sensor_readings::latest(sensor_id), &[])
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create(&self, reading: &SensorReadingCreate) -> ApiResult<SensorReading> {
        self.client.post(sensor_readings::BASE, &[], reading).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create_bulk(
        &self,
        readings: &SensorReadingBulkCreate,
    ) -> ApiResult<Vec<SensorReading>> {
        self.client.post(sensor_readings::BULK, &[], readings).await
    }
}
