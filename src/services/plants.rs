use crate::api::models::{Pagination, Plant, PlantCreate, PlantType, PlantUpdate};
use crate::api::{endpoints::plants, ApiClient};
use crate::error::ApiResult;

use super::owner;

#[derive(Debug, Clone)]
pub struct PlantsService {
    client: ApiClient,
}

fn page(p: Pagination) -> [(&'static str, String); 2] {
    [("skip", p.skip.to_string()), ("limit", p.limit.to_string())]
}

impl PlantsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_all(&self, pagination: Pagination) -> ApiResult<Vec<Plant>> {
        self.client.get(plants::BASE, &page(pagination)).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_greenhouse(
        &self,
        greenhouse_id: i64,
        pagination: Pagination,
    ) -> ApiResult<Vec<Plant>> {
        self.client
            .get(&plants::by_greenhouse(greenhouse_id), &page(pagination))
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Plant> {
        self.client.get(&plants::by_id(id), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create(&self, plant: &PlantCreate, user_id: i64) -> ApiResult<Plant> {
        self.client.post(plants::BASE, &owner(user_id), plant).await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update(&self, id: i64, plant: &PlantUpdate, user_id: i64) -> ApiResult<Plant> {
        self.client
            .patch(&plants::by_id(id), &owner(user_id), plant)
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete(&self, id: i64, user_id: i64) -> ApiResult<()> {
        self.client.delete(&plants::by_id(id), &owner(user_id)).await
    }

    /// Name search; the backend matches substrings.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn search_by_name(&self, name: &str, pagination: Pagination) -> ApiResult<Vec<Plant>> {
        let [skip, limit] = page(pagination);
        self.client
            .get(plants::SEARCH, &[("name", name.to_string()), skip, limit])
            .await
    }

    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_type(
        &self,
        plant_type: PlantType,
        pagination: Pagination,
    ) -> ApiResult<Vec<Plant>> {
        self.client
            .get(&plants::by_type(plant_type.as_str()), &page(pagination))
            .await
    }
}
