use crate::api::models::{Greenhouse, Plant, Sensor};
use crate::error::ApiResult;

use super::{Flash, PageContext};

pub const LOAD_FAILED: &str = "Error al cargar datos del invernadero";

#[derive(Debug, Clone, Default)]
pub struct GreenhouseDetailPage {
    /// `None` when loading failed; the page then shows only the error.
    pub greenhouse: Option<Greenhouse>,
    pub plants: Vec<Plant>,
    pub sensors: Vec<Sensor>,
    pub flash: Flash,
}

impl GreenhouseDetailPage {
    #[must_use]
    pub fn active_sensors(&self) -> usize {
        self.sensors.iter().filter(|s| s.active).count()
    }
}

pub struct GreenhouseDetailController<'a> {
    ctx: PageContext<'a>,
}

impl<'a> GreenhouseDetailController<'a> {
    #[must_use]
    pub fn new(ctx: PageContext<'a>) -> Self {
        Self { ctx }
    }

    pub async fn show(&self, id: i64) -> GreenhouseDetailPage {
        match self.fetch(id).await {
            Ok((greenhouse, plants, sensors)) => GreenhouseDetailPage {
                greenhouse: Some(greenhouse),
                plants,
                sensors,
                flash: Flash::default(),
            },
            Err(e) => {
                let mut page = GreenhouseDetailPage::default();
                page.flash.error(e.banner_message(LOAD_FAILED));
                page
            }
        }
    }

    async fn fetch(&self, id: i64) -> ApiResult<(Greenhouse, Vec<Plant>, Vec<Sensor>)> {
        let services = self.ctx.services;
        let pagination = self.ctx.pagination();

        let greenhouse = services.greenhouses.get_by_id(id).await?;
        let plants = services.plants.get_by_greenhouse(id, pagination).await?;
        let sensors = services.sensors.get_by_greenhouse(id, false, pagination).await?;
        Ok((greenhouse, plants, sensors))
    }
}
