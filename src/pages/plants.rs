use serde::Deserialize;

use crate::api::models::{Greenhouse, Plant, PlantCreate, PlantType, PlantUpdate};
use crate::error::ApiResult;

use super::{ListView, MISSING_FIELDS, Modal, PageContext, ViewQuery, optional_text, required};

pub const LOAD_FAILED: &str = "Error al cargar plantas";

/// Search box and type filter above the table. Name search wins when both are set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantFilter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub plant_type: Option<String>,
}

impl PlantFilter {
    #[must_use]
    pub fn search(&self) -> Option<String> {
        self.name.as_deref().and_then(optional_text)
    }

    #[must_use]
    pub fn plant_type(&self) -> Option<PlantType> {
        self.plant_type.as_deref().and_then(PlantType::parse)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlantForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub plant_type: String,
    #[serde(default)]
    pub greenhouse_id: String,
}

impl PlantForm {
    #[must_use]
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            name: plant.name.clone(),
            plant_type: plant.plant_type.as_str().to_string(),
            greenhouse_id: plant.greenhouse_id.to_string(),
        }
    }

    fn to_create(&self) -> Option<PlantCreate> {
        if !required(&[&self.name, &self.plant_type, &self.greenhouse_id]) {
            return None;
        }
        Some(PlantCreate {
            name: self.name.trim().to_string(),
            plant_type: PlantType::parse(&self.plant_type)?,
            greenhouse_id: self.greenhouse_id.trim().parse().ok()?,
        })
    }

    fn to_update(&self) -> Option<PlantUpdate> {
        if !required(&[&self.name, &self.plant_type]) {
            return None;
        }
        Some(PlantUpdate {
            name: Some(self.name.trim().to_string()),
            plant_type: Some(PlantType::parse(&self.plant_type)?),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlantsPage {
    pub plants: Vec<Plant>,
    pub greenhouses: Vec<Greenhouse>,
    pub filter: PlantFilter,
    pub view: ListView<PlantForm>,
}

pub struct PlantsController<'a> {
    ctx: PageContext<'a>,
}

impl<'a> PlantsController<'a> {
    #[must_use]
    pub fn new(ctx: PageContext<'a>) -> Self {
        Self { ctx }
    }

    pub async fn show(&self, filter: PlantFilter, query: &ViewQuery) -> PlantsPage {
        let mut page = self.render(filter, ListView::default()).await;
        let plants = &page.plants;
        page.view.apply(query, PlantForm::default(), |id| {
            plants.iter().find(|p| p.id == id).map(PlantForm::from_plant)
        });
        page
    }

    pub async fn create(&self, filter: PlantFilter, form: PlantForm) -> PlantsPage {
        let view = match form.to_create() {
            None => ListView::reopened(Modal::Create, form, MISSING_FIELDS),
            Some(payload) => match self.ctx.services.plants.create(&payload, self.ctx.user.id).await {
                Ok(plant) => {
                    tracing::info!(plant_id = plant.id, greenhouse_id = plant.greenhouse_id, "Plant created");
                    ListView::succeeded("Planta creada exitosamente")
                }
                Err(e) => ListView::reopened(Modal::Create, form, e.banner_message("Error al crear planta")),
            },
        };
        self.render(filter, view).await
    }

    pub async fn update(&self, filter: PlantFilter, id: i64, form: PlantForm) -> PlantsPage {
        let view = match form.to_update() {
            None => ListView::reopened(Modal::Edit(id), form, MISSING_FIELDS),
            Some(payload) => match self.ctx.services.plants.update(id, &payload, self.ctx.user.id).await {
                Ok(_) => {
                    tracing::info!(plant_id = id, "Plant updated");
                    ListView::succeeded("Planta actualizada exitosamente")
                }
                Err(e) => ListView::reopened(
                    Modal::Edit(id),
                    form,
                    e.banner_message("Error al actualizar planta"),
                ),
            },
        };
        self.render(filter, view).await
    }

    pub async fn delete(&self, filter: PlantFilter, id: i64) -> PlantsPage {
        let view = match self.ctx.services.plants.delete(id, self.ctx.user.id).await {
            Ok(()) => {
                tracing::info!(plant_id = id, "Plant deleted");
                ListView::succeeded("Planta eliminada exitosamente")
            }
            Err(e) => ListView::failed(e.banner_message("Error al eliminar planta")),
        };
        self.render(filter, view).await
    }

    async fn render(&self, filter: PlantFilter, mut view: ListView<PlantForm>) -> PlantsPage {
        match self.fetch(&filter).await {
            Ok((plants, greenhouses)) => PlantsPage {
                plants,
                greenhouses,
                filter,
                view,
            },
            Err(_) => {
                if view.flash.error.is_none() {
                    view.flash.error(LOAD_FAILED);
                }
                PlantsPage {
                    filter,
                    view,
                    ..PlantsPage::default()
                }
            }
        }
    }

    async fn fetch(&self, filter: &PlantFilter) -> ApiResult<(Vec<Plant>, Vec<Greenhouse>)> {
        let services = self.ctx.services;
        let pagination = self.ctx.pagination();

        let plants = if let Some(name) = filter.search() {
            services.plants.search_by_name(&name, pagination).await?
        } else if let Some(plant_type) = filter.plant_type() {
            services.plants.get_by_type(plant_type, pagination).await?
        } else {
            services.plants.get_all(pagination).await?
        };
        let greenhouses = services.greenhouses.get_by_user(self.ctx.user.id).await?;
        Ok((plants, greenhouses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_prefers_name_search() {
        let filter = PlantFilter {
            name: Some("  cherry ".to_string()),
            plant_type: Some("uva".to_string()),
        };
        assert_eq!(filter.search(), Some("cherry".to_string()));
        assert_eq!(filter.plant_type(), Some(PlantType::Grape));

        let filter = PlantFilter {
            name: Some(String::new()),
            plant_type: Some("todos".to_string()),
        };
        assert_eq!(filter.search(), None);
        assert_eq!(filter.plant_type(), None);
    }

    #[test]
    fn edit_does_not_need_greenhouse() {
        let form = PlantForm {
            name: "Roma".to_string(),
            plant_type: "tomate".to_string(),
            greenhouse_id: String::new(),
        };
        assert!(form.to_create().is_none());
        let update = form.to_update().unwrap();
        assert_eq!(update.plant_type, Some(PlantType::Tomato));
    }
}
