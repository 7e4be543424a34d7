use serde::Deserialize;

use crate::api::models::{Greenhouse, Sensor, SensorCreate, SensorType, SensorUpdate};
use crate::error::ApiResult;

use super::{ListView, MISSING_FIELDS, Modal, PageContext, ViewQuery, required};

pub const LOAD_FAILED: &str = "Error al cargar sensores";

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SensorFilter {
    #[serde(default)]
    pub active_only: bool,
}

/// Sensor modal fields as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SensorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub sensor_type: String,
    #[serde(default)]
    pub greenhouse_id: String,
    /// Checkbox: present (`"on"`) when ticked.
    #[serde(default)]
    pub active: Option<String>,
}

impl SensorForm {
    /// Create modal defaults: temperature, active.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            sensor_type: SensorType::Temperature.as_str().to_string(),
            active: Some("on".to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_sensor(sensor: &Sensor) -> Self {
        Self {
            name: sensor.name.clone(),
            sensor_type: sensor.sensor_type.as_str().to_string(),
            greenhouse_id: sensor.greenhouse_id.to_string(),
            active: sensor.active.then(|| "on".to_string()),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    fn to_create(&self) -> Option<SensorCreate> {
        if !required(&[&self.name, &self.sensor_type, &self.greenhouse_id]) {
            return None;
        }
        Some(SensorCreate {
            name: self.name.trim().to_string(),
            sensor_type: SensorType::parse(&self.sensor_type)?,
            greenhouse_id: self.greenhouse_id.trim().parse().ok()?,
            active: Some(self.is_active()),
        })
    }

    fn to_update(&self) -> Option<SensorUpdate> {
        if !required(&[&self.name, &self.sensor_type]) {
            return None;
        }
        Some(SensorUpdate {
            name: Some(self.name.trim().to_string()),
            sensor_type: Some(SensorType::parse(&self.sensor_type)?),
            active: Some(self.is_active()),
        })
    }
}

/// Hidden field of the activate/deactivate button: the state being left.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ToggleForm {
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SensorsPage {
    pub sensors: Vec<Sensor>,
    pub greenhouses: Vec<Greenhouse>,
    pub filter: SensorFilter,
    pub view: ListView<SensorForm>,
}

pub struct SensorsController<'a> {
    ctx: PageContext<'a>,
}

impl<'a> SensorsController<'a> {
    #[must_use]
    pub fn new(ctx: PageContext<'a>) -> Self {
        Self { ctx }
    }

    pub async fn show(&self, filter: SensorFilter, query: &ViewQuery) -> SensorsPage {
        let mut page = self.render(filter, ListView::default()).await;
        let sensors = &page.sensors;
        page.view.apply(query, SensorForm::blank(), |id| {
            sensors.iter().find(|s| s.id == id).map(SensorForm::from_sensor)
        });
        page
    }

    pub async fn create(&self, filter: SensorFilter, form: SensorForm) -> SensorsPage {
        let view = match form.to_create() {
            None => ListView::reopened(Modal::Create, form, MISSING_FIELDS),
            Some(payload) => match self.ctx.services.sensors.create(&payload, self.ctx.user.id).await {
                Ok(sensor) => {
                    tracing::info!(sensor_id = sensor.id, greenhouse_id = sensor.greenhouse_id, "Sensor created");
                    ListView::succeeded("Sensor creado exitosamente")
                }
                Err(e) => ListView::reopened(Modal::Create, form, e.banner_message("Error al crear sensor")),
            },
        };
        self.render(filter, view).await
    }

    pub async fn update(&self, filter: SensorFilter, id: i64, form: SensorForm) -> SensorsPage {
        let view = match form.to_update() {
            None => ListView::reopened(Modal::Edit(id), form, MISSING_FIELDS),
            Some(payload) => match self.ctx.services.sensors.update(id, &payload, self.ctx.user.id).await {
                Ok(_) => {
                    tracing::info!(sensor_id = id, "Sensor updated");
                    ListView::succeeded("Sensor actualizado exitosamente")
                }
                Err(e) => ListView::reopened(
                    Modal::Edit(id),
                    form,
                    e.banner_message("Error al actualizar sensor"),
                ),
            },
        };
        self.render(filter, view).await
    }

    pub async fn delete(&self, filter: SensorFilter, id: i64) -> SensorsPage {
        let view = match self.ctx.services.sensors.delete(id, self.ctx.user.id).await {
            Ok(()) => {
                tracing::info!(sensor_id = id, "Sensor deleted");
                ListView::succeeded("Sensor eliminado exitosamente")
            }
            Err(e) => ListView::failed(e.banner_message("Error al eliminar sensor")),
        };
        self.render(filter, view).await
    }

    /// Flip `active`; `current` is the state shown when the button was pressed.
    pub async fn toggle(&self, filter: SensorFilter, id: i64, current: bool) -> SensorsPage {
        let payload = SensorUpdate {
            active: Some(!current),
            ..SensorUpdate::default()
        };
        let view = match self.ctx.services.sensors.update(id, &payload, self.ctx.user.id).await {
            Ok(_) => ListView::succeeded(if current {
                "Sensor desactivado"
            } else {
                "Sensor activado"
            }),
            Err(e) => ListView::failed(e.banner_message("Error al cambiar estado del sensor")),
        };
        self.render(filter, view).await
    }

    async fn render(&self, filter: SensorFilter, mut view: ListView<SensorForm>) -> SensorsPage {
        match self.fetch(filter).await {
            Ok((greenhouses, sensors)) => SensorsPage {
                sensors,
                greenhouses,
                filter,
                view,
            },
            Err(_) => {
                if view.flash.error.is_none() {
                    view.flash.error(LOAD_FAILED);
                }
                SensorsPage {
                    filter,
                    view,
                    ..SensorsPage::default()
                }
            }
        }
    }

    /// The operator's greenhouses, then each greenhouse's sensors in turn.
    async fn fetch(&self, filter: SensorFilter) -> ApiResult<(Vec<Greenhouse>, Vec<Sensor>)> {
        let services = self.ctx.services;
        let greenhouses = services.greenhouses.get_by_user(self.ctx.user.id).await?;

        let mut sensors = Vec::new();
        for greenhouse in &greenhouses {
            sensors.extend(
                services
                    .sensors
                    .get_by_greenhouse(greenhouse.id, filter.active_only, self.ctx.pagination())
                    .await?,
            );
        }
        Ok((greenhouses, sensors))
    }
}
