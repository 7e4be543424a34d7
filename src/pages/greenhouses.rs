use serde::Deserialize;

use crate::api::models::{Greenhouse, GreenhouseCreate, GreenhouseUpdate, User};
use crate::error::ApiResult;

use super::{ListView, Modal, PageContext, ViewQuery, optional_text, required};

pub const LOAD_FAILED: &str = "Error al cargar invernaderos";
pub const NAME_REQUIRED: &str = "El nombre es requerido";
pub const OWNER_REQUIRED: &str = "Selecciona un propietario";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GreenhouseForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Owner select; only shown when creating.
    #[serde(default)]
    pub user_id: String,
}

impl GreenhouseForm {
    /// Create modal with the signed-in operator preselected as owner.
    #[must_use]
    pub fn blank(owner_id: i64) -> Self {
        Self {
            user_id: owner_id.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_greenhouse(greenhouse: &Greenhouse) -> Self {
        Self {
            name: greenhouse.name.clone(),
            location: greenhouse.location.clone().unwrap_or_default(),
            user_id: greenhouse.user_id.to_string(),
        }
    }

    /// Payload and owner id, or the banner explaining what is missing.
    fn to_create(&self) -> Result<(GreenhouseCreate, i64), &'static str> {
        if !required(&[&self.name]) {
            return Err(NAME_REQUIRED);
        }
        let owner = parse_owner(&self.user_id)?;
        Ok((
            GreenhouseCreate {
                name: self.name.trim().to_string(),
                location: optional_text(&self.location),
            },
            owner,
        ))
    }

    /// Payload and the owner of the greenhouse being edited.
    fn to_update(&self) -> Result<(GreenhouseUpdate, i64), &'static str> {
        if !required(&[&self.name]) {
            return Err(NAME_REQUIRED);
        }
        let owner = parse_owner(&self.user_id)?;
        Ok((
            GreenhouseUpdate {
                name: Some(self.name.trim().to_string()),
                location: Some(self.location.trim().to_string()),
            },
            owner,
        ))
    }
}

/// Hidden field of the delete confirmation: the owner of the row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub user_id: String,
}

fn parse_owner(raw: &str) -> Result<i64, &'static str> {
    raw.trim().parse().map_err(|_| OWNER_REQUIRED)
}

#[derive(Debug, Clone, Default)]
pub struct GreenhousesPage {
    pub greenhouses: Vec<Greenhouse>,
    pub users: Vec<User>,
    pub view: ListView<GreenhouseForm>,
}

pub struct GreenhousesController<'a> {
    ctx: PageContext<'a>,
}

impl<'a> GreenhousesController<'a> {
    #[must_use]
    pub fn new(ctx: PageContext<'a>) -> Self {
        Self { ctx }
    }

    pub async fn show(&self, query: &ViewQuery) -> GreenhousesPage {
        let mut page = self.render(ListView::default()).await;
        let greenhouses = &page.greenhouses;
        page.view.apply(query, GreenhouseForm::blank(self.ctx.user.id), |id| {
            greenhouses
                .iter()
                .find(|g| g.id == id)
                .map(GreenhouseForm::from_greenhouse)
        });
        page
    }

    pub async fn create(&self, form: GreenhouseForm) -> GreenhousesPage {
        let view = match form.to_create() {
            Err(message) => ListView::reopened(Modal::Create, form, message),
            Ok((payload, owner)) => match self.ctx.services.greenhouses.create(&payload, owner).await {
                Ok(greenhouse) => {
                    tracing::info!(greenhouse_id = greenhouse.id, owner, "Greenhouse created");
                    ListView::succeeded("Invernadero creado exitosamente")
                }
                Err(e) => ListView::reopened(
                    Modal::Create,
                    form,
                    e.banner_message("Error al crear invernadero"),
                ),
            },
        };
        self.render(view).await
    }

    pub async fn update(&self, id: i64, form: GreenhouseForm) -> GreenhousesPage {
        let view = match form.to_update() {
            Err(message) => ListView::reopened(Modal::Edit(id), form, message),
            Ok((payload, owner)) => match self.ctx.services.greenhouses.update(id, &payload, owner).await {
                Ok(_) => {
                    tracing::info!(greenhouse_id = id, "Greenhouse updated");
                    ListView::succeeded("Invernadero actualizado exitosamente")
                }
                Err(e) => ListView::reopened(
                    Modal::Edit(id),
                    form,
                    e.banner_message("Error al actualizar invernadero"),
                ),
            },
        };
        self.render(view).await
    }

    /// Mutations go out under the row's owner, which may not be the operator.
    pub async fn delete(&self, id: i64, form: DeleteForm) -> GreenhousesPage {
        let view = match parse_owner(&form.user_id) {
            Err(message) => ListView::failed(message),
            Ok(owner) => match self.ctx.services.greenhouses.delete(id, owner).await {
                Ok(()) => {
                    tracing::info!(greenhouse_id = id, owner, "Greenhouse deleted");
                    ListView::succeeded("Invernadero eliminado exitosamente")
                }
                Err(e) => ListView::failed(e.banner_message("Error al eliminar invernadero")),
            },
        };
        self.render(view).await
    }

    async fn render(&self, mut view: ListView<GreenhouseForm>) -> GreenhousesPage {
        match self.fetch().await {
            Ok((greenhouses, users)) => GreenhousesPage {
                greenhouses,
                users,
                view,
            },
            Err(_) => {
                if view.flash.error.is_none() {
                    view.flash.error(LOAD_FAILED);
                }
                GreenhousesPage {
                    view,
                    ..GreenhousesPage::default()
                }
            }
        }
    }

    /// Every user, then each user's greenhouses in turn.
    async fn fetch(&self) -> ApiResult<(Vec<Greenhouse>, Vec<User>)> {
        let services = self.ctx.services;
        let users = services.users.get_all().await?;

        let mut greenhouses = Vec::new();
        for user in &users {
            greenhouses.extend(services.greenhouses.get_by_user(user.id).await?);
        }
        Ok((greenhouses, users))
    }
}
