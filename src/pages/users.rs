use serde::Deserialize;

use crate::api::models::{User, UserCreate, UserUpdate};

use super::{ListView, MISSING_FIELDS, Modal, PageContext, ViewQuery, optional_text, required};

pub const LOAD_FAILED: &str = "Error al cargar usuarios";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub username: String,
    /// Required on create; blank on edit keeps the current password.
    #[serde(default)]
    pub password: String,
}

impl UserForm {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            password: String::new(),
        }
    }

    fn to_create(&self) -> Option<UserCreate> {
        required(&[&self.username, &self.password]).then(|| UserCreate {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }

    fn to_update(&self) -> Option<UserUpdate> {
        required(&[&self.username]).then(|| UserUpdate {
            username: Some(self.username.trim().to_string()),
            password: optional_text(&self.password).map(|_| self.password.clone()),
        })
    }

    /// Passwords are never echoed back into a re-rendered form.
    fn without_password(self) -> Self {
        Self {
            password: String::new(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub view: ListView<UserForm>,
}

pub struct UsersController<'a> {
    ctx: PageContext<'a>,
}

impl<'a> UsersController<'a> {
    #[must_use]
    pub fn new(ctx: PageContext<'a>) -> Self {
        Self { ctx }
    }

    pub async fn show(&self, query: &ViewQuery) -> UsersPage {
        let mut page = self.render(ListView::default()).await;
        let users = &page.users;
        page.view.apply(query, UserForm::default(), |id| {
            users.iter().find(|u| u.id == id).map(UserForm::from_user)
        });
        page
    }

    pub async fn create(&self, form: UserForm) -> UsersPage {
        let view = match form.to_create() {
            None => ListView::reopened(Modal::Create, form.without_password(), MISSING_FIELDS),
            Some(payload) => match self.ctx.services.users.create(&payload).await {
                Ok(user) => {
                    tracing::info!(user_id = user.id, username = %user.username, "User created");
                    ListView::succeeded("Usuario creado exitosamente")
                }
                Err(e) => ListView::reopened(
                    Modal::Create,
                    form.without_password(),
                    e.banner_message("Error al crear usuario"),
                ),
            },
        };
        self.render(view).await
    }

    pub async fn update(&self, id: i64, form: UserForm) -> UsersPage {
        let view = match form.to_update() {
            None => ListView::reopened(Modal::Edit(id), form.without_password(), MISSING_FIELDS),
            Some(payload) => match self.ctx.services.users.update(id, &payload).await {
                Ok(_) => {
                    tracing::info!(user_id = id, "User updated");
                    ListView::succeeded("Usuario actualizado exitosamente")
                }
                Err(e) => ListView::reopened(
                    Modal::Edit(id),
                    form.without_password(),
                    e.banner_message("Error al actualizar usuario"),
                ),
            },
        };
        self.render(view).await
    }

    pub async fn delete(&self, id: i64) -> UsersPage {
        let view = match self.ctx.services.users.delete(id).await {
            Ok(()) => {
                tracing::info!(user_id = id, "User deleted");
                ListView::succeeded("Usuario eliminado exitosamente")
            }
            Err(e) => ListView::failed(e.banner_message("Error al eliminar usuario")),
        };
        self.render(view).await
    }

    async fn render(&self, mut view: ListView<UserForm>) -> UsersPage {
        match self.ctx.services.users.get_all().await {
            Ok(users) => UsersPage { users, view },
            Err(_) => {
                if view.flash.error.is_none() {
                    view.flash.error(LOAD_FAILED);
                }
                UsersPage {
                    users: Vec::new(),
                    view,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_password_is_left_out_of_updates() {
        let form = UserForm {
            username: "ana".to_string(),
            password: "  ".to_string(),
        };
        let update = form.to_update().unwrap();
        assert_eq!(update.password, None);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"username": "ana"})
        );
    }

    #[test]
    fn create_needs_both_fields() {
        let form = UserForm {
            username: "ana".to_string(),
            password: String::new(),
        };
        assert!(form.to_create().is_none());
    }
}
