use serde::Deserialize;

use crate::api::models::UserLogin;
use crate::services::Services;
use crate::session::SessionUser;

use super::{Flash, required};

pub const LOGIN_FAILED: &str = "Credenciales inválidas";
pub const MISSING_CREDENTIALS: &str = "Ingresa usuario y contraseña";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub username: String,
    pub flash: Flash,
}

/// Check credentials with the backend. On failure the page to re-render,
/// keeping the username.
pub async fn authenticate(services: &Services, form: LoginForm) -> Result<SessionUser, LoginPage> {
    let mut page = LoginPage {
        username: form.username.trim().to_string(),
        flash: Flash::default(),
    };

    if !required(&[&form.username, &form.password]) {
        page.flash.error(MISSING_CREDENTIALS);
        return Err(page);
    }

    let credentials = UserLogin {
        username: form.username.trim().to_string(),
        password: form.password,
    };
    match services.auth.login(&credentials).await {
        Ok(response) => Ok(SessionUser {
            id: response.user_id,
            username: response.username,
        }),
        Err(e) => {
            tracing::warn!(username = %credentials.username, "Login rejected");
            page.flash.error(e.banner_message(LOGIN_FAILED));
            Err(page)
        }
    }
}
