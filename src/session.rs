use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use axum::response::Redirect;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::AppState;

pub const SESSION_COOKIE_NAME: &str = "greenhouse_console_session";

/// The signed-in operator. Mutations are sent with this `id` as `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}

/// In-memory sessions keyed by cookie id.
///
/// Nothing is persisted: restarting the console signs everyone out. Sessions
/// carry no backend token and do not expire on their own.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionUser>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sign_in(&self, user: SessionUser) -> Uuid {
        let id = Uuid::new_v4();
        tracing::info!(user_id = user.id, username = %user.username, "Operator signed in");
        self.sessions.write().await.insert(id, user);
        id
    }

    pub async fn current(&self, id: Uuid) -> Option<SessionUser> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn sign_out(&self, id: Uuid) {
        if let Some(user) = self.sessions.write().await.remove(&id) {
            tracing::info!(user_id = user.id, "Operator signed out");
        }
    }
}

/// Session id from the request's `Cookie` header.
#[must_use]
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    cookie_header.split(';').find_map(|cookie| {
        cookie
            .trim()
            .strip_prefix(SESSION_COOKIE_NAME)
            .and_then(|s| s.strip_prefix('='))
            .and_then(|value| value.parse().ok())
    })
}

/// Browser-session cookie: no `Max-Age`, gone when the browser closes.
#[must_use]
pub fn cookie_header(id: Uuid) -> String {
    format!("{SESSION_COOKIE_NAME}={id}; HttpOnly; SameSite=Lax; Path=/")
}

#[must_use]
pub fn clear_cookie_header() -> String {
    format!("{SESSION_COOKIE_NAME}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Gate for protected pages: resolves the signed-in operator or redirects
/// to the login page.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(id) = session_id(&parts.headers) else {
            return Err(Redirect::to("/login"));
        };
        state
            .sessions
            .current(id)
            .await
            .map(CurrentUser)
            .ok_or_else(|| Redirect::to("/login"))
    }
}
