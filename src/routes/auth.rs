use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::common::AppState;
use crate::pages::login::{authenticate, LoginForm, LoginPage};
use crate::session;
use crate::views;

/// Login form. Already signed-in operators go straight to the dashboard.
pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = session::session_id(&headers)
        && state.sessions.current(id).await.is_some()
    {
        return Redirect::to("/dashboard").into_response();
    }
    Html(views::login::render(&LoginPage::default())).into_response()
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match authenticate(&state.services, form).await {
        Ok(user) => {
            let id = state.sessions.sign_in(user).await;
            (
                [(header::SET_COOKIE, session::cookie_header(id))],
                Redirect::to("/dashboard"),
            )
                .into_response()
        }
        Err(page) => Html(views::login::render(&page)).into_response(),
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = session::session_id(&headers) {
        state.sessions.sign_out(id).await;
    }
    (
        [(header::SET_COOKIE, session::clear_cookie_header())],
        Redirect::to("/login"),
    )
        .into_response()
}
