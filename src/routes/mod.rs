pub mod auth;
pub mod dashboard;
pub mod greenhouses;
pub mod health;
pub mod plants;
pub mod sensors;
pub mod users;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::common::AppState;
use crate::pages::PageContext;
use crate::session::SessionUser;
use crate::views;

/// Controller context for the signed-in operator.
fn context<'a>(state: &'a AppState, user: &'a SessionUser) -> PageContext<'a> {
    PageContext::new(&state.services, user, state.config.page_size)
}

pub fn build_router(state: AppState) -> Router {
    tracing::info!(
        api_url = %state.config.api_url,
        page_size = state.config.page_size,
        "Building console router"
    );

    let console_routes = Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::show))
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", post(users::update))
        .route("/users/{id}/delete", post(users::delete))
        .route(
            "/greenhouses",
            get(greenhouses::list).post(greenhouses::create),
        )
        .route(
            "/greenhouses/{id}",
            get(greenhouses::detail).post(greenhouses::update),
        )
        .route("/greenhouses/{id}/delete", post(greenhouses::delete))
        .route("/plants", get(plants::list).post(plants::create))
        .route("/plants/{id}", post(plants::update))
        .route("/plants/{id}/delete", post(plants::delete))
        .route("/sensors", get(sensors::list).post(sensors::create))
        .route("/sensors/{id}", post(sensors::update))
        .route("/sensors/{id}/delete", post(sensors::delete))
        .route("/sensors/{id}/toggle", post(sensors::toggle))
        .layer(RequestBodyLimitLayer::new(64 * 1024)); // forms only

    // Health check stays outside the body limit and session gate
    let health_routes = Router::new().route("/healthz", get(health::healthz));

    Router::new()
        .merge(console_routes)
        .merge(health_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found()))
}
