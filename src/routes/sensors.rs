use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};

use crate::common::AppState;
use crate::pages::sensors::{SensorFilter, SensorForm, SensorsController, ToggleForm};
use crate::pages::ViewQuery;
use crate::session::CurrentUser;
use crate::views;

use super::context;

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<SensorFilter>,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let page = SensorsController::new(context(&state, &user))
        .show(filter, &query)
        .await;
    Html(views::sensors::render(&page, &user))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<SensorFilter>,
    Form(form): Form<SensorForm>,
) -> Html<String> {
    let page = SensorsController::new(context(&state, &user))
        .create(filter, form)
        .await;
    Html(views::sensors::render(&page, &user))
}

pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<SensorFilter>,
    Path(id): Path<i64>,
    Form(form): Form<SensorForm>,
) -> Html<String> {
    let page = SensorsController::new(context(&state, &user))
        .update(filter, id, form)
        .await;
    Html(views::sensors::render(&page, &user))
}

pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<SensorFilter>,
    Path(id): Path<i64>,
) -> Html<String> {
    let page = SensorsController::new(context(&state, &user))
        .delete(filter, id)
        .await;
    Html(views::sensors::render(&page, &user))
}

/// Flip `active`. The form carries the state shown on the button's row.
pub async fn toggle(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<SensorFilter>,
    Path(id): Path<i64>,
    Form(toggle): Form<ToggleForm>,
) -> Html<String> {
    let page = SensorsController::new(context(&state, &user))
        .toggle(filter, id, toggle.active)
        .await;
    Html(views::sensors::render(&page, &user))
}
