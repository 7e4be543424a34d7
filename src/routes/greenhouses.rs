use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};

use crate::common::AppState;
use crate::pages::greenhouse_detail::GreenhouseDetailController;
use crate::pages::greenhouses::{DeleteForm, GreenhouseForm, GreenhousesController};
use crate::pages::ViewQuery;
use crate::session::CurrentUser;
use crate::views;

use super::context;

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let page = GreenhousesController::new(context(&state, &user))
        .show(&query)
        .await;
    Html(views::greenhouses::render(&page, &user))
}

/// Read-only page for one greenhouse with its plants and sensors.
pub async fn detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Html<String> {
    let page = GreenhouseDetailController::new(context(&state, &user))
        .show(id)
        .await;
    Html(views::greenhouses::render_detail(&page, &user))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<GreenhouseForm>,
) -> Html<String> {
    let page = GreenhousesController::new(context(&state, &user))
        .create(form)
        .await;
    Html(views::greenhouses::render(&page, &user))
}

pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Form(form): Form<GreenhouseForm>,
) -> Html<String> {
    let page = GreenhousesController::new(context(&state, &user))
        .update(id, form)
        .await;
    Html(views::greenhouses::render(&page, &user))
}

pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> Html<String> {
    let page = GreenhousesController::new(context(&state, &user))
        .delete(id, form)
        .await;
    Html(views::greenhouses::render(&page, &user))
}
