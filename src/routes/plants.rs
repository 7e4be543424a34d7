use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};

use crate::common::AppState;
use crate::pages::plants::{PlantFilter, PlantForm, PlantsController};
use crate::pages::ViewQuery;
use crate::session::CurrentUser;
use crate::views;

use super::context;

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<PlantFilter>,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let page = PlantsController::new(context(&state, &user))
        .show(filter, &query)
        .await;
    Html(views::plants::render(&page, &user))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<PlantFilter>,
    Form(form): Form<PlantForm>,
) -> Html<String> {
    let page = PlantsController::new(context(&state, &user))
        .create(filter, form)
        .await;
    Html(views::plants::render(&page, &user))
}

pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<PlantFilter>,
    Path(id): Path<i64>,
    Form(form): Form<PlantForm>,
) -> Html<String> {
    let page = PlantsController::new(context(&state, &user))
        .update(filter, id, form)
        .await;
    Html(views::plants::render(&page, &user))
}

pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<PlantFilter>,
    Path(id): Path<i64>,
) -> Html<String> {
    let page = PlantsController::new(context(&state, &user))
        .delete(filter, id)
        .await;
    Html(views::plants::render(&page, &user))
}
