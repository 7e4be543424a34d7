use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};

use crate::common::AppState;
use crate::pages::users::{UserForm, UsersController};
use crate::pages::ViewQuery;
use crate::session::CurrentUser;
use crate::views;

use super::context;

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let page = UsersController::new(context(&state, &user)).show(&query).await;
    Html(views::users::render(&page, &user))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<UserForm>,
) -> Html<String> {
    let page = UsersController::new(context(&state, &user)).create(form).await;
    Html(views::users::render(&page, &user))
}

pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Form(form): Form<UserForm>,
) -> Html<String> {
    let page = UsersController::new(context(&state, &user)).update(id, form).await;
    Html(views::users::render(&page, &user))
}

pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Html<String> {
    let page = UsersController::new(context(&state, &user)).delete(id).await;
    Html(views::users::render(&page, &user))
}
