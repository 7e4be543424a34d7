use axum::{extract::State, response::Html};

use crate::common::AppState;
use crate::pages::dashboard::DashboardController;
use crate::session::CurrentUser;
use crate::views;

use super::context;

pub async fn show(State(state): State<AppState>, CurrentUser(user): CurrentUser) -> Html<String> {
    let page = DashboardController::new(context(&state, &user)).show().await;
    Html(views::dashboard::render(&page))
}
