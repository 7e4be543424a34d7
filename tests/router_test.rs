//! End-to-end tests through the console router: session gate, login and
//! form posts, with the greenhouse API mocked in-process.
//!
//! Run with: cargo test --test router_test

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use common::{MockBackend, PASSWORD};
use greenhouse_console::common::AppState;
use greenhouse_console::routes::build_router;
use greenhouse_console::session::SESSION_COOKIE_NAME;

async fn app() -> (MockBackend, Router) {
    let mock = MockBackend::start().await;
    mock.add_user(1, "ana");
    mock.add_greenhouse(1, "Norte", 1);
    mock.add_sensor(10, "Termómetro", 1, true);
    let state = AppState::new(mock.config(), mock.client());
    (mock, build_router(state))
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

/// Sign in as `ana` and return the `name=value` cookie pair.
async fn sign_in(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_form(
            "/login",
            None,
            &format!("username=ana&password={PASSWORD}"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with(SESSION_COOKIE_NAME));
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn protected_pages_redirect_to_login() {
    let (_mock, app) = app().await;

    for uri in ["/dashboard", "/users", "/greenhouses/1", "/plants", "/sensors"] {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/login");
    }

    let stale = format!("{SESSION_COOKIE_NAME}=00000000-0000-0000-0000-000000000000");
    let response = app.clone().oneshot(get("/sensors", Some(&stale))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn login_then_browse_then_logout() {
    let (_mock, app) = app().await;
    let cookie = sign_in(&app).await;

    let response = app.clone().oneshot(get("/sensors", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Termómetro"));
    assert!(html.contains("<td>Norte</td>"));

    let response = app.clone().oneshot(get("/login", Some(&cookie))).await.unwrap();
    assert_eq!(location(&response), "/dashboard");

    let response = app
        .clone()
        .oneshot(post_form("/logout", Some(&cookie), ""))
        .await
        .unwrap();
    assert_eq!(location(&response), "/login");
    let cleared = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cleared.contains("Max-Age=0"));

    let response = app.clone().oneshot(get("/dashboard", Some(&cookie))).await.unwrap();
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn wrong_password_rerenders_login_with_detail() {
    let (_mock, app) = app().await;

    let response = app
        .clone()
        .oneshot(post_form("/login", None, "username=ana&password=nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let html = body_text(response).await;
    assert!(html.contains("Usuario o contraseña incorrectos"));
    assert!(html.contains(r#"value="ana""#));
}

#[tokio::test]
async fn empty_credentials_skip_the_backend() {
    let (mock, app) = app().await;

    let response = app
        .clone()
        .oneshot(post_form("/login", None, "username=&password="))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Ingresa usuario y contraseña"));
    assert_eq!(mock.count("POST /users/login"), 0);
}

#[tokio::test]
async fn toggle_form_posts_through_router() {
    let (mock, app) = app().await;
    let cookie = sign_in(&app).await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/sensors/10/toggle?active_only=true",
            Some(&cookie),
            "active=true",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Sensor desactivado"));
    assert!(html.contains("No hay datos disponibles"));
    assert_eq!(mock.sensors()[0]["active"], false);
}

#[tokio::test]
async fn open_routes() {
    let (_mock, app) = app().await;

    let response = app.clone().oneshot(get("/healthz", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/no-such-page", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));

    let response = app.clone().oneshot(get("/", None)).await.unwrap();
    assert_eq!(location(&response), "/dashboard");
}
