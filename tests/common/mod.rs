//! In-process stand-in for the greenhouse API.
//!
//! Serves users, greenhouses, plants and sensors from memory on an ephemeral
//! port and records every request as `"METHOD /path"` (and, separately, with
//! its query string) so tests can assert on exactly which calls a page made.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

use greenhouse_console::api::ApiClient;
use greenhouse_console::config::Config;
use greenhouse_console::services::Services;
use greenhouse_console::session::SessionUser;

pub const PASSWORD: &str = "secret";
const CREATED_AT: &str = "2024-03-01T10:00:00";

#[derive(Default)]
struct Store {
    users: Vec<Value>,
    greenhouses: Vec<Value>,
    plants: Vec<Value>,
    sensors: Vec<Value>,
    readings: Vec<Value>,
    next_id: i64,
    requests: Vec<String>,
    requests_with_query: Vec<String>,
    failures: HashMap<String, (StatusCode, Value)>,
}

impl Store {
    fn collection(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        match name {
            "users" => Some(&mut self.users),
            "greenhouses" => Some(&mut self.greenhouses),
            "plants" => Some(&mut self.plants),
            "sensors" => Some(&mut self.sensors),
            "sensor-readings" => Some(&mut self.readings),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct MockBackend {
    store: Arc<Mutex<Store>>,
    pub url: String,
}

impl MockBackend {
    pub async fn start() -> Self {
        let store = Arc::new(Mutex::new(Store {
            next_id: 100,
            ..Store::default()
        }));
        let app = Router::new().fallback(handle).with_state(store.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { store, url }
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.url.clone(),
            api_timeout_ms: 2_000,
            ..Config::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config()).unwrap()
    }

    pub fn services(&self) -> Services {
        Services::new(self.client())
    }

    pub fn add_user(&self, id: i64, username: &str) -> SessionUser {
        self.store.lock().unwrap().users.push(json!({
            "id": id,
            "username": username,
            "created_at": CREATED_AT,
        }));
        SessionUser {
            id,
            username: username.to_string(),
        }
    }

    pub fn add_greenhouse(&self, id: i64, name: &str, user_id: i64) {
        self.store.lock().unwrap().greenhouses.push(json!({
            "id": id,
            "name": name,
            "location": null,
            "user_id": user_id,
            "created_at": CREATED_AT,
        }));
    }

    pub fn add_plant(&self, id: i64, name: &str, plant_type: &str, greenhouse_id: i64) {
        self.store.lock().unwrap().plants.push(json!({
            "id": id,
            "name": name,
            "type": plant_type,
            "greenhouse_id": greenhouse_id,
            "created_at": CREATED_AT,
        }));
    }

    pub fn add_sensor(&self, id: i64, name: &str, greenhouse_id: i64, active: bool) {
        self.store.lock().unwrap().sensors.push(json!({
            "id": id,
            "name": name,
            "type": "temperatura",
            "greenhouse_id": greenhouse_id,
            "active": active,
            "installed_at": CREATED_AT,
        }));
    }

    pub fn add_reading(&self, id: i64, sensor_id: i64, value: f64) {
        self.store.lock().unwrap().readings.push(json!({
            "id": id,
            "sensor_id": sensor_id,
            "value": value,
            "recorded_at": CREATED_AT,
        }));
    }

    /// Make `"METHOD /path"` answer with `status` and `body` from now on.
    pub fn fail(&self, request: &str, status: StatusCode, body: Value) {
        self.store
            .lock()
            .unwrap()
            .failures
            .insert(request.to_string(), (status, body));
    }

    pub fn requests(&self) -> Vec<String> {
        self.store.lock().unwrap().requests.clone()
    }

    /// Requests as `"METHOD /path?query"`, query exactly as sent.
    pub fn requests_with_query(&self) -> Vec<String> {
        self.store.lock().unwrap().requests_with_query.clone()
    }

    pub fn count(&self, request: &str) -> usize {
        self.requests().iter().filter(|r| *r == request).count()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.starts_with(prefix))
            .count()
    }

    pub fn clear_requests(&self) {
        let mut store = self.store.lock().unwrap();
        store.requests.clear();
        store.requests_with_query.clear();
    }

    pub fn sensors(&self) -> Vec<Value> {
        self.store.lock().unwrap().sensors.clone()
    }

    pub fn greenhouses(&self) -> Vec<Value> {
        self.store.lock().unwrap().greenhouses.clone()
    }
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": format!("{what} no encontrado") })),
    )
        .into_response()
}

fn label(collection: &str) -> &'static str {
    match collection {
        "users" => "Usuario",
        "greenhouses" => "Invernadero",
        "plants" => "Planta",
        _ => "Sensor",
    }
}

async fn handle(
    State(store): State<Arc<Mutex<Store>>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let query: HashMap<String, String> =
        serde_urlencoded::from_str(uri.query().unwrap_or_default()).unwrap_or_default();
    let key = format!("{method} {path}");
    let full = uri
        .query()
        .map_or_else(|| key.clone(), |q| format!("{key}?{q}"));

    if path == "/slow" {
        tokio::time::sleep(Duration::from_millis(500)).await;
        return Json(json!([])).into_response();
    }

    let mut store = store.lock().unwrap();
    store.requests.push(key.clone());
    store.requests_with_query.push(full);
    if let Some((status, body)) = store.failures.get(&key) {
        return (*status, Json(body.clone())).into_response();
    }

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    match (method, segments.as_slice()) {
        (Method::POST, ["users", "login"]) => {
            let username = payload["username"].as_str().unwrap_or_default();
            let found = store
                .users
                .iter()
                .find(|u| u["username"] == username)
                .cloned();
            match found {
                Some(user) if payload["password"] == PASSWORD => Json(json!({
                    "message": "Login exitoso",
                    "user_id": user["id"],
                    "username": user["username"],
                }))
                .into_response(),
                _ => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "detail": "Usuario o contraseña incorrectos" })),
                )
                    .into_response(),
            }
        }

        (Method::GET, ["greenhouses", "user", user_id]) => {
            let user_id: i64 = user_id.parse().unwrap_or_default();
            let owned: Vec<Value> = store
                .greenhouses
                .iter()
                .filter(|g| g["user_id"] == user_id)
                .cloned()
                .collect();
            Json(owned).into_response()
        }

        (Method::GET, [collection @ ("plants" | "sensors"), "greenhouse", greenhouse_id]) => {
            let greenhouse_id: i64 = greenhouse_id.parse().unwrap_or_default();
            let active_only = query.get("active_only").is_some_and(|v| v == "true");
            let items: Vec<Value> = store
                .collection(collection)
                .map(|items| {
                    items
                        .iter()
                        .filter(|i| i["greenhouse_id"] == greenhouse_id)
                        .filter(|i| !active_only || i["active"] == true)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            Json(items).into_response()
        }

        (Method::GET, ["sensor-readings", "sensor", sensor_id]) => {
            let sensor_id: i64 = sensor_id.parse().unwrap_or_default();
            let skip: usize = query.get("skip").and_then(|v| v.parse().ok()).unwrap_or(0);
            let limit: usize = query.get("limit").and_then(|v| v.parse().ok()).unwrap_or(100);
            let items: Vec<Value> = store
                .readings
                .iter()
                .filter(|r| r["sensor_id"] == sensor_id)
                .skip(skip)
                .take(limit)
                .cloned()
                .collect();
            Json(items).into_response()
        }

        (Method::GET, ["sensor-readings", "sensor", sensor_id, "latest"]) => {
            let sensor_id: i64 = sensor_id.parse().unwrap_or_default();
            let latest = store
                .readings
                .iter()
                .filter(|r| r["sensor_id"] == sensor_id)
                .last()
                .cloned();
            latest.map_or_else(|| not_found("Lectura"), |r| Json(r).into_response())
        }

        (Method::POST, ["sensor-readings", "bulk"]) => {
            let sensor_id = payload["sensor_id"].clone();
            let values = payload["readings"].as_array().cloned().unwrap_or_default();
            let mut created = Vec::new();
            for value in values {
                let id = store.next_id;
                store.next_id += 1;
                let reading = json!({
                    "id": id,
                    "sensor_id": sensor_id,
                    "value": value,
                    "recorded_at": CREATED_AT,
                });
                store.readings.push(reading.clone());
                created.push(reading);
            }
            (StatusCode::CREATED, Json(created)).into_response()
        }

        (Method::GET, ["plants", "search"]) => {
            let name = query.get("name").cloned().unwrap_or_default().to_lowercase();
            let items: Vec<Value> = store
                .plants
                .iter()
                .filter(|p| {
                    p["name"]
                        .as_str()
                        .is_some_and(|n| n.to_lowercase().contains(&name))
                })
                .cloned()
                .collect();
            Json(items).into_response()
        }

        (Method::GET, ["plants", "type", plant_type]) => {
            let items: Vec<Value> = store
                .plants
                .iter()
                .filter(|p| p["type"] == *plant_type)
                .cloned()
                .collect();
            Json(items).into_response()
        }

        (Method::GET, [collection]) => match store.collection(collection) {
            Some(items) => Json(items.clone()).into_response(),
            None => not_found("Recurso"),
        },

        (Method::GET, [collection, id]) => {
            let id: i64 = id.parse().unwrap_or_default();
            let found = store
                .collection(collection)
                .and_then(|items| items.iter().find(|i| i["id"] == id).cloned());
            found.map_or_else(|| not_found(label(collection)), |v| Json(v).into_response())
        }

        (Method::POST, [collection]) => {
            let id = store.next_id;
            store.next_id += 1;

            let mut record: Map<String, Value> = payload.as_object().cloned().unwrap_or_default();
            record.insert("id".to_string(), json!(id));
            match *collection {
                "users" => {
                    record.remove("password");
                    record.insert("created_at".to_string(), json!(CREATED_AT));
                }
                "greenhouses" => {
                    let owner: i64 = query
                        .get("user_id")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or_default();
                    record.insert("user_id".to_string(), json!(owner));
                    record.entry("location").or_insert(Value::Null);
                    record.insert("created_at".to_string(), json!(CREATED_AT));
                }
                "sensors" => {
                    record.entry("active").or_insert(json!(true));
                    record.insert("installed_at".to_string(), json!(CREATED_AT));
                }
                "sensor-readings" => {
                    record.insert("recorded_at".to_string(), json!(CREATED_AT));
                }
                _ => {
                    record.insert("created_at".to_string(), json!(CREATED_AT));
                }
            }

            let record = Value::Object(record);
            match store.collection(collection) {
                Some(items) => {
                    items.push(record.clone());
                    (StatusCode::CREATED, Json(record)).into_response()
                }
                None => not_found("Recurso"),
            }
        }

        (Method::PATCH, [collection, id]) => {
            let id: i64 = id.parse().unwrap_or_default();
            let updated = store.collection(collection).and_then(|items| {
                let item = items.iter_mut().find(|i| i["id"] == id)?;
                if let (Some(target), Some(changes)) = (item.as_object_mut(), payload.as_object()) {
                    for (k, v) in changes {
                        if k != "password" {
                            target.insert(k.clone(), v.clone());
                        }
                    }
                }
                Some(item.clone())
            });
            updated.map_or_else(|| not_found(label(collection)), |v| Json(v).into_response())
        }

        (Method::DELETE, [collection, id]) => {
            let id: i64 = id.parse().unwrap_or_default();
            let removed = store.collection(collection).is_some_and(|items| {
                let before = items.len();
                items.retain(|i| i["id"] != id);
                items.len() < before
            });
            if removed {
                StatusCode::NO_CONTENT.into_response()
            } else {
                not_found(label(collection))
            }
        }

        _ => not_found("Recurso"),
    }
}
