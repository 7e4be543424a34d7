use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp as sent by the greenhouse API.
///
/// The backend emits either RFC 3339 (`2025-03-01T10:00:00Z`) or naive
/// ISO-8601 without an offset (`2025-03-01T10:00:00.123456`); naive values are
/// taken as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Date part only, as shown in tables.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

impl TryFrom<String> for Timestamp {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Self(naive.and_utc()))
            .map_err(|e| format!("invalid timestamp {raw:?}: {e}"))
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.0.to_rfc3339()
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

/// Response from `POST /users/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub user_id: i64,
    pub username: String,
}

// ---------------------------------------------------------------------------
// Greenhouses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greenhouse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub user_id: i64,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenhouseCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreenhouseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ---------------------------------------------------------------------------
// Plants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantType {
    #[serde(rename = "tomate")]
    Tomato,
    #[serde(rename = "maiz")]
    Maize,
    #[serde(rename = "papa")]
    Potato,
    #[serde(rename = "uva")]
    Grape,
}

impl PlantType {
    pub const ALL: [Self; 4] = [Self::Tomato, Self::Maize, Self::Potato, Self::Grape];

    /// Value used on the wire and in form fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tomato => "tomate",
            Self::Maize => "maiz",
            Self::Potato => "papa",
            Self::Grape => "uva",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tomato => "Tomate",
            Self::Maize => "Maíz",
            Self::Potato => "Papa",
            Self::Grape => "Uva",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    pub greenhouse_id: i64,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    pub greenhouse_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub plant_type: Option<PlantType>,
}

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    #[serde(rename = "temperatura")]
    Temperature,
    #[serde(rename = "humedad")]
    Humidity,
    #[serde(rename = "luz")]
    Light,
    #[serde(rename = "humo")]
    Smoke,
}

impl SensorType {
    pub const ALL: [Self; 4] = [Self::Temperature, Self::Humidity, Self::Light, Self::Smoke];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperatura",
            Self::Humidity => "humedad",
            Self::Light => "luz",
            Self::Smoke => "humo",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperatura",
            Self::Humidity => "Humedad",
            Self::Light => "Luz",
            Self::Smoke => "Humo",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub greenhouse_id: i64,
    pub active: bool,
    pub installed_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub greenhouse_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sensor_type: Option<SensorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Sensor readings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: i64,
    pub sensor_id: i64,
    pub value: f64,
    pub recorded_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReadingCreate {
    pub sensor_id: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReadingBulkCreate {
    pub sensor_id: i64,
    pub readings: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// `skip`/`limit` query pair accepted by every list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: 0, limit: 100 }
    }
}

impl Pagination {
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self { skip: 0, limit }
    }
}
