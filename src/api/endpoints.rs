//! Paths of the greenhouse API, relative to the configured base URL.

pub const LOGIN: &str = "/users/login";

pub mod users {
    pub const BASE: &str = "/users";

    #[must_use]
    pub fn by_id(id: i64) -> String {
        format!("{BASE}/{id}")
    }
}

pub mod greenhouses {
    pub const BASE: &str = "/greenhouses";

    #[must_use]
    pub fn by_id(id: i64) -> String {
        format!("{BASE}/{id}")
    }

    #[must_use]
    pub fn by_user(user_id: i64) -> String {
        format!("{BASE}/user/{user_id}")
    }
}

pub mod plants {
    pub const BASE: &str = "/plants";
    pub const SEARCH: &str = "/plants/search";

    #[must_use]
    pub fn by_id(id: i64) -> String {
        format!("{BASE}/{id}")
    }

    #[must_use]
    pub fn by_greenhouse(greenhouse_id: i64) -> String {
        format!("{BASE}/greenhouse/{greenhouse_id}")
    }

    #[must_use]
    pub fn by_type(plant_type: &str) -> String {
        format!("{BASE}/type/{plant_type}")
    }
}

pub mod sensors {
    pub const BASE: &str = "/sensors";

    #[must_use]
    pub fn by_id(id: i64) -> String {
        format!("{BASE}/{id}")
    }

    #[must_use]
    pub fn by_greenhouse(greenhouse_id: i64) -> String {
        format!("{BASE}/greenhouse/{greenhouse_id}")
    }
}

pub mod sensor_readings {
    pub const BASE: &str = "/sensor-readings";
    pub const BULK: &str = "/sensor-readings/bulk";

    #[must_use]
    pub fn by_sensor(sensor_id: i64) -> String {
        format!("{BASE}/sensor/{sensor_id}")
    }

    #[must_use]
    pub fn latest(sensor_id: i64) -> String {
        format!("{BASE}/sensor/{sensor_id}/latest")
    }
}
