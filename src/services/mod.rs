//! One service per backend resource. Every method performs exactly one HTTP
//! call and returns the parsed payload unchanged.

pub mod auth;
pub mod greenhouses;
pub mod plants;
pub mod readings;
pub mod sensors;
pub mod users;

pub use auth::AuthService;
pub use greenhouses::GreenhousesService;
pub use plants::PlantsService;
pub use readings::SensorReadingsService;
pub use sensors::SensorsService;
pub use users::UsersService;

use crate::api::ApiClient;

/// All services over one shared transport.
#[derive(Debug, Clone)]
pub struct Services {
    pub auth: AuthService,
    pub users: UsersService,
    pub greenhouses: GreenhousesService,
    pub plants: PlantsService,
    pub sensors: SensorsService,
    pub readings: SensorReadingsService,
}

impl Services {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            users: UsersService::new(client.clone()),
            greenhouses: GreenhousesService::new(client.clone()),
            plants: PlantsService::new(client.clone()),
            sensors: SensorsService::new(client.clone()),
            readings: SensorReadingsService::new(client),
        }
    }
}

/// `user_id` query parameter carried by every mutation.
fn owner(user_id: i64) -> [(&'static str, String); 1] {
    [("user_id", user_id.to_string())]
}
