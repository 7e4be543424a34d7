use crate::error::ApiResult;
use crate::session::SessionUser;

use super::PageContext;

/// One summary card. `value` is `None` when its fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: Option<usize>,
    pub detail: Option<String>,
    pub link: &'static str,
}

#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub user: SessionUser,
    pub cards: Vec<StatCard>,
}

pub struct DashboardController<'a> {
    ctx: PageContext<'a>,
}

impl<'a> DashboardController<'a> {
    #[must_use]
    pub fn new(ctx: PageContext<'a>) -> Self {
        Self { ctx }
    }

    /// Each card is fetched on its own; one failing does not blank the others.
    pub async fn show(&self) -> DashboardPage {
        let services = self.ctx.services;
        let pagination = self.ctx.pagination();

        let users = services.users.get_all().await.map(|u| u.len());
        let greenhouses = services.greenhouses.get_by_user(self.ctx.user.id).await;
        let plants = services.plants.get_all(pagination).await.map(|p| p.len());
        let sensors = match &greenhouses {
            Ok(list) => self.count_sensors(list.iter().map(|g| g.id)).await.ok(),
            Err(_) => None,
        };

        let cards = vec![
            StatCard {
                title: "Usuarios",
                value: users.ok(),
                detail: None,
                link: "/users",
            },
            StatCard {
                title: "Invernaderos",
                value: greenhouses.as_ref().ok().map(Vec::len),
                detail: None,
                link: "/greenhouses",
            },
            StatCard {
                title: "Plantas",
                value: plants.ok(),
                detail: None,
                link: "/plants",
            },
            StatCard {
                title: "Sensores",
                value: sensors.map(|(total, _)| total),
                detail: sensors.map(|(_, active)| format!("{active} activos")),
                link: "/sensors",
            },
        ];

        DashboardPage {
            user: self.ctx.user.clone(),
            cards,
        }
    }

    /// `(total, active)` across the given greenhouses.
    async fn count_sensors(&self, greenhouse_ids: impl Iterator<Item = i64>) -> ApiResult<(usize, usize)> {
        let mut total = 0;
        let mut active = 0;
        for id in greenhouse_ids {
            let sensors = self
                .ctx
                .services
                .sensors
                .get_by_greenhouse(id, false, self.ctx.pagination())
                .await?;
            total += sensors.len();
            active += sensors.iter().filter(|s| s.active).count();
        }
        Ok((total, active))
    }
}
