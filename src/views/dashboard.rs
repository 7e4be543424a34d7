use std::fmt::Write;

use crate::pages::dashboard::DashboardPage;

use super::{escape, header, layout, link_button};

#[must_use]
pub fn render(page: &DashboardPage) -> String {
    let mut content = header(
        "Dashboard",
        &format!("Bienvenido, {}", page.user.username),
        None,
    );

    content.push_str(r#"<div class="stats">"#);
    for stat in &page.cards {
        let value = stat
            .value
            .map_or_else(|| "—".to_string(), |v| v.to_string());
        let detail = stat
            .detail
            .as_deref()
            .map(|d| format!(r#"<p class="subtitle">{}</p>"#, escape(d)))
            .unwrap_or_default();
        let _ = write!(
            content,
            r#"<a class="card" href="{}"><p class="subtitle">{}</p><p class="stat-value">{value}</p>{detail}</a>"#,
            stat.link,
            escape(stat.title),
        );
    }
    content.push_str("</div>");

    content.push_str(&format!(
        r#"<div class="card"><h2>Acciones rápidas</h2><div class="actions">{}{}{}{}</div></div>"#,
        link_button("+ Nuevo Usuario", "/users?modal=create", ""),
        link_button("+ Nuevo Invernadero", "/greenhouses?modal=create", ""),
        link_button("+ Nueva Planta", "/plants?modal=create", ""),
        link_button("+ Nuevo Sensor", "/sensors?modal=create", ""),
    ));

    layout("Dashboard", &page.user, &content)
}
