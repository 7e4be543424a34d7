use crate::api::models::{Sensor, SensorType};
use crate::pages::sensors::{SensorFilter, SensorsPage};
use crate::pages::{Modal, resolve_name};
use crate::session::SessionUser;

use super::{
    Column, badge, banners, checkbox, confirm, header, href, input, layout, link_button,
    modal, post_button, select, table,
};

/// `path` carrying the active-only filter plus `extra` params.
fn sensors_href(path: &str, filter: SensorFilter, extra: &[(&str, &str)]) -> String {
    let mut params = vec![("active_only", if filter.active_only { "true" } else { "" })];
    params.extend_from_slice(extra);
    href(path, &params)
}

#[must_use]
pub fn render(page: &SensorsPage, user: &SessionUser) -> String {
    let filter = page.filter;
    let base = sensors_href("/sensors", filter, &[]);
    let mut content = header(
        "Sensores",
        "Gestiona tus sensores",
        Some(("+ Nuevo Sensor", sensors_href("/sensors", filter, &[("modal", "create")]).as_str())),
    );

    content.push_str(&banners(&page.view.flash, &base));

    if let Some(id) = page.view.confirm_delete {
        content.push_str(&confirm(
            "¿Estás seguro de eliminar este sensor?",
            &sensors_href(&format!("/sensors/{id}/delete"), filter, &[]),
            &base,
            &[],
        ));
    }

    if page.view.modal.is_open() {
        content.push_str(&form_modal(page, &base));
    }

    content.push_str(&format!(
        r#"<div class="filters"><span>Mostrar:</span>{}{}</div>"#,
        link_button("Todos", "/sensors", if filter.active_only { "" } else { "btn-primary" }),
        link_button(
            "Solo activos",
            "/sensors?active_only=true",
            if filter.active_only { "btn-primary" } else { "" }
        ),
    ));

    let columns: Vec<Column<'_, Sensor>> = vec![
        Column::text("ID", |s: &Sensor| s.id.to_string()),
        Column::text("Nombre", |s: &Sensor| s.name.clone()),
        Column::text("Tipo", |s: &Sensor| s.sensor_type.label().to_string()),
        Column::text("Invernadero", |s: &Sensor| {
            resolve_name(&page.greenhouses, s.greenhouse_id)
        }),
        Column::new("Estado", |s: &Sensor| {
            badge(s.active, if s.active { "Activo" } else { "Inactivo" })
        }),
        Column::text("Instalado", |s: &Sensor| s.installed_at.date_label()),
        Column::new("Acciones", |s: &Sensor| {
            format!(
                r#"<div class="actions">{}{}{}</div>"#,
                post_button(
                    if s.active { "Desactivar" } else { "Activar" },
                    &sensors_href(&format!("/sensors/{}/toggle", s.id), filter, &[]),
                    "btn-info",
                    &[("active", if s.active { "true" } else { "false" })],
                ),
                link_button(
                    "Editar",
                    &sensors_href("/sensors", filter, &[("edit", &s.id.to_string())]),
                    "btn-warning"
                ),
                link_button(
                    "Eliminar",
                    &sensors_href("/sensors", filter, &[("confirm_delete", &s.id.to_string())]),
                    "btn-error"
                ),
            )
        }),
    ];
    content.push_str(&format!(
        r#"<div class="card">{}</div>"#,
        table(&page.sensors, &columns, "No hay datos disponibles")
    ));

    layout("Sensores", user, &content)
}

fn form_modal(page: &SensorsPage, cancel_href: &str) -> String {
    let form = &page.view.form;
    let type_options: Vec<(String, String)> = SensorType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect();

    let mut fields = input("Nombre", "name", "text", &form.name, "Ej: Sensor Temperatura 1");
    fields.push_str(&select("Tipo", "type", &type_options, &form.sensor_type, ""));

    let (title, action, confirm_text) = match page.view.modal {
        Modal::Edit(id) => (
            "Editar Sensor",
            sensors_href(&format!("/sensors/{id}"), page.filter, &[]),
            "Actualizar",
        ),
        _ => {
            let greenhouse_options: Vec<(String, String)> = page
                .greenhouses
                .iter()
                .map(|g| (g.id.to_string(), g.name.clone()))
                .collect();
            fields.push_str(&select(
                "Invernadero",
                "greenhouse_id",
                &greenhouse_options,
                &form.greenhouse_id,
                "Selecciona un invernadero",
            ));
            ("Crear Nuevo Sensor", sensors_href("/sensors", page.filter, &[]), "Crear")
        }
    };
    fields.push_str(&checkbox("Sensor activo", "active", form.is_active()));

    modal(title, &action, &fields, confirm_text, cancel_href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Greenhouse, Timestamp};
    use chrono::Utc;

    fn sensor(id: i64, greenhouse_id: i64) -> Sensor {
        Sensor {
            id,
            name: "<b>T1</b>".to_string(),
            sensor_type: SensorType::Temperature,
            greenhouse_id,
            active: true,
            installed_at: Timestamp(Utc::now()),
        }
    }

    #[test]
    fn unknown_greenhouse_shows_raw_id_and_names_are_escaped() {
        let page = SensorsPage {
            sensors: vec![sensor(1, 7), sensor(2, 1)],
            greenhouses: vec![Greenhouse {
                id: 1,
                name: "Norte".to_string(),
                location: None,
                user_id: 1,
                created_at: Timestamp(Utc::now()),
            }],
            ..SensorsPage::default()
        };
        let user = SessionUser {
            id: 1,
            username: "ana".to_string(),
        };
        let html = render(&page, &user);
        assert!(html.contains("<td>ID: 7</td>"));
        assert!(html.contains("<td>Norte</td>"));
        assert!(html.contains("&lt;b&gt;T1&lt;/b&gt;"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn filter_is_kept_in_links() {
        let filter = SensorFilter { active_only: true };
        assert_eq!(
            sensors_href("/sensors", filter, &[("edit", "3")]),
            "/sensors?active_only=true&edit=3"
        );
        assert_eq!(sensors_href("/sensors", SensorFilter::default(), &[]), "/sensors");
    }
}
