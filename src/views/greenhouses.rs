use crate::api::models::{Greenhouse, Plant, Sensor};
use crate::pages::greenhouse_detail::GreenhouseDetailPage;
use crate::pages::greenhouses::GreenhousesPage;
use crate::pages::{Modal, resolve_name};
use crate::session::SessionUser;

use super::{
    Column, badge, banners, card, confirm, escape, header, hidden_fields, input, layout,
    link_button, modal, select, table,
};

#[must_use]
pub fn render(page: &GreenhousesPage, user: &SessionUser) -> String {
    let mut content = header(
        "Invernaderos",
        "Gestiona los invernaderos",
        Some(("+ Nuevo Invernadero", "/greenhouses?modal=create")),
    );

    content.push_str(&banners(&page.view.flash, "/greenhouses"));

    if let Some(id) = page.view.confirm_delete {
        let owner = page
            .greenhouses
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.user_id.to_string())
            .unwrap_or_default();
        content.push_str(&confirm(
            "¿Estás seguro de eliminar este invernadero?",
            &format!("/greenhouses/{id}/delete"),
            "/greenhouses",
            &[("user_id", &owner)],
        ));
    }

    if page.view.modal.is_open() {
        content.push_str(&form_modal(page));
    }

    let columns: Vec<Column<'_, Greenhouse>> = vec![
        Column::text("ID", |g: &Greenhouse| g.id.to_string()),
        Column::new("Nombre", |g: &Greenhouse| {
            format!(r#"<a href="/greenhouses/{}">{}</a>"#, g.id, escape(&g.name))
        }),
        Column::text("Ubicación", |g: &Greenhouse| g.location.clone().unwrap_or_default()),
        Column::text("Propietario", |g: &Greenhouse| resolve_name(&page.users, g.user_id)),
        Column::text("Creado", |g: &Greenhouse| g.created_at.date_label()),
        Column::new("Acciones", |g: &Greenhouse| {
            format!(
                r#"<div class="actions">{}{}{}</div>"#,
                link_button("Ver", &format!("/greenhouses/{}", g.id), "btn-info"),
                link_button("Editar", &format!("/greenhouses?edit={}", g.id), "btn-warning"),
                link_button(
                    "Eliminar",
                    &format!("/greenhouses?confirm_delete={}", g.id),
                    "btn-error"
                ),
            )
        }),
    ];
    content.push_str(&format!(
        r#"<div class="card">{}</div>"#,
        table(&page.greenhouses, &columns, "No hay datos disponibles")
    ));

    layout("Invernaderos", user, &content)
}

fn form_modal(page: &GreenhousesPage) -> String {
    let form = &page.view.form;

    let mut fields = input("Nombre", "name", "text", &form.name, "Ej: Invernadero Norte");
    fields.push_str(&input(
        "Ubicación (opcional)",
        "location",
        "text",
        &form.location,
        "Ej: Sector A, Parcela 3",
    ));

    let (title, action, confirm_text) = match page.view.modal {
        Modal::Edit(id) => {
            fields.push_str(&hidden_fields(&[("user_id", &form.user_id)]));
            ("Editar Invernadero", format!("/greenhouses/{id}"), "Actualizar")
        }
        _ => {
            let owners: Vec<(String, String)> = page
                .users
                .iter()
                .map(|u| (u.id.to_string(), u.username.clone()))
                .collect();
            fields.push_str(&select(
                "Propietario",
                "user_id",
                &owners,
                &form.user_id,
                "Selecciona un propietario",
            ));
            ("Crear Nuevo Invernadero", "/greenhouses".to_string(), "Crear")
        }
    };

    modal(title, &action, &fields, confirm_text, "/greenhouses")
}

#[must_use]
pub fn render_detail(page: &GreenhouseDetailPage, user: &SessionUser) -> String {
    let Some(greenhouse) = &page.greenhouse else {
        let content = format!(
            r#"{}<a class="btn" href="/greenhouses">Volver a Invernaderos</a>"#,
            banners(&page.flash, "/greenhouses"),
        );
        return layout("Invernadero", user, &content);
    };

    let mut content = header(
        &greenhouse.name,
        greenhouse.location.as_deref().unwrap_or("Sin ubicación"),
        Some(("← Volver", "/greenhouses")),
    );

    content.push_str(&format!(
        r#"<div class="stats">
    <div class="card"><p class="subtitle">Creado</p><p class="stat-value">{}</p></div>
    <div class="card"><p class="subtitle">Plantas</p><p class="stat-value">{}</p></div>
    <div class="card"><p class="subtitle">Sensores activos</p><p class="stat-value">{}</p></div>
</div>"#,
        greenhouse.created_at.date_label(),
        page.plants.len(),
        page.active_sensors(),
    ));

    let plant_columns: Vec<Column<'_, Plant>> = vec![
        Column::text("ID", |p: &Plant| p.id.to_string()),
        Column::text("Nombre", |p: &Plant| p.name.clone()),
        Column::text("Tipo", |p: &Plant| p.plant_type.label().to_string()),
        Column::text("Creado", |p: &Plant| p.created_at.date_label()),
    ];
    content.push_str(&card(
        "Plantas",
        &format!(
            "{}{}",
            link_button("+ Agregar Planta", "/plants?modal=create", "btn-primary"),
            table(&page.plants, &plant_columns, "No hay plantas en este invernadero"),
        ),
    ));

    let sensor_columns: Vec<Column<'_, Sensor>> = vec![
        Column::text("ID", |s: &Sensor| s.id.to_string()),
        Column::text("Nombre", |s: &Sensor| s.name.clone()),
        Column::text("Tipo", |s: &Sensor| s.sensor_type.label().to_string()),
        Column::new("Estado", |s: &Sensor| {
            badge(s.active, if s.active { "Activo" } else { "Inactivo" })
        }),
        Column::text("Instalado", |s: &Sensor| s.installed_at.date_label()),
    ];
    content.push_str(&card(
        "Sensores",
        &format!(
            "{}{}",
            link_button("+ Agregar Sensor", "/sensors?modal=create", "btn-primary"),
            table(&page.sensors, &sensor_columns, "No hay sensores en este invernadero"),
        ),
    ));

    layout(&greenhouse.name, user, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Timestamp;
    use crate::pages::ListView;
    use crate::pages::greenhouses::GreenhouseForm;
    use chrono::Utc;

    fn greenhouse(id: i64, user_id: i64) -> Greenhouse {
        Greenhouse {
            id,
            name: "Norte".to_string(),
            location: None,
            user_id,
            created_at: Timestamp(Utc::now()),
        }
    }

    fn operator() -> SessionUser {
        SessionUser {
            id: 1,
            username: "ana".to_string(),
        }
    }

    #[test]
    fn delete_confirmation_carries_the_row_owner() {
        let page = GreenhousesPage {
            greenhouses: vec![greenhouse(5, 2)],
            view: ListView {
                confirm_delete: Some(5),
                ..ListView::default()
            },
            ..GreenhousesPage::default()
        };
        let html = render(&page, &operator());
        assert!(html.contains(r#"action="/greenhouses/5/delete""#));
        assert!(html.contains(r#"<input type="hidden" name="user_id" value="2">"#));
    }

    #[test]
    fn edit_modal_posts_owner_without_select() {
        let row = greenhouse(5, 2);
        let page = GreenhousesPage {
            greenhouses: vec![row.clone()],
            view: ListView {
                modal: Modal::Edit(5),
                form: GreenhouseForm::from_greenhouse(&row),
                ..ListView::default()
            },
            ..GreenhousesPage::default()
        };
        let html = render(&page, &operator());
        assert!(html.contains(r#"<input type="hidden" name="user_id" value="2">"#));
        assert!(!html.contains("<select name=\"user_id\">"));
    }
}
