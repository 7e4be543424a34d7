use crate::api::models::{Plant, PlantType};
use crate::pages::plants::{PlantFilter, PlantsPage};
use crate::pages::{Modal, resolve_name};
use crate::session::SessionUser;

use super::{
    Column, banners, confirm, escape, header, href, input, layout, link_button, modal, select,
    table,
};

fn plants_href(path: &str, filter: &PlantFilter, extra: &[(&str, &str)]) -> String {
    let mut params = vec![
        ("name", filter.name.as_deref().unwrap_or_default()),
        ("type", filter.plant_type.as_deref().unwrap_or_default()),
    ];
    params.extend_from_slice(extra);
    href(path, &params)
}

fn type_options() -> Vec<(String, String)> {
    PlantType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

#[must_use]
pub fn render(page: &PlantsPage, user: &SessionUser) -> String {
    let filter = &page.filter;
    let base = plants_href("/plants", filter, &[]);
    let mut content = header(
        "Plantas",
        "Gestiona tus plantas",
        Some(("+ Nueva Planta", plants_href("/plants", filter, &[("modal", "create")]).as_str())),
    );

    content.push_str(&banners(&page.view.flash, &base));

    if let Some(id) = page.view.confirm_delete {
        content.push_str(&confirm(
            "¿Estás seguro de eliminar esta planta?",
            &plants_href(&format!("/plants/{id}/delete"), filter, &[]),
            &base,
            &[],
        ));
    }

    if page.view.modal.is_open() {
        content.push_str(&form_modal(page, &base));
    }

    content.push_str(&format!(
        r#"<form class="filters" method="get" action="/plants">
    <input type="text" name="name" value="{}" placeholder="Buscar por nombre">
    {}
    <button class="btn" type="submit">Filtrar</button>
    {}
</form>"#,
        escape(filter.name.as_deref().unwrap_or_default()),
        select(
            "Tipo",
            "type",
            &type_options(),
            filter.plant_type.as_deref().unwrap_or_default(),
            "Todos"
        ),
        link_button("Limpiar", "/plants", ""),
    ));

    let columns: Vec<Column<'_, Plant>> = vec![
        Column::text("ID", |p: &Plant| p.id.to_string()),
        Column::text("Nombre", |p: &Plant| p.name.clone()),
        Column::text("Tipo", |p: &Plant| p.plant_type.label().to_string()),
        Column::text("Invernadero", |p: &Plant| {
            resolve_name(&page.greenhouses, p.greenhouse_id)
        }),
        Column::text("Creado", |p: &Plant| p.created_at.date_label()),
        Column::new("Acciones", |p: &Plant| {
            format!(
                r#"<div class="actions">{}{}</div>"#,
                link_button(
                    "Editar",
                    &plants_href("/plants", filter, &[("edit", &p.id.to_string())]),
                    "btn-warning"
                ),
                link_button(
                    "Eliminar",
                    &plants_href("/plants", filter, &[("confirm_delete", &p.id.to_string())]),
                    "btn-error"
                ),
            )
        }),
    ];
    content.push_str(&format!(
        r#"<div class="card">{}</div>"#,
        table(&page.plants, &columns, "No hay datos disponibles")
    ));

    layout("Plantas", user, &content)
}

fn form_modal(page: &PlantsPage, cancel_href: &str) -> String {
    let form = &page.view.form;

    let mut fields = input("Nombre", "name", "text", &form.name, "Ej: Tomate Cherry");
    fields.push_str(&select(
        "Tipo",
        "type",
        &type_options(),
        &form.plant_type,
        "Selecciona un tipo",
    ));

    let (title, action, confirm_text) = match page.view.modal {
        Modal::Edit(id) => (
            "Editar Planta",
            plants_href(&format!("/plants/{id}"), &page.filter, &[]),
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
            ("Crear Nueva Planta", plants_href("/plants", &page.filter, &[]), "Crear")
        }
    };

    modal(title, &action, &fields, confirm_text, cancel_href)
}
