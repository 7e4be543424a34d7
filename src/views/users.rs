use crate::api::models::User;
use crate::pages::Modal;
use crate::pages::users::UsersPage;
use crate::session::SessionUser;

use super::{Column, banners, confirm, header, input, layout, link_button, modal, table};

#[must_use]
pub fn render(page: &UsersPage, user: &SessionUser) -> String {
    let mut content = header(
        "Usuarios",
        "Gestiona los usuarios del sistema",
        Some(("+ Nuevo Usuario", "/users?modal=create")),
    );

    content.push_str(&banners(&page.view.flash, "/users"));

    if let Some(id) = page.view.confirm_delete {
        content.push_str(&confirm(
            "¿Estás seguro de eliminar este usuario?",
            &format!("/users/{id}/delete"),
            "/users",
            &[],
        ));
    }

    if page.view.modal.is_open() {
        let form = &page.view.form;
        let mut fields = input("Usuario", "username", "text", &form.username, "Ej: juan");
        let (title, action, confirm_text, password_label) = match page.view.modal {
            Modal::Edit(id) => (
                "Editar Usuario",
                format!("/users/{id}"),
                "Actualizar",
                "Nueva contraseña (opcional)",
            ),
            _ => ("Crear Nuevo Usuario", "/users".to_string(), "Crear", "Contraseña"),
        };
        fields.push_str(&input(password_label, "password", "password", "", "••••••••"));
        content.push_str(&modal(title, &action, &fields, confirm_text, "/users"));
    }

    let columns: Vec<Column<'_, User>> = vec![
        Column::text("ID", |u: &User| u.id.to_string()),
        Column::text("Usuario", |u: &User| u.username.clone()),
        Column::text("Creado", |u: &User| {
            u.created_at
                .map_or_else(|| "N/A".to_string(), |ts| ts.date_label())
        }),
        Column::new("Acciones", |u: &User| {
            format!(
                r#"<div class="actions">{}{}</div>"#,
                link_button("Editar", &format!("/users?edit={}", u.id), "btn-warning"),
                link_button("Eliminar", &format!("/users?confirm_delete={}", u.id), "btn-error"),
            )
        }),
    ];
    content.push_str(&format!(
        r#"<div class="card">{}</div>"#,
        table(&page.users, &columns, "No hay datos disponibles")
    ));

    layout("Usuarios", user, &content)
}
