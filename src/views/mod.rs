//! Server-rendered HTML for the console.
//!
//! Pages are assembled from small building blocks (tables, modals, banners,
//! badges, inputs). Every piece of data coming from the backend goes through
//! [`escape`] before it reaches the markup.

pub mod dashboard;
pub mod greenhouses;
pub mod login;
pub mod plants;
pub mod sensors;
pub mod users;

use std::fmt::Write;

use crate::pages::Flash;
use crate::session::SessionUser;

const STYLE: &str = r"
    :root { --bg: #f8fafc; --surface: #ffffff; --border: #e2e8f0; --text: #1e293b; --muted: #64748b; --accent: #15803d; --error: #b91c1c; --success: #15803d; --warning: #b45309; --info: #0369a1; }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: system-ui, -apple-system, sans-serif; background: var(--bg); color: var(--text); min-height: 100vh; }
    nav { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; background: var(--surface); border-bottom: 1px solid var(--border); }
    nav .brand { font-weight: 600; color: var(--accent); text-decoration: none; }
    .shell { display: flex; }
    aside { width: 200px; padding: 1rem; border-right: 1px solid var(--border); min-height: calc(100vh - 52px); background: var(--surface); }
    aside a { display: block; padding: 0.5rem 0.75rem; color: var(--text); text-decoration: none; border-radius: 0.375rem; }
    aside a:hover { background: var(--bg); color: var(--accent); }
    main { flex: 1; padding: 1.5rem; max-width: 1200px; }
    h1 { font-size: 1.75rem; margin-bottom: 0.25rem; }
    .subtitle { color: var(--muted); margin-bottom: 1rem; }
    .header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
    .card { background: var(--surface); border: 1px solid var(--border); border-radius: 0.5rem; padding: 1.25rem; margin-bottom: 1rem; }
    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; margin-bottom: 1rem; }
    .stat-value { font-size: 2rem; font-weight: 700; }
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid var(--border); font-size: 0.875rem; }
    tbody tr:nth-child(even) { background: var(--bg); }
    .empty { text-align: center; color: var(--muted); padding: 2rem; }
    .alert { display: flex; justify-content: space-between; padding: 0.75rem 1rem; border-radius: 0.375rem; margin-bottom: 1rem; }
    .alert a { color: inherit; }
    .alert-error { background: #fee2e2; color: var(--error); }
    .alert-success { background: #dcfce7; color: var(--success); }
    .alert-warning { background: #fef3c7; color: var(--warning); }
    .badge { display: inline-block; padding: 0.125rem 0.5rem; border-radius: 999px; font-size: 0.75rem; color: white; }
    .badge-success { background: var(--success); }
    .badge-error { background: var(--error); }
    .btn { display: inline-block; padding: 0.375rem 0.75rem; border: 1px solid var(--border); border-radius: 0.375rem; background: var(--surface); color: var(--text); text-decoration: none; font-size: 0.875rem; cursor: pointer; }
    .btn-primary { background: var(--accent); border-color: var(--accent); color: white; }
    .btn-warning { color: var(--warning); }
    .btn-error { color: var(--error); }
    .btn-info { color: var(--info); }
    .actions { display: flex; gap: 0.5rem; }
    .actions form { display: inline; }
    .modal { background: var(--surface); border: 2px solid var(--accent); border-radius: 0.5rem; padding: 1.25rem; margin-bottom: 1rem; }
    .modal h2 { font-size: 1.25rem; margin-bottom: 1rem; }
    .field { display: block; margin-bottom: 0.75rem; }
    .field span { display: block; font-size: 0.875rem; margin-bottom: 0.25rem; }
    .field input[type=text], .field input[type=password], .field select { width: 100%; padding: 0.5rem; border: 1px solid var(--border); border-radius: 0.375rem; }
    .filters { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 1rem; }
";

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// `path` with the non-empty `params` as a query string.
#[must_use]
pub fn href(path: &str, params: &[(&str, &str)]) -> String {
    let params: Vec<(&str, &str)> = params
        .iter()
        .copied()
        .filter(|(_, v)| !v.is_empty())
        .collect();
    if params.is_empty() {
        return path.to_string();
    }
    let query = serde_urlencoded::to_string(&params).unwrap_or_default();
    format!("{path}?{query}")
}

/// Full page with navigation, for a signed-in operator.
#[must_use]
pub fn layout(title: &str, user: &SessionUser, content: &str) -> String {
    let nav = format!(
        r#"<nav>
    <a class="brand" href="/dashboard">🌱 Invernaderos Admin</a>
    <div class="actions">
        <span>{username}</span>
        <form method="post" action="/logout"><button class="btn" type="submit">Cerrar sesión</button></form>
    </div>
</nav>
<div class="shell">
    <aside>
        <a href="/dashboard">📊 Dashboard</a>
        <a href="/users">👥 Usuarios</a>
        <a href="/greenhouses">🏠 Invernaderos</a>
        <a href="/plants">🌱 Plantas</a>
        <a href="/sensors">📡 Sensores</a>
    </aside>
    <main>{content}</main>
</div>"#,
        username = escape(&user.username),
    );
    document(title, &nav)
}

/// Bare page, used by login and not-found.
#[must_use]
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} · Invernaderos Admin</title>
    <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

/// Page heading with an optional call-to-action on the right.
#[must_use]
pub fn header(title: &str, subtitle: &str, action: Option<(&str, &str)>) -> String {
    let action = action
        .map(|(label, href)| format!(r#"<a class="btn btn-primary" href="{}">{}</a>"#, escape(href), escape(label)))
        .unwrap_or_default();
    format!(
        r#"<div class="header"><div><h1>{}</h1><p class="subtitle">{}</p></div>{action}</div>"#,
        escape(title),
        escape(subtitle),
    )
}

/// Error and success banners; the dismiss link reloads `dismiss_href`.
#[must_use]
pub fn banners(flash: &Flash, dismiss_href: &str) -> String {
    let mut out = String::new();
    for (class, message) in [
        ("alert-error", &flash.error),
        ("alert-success", &flash.success),
    ] {
        if let Some(message) = message {
            let _ = write!(
                out,
                r#"<div class="alert {class}" role="alert"><span>{}</span><a href="{}" aria-label="Cerrar">✕</a></div>"#,
                escape(message),
                escape(dismiss_href),
            );
        }
    }
    out
}

/// A table column: header text and a cell renderer returning markup.
pub struct Column<'a, T> {
    pub header: &'static str,
    pub render: Box<dyn Fn(&T) -> String + 'a>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(header: &'static str, render: impl Fn(&T) -> String + 'a) -> Self {
        Self {
            header,
            render: Box::new(render),
        }
    }

    /// Column showing escaped plain text.
    pub fn text(header: &'static str, value: impl Fn(&T) -> String + 'a) -> Self {
        Self::new(header, move |row| escape(&value(row)))
    }
}

#[must_use]
pub fn table<T>(rows: &[T], columns: &[Column<'_, T>], empty_message: &str) -> String {
    if rows.is_empty() {
        return format!(r#"<div class="empty"><p>{}</p></div>"#, escape(empty_message));
    }

    let mut out = String::from("<table><thead><tr>");
    for column in columns {
        let _ = write!(out, "<th>{}</th>", escape(column.header));
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for column in columns {
            let _ = write!(out, "<td>{}</td>", (column.render)(row));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

#[must_use]
pub fn card(title: &str, content: &str) -> String {
    format!(
        r#"<div class="card"><h2>{}</h2>{content}</div>"#,
        escape(title)
    )
}

#[must_use]
pub fn badge(active: bool, label: &str) -> String {
    let class = if active { "badge-success" } else { "badge-error" };
    format!(r#"<span class="badge {class}">{}</span>"#, escape(label))
}

/// Modal form panel. `cancel_href` closes it.
#[must_use]
pub fn modal(title: &str, action: &str, fields: &str, confirm_text: &str, cancel_href: &str) -> String {
    format!(
        r#"<div class="modal" role="dialog">
    <h2>{title}</h2>
    <form method="post" action="{action}">
        {fields}
        <div class="actions">
            <a class="btn" href="{cancel}">Cancelar</a>
            <button class="btn btn-primary" type="submit">{confirm}</button>
        </div>
    </form>
</div>"#,
        title = escape(title),
        action = escape(action),
        cancel = escape(cancel_href),
        confirm = escape(confirm_text),
    )
}

/// Inline delete confirmation, posting `hidden` with the delete.
#[must_use]
pub fn confirm(message: &str, action: &str, cancel_href: &str, hidden: &[(&str, &str)]) -> String {
    format!(
        r#"<div class="alert alert-warning" role="alertdialog">
    <span>{message}</span>
    <div class="actions">
        <a class="btn" href="{cancel}">Cancelar</a>
        <form method="post" action="{action}">{fields}<button class="btn btn-error" type="submit">Eliminar</button></form>
    </div>
</div>"#,
        message = escape(message),
        action = escape(action),
        cancel = escape(cancel_href),
        fields = hidden_fields(hidden),
    )
}

#[must_use]
pub fn input(label: &str, name: &str, kind: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<label class="field"><span>{label}</span><input type="{kind}" name="{name}" value="{value}" placeholder="{placeholder}"></label>"#,
        label = escape(label),
        kind = escape(kind),
        name = escape(name),
        value = escape(value),
        placeholder = escape(placeholder),
    )
}

/// Select box. An empty `placeholder` omits the blank option.
#[must_use]
pub fn select(label: &str, name: &str, options: &[(String, String)], selected: &str, placeholder: &str) -> String {
    let mut out = format!(
        r#"<label class="field"><span>{}</span><select name="{}">"#,
        escape(label),
        escape(name)
    );
    if !placeholder.is_empty() {
        let _ = write!(out, r#"<option value="">{}</option>"#, escape(placeholder));
    }
    for (value, text) in options {
        let marker = if value == selected { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{marker}>{}</option>"#,
            escape(value),
            escape(text)
        );
    }
    out.push_str("</select></label>");
    out
}

#[must_use]
pub fn checkbox(label: &str, name: &str, checked: bool) -> String {
    format!(
        r#"<label class="field"><input type="checkbox" name="{}"{}> {}</label>"#,
        escape(name),
        if checked { " checked" } else { "" },
        escape(label),
    )
}

/// Small button posting to `action`, optionally with hidden fields.
#[must_use]
pub fn post_button(label: &str, action: &str, class: &str, hidden: &[(&str, &str)]) -> String {
    format!(
        r#"<form method="post" action="{}">{}<button class="btn {}" type="submit">{}</button></form>"#,
        escape(action),
        hidden_fields(hidden),
        escape(class),
        escape(label),
    )
}

#[must_use]
pub fn hidden_fields(fields: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (name, value) in fields {
        let _ = write!(
            out,
            r#"<input type="hidden" name="{}" value="{}">"#,
            escape(name),
            escape(value)
        );
    }
    out
}

#[must_use]
pub fn link_button(label: &str, href: &str, class: &str) -> String {
    format!(
        r#"<a class="btn {}" href="{}">{}</a>"#,
        escape(class),
        escape(href),
        escape(label)
    )
}

#[must_use]
pub fn not_found() -> String {
    document(
        "404",
        r#"<main style="text-align:center;margin-top:20vh">
    <h1 style="font-size:4rem;color:var(--error)">404</h1>
    <p class="subtitle">Página no encontrada</p>
    <a class="btn btn-primary" href="/dashboard">Ir al Dashboard</a>
</main>"#,
    )
}
