use crate::pages::login::LoginPage;

use super::{banners, document, input};

#[must_use]
pub fn render(page: &LoginPage) -> String {
    let body = format!(
        r#"<main style="max-width:400px;margin:10vh auto">
    <div class="card">
        <h1>🌱 Invernaderos Admin</h1>
        <p class="subtitle">Inicia sesión para continuar</p>
        {banners}
        <form method="post" action="/login">
            {username}
            {password}
            <button class="btn btn-primary" type="submit">Iniciar sesión</button>
        </form>
    </div>
</main>"#,
        banners = banners(&page.flash, "/login"),
        username = input("Usuario", "username", "text", &page.username, "Tu usuario"),
        password = input("Contraseña", "password", "password", "", "••••••••"),
    );
    document("Iniciar sesión", &body)
}
