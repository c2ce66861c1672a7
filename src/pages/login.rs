//! Login screen: validate, authenticate against the backend, persist the
//! session and route by role. With a session already present the screen
//! routes immediately instead of prompting.

use rustyline::DefaultEditor;
use tracing::debug;

use crate::error::AppResult;
use crate::guard::{redirect_by_role, Screen};
use crate::session::{Session, SessionStore};
use crate::validate::validar_login;

use super::{banner_error, banner_exito, pausa_navegacion, prompt, Entrada, Nav, ScreenCtx};

pub async fn run(ctx: &ScreenCtx<'_>, ed: &mut DefaultEditor) -> AppResult<Nav> {
    if ctx.store.get().is_some() {
        debug!(target: "portal", "login: session already active, routing by role");
        return Ok(Nav::To(redirect_by_role(ctx.store)));
    }

    println!();
    println!("Iniciar sesión  ('registro' para crear una cuenta, 'salir' para terminar)");
    loop {
        let email = match prompt(ed, "email> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };
        match email.as_str() {
            "salir" | "exit" | "quit" => return Ok(Nav::Exit),
            "registro" => return Ok(Nav::To(Screen::Register)),
            _ => {}
        }
        let password = match prompt(ed, "contraseña> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };

        if email.is_empty() || password.is_empty() {
            banner_error("Por favor completa todos los campos");
            continue;
        }
        // validation failures never reach the network
        if let Err(e) = validar_login(&email, &password) {
            banner_error(e.message());
            continue;
        }

        match ctx.api.login(&email, &password).await {
            Ok(usuario) => {
                let session = Session::from_usuario(&usuario);
                ctx.store.set(&session)?;
                banner_exito(&format!("¡Bienvenido {}!", usuario.nombre));
                pausa_navegacion().await;
                return Ok(Nav::To(redirect_by_role(ctx.store)));
            }
            Err(e) => {
                banner_error(e.message());
            }
        }
    }
}
