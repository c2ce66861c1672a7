//! Registration screen. New accounts register with rol USUARIO; on success
//! the session is persisted right away (the user is logged in) and the
//! screen routes by role.

use rustyline::DefaultEditor;
use tracing::debug;

use crate::error::AppResult;
use crate::guard::{redirect_by_role, Screen};
use crate::session::{Session, SessionStore};
use crate::validate::validar_registro;

use super::{banner_error, banner_exito, es_si, pausa_navegacion, prompt, Entrada, Nav, ScreenCtx};

pub async fn run(ctx: &ScreenCtx<'_>, ed: &mut DefaultEditor) -> AppResult<Nav> {
    if ctx.store.get().is_some() {
        debug!(target: "portal", "register: session already active, routing by role");
        return Ok(Nav::To(redirect_by_role(ctx.store)));
    }

    println!();
    println!("Crear una cuenta  ('volver' regresa al login, 'salir' termina)");
    loop {
        let nombre = match prompt(ed, "nombre> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };
        match nombre.as_str() {
            "salir" | "exit" | "quit" => return Ok(Nav::Exit),
            "volver" => return Ok(Nav::To(Screen::Login)),
            _ => {}
        }
        let apellido = match prompt(ed, "apellido> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };
        let email = match prompt(ed, "email> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };
        let password = match prompt(ed, "contraseña> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };
        let confirmacion = match prompt(ed, "confirmar contraseña> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };
        let acepta = match prompt(ed, "¿aceptas los términos y condiciones? (s/n)> ") {
            Entrada::Linea(l) => es_si(&l),
            Entrada::Fin => return Ok(Nav::Exit),
        };

        // validation failures never reach the network
        if let Err(e) = validar_registro(&nombre, &apellido, &email, &password, &confirmacion, acepta) {
            banner_error(e.message());
            continue;
        }

        match ctx.api.register(nombre.trim(), apellido.trim(), &email, &password).await {
            Ok(usuario) => {
                let session = Session::from_usuario(&usuario);
                ctx.store.set(&session)?;
                banner_exito(&format!("¡Cuenta creada! Bienvenido {}", usuario.nombre));
                pausa_navegacion().await;
                return Ok(Nav::To(redirect_by_role(ctx.store)));
            }
            Err(e) => {
                banner_error(e.message());
            }
        }
    }
}
