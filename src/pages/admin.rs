//! Admin home: guarded dashboard with the demo fixture, local state reset,
//! and read access to the catalog resources over the API.

use rustyline::DefaultEditor;

use crate::cli::print_table;
use crate::demo;
use crate::error::AppResult;
use crate::guard::{require_role, Screen};
use crate::session::{Rol, SessionStore};

use super::{banner_error, banner_exito, es_si, fmt_hora, fmt_id, prompt, Entrada, Nav, ScreenCtx};

const AYUDA: &str = "\
Comandos:
  usuarios     usuarios de prueba (fixture local)
  cuentas      usuarios registrados en el servidor
  productos    catálogo de productos
  categorias   categorías del catálogo
  pedidos      pedidos registrados
  reset        reiniciar el estado local (mantiene tu sesión)
  logout       cerrar sesión
  salir        terminar
  ayuda        esta ayuda";

pub async fn run(ctx: &ScreenCtx<'_>, ed: &mut DefaultEditor) -> AppResult<Nav> {
    let session = match require_role(ctx.store, Rol::Admin) {
        Ok(s) => s,
        Err(redirect) => {
            if let Some(notice) = redirect.notice {
                banner_error(notice);
            }
            return Ok(Nav::To(redirect.to));
        }
    };

    println!();
    println!("Panel de administración");
    println!("Bienvenido, {}", session.display_name());
    println!("Hora de login: {}", fmt_hora(&session.hora_login));
    println!("Usuarios de prueba: {}", demo::load_demo_users(ctx.state_dir).len());
    println!("Escribe 'ayuda' para ver los comandos.");

    loop {
        let line = match prompt(ed, "admin> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };
        match line.as_str() {
            "" => continue,
            "ayuda" | "help" => println!("{}", AYUDA),
            "usuarios" => listar_demo(ctx),
            "cuentas" => listar_cuentas(ctx).await,
            "productos" => listar_productos(ctx).await,
            "categorias" => listar_categorias(ctx).await,
            "pedidos" => listar_pedidos(ctx).await,
            "reset" => {
                let confirmado = match prompt(ed, "¿Estás seguro? Esto reiniciará los usuarios de prueba. (s/n)> ") {
                    Entrada::Linea(l) => es_si(&l),
                    Entrada::Fin => return Ok(Nav::Exit),
                };
                if confirmado {
                    match demo::reset_state(ctx.state_dir, ctx.store) {
                        Ok(()) => banner_exito("Estado local reiniciado correctamente"),
                        Err(e) => banner_error(e.message()),
                    }
                }
            }
            "logout" => {
                ctx.store.clear()?;
                return Ok(Nav::To(Screen::Login));
            }
            "salir" | "exit" | "quit" => return Ok(Nav::Exit),
            otro => println!("comando desconocido: {} ('ayuda' lista los comandos)", otro),
        }
    }
}

fn listar_demo(ctx: &ScreenCtx<'_>) {
    let users = demo::load_demo_users(ctx.state_dir);
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| vec![u.nombre.clone().unwrap_or_else(|| "Sin nombre".into()), u.email.clone()])
        .collect();
    if !print_table(&["nombre", "email"], &rows) {
        println!("no hay usuarios de prueba");
    }
}

async fn listar_cuentas(ctx: &ScreenCtx<'_>) {
    match ctx.api.usuarios().await {
        Ok(usuarios) => {
            let rows: Vec<Vec<String>> = usuarios
                .iter()
                .map(|u| {
                    vec![
                        fmt_id(&u.id),
                        u.nombre.clone(),
                        u.apellido.clone().unwrap_or_default(),
                        u.email.clone(),
                        u.rol.to_string(),
                    ]
                })
                .collect();
            if !print_table(&["id", "nombre", "apellido", "email", "rol"], &rows) {
                println!("no hay usuarios registrados");
            }
        }
        Err(e) => banner_error(e.message()),
    }
}

async fn listar_productos(ctx: &ScreenCtx<'_>) {
    match ctx.api.productos().await {
        Ok(productos) => {
            let rows: Vec<Vec<String>> = productos
                .iter()
                .map(|p| {
                    vec![
                        fmt_id(&p.id),
                        p.nombre.clone(),
                        format!("{:.2}", p.precio),
                        p.stock.map(|s| s.to_string()).unwrap_or_default(),
                    ]
                })
                .collect();
            if !print_table(&["id", "nombre", "precio", "stock"], &rows) {
                println!("no hay productos");
            }
        }
        Err(e) => banner_error(e.message()),
    }
}

async fn listar_categorias(ctx: &ScreenCtx<'_>) {
    match ctx.api.categorias().await {
        Ok(categorias) => {
            let rows: Vec<Vec<String>> = categorias
                .iter()
                .map(|c| vec![fmt_id(&c.id), c.nombre.clone(), c.descripcion.clone().unwrap_or_default()])
                .collect();
            if !print_table(&["id", "nombre", "descripción"], &rows) {
                println!("no hay categorías");
            }
        }
        Err(e) => banner_error(e.message()),
    }
}

async fn listar_pedidos(ctx: &ScreenCtx<'_>) {
    match ctx.api.pedidos().await {
        Ok(pedidos) => {
            let rows: Vec<Vec<String>> = pedidos
                .iter()
                .map(|p| {
                    vec![
                        fmt_id(&p.id),
                        fmt_id(&p.usuario_id),
                        p.items.len().to_string(),
                        format!("{:.2}", p.total),
                        p.estado.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            if !print_table(&["id", "usuario", "items", "total", "estado"], &rows) {
                println!("no hay pedidos");
            }
        }
        Err(e) => banner_error(e.message()),
    }
}
