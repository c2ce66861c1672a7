//! Client home: guarded profile screen with catalog browsing and order
//! creation. An ADMIN landing here is routed to the admin home by the guard.

use rustyline::DefaultEditor;

use crate::api::types::{PedidoItem, Producto};
use crate::cli::print_table;
use crate::error::AppResult;
use crate::guard::{require_role, Screen};
use crate::session::{Rol, Session, SessionStore};

use super::{banner_error, banner_exito, es_si, fmt_hora, fmt_id, prompt, Entrada, Nav, ScreenCtx};

const AYUDA: &str = "\
Comandos:
  cuenta       información de tu cuenta
  productos    catálogo de productos
  pedido       crear un pedido
  logout       cerrar sesión
  salir        terminar
  ayuda        esta ayuda";

pub async fn run(ctx: &ScreenCtx<'_>, ed: &mut DefaultEditor) -> AppResult<Nav> {
    let session = match require_role(ctx.store, Rol::Usuario) {
        Ok(s) => s,
        Err(redirect) => {
            if let Some(notice) = redirect.notice {
                banner_error(notice);
            }
            return Ok(Nav::To(redirect.to));
        }
    };

    println!();
    println!("¡Hola {}! Aquí puedes gestionar tu perfil y servicios", session.nombre);
    println!("Escribe 'ayuda' para ver los comandos.");

    loop {
        let line = match prompt(ed, "cliente> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(Nav::Exit),
        };
        match line.as_str() {
            "" => continue,
            "ayuda" | "help" => println!("{}", AYUDA),
            "cuenta" => mostrar_cuenta(&session),
            "productos" => {
                if let Err(e) = listar_productos(ctx).await {
                    banner_error(e.message());
                }
            }
            "pedido" => {
                if let Err(e) = crear_pedido(ctx, ed, &session).await {
                    banner_error(e.message());
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

fn mostrar_cuenta(session: &Session) {
    println!("Información de tu cuenta:");
    println!("  Email:          {}", session.email);
    println!("  Nombre:         {}", session.display_name());
    println!("  Última sesión:  {}", fmt_hora(&session.hora_login));
}

async fn listar_productos(ctx: &ScreenCtx<'_>) -> AppResult<()> {
    let productos = ctx.api.productos().await?;
    render_productos(&productos);
    Ok(())
}

fn render_productos(productos: &[Producto]) {
    let rows: Vec<Vec<String>> = productos
        .iter()
        .map(|p| {
            vec![
                fmt_id(&p.id),
                p.nombre.clone(),
                p.descripcion.clone().unwrap_or_default(),
                format!("{:.2}", p.precio),
            ]
        })
        .collect();
    if !print_table(&["id", "nombre", "descripción", "precio"], &rows) {
        println!("no hay productos");
    }
}

/// Interactive order builder: pick products by id, one line per item, empty
/// line finishes. Unit prices come from the freshly fetched catalog.
async fn crear_pedido(ctx: &ScreenCtx<'_>, ed: &mut DefaultEditor, session: &Session) -> AppResult<()> {
    let productos = ctx.api.productos().await?;
    if productos.is_empty() {
        println!("no hay productos para pedir");
        return Ok(());
    }
    render_productos(&productos);

    let mut items: Vec<PedidoItem> = Vec::new();
    loop {
        let entrada = match prompt(ed, "id de producto (vacío para terminar)> ") {
            Entrada::Linea(l) => l,
            Entrada::Fin => return Ok(()),
        };
        if entrada.is_empty() {
            break;
        }
        let Ok(id) = entrada.parse::<i64>() else {
            banner_error("ingresa un id numérico");
            continue;
        };
        let Some(producto) = productos.iter().find(|p| p.id == Some(id)) else {
            banner_error("no existe un producto con ese id");
            continue;
        };
        let cantidad = match prompt(ed, "cantidad> ") {
            Entrada::Linea(l) => match l.parse::<u32>() {
                Ok(c) if c > 0 => c,
                _ => {
                    banner_error("ingresa una cantidad válida");
                    continue;
                }
            },
            Entrada::Fin => return Ok(()),
        };
        items.push(PedidoItem { producto_id: id, cantidad, precio_unitario: producto.precio });
        println!("agregado: {} x{}", producto.nombre, cantidad);
    }

    if items.is_empty() {
        println!("pedido vacío, nada que enviar");
        return Ok(());
    }

    let pedido = crate::api::types::Pedido::nuevo(session.id, items);
    println!("Total: {:.2}", pedido.total);
    let confirmado = match prompt(ed, "¿confirmar pedido? (s/n)> ") {
        Entrada::Linea(l) => es_si(&l),
        Entrada::Fin => false,
    };
    if !confirmado {
        println!("pedido cancelado");
        return Ok(());
    }

    let creado = ctx.api.crear_pedido(&pedido).await?;
    match creado.id {
        Some(id) => banner_exito(&format!("Pedido #{} creado, total {:.2}", id, creado.total)),
        None => banner_exito(&format!("Pedido creado, total {:.2}", creado.total)),
    }
    Ok(())
}
