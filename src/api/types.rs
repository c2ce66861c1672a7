//! Wire types for the backend REST API. Field names follow the backend's
//! JSON (Spanish, camelCase for compound names); unknown response fields are
//! ignored so the client tolerates additive server changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Rol;

/// Server-owned user record as returned by login/register and the usuarios
/// CRUD endpoints. The backend never returns the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    pub email: String,
    pub rol: Rol,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub rol: Rol,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(rename = "categoriaId", default, skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoItem {
    #[serde(rename = "productoId")]
    pub producto_id: i64,
    pub cantidad: u32,
    #[serde(rename = "precioUnitario")]
    pub precio_unitario: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "usuarioId", default, skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<PedidoItem>,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha: Option<DateTime<Utc>>,
}

impl Pedido {
    /// A new order for the given user; total is the sum over items.
    pub fn nuevo(usuario_id: Option<i64>, items: Vec<PedidoItem>) -> Self {
        let total = items.iter().map(|i| i.precio_unitario * i.cantidad as f64).sum();
        Self { id: None, usuario_id, items, total, estado: None, fecha: None }
    }
}
