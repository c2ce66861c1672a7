//! Session model and persistence for the portal client.
//! The session is a single JSON value identifying the logged-in user and role;
//! its presence is the sole authorization signal on the client side.

mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::Usuario;

/// Role gate: which home screen and actions are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rol {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "USUARIO")]
    Usuario,
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Admin => "ADMIN",
            Rol::Usuario => "USUARIO",
        }
    }
}

impl std::fmt::Display for Rol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-persisted record for the logged-in user. Field names on the wire
/// match the backend's JSON (`horaLogin` camel-cased).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    pub rol: Rol,
    #[serde(rename = "horaLogin", default, skip_serializing_if = "Option::is_none")]
    pub hora_login: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a session from the user record the API returned, stamping the
    /// login time. Overwrites any previously stored session when persisted.
    pub fn from_usuario(usuario: &Usuario) -> Self {
        Self {
            id: usuario.id,
            email: usuario.email.clone(),
            nombre: usuario.nombre.clone(),
            apellido: usuario.apellido.clone(),
            rol: usuario.rol,
            hora_login: Some(Utc::now()),
        }
    }

    pub fn is_admin(&self) -> bool { self.rol == Rol::Admin }

    /// "nombre apellido", omitting the apellido when absent.
    pub fn display_name(&self) -> String {
        match &self.apellido {
            Some(a) if !a.is_empty() => format!("{} {}", self.nombre, a),
            _ => self.nombre.clone(),
        }
    }
}
