//! Field-level validation for the login and registration forms.
//! Pure functions: no prompting, no network, no storage. Screens run these
//! before touching the API client, so bad input never causes a request.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, AppResult};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn email_valido(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Login form rules. Returns the first failing rule as a validation error.
pub fn validar_login(email: &str, password: &str) -> AppResult<()> {
    if !email_valido(email) {
        return Err(AppError::validation("email", "Por favor ingresa un email válido"));
    }
    if password.chars().count() < 5 {
        return Err(AppError::validation("password", "Por favor ingresa tu contraseña"));
    }
    Ok(())
}

/// Registration form rules, checked in the order the form presents them.
pub fn validar_registro(
    nombre: &str,
    apellido: &str,
    email: &str,
    password: &str,
    confirmacion: &str,
    acepta_terminos: bool,
) -> AppResult<()> {
    if nombre.trim().chars().count() < 2 {
        return Err(AppError::validation("nombre", "El nombre debe tener al menos 2 caracteres"));
    }
    if apellido.trim().chars().count() < 2 {
        return Err(AppError::validation("apellido", "El apellido debe tener al menos 2 caracteres"));
    }
    if !email_valido(email) {
        return Err(AppError::validation("email", "Por favor ingresa un email válido"));
    }
    if password.chars().count() < 6 {
        return Err(AppError::validation("password", "La contraseña debe tener al menos 6 caracteres"));
    }
    if password != confirmacion {
        return Err(AppError::validation("confirmacion", "Las contraseñas no coinciden"));
    }
    if !acepta_terminos {
        return Err(AppError::validation("terminos", "Debes aceptar los términos y condiciones"));
    }
    Ok(())
}
