//! Unified application error model and mapping helpers.
//! This module provides a common error enum used across the portal screens,
//! the API client and the local state stores, along with helper mappers from
//! transport-level failures.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    Validation { code: String, message: String },
    Auth { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    Api { code: String, message: String },
    Network { code: String, message: String },
    Storage { code: String, message: String },
    Internal { code: String, message: String },
}

impl AppError {
    pub fn code_str(&self) -> &str {
        match self {
            AppError::Validation { code, .. }
            | AppError::Auth { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Api { code, .. }
            | AppError::Network { code, .. }
            | AppError::Storage { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::Auth { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Api { message, .. }
            | AppError::Network { message, .. }
            | AppError::Storage { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn validation<S: Into<String>>(code: S, msg: S) -> Self { AppError::Validation { code: code.into(), message: msg.into() } }
    pub fn auth<S: Into<String>>(code: S, msg: S) -> Self { AppError::Auth { code: code.into(), message: msg.into() } }
    pub fn not_found<S: Into<String>>(code: S, msg: S) -> Self { AppError::NotFound { code: code.into(), message: msg.into() } }
    pub fn conflict<S: Into<String>>(code: S, msg: S) -> Self { AppError::Conflict { code: code.into(), message: msg.into() } }
    pub fn api<S: Into<String>>(code: S, msg: S) -> Self { AppError::Api { code: code.into(), message: msg.into() } }
    pub fn network<S: Into<String>>(code: S, msg: S) -> Self { AppError::Network { code: code.into(), message: msg.into() } }
    pub fn storage<S: Into<String>>(code: S, msg: S) -> Self { AppError::Storage { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { AppError::Internal { code: code.into(), message: msg.into() } }

    /// Map a non-2xx HTTP status to the matching variant, keeping the
    /// user-facing message supplied by the caller (server message when the
    /// response carried one, a fixed per-operation fallback otherwise).
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => AppError::Validation { code: "bad_request".into(), message },
            401 | 403 => AppError::Auth { code: "unauthorized".into(), message },
            404 => AppError::NotFound { code: "not_found".into(), message },
            409 => AppError::Conflict { code: "conflict".into(), message },
            _ => AppError::Api { code: format!("http_{}", status), message },
        }
    }

    /// True when the error came from input validation and no request was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation { .. })
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network { code: "network_error".into(), message: err.to_string() }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage { code: "encode_error".into(), message: err.to_string() }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage { code: "io_error".into(), message: err.to_string() }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal { code: "internal_error".into(), message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(AppError::from_status(400, "x".into()), AppError::Validation { .. }));
        assert!(matches!(AppError::from_status(401, "x".into()), AppError::Auth { .. }));
        assert!(matches!(AppError::from_status(403, "x".into()), AppError::Auth { .. }));
        assert!(matches!(AppError::from_status(404, "x".into()), AppError::NotFound { .. }));
        assert!(matches!(AppError::from_status(409, "x".into()), AppError::Conflict { .. }));
        assert!(matches!(AppError::from_status(500, "x".into()), AppError::Api { .. }));
    }

    #[test]
    fn display_carries_code_and_message() {
        let e = AppError::auth("unauthorized", "Credenciales inválidas");
        assert_eq!(e.to_string(), "unauthorized: Credenciales inválidas");
        assert_eq!(e.code_str(), "unauthorized");
        assert_eq!(e.message(), "Credenciales inválidas");
    }

    #[test]
    fn validation_is_flagged() {
        assert!(AppError::validation("email", "bad").is_validation());
        assert!(!AppError::network("down", "x").is_validation());
    }
}
