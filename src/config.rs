//! Runtime configuration and centralized helpers for local state paths.
//! Keeping the locations in one place keeps the session and demo-fixture
//! modules consistent about where client state lives.

use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_STATE_DIR: &str = ".portal";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub state_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let api_url = std::env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let state_dir = std::env::var("PORTAL_STATE_DIR").unwrap_or_else(|_| DEFAULT_STATE_DIR.to_string());
        Self { api_url, state_dir: PathBuf::from(state_dir) }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_string(), state_dir: PathBuf::from(DEFAULT_STATE_DIR) }
    }
}

// ---- Local state files (under the state directory) ----

/// The persisted session singleton.
#[inline]
pub fn session_path(state_dir: &Path) -> PathBuf { state_dir.join("sesion.json") }

/// The demo-user fixture array (admin screen seed data).
#[inline]
pub fn demo_users_path(state_dir: &Path) -> PathBuf { state_dir.join("usuarios.json") }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_paths_are_rooted_in_state_dir() {
        let dir = Path::new("/tmp/portal-state");
        assert_eq!(session_path(dir), Path::new("/tmp/portal-state/sesion.json"));
        assert_eq!(demo_users_path(dir), Path::new("/tmp/portal-state/usuarios.json"));
    }
}
