//! Demo-user fixture for the admin screen: a JSON array of plaintext-password
//! records seeded on first use. This is seed/demo data management, not an
//! account store; real accounts live behind the backend API.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config;
use crate::error::AppResult;
use crate::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoUser {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

fn seed_users() -> Vec<DemoUser> {
    vec![
        DemoUser { email: "admin@ejemplo.com".into(), password: "admin123".into(), nombre: Some("Admin".into()) },
        DemoUser { email: "usuario@ejemplo.com".into(), password: "usuario123".into(), nombre: Some("Usuario".into()) },
    ]
}

fn write_users(path: &Path, users: &[DemoUser]) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let text = serde_json::to_string_pretty(users)?;
    fs::write(path, text)?;
    Ok(())
}

/// Seed the fixture when absent; existing data is left untouched.
pub fn ensure_demo_users(state_dir: &Path) -> AppResult<()> {
    let path = config::demo_users_path(state_dir);
    if path.exists() {
        return Ok(());
    }
    let users = seed_users();
    write_users(&path, &users)?;
    debug!(target: "portal", "seeded {} demo users", users.len());
    Ok(())
}

/// Current fixture contents; absence or corrupt JSON reads as empty.
pub fn load_demo_users(state_dir: &Path) -> Vec<DemoUser> {
    let path = config::demo_users_path(state_dir);
    let Ok(text) = fs::read_to_string(&path) else { return Vec::new() };
    serde_json::from_str(&text).unwrap_or_default()
}

/// Wipe local state and re-seed the fixture, preserving the active session
/// (the admin stays logged in across a reset).
pub fn reset_state(state_dir: &Path, store: &dyn SessionStore) -> AppResult<()> {
    let session = store.get();
    if state_dir.exists() {
        fs::remove_dir_all(state_dir)?;
    }
    write_users(&config::demo_users_path(state_dir), &seed_users())?;
    if let Some(session) = session {
        store.set(&session)?;
    }
    debug!(target: "portal", "local state reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{FileSessionStore, Rol, Session};
    use tempfile::tempdir;

    #[test]
    fn seed_is_idempotent() {
        let tmp = tempdir().unwrap();
        ensure_demo_users(tmp.path()).unwrap();
        let mut users = load_demo_users(tmp.path());
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "admin@ejemplo.com");

        // mutate, then ensure again: existing data must survive
        users.pop();
        write_users(&config::demo_users_path(tmp.path()), &users).unwrap();
        ensure_demo_users(tmp.path()).unwrap();
        assert_eq!(load_demo_users(tmp.path()).len(), 1);
    }

    #[test]
    fn missing_or_corrupt_fixture_reads_as_empty() {
        let tmp = tempdir().unwrap();
        assert!(load_demo_users(tmp.path()).is_empty());
        std::fs::write(config::demo_users_path(tmp.path()), "][").unwrap();
        assert!(load_demo_users(tmp.path()).is_empty());
    }

    #[test]
    fn reset_reseeds_and_preserves_session() {
        let tmp = tempdir().unwrap();
        let store = FileSessionStore::new(tmp.path());
        store
            .set(&Session {
                id: None,
                email: "admin@ejemplo.com".into(),
                nombre: "Admin".into(),
                apellido: None,
                rol: Rol::Admin,
                hora_login: None,
            })
            .unwrap();
        // grow the fixture past the seed, then reset
        let mut users = seed_users();
        users.push(DemoUser { email: "extra@ejemplo.com".into(), password: "x".into(), nombre: None });
        write_users(&config::demo_users_path(tmp.path()), &users).unwrap();

        reset_state(tmp.path(), &store).unwrap();

        assert_eq!(load_demo_users(tmp.path()).len(), 2);
        let session = store.get().expect("session survives reset");
        assert_eq!(session.email, "admin@ejemplo.com");
    }

    #[test]
    fn reset_without_session_leaves_none() {
        let tmp = tempdir().unwrap();
        let store = FileSessionStore::new(tmp.path());
        reset_state(tmp.path(), &store).unwrap();
        assert!(store.get().is_none());
        assert_eq!(load_demo_users(tmp.path()).len(), 2);
    }
}
