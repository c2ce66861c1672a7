//! Session persistence: one JSON value behind a get/set/clear interface.
//! The store is injected into guards and screens rather than accessed as
//! ambient state, so the pure logic stays testable without a filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::debug;

use super::Session;
use crate::config;
use crate::error::AppResult;

pub trait SessionStore: Send + Sync {
    /// Current session, or `None` when absent. A stored value that fails to
    /// parse also reads as `None`: corrupt state means "no session".
    fn get(&self) -> Option<Session>;

    /// Serialize and persist, full overwrite. No merge semantics.
    fn set(&self, session: &Session) -> AppResult<()>;

    /// Remove the value. Idempotent.
    fn clear(&self) -> AppResult<()>;
}

/// Disk-backed store: `sesion.json` under the state directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(state_dir: &Path) -> Self {
        Self { path: config::session_path(state_dir) }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!(target: "portal", "stored session unreadable, treating as absent: {}", e);
                None
            }
        }
    }

    fn set(&self, session: &Session) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let text = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, text)?;
        debug!(target: "portal", "session stored for {}", session.email);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for embedding and tests.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.slot.read().clone()
    }

    fn set(&self, session: &Session) -> AppResult<()> {
        *self.slot.write() = Some(session.clone());
        crate::tprintln!("session.store(mem) set user={}", session.email);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.slot.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Rol;
    use tempfile::tempdir;

    fn session() -> Session {
        Session {
            id: Some(1),
            email: "admin@ejemplo.com".into(),
            nombre: "Admin".into(),
            apellido: None,
            rol: Rol::Admin,
            hora_login: None,
        }
    }

    #[test]
    fn file_store_round_trips() {
        let tmp = tempdir().unwrap();
        let store = FileSessionStore::new(tmp.path());
        assert!(store.get().is_none());
        store.set(&session()).unwrap();
        let got = store.get().expect("session after set");
        assert_eq!(got.email, "admin@ejemplo.com");
        assert_eq!(got.rol, Rol::Admin);
    }

    #[test]
    fn clear_then_get_is_none() {
        let tmp = tempdir().unwrap();
        let store = FileSessionStore::new(tmp.path());
        store.set(&session()).unwrap();
        store.clear().unwrap();
        assert!(store.get().is_none());
        // clearing again is fine
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_reads_as_no_session() {
        let tmp = tempdir().unwrap();
        std::fs::write(crate::config::session_path(tmp.path()), "{not json").unwrap();
        let store = FileSessionStore::new(tmp.path());
        assert!(store.get().is_none());
    }

    #[test]
    fn set_creates_missing_state_dir() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("deep").join("state");
        let store = FileSessionStore::new(&nested);
        store.set(&session()).unwrap();
        assert!(store.get().is_some());
    }

    #[test]
    fn new_login_overwrites_previous_session() {
        let store = MemorySessionStore::default();
        store.set(&session()).unwrap();
        let mut second = session();
        second.email = "otro@ejemplo.com".into();
        second.rol = Rol::Usuario;
        store.set(&second).unwrap();
        let got = store.get().unwrap();
        assert_eq!(got.email, "otro@ejemplo.com");
        assert_eq!(got.rol, Rol::Usuario);
    }
}
