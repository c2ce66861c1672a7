//! Screen guards: session/role checks run on screen entry.
//! A guard failure is terminal for the screen: it resolves to a navigation
//! target, never to in-place recovery, mirroring a full-page redirect.

use tracing::debug;

use crate::session::{Rol, Session, SessionStore};

/// The portal's navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    AdminHome,
    ClientHome,
}

/// Where a failed guard sends the user, with an optional blocking notice to
/// show before navigating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Screen,
    pub notice: Option<&'static str>,
}

impl Redirect {
    fn to_login() -> Self {
        Redirect { to: Screen::Login, notice: None }
    }
}

/// Home screen for a role.
pub fn home_for(rol: Rol) -> Screen {
    match rol {
        Rol::Admin => Screen::AdminHome,
        Rol::Usuario => Screen::ClientHome,
    }
}

/// No session ⇒ back to login; otherwise hand the session to the screen.
pub fn require_session(store: &dyn SessionStore) -> Result<Session, Redirect> {
    match store.get() {
        Some(session) => Ok(session),
        None => {
            debug!(target: "portal", "guard: no session, routing to login");
            Err(Redirect::to_login())
        }
    }
}

/// Session plus role check. A role mismatch shows a blocking notice and
/// routes to the home of the role the session actually has.
pub fn require_role(store: &dyn SessionStore, rol: Rol) -> Result<Session, Redirect> {
    let session = require_session(store)?;
    if session.rol != rol {
        debug!(target: "portal", "guard: role {} required, session has {}", rol, session.rol);
        return Err(Redirect { to: home_for(session.rol), notice: Some("Acceso denegado") });
    }
    Ok(session)
}

/// Route by role: admin home for `ADMIN`, client home otherwise, login when
/// no session exists.
pub fn redirect_by_role(store: &dyn SessionStore) -> Screen {
    match store.get() {
        Some(session) => home_for(session.rol),
        None => Screen::Login,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn store_with(rol: Rol) -> MemorySessionStore {
        let store = MemorySessionStore::default();
        store
            .set(&Session {
                id: None,
                email: "ana@ejemplo.com".into(),
                nombre: "Ana".into(),
                apellido: None,
                rol,
                hora_login: None,
            })
            .unwrap();
        store
    }

    #[test]
    fn no_session_routes_to_login() {
        let store = MemorySessionStore::default();
        let redirect = require_session(&store).unwrap_err();
        assert_eq!(redirect.to, Screen::Login);
        assert!(redirect.notice.is_none());
        assert_eq!(redirect_by_role(&store), Screen::Login);
    }

    #[test]
    fn admin_session_passes_admin_guard() {
        let store = store_with(Rol::Admin);
        let session = require_role(&store, Rol::Admin).expect("admin allowed");
        assert_eq!(session.rol, Rol::Admin);
        assert_eq!(redirect_by_role(&store), Screen::AdminHome);
    }

    #[test]
    fn admin_hitting_client_guard_is_sent_home_with_notice() {
        let store = store_with(Rol::Admin);
        let redirect = require_role(&store, Rol::Usuario).unwrap_err();
        assert_eq!(redirect.to, Screen::AdminHome);
        assert_eq!(redirect.notice, Some("Acceso denegado"));
    }

    #[test]
    fn usuario_routes_to_client_home() {
        let store = store_with(Rol::Usuario);
        assert_eq!(redirect_by_role(&store), Screen::ClientHome);
        let redirect = require_role(&store, Rol::Admin).unwrap_err();
        assert_eq!(redirect.to, Screen::ClientHome);
    }
}
