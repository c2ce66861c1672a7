//! Guard integration tests over the disk-backed session store: screen entry
//! with and without a session, role mismatches, logout, and corrupt state.

use tempfile::tempdir;

use tienda_portal::api::types::Usuario;
use tienda_portal::guard::{redirect_by_role, require_role, require_session, Screen};
use tienda_portal::session::{FileSessionStore, Rol, Session, SessionStore};

fn admin_session() -> Session {
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
fn guarded_screen_without_session_routes_to_login() {
    let tmp = tempdir().unwrap();
    let store = FileSessionStore::new(tmp.path());

    let redirect = require_session(&store).unwrap_err();
    assert_eq!(redirect.to, Screen::Login);
    let redirect = require_role(&store, Rol::Admin).unwrap_err();
    assert_eq!(redirect.to, Screen::Login);
    assert!(redirect.notice.is_none());
    assert_eq!(redirect_by_role(&store), Screen::Login);
}

#[test]
fn admin_session_unlocks_admin_home_and_blocks_client_home() {
    let tmp = tempdir().unwrap();
    let store = FileSessionStore::new(tmp.path());
    store.set(&admin_session()).unwrap();

    // admin home does not redirect
    let session = require_role(&store, Rol::Admin).expect("admin guard passes");
    assert_eq!(session.email, "admin@ejemplo.com");
    assert_eq!(redirect_by_role(&store), Screen::AdminHome);

    // the client-only guard sends the admin to the admin home, with a notice
    let redirect = require_role(&store, Rol::Usuario).unwrap_err();
    assert_eq!(redirect.to, Screen::AdminHome);
    assert_eq!(redirect.notice, Some("Acceso denegado"));
}

#[test]
fn successful_login_persists_matching_email_and_rol() {
    let tmp = tempdir().unwrap();
    let store = FileSessionStore::new(tmp.path());

    // what the API hands back on success
    let usuario = Usuario {
        id: Some(9),
        nombre: "Ana".into(),
        apellido: Some("Gómez".into()),
        email: "ana@ejemplo.com".into(),
        rol: Rol::Usuario,
    };
    store.set(&Session::from_usuario(&usuario)).unwrap();

    let session = store.get().expect("session persisted");
    assert_eq!(session.email, usuario.email);
    assert_eq!(session.rol, Rol::Usuario);
    assert!(session.hora_login.is_some(), "login time is stamped");
    assert_eq!(redirect_by_role(&store), Screen::ClientHome);
}

#[test]
fn logout_clears_and_guards_again() {
    let tmp = tempdir().unwrap();
    let store = FileSessionStore::new(tmp.path());
    store.set(&admin_session()).unwrap();
    store.clear().unwrap();

    assert!(store.get().is_none());
    assert_eq!(require_session(&store).unwrap_err().to, Screen::Login);
}

#[test]
fn corrupt_session_file_acts_as_logged_out() {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("sesion.json"), "{\"rol\": 42").unwrap();
    let store = FileSessionStore::new(tmp.path());

    assert!(store.get().is_none());
    assert_eq!(redirect_by_role(&store), Screen::Login);
}
