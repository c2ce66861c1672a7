//! Demo fixture and local-state reset flows, exercised against the same
//! state directory the session store uses.

use tempfile::tempdir;

use tienda_portal::demo::{ensure_demo_users, load_demo_users, reset_state};
use tienda_portal::session::{FileSessionStore, Rol, Session, SessionStore};

#[test]
fn first_run_seeds_the_two_canonical_demo_users() {
    let tmp = tempdir().unwrap();
    ensure_demo_users(tmp.path()).unwrap();

    let users = load_demo_users(tmp.path());
    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["admin@ejemplo.com", "usuario@ejemplo.com"]);
    assert_eq!(users[0].password, "admin123");

    // second run must not duplicate or overwrite
    ensure_demo_users(tmp.path()).unwrap();
    assert_eq!(load_demo_users(tmp.path()).len(), 2);
}

#[test]
fn reset_wipes_state_but_keeps_the_admin_logged_in() {
    let tmp = tempdir().unwrap();
    let store = FileSessionStore::new(tmp.path());
    ensure_demo_users(tmp.path()).unwrap();
    store
        .set(&Session {
            id: Some(1),
            email: "admin@ejemplo.com".into(),
            nombre: "Admin".into(),
            apellido: None,
            rol: Rol::Admin,
            hora_login: Some(chrono::Utc::now()),
        })
        .unwrap();

    // leave stray state behind, then reset
    std::fs::write(tmp.path().join("otro.json"), "{}").unwrap();
    reset_state(tmp.path(), &store).unwrap();

    assert!(!tmp.path().join("otro.json").exists(), "stray state is wiped");
    assert_eq!(load_demo_users(tmp.path()).len(), 2);
    let session = store.get().expect("admin still logged in");
    assert_eq!(session.rol, Rol::Admin);
}
