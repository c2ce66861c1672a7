//! Screen controllers: prompt wiring that composes the guards and the API
//! client. Each screen runs until it resolves to a navigation target; the
//! app loop dispatches. Shared prompt/banner helpers live here so the
//! screens stay thin.

pub mod admin;
pub mod client;
pub mod login;
pub mod register;

use std::path::Path;
use std::time::Duration;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::api::ApiClient;
use crate::guard::Screen;
use crate::session::SessionStore;

/// Where the screen hands control next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    To(Screen),
    Exit,
}

/// Everything a screen needs, injected by the app loop.
pub struct ScreenCtx<'a> {
    pub api: &'a ApiClient,
    pub store: &'a dyn SessionStore,
    pub state_dir: &'a Path,
}

/// One line of user input, trimmed. `Fin` on EOF/interrupt so screens can
/// translate it into an exit.
pub(crate) enum Entrada {
    Linea(String),
    Fin,
}

pub(crate) fn prompt(ed: &mut DefaultEditor, label: &str) -> Entrada {
    match ed.readline(label) {
        Ok(line) => {
            let line = line.trim().to_string();
            if !line.is_empty() {
                let _ = ed.add_history_entry(&line);
            }
            Entrada::Linea(line)
        }
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Entrada::Fin,
        Err(_) => Entrada::Fin,
    }
}

/// "s"/"si" (case-insensitive) counts as yes; everything else is no.
pub(crate) fn es_si(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "s" | "si" | "sí")
}

pub(crate) fn banner_exito(msg: &str) {
    println!("{}", msg);
}

pub(crate) fn banner_error(msg: &str) {
    eprintln!("error: {}", msg);
}

/// Fixed short delay between a success banner and the follow-up navigation,
/// so the banner is readable before the next screen clears the context.
pub(crate) async fn pausa_navegacion() {
    tokio::time::sleep(Duration::from_millis(1500)).await;
}

pub(crate) fn fmt_hora(hora: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    match hora {
        Some(h) => h.with_timezone(&chrono::Local).format("%d/%m/%Y %H:%M:%S").to_string(),
        None => "—".to_string(),
    }
}

pub(crate) fn fmt_id(id: &Option<i64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_detection_is_lenient() {
        assert!(es_si("s"));
        assert!(es_si(" SI "));
        assert!(es_si("sí"));
        assert!(!es_si("no"));
        assert!(!es_si(""));
    }

    #[test]
    fn missing_login_time_renders_dash() {
        assert_eq!(fmt_hora(&None), "—");
        assert!(fmt_hora(&Some(chrono::Utc::now())).contains('/'));
    }
}
