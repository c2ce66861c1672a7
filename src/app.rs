//!
//! Portal application loop
//! -----------------------
//! Parses command-line flags, wires the session store, demo fixture and API
//! client together, optionally performs a one-shot login from flags, and then
//! drives screen-to-screen navigation until a screen resolves to exit.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use rustyline::DefaultEditor;

use crate::api::ApiClient;
use crate::config::Config;
use crate::demo;
use crate::guard::{redirect_by_role, Screen};
use crate::pages::{self, Nav, ScreenCtx};
use crate::session::{FileSessionStore, Session, SessionStore};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--api-url <url>] [--state-dir <dir>] [--email <e> --password <p>]\n\nFlags:\n  --api-url <url>      Backend base URL (default: $PORTAL_API_URL or http://localhost:8080)\n  --state-dir <dir>    Local state directory (default: $PORTAL_STATE_DIR or .portal)\n  --email <e>          One-shot login before entering the portal (with --password)\n  --password <p>       Password for --email\n  -h, --help           Show this help\n\nScreens:\n  login                iniciar sesión o ir al registro\n  registro             crear una cuenta nueva (rol USUARIO)\n  admin                panel de administración (rol ADMIN)\n  cliente              panel de cliente (rol USUARIO)\n\nExamples:\n  {program}\n  {program} --api-url http://localhost:8080\n  {program} --email admin@ejemplo.com --password admin123"
    );
}

pub async fn run() -> Result<()> {
    println!(
        r"  _____ _                _        ____            _        _
 |_   _(_) ___ _ __   __| | __ _ |  _ \ ___  _ __| |_ __ _| |
   | | | |/ _ \ '_ \ / _` |/ _` || |_) / _ \| '__| __/ _` | |
   | | | |  __/ | | | (_| | (_| ||  __/ (_) | |  | || (_| | |
   |_| |_|\___|_| |_|\__,_|\__,_||_|   \___/|_|   \__\__,_|_|
                         Portal de tienda"
    );

    let mut args: Vec<String> = env::args().collect();
    let program = args.remove(0);

    let mut cfg = Config::from_env();
    let mut login_email: Option<String> = None;
    let mut login_password: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--api-url" => {
                if i + 1 >= args.len() { eprintln!("--api-url requires a value"); print_usage(&program); std::process::exit(2); }
                cfg.api_url = args[i + 1].clone();
                i += 2; continue;
            }
            "--state-dir" => {
                if i + 1 >= args.len() { eprintln!("--state-dir requires a value"); print_usage(&program); std::process::exit(2); }
                cfg.state_dir = args[i + 1].clone().into();
                i += 2; continue;
            }
            "--email" => {
                if i + 1 >= args.len() { eprintln!("--email requires a value"); print_usage(&program); std::process::exit(2); }
                login_email = Some(args[i + 1].clone());
                i += 2; continue;
            }
            "--password" => {
                if i + 1 >= args.len() { eprintln!("--password requires a value"); print_usage(&program); std::process::exit(2); }
                login_password = Some(args[i + 1].clone());
                i += 2; continue;
            }
            "-h" | "--help" => {
                print_usage(&program);
                return Ok(());
            }
            unk => {
                eprintln!("Unrecognized argument: {}", unk);
                print_usage(&program);
                std::process::exit(2);
            }
        }
    }

    // Ensure the state directory exists (create if missing)
    if let Err(e) = fs::create_dir_all(&cfg.state_dir) {
        eprintln!("Failed to ensure state directory '{}': {}", cfg.state_dir.display(), e);
    }

    let store = FileSessionStore::new(&cfg.state_dir);
    if let Err(e) = demo::ensure_demo_users(&cfg.state_dir) {
        eprintln!("Failed to seed demo users: {}", e.message());
    }

    let api = ApiClient::new(&cfg.api_url)?;
    println!("Backend: {}", api.base_url());

    // Optional one-shot login from flags before entering the screens
    if let (Some(email), Some(password)) = (login_email, login_password) {
        match api.login(&email, &password).await {
            Ok(usuario) => {
                store.set(&Session::from_usuario(&usuario))?;
                println!("sesión iniciada como {} ({})", usuario.email, usuario.rol);
            }
            Err(e) => eprintln!("error: {}", e.message()),
        }
    }

    let mut ed = DefaultEditor::new().context("failed to initialize the line editor")?;
    let ctx = ScreenCtx { api: &api, store: &store, state_dir: &cfg.state_dir };

    // Entry point mirrors a fresh page load: route by whatever session exists.
    let mut screen = redirect_by_role(&store);
    loop {
        let nav = match screen {
            Screen::Login => pages::login::run(&ctx, &mut ed).await?,
            Screen::Register => pages::register::run(&ctx, &mut ed).await?,
            Screen::AdminHome => pages::admin::run(&ctx, &mut ed).await?,
            Screen::ClientHome => pages::client::run(&ctx, &mut ed).await?,
        };
        match nav {
            Nav::To(next) => screen = next,
            Nav::Exit => break,
        }
    }
    println!("Hasta pronto.");
    Ok(())
}
