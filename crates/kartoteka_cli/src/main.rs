//! Console shell for the kartoteka record store.
//!
//! # Responsibility
//! - Own process startup: logging, the database session, the main menu.
//! - Keep all presentation here; the core crate never prints.

mod input;
mod menu;

use kartoteka_core::{default_log_level, init_logging, open_db};
use log::info;
use std::path::PathBuf;

const DEFAULT_DB_FILE: &str = "kartoteka.db";

fn main() {
    if let Err(reason) = init_shell_logging() {
        eprintln!("warning: logging disabled: {reason}");
    }

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    info!("event=shell_start module=cli status=ok db_path={db_path}");
    menu::main_menu(&conn);
    info!("event=shell_stop module=cli status=ok");
}

fn init_shell_logging() -> Result<(), String> {
    let log_dir = match std::env::var("KARTOTEKA_LOG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir()
            .map_err(|err| format!("cannot resolve working directory: {err}"))?
            .join("logs"),
    };
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| "log directory is not valid UTF-8".to_string())?;
    init_logging(default_log_level(), log_dir)
}
