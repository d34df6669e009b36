//! NoteKeep terminal shell.
//!
//! # Responsibility
//! - Drive `notekeep_core` from stdin commands for local use and smoke checks.
//! - Optionally enable file logging via `NOTEKEEP_LOG_DIR`.

mod shell;

use notekeep_core::{default_log_level, init_logging, NoteStore};
use shell::Shell;
use std::io;

const LOG_DIR_ENV: &str = "NOTEKEEP_LOG_DIR";
const LOG_LEVEL_ENV: &str = "NOTEKEEP_LOG_LEVEL";

fn main() -> io::Result<()> {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!(
        "notekeep {} (core ping={})",
        notekeep_core::core_version(),
        notekeep_core::ping()
    );
    let stdin = io::stdin();
    let mut shell = Shell::new(NoteStore::new(), io::stdout().lock());
    shell.run(stdin.lock())
}
