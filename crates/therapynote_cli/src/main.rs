//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `therapynote_core` linkage and
//!   database bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use therapynote_core::db::migrations::latest_version;
use therapynote_core::db::open_db_in_memory;

fn main() {
    println!("therapynote_core version={}", therapynote_core::core_version());

    match open_db_in_memory() {
        Ok(_) => println!("therapynote_core schema_version={}", latest_version()),
        Err(err) => {
            eprintln!("database bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
