//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `campus_core` linkage, configuration and database bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use campus_core::{init_logging, pos_service, user_service, CoreConfig};
use log::info;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("campus_core ping={}", campus_core::ping());
    println!("campus_core version={}", campus_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("campus_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, &log_dir.to_string_lossy())?;
    }

    let conn = config.open_database()?;
    let pos_count = pos_service(&conn).get_all()?.len();
    let user_count = user_service(&conn).get_all()?.len();
    info!("event=cli_probe module=cli status=ok pos_count={pos_count} user_count={user_count}");

    match &config.db_path {
        Some(path) => println!("campus_core db={}", path.display()),
        None => println!("campus_core db=:memory:"),
    }
    println!("campus_core pos_count={pos_count} user_count={user_count}");
    Ok(())
}
