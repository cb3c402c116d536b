pub mod commands;
pub mod config;
pub mod events;
pub mod images;
pub mod query;
pub mod state;

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use pinwall_store::Database;

pub use crate::config::WallConfig;
pub use crate::state::{Receipt, Wall};

/// Install the global `fmt` subscriber. `RUST_LOG` wins over
/// `config.log_filter`. Calling this more than once is harmless.
pub fn init_tracing(config: &WallConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Open the wall backed by the SQLite database named in `config`, or the
/// platform default when none is given.
pub fn open(config: &WallConfig) -> anyhow::Result<Wall<Database>> {
    let db = match &config.database_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            Database::open_at(path).with_context(|| format!("opening {}", path.display()))?
        }
        None => Database::new().context("opening default database")?,
    };

    tracing::info!(
        app = pinwall_shared::constants::APP_NAME,
        path = ?db.path(),
        "starting wall session"
    );
    Ok(Wall::open(db, config))
}
