//! Session configuration.
//!
//! Every field has a default so a wall can be opened with
//! `WallConfig::default()`. Hosts may embed the struct in their own settings
//! file; keys are camelCase and missing keys fall back to the defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use pinwall_shared::constants::NOTICE_TTL_SECS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WallConfig {
    /// SQLite file holding the snapshot.
    /// Default: `None`, meaning `pinwall.db` in the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Seed the sample board when nothing has been stored yet.
    /// Default: `true`
    pub seed_on_first_run: bool,

    /// Lifetime of transient notices.
    /// Default: `5`
    pub notice_ttl_secs: u64,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            seed_on_first_run: true,
            notice_ttl_secs: NOTICE_TTL_SECS,
            log_filter: "pinwall_client=info,pinwall_store=info,warn".to_string(),
        }
    }
}

impl WallConfig {
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WallConfig::default();
        assert!(config.seed_on_first_run);
        assert_eq!(config.notice_ttl(), Duration::from_secs(5));
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WallConfig =
            serde_json::from_str(r#"{"databasePath": "/tmp/wall.db", "noticeTtlSecs": 2}"#)
                .unwrap();
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/wall.db")));
        assert_eq!(config.notice_ttl_secs, 2);
        assert!(config.seed_on_first_run);
        assert_eq!(config.log_filter, WallConfig::default().log_filter);
    }
}
