//! Client configuration from the environment.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Configuration for the chronicle client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory the vault keeps chronicle files in.
    pub vault_dir: PathBuf,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CHRONICLE_DIR` - Vault directory (default: platform data dir)
    pub fn from_env() -> Self {
        let vault_dir = read_env::<PathBuf>("CHRONICLE_DIR").unwrap_or_else(default_vault_dir);
        Self { vault_dir }
    }
}

/// Platform data directory for the vault, falling back to the working
/// directory when the platform reports no home.
fn default_vault_dir() -> PathBuf {
    ProjectDirs::from("", "", "chronicle")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("chronicles"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
