mod assignments;
mod config;

pub use assignments::AssignmentStore;
pub use config::Config;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/homeroom[-dev]/` based on HOMEROOM_ENV.
///
/// Set HOMEROOM_ENV=dev to use the development data directory, or
/// HOMEROOM_DATA_DIR to point at an explicit location (used by tests).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var("HOMEROOM_DATA_DIR") {
        Ok(explicit) => PathBuf::from(explicit),
        Err(_) => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HOMEROOM_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("homeroom-dev")
            } else {
                base_dir.join("homeroom")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
