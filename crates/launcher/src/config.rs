//! Launch configuration for a supervised browser process

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Configuration handed to a browser process at launch
///
/// `custom_data_dir` records who owns `user_data_dir`: a caller-supplied
/// directory is left alone at teardown, an engine-allocated one is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    pub id: String,
    pub user_data_dir: PathBuf,
    pub custom_data_dir: bool,
    pub headless: bool,
}

impl LaunchConfig {
    /// Config with an engine-owned profile directory under the OS temp dir.
    pub fn new() -> Self {
        let id = Uuid::now_v7().to_string();
        let user_data_dir = std::env::temp_dir().join(format!("launcher-profile-{id}"));
        Self {
            id,
            user_data_dir,
            custom_data_dir: false,
            headless: true,
        }
    }

    /// Use a caller-owned data directory; it will survive teardown.
    pub fn with_data_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            user_data_dir: path.into(),
            custom_data_dir: true,
            ..Self::new()
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::new()
    }
}
