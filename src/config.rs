use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Claimlens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/Claimlens/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Claimlens")
}

/// Default location of the exclusion policy file.
pub fn exclusion_policy_path() -> PathBuf {
    app_data_dir().join("exclusion_policy.json")
}

#[derive(Error, Debug)]
pub enum PolicyLoadError {
    #[error("Cannot read policy file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed policy file {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

/// Policy terms-and-conditions exclusions: items and whole categories that
/// are never reimbursable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    pub excluded_items: Vec<String>,
    pub excluded_categories: Vec<String>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        // Built-in fallback so evaluation never blocks on missing config.
        Self {
            excluded_items: vec![
                "protein supplement".into(),
                "multivitamin".into(),
                "cosmetic cream".into(),
                "sunscreen".into(),
                "health drink".into(),
            ],
            excluded_categories: vec!["supplement".into(), "cosmetic".into()],
        }
    }
}

impl ExclusionPolicy {
    /// Load the policy from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PolicyLoadError> {
        let raw = fs::read_to_string(path).map_err(|source| PolicyLoadError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| PolicyLoadError::Malformed {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load the policy, falling back to the built-in defaults when the file
    /// is missing or malformed. The fallback is logged as a caller-visible
    /// advisory, never surfaced as an error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(policy) => policy,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Exclusion policy unavailable, using built-in defaults"
                );
                Self::default()
            }
        }
    }
}
