//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the engine
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// Loads and provides access to the engine policy.
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// assert_eq!(loader.policy().leave_quotas.annual, 20);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PolicyConfig,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if the file
    /// is missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { policy })
    }

    /// Creates a loader carrying the built-in production policy, without
    /// touching the filesystem.
    pub fn with_defaults() -> Self {
        Self {
            policy: PolicyConfig::default(),
        }
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}
