/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Configuration for locating template files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FragmentError, FragmentResult};

/// Where template names are looked up on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentConfig {
    /// Directory that template names are rooted at.
    /// Default: `html`.
    pub base_dir: PathBuf,

    /// Extension appended to template names that have none (e.g. `"html"`).
    /// Default: none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_extension: Option<String>,
}

impl Default for FragmentConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("html"),
            default_extension: None,
        }
    }
}

impl FragmentConfig {
    /// Create a config rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Set the extension used for names without one.
    pub fn with_default_extension(mut self, ext: impl Into<String>) -> Self {
        self.default_extension = Some(ext.into());
        self
    }

    /// Parse a config from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(content: &str) -> FragmentResult<Self> {
        serde_json::from_str(content).map_err(|e| FragmentError::ConfigParse(e.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> FragmentResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FragmentError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), base_dir = %config.base_dir.display(), "Loaded fragment config");
        Ok(config)
    }
}
