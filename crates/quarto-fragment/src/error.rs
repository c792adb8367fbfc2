/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for loading templates and building key maps.
//!
//! Rendering itself never fails: missing keys leave their markers in place
//! and unused keys are ignored.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or configuring templates.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The template file is missing or unreadable.
    #[error("Failed to read template {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An in-memory source has no template with this name.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// A configuration document could not be parsed.
    #[error("Failed to parse fragment config: {0}")]
    ConfigParse(String),

    /// A value could not be turned into a key map.
    #[error("Failed to build key map: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for fragment operations.
pub type FragmentResult<T> = Result<T, FragmentError>;
