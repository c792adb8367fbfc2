/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder templates for building repeated HTML fragments.
//!
//! A template is a text file containing `{@name}` markers. Rendering is
//! literal substring replacement: there are no conditionals, loops,
//! escaping rules, or nested templates. Repetition happens on the Rust
//! side by rendering the same template once per item or database row and
//! concatenating the results.
//!
//! - Markers without a value are left in the output unchanged
//! - Values without a marker are ignored
//! - Keys are replaced in insertion order (see [`keys`])
//!
//! # Example
//!
//! ```ignore
//! use quarto_fragment::{FileSystemSource, FragmentConfig, Template};
//!
//! let source = FileSystemSource::new(FragmentConfig::new("html"));
//! let mut row = Template::load(&source, "user-row.html")?;
//!
//! // <tr><td>{@name}</td><td>{@email}</td></tr>
//! let html = row.for_each_content(&users, |user| {
//!     [("name", user.name.as_str()), ("email", user.email.as_str())]
//! });
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod rows;
pub mod source;
pub mod template;

// Re-export main types at crate root
pub use config::FragmentConfig;
pub use error::{FragmentError, FragmentResult};
pub use keys::{KeyMap, key_map_from_serialize, marker, scan_markers};
pub use rows::{RowSource, TryRowSource};
pub use source::{FileSystemSource, MemorySource, TemplateSource};
pub use template::Template;
