/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template sources.
//!
//! A [`TemplateSource`] turns a template name into template text. The
//! filesystem source roots names at a configured base directory; the memory
//! source serves templates bundled into the application.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::FragmentConfig;
use crate::error::{FragmentError, FragmentResult};

/// Trait for loading template text by name.
pub trait TemplateSource {
    /// Load the full text of the named template.
    fn read_template(&self, name: &str) -> FragmentResult<String>;

    /// The file the named template is read from, if it comes from disk.
    fn template_path(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

/// Source that reads templates from files under a base directory.
///
/// Path resolution:
/// - The name is joined onto the base directory (`card` → `html/card`)
/// - If a default extension is configured and the name has none, it is
///   appended (`card` → `html/card.html`)
#[derive(Debug, Clone, Default)]
pub struct FileSystemSource {
    config: FragmentConfig,
}

impl FileSystemSource {
    pub fn new(config: FragmentConfig) -> Self {
        Self { config }
    }

    /// Source rooted at `base_dir` with no default extension.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(FragmentConfig::new(base_dir))
    }

    pub fn config(&self) -> &FragmentConfig {
        &self.config
    }

    /// Resolve a template name to the path it is read from.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        let path = self.config.base_dir.join(name);
        match &self.config.default_extension {
            Some(ext) if Path::new(name).extension().is_none() && !ext.is_empty() => {
                path.with_extension(ext)
            }
            _ => path,
        }
    }
}

impl TemplateSource for FileSystemSource {
    fn read_template(&self, name: &str) -> FragmentResult<String> {
        let path = self.resolve_path(name);
        std::fs::read_to_string(&path).map_err(|source| FragmentError::FileRead { path, source })
    }

    fn template_path(&self, name: &str) -> Option<PathBuf> {
        Some(self.resolve_path(name))
    }
}

/// Templates held as strings, keyed by name. Nothing touches the disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    templates: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `name`, replacing any earlier template of that name.
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.templates.insert(name.into(), content.into());
        self
    }

    /// Build a source from `(name, content)` pairs.
    pub fn with_templates(
        templates: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|(name, content)| (name.into(), content.into()))
                .collect(),
        }
    }
}

impl TemplateSource for MemorySource {
    fn read_template(&self, name: &str) -> FragmentResult<String> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| FragmentError::TemplateNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_path_default_base_dir() {
        let source = FileSystemSource::default();
        assert_eq!(
            source.resolve_path("row.html"),
            PathBuf::from("html/row.html")
        );
    }

    #[test]
    fn test_resolve_path_appends_default_extension() {
        let source =
            FileSystemSource::new(FragmentConfig::new("/views").with_default_extension("html"));
        assert_eq!(source.resolve_path("row"), PathBuf::from("/views/row.html"));
        assert_eq!(
            source.resolve_path("inc/row"),
            PathBuf::from("/views/inc/row.html")
        );
        // Explicit extension wins
        assert_eq!(source.resolve_path("row.txt"), PathBuf::from("/views/row.txt"));
    }

    #[test]
    fn test_read_template_from_base_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("greeting.html"), "Hello {@name}!").unwrap();

        let source = FileSystemSource::with_base_dir(temp.path());
        assert_eq!(
            source.read_template("greeting.html").unwrap(),
            "Hello {@name}!"
        );
    }

    #[test]
    fn test_read_template_missing_file() {
        let temp = TempDir::new().unwrap();
        let source = FileSystemSource::with_base_dir(temp.path());

        match source.read_template("missing.html") {
            Err(FragmentError::FileRead { path, source }) => {
                assert_eq!(path, temp.path().join("missing.html"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }

    #[test]
    fn test_template_path() {
        let source =
            FileSystemSource::new(FragmentConfig::new("/views").with_default_extension("html"));
        assert_eq!(
            source.template_path("row"),
            Some(PathBuf::from("/views/row.html"))
        );
        assert_eq!(MemorySource::new().template_path("row"), None);
    }

    #[test]
    fn test_memory_source() {
        let mut source = MemorySource::new();
        source.add("header", "<h1>{@title}</h1>");

        assert_eq!(source.read_template("header").unwrap(), "<h1>{@title}</h1>");
        assert!(matches!(
            source.read_template("footer"),
            Err(FragmentError::TemplateNotFound { name }) if name == "footer"
        ));
    }

    #[test]
    fn test_memory_source_with_templates() {
        let source = MemorySource::with_templates([("a", "content a"), ("b", "content b")]);
        assert_eq!(source.read_template("a").unwrap(), "content a");
        assert_eq!(source.read_template("b").unwrap(), "content b");
    }
}
