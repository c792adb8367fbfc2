/*
 * template.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The fragment template.
//!
//! A [`Template`] holds immutable source text containing `{@name}` markers
//! and a mutable [`KeyMap`] of replacement values. Rendering replaces every
//! occurrence of each key's marker with its value, one key at a time in map
//! order. Markers without a value are left as they are; values without a
//! marker are ignored.

use std::path::{Path, PathBuf};

use crate::error::{FragmentError, FragmentResult};
use crate::keys::{KeyMap, marker, scan_markers};
use crate::rows::{RowSource, TryRowSource};
use crate::source::TemplateSource;

/// A loaded template with its current key values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template text, never modified after load.
    source: String,

    /// File the text was read from, if any.
    path: Option<PathBuf>,

    /// Current replacement values.
    values: KeyMap,
}

impl Template {
    /// Create a template from text already in memory.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: None,
            values: KeyMap::new(),
        }
    }

    /// Alias for [`Template::new`].
    pub fn from_source(source: impl Into<String>) -> Self {
        Self::new(source)
    }

    /// Read a template from a full file path.
    ///
    /// # Errors
    /// Returns [`FragmentError::FileRead`] if the file is missing or unreadable.
    pub fn from_file(path: impl AsRef<Path>) -> FragmentResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| FragmentError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "Loaded template");
        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::new(source)
        })
    }

    /// Load the named template from a source.
    ///
    /// ```ignore
    /// let source = FileSystemSource::new(FragmentConfig::new("html"));
    /// let template = Template::load(&source, "row.html")?;
    /// ```
    pub fn load<S: TemplateSource + ?Sized>(source: &S, name: &str) -> FragmentResult<Self> {
        let text = source.read_template(name)?;
        let path = source.template_path(name);
        tracing::debug!(name, path = ?path, bytes = text.len(), "Loaded template");
        Ok(Self {
            path,
            ..Self::new(text)
        })
    }

    /// The template text as loaded.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The file this template was read from, if it came from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The current key values, in replacement order.
    pub fn keys(&self) -> &KeyMap {
        &self.values
    }

    /// Remove all key values.
    pub fn clear_keys(&mut self) {
        self.values.clear();
    }

    /// Set one key, overwriting any previous value.
    pub fn set_key(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    /// Set every key in `keys`; later duplicates overwrite earlier ones.
    pub fn set_keys<I, K, V>(&mut self, keys: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        for (key, value) in keys {
            self.set_key(key, value);
        }
    }

    /// Render the template with the current key values.
    pub fn content(&self) -> String {
        tracing::trace!(
            keys = self.values.len(),
            unresolved = ?self.unresolved_markers(),
            "Rendering template"
        );
        self.values
            .iter()
            .fold(self.source.clone(), |text, (key, value)| {
                text.replace(&marker(key), value)
            })
    }

    /// Replace all key values with `keys` and render.
    pub fn looped_content<I, K, V>(&mut self, keys: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.clear_keys();
        self.set_keys(keys);
        self.content()
    }

    /// Render one fragment per item and concatenate them in order.
    ///
    /// `mapper` turns each item into the keys for its fragment. Keys set
    /// before the call are discarded.
    pub fn for_each_content<T, I, F, M, K, V>(&mut self, items: I, mut mapper: F) -> String
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> M,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.for_each_content_with(items, |item, _: &()| mapper(item), &())
    }

    /// Like [`Template::for_each_content`], passing `args` to every `mapper` call.
    pub fn for_each_content_with<T, A, I, F, M, K, V>(
        &mut self,
        items: I,
        mut mapper: F,
        args: &A,
    ) -> String
    where
        A: ?Sized,
        I: IntoIterator<Item = T>,
        F: FnMut(T, &A) -> M,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let mut html = String::new();
        let mut count = 0usize;
        for item in items {
            html.push_str(&self.looped_content(mapper(item, args)));
            count += 1;
        }
        tracing::trace!(fragments = count, "Rendered repeated content");
        html
    }

    /// Render one fragment per row fetched from `rows` until it is exhausted.
    pub fn fetched_rows_content<R, F, M, K, V>(&mut self, rows: &mut R, mut mapper: F) -> String
    where
        R: RowSource + ?Sized,
        F: FnMut(KeyMap) -> M,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.fetched_rows_content_with(rows, |row, _: &()| mapper(row), &())
    }

    /// Like [`Template::fetched_rows_content`], passing `args` to every `mapper` call.
    pub fn fetched_rows_content_with<R, A, F, M, K, V>(
        &mut self,
        rows: &mut R,
        mut mapper: F,
        args: &A,
    ) -> String
    where
        R: RowSource + ?Sized,
        A: ?Sized,
        F: FnMut(KeyMap, &A) -> M,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let mut html = String::new();
        let mut count = 0usize;
        while let Some(row) = rows.fetch_row() {
            html.push_str(&self.looped_content(mapper(row, args)));
            count += 1;
        }
        tracing::trace!(rows = count, "Rendered fetched rows");
        html
    }

    /// Render one fragment per row from a fallible source.
    ///
    /// Stops at the first fetch error and returns it; fragments rendered
    /// before the error are discarded.
    pub fn try_fetched_rows_content<R, A, F, M, K, V>(
        &mut self,
        rows: &mut R,
        mut mapper: F,
        args: &A,
    ) -> Result<String, R::Error>
    where
        R: TryRowSource + ?Sized,
        A: ?Sized,
        F: FnMut(KeyMap, &A) -> M,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let mut html = String::new();
        let mut count = 0usize;
        while let Some(row) = rows.try_fetch_row()? {
            html.push_str(&self.looped_content(mapper(row, args)));
            count += 1;
        }
        tracing::trace!(rows = count, "Rendered fetched rows");
        Ok(html)
    }

    /// Distinct marker names in the template text, in order of first appearance.
    pub fn markers(&self) -> Vec<&str> {
        scan_markers(&self.source)
    }

    /// Markers in the template text that have no current value.
    pub fn unresolved_markers(&self) -> Vec<&str> {
        self.markers()
            .into_iter()
            .filter(|name| !self.values.contains_key(*name))
            .collect()
    }
}
