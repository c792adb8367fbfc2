/*
 * rows.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Row sources for rendering one fragment per fetched row.
//!
//! A row source is a lazy, finite, non-restartable sequence of rows, each a
//! [`KeyMap`] of column name to text. Database cursors, CSV readers and
//! plain iterators all fit behind these traits. Callers stop fetching at
//! the first exhaustion signal and never poll the source again.

use crate::keys::KeyMap;

/// A source that yields rows until exhausted.
pub trait RowSource {
    /// Fetch the next row, or `None` once the source is exhausted.
    fn fetch_row(&mut self) -> Option<KeyMap>;
}

impl<I> RowSource for I
where
    I: Iterator<Item = KeyMap>,
{
    fn fetch_row(&mut self) -> Option<KeyMap> {
        self.next()
    }
}

/// A row source whose fetch can fail, such as a live query cursor.
pub trait TryRowSource {
    /// Error reported by the underlying source.
    type Error;

    /// Fetch the next row, `Ok(None)` once exhausted.
    fn try_fetch_row(&mut self) -> Result<Option<KeyMap>, Self::Error>;
}

impl<I, E> TryRowSource for I
where
    I: Iterator<Item = Result<KeyMap, E>>,
{
    type Error = E;

    fn try_fetch_row(&mut self) -> Result<Option<KeyMap>, E> {
        self.next().transpose()
    }
}
