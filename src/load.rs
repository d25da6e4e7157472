//! Loader strategies: turn golden-file bytes back into an expected value.
//!
//! Mirrors [`crate::save`]: each loader is the reading half of a round-trip
//! pair. Loaders receive the full [`Store`] because the line loader needs the
//! store's optional streaming capability; everything else only calls
//! [`Reader::read`].

use std::io::BufRead;

use serde::de::DeserializeOwned;

use crate::error::{GoldenError, Result};
use crate::store::Store;

/// Deserializes the golden file recorded under `name` into an expected value
/// of type `E`.
pub trait Loader<E> {
    fn load(&self, name: &str, store: &dyn Store) -> Result<E>;
}

/// Adapter that lets a plain closure act as a [`Loader`].
pub struct LoaderFn<F>(pub F);

impl<E, F> Loader<E> for LoaderFn<F>
where
    F: Fn(&str, &dyn Store) -> Result<E>,
{
    fn load(&self, name: &str, store: &dyn Store) -> Result<E> {
        (self.0)(name, store)
    }
}

/// Returns the golden bytes unchanged.
pub struct BytesLoader;

impl Loader<Vec<u8>> for BytesLoader {
    fn load(&self, name: &str, store: &dyn Store) -> Result<Vec<u8>> {
        store.read(name)
    }
}

/// Deserializes the golden file as JSON.
pub struct JsonLoader;

impl<E: DeserializeOwned> Loader<E> for JsonLoader {
    fn load(&self, name: &str, store: &dyn Store) -> Result<E> {
        let bytes = store.read(name)?;
        serde_json::from_slice(&bytes).map_err(|source| GoldenError::Decode {
            name: name.to_string(),
            source,
        })
    }
}

/// Interprets the golden bytes as a UTF-8 string.
pub struct StringLoader;

impl Loader<String> for StringLoader {
    fn load(&self, name: &str, store: &dyn Store) -> Result<String> {
        let bytes = store.read(name)?;
        String::from_utf8(bytes).map_err(|source| GoldenError::Utf8 {
            name: name.to_string(),
            source,
        })
    }
}

/// Streams the golden file as a lazy [`Lines`] sequence.
///
/// Requires the store to support streaming open; loading through a store
/// whose [`Store::opener`] probe returns `None` fails with a capability
/// error. The file handle is acquired here and released when the returned
/// sequence is dropped.
pub struct LinesLoader;

impl Loader<Lines> for LinesLoader {
    fn load(&self, name: &str, store: &dyn Store) -> Result<Lines> {
        let opener = store.opener().ok_or_else(|| GoldenError::Unstreamable {
            name: name.to_string(),
        })?;
        let handle = opener.open(name)?;
        Ok(Lines {
            name: name.to_string(),
            inner: handle.lines(),
        })
    }
}

/// A forward-only, single-pass sequence of golden-file lines.
///
/// Line terminators are stripped. Read failures surface as `Err` items. The
/// underlying handle is owned by the sequence and closed when it is dropped,
/// whether iteration ran to completion or was abandoned early; the sequence
/// is not restartable.
pub struct Lines {
    name: String,
    inner: std::io::Lines<Box<dyn BufRead>>,
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        Some(line.map_err(|source| GoldenError::Stream {
            name: self.name.clone(),
            source,
        }))
    }
}
