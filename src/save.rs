//! Saver strategies: turn an actual value into the bytes of a golden file.
//!
//! Each saver is a single-method strategy paired with a loader in
//! [`crate::load`]; the pair must round-trip (`load(save(x)) == x` under the
//! pair's equality). Savers receive a [`Writer`] rather than a full store, so
//! the only side effect they can perform is the golden-file write itself.

use std::fmt::Display;

use serde::Serialize;

use crate::error::{GoldenError, Result};
use crate::store::Writer;

/// Serializes an actual value of type `A` and writes it through `writer`.
pub trait Saver<A> {
    fn save(&self, actual: &A, name: &str, writer: &dyn Writer) -> Result<()>;
}

/// Adapter that lets a plain closure act as a [`Saver`].
pub struct SaverFn<F>(pub F);

impl<A, F> Saver<A> for SaverFn<F>
where
    F: Fn(&A, &str, &dyn Writer) -> Result<()>,
{
    fn save(&self, actual: &A, name: &str, writer: &dyn Writer) -> Result<()> {
        (self.0)(actual, name, writer)
    }
}

/// Writes the actual bytes unchanged.
pub struct BytesSaver;

impl Saver<Vec<u8>> for BytesSaver {
    fn save(&self, actual: &Vec<u8>, name: &str, writer: &dyn Writer) -> Result<()> {
        writer.write(name, actual)
    }
}

/// Writes the actual value as pretty-printed JSON (2-space indent).
pub struct JsonSaver;

impl<A: Serialize> Saver<A> for JsonSaver {
    fn save(&self, actual: &A, name: &str, writer: &dyn Writer) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(actual).map_err(|source| GoldenError::Encode {
            name: name.to_string(),
            source,
        })?;
        writer.write(name, &bytes)
    }
}

/// Writes the actual value's [`Display`] rendering.
///
/// `Display` is the stringification contract: golden output is exactly
/// `format!("{actual}")`, so it stays stable as long as the type's `Display`
/// impl does.
pub struct DisplaySaver;

impl<A: Display> Saver<A> for DisplaySaver {
    fn save(&self, actual: &A, name: &str, writer: &dyn Writer) -> Result<()> {
        writer.write(name, actual.to_string().as_bytes())
    }
}

/// Writes each element's [`Display`] rendering, joined with `\n` and no
/// trailing newline. Elements containing newlines will split on load.
pub struct LinesSaver;

impl<T: Display> Saver<Vec<T>> for LinesSaver {
    fn save(&self, actual: &Vec<T>, name: &str, writer: &dyn Writer) -> Result<()> {
        let joined = actual
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        writer.write(name, joined.as_bytes())
    }
}
