//! Golden-file storage: path resolution plus the read/write/open roles.
//!
//! The store is split into one trait per role ([`Reader`], [`Writer`],
//! [`Opener`]) so strategies only see the capability they need. [`GoldenFile`]
//! is the disk-backed implementation used by default; it resolves every name
//! through a pluggable path function and creates parent directories on write.
//!
//! Streaming open is an optional capability: [`Store::opener`] is a probe that
//! defaults to `None`, and only stores that can hand out a live read handle
//! (like `GoldenFile`) override it. The line loader uses this probe and fails
//! with a capability diagnostic when the probe comes back empty.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{GoldenError, Result};

/// Reads the full contents of the golden file recorded under `name`.
pub trait Reader {
    fn read(&self, name: &str) -> Result<Vec<u8>>;
}

/// Writes the golden file recorded under `name`, replacing any previous
/// contents.
pub trait Writer {
    fn write(&self, name: &str, data: &[u8]) -> Result<()>;
}

/// Opens the golden file recorded under `name` for streaming reads.
pub trait Opener {
    fn open(&self, name: &str) -> Result<Box<dyn std::io::BufRead>>;
}

/// A full golden-file store: read plus write, with streaming open as an
/// optional capability.
pub trait Store: Reader + Writer {
    /// Capability probe for streaming reads. Stores that cannot produce a
    /// live handle keep the default.
    fn opener(&self) -> Option<&dyn Opener> {
        None
    }
}

/// Maps `(namespace, name)` to the path of the golden file.
pub type PathFn = dyn Fn(&str, &str) -> PathBuf + Send + Sync;

/// The default layout: `testdata/<namespace>/golden/<name>.golden`.
pub fn default_golden_path(namespace: &str, name: &str) -> PathBuf {
    Path::new("testdata")
        .join(namespace)
        .join("golden")
        .join(format!("{name}.golden"))
}

/// Disk-backed golden-file store.
///
/// Holds a namespace and a path resolver; stateless beyond that. One instance
/// is created per harness and reused across assertions. Distinct names map to
/// distinct paths under the default resolver, so golden files never collide
/// unless a custom resolver chooses to collide them.
pub struct GoldenFile {
    namespace: String,
    resolve: Box<PathFn>,
}

impl GoldenFile {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            resolve: Box::new(default_golden_path),
        }
    }

    /// Replaces the path resolver, e.g. to store golden files with a `.json`
    /// extension or under a different directory layout.
    pub fn with_resolver<F>(mut self, resolve: F) -> Self
    where
        F: Fn(&str, &str) -> PathBuf + Send + Sync + 'static,
    {
        self.resolve = Box::new(resolve);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolves a test case name to its golden file path.
    pub fn path(&self, name: &str) -> PathBuf {
        (self.resolve)(&self.namespace, name)
    }
}

impl Reader for GoldenFile {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path(name);
        fs::read(&path).map_err(|source| GoldenError::Read {
            name: name.to_string(),
            path,
            source,
        })
    }
}

impl Writer for GoldenFile {
    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GoldenError::Write {
                name: name.to_string(),
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, data).map_err(|source| GoldenError::Write {
            name: name.to_string(),
            path,
            source,
        })
    }
}

impl Opener for GoldenFile {
    fn open(&self, name: &str) -> Result<Box<dyn std::io::BufRead>> {
        let path = self.path(name);
        let file = File::open(&path).map_err(|source| GoldenError::Open {
            name: name.to_string(),
            path,
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

impl Store for GoldenFile {
    fn opener(&self) -> Option<&dyn Opener> {
        Some(self)
    }
}
