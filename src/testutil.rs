//! In-memory stores for unit tests. Disk-backed behavior is covered by the
//! integration tests against a temp directory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor};
use std::path::PathBuf;

use crate::error::{GoldenError, Result};
use crate::store::{Opener, Reader, Store, Writer};

/// A map-backed store with no streaming capability.
pub struct MemStore {
    files: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { files: RefCell::new(HashMap::new()) }
    }

    pub fn put(&self, name: &str, data: Vec<u8>) {
        self.files.borrow_mut().insert(name.to_string(), data);
    }

    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(name).cloned()
    }
}

impl Reader for MemStore {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.contents(name).ok_or_else(|| GoldenError::Read {
            name: name.to_string(),
            path: PathBuf::from(name),
            source: io::Error::new(io::ErrorKind::NotFound, "no such golden entry"),
        })
    }
}

impl Writer for MemStore {
    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        self.put(name, data.to_vec());
        Ok(())
    }
}

impl Store for MemStore {}

/// A map-backed store that also supports streaming open.
pub struct StreamStore {
    mem: MemStore,
}

impl StreamStore {
    pub fn new() -> Self {
        Self { mem: MemStore::new() }
    }

    pub fn put(&self, name: &str, data: Vec<u8>) {
        self.mem.put(name, data);
    }

    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.mem.contents(name)
    }
}

impl Reader for StreamStore {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.mem.read(name)
    }
}

impl Writer for StreamStore {
    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        self.mem.write(name, data)
    }
}

impl Opener for StreamStore {
    fn open(&self, name: &str) -> Result<Box<dyn io::BufRead>> {
        let data = self.contents(name).ok_or_else(|| GoldenError::Open {
            name: name.to_string(),
            path: PathBuf::from(name),
            source: io::Error::new(io::ErrorKind::NotFound, "no such golden entry"),
        })?;
        Ok(Box::new(Cursor::new(data)))
    }
}

impl Store for StreamStore {
    fn opener(&self) -> Option<&dyn Opener> {
        Some(self)
    }
}
