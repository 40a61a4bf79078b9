//! Durable key-value storage.
use crate::Error;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A string key-value store.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Overwrites the value stored at `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

/// Stores every key in its own file inside a directory.
#[derive(Debug, Clone)]
pub struct Disk {
    directory: PathBuf,
}

impl Disk {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl Storage for Disk {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        fs::create_dir_all(&self.directory)?;
        fs::write(self.path(key), value)?;

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Memory {
    entries: BTreeMap<String, String>,
    writes: usize,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total amount of `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for Memory {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let _ = self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_returns_none_for_missing_keys() {
        let directory = tempfile::tempdir().unwrap();
        let disk = Disk::new(directory.path().join("nested"));

        assert_eq!(disk.get("missing").unwrap(), None);
    }

    #[test]
    fn disk_overwrites_values() {
        let directory = tempfile::tempdir().unwrap();
        let mut disk = Disk::new(directory.path().join("nested"));

        disk.set("key", "[1]").unwrap();
        disk.set("key", "[1,2]").unwrap();

        assert_eq!(disk.get("key").unwrap().as_deref(), Some("[1,2]"));
        assert!(directory.path().join("nested/key.json").exists());
    }

    #[test]
    fn memory_counts_writes() {
        let mut memory = Memory::new();

        memory.set("a", "1").unwrap();
        memory.set("a", "2").unwrap();

        assert_eq!(memory.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(memory.writes(), 2);
    }
}
