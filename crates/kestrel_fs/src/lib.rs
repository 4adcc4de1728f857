//! # Kestrel filesystem store
//!
//! A local filesystem backend, mainly for development and tests.
//!
//! Objects are plain files under a root directory; download URLs are
//! resolved against a public base URL fronting that directory, e.g. a
//! static file server.
//!
//! ## Usage
//!
//! ```no_run
//! use kestrel_fs::FsObjectStore;
//!
//! let store = FsObjectStore::new("./assets", "https://assets.example.com");
//! ```

use std::path::PathBuf;

use kestrel_core::prelude::*;
use tokio::fs;

#[derive(Clone)]
pub struct FsObjectStore {
    root: PathBuf,
    base_url: String,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }
}

impl ObjectStore for FsObjectStore {
    type Handle = String;

    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let dir = self.root.join(prefix);
        if !dir.is_dir() {
            // A folder nobody has written to yet is empty, not an error.
            return Ok(Vec::new());
        }

        let mut pending = vec![dir];
        let mut objects = Vec::new();

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await.map_err(StoreError::Io)?;
            while let Some(entry) = entries.next_entry().await.map_err(StoreError::Io)? {
                let path = entry.path();
                if entry.file_type().await.map_err(StoreError::Io)?.is_dir() {
                    pending.push(path);
                } else {
                    let rel = path
                        .strip_prefix(&self.root)
                        .map_err(|_| {
                            StoreError::Unavailable(format!(
                                "entry escapes store root: {}",
                                path.display()
                            ))
                        })?
                        .to_string_lossy()
                        .replace('\\', "/");
                    objects.push(rel);
                }
            }
        }

        // Directory iteration order is platform dependent; sort so the
        // listing is stable across calls.
        objects.sort();
        Ok(objects)
    }

    async fn download_url(&self, handle: &String) -> Result<String, StoreError> {
        Ok(format!("{}/{handle}", self.base_url.trim_end_matches('/')))
    }
}
