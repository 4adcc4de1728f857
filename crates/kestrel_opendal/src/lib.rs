use std::time::Duration;

use kestrel_core::prelude::*;
use opendal::Operator;

#[derive(Clone)]
pub struct OpendalObjectStore {
    op: Operator,
    url_ttl: Duration,
}

impl OpendalObjectStore {
    /// Create a new store from an OpenDAL Operator.
    /// The Operator can be configured for any supported backend e.g., gcs, s3, azblob.
    pub fn new(op: Operator, url_ttl: Duration) -> Self {
        Self { op, url_ttl }
    }
}

fn dir_path(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{prefix}/")
    }
}

impl ObjectStore for OpendalObjectStore {
    type Handle = String;

    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let path = dir_path(prefix);

        match self.op.list_with(&path).recursive(true).await {
            Ok(entries) => Ok(entries
                .iter()
                .filter(|entry| entry.metadata().mode().is_file())
                .map(|entry| entry.path().to_string())
                .collect()),
            Err(e) if e.kind() == opendal::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Unavailable(format!("OpenDAL List Error: {e}"))),
        }
    }

    async fn download_url(&self, handle: &String) -> Result<String, StoreError> {
        let request = self
            .op
            .presign_read(handle, self.url_ttl)
            .await
            .map_err(|e| StoreError::Unavailable(format!("OpenDAL Presign Error: {e}")))?;

        Ok(request.uri().to_string())
    }
}
