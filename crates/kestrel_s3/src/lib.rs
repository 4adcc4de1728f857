use std::time::Duration;

use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use kestrel_core::prelude::*;
use tracing::{debug, error, instrument};

/// Connection parameters for [`S3ObjectStore`], supplied once by the
/// composition root. Credentials live on the [`Client`].
#[derive(Clone, Debug)]
pub struct S3Config {
    pub bucket: String,
    /// Optional key prefix prepended to every folder path.
    pub prefix: Option<String>,
    /// How long resolved download URLs stay valid.
    pub url_ttl: Duration,
}

#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    prefix: String,
    url_ttl: Duration,
}

impl S3ObjectStore {
    pub fn new(client: Client, config: S3Config) -> Self {
        Self {
            client,
            bucket: config.bucket,
            prefix: config.prefix.unwrap_or_default(),
            url_ttl: config.url_ttl,
        }
    }

    fn key(&self, path: &str) -> String {
        self.prefix
            .is_empty()
            .then(|| path.to_string())
            .unwrap_or(format!("{}{path}", self.prefix))
    }
}

impl ObjectStore for S3ObjectStore {
    type Handle = String;

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let key_prefix = self.key(prefix);

        debug!("Listing objects in S3...");
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(&key_prefix)
            .into_paginator()
            .send();

        let mut handles = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| {
                error!("Failed to list objects: {e:?}");
                StoreError::Unavailable(format!("S3 List Error: {e:?}"))
            })?;

            for object in page.contents() {
                if let Some(key) = object.key() {
                    handles.push(key.to_string());
                }
            }
        }

        debug!(count = handles.len(), "Listing complete");
        Ok(handles)
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn download_url(&self, handle: &String) -> Result<String, StoreError> {
        let presigning = PresigningConfig::expires_in(self.url_ttl)
            .map_err(|e| StoreError::Unavailable(format!("S3 Presigning Config Error: {e}")))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(handle)
            .presigned(presigning)
            .await
            .map_err(|e| {
                error!("Failed to presign {handle}: {e:?}");
                StoreError::Unavailable(format!("S3 Presign Error: {e:?}"))
            })?;

        Ok(request.uri().to_string())
    }
}
