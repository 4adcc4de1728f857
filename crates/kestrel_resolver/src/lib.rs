//! Turns a logical folder name into the download URLs of everything
//! stored under it, via any [`ObjectStore`] backend.

use futures::future::try_join_all;
use kestrel_core::prelude::*;
use tracing::{debug, instrument};

/// Folder holding team contract documents.
pub const TEAM_CONTRACTS_FOLDER: &str = "contracts/teams";

/// Folder holding submitted resumes.
pub const RESUMES_FOLDER: &str = "resumes";

#[derive(Clone)]
pub struct FolderResolver<S: ObjectStore> {
    store: S,
}

impl<S: ObjectStore> FolderResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a download URL for every object stored under `folder`,
    /// paired with the store's listing order.
    ///
    /// Resolutions run concurrently but the output keeps listing order.
    /// Fails fast: an error while listing or while resolving any single
    /// object aborts the whole call, so no partial sequence is returned.
    #[instrument(skip(self))]
    pub async fn list_download_urls(&self, folder: &str) -> Result<Vec<String>, StoreError> {
        let handles = self.store.list_objects(folder).await?;
        debug!(count = handles.len(), "Resolving download URLs");

        // try_join_all keeps results in input order.
        let urls = try_join_all(handles.iter().map(|h| self.store.download_url(h))).await?;
        Ok(urls)
    }

    /// Download URLs for the team contracts folder.
    pub async fn team_contract_urls(&self) -> Result<Vec<String>, StoreError> {
        self.list_download_urls(TEAM_CONTRACTS_FOLDER).await
    }

    /// Download URLs for the resumes folder.
    pub async fn resume_urls(&self) -> Result<Vec<String>, StoreError> {
        self.list_download_urls(RESUMES_FOLDER).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct StubStore {
        objects: Vec<&'static str>,
        fail_listing: bool,
        fail_resolving: Option<&'static str>,
    }

    impl ObjectStore for StubStore {
        type Handle = String;

        async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
            if self.fail_listing {
                return Err(StoreError::Unavailable("listing refused".into()));
            }
            Ok(self
                .objects
                .iter()
                .filter(|o| o.starts_with(prefix))
                .map(|o| o.to_string())
                .collect())
        }

        async fn download_url(&self, handle: &String) -> Result<String, StoreError> {
            if self.fail_resolving == Some(handle.as_str()) {
                return Err(StoreError::Unavailable(format!("no URL for {handle}")));
            }
            Ok(format!("https://assets.example.com/{handle}?sig=stub"))
        }
    }

    #[tokio::test]
    async fn urls_pair_with_listing_order() {
        let resolver = FolderResolver::new(StubStore {
            objects: vec![
                "contracts/teams/zeta.pdf",
                "contracts/teams/alpha.pdf",
                "resumes/someone.pdf",
            ],
            ..Default::default()
        });

        let urls = resolver.team_contract_urls().await.unwrap();
        assert_eq!(
            urls,
            vec![
                "https://assets.example.com/contracts/teams/zeta.pdf?sig=stub",
                "https://assets.example.com/contracts/teams/alpha.pdf?sig=stub",
            ]
        );
    }

    #[tokio::test]
    async fn empty_folder_yields_empty_sequence() {
        let resolver = FolderResolver::new(StubStore {
            objects: vec!["contracts/teams/alpha.pdf"],
            ..Default::default()
        });

        let urls = resolver.resume_urls().await.unwrap();
        assert!(urls.is_empty());
    }

    #[tokio::test]
    async fn listing_failure_surfaces_to_caller() {
        let resolver = FolderResolver::new(StubStore {
            fail_listing: true,
            ..Default::default()
        });

        let err = resolver.list_download_urls("resumes").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn single_resolution_failure_aborts_whole_call() {
        let resolver = FolderResolver::new(StubStore {
            objects: vec!["resumes/a.pdf", "resumes/b.pdf", "resumes/c.pdf"],
            fail_resolving: Some("resumes/b.pdf"),
            ..Default::default()
        });

        let err = resolver.resume_urls().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn repeated_calls_yield_identical_results() {
        let resolver = FolderResolver::new(StubStore {
            objects: vec!["resumes/a.pdf", "resumes/b.pdf"],
            ..Default::default()
        });

        let first = resolver.resume_urls().await.unwrap();
        let second = resolver.resume_urls().await.unwrap();
        assert_eq!(first, second);
    }
}
