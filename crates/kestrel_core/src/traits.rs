use crate::error::*;

/// The blob store collaborator: enumerates stored objects by logical
/// folder and resolves each one to a fetchable URL.
///
/// Credentials and session lifecycle belong to the concrete backend's
/// client; implementations receive it fully configured.
pub trait ObjectStore: Send + Sync + 'static + Clone {
    /// Opaque handle to one stored object, as produced by
    /// [`ObjectStore::list_objects`].
    type Handle: Send + Sync;

    /// Lists every object whose logical path starts with `prefix`, in the
    /// order the backing store returns them. An unknown or empty folder
    /// yields an empty listing, not an error.
    fn list_objects(
        &self,
        prefix: &str,
    ) -> impl Future<Output = Result<Vec<Self::Handle>, StoreError>> + Send;

    /// Resolves a listed object to a publicly fetchable URL. Read-only;
    /// has no side effects on the store.
    fn download_url(
        &self,
        handle: &Self::Handle,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;
}
