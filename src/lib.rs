pub use kestrel_core::*;

#[cfg(feature = "resolver")]
pub mod resolver {
    pub use kestrel_resolver::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use kestrel_client::*;
}

#[cfg(feature = "fs")]
pub mod fs {
    pub use kestrel_fs::*;
}

#[cfg(feature = "s3")]
pub mod s3 {
    pub use kestrel_s3::*;
}

#[cfg(feature = "opendal")]
pub mod opendal {
    pub use kestrel_opendal::*;
}

pub mod prelude {
    pub use kestrel_core::prelude::*;

    #[cfg(feature = "resolver")]
    pub use kestrel_resolver::{FolderResolver, RESUMES_FOLDER, TEAM_CONTRACTS_FOLDER};

    #[cfg(feature = "client")]
    pub use kestrel_client::{ResourceClient, ResourceClientConfig};

    #[cfg(feature = "fs")]
    pub use kestrel_fs::FsObjectStore;

    #[cfg(feature = "s3")]
    pub use kestrel_s3::{S3Config, S3ObjectStore};

    #[cfg(feature = "opendal")]
    pub use kestrel_opendal::OpendalObjectStore;
}
