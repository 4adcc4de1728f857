//! # Filesystem Resolver Example
//!
//! Lists the team contracts folder from a local directory and resolves
//! each file against a public base URL.
//!
//! ## Usage
//!
//! ```sh
//! cargo run --example fs_resolver --features "resolver fs"
//! ```

use kestrel::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let root = env::var("KESTREL_FS_ROOT").unwrap_or_else(|_| "/tmp/kestrel_assets".to_string());
    let base_url =
        env::var("KESTREL_PUBLIC_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let store = FsObjectStore::new(root, base_url);
    let resolver = FolderResolver::new(store);

    for url in resolver.team_contract_urls().await? {
        println!("{url}");
    }

    Ok(())
}
