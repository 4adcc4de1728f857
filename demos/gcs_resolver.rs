//! # GCS Resolver Example
//!
//! Lists the team contracts folder from a Google Cloud Storage bucket via
//! OpenDAL and prints a presigned download URL for each object.
//!
//! ## Usage
//!
//! ```sh
//! KESTREL_BUCKET=my-bucket cargo run --example gcs_resolver --features "resolver opendal"
//! ```

use kestrel::prelude::*;
use opendal::{Operator, services::Gcs};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // This example uses the GCS backend, but you can swap the builder for
    // S3, Azure, etc. (e.g., opendal::services::S3).
    let bucket = env::var("KESTREL_BUCKET").expect("KESTREL_BUCKET env var required");
    let builder = Gcs::default().bucket(&bucket);

    let op = Operator::new(builder)
        .expect("Failed to build OpenDAL operator")
        .finish();

    let store = OpendalObjectStore::new(op, Duration::from_secs(900));
    let resolver = FolderResolver::new(store);

    for url in resolver.team_contract_urls().await? {
        println!("{url}");
    }

    Ok(())
}
