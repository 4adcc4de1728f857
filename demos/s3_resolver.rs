//! # S3 Resolver Example
//!
//! Lists the resumes folder from an S3 bucket and prints a presigned
//! download URL for each object.
//!
//! ## Usage
//!
//! ```sh
//! KESTREL_BUCKET=my-bucket cargo run --example s3_resolver --features "resolver s3"
//! ```

use aws_config::BehaviorVersion;
use kestrel::prelude::*;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Config
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3_client = aws_sdk_s3::Client::new(&aws_config);

    let bucket = env::var("KESTREL_BUCKET").expect("KESTREL_BUCKET env var required");

    let store = S3ObjectStore::new(
        s3_client,
        S3Config {
            bucket,
            prefix: Some("assets/v1/".to_string()),
            url_ttl: Duration::from_secs(900),
        },
    );
    let resolver = FolderResolver::new(store);

    for url in resolver.resume_urls().await? {
        println!("{url}");
    }

    Ok(())
}
