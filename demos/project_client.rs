//! # Project Client Example
//!
//! Fetches the project collection from a resource API, then re-fetches
//! the first project by id.
//!
//! ## Usage
//!
//! ```sh
//! cargo run --example project_client --features "client"
//! ```

use kestrel::prelude::*;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url =
        env::var("KESTREL_API_URL").unwrap_or_else(|_| "http://localhost:3000/api".to_string());

    let client = ResourceClient::new(ResourceClientConfig {
        base_url,
        collection: "projects".to_string(),
        token: env::var("KESTREL_API_TOKEN").ok(),
        timeout: Some(Duration::from_secs(10)),
    })?;

    let projects = client.fetch_collection().await?;
    println!("Fetched {} projects", projects.len());

    if let Some(first) = projects.first() {
        match client.fetch_one(&first.id).await? {
            Some(project) => println!("{}", serde_json::to_string_pretty(&project)?),
            None => println!("Project {} disappeared between calls", first.id),
        }
    }

    Ok(())
}
