use kestrel_fs::FsObjectStore;
use kestrel_resolver::FolderResolver;
use tempfile::TempDir;
use tokio::fs;

async fn seeded_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("contracts/teams"))
        .await
        .unwrap();
    fs::write(dir.path().join("contracts/teams/alpha.pdf"), b"%PDF")
        .await
        .unwrap();
    fs::write(dir.path().join("contracts/teams/beta.pdf"), b"%PDF")
        .await
        .unwrap();
    dir
}

#[tokio::test]
async fn resolves_seeded_team_contracts() {
    let dir = seeded_root().await;
    let store = FsObjectStore::new(dir.path(), "https://assets.example.com");
    let resolver = FolderResolver::new(store);

    let urls = resolver.team_contract_urls().await.unwrap();
    assert_eq!(
        urls,
        vec![
            "https://assets.example.com/contracts/teams/alpha.pdf",
            "https://assets.example.com/contracts/teams/beta.pdf",
        ]
    );
}

#[tokio::test]
async fn unknown_folder_resolves_to_nothing() {
    let dir = seeded_root().await;
    let store = FsObjectStore::new(dir.path(), "https://assets.example.com");
    let resolver = FolderResolver::new(store);

    let urls = resolver.resume_urls().await.unwrap();
    assert!(urls.is_empty());
}
