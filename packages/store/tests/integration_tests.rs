//! Page client against real stores

use serde_json::json;
use std::sync::Arc;
use wow_editor::{EditorError, LoadError, PageGateway, PageSession};
use wow_model::{BlockId, ContentBlock, GuidePage, Page, PageId};
use wow_store::{seed_catalog, Collection, DocumentStore, FileDocumentStore, MemoryDocumentStore, PageClient};

#[tokio::test]
async fn test_load_missing_page_is_not_found() {
    let client = PageClient::new(MemoryDocumentStore::new());

    let result = client.load(&PageId::Known(GuidePage::Sniping)).await;

    assert_eq!(result, Err(LoadError::NotFound(PageId::Known(GuidePage::Sniping))));
}

#[tokio::test]
async fn test_load_bad_document_is_decode_error() {
    let store = MemoryDocumentStore::new();
    store
        .put_document(Collection::Pages, "gearing", json!({ "content": [] }))
        .await
        .unwrap();
    let client = PageClient::new(store);

    let result = client.load(&PageId::Known(GuidePage::Gearing)).await;

    assert!(matches!(result, Err(LoadError::Decode(_))));
}

#[tokio::test]
async fn test_save_then_load_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let client = PageClient::new(FileDocumentStore::new(dir.path()));

    let page = Page::with_content(
        GuidePage::Transmog,
        vec![
            ContentBlock::Title { id: BlockId::from("t"), value: "Transmog".to_string() },
            ContentBlock::Image { id: BlockId::from("i"), url: "https://img/mog.png".to_string() },
        ],
    )
    .unwrap();

    client.save(&page).await.unwrap();
    let loaded = client.load(&page.id).await.unwrap();

    assert_eq!(loaded, page);

    let raw = std::fs::read_to_string(dir.path().join("pages").join("transmog.json")).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(raw["content"][0]["type"], "title");
}

#[tokio::test]
async fn test_seed_catalog_only_fills_gaps() {
    let store = MemoryDocumentStore::new();
    store
        .put_document(
            Collection::Pages,
            "addons",
            json!({ "id": "addons", "content": [{ "type": "divider", "id": "d" }] }),
        )
        .await
        .unwrap();

    let created = seed_catalog(&store).await.unwrap();

    assert_eq!(created.len(), GuidePage::ALL.len() - 1);
    assert!(!created.contains(&GuidePage::Addons));
    assert_eq!(store.len(Collection::Pages), GuidePage::ALL.len());

    // existing content untouched
    let client = PageClient::new(store.clone());
    let addons = client.load(&GuidePage::Addons.into()).await.unwrap();
    assert_eq!(addons.len(), 1);

    assert!(seed_catalog(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_session_edit_persists_to_store() {
    let store = MemoryDocumentStore::new();
    seed_catalog(&store).await.unwrap();
    let client = PageClient::new(store.clone());

    let mut session = PageSession::new(GuidePage::Flipping, Arc::new(client.clone()));
    session.activate().await.unwrap();
    session.toggle_edit().unwrap();
    session.append(ContentBlock::title("Buy low")).unwrap();
    session.append(ContentBlock::paragraph("Sell high")).unwrap();
    session.move_blocks([1], 0).unwrap();
    session.commit_edit().await.unwrap();

    let stored = client.load(&GuidePage::Flipping.into()).await.unwrap();
    let texts: Vec<_> = stored.content.iter().filter_map(ContentBlock::text).collect();
    assert_eq!(texts, vec!["Sell high", "Buy low"]);
}

#[tokio::test]
async fn test_document_holding_another_page_is_rejected() {
    let store = MemoryDocumentStore::new();
    store
        .put_document(Collection::Pages, "addons", json!({ "id": "gearing", "content": [] }))
        .await
        .unwrap();
    let client = PageClient::new(store.clone());

    let mut session = PageSession::new(GuidePage::Addons, Arc::new(client));
    let result = session.activate().await;

    assert!(matches!(result, Err(EditorError::Load(LoadError::Decode(_)))));
    assert!(session.state().error().is_some());
    assert_eq!(
        store.get_document(Collection::Pages, "gearing").await.unwrap(),
        None
    );
}
