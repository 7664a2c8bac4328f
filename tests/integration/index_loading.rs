//! Loading indexes from disk and memory, including failures and retries.

use crate::common::{fixture_json, SITE_DIR, SITE_INDEX};
use glint::{
    FileSource, IndexLoadError, IndexLoader, IndexSource, LoadState, SiteSource, StaticSource,
    UNTITLED,
};

#[tokio::test]
async fn test_load_from_site_directory() {
    let source = SiteSource::resolve(SITE_DIR, "/search.json");
    assert!(source.describe().ends_with("search.json"));

    let loader = IndexLoader::new(source);
    let index = loader.ensure_loaded().await.unwrap();
    assert_eq!(index.len(), 6);
    assert!(loader.handle().is_loaded());
}

#[tokio::test]
async fn test_load_from_file_path() {
    let loader = IndexLoader::new(SiteSource::resolve(SITE_INDEX, "/ignored.json"));
    assert_eq!(loader.ensure_loaded().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_load_from_memory() {
    let loader = IndexLoader::new(StaticSource::labeled(fixture_json(), "inline"));
    let index = loader.ensure_loaded().await.unwrap();
    assert_eq!(index.len(), 6);
    assert_eq!(index.entries()[0].display_title(), "Hello World");
}

#[tokio::test]
async fn test_missing_file_then_retry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search.json");
    let loader = IndexLoader::new(FileSource::new(&path));

    let err = loader.ensure_loaded().await.unwrap_err();
    assert!(matches!(err, IndexLoadError::Io { .. }));
    assert!(err.to_string().contains("search.json"));
    assert!(matches!(loader.handle().snapshot(), LoadState::Failed(_)));

    std::fs::write(&path, fixture_json()).unwrap();
    assert_eq!(loader.ensure_loaded().await.unwrap().len(), 6);
    assert!(loader.handle().is_loaded());
}

#[tokio::test]
async fn test_malformed_json_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search.json");
    std::fs::write(&path, "[{\"title\": ").unwrap();

    let loader = IndexLoader::new(FileSource::new(&path));
    let err = loader.ensure_loaded().await.unwrap_err();
    assert!(matches!(err, IndexLoadError::Parse { .. }));
    assert!(loader.handle().index().is_none());
}

#[tokio::test]
async fn test_non_array_top_level_rejected() {
    let loader = IndexLoader::new(StaticSource::new(r#"{"entries": []}"#));
    assert!(matches!(
        loader.ensure_loaded().await.unwrap_err(),
        IndexLoadError::Parse { .. }
    ));
}

#[tokio::test]
async fn test_wrong_field_types_read_as_absent() {
    let loader = IndexLoader::new(StaticSource::new(fixture_json()));
    let index = loader.ensure_loaded().await.unwrap();

    let numeric = &index.entries()[3];
    assert_eq!(numeric.display_title(), UNTITLED);
    assert_eq!(numeric.href(), "#");
    assert_eq!(numeric.date(), None);
    assert_eq!(numeric.description, None);
    assert_eq!(numeric.tags, vec!["misc"]);

    let draft = &index.entries()[4];
    assert_eq!(draft.display_title(), UNTITLED);
    assert_eq!(draft.tags, vec!["drafts"]);
}
