//! The four acceptance scenarios, driven through a [`SearchSession`] the way
//! a page would drive it.

use std::time::Duration;

use crate::common::{FlakySource, MemoryInput, RecordingSink, SinkEvent, SlowSource, SAMPLE_JSON};
use glint::{EngineConfig, Outcome, Phase, SearchSession};

type Session = SearchSession<FlakySource, MemoryInput, RecordingSink>;

fn session(source: FlakySource) -> (Session, MemoryInput, RecordingSink) {
    let input = MemoryInput::new();
    let sink = RecordingSink::new();
    let session = SearchSession::new(EngineConfig::default(), source, input.clone(), sink.clone());
    (session, input, sink)
}

#[tokio::test(start_paused = true)]
async fn test_hello_world() {
    let (mut session, input, sink) = session(FlakySource::new(SAMPLE_JSON, 0));
    session.load().await;

    input.type_text("world");
    session.on_input();
    assert_eq!(session.settle().await, Some(Outcome::Rendered { results: 1 }));

    let html = sink.markup();
    assert_eq!(html.matches(r#"class="search-result-item""#).count(), 1);
    assert!(html.contains(r#"<div class="search-result-title">Hello <em>World</em></div>"#));
    assert!(html.contains(r#"<div class="search-result-date">Jan 2, 2024</div>"#));
}

#[tokio::test(start_paused = true)]
async fn test_no_results() {
    let (mut session, input, sink) = session(FlakySource::new(SAMPLE_JSON, 0));
    session.load().await;

    input.type_text("xyz");
    session.on_input();
    assert_eq!(session.settle().await, Some(Outcome::Rendered { results: 0 }));

    let html = sink.markup();
    assert!(!html.contains("search-result-item"));
    assert!(html.contains(r#"No results found for "xyz""#));
}

#[tokio::test(start_paused = true)]
async fn test_clearing_after_results() {
    let (mut session, input, sink) = session(FlakySource::new(SAMPLE_JSON, 0));
    session.load().await;

    input.type_text("world");
    session.on_input();
    session.settle().await;
    assert!(sink.is_visible());

    // Keep typing, then wipe the box before the debounce elapses.
    input.type_text("worl");
    session.on_input();
    tokio::time::sleep(Duration::from_millis(50)).await;
    input.type_text("");
    session.on_input();
    session.settle().await;

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(!sink.is_visible());
    assert_eq!(sink.markup(), "");
    assert_eq!(sink.events().last(), Some(&SinkEvent::Clear));
    assert_eq!(sink.renders(), 1, "the superseded 'worl' match must never render");
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_rejects() {
    let (mut session, input, sink) = session(FlakySource::offline());
    assert!(!session.load().await);

    for query in ["rust", "world", "anything at all"] {
        input.type_text(query);
        session.on_input();
        assert_eq!(session.settle().await, Some(Outcome::Failed));

        let html = sink.markup();
        assert!(html.contains("Failed to load search index"));
        assert!(!html.contains("Loading search index"));
        assert!(!html.contains("No results found"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_query_typed_during_fetch() {
    let input = MemoryInput::new();
    let sink = RecordingSink::new();
    let mut session = SearchSession::new(
        EngineConfig::default(),
        SlowSource::new(FlakySource::new(SAMPLE_JSON, 0), Duration::from_secs(3)),
        input.clone(),
        sink.clone(),
    );

    session.start_load();
    input.type_text("world");
    session.on_input();
    assert_eq!(session.settle().await, Some(Outcome::Loading));
    assert!(sink.markup().contains("Loading search index..."));

    // The fetch lands; the next keystroke sees the index.
    tokio::time::sleep(Duration::from_secs(5)).await;
    input.type_text("world");
    session.on_input();
    assert_eq!(session.settle().await, Some(Outcome::Rendered { results: 1 }));
    assert!(sink.markup().contains("Hello <em>World</em>"));
}
