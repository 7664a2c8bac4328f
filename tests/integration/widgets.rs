//! Modal and inline widgets over the fixture site.

use std::time::Duration;

use crate::common::{fixture_json, MemoryInput, RecordingChrome, RecordingSink};
use glint::{
    EngineConfig, InlineWidget, InputSource, KeyPress, ModalWidget, Outcome, StaticSource, UiEvent,
};

#[tokio::test(start_paused = true)]
async fn test_modal_session() {
    let input = MemoryInput::new();
    let sink = RecordingSink::new();
    let chrome = RecordingChrome::new();
    let mut modal = ModalWidget::new(
        EngineConfig::modal(),
        StaticSource::new(fixture_json()),
        input.clone(),
        sink.clone(),
        chrome.clone(),
    );

    modal.handle(UiEvent::Key(KeyPress::from_key("k", false, true)));
    assert!(chrome.is_open() && chrome.is_scroll_locked());
    assert_eq!(modal.session_mut().loaded().await, Some(true));
    assert!(modal.session().handle().is_loaded());

    input.type_text("rust");
    modal.handle(UiEvent::Input);
    assert_eq!(
        modal.session_mut().settle().await,
        Some(Outcome::Rendered { results: 3 })
    );

    modal.handle(UiEvent::OverlayClick);
    assert!(!chrome.is_open());
    assert!(!chrome.is_scroll_locked());
    assert_eq!(input.value(), "");
    assert!(!sink.is_visible());

    // Reopening starts from a clean slate with the cached index.
    modal.handle(UiEvent::Open);
    assert!(chrome.is_open());
    assert_eq!(sink.markup(), "");
}

#[tokio::test(start_paused = true)]
async fn test_modal_close_cancels_pending_match() {
    let sink = RecordingSink::new();
    let input = MemoryInput::new();
    let mut modal = ModalWidget::new(
        EngineConfig::modal(),
        StaticSource::new(fixture_json()),
        input.clone(),
        sink.clone(),
        RecordingChrome::new(),
    );

    modal.handle(UiEvent::Open);
    input.type_text("tokenizer");
    modal.handle(UiEvent::Input);
    modal.handle(UiEvent::Close);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(sink.renders(), 0);
    assert!(!sink.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_inline_session() {
    let input = MemoryInput::new();
    let sink = RecordingSink::new();
    let mut inline = InlineWidget::new(
        EngineConfig::inline(),
        StaticSource::new(fixture_json()),
        input.clone(),
        sink.clone(),
    );

    inline.handle(UiEvent::Focus);
    assert_eq!(inline.session_mut().loaded().await, Some(true));

    input.type_text("rust");
    inline.handle(UiEvent::Input);
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(sink.renders(), 0, "inline debounce is 300ms");

    assert_eq!(
        inline.session_mut().settle().await,
        Some(Outcome::Rendered { results: 2 })
    );
    assert!(sink.markup().contains("<mark>"));

    inline.handle(UiEvent::ClickOutside);
    assert!(!sink.is_visible());
}
