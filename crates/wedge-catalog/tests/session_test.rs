//! Scan session end-to-end tests
//!
//! Keystroke stream in, resolution notification out, with the
//! attach/detach lifecycle in between.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use wedge_catalog::{
    BarcodeSource, CatalogResult, IndexService, ResolutionSink, ScanSession, SessionOutcome,
};
use wedge_core::{BarcodeRecord, ItemId, Key, KeyEvent, Resolution, ScanFilterConfig};

struct FixedSource {
    records: Vec<BarcodeRecord>,
}

#[async_trait]
impl BarcodeSource for FixedSource {
    async fn barcode_records(
        &self,
        _item_ids: &[ItemId],
        _active_only: bool,
    ) -> CatalogResult<Vec<BarcodeRecord>> {
        Ok(self.records.clone())
    }
}

/// Sink collecting every notification it receives
#[derive(Default)]
struct CollectingSink {
    items: Mutex<Vec<ItemId>>,
}

impl ResolutionSink for CollectingSink {
    fn item_resolved(&self, item: ItemId) {
        self.items.lock().expect("sink lock").push(item);
    }
}

/// Service whose index knows "SOLO" → item 1 and the ambiguous "DUP"
async fn service_fixture() -> Arc<IndexService> {
    let source = Arc::new(FixedSource {
        records: vec![
            BarcodeRecord::new(ItemId(1), "SOLO").primary(),
            BarcodeRecord::new(ItemId(1), "DUP"),
            BarcodeRecord::new(ItemId(2), "DUP"),
        ],
    });
    let service = Arc::new(IndexService::new(source));
    service
        .rebuild(&[ItemId(1), ItemId(2)])
        .await
        .expect("fixture rebuild should succeed");
    service
}

/// Deliver `code` as a fast scanner burst ending in Enter, returning
/// the outcome of the terminator event.
fn scan_burst(session: &mut ScanSession, code: &str, start_ms: u64) -> SessionOutcome {
    let mut ts = start_ms;
    for ch in code.chars() {
        let outcome = session.handle_key(&KeyEvent::plain(Key::Char(ch), ts));
        assert_eq!(outcome, SessionOutcome::Passthrough, "characters pass through");
        ts += 8;
    }
    session.handle_key(&KeyEvent::plain(Key::Enter, ts))
}

#[tokio::test]
async fn scan_resolves_and_notifies_exactly_once() {
    let service = service_fixture().await;
    let sink = Arc::new(CollectingSink::default());
    let mut session = ScanSession::attach(
        service,
        sink.clone() as Arc<dyn ResolutionSink>,
        ScanFilterConfig::default(),
    );

    let outcome = scan_burst(&mut session, "SOLO", 0);
    assert_eq!(
        outcome,
        SessionOutcome::Consumed {
            resolution: Resolution::Match(ItemId(1))
        }
    );
    assert_eq!(*sink.items.lock().expect("sink lock"), vec![ItemId(1)]);
}

#[tokio::test]
async fn unknown_and_ambiguous_codes_consume_without_notifying() {
    let service = service_fixture().await;
    let sink = Arc::new(CollectingSink::default());
    let mut session = ScanSession::attach(
        service,
        sink.clone() as Arc<dyn ResolutionSink>,
        ScanFilterConfig::default(),
    );

    let outcome = scan_burst(&mut session, "MISSING", 0);
    assert_eq!(
        outcome,
        SessionOutcome::Consumed {
            resolution: Resolution::NoMatch
        }
    );

    let outcome = scan_burst(&mut session, "DUP", 1_000);
    assert_eq!(
        outcome,
        SessionOutcome::Consumed {
            resolution: Resolution::NoMatch
        }
    );

    assert!(sink.items.lock().expect("sink lock").is_empty());
}

#[tokio::test]
async fn human_typing_passes_through() {
    let service = service_fixture().await;
    let sink = Arc::new(CollectingSink::default());
    let mut session = ScanSession::attach(
        service,
        sink.clone() as Arc<dyn ResolutionSink>,
        ScanFilterConfig::default(),
    );

    // 200ms between keys: every keystroke, including Enter, reaches
    // the focused element.
    let mut ts = 0;
    for ch in "SOLO".chars() {
        let outcome = session.handle_key(&KeyEvent::plain(Key::Char(ch), ts));
        assert_eq!(outcome, SessionOutcome::Passthrough);
        ts += 200;
    }
    let outcome = session.handle_key(&KeyEvent::plain(Key::Enter, ts));
    assert_eq!(outcome, SessionOutcome::Passthrough);
    assert!(sink.items.lock().expect("sink lock").is_empty());
}

#[tokio::test]
async fn short_burst_is_discarded_silently() {
    let service = service_fixture().await;
    let sink = Arc::new(CollectingSink::default());
    let mut session = ScanSession::attach(
        service,
        sink.clone() as Arc<dyn ResolutionSink>,
        ScanFilterConfig::default(),
    );

    let outcome = scan_burst(&mut session, "AB", 0);
    assert_eq!(outcome, SessionOutcome::Passthrough);
    assert!(sink.items.lock().expect("sink lock").is_empty());
}

#[tokio::test]
async fn detached_session_stops_classifying() {
    let service = service_fixture().await;
    let sink = Arc::new(CollectingSink::default());
    let mut session = ScanSession::attach(
        service,
        sink.clone() as Arc<dyn ResolutionSink>,
        ScanFilterConfig::default(),
    );

    assert!(session.is_attached());
    session.detach();
    assert!(!session.is_attached());

    let outcome = scan_burst(&mut session, "SOLO", 0);
    assert_eq!(outcome, SessionOutcome::Passthrough);
    assert!(sink.items.lock().expect("sink lock").is_empty());

    // Detach is idempotent; Drop will call it again.
    session.detach();
}

#[tokio::test]
async fn each_token_notifies_independently() {
    let service = service_fixture().await;
    let sink = Arc::new(CollectingSink::default());
    let mut session = ScanSession::attach(
        service,
        sink.clone() as Arc<dyn ResolutionSink>,
        ScanFilterConfig::default(),
    );

    scan_burst(&mut session, "SOLO", 0);
    scan_burst(&mut session, "SOLO", 10_000);

    assert_eq!(
        *sink.items.lock().expect("sink lock"),
        vec![ItemId(1), ItemId(1)]
    );
}
