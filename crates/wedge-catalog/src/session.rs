//! Scan session lifecycle
//!
//! A [`ScanSession`] is the scoped acquisition of the scan subsystem
//! for one input surface: constructing it attaches the classifier,
//! dropping it detaches unconditionally, on every exit path. The
//! embedding UI delivers keystrokes capture-first (before any
//! focused-element handler) and swallows an event only when
//! [`SessionOutcome::Consumed`] says so, which keeps ordinary typing
//! untouched.
//!
//! Caller contract: at most one live session per input surface. The
//! session owns its classifier, so a single session can never run two
//! accumulations at once.

use crate::service::IndexService;
use std::sync::Arc;
use wedge_core::{resolve, Classifier, ItemId, KeyEvent, Outcome, Resolution, ScanFilterConfig};

/// Receives the "item located" notification for resolved scans
///
/// Called at most once per recognized token. Implementations are
/// UI-side; a test double collecting ids into a `Mutex<Vec<_>>` is
/// enough for coverage.
pub trait ResolutionSink: Send + Sync {
    /// One scan resolved unambiguously to this item
    fn item_resolved(&self, item: ItemId);
}

/// What the embedder should do with the keystroke it just delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Let the event reach the focused element unchanged
    Passthrough,
    /// Suppress the event's default effect; a scan was recognized and
    /// resolved with the given result
    Consumed { resolution: Resolution },
}

/// An attached scan subscription for one input surface
pub struct ScanSession {
    classifier: Classifier,
    service: Arc<IndexService>,
    sink: Arc<dyn ResolutionSink>,
    attached: bool,
}

impl std::fmt::Debug for ScanSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanSession")
            .field("attached", &self.attached)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl ScanSession {
    /// Attach a session over the given index service and sink
    #[must_use]
    pub fn attach(
        service: Arc<IndexService>,
        sink: Arc<dyn ResolutionSink>,
        config: ScanFilterConfig,
    ) -> Self {
        tracing::debug!("scan session attached");
        Self {
            classifier: Classifier::new(config),
            service,
            sink,
            attached: true,
        }
    }

    /// Whether the session is still attached
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Detach explicitly; further events pass through untouched
    ///
    /// Idempotent. Also invoked by `Drop`, so the subscription can
    /// never outlive its owning scope.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.classifier.reset();
            tracing::debug!("scan session detached");
        }
    }

    /// Feed one keystroke through classification and, when a scan is
    /// recognized, resolve it against the current index snapshot
    ///
    /// Notifies the sink at most once per token, and only on an
    /// unambiguous match.
    pub fn handle_key(&mut self, event: &KeyEvent) -> SessionOutcome {
        if !self.attached {
            return SessionOutcome::Passthrough;
        }

        match self.classifier.step(event) {
            Outcome::Ignored | Outcome::Buffered | Outcome::Discarded => {
                SessionOutcome::Passthrough
            }
            Outcome::Scan(token) => {
                let resolution = resolve(&token, &self.service.snapshot());
                match resolution {
                    Resolution::Match(item) => {
                        tracing::debug!(%item, code = %token, "scan resolved");
                        self.sink.item_resolved(item);
                    }
                    Resolution::NoMatch => {
                        tracing::debug!(code = %token, "scan had no unique match");
                    }
                }
                SessionOutcome::Consumed { resolution }
            }
        }
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.detach();
    }
}
