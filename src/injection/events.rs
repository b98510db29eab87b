//! Observer port for injection events
//!
//! The dispatcher reports what happened through this port instead of a
//! process-wide logger, so tests can assert on emitted events without
//! capturing log output.

use super::BackendKind;
use tracing::{info, warn};

/// What happened during one `inject` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectionEvent {
    /// Text staged in the clipboard safety net
    ClipboardStaged,
    /// Clipboard staging failed; the typing walk continues regardless
    ClipboardStagingFailed { error: String },
    /// A typing backend delivered the text
    Delivered { kind: BackendKind },
    /// A typing backend failed; `next` is the backend tried after it, if any
    DeliveryFailed {
        kind: BackendKind,
        next: Option<BackendKind>,
        error: String,
    },
    /// Every typing backend failed but the clipboard holds the text
    ClipboardOnly,
}

pub trait InjectionObserver: Send + Sync {
    fn record(&self, event: InjectionEvent);
}

/// Default observer forwarding events to `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver;

impl InjectionObserver for TracingObserver {
    fn record(&self, event: InjectionEvent) {
        match event {
            InjectionEvent::ClipboardStaged => info!("📋 Text copied to clipboard"),
            InjectionEvent::ClipboardStagingFailed { error } => warn!(
                "⚠️ Clipboard copy failed (will continue with other backends): {}",
                error
            ),
            InjectionEvent::Delivered { kind } => info!("✅ Injection success via {}", kind),
            InjectionEvent::DeliveryFailed { kind, next, error } => match next {
                Some(next) => warn!("{} failed: {}, trying {}", kind, error, next),
                None => warn!("{} failed: {}", kind, error),
            },
            InjectionEvent::ClipboardOnly => {
                info!("📋 Typing failed but text is in clipboard")
            }
        }
    }
}
