//! Text Injection Module
//!
//! Delivers text into the focused application through an ordered chain of
//! backends, staging it in the clipboard first as a safety net. Backends are
//! tried strictly in sequence; the first success wins.

use crate::config::Config;
use crate::error::{InjectError, InjectResult};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

pub mod clipboard;
pub mod events;
pub mod wtype;
pub mod ydotool;

pub use events::{InjectionEvent, InjectionObserver, TracingObserver};

/// The closed set of delivery mechanisms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Ydotool,
    Wtype,
    Clipboard,
}

impl BackendKind {
    /// Parse a configured backend name. Unknown names are inert.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ydotool" => Some(Self::Ydotool),
            "wtype" => Some(Self::Wtype),
            "clipboard" => Some(Self::Clipboard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ydotool => "ydotool",
            Self::Wtype => "wtype",
            Self::Clipboard => "clipboard",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for injection backends
#[async_trait]
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Deliver text to the focused application or clipboard, bounded by `timeout`
    async fn deliver(&self, text: &str, timeout: Duration) -> Result<()>;

    /// Which mechanism this backend drives
    fn kind(&self) -> BackendKind;
}

/// Build the backend chain from configured names.
///
/// Unknown names are skipped with a warning. Duplicates are kept in order
/// (a deliberately repeated entry is valid fallback-chain flexibility). An
/// empty result falls back to a single clipboard backend, so the returned
/// chain is never empty.
pub fn build_chain(names: &[String]) -> Vec<Arc<dyn Backend>> {
    let mut chain: Vec<Arc<dyn Backend>> = Vec::with_capacity(names.len());
    for name in names {
        match BackendKind::from_name(name) {
            Some(BackendKind::Ydotool) => chain.push(Arc::new(ydotool::YdotoolBackend::new())),
            Some(BackendKind::Wtype) => chain.push(Arc::new(wtype::WtypeBackend::new())),
            Some(BackendKind::Clipboard) => {
                chain.push(Arc::new(clipboard::ClipboardBackend::new()))
            }
            None => warn!("Unknown backend '{}', skipping", name),
        }
    }

    if chain.is_empty() {
        warn!("No valid backends configured, defaulting to clipboard");
        chain.push(Arc::new(clipboard::ClipboardBackend::new()));
    }

    chain
}

/// Injection dispatcher owning the fallback policy.
///
/// The chain and the clipboard handle are built once at construction and
/// reused for every call; `inject` itself holds no state across calls, so
/// concurrent calls are safe with respect to the dispatcher (they may still
/// race on the focused window and clipboard, which only one writer can own).
pub struct Injector {
    config: Config,
    chain: Vec<Arc<dyn Backend>>,
    clipboard: Arc<dyn Backend>,
    observer: Arc<dyn InjectionObserver>,
}

impl Injector {
    pub fn new(config: Config) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(config: Config, observer: Arc<dyn InjectionObserver>) -> Self {
        let chain = build_chain(&config.backends);
        Self {
            config,
            chain,
            clipboard: Arc::new(clipboard::ClipboardBackend::new()),
            observer,
        }
    }

    /// Assemble an injector from pre-built parts, bypassing the registry.
    /// Lets callers (and tests) swap in their own backend handles.
    pub fn from_parts(
        config: Config,
        chain: Vec<Arc<dyn Backend>>,
        clipboard: Arc<dyn Backend>,
        observer: Arc<dyn InjectionObserver>,
    ) -> Self {
        Self {
            config,
            chain,
            clipboard,
            observer,
        }
    }

    /// Inject text into the focused application.
    ///
    /// The text is staged in the clipboard first so it is never lost, then
    /// the typing backends are walked in configured order until one delivers.
    /// Returns `Ok` when a typing backend succeeds, or when typing failed
    /// everywhere but the clipboard staging held the text. Dropping the
    /// returned future aborts the in-flight attempt and the rest of the walk.
    pub async fn inject(&self, text: &str) -> InjectResult<()> {
        if text.is_empty() {
            return Err(InjectError::EmptyText);
        }

        // Always copy to clipboard first (best effort, never aborts the call)
        let clipboard_err = match self
            .clipboard
            .deliver(text, self.config.timeout_for(BackendKind::Clipboard))
            .await
        {
            Ok(()) => {
                self.observer.record(InjectionEvent::ClipboardStaged);
                None
            }
            Err(e) => {
                self.observer.record(InjectionEvent::ClipboardStagingFailed {
                    error: e.to_string(),
                });
                Some(e)
            }
        };

        // Try each typing backend in order; clipboard entries are skipped
        // since staging already ran
        let typing: Vec<&Arc<dyn Backend>> = self
            .chain
            .iter()
            .filter(|b| b.kind() != BackendKind::Clipboard)
            .collect();

        let mut last_err: Option<anyhow::Error> = None;
        for (i, backend) in typing.iter().enumerate() {
            let timeout = self.config.timeout_for(backend.kind());
            match backend.deliver(text, timeout).await {
                Ok(()) => {
                    self.observer.record(InjectionEvent::Delivered {
                        kind: backend.kind(),
                    });
                    return Ok(());
                }
                Err(e) => {
                    self.observer.record(InjectionEvent::DeliveryFailed {
                        kind: backend.kind(),
                        next: typing.get(i + 1).map(|b| b.kind()),
                        error: e.to_string(),
                    });
                    last_err = Some(e);
                }
            }
        }

        match last_err {
            // Nothing besides clipboard was required, vacuous success
            None => Ok(()),
            Some(e) => {
                if clipboard_err.is_none() {
                    // Partial success: typing failed but the text is safe in
                    // the clipboard
                    self.observer.record(InjectionEvent::ClipboardOnly);
                    Ok(())
                } else {
                    Err(InjectError::AllBackendsFailed { source: e })
                }
            }
        }
    }
}
