//! Mock injection backend for testing
//!
//! Records every delivery attempt for verification.

use anyhow::Result;
use async_trait::async_trait;
use keyrelay::injection::{Backend, BackendKind, InjectionEvent, InjectionObserver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock backend that records delivered text
#[derive(Debug)]
pub struct MockBackend {
    kind: BackendKind,
    should_fail: bool,
    /// All text this backend was asked to deliver
    pub calls: Arc<Mutex<Vec<String>>>,
    /// Shared invocation log, in order across all mocks in a test
    sequence: Arc<Mutex<Vec<BackendKind>>>,
}

impl MockBackend {
    pub fn ok(kind: BackendKind, sequence: Arc<Mutex<Vec<BackendKind>>>) -> Arc<Self> {
        Arc::new(Self {
            kind,
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
            sequence,
        })
    }

    pub fn failing(kind: BackendKind, sequence: Arc<Mutex<Vec<BackendKind>>>) -> Arc<Self> {
        Arc::new(Self {
            kind,
            should_fail: true,
            calls: Arc::new(Mutex::new(Vec::new())),
            sequence,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn deliver(&self, text: &str, _timeout: Duration) -> Result<()> {
        self.sequence.lock().unwrap().push(self.kind);
        self.calls.lock().unwrap().push(text.to_string());
        if self.should_fail {
            return Err(anyhow::anyhow!("mock {} failure", self.kind));
        }
        Ok(())
    }

    fn kind(&self) -> BackendKind {
        self.kind
    }
}

/// Observer that collects events for assertions
#[derive(Debug, Default)]
pub struct CollectingObserver {
    pub events: Mutex<Vec<InjectionEvent>>,
}

impl CollectingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<InjectionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl InjectionObserver for CollectingObserver {
    fn record(&self, event: InjectionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
