pub mod mock_backend;

pub use mock_backend::{CollectingObserver, MockBackend};
