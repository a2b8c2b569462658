//! Shared wiring for integration tests: an app state over the in-memory
//! store with a broadcast hub to observe published events.

use std::sync::Arc;

use wizard_backend::notify::BroadcastHub;
use wizard_backend::store::MemoryStore;
use wizard_backend::AppState;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub hub: Arc<BroadcastHub>,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let hub = Arc::new(BroadcastHub::new());
    let state = AppState::new(store.clone(), hub.clone());
    TestApp { state, store, hub }
}
