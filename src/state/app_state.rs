//! Shared application state.

use std::sync::Arc;

use crate::notify::Notifier;
use crate::services::game_flow::GameFlowService;
use crate::services::users::UserService;
use crate::store::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub games: Arc<GameFlowService>,
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(store: Arc<dyn SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            games: Arc::new(GameFlowService::new(store, notifier.clone())),
            users: Arc::new(UserService::new(notifier)),
        }
    }
}
