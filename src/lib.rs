#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod error;
pub mod errors;
pub mod health;
pub mod notify;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

// Re-exports for public API
pub use error::AppError;
pub use errors::domain::DomainError;
pub use notify::{GameEvent, Notifier, Topic};
pub use services::game_flow::GameFlowService;
pub use services::users::UserService;
pub use state::app_state::AppState;
pub use store::SessionStore;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}
