//! Session storage boundary.
//!
//! The engine only ever does keyed load-modify-store on whole sessions, so
//! the trait stays small. Callers must serialize mutations per session id
//! through [`locks::SessionLocks`]; the store itself only guarantees that
//! individual calls are atomic.

pub mod locks;
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::GameSession;
use crate::errors::domain::DomainError;

pub use locks::SessionLocks;
pub use memory::MemoryStore;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a brand-new session.
    async fn insert(&self, session: GameSession) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GameSession>, DomainError>;

    /// Room-code lookup; the match is case-insensitive.
    async fn find_by_code(&self, code: &str) -> Result<Option<GameSession>, DomainError>;

    /// Collision check used while generating room codes.
    async fn code_in_use(&self, code: &str) -> Result<bool, DomainError>;

    /// Overwrite an existing session.
    async fn update(&self, session: &GameSession) -> Result<(), DomainError>;

    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
