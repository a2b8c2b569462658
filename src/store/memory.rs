//! In-memory `SessionStore` backed by concurrent maps.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::GameSession;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::store::SessionStore;

#[derive(Default)]
pub struct MemoryStore {
    sessions: DashMap<Uuid, GameSession>,
    /// Uppercased room code -> session id.
    codes: DashMap<String, Uuid>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            codes: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn insert(&self, session: GameSession) -> Result<(), DomainError> {
        self.codes
            .insert(session.code.to_uppercase(), session.id);
        self.sessions.insert(session.id, session);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GameSession>, DomainError> {
        Ok(self.sessions.get(&id).map(|s| s.clone()))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<GameSession>, DomainError> {
        let id = match self.codes.get(&code.to_uppercase()) {
            Some(entry) => *entry,
            None => return Ok(None),
        };
        self.find_by_id(id).await
    }

    async fn code_in_use(&self, code: &str) -> Result<bool, DomainError> {
        Ok(self.codes.contains_key(&code.to_uppercase()))
    }

    async fn update(&self, session: &GameSession) -> Result<(), DomainError> {
        if !self.sessions.contains_key(&session.id) {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                "Game not found",
            ));
        }
        self.sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if let Some((_, session)) = self.sessions.remove(&id) {
            self.codes.remove(&session.code.to_uppercase());
        }
        Ok(())
    }
}
