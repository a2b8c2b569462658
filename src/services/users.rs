//! Username-based identity.
//!
//! There is no real authentication here (that lives outside this service):
//! logging in with a username finds or creates the matching user record.
//! Usernames are trimmed and lowercased before matching.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::domain::DomainError;
use crate::notify::{GameEvent, Notifier, Topic, UserSummary};

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

pub struct UserService {
    notifier: Arc<dyn Notifier>,
    /// Normalized username -> user record.
    users: DashMap<String, User>,
}

impl UserService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            users: DashMap::new(),
        }
    }

    pub async fn login(&self, username: &str) -> Result<User, DomainError> {
        let normalized = username.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::validation("Username is required"));
        }

        let user = self
            .users
            .entry(normalized.clone())
            .or_insert_with(|| User {
                id: Uuid::new_v4(),
                username: normalized,
            })
            .clone();

        info!(user_id = %user.id, username = %user.username, "user logged in");
        self.notifier
            .publish(
                Topic::Global,
                GameEvent::UserLoggedIn {
                    user: UserSummary {
                        id: user.id,
                        username: user.username.clone(),
                    },
                },
            )
            .await;
        Ok(user)
    }
}
