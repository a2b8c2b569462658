//! Domain-level error type used across the engine, store, and services.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Missing resources in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    User,
    Other(String),
}

/// Operations that are invalid for the session's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Join/start attempted after the session left the waiting phase.
    GameStarted,
    /// Join attempted on a full table.
    GameFull,
    /// The user is already seated in this session.
    AlreadyJoined,
    /// The player has already placed a bid this round.
    AlreadyBid,
    /// Bidding for the round is closed.
    BidsClosed,
    /// Card play attempted before every player has bid.
    BiddingOpen,
    /// It is another player's turn.
    OutOfTurn,
    /// The operation does not apply to the session's current status.
    PhaseMismatch,
    /// The referenced card is not in the player's hand.
    CardNotInHand,
    Other(String),
}

/// Infrastructure/operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Storage,
    Other(String),
}

/// Central domain error type:
/// validation / conflict / not-found / forbidden / internal.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation.
    Validation(String),
    /// Semantic conflict with the session's current state.
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms.
    NotFound(NotFoundKind, String),
    /// Host-only action attempted by another player.
    Forbidden(String),
    /// Infrastructure/operational failure.
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Forbidden(d) => write!(f, "forbidden: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
