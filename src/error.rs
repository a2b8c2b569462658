use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[derive(Serialize)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Forbidden: {detail}")]
    Forbidden { detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::NotFound { code, .. } => code,
            AppError::Forbidden { .. } => "FORBIDDEN",
            AppError::Conflict { code, .. } => code,
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    /// Externally visible detail. Internal errors are surfaced generically;
    /// the real cause goes to the log only.
    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Forbidden { detail } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Internal { .. } => "Something went wrong".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn not_found(code: &'static str, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn forbidden(detail: String) -> Self {
        Self::Forbidden { detail }
    }

    pub fn conflict(code: &'static str, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn not_found_code(kind: &NotFoundKind) -> &'static str {
    match kind {
        NotFoundKind::Game => "GAME_NOT_FOUND",
        NotFoundKind::Player => "PLAYER_NOT_FOUND",
        NotFoundKind::User => "USER_NOT_FOUND",
        NotFoundKind::Other(_) => "NOT_FOUND",
    }
}

fn conflict_code(kind: &ConflictKind) -> &'static str {
    match kind {
        ConflictKind::GameStarted => "GAME_STARTED",
        ConflictKind::GameFull => "GAME_FULL",
        ConflictKind::AlreadyJoined => "ALREADY_JOINED",
        ConflictKind::AlreadyBid => "ALREADY_BID",
        ConflictKind::BidsClosed => "BIDS_CLOSED",
        ConflictKind::BiddingOpen => "BIDDING_OPEN",
        ConflictKind::OutOfTurn => "OUT_OF_TURN",
        ConflictKind::PhaseMismatch => "PHASE_MISMATCH",
        ConflictKind::CardNotInHand => "CARD_NOT_IN_HAND",
        ConflictKind::Other(_) => "CONFLICT",
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => AppError::invalid("VALIDATION", detail),
            DomainError::NotFound(kind, detail) => AppError::not_found(not_found_code(&kind), detail),
            DomainError::Forbidden(detail) => AppError::forbidden(detail),
            DomainError::Conflict(kind, detail) => AppError::conflict(conflict_code(&kind), detail),
            DomainError::Infra(kind, detail) => AppError::internal(format!("{kind:?}: {detail}")),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let code = self.code();
        let problem_details = ProblemDetails {
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}
