//! Error codes for the backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Required model parameter missing or empty
    EmptyModel,
    /// Answer text missing or empty
    EmptyAnswer,
    /// Configured suspect pool size violates the game rules
    WrongPoolSize,
    /// Suspect catalogue smaller than the pool size
    InsufficientSuspects,
    /// Question catalogue is empty
    NoQuestions,
    /// Suspect is not part of the investigation's pool
    SuspectNotInPool,
    /// Round does not belong to the given investigation
    RoundMismatch,
    /// Generic malformed request
    ValidationError,

    // Missing resources
    GameNotFound,
    InvestigationNotFound,
    RoundNotFound,
    SuspectNotFound,
    QuestionNotFound,
    NotFound,

    // Conflicts
    /// Suspect already eliminated in this investigation
    AlreadyEliminated,
    /// Concurrent modification detected via lock_version
    OptimisticLock,
    Conflict,

    // Collaborators and infrastructure
    /// Answer wait exceeded its bound
    AnswerTimeout,
    /// Answer-generation collaborator failed
    UpstreamFailure,
    DbError,
    DbUnavailable,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Canonical wire string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyModel => "EMPTY_MODEL",
            ErrorCode::EmptyAnswer => "EMPTY_ANSWER",
            ErrorCode::WrongPoolSize => "WRONG_POOL_SIZE",
            ErrorCode::InsufficientSuspects => "INSUFFICIENT_SUSPECTS",
            ErrorCode::NoQuestions => "NO_QUESTIONS",
            ErrorCode::SuspectNotInPool => "SUSPECT_NOT_IN_POOL",
            ErrorCode::RoundMismatch => "ROUND_MISMATCH",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::InvestigationNotFound => "INVESTIGATION_NOT_FOUND",
            ErrorCode::RoundNotFound => "ROUND_NOT_FOUND",
            ErrorCode::SuspectNotFound => "SUSPECT_NOT_FOUND",
            ErrorCode::QuestionNotFound => "QUESTION_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyEliminated => "ALREADY_ELIMINATED",
            ErrorCode::OptimisticLock => "OPTIMISTIC_LOCK",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::AnswerTimeout => "ANSWER_TIMEOUT",
            ErrorCode::UpstreamFailure => "UPSTREAM_FAILURE",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
