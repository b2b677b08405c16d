//! Error types for period-nav operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Invalid step: {0}")]
    InvalidStep(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, NavError>;
