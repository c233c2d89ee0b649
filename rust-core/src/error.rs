use thiserror::Error;

use crate::models::{MAX_DAYS, MAX_EXPENDITURE};

/// Contract violations reported by the notification scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("window size must be at least 1")]
    EmptyWindow,
    #[error("window size d={window} exceeds the {len} days of expenditures")]
    WindowTooLarge { window: usize, len: usize },
    #[error("{len} days of expenditures exceeds the limit of {}", MAX_DAYS)]
    TooManyDays { len: usize },
    #[error("expenditure {value} at day {day} is outside 0..={}", MAX_EXPENDITURE)]
    ExpenditureOutOfRange { day: usize, value: u32 },
    #[error("histogram holds {total} values but the window size is {window}")]
    WindowInvariant { total: u32, window: usize },
}

/// Failures while reading a request from text or JSON input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input: expected 2 values for n and d, but got {got}.")]
    WrongTokenCount { got: usize },
    #[error("Invalid input: both n and d must be integers.")]
    BoundsNotIntegers,
    #[error("Invalid input: you entered n={n}, but n must be between 1 and {}.", MAX_DAYS)]
    DaysOutOfRange { n: String },
    #[error("Invalid input: you entered d={d}, but d must be between 1 and n={n}.")]
    WindowOutOfRange { d: String, n: usize },
    #[error("Invalid input: expected n={expected} expenditures, but got {got}.")]
    WrongExpenditureCount { expected: usize, got: usize },
    #[error("Invalid input at day {day}: '{token}' is not an integer.")]
    NotAnInteger { day: usize, token: String },
    #[error("Invalid expenditure at day {day}: all expenditures must be between 0 and {}.", MAX_EXPENDITURE)]
    ExpenditureOutOfRange { day: usize },
    #[error("Error: Input terminated unexpectedly.")]
    UnexpectedEof,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
