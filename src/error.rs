// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// engine failures that callers may want to match on.
#[derive(Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidSize { size: usize, min: usize, max: usize },
    UnsupportedSize { size: usize, min: usize, max: usize },
    DicePoolTooSmall { needed: usize, available: usize },
    InvalidTransition(String),
    NoSession { participant: u64, grid: u64 },
    SessionFinalized,
    LockPoisoned,
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidSize { size, min, max } => write!(
                f,
                "invalid grid size {}, must be between {} and {}",
                size, min, max
            ),
            GridError::UnsupportedSize { size, min, max } => write!(
                f,
                "unsupported grid size {}, must be between {} and {}",
                size, min, max
            ),
            GridError::DicePoolTooSmall { needed, available } => write!(
                f,
                "need {} dice but the pool only has {}",
                needed, available
            ),
            GridError::InvalidTransition(s) => write!(f, "invalid transition: {}", s),
            GridError::NoSession { participant, grid } => write!(
                f,
                "no live session for participant {} on grid {}",
                participant, grid
            ),
            GridError::SessionFinalized => write!(f, "session is already finalized"),
            GridError::LockPoisoned => write!(f, "session registry lock is poisoned"),
        }
    }
}

impl std::fmt::Debug for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for GridError {}

// recovers the typed error from a boxed one, if that is what it is.
pub fn as_grid_error(err: &BoxAnyError) -> Option<&GridError> {
    err.downcast_ref::<GridError>()
}
