use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

/// Failures while assembling a board from the trivia source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Trivia source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Category {id} has {available} clues, {required} required")]
    InsufficientClues {
        id: CategoryId,
        available: usize,
        required: usize,
    },
    #[error("Could not draw {0} distinct categories")]
    DuplicateCategory(usize),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid clue position")]
    InvalidPosition,
    #[error("No board is ready, clues cannot be revealed")]
    NotReady,
}

pub type Result<T, E = GameError> = core::result::Result<T, E>;
