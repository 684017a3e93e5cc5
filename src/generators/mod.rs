// src/generators/mod.rs
use thiserror::Error;

use crate::models::MIN_PASSWORD_LENGTH;

pub mod password;
pub mod random;
pub mod strength;

pub use password::{pick_random_char, shuffle, PasswordGenerator};
pub use random::{RandomSource, RngSource};
pub use strength::{analyze_password_strength, estimate_entropy_bits};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {min} characters (got {length})")]
    InvalidLength { length: usize, min: usize },

    #[error("At least one character set must be selected")]
    NoCharacterClassSelected,

    #[error("Cannot pick a character from an empty set")]
    EmptySet,
}

impl GeneratorError {
    pub fn invalid_length(length: usize) -> Self {
        GeneratorError::InvalidLength { length, min: MIN_PASSWORD_LENGTH }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
