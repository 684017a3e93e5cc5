//! Random password generation from selectable character classes.
//!
//! A password is built by taking one character from each selected class,
//! filling up to the requested length from the joined tables, and shuffling
//! the result with Fisher-Yates.
//!
//! ```
//! use passgen::{PasswordGenerationOptions, PasswordGenerator};
//!
//! let password = PasswordGenerator::new()
//!     .generate(&PasswordGenerationOptions::with_length(16))
//!     .unwrap();
//! assert_eq!(password.chars().count(), 16);
//! ```

pub mod cli;
pub mod core;
pub mod generators;
pub mod models;

pub use crate::generators::{GeneratorError, PasswordGenerator, RandomSource, RngSource};
pub use crate::models::{CharacterClass, PasswordGenerationOptions};
