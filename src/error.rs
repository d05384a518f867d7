//! # Error Types
//!
//! This module defines all error types for the ear-training engine.
//!
//! ## Error Types
//! - `Exhausted` - The question generator's bounded retry loop ran dry
//! - `Table` - A static lookup table failed validation
//! - `Settings` - Invalid YAML settings for a quiz session
//!
//! `Exhausted` deserves a note: the generator rejects candidates until it finds
//! a pair of notes with a clean sharp or flat on the derived note, and the
//! shipped tables always admit a solution within a handful of draws. Running
//! out of attempts therefore means the tables themselves are inconsistent
//! (for example, a base note missing from the staff-position table). Callers
//! should treat it as a programming error, not a recoverable condition.
//!
//! ## Usage
//! ```rust
//! use eartrainer::{generate_question, TrainerError};
//!
//! match generate_question() {
//!     Ok(question) => println!("Answer: {}", question.correct_answer),
//!     Err(TrainerError::Exhausted { attempts }) => {
//!         eprintln!("Gave up after {} attempts. The tables are broken.", attempts);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    /// The bounded rejection-sampling loop found no valid question.
    ///
    /// Only occurs if the static tables are internally inconsistent. It must
    /// never occur with the shipped tables.
    ///
    /// # Example
    /// ```
    /// # use eartrainer::TrainerError;
    /// let err = TrainerError::Exhausted { attempts: 4096 };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "No valid question after 4096 attempts: static tables are inconsistent"
    /// );
    /// ```
    #[error("No valid question after {attempts} attempts: static tables are inconsistent")]
    Exhausted { attempts: u32 },

    /// A static table entry failed validation.
    ///
    /// # Example
    /// ```
    /// # use eartrainer::TrainerError;
    /// let err = TrainerError::Table("base note F6 has no staff position".to_string());
    /// assert_eq!(err.to_string(), "Invalid table: base note F6 has no staff position");
    /// ```
    #[error("Invalid table: {0}")]
    Table(String),

    /// Invalid YAML settings.
    ///
    /// # Example
    /// ```
    /// # use eartrainer::TrainerError;
    /// let err = TrainerError::Settings("chord-duration must be positive, got -1".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: chord-duration must be positive, got -1");
    /// ```
    #[error("Invalid settings: {0}")]
    Settings(String),
}
