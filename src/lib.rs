//! Interval ear-training engine: generates two-note questions on a treble
//! staff and scores a quiz session over them. See [`generator`] for the
//! question generator and [`quiz`] for the session state machine.

pub mod config;
pub mod error;
pub mod generator;
pub mod playback;
pub mod quiz;
pub mod staff;
pub mod tables;
pub mod theory;

pub use config::Settings;
pub use error::TrainerError;
pub use generator::{generate_question, generate_question_with, validate_tables};
pub use playback::{chord, ChordPlayback, DEFAULT_CHORD_SECONDS};
pub use quiz::{AnswerState, QuizSession, Scoreboard};
pub use tables::{interval_names, staff_position, Interval, ALLOWED_BASE_NOTES, INTERVALS, NOTE_STEPS};
pub use theory::{pitch, Accidental, Note, NoteStep, Question};
