//! # Session Settings
//!
//! Optional YAML settings for a quiz run. All keys are optional; defaults
//! match the stock exercise (sound off, two-second chords, endless
//! questions).
//!
//! ```yaml
//! auto-sound: true
//! chord-duration: 1.5
//! question-count: 20
//! ```

use serde::Deserialize;

use crate::error::TrainerError;
use crate::playback::DEFAULT_CHORD_SECONDS;

/// Raw YAML shape. Everything optional; resolution happens in
/// [`Settings::parse`].
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawSettings {
    auto_sound: Option<bool>,
    chord_duration: Option<f64>,
    question_count: Option<u32>,
}

/// Resolved settings with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Announce the chord for every new question (and again after a wrong
    /// answer), mirroring the exercise's auto-sound toggle.
    pub auto_sound: bool,
    /// Seconds a chord sounds.
    pub chord_duration: f64,
    /// Number of questions to answer before the session ends. `None` runs
    /// until the user quits.
    pub question_count: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_sound: false,
            chord_duration: DEFAULT_CHORD_SECONDS,
            question_count: None,
        }
    }
}

impl Settings {
    /// Parse YAML settings. Empty input yields the defaults.
    pub fn parse(source: &str) -> Result<Self, TrainerError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawSettings =
            serde_yaml::from_str(source).map_err(|e| TrainerError::Settings(e.to_string()))?;

        let chord_duration = raw.chord_duration.unwrap_or(DEFAULT_CHORD_SECONDS);
        if !chord_duration.is_finite() || chord_duration <= 0.0 {
            return Err(TrainerError::Settings(format!(
                "chord-duration must be positive, got {}",
                chord_duration
            )));
        }

        Ok(Self {
            auto_sound: raw.auto_sound.unwrap_or(false),
            chord_duration,
            question_count: raw.question_count,
        })
    }
}
