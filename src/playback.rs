//! # Playback
//!
//! The boundary to the audio collaborator. The engine does not load samples
//! or drive a synthesizer; it hands the player a chord descriptor naming the
//! two notes (`"G3"`, `"Ab3"`, `"C#4"`) and how long to sound them.

use serde::Serialize;

use crate::theory::Note;

/// How long a quiz chord sounds when the settings don't say otherwise.
pub const DEFAULT_CHORD_SECONDS: f64 = 2.0;

/// Instruction for the audio player: which notes, for how many seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordPlayback {
    pub note_names: Vec<String>,
    pub duration: f64,
}

/// Build the playback instruction for a question's note pair.
pub fn chord(notes: &[Note; 2], duration: f64) -> ChordPlayback {
    ChordPlayback {
        note_names: notes.iter().map(|note| note.display_name.clone()).collect(),
        duration,
    }
}
