//! # Music Theory Types
//!
//! This module defines the core types for the interval trainer.
//!
//! ## Type Hierarchy
//! ```text
//! Question
//!   ├── notes: [Note; 2] (base note first, derived note second)
//!   └── correct_answer: interval name (e.g. "m3", "P4(11)")
//!
//! Note
//!   ├── step: NoteStep (C-B, cyclic with period 7)
//!   ├── octave: i8
//!   ├── accidental: Accidental (natural, sharp, flat)
//!   ├── display_name: ASCII identifier (e.g. "G3", "Ab3", "C#4")
//!   └── staff_position: i8 (vertical staff offset, higher = lower on staff)
//! ```
//!
//! ## Pitch Arithmetic
//! A pitch is an integer semitone value: `step_value + 12 * octave`, with
//! step values C=0, D=2, E=4, F=5, G=7, A=9, B=11. So G3 = 43, C4 = 48,
//! G5 = 67. An accidental shifts the pitch by one semitone in either
//! direction; double accidentals are never produced.
//!
//! ## Display Names
//! `display_name` is the same identifier the audio sampler consumes:
//! letter, optional `#`/`b`, octave. The rendering surface uses the
//! `♯`/`♭` glyphs from [`Accidental::glyph()`] instead.
//!
//! ## Related Modules
//! - `tables` - Static interval and staff-position tables over these types
//! - `generator` - Produces `Question` values
//! - `playback` - Formats note pairs for the audio collaborator

use serde::Serialize;

/// Note letter names in cyclic staff order. Degree arithmetic wraps past B
/// back to C, one octave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum NoteStep {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteStep {
    /// Semitone offset from C within one octave.
    pub fn semitone(&self) -> i16 {
        match self {
            NoteStep::C => 0,
            NoteStep::D => 2,
            NoteStep::E => 4,
            NoteStep::F => 5,
            NoteStep::G => 7,
            NoteStep::A => 9,
            NoteStep::B => 11,
        }
    }

    /// Index in the 7-letter cycle (C = 0 .. B = 6).
    pub fn cycle_index(&self) -> usize {
        match self {
            NoteStep::C => 0,
            NoteStep::D => 1,
            NoteStep::E => 2,
            NoteStep::F => 3,
            NoteStep::G => 4,
            NoteStep::A => 5,
            NoteStep::B => 6,
        }
    }

    /// Letter used in display names.
    pub fn letter(&self) -> char {
        match self {
            NoteStep::C => 'C',
            NoteStep::D => 'D',
            NoteStep::E => 'E',
            NoteStep::F => 'F',
            NoteStep::G => 'G',
            NoteStep::A => 'A',
            NoteStep::B => 'B',
        }
    }
}

/// Pitch in semitones of a natural (step, octave) pair.
pub fn pitch(step: NoteStep, octave: i8) -> i16 {
    step.semitone() + 12 * octave as i16
}

/// Accidentals: sharp, flat, or natural. The generator only ever puts
/// sharp or flat on the derived note; base notes are always natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Semitone shift applied to the natural pitch.
    pub fn offset(&self) -> i16 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    /// ASCII suffix used in note identifiers ("C#4", "Ab3").
    pub fn suffix(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    /// Glyph drawn next to the note head. Natural notes carry no glyph.
    pub fn glyph(&self) -> Option<char> {
        match self {
            Accidental::Natural => None,
            Accidental::Sharp => Some('♯'),
            Accidental::Flat => Some('♭'),
        }
    }
}

/// A staff-renderable note.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub step: NoteStep,
    pub octave: i8,
    pub accidental: Accidental,
    /// ASCII identifier, e.g. "G3" or "Ab3". Identical to the identifier
    /// the audio sampler accepts.
    pub display_name: String,
    /// Vertical staff offset. Higher value = lower on the staff
    /// (F5 = 0, C4 = 10, G3 = 13).
    pub staff_position: i8,
}

impl Note {
    pub fn new(step: NoteStep, octave: i8, accidental: Accidental, staff_position: i8) -> Self {
        let display_name = format!("{}{}{}", step.letter(), accidental.suffix(), octave);
        Self {
            step,
            octave,
            accidental,
            display_name,
            staff_position,
        }
    }

    /// Sounding pitch in semitones, accidental included.
    pub fn pitch(&self) -> i16 {
        pitch(self.step, self.octave) + self.accidental.offset()
    }
}

/// One quiz question: two notes and the interval name that answers it.
///
/// The notes are in generation order (base note first, derived note second),
/// not sorted by pitch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub notes: [Note; 2],
    pub correct_answer: &'static str,
}
