//! # Static Lookup Tables
//!
//! Immutable constant tables consumed by the question generator: the interval
//! table, the note-step cycle, the staff-position map, and the allowed set of
//! base notes. Built once into the binary; there is no mutable table state.
//!
//! Some semitone distances carry two names (4, 6, and 8 semitones), told apart
//! by scale degree: an augmented 4th and a diminished 5th are both 6 semitones
//! wide, but they target different letters and therefore different accidentals.
//! Selection over the table is uniform, so the two spellings at a shared
//! distance are equally likely.

use crate::theory::NoteStep;

/// One row of the interval table.
///
/// `degree` is the ordinal letter distance (2 = next letter), `semitones` the
/// pitch distance. The pair determines both the derived note's letter and its
/// accidental.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub name: &'static str,
    pub semitones: i16,
    pub degree: u8,
}

/// The 14 quiz intervals, one per semitone distance 1-11 plus the enharmonic
/// twins at 4, 6, and 8 semitones.
pub static INTERVALS: [Interval; 14] = [
    Interval { name: "m2(b9)", semitones: 1, degree: 2 },
    Interval { name: "M2(9)", semitones: 2, degree: 2 },
    Interval { name: "m3", semitones: 3, degree: 3 },
    Interval { name: "M3", semitones: 4, degree: 3 },
    Interval { name: "o4(b11)", semitones: 4, degree: 4 },
    Interval { name: "P4(11)", semitones: 5, degree: 4 },
    Interval { name: "+4", semitones: 6, degree: 4 },
    Interval { name: "o5", semitones: 6, degree: 5 },
    Interval { name: "P5", semitones: 7, degree: 5 },
    Interval { name: "+5", semitones: 8, degree: 5 },
    Interval { name: "m6(b13)", semitones: 8, degree: 6 },
    Interval { name: "M6(13)", semitones: 9, degree: 6 },
    Interval { name: "m7", semitones: 10, degree: 7 },
    Interval { name: "M7", semitones: 11, degree: 7 },
];

/// The 7-letter cycle used for degree arithmetic.
pub static NOTE_STEPS: [NoteStep; 7] = [
    NoteStep::C,
    NoteStep::D,
    NoteStep::E,
    NoteStep::F,
    NoteStep::G,
    NoteStep::A,
    NoteStep::B,
];

/// Natural base notes the generator may draw from, G3 through F5. Chosen so
/// that even the widest interval (11 semitones) stays within ledger reach
/// before the range filter rejects it.
pub static ALLOWED_BASE_NOTES: [(NoteStep, i8); 14] = [
    (NoteStep::G, 3),
    (NoteStep::A, 3),
    (NoteStep::B, 3),
    (NoteStep::C, 4),
    (NoteStep::D, 4),
    (NoteStep::E, 4),
    (NoteStep::F, 4),
    (NoteStep::G, 4),
    (NoteStep::A, 4),
    (NoteStep::B, 4),
    (NoteStep::C, 5),
    (NoteStep::D, 5),
    (NoteStep::E, 5),
    (NoteStep::F, 5),
];

// Staff positions for natural (step, octave) pairs, G3 through B5.
// Higher number = lower on the staff.
static STAFF_POSITIONS: [(NoteStep, i8, i8); 17] = [
    (NoteStep::G, 3, 13),
    (NoteStep::A, 3, 12),
    (NoteStep::B, 3, 11),
    (NoteStep::C, 4, 10),
    (NoteStep::D, 4, 9),
    (NoteStep::E, 4, 8),
    (NoteStep::F, 4, 7),
    (NoteStep::G, 4, 6),
    (NoteStep::A, 4, 5),
    (NoteStep::B, 4, 4),
    (NoteStep::C, 5, 3),
    (NoteStep::D, 5, 2),
    (NoteStep::E, 5, 1),
    (NoteStep::F, 5, 0),
    (NoteStep::G, 5, -1),
    (NoteStep::A, 5, -2),
    (NoteStep::B, 5, -3),
];

/// Staff position of a natural (step, octave) pair, if the pair is in the
/// renderable range G3-B5.
pub fn staff_position(step: NoteStep, octave: i8) -> Option<i8> {
    STAFF_POSITIONS
        .iter()
        .find(|&&(s, o, _)| s == step && o == octave)
        .map(|&(_, _, p)| p)
}

/// Answer choices in table order, for building a quiz prompt.
pub fn interval_names() -> [&'static str; 14] {
    INTERVALS.map(|interval| interval.name)
}
