//! # Question Generator
//!
//! Produces one valid [`Question`] per call: a random natural base note, a
//! random interval, and the derived second note with its accidental spelled
//! to match the interval's scale degree.
//!
//! ## Algorithm
//! Rejection sampling over a small enumerable space:
//! 1. Draw a base note uniformly from [`ALLOWED_BASE_NOTES`] and an interval
//!    uniformly from [`INTERVALS`].
//! 2. Reject if the pair leaves the pitch range G3-G5.
//! 3. Advance the base letter by `degree - 1` along the 7-letter cycle,
//!    carrying the octave past B.
//! 4. The derived note's accidental is the difference between the target
//!    pitch and the natural pitch of that letter. Reject anything but a
//!    single sharp or flat, so every question shows a clear accidental on
//!    the second note and double accidentals never appear.
//!
//! Deriving spellings by direct formula trips over degree wraparound and the
//! enharmonic ambiguity at the tritone; rejection over the fixed tables is
//! correct by construction, and the filters only reject a minority of draws.
//!
//! ## Termination
//! The loop is bounded. With the shipped tables a valid candidate turns up
//! within a handful of draws; exhausting the cap means the static tables are
//! inconsistent and surfaces as [`TrainerError::Exhausted`]. `validate_tables`
//! pinpoints the broken entry up front.
//!
//! ## Example
//! ```rust
//! use eartrainer::generate_question;
//!
//! let question = generate_question()?;
//! assert_eq!(question.notes.len(), 2);
//! assert!(eartrainer::interval_names().contains(&question.correct_answer));
//! # Ok::<(), eartrainer::TrainerError>(())
//! ```

use rand::Rng;

use crate::error::TrainerError;
use crate::tables::{staff_position, Interval, ALLOWED_BASE_NOTES, INTERVALS, NOTE_STEPS};
use crate::theory::{pitch, Accidental, Note, NoteStep, Question};

/// Retry cap for the rejection loop. Far above what the shipped tables need;
/// hitting it is an invariant violation, not a runtime condition.
const MAX_ATTEMPTS: u32 = 4096;

/// Generate a question with a thread-local rng.
///
/// The only error is [`TrainerError::Exhausted`], which signals inconsistent
/// static tables and must never occur with the shipped ones.
pub fn generate_question() -> Result<Question, TrainerError> {
    generate_question_with(&mut rand::rng())
}

/// Generate a question from the given rng.
///
/// A seeded rng reproduces the same question stream, which is what the tests
/// lean on.
///
/// # Example
/// ```rust
/// use eartrainer::generate_question_with;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let a = generate_question_with(&mut StdRng::seed_from_u64(9))?;
/// let b = generate_question_with(&mut StdRng::seed_from_u64(9))?;
/// assert_eq!(a, b);
/// # Ok::<(), eartrainer::TrainerError>(())
/// ```
pub fn generate_question_with<R: Rng + ?Sized>(rng: &mut R) -> Result<Question, TrainerError> {
    for _ in 0..MAX_ATTEMPTS {
        let (step, octave) = ALLOWED_BASE_NOTES[rng.random_range(0..ALLOWED_BASE_NOTES.len())];
        let interval = &INTERVALS[rng.random_range(0..INTERVALS.len())];

        if let Some(question) = candidate(step, octave, interval) {
            return Ok(question);
        }
    }
    Err(TrainerError::Exhausted { attempts: MAX_ATTEMPTS })
}

/// Build the question for one (base note, interval) draw, or reject it.
///
/// Rejects pairs that leave the G3-G5 range, derived notes whose spelling
/// would need no accidental or a double accidental, and anything without a
/// staff position.
fn candidate(step: NoteStep, octave: i8, interval: &Interval) -> Option<Question> {
    let low = pitch(NoteStep::G, 3);
    let high = pitch(NoteStep::G, 5);

    let base_pitch = pitch(step, octave);
    let top_pitch = base_pitch + interval.semitones;

    // Range filter. The lower bound can't fire with the shipped base-note
    // set, but the invariant is on the pair, not the table.
    if base_pitch < low || top_pitch > high {
        return None;
    }

    // Advance the letter by degree - 1, carrying the octave past B.
    let advanced = step.cycle_index() + interval.degree as usize - 1;
    let top_step = NOTE_STEPS[advanced % 7];
    let top_octave = if advanced >= 7 { octave + 1 } else { octave };

    // The accidental is whatever is left over after the letter takes its
    // natural pitch. Only a single sharp or flat survives.
    let alteration = top_pitch - pitch(top_step, top_octave);
    let accidental = match alteration {
        1 => Accidental::Sharp,
        -1 => Accidental::Flat,
        _ => return None,
    };

    let base = Note::new(step, octave, Accidental::Natural, staff_position(step, octave)?);
    let top = Note::new(top_step, top_octave, accidental, staff_position(top_step, top_octave)?);

    Some(Question {
        notes: [base, top],
        correct_answer: interval.name,
    })
}

/// Validate the static tables the generator draws from.
///
/// Checks that every allowed base note is renderable and in range, and that
/// every interval row is well-formed and admits at least one valid question.
/// A failure here is the precise version of what the generator would
/// otherwise report as [`TrainerError::Exhausted`].
pub fn validate_tables() -> Result<(), TrainerError> {
    let low = pitch(NoteStep::G, 3);

    for &(step, octave) in ALLOWED_BASE_NOTES.iter() {
        if staff_position(step, octave).is_none() {
            return Err(TrainerError::Table(format!(
                "base note {}{} has no staff position",
                step.letter(),
                octave
            )));
        }
        if pitch(step, octave) < low {
            return Err(TrainerError::Table(format!(
                "base note {}{} lies below G3",
                step.letter(),
                octave
            )));
        }
    }

    for interval in &INTERVALS {
        if !(1..=11).contains(&interval.semitones) {
            return Err(TrainerError::Table(format!(
                "interval {} has semitone distance {} outside 1-11",
                interval.name, interval.semitones
            )));
        }
        if !(2..=7).contains(&interval.degree) {
            return Err(TrainerError::Table(format!(
                "interval {} has scale degree {} outside 2-7",
                interval.name, interval.degree
            )));
        }
        let solvable = ALLOWED_BASE_NOTES
            .iter()
            .any(|&(step, octave)| candidate(step, octave, interval).is_some());
        if !solvable {
            return Err(TrainerError::Table(format!(
                "interval {} admits no valid question",
                interval.name
            )));
        }
    }

    Ok(())
}
