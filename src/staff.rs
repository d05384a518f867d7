//! # Staff Geometry
//!
//! Helpers for placing a two-note question on a five-line treble staff:
//! which ledger lines a note head needs, when two heads must sit side by
//! side, and a plain-text rendering for the terminal front-end. A pixel
//! renderer maps staff positions to vertical offsets itself; these helpers
//! carry the geometry that is independent of the output surface.

use crate::theory::Note;

/// Staff positions of the five lines, top line first (F5=0, D5=2, B4=4,
/// G4=6, E4=8).
pub const LINE_POSITIONS: [i8; 5] = [0, 2, 4, 6, 8];

/// Ledger lines a note head at `position` needs, nearest the staff first.
///
/// Ledger lines sit on even positions: below the staff from C4 (10) down,
/// above it from A5 (-2) up.
pub fn ledger_lines(position: i8) -> Vec<i8> {
    let mut lines = Vec::new();
    if position >= 10 {
        let mut p = 10;
        while p <= position {
            lines.push(p);
            p += 2;
        }
    }
    if position <= -2 {
        let mut p = -2;
        while p >= position {
            lines.push(p);
            p -= 2;
        }
    }
    lines
}

/// Horizontal head offsets for the two notes of a question.
///
/// Heads a second apart (positions differing by exactly 1) would overlap in
/// a single column, so the lower one moves left and the upper one right.
/// Everything else stacks in one column.
pub fn head_offsets(first: i8, second: i8) -> (i8, i8) {
    if (first - second).abs() == 1 {
        if first > second {
            (-1, 1)
        } else {
            (1, -1)
        }
    } else {
        (0, 0)
    }
}

/// Render the note pair as a plain-text staff for the terminal.
pub fn render_text(notes: &[Note; 2]) -> String {
    const WIDTH: usize = 17;
    const CENTER: i8 = 8;

    let (first_pos, second_pos) = (notes[0].staff_position, notes[1].staff_position);
    let offsets = head_offsets(first_pos, second_pos);
    let columns = [
        CENTER + offsets.0 * 2,
        CENTER + offsets.1 * 2,
    ];

    let top = (-1).min(first_pos.min(second_pos));
    let bottom = 9.max(first_pos.max(second_pos));

    let mut rows = Vec::new();
    for position in top..=bottom {
        let mut cells = if LINE_POSITIONS.contains(&position) {
            vec!['-'; WIDTH]
        } else {
            vec![' '; WIDTH]
        };

        for (note, &column) in notes.iter().zip(columns.iter()) {
            let column = column as usize;
            if ledger_lines(note.staff_position).contains(&position) {
                for cell in cells.iter_mut().skip(column.saturating_sub(3)).take(7) {
                    *cell = '-';
                }
            }
            if note.staff_position == position {
                cells[column] = '●';
                if let Some(glyph) = note.accidental.glyph() {
                    cells[column - 2] = glyph;
                }
            }
        }

        let row: String = cells.into_iter().collect();
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n")
}
