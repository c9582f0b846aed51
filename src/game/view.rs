//! Read-only projection of a round for renderers
//!
//! Front ends draw from this instead of poking at [`RoundState`] directly.

use super::round::RoundState;
use crate::core::{LetterClassification, WORD_LENGTH};

/// One board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub class: Option<LetterClassification>,
}

/// What a board row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Submitted,
    /// The row being typed into
    Active,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub cells: [Cell; WORD_LENGTH],
}

/// The full board: one row per allowed attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: Vec<Row>,
}

impl BoardView {
    #[must_use]
    pub fn from_state(state: &RoundState) -> Self {
        let mut rows: Vec<Row> = state
            .attempts()
            .iter()
            .map(|attempt| {
                let mut cells = [Cell::default(); WORD_LENGTH];
                for (cell, (letter, class)) in cells.iter_mut().zip(attempt.letters()) {
                    *cell = Cell {
                        letter: Some(char::from(letter)),
                        class: Some(class),
                    };
                }
                Row {
                    kind: RowKind::Submitted,
                    cells,
                }
            })
            .collect();

        if !state.outcome().is_terminal() {
            let mut cells = [Cell::default(); WORD_LENGTH];
            for (cell, letter) in cells.iter_mut().zip(state.current_input().chars()) {
                cell.letter = Some(letter);
            }
            rows.push(Row {
                kind: RowKind::Active,
                cells,
            });
        }

        rows.resize(
            state.attempt_limit(),
            Row {
                kind: RowKind::Empty,
                cells: [Cell::default(); WORD_LENGTH],
            },
        );

        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::KeyStyle;
    use crate::core::Word;
    use crate::game::Dictionary;

    #[test]
    fn board_shows_attempts_active_row_and_blanks() {
        let dict = Dictionary::from_candidates(["crane", "slate"]).unwrap();
        let mut state = RoundState::new(Word::new("crane").unwrap(), 6);
        state = state
            .set_current_input(&Word::new("slate").unwrap())
            .unwrap()
            .submit(&dict)
            .unwrap()
            .0;
        state = state.append_letter('c').unwrap();

        let board = BoardView::from_state(&state);
        assert_eq!(board.rows.len(), 6);
        assert_eq!(board.rows[0].kind, RowKind::Submitted);
        assert_eq!(board.rows[0].cells[2].letter, Some('A'));
        assert_eq!(
            board.rows[0].cells[2].class,
            Some(LetterClassification::Correct)
        );
        assert_eq!(board.rows[1].kind, RowKind::Active);
        assert_eq!(board.rows[1].cells[0].letter, Some('C'));
        assert_eq!(board.rows[1].cells[1], Cell::default());
        assert!(board.rows[2..].iter().all(|r| r.kind == RowKind::Empty));

        assert_eq!(state.hints().key_style('S'), KeyStyle::NotFound);
        assert_eq!(state.hints().key_style('Q'), KeyStyle::Unstyled);
    }

    #[test]
    fn finished_board_has_no_active_row() {
        let dict = Dictionary::from_candidates(["crane"]).unwrap();
        let target = Word::new("crane").unwrap();
        let state = RoundState::new(target, 6)
            .set_current_input(&target)
            .unwrap()
            .submit(&dict)
            .unwrap()
            .0;

        let board = BoardView::from_state(&state);
        assert!(board.rows.iter().all(|r| r.kind != RowKind::Active));
    }
}
