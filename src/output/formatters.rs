//! Formatting utilities for terminal output

use crate::core::{Attempt, LetterClassification};
use crate::game::KeyStyle;
use colored::{ColoredString, Colorize};

/// Keyboard rows as laid out on screen
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format an attempt as an emoji string
#[must_use]
pub fn attempt_to_emoji(attempt: &Attempt) -> String {
    attempt.to_emoji()
}

/// Colour a single letter tile by classification
#[must_use]
pub fn tile(letter: char, class: LetterClassification) -> ColoredString {
    let text = format!(" {letter} ");
    match class {
        LetterClassification::Correct => text.black().on_green().bold(),
        LetterClassification::Present => text.black().on_yellow().bold(),
        LetterClassification::NotFound => text.white().on_bright_black(),
    }
}

/// Colour an attempt as a row of tiles
#[must_use]
pub fn attempt_tiles(attempt: &Attempt) -> String {
    attempt
        .letters()
        .map(|(letter, class)| tile(char::from(letter), class).to_string())
        .collect()
}

/// Colour a keyboard key by its hint style
#[must_use]
pub fn key(letter: char, style: KeyStyle) -> ColoredString {
    let text = letter.to_string();
    match style {
        KeyStyle::Unstyled => text.normal(),
        KeyStyle::Correct => text.green().bold(),
        KeyStyle::Present => text.yellow().bold(),
        KeyStyle::NotFound => text.bright_black(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    #[test]
    fn emoji_for_crane_round() {
        let target = Word::new("crane").unwrap();
        let first = evaluate(&Word::new("slate").unwrap(), &target);
        let second = evaluate(&target, &target);

        assert_eq!(attempt_to_emoji(&first), "⬜⬜🟩⬜🟩");
        assert_eq!(attempt_to_emoji(&second), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn tiles_keep_letters_in_order() {
        colored::control::set_override(false);
        let attempt = evaluate(&Word::new("slate").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(attempt_tiles(&attempt), " S  L  A  T  E ");
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters.len(), 26);
        assert_eq!(letters.first(), Some(&'A'));
        assert_eq!(letters.last(), Some(&'Z'));
    }
}
