//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult, Word};
use crate::engine::{KEYBOARD_ROWS, LetterStates};
use colored::{ColoredString, Colorize};

/// One letter tile colored by its result
#[must_use]
pub fn colored_tile(letter: char, result: LetterResult) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        LetterResult::Correct => tile.black().on_green().bold(),
        LetterResult::WrongLocation => tile.black().on_yellow().bold(),
        LetterResult::Incorrect => tile.white().on_bright_black(),
        LetterResult::Empty => tile.normal(),
    }
}

/// A guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.results())
        .map(|(letter, &result)| colored_tile(letter, result).to_string())
        .collect()
}

/// A guess shown to other players: colors only, letters hidden
#[must_use]
pub fn hidden_guess(feedback: &Feedback) -> String {
    feedback
        .results()
        .iter()
        .map(|&result| colored_tile(' ', result).to_string())
        .collect()
}

/// The on-screen keyboard, one string per row, each row indented like a keyboard
#[must_use]
pub fn keyboard_lines(states: &LetterStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|key| colored_tile(char::from(key), states.get(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// An average score with one decimal, as shown in the summary
#[must_use]
pub fn format_average(average: f64) -> String {
    format!("{average:.1}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_contains_uppercase_letter() {
        let tile = colored_tile('c', LetterResult::Correct);
        assert!(tile.to_string().contains(" C "));
    }

    #[test]
    fn hidden_guess_reveals_no_letters() {
        let target = Word::new("reach").unwrap();
        let guess = Word::new("ocean").unwrap();
        let feedback = Feedback::evaluate(Some(&guess), &target);

        let hidden = hidden_guess(&feedback);
        assert!(!hidden.chars().any(|c| c.is_ascii_uppercase() && "OCEAN".contains(c)));
        assert!(colored_guess(&guess, &feedback).contains(" O "));
    }

    #[test]
    fn keyboard_has_three_rows_with_every_letter() {
        let lines = keyboard_lines(&LetterStates::default());
        assert_eq!(lines.len(), 3);
        for letter in 'A'..='Z' {
            assert!(
                lines.iter().any(|l| l.contains(letter)),
                "missing key {letter}"
            );
        }
    }

    #[test]
    fn averages_use_one_decimal() {
        assert_eq!(format_average(5.5), "5.5");
        assert_eq!(format_average(5.0), "5.0");
        assert_eq!(format_average(14.0 / 3.0), "4.7");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
