//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback};
use colored::{ColoredString, Colorize};

/// Render a guess with each letter colored by its mark
#[must_use]
pub fn colored_guess(word: &str, feedback: Feedback) -> String {
    word.to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| paint(letter, mark).to_string())
        .collect()
}

fn paint(letter: char, mark: LetterFeedback) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        LetterFeedback::Green => text.black().on_green(),
        LetterFeedback::Yellow => text.black().on_yellow(),
        LetterFeedback::Gray => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Win rate as a percentage string colored by how good it is
#[must_use]
pub fn colored_percentage(rate: f64) -> ColoredString {
    let text = format!("{:.1}%", rate * 100.0);
    if rate >= 0.9 {
        text.green().bold()
    } else if rate >= 0.5 {
        text.yellow()
    } else {
        text.red()
    }
}
