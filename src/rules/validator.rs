//! Answer validation and input sanitisation.
//!
//! Validation is pure and never fails: anything that does not parse as
//! an integer is simply a wrong answer.

use crate::core::PendingInput;
use crate::questions::Question;

/// Is the free-text `input` the question's answer?
///
/// Surrounding whitespace is ignored. Empty or non-integer text is wrong.
#[must_use]
pub fn validate_text(question: &Question, input: &str) -> bool {
    input
        .trim()
        .parse::<i64>()
        .is_ok_and(|value| value == i64::from(question.answer()))
}

/// Is the selected option the question's answer?
#[must_use]
pub fn validate_choice(question: &Question, option: u32) -> bool {
    option == question.answer()
}

/// Judge whatever is pending. Empty input is wrong.
#[must_use]
pub fn validate(question: &Question, input: &PendingInput) -> bool {
    match input {
        PendingInput::Text(text) => validate_text(question, text),
        PendingInput::Choice(Some(option)) => validate_choice(question, *option),
        PendingInput::Choice(None) => false,
    }
}

/// Free-text input filter: empty, or an optional leading minus followed
/// by digits. A lone `-` is accepted so players can start typing a
/// negative number.
#[must_use]
pub fn is_acceptable_text(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    digits.bytes().all(|b| b.is_ascii_digit())
}
