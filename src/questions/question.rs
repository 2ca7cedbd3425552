//! Generated arithmetic questions.

use serde::{Deserialize, Serialize};

use super::Operation;

/// Opaque question identifier, unique within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u64);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuestionId {
    /// Lowercase base-36.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

        let mut n = self.0;
        let mut buf = [0u8; 13];
        let mut pos = buf.len();
        loop {
            pos -= 1;
            buf[pos] = DIGITS[(n % 36) as usize];
            n /= 36;
            if n == 0 {
                break;
            }
        }
        // Only ASCII digits were written.
        f.write_str(std::str::from_utf8(&buf[pos..]).map_err(|_| std::fmt::Error)?)
    }
}

/// An arithmetic question. Immutable once generated.
///
/// `answer` is always `num1 operation num2` in exact, non-negative integer
/// arithmetic. Multiple-choice questions also carry three options holding
/// the answer exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    num1: u32,
    num2: u32,
    operation: Operation,
    answer: u32,
    display_text: String,
    options: Option<[u32; 3]>,
}

impl Question {
    /// Build a question, computing the answer and display text.
    ///
    /// Panics if `num1 operation num2` is not a non-negative integer; the
    /// generator constructs operands so this cannot happen.
    #[must_use]
    pub(crate) fn new(id: QuestionId, num1: u32, num2: u32, operation: Operation) -> Self {
        let answer = operation
            .apply(num1, num2)
            .unwrap_or_else(|| panic!("{num1} {operation} {num2} has no exact non-negative answer"));

        Self {
            id,
            num1,
            num2,
            operation,
            answer,
            display_text: format!("{num1} {operation} {num2} = ?"),
            options: None,
        }
    }

    /// Attach multiple-choice options.
    #[must_use]
    pub(crate) fn with_options(mut self, options: [u32; 3]) -> Self {
        debug_assert_eq!(options.iter().filter(|&&o| o == self.answer).count(), 1);
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn num1(&self) -> u32 {
        self.num1
    }

    #[must_use]
    pub fn num2(&self) -> u32 {
        self.num2
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn answer(&self) -> u32 {
        self.answer
    }

    /// Question text, e.g. `"12 × 4 = ?"`.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Multiple-choice options, in presentation order.
    #[must_use]
    pub fn options(&self) -> Option<&[u32; 3]> {
        self.options.as_ref()
    }

    /// Is `value` one of the presented options?
    #[must_use]
    pub fn has_option(&self, value: u32) -> bool {
        self.options.is_some_and(|opts| opts.contains(&value))
    }
}
