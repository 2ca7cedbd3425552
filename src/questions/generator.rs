//! Procedural question generation.
//!
//! ## Operand construction
//!
//! - `+`, `×`: both operands drawn from the tier's range for the operation.
//! - `-`: two draws, larger first, so the difference is never negative.
//! - `÷`: divisor and quotient drawn, dividend built as their product, so
//!   the division is always exact.
//!
//! ## Distractors
//!
//! Multiple-choice questions get two wrong options near the answer. Most
//! offsets are small (1-10); some scale with the answer so large answers
//! get plausible far-off distractors too.

use tracing::trace;

use super::{Difficulty, Operation, Question, QuestionId};
use crate::core::{AnswerMode, GameRng};

/// Probability that a distractor offset is small rather than proportional.
const SMALL_OFFSET_PROBABILITY: f64 = 0.7;
/// Small distractor offsets.
const SMALL_OFFSET_RANGE: std::ops::RangeInclusive<u32> = 1..=10;
/// Proportional distractor offsets, in percent of the answer.
const PROPORTIONAL_PERCENT_RANGE: std::ops::RangeInclusive<u32> = 10..=50;

/// Question generator owning the session's random source.
#[derive(Clone, Debug)]
pub struct QuestionGenerator {
    rng: GameRng,
    next_id: u64,
}

impl QuestionGenerator {
    /// Create a generator over the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Create a deterministic generator from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Generate one question for `difficulty`.
    ///
    /// In multiple-choice mode the question carries three shuffled options.
    pub fn generate(&mut self, difficulty: Difficulty, mode: AnswerMode) -> Question {
        let profile = difficulty.profile();
        let operation = *self
            .rng
            .choose(profile.operations)
            .expect("every difficulty enables at least one operation");
        let range = profile.range(operation);

        let (num1, num2) = match operation {
            Operation::Add | Operation::Multiply => {
                (self.rng.gen_range(range.clone()), self.rng.gen_range(range))
            }
            Operation::Subtract => {
                let a = self.rng.gen_range(range.clone());
                let b = self.rng.gen_range(range);
                (a.max(b), a.min(b))
            }
            Operation::Divide => {
                let divisor = self.rng.gen_range(range.clone());
                let quotient = self.rng.gen_range(range);
                (divisor * quotient, divisor)
            }
        };

        let question = Question::new(self.alloc_id(), num1, num2, operation);
        trace!(id = %question.id(), text = question.display_text(), "Generated question");

        match mode {
            AnswerMode::FreeText => question,
            AnswerMode::MultipleChoice => {
                let options = self.options_for(question.answer());
                question.with_options(options)
            }
        }
    }

    /// Generate one question per player, independently.
    ///
    /// The two questions share a difficulty but may coincide in content.
    pub fn generate_pair(&mut self, difficulty: Difficulty, mode: AnswerMode) -> (Question, Question) {
        let left = self.generate(difficulty, mode);
        let right = self.generate(difficulty, mode);
        (left, right)
    }

    /// Two distinct non-negative distractors plus the answer, shuffled.
    fn options_for(&mut self, answer: u32) -> [u32; 3] {
        let mut wrong: Vec<u32> = Vec::with_capacity(2);

        while wrong.len() < 2 {
            let offset = self.distractor_offset(answer);
            let candidate = if self.rng.gen_bool(0.5) {
                answer.checked_add(offset)
            } else {
                answer.checked_sub(offset)
            };

            match candidate {
                Some(value) if value != answer && !wrong.contains(&value) => wrong.push(value),
                _ => {}
            }
        }

        let mut options = [answer, wrong[0], wrong[1]];
        self.rng.shuffle(&mut options);
        options
    }

    fn distractor_offset(&mut self, answer: u32) -> u32 {
        if self.rng.gen_bool(SMALL_OFFSET_PROBABILITY) {
            self.rng.gen_range(SMALL_OFFSET_RANGE)
        } else {
            let percent = self.rng.gen_range(PROPORTIONAL_PERCENT_RANGE);
            (answer.saturating_mul(percent) / 100).max(1)
        }
    }

    fn alloc_id(&mut self) -> QuestionId {
        let id = QuestionId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_answers_are_exact() {
        let mut gen = QuestionGenerator::seeded(1);

        for difficulty in Difficulty::ALL {
            for _ in 0..1000 {
                let q = gen.generate(difficulty, AnswerMode::FreeText);
                assert_eq!(q.operation().apply(q.num1(), q.num2()), Some(q.answer()));
                if q.operation() == Operation::Divide {
                    assert_eq!(q.num1() % q.num2(), 0);
                }
            }
        }
    }

    #[test]
    fn test_operations_respect_tier() {
        let mut gen = QuestionGenerator::seeded(2);

        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            let mut seen = HashSet::new();
            for _ in 0..500 {
                let q = gen.generate(difficulty, AnswerMode::FreeText);
                assert!(profile.allows(q.operation()));
                seen.insert(q.operation());
            }
            assert_eq!(seen.len(), profile.operations.len());
        }
    }

    #[test]
    fn test_operands_within_range() {
        let mut gen = QuestionGenerator::seeded(3);

        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            for _ in 0..500 {
                let q = gen.generate(difficulty, AnswerMode::FreeText);
                let range = profile.range(q.operation());
                match q.operation() {
                    Operation::Divide => {
                        assert!(range.contains(&q.num2()));
                        assert!(range.contains(&q.answer()));
                    }
                    _ => {
                        assert!(range.contains(&q.num1()));
                        assert!(range.contains(&q.num2()));
                    }
                }
            }
        }
    }

    #[test]
    fn test_subtraction_larger_first() {
        let mut gen = QuestionGenerator::seeded(4);

        for _ in 0..500 {
            let q = gen.generate(Difficulty::Easy, AnswerMode::FreeText);
            if q.operation() == Operation::Subtract {
                assert!(q.num1() >= q.num2());
            }
        }
    }

    #[test]
    fn test_display_text_format() {
        let mut gen = QuestionGenerator::seeded(5);
        let q = gen.generate(Difficulty::Medium, AnswerMode::FreeText);

        let expected = format!("{} {} {} = ?", q.num1(), q.operation().symbol(), q.num2());
        assert_eq!(q.display_text(), expected);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut gen = QuestionGenerator::seeded(6);
        let ids: HashSet<_> = (0..200)
            .map(|_| gen.generate(Difficulty::Easy, AnswerMode::FreeText).id())
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_options_for_zero_answer() {
        let mut gen = QuestionGenerator::seeded(7);

        for _ in 0..200 {
            let options = gen.options_for(0);
            assert_eq!(options.iter().filter(|&&o| o == 0).count(), 1);
            let mut sorted = options;
            sorted.sort_unstable();
            assert!(sorted.windows(2).all(|w| w[0] != w[1]));
        }
    }

    #[test]
    fn test_options_are_shuffled() {
        let mut gen = QuestionGenerator::seeded(8);
        let mut positions = HashSet::new();

        for _ in 0..200 {
            let options = gen.options_for(50);
            let pos = options.iter().position(|&o| o == 50).unwrap();
            positions.insert(pos);
        }

        assert_eq!(positions.len(), 3);
    }

    #[test]
    fn test_free_text_has_no_options() {
        let mut gen = QuestionGenerator::seeded(9);
        assert!(gen.generate(Difficulty::Hard, AnswerMode::FreeText).options().is_none());
        assert!(gen
            .generate(Difficulty::Hard, AnswerMode::MultipleChoice)
            .options()
            .is_some());
    }

    #[test]
    fn test_pair_is_reproducible() {
        let mut a = QuestionGenerator::seeded(10);
        let mut b = QuestionGenerator::seeded(10);

        assert_eq!(
            a.generate_pair(Difficulty::Hard, AnswerMode::MultipleChoice),
            b.generate_pair(Difficulty::Hard, AnswerMode::MultipleChoice)
        );
    }
}
