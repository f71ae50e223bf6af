use std::fmt;

use crate::question::AnswerRecord;
use crate::util::{percentage, round_one_decimal};

/// Tally of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub answered: usize,
    pub correct: usize,
}

impl Summary {
    pub fn from_history(history: &[AnswerRecord]) -> Self {
        Self {
            answered: history.len(),
            correct: history.iter().filter(|r| r.answered_correctly).count(),
        }
    }

    /// Share answered correctly, rounded to one decimal; `None` if nothing was answered
    pub fn percentage(&self) -> Option<f64> {
        percentage(self.correct, self.answered).map(round_one_decimal)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage() {
            Some(pct) => write!(f, "{} / {} ({:.1}%)", self.correct, self.answered, pct),
            None => write!(f, "No questions were answered"),
        }
    }
}
