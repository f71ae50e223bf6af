/// One candidate answer to a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// A question with its answers in display order.
///
/// The order is shuffled once by the loader and never changes afterwards, so
/// the number a player types always maps to the same answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(text: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }

    /// First answer flagged correct, in stored order
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.is_correct)
    }

    /// Looks up a 1-based choice as typed by the player
    pub fn choice(&self, number: usize) -> Option<&Answer> {
        number
            .checked_sub(1)
            .and_then(|idx| self.answers.get(idx))
    }
}

/// Outcome of one answered question. Holds the question it was drawn for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: Question,
    pub answered_correctly: bool,
}
