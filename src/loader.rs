use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{QuizError, Result};
use crate::question::{Answer, Question};
use crate::source::QuestionSource;

/// Answers a well-formed question carries
pub const EXPECTED_ANSWERS: usize = 4;

#[derive(Deserialize, Debug)]
struct BankFile {
    #[serde(rename = "Questions")]
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize, Debug)]
struct RawQuestion {
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Answers")]
    answers: Vec<RawAnswer>,
}

#[derive(Deserialize, Debug)]
struct RawAnswer {
    #[serde(rename = "Answer")]
    answer: String,
    // serialized as the string "true"/"false", not a JSON bool
    #[serde(rename = "isCorrect")]
    is_correct: String,
}

/// Reads every source into one pool of questions with shuffled answers.
///
/// Fails on the first source that cannot be read or deserialized. Answers
/// whose correctness flag is not exactly `"true"` or `"false"` are skipped
/// with a warning; questions left with no answers at all are dropped.
pub fn load_pool<R: Rng + ?Sized>(
    sources: &[Box<dyn QuestionSource>],
    rng: &mut R,
) -> Result<Vec<Question>> {
    let mut pool = Vec::new();

    for source in sources {
        debug!(source = %source.name(), "parsing question bank");
        let raw = source.read()?;
        let loaded = parse_bank(&source.name(), &raw, rng)?;
        debug!(source = %source.name(), count = loaded.len(), "bank loaded");
        pool.extend(loaded);
    }

    Ok(pool)
}

/// Parses one bank document into questions
pub fn parse_bank<R: Rng + ?Sized>(
    source_name: &str,
    raw: &str,
    rng: &mut R,
) -> Result<Vec<Question>> {
    let bank: BankFile = serde_json::from_str(raw).map_err(|source| QuizError::Parse {
        source_name: source_name.to_string(),
        source,
    })?;

    let mut questions = Vec::with_capacity(bank.questions.len());
    for raw_question in bank.questions {
        if let Some(question) = build_question(raw_question, rng) {
            questions.push(question);
        }
    }
    Ok(questions)
}

fn build_question<R: Rng + ?Sized>(raw: RawQuestion, rng: &mut R) -> Option<Question> {
    let mut answers = Vec::with_capacity(raw.answers.len());

    for a in raw.answers {
        match a.is_correct.parse::<bool>() {
            Ok(is_correct) => answers.push(Answer::new(a.answer, is_correct)),
            Err(_) => {
                warn!(
                    question = %raw.question,
                    flag = %a.is_correct,
                    "skipping answer with unparseable correctness flag"
                );
            }
        }
    }

    if answers.is_empty() {
        warn!(question = %raw.question, "dropping question with no usable answers");
        return None;
    }
    if answers.len() != EXPECTED_ANSWERS {
        warn!(
            question = %raw.question,
            answers = answers.len(),
            "question does not have {EXPECTED_ANSWERS} answers"
        );
    }
    if !answers.iter().any(|a| a.is_correct) {
        warn!(question = %raw.question, "question has no answer marked correct");
    }

    answers.shuffle(rng);

    Some(Question::new(raw.question, answers))
}
