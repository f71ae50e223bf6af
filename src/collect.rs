use std::io::{self, BufRead, Write};

use crate::present::Presenter;
use crate::question::Question;

/// What the player did with one question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collected {
    Answered { correct: bool },
    Quit,
}

/// How one line of input is interpreted for a question with `choices` answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Choice(usize),
    Quit,
    OutOfRange,
    NotANumber,
}

impl Reply {
    pub fn parse(line: &str, choices: usize) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);

        if let Ok(n) = line.parse::<i64>() {
            return match usize::try_from(n) {
                Ok(n) if (1..=choices).contains(&n) => Reply::Choice(n),
                _ => Reply::OutOfRange,
            };
        }

        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            Reply::Quit
        } else {
            Reply::NotANumber
        }
    }
}

/// Prompts for an answer until it gets a valid choice or the quit directive
pub struct AnswerCollector<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    presenter: Presenter,
}

impl<'a, R: BufRead, W: Write> AnswerCollector<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W, presenter: Presenter) -> Self {
        Self {
            input,
            output,
            presenter,
        }
    }

    /// Blocks on input until the question is answered or the player quits.
    ///
    /// Closed input counts as quitting. Lines that are not valid UTF-8 are
    /// decoded lossily and rejected like any other non-number.
    pub fn collect(&mut self, question: &Question) -> io::Result<Collected> {
        let choices = question.answers.len();
        let mut buf = Vec::new();

        loop {
            write!(self.output, "{}", self.presenter.prompt(choices))?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(Collected::Quit);
            }
            let line = String::from_utf8_lossy(&buf);

            match Reply::parse(&line, choices) {
                Reply::Choice(n) => {
                    let correct = question.choice(n).is_some_and(|a| a.is_correct);
                    if correct {
                        writeln!(self.output, "{}", self.presenter.correct())?;
                    } else {
                        writeln!(self.output, "{}", self.presenter.tip(question))?;
                    }
                    return Ok(Collected::Answered { correct });
                }
                Reply::Quit => return Ok(Collected::Quit),
                Reply::OutOfRange => {
                    writeln!(self.output, "{}", self.presenter.out_of_range(choices))?;
                }
                Reply::NotANumber => {
                    writeln!(self.output, "{}", self.presenter.not_a_number(choices))?;
                }
            }
        }
    }
}
