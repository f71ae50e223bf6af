use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::collect::{AnswerCollector, Collected};
use crate::error::Result;
use crate::pool::Pool;
use crate::present::Presenter;
use crate::question::AnswerRecord;
use crate::report::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    /// Player issued the quit directive
    Quit,
    /// Every question has been asked
    Exhausted,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Running)
    }
}

/// One run through the question pool
#[derive(Debug)]
pub struct Session {
    pool: Pool,
    history: Vec<AnswerRecord>,
    state: SessionState,
    rng: StdRng,
    presenter: Presenter,
}

impl Session {
    pub fn new(pool: Pool, rng: StdRng, presenter: Presenter) -> Self {
        Self {
            pool,
            history: Vec::new(),
            state: SessionState::Running,
            rng,
            presenter,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn summary(&self) -> Summary {
        Summary::from_history(&self.history)
    }

    /// Asks one question and advances the state machine.
    ///
    /// Does nothing once the session has reached a terminal state.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let Some(question) = self.pool.draw_random(&mut self.rng) else {
            debug!("question bank is empty");
            self.state = SessionState::Exhausted;
            return Ok(self.state);
        };

        writeln!(output)?;
        write!(output, "{}", self.presenter.question(&question))?;
        writeln!(output)?;

        let collected = AnswerCollector::new(input, output, self.presenter).collect(&question)?;
        match collected {
            Collected::Answered { correct } => {
                self.history.push(AnswerRecord {
                    question,
                    answered_correctly: correct,
                });
            }
            Collected::Quit => {
                debug!("player requested to quit");
                self.state = SessionState::Quit;
            }
        }

        Ok(self.state)
    }

    /// Runs until the pool is exhausted or the player quits, then prints the results
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<Summary> {
        info!(questions = self.pool.len(), "session started");

        while !self.step(input, output)?.is_terminal() {}

        let summary = self.summary();
        self.report(output, &summary)?;

        info!(
            state = ?self.state,
            answered = summary.answered,
            correct = summary.correct,
            "session finished"
        );
        Ok(summary)
    }

    fn report<W: Write>(&self, output: &mut W, summary: &Summary) -> Result<()> {
        match self.state {
            SessionState::Exhausted => {
                writeln!(output)?;
                writeln!(output, "{}", self.presenter.heading("Question bank is empty"))?;
            }
            SessionState::Quit => {
                writeln!(output)?;
                writeln!(output, "{}", self.presenter.heading("Player requested to quit"))?;
            }
            SessionState::Running => {}
        }
        writeln!(output)?;
        writeln!(output, "{}", self.presenter.heading("Results:"))?;
        writeln!(output, "\t{summary}")?;
        output.flush()?;
        Ok(())
    }
}
