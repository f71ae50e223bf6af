use std::fmt::Write as _;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use crate::question::Question;

/// Question text followed by its answers numbered from 1 in stored order
pub fn render(question: &Question) -> String {
    let mut out = format!("[Q] {}\n\n", question.text);
    for (i, answer) in question.answers.iter().enumerate() {
        // writing to a String cannot fail
        let _ = writeln!(out, "{}) {}", i + 1, answer.text);
    }
    out
}

/// Formats everything the trainer says to the player.
///
/// Colour is only applied when asked for; `Presenter::plain()` output is
/// what the tests compare against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    color: bool,
}

impl Presenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Colour on when stdout is a terminal
    pub fn for_stdout() -> Self {
        Self::new(std::io::stdout().is_tty())
    }

    pub fn question(&self, question: &Question) -> String {
        render(question)
    }

    pub fn prompt(&self, choices: usize) -> String {
        format!("Answer (1 - {choices}): ")
    }

    pub fn correct(&self) -> String {
        self.paint("[+] Correct!".to_string(), |s| s.green().bold().to_string())
    }

    pub fn tip(&self, question: &Question) -> String {
        let line = match question.correct_answer() {
            Some(answer) => format!("[TIP] The correct answer is: {}", answer.text),
            None => "[TIP] No answer is marked correct for this question".to_string(),
        };
        self.paint(line, |s| s.yellow().to_string())
    }

    pub fn not_a_number(&self, choices: usize) -> String {
        self.paint(
            format!("[!] User's answer does not appear to be a number between 1 and {choices}"),
            |s| s.red().to_string(),
        )
    }

    pub fn out_of_range(&self, choices: usize) -> String {
        self.paint(
            format!("Input does not look like a number between 1 and {choices}"),
            |s| s.red().to_string(),
        )
    }

    pub fn loaded(&self, total: usize) -> String {
        format!("Total questions loaded: {total}")
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(format!("[*] {text}"), |s| s.cyan().bold().to_string())
    }

    fn paint(&self, line: String, style: impl FnOnce(String) -> String) -> String {
        if self.color {
            style(line)
        } else {
            line
        }
    }
}
