use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

static BANK_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/banks");

/// Built-in question topics. The display form is the bank's file stem.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Bank {
    Ports,
    Webservers,
    Acronyms,
}

impl Bank {
    pub const ALL: [Bank; 3] = [Bank::Ports, Bank::Webservers, Bank::Acronyms];

    pub fn file_name(&self) -> String {
        format!("{self}.json")
    }

    /// Contents of the copy compiled into the binary
    pub fn embedded_contents(&self) -> Result<&'static str> {
        BANK_DIR
            .get_file(self.file_name())
            .and_then(|f| f.contents_utf8())
            .ok_or_else(|| QuizError::MissingBank(self.to_string()))
    }
}
