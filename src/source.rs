use std::fs;
use std::path::{Path, PathBuf};

use crate::bank::Bank;
use crate::error::{QuizError, Result};

/// Somewhere the loader can fetch one bank document from
pub trait QuestionSource {
    /// Name used in logs and error messages
    fn name(&self) -> String;

    /// Raw JSON text of the bank
    fn read(&self) -> Result<String>;
}

/// Bank compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource(pub Bank);

impl QuestionSource for EmbeddedSource {
    fn name(&self) -> String {
        self.0.to_string()
    }

    fn read(&self) -> Result<String> {
        self.0.embedded_contents().map(str::to_owned)
    }
}

/// Bank read from a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    /// `<dir>/<bank>.json`
    pub fn for_bank<P: AsRef<Path>>(dir: P, bank: Bank) -> Self {
        Self::new(dir.as_ref().join(bank.file_name()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| QuizError::Read {
            source_name: self.name(),
            source,
        })
    }
}

/// In-memory bank, handy for fixtures
#[derive(Debug, Clone)]
pub struct StrSource {
    name: String,
    contents: String,
}

impl StrSource {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

impl QuestionSource for StrSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> Result<String> {
        Ok(self.contents.clone())
    }
}

/// Sources for the chosen banks: embedded, or from `data_dir` when given
pub fn sources_for(banks: &[Bank], data_dir: Option<&Path>) -> Vec<Box<dyn QuestionSource>> {
    banks
        .iter()
        .map(|&bank| -> Box<dyn QuestionSource> {
            match data_dir {
                Some(dir) => Box::new(FileSource::for_bank(dir, bank)),
                None => Box::new(EmbeddedSource(bank)),
            }
        })
        .collect()
}
