use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::bank::Bank;
use crate::error::{QuizError, Result};
use crate::source::{sources_for, QuestionSource};

/// Which banks to load, where from, and how to seed the shuffle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub banks: Vec<Bank>,
    /// Read `<data_dir>/<bank>.json` instead of the built-in copies
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banks: Bank::ALL.to_vec(),
            data_dir: None,
            seed: None,
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing keys keep their defaults; an empty
    /// `banks` list is rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |message: String| QuizError::Config {
            path: path.to_path_buf(),
            message,
        };
        let bytes = fs::read(path).map_err(|e| invalid(e.to_string()))?;
        let config: Config = serde_json::from_slice(&bytes).map_err(|e| invalid(e.to_string()))?;
        if config.banks.is_empty() {
            return Err(invalid("no question banks selected".to_string()));
        }
        Ok(config)
    }

    pub fn sources(&self) -> Vec<Box<dyn QuestionSource>> {
        sources_for(&self.banks, self.data_dir.as_deref())
    }

    /// Configured seed, or one taken from the clock
    pub fn seed_or_now(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed_or_now())
    }
}
