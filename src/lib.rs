// Library surface for the binary and for headless integration tests.
pub mod bank;
pub mod collect;
pub mod config;
pub mod error;
pub mod loader;
pub mod pool;
pub mod present;
pub mod question;
pub mod report;
pub mod session;
pub mod source;
pub mod util;

pub use error::{QuizError, Result};
