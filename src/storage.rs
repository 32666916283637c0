/// JSON-backed question loading.
pub mod json;

pub use json::{JsonStore, LoadError};

use crate::Question;

/// A source of questions.
///
/// The single capability a question bank needs from its storage: load every
/// question reachable from a configured location. There is one shipped
/// implementation, [`JsonStore`]; alternative data formats implement this
/// trait.
pub trait QuestionSource {
    /// Loads all questions from the source.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the configured path does not
    /// exist, and [`LoadError::Format`] if any record is malformed. A single
    /// bad record fails the whole load; there is no partial recovery.
    fn load_questions(&self) -> Result<Vec<Question>, LoadError>;
}
