//! The in-memory question collection.

use crate::{
    storage::{LoadError, QuestionSource},
    Question,
};

/// An immutable, in-memory collection of questions.
///
/// The bank is populated once, at construction, and exposes read access
/// only. Loading failures from the source are propagated unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Loads a bank from the given source.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`LoadError`], e.g. when the configured path
    /// does not exist or a record is malformed.
    pub fn load(source: &impl QuestionSource) -> Result<Self, LoadError> {
        let questions = source.load_questions()?;
        tracing::info!("Question bank holds {} questions", questions.len());
        Ok(Self::from_questions(questions))
    }

    /// Creates a bank directly from an already-loaded collection.
    #[must_use]
    pub const fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// All questions, in load order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
