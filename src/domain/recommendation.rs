use super::{Query, Question};

/// The result of applying one [`Query`] to a question collection.
///
/// Holds the query alongside the questions chosen for it. The list is at
/// most as long as the query's requested count, and shorter when fewer
/// questions qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    query: Query,
    questions: Vec<Question>,
}

impl Recommendation {
    pub(crate) const fn new(query: Query, questions: Vec<Question>) -> Self {
        Self { query, questions }
    }

    /// The query these questions were chosen for.
    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// The chosen questions.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
