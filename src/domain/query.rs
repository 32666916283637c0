use std::collections::BTreeSet;

use uuid::Uuid;

use super::Complexity;

/// A request for a number of questions matching a set of filters.
///
/// Absent filters widen the match: a query with no category filter accepts
/// questions of every category, and likewise for complexity and labels.
///
/// The requested count is carried as an `i64` rather than a `usize` so that
/// a negative count arriving from an untyped source (a query file, a caller
/// doing arithmetic) survives to the engine, which rejects it with
/// [`crate::engine::QueryError::NegativeCount`] before any sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    id: Uuid,
    count: i64,
    category: Option<String>,
    complexity: Option<Complexity>,
    labels: BTreeSet<String>,
}

impl Query {
    /// Creates a query requesting `count` questions, with no filters.
    ///
    /// A new UUID is automatically generated.
    #[must_use]
    pub fn new(count: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            count,
            category: None,
            complexity: None,
            labels: BTreeSet::new(),
        }
    }

    /// Restricts the query to questions of the given category.
    #[must_use]
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// Restricts the query to questions of the given complexity.
    #[must_use]
    pub const fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Requires every given label to be present on a matching question.
    #[must_use]
    pub fn with_labels(mut self, labels: BTreeSet<String>) -> Self {
        self.labels = labels;
        self
    }

    /// The unique identifier of this query.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// How many questions are requested.
    #[must_use]
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// The category filter, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The complexity filter, if any.
    #[must_use]
    pub const fn complexity(&self) -> Option<Complexity> {
        self.complexity
    }

    /// The labels a matching question must carry.
    #[must_use]
    pub const fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }
}
