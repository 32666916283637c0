//! Domain models for question recommendation.
//!
//! This module contains the core domain types: questions with their
//! complexity classification, the queries used to request them, and the
//! recommendations pairing the two.

/// Question domain model and complexity classification.
pub mod question;
pub use question::{Complexity, CorrectAnswer, Question};

mod query;
pub use query::Query;

mod recommendation;
pub use recommendation::Recommendation;
