//! Random quiz question recommendations
//!
//! Questions are JSON records stored in flat files. They are loaded once into
//! an in-memory bank and sampled per query (category, complexity, required
//! labels).

pub mod bank;
pub use bank::QuestionBank;

pub mod domain;
pub use domain::{Complexity, CorrectAnswer, Query, Question, Recommendation};

pub mod engine;
pub use engine::{QueryError, Recommender};

pub mod present;
pub use present::Presenter;

/// Filesystem loading of question banks.
pub mod storage;
pub use storage::{JsonStore, LoadError, QuestionSource};
