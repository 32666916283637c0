use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single quiz question.
///
/// Questions are created once, either by a loader in [`crate::storage`] or
/// directly in code, and are immutable afterwards. Matching treats absent
/// fields asymmetrically: a question without a category (or complexity)
/// never matches a query that sets the corresponding filter, while a
/// question without labels matches any label filter. See
/// [`crate::engine`] for the exact rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Globally unique identifier, freshly generated at construction.
    id: Uuid,
    /// The question text shown to the user.
    original_text: String,
    /// Topic category, e.g. "Программирование".
    category: Option<String>,
    /// Free-text topical labels. An empty set means "unlabeled".
    labels: BTreeSet<String>,
    /// Difficulty classification.
    complexity: Option<Complexity>,
    /// Candidate answers, in presentation order.
    possible_answers: Vec<String>,
    /// The correct answers, each either literal text or an index into
    /// [`Self::possible_answers`].
    correct_answers: Vec<CorrectAnswer>,
}

impl Question {
    /// Creates a question with the given text and no metadata.
    ///
    /// A new UUID is automatically generated.
    #[must_use]
    pub fn new(original_text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_text,
            category: None,
            labels: BTreeSet::new(),
            complexity: None,
            possible_answers: Vec::new(),
            correct_answers: Vec::new(),
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the labels, replacing any existing ones.
    #[must_use]
    pub fn with_labels(mut self, labels: BTreeSet<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the complexity.
    #[must_use]
    pub const fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Sets the possible and correct answers.
    #[must_use]
    pub fn with_answers(mut self, possible: Vec<String>, correct: Vec<CorrectAnswer>) -> Self {
        self.possible_answers = possible;
        self.correct_answers = correct;
        self
    }

    /// The unique, stable identifier of this question.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The question text.
    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// The topic category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The labels on the question.
    #[must_use]
    pub const fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    /// The difficulty classification, if any.
    #[must_use]
    pub const fn complexity(&self) -> Option<Complexity> {
        self.complexity
    }

    /// The candidate answers, in presentation order.
    #[must_use]
    pub fn possible_answers(&self) -> &[String] {
        &self.possible_answers
    }

    /// The correct answers.
    #[must_use]
    pub fn correct_answers(&self) -> &[CorrectAnswer] {
        &self.correct_answers
    }
}

/// The closed three-level difficulty classification.
///
/// The serialized form uses the canonical labels of the data format
/// ("Простой", "Средний", "Сложный"); any other string is a data format
/// error. Levels are matched exactly and carry no ordering, a query for
/// [`Complexity::Medium`] does not match `Hard` questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    /// The easiest level.
    #[serde(rename = "Простой")]
    Simple,
    /// The middle level.
    #[serde(rename = "Средний")]
    Medium,
    /// The hardest level.
    #[serde(rename = "Сложный")]
    Hard,
}

impl Complexity {
    /// The canonical display label for this level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Простой",
            Self::Medium => "Средний",
            Self::Hard => "Сложный",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A correct answer to a question.
///
/// Data files may give correct answers either as literal answer text or as a
/// zero-based index into the question's possible answers; both forms are
/// preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    /// An index into [`Question::possible_answers`].
    Index(usize),
    /// Literal answer text.
    Text(String),
}

impl fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
