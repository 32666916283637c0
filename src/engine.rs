//! Random recommendation of matching questions
//!
//! The [`Recommender`] applies each [`Query`] to a question collection: it
//! filters the collection down to the qualifying questions and draws a
//! uniform random sample of the requested size, without replacement. The
//! RNG is injected so tests can seed it and assert exact samples.
//!
//! Matching rules, per query:
//!
//! - **category**: an unset filter matches everything; otherwise the
//!   question's category must be equal (case-sensitive). A question without
//!   a category never matches a set filter.
//! - **complexity**: same shape as category.
//! - **labels**: an empty filter matches everything; otherwise every filter
//!   label must be present on the question. An *unlabeled* question matches
//!   any label filter. That permissive default is deliberate and covered by
//!   a test; see [`matches_labels`].
//!
//! A question qualifies only when all three rules hold.

use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};
use uuid::Uuid;

use crate::{
    domain::{Query, Recommendation},
    Question,
};

/// Selects random question subsets for a sequence of queries.
///
/// The recommender is stateless apart from its RNG: every call to
/// [`Recommender::recommend`] is independent, and the question collection is
/// read-only input.
#[derive(Debug)]
pub struct Recommender<R> {
    rng: R,
}

impl Recommender<ThreadRng> {
    /// Creates a recommender seeded from the thread-local RNG.
    ///
    /// Samples are non-deterministic across runs. Use [`Recommender::new`]
    /// with a seeded RNG for reproducible output.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for Recommender<ThreadRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> Recommender<R> {
    /// Creates a recommender drawing randomness from the given RNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Computes one [`Recommendation`] per query, in query order.
    ///
    /// Every query is validated before any sampling occurs, so a rejected
    /// input leaves no partial output.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NegativeCount`] if any query requests a
    /// negative number of questions.
    pub fn recommend(
        &mut self,
        questions: &[Question],
        queries: &[Query],
    ) -> Result<Vec<Recommendation>, QueryError> {
        for query in queries {
            if query.count() < 0 {
                return Err(QueryError::NegativeCount {
                    id: query.id(),
                    count: query.count(),
                });
            }
        }

        Ok(queries
            .iter()
            .map(|query| self.recommend_one(questions, query))
            .collect())
    }

    fn recommend_one(&mut self, questions: &[Question], query: &Query) -> Recommendation {
        let candidates: Vec<&Question> = questions
            .iter()
            .filter(|question| qualifies(question, query))
            .collect();

        // Validated non-negative; a count beyond usize::MAX cannot be
        // satisfied anyway and degrades to "all candidates".
        let wanted = usize::try_from(query.count()).unwrap_or(usize::MAX);

        let chosen: Vec<Question> = if candidates.len() < wanted {
            candidates.into_iter().cloned().collect()
        } else {
            candidates
                .choose_multiple(&mut self.rng, wanted)
                .copied()
                .cloned()
                .collect()
        };

        tracing::debug!("Query {} receives {} questions", query.id(), chosen.len());
        Recommendation::new(query.clone(), chosen)
    }
}

fn qualifies(question: &Question, query: &Query) -> bool {
    matches_category(question, query)
        && matches_complexity(question, query)
        && matches_labels(question, query)
}

fn matches_category(question: &Question, query: &Query) -> bool {
    query
        .category()
        .is_none_or(|category| question.category() == Some(category))
}

fn matches_complexity(question: &Question, query: &Query) -> bool {
    query
        .complexity()
        .is_none_or(|complexity| question.complexity() == Some(complexity))
}

/// An empty filter matches everything, an unlabeled question matches any
/// filter, and otherwise the filter labels must be a subset of the
/// question's labels.
fn matches_labels(question: &Question, query: &Query) -> bool {
    query.labels().is_empty()
        || question.labels().is_empty()
        || query.labels().is_subset(question.labels())
}

/// Errors rejecting a query before sampling.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    /// A query requested a negative number of questions.
    #[error("query {id} requests a negative number of questions ({count})")]
    NegativeCount {
        /// The offending query.
        id: Uuid,
        /// The requested count.
        count: i64,
    },
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use rand::{rngs::StdRng, SeedableRng};
    use uuid::Uuid;

    use super::{QueryError, Recommender};
    use crate::{
        domain::{Complexity, Query},
        Question,
    };

    fn labels(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn seeded() -> Recommender<StdRng> {
        Recommender::new(StdRng::seed_from_u64(42))
    }

    fn sample_bank() -> Vec<Question> {
        vec![
            Question::new("Чему равна сумма корней?".to_string())
                .with_category("Математика".to_string())
                .with_complexity(Complexity::Medium)
                .with_labels(labels(&["Алгебра"])),
            Question::new("Чему равен дискриминант?".to_string())
                .with_category("Математика".to_string())
                .with_complexity(Complexity::Medium)
                .with_labels(labels(&["Алгебра", "Уравнения"])),
            Question::new("Когда пала Западная Римская империя?".to_string())
                .with_category("История".to_string())
                .with_complexity(Complexity::Hard),
        ]
    }

    #[test]
    fn category_filter_excludes_other_categories() {
        let bank = sample_bank();
        let queries = vec![Query::new(5).with_category("Математика".to_string())];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        let picked = &recommendations[0];
        assert_eq!(picked.questions().len(), 2);
        assert!(picked
            .questions()
            .iter()
            .all(|q| q.category() == Some("Математика")));
    }

    #[test]
    fn question_without_category_never_matches_a_set_filter() {
        let bank = vec![Question::new("uncategorised".to_string())];
        let queries = vec![Query::new(1).with_category("Математика".to_string())];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        assert!(recommendations[0].questions().is_empty());
    }

    #[test]
    fn complexity_filter_excludes_other_levels() {
        let bank = sample_bank();
        let queries = vec![Query::new(5).with_complexity(Complexity::Hard)];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        let picked = &recommendations[0];
        assert_eq!(picked.questions().len(), 1);
        assert_eq!(picked.questions()[0].complexity(), Some(Complexity::Hard));
    }

    #[test]
    fn question_without_complexity_never_matches_a_set_filter() {
        let bank = vec![Question::new("unclassified".to_string())];
        let queries = vec![Query::new(1).with_complexity(Complexity::Simple)];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        assert!(recommendations[0].questions().is_empty());
    }

    #[test]
    fn labelled_question_must_carry_every_filter_label() {
        let bank = sample_bank();
        let queries = vec![Query::new(5).with_labels(labels(&["Алгебра", "Уравнения"]))];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        // Only the second question carries both labels; the third is
        // unlabeled and matches through the permissive default.
        for question in recommendations[0].questions() {
            assert!(
                question.labels().is_empty()
                    || labels(&["Алгебра", "Уравнения"]).is_subset(question.labels())
            );
        }
        assert_eq!(recommendations[0].questions().len(), 2);
    }

    #[test]
    fn unlabeled_question_matches_any_label_filter() {
        // The permissive default: no labels on the question side means
        // "unconstrained", not "fails every filter".
        let bank = vec![Question::new("unlabeled".to_string())];
        let queries = vec![Query::new(1).with_labels(labels(&["Python"]))];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        assert_eq!(recommendations[0].questions().len(), 1);
    }

    #[test]
    fn fewer_candidates_than_requested_returns_all_of_them() {
        let bank = sample_bank();
        let queries = vec![Query::new(10)];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        assert_eq!(recommendations[0].questions().len(), bank.len());
    }

    #[test]
    fn sample_is_exact_size_with_no_duplicates() {
        let bank: Vec<_> = (0..20)
            .map(|i| Question::new(format!("question {i}")))
            .collect();
        let queries = vec![Query::new(5)];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        let picked = recommendations[0].questions();
        assert_eq!(picked.len(), 5);
        let ids: HashSet<Uuid> = picked.iter().map(Question::id).collect();
        assert_eq!(ids.len(), 5);
        let bank_ids: HashSet<Uuid> = bank.iter().map(Question::id).collect();
        assert!(ids.is_subset(&bank_ids));
    }

    #[test]
    fn seeded_rng_reproduces_the_same_sample() {
        let bank: Vec<_> = (0..20)
            .map(|i| Question::new(format!("question {i}")))
            .collect();
        let queries = vec![Query::new(5)];

        let first = seeded().recommend(&bank, &queries).unwrap();
        let second = seeded().recommend(&bank, &queries).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn one_recommendation_per_query_in_query_order() {
        let bank = sample_bank();
        let queries = vec![
            Query::new(1).with_category("История".to_string()),
            Query::new(2).with_category("Математика".to_string()),
            Query::new(1).with_category("Искусство".to_string()),
        ];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        assert_eq!(recommendations.len(), 3);
        assert_eq!(recommendations[0].query(), &queries[0]);
        assert_eq!(recommendations[0].questions().len(), 1);
        assert_eq!(recommendations[1].questions().len(), 2);
        // No questions in the third category at all.
        assert!(recommendations[2].questions().is_empty());
    }

    #[test]
    fn combined_filters_are_a_logical_and() {
        let bank = sample_bank();
        let queries = vec![Query::new(5)
            .with_category("Математика".to_string())
            .with_complexity(Complexity::Hard)];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        // Both maths questions are Medium, the Hard question is History.
        assert!(recommendations[0].questions().is_empty());
    }

    #[test]
    fn over_requesting_a_filtered_subset_returns_the_whole_subset() {
        let bank = sample_bank();
        let queries = vec![Query::new(5)
            .with_category("Математика".to_string())
            .with_complexity(Complexity::Medium)];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        assert_eq!(recommendations[0].questions().len(), 2);
    }

    #[test]
    fn zero_count_yields_an_empty_recommendation() {
        let bank = sample_bank();
        let queries = vec![Query::new(0)];

        let recommendations = seeded().recommend(&bank, &queries).unwrap();

        assert!(recommendations[0].questions().is_empty());
    }

    #[test]
    fn negative_count_is_rejected_before_sampling() {
        let bank = sample_bank();
        let queries = vec![Query::new(1), Query::new(-1)];

        let error = seeded().recommend(&bank, &queries).unwrap_err();

        assert!(matches!(error, QueryError::NegativeCount { count: -1, .. }));
    }
}
