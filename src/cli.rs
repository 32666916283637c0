//! Demo command line for the recommender.

use std::{
    collections::BTreeSet,
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use quizrec::{Complexity, JsonStore, Presenter, Query, QuestionBank, Recommender};
use serde::Deserialize;

/// Recommend random quiz questions from a JSON question bank.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// A question file, or a directory of question files
    #[arg(short, long)]
    data: PathBuf,

    /// A TOML file of [[query]] tables
    #[arg(short, long)]
    queries: PathBuf,
}

impl Cli {
    /// Loads the bank, runs the queries, and prints the recommendations.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let store = JsonStore::new(self.data);
        let bank = QuestionBank::load(&store).context("failed to load questions")?;
        let queries = read_queries(&self.queries)?;

        let recommendations = Recommender::from_entropy().recommend(bank.questions(), &queries)?;

        Presenter::auto()
            .write(&mut io::stdout().lock(), &recommendations)
            .context("failed to write recommendations")
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// The serialized form of one query.
#[derive(Debug, Deserialize)]
struct QueryEntry {
    count: i64,
    category: Option<String>,
    complexity: Option<Complexity>,
    #[serde(default)]
    labels: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
struct QueryFile {
    #[serde(default, rename = "query")]
    queries: Vec<QueryEntry>,
}

impl From<QueryEntry> for Query {
    fn from(entry: QueryEntry) -> Self {
        let mut query = Self::new(entry.count).with_labels(entry.labels);
        if let Some(category) = entry.category {
            query = query.with_category(category);
        }
        if let Some(complexity) = entry.complexity {
            query = query.with_complexity(complexity);
        }
        query
    }
}

fn read_queries(path: &Path) -> anyhow::Result<Vec<Query>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read query file {}", path.display()))?;
    let file: QueryFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse query file {}", path.display()))?;
    Ok(file.queries.into_iter().map(Query::from).collect())
}
