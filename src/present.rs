//! Rendering recommendations for display
//!
//! The presenter is a pure consumer: it writes each query's parameters
//! followed by the chosen questions' text and answers, and feeds nothing
//! back into the engine.

use std::io;

use owo_colors::{colors::css, OwoColorize};

use crate::domain::Recommendation;

/// Renders recommendations as human-readable text.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    colored: bool,
}

impl Presenter {
    /// A presenter that never emits color escapes.
    ///
    /// Suitable for piped output and tests.
    #[must_use]
    pub const fn plain() -> Self {
        Self { colored: false }
    }

    /// A presenter that colors headings when stdout supports it.
    #[must_use]
    pub fn auto() -> Self {
        Self {
            colored: supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }

    /// Writes every recommendation to `out`, in order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write<W: io::Write>(
        &self,
        out: &mut W,
        recommendations: &[Recommendation],
    ) -> io::Result<()> {
        for recommendation in recommendations {
            self.write_one(out, recommendation)?;
        }
        Ok(())
    }

    fn write_one<W: io::Write>(
        &self,
        out: &mut W,
        recommendation: &Recommendation,
    ) -> io::Result<()> {
        let query = recommendation.query();

        writeln!(out, "{}", self.heading("---- query ----"))?;
        writeln!(out, "requested:  {}", query.count())?;
        writeln!(out, "category:   {}", query.category().unwrap_or("-"))?;
        writeln!(
            out,
            "complexity: {}",
            query
                .complexity()
                .map_or_else(|| "-".to_string(), |c| c.to_string())
        )?;
        writeln!(out, "labels:     {}", join_or_dash(query.labels().iter()))?;

        writeln!(out, "{}", self.heading("---- questions ----"))?;
        for question in recommendation.questions() {
            writeln!(out, ">>> {}", question.original_text())?;
            writeln!(
                out,
                "    possible -> {}",
                join_or_dash(question.possible_answers().iter())
            )?;
            writeln!(
                out,
                "    correct  -> {}",
                join_or_dash(question.correct_answers().iter())
            )?;
        }
        writeln!(out, "--------------------")?;
        Ok(())
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.fg::<css::LightBlue>().to_string()
        } else {
            text.to_string()
        }
    }
}

fn join_or_dash<T: ToString>(items: impl Iterator<Item = T>) -> String {
    let joined = items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}
