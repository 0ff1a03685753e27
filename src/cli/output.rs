//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::cli::args::{OutputFormat, SpellwiseArgs};
use crate::error::Result;
use crate::suggest::Suggestion;

/// Results that can be printed for people as well as serialized.
pub trait HumanReadable {
    /// Render the result as plain text.
    fn render_human(&self) -> String;
}

/// Suggestions for one query.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuerySuggestions {
    pub query: String,
    pub key: String,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub algorithm: Algorithm,
    pub max_distance: f64,
    pub dictionary_words: usize,
    pub results: Vec<QuerySuggestions>,
    pub duration_ms: u64,
}

/// One encoded word.
#[derive(Debug, Serialize, Deserialize)]
pub struct EncodedWord {
    pub word: String,
    pub key: String,
}

/// Result structure for the encode command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EncodeResults {
    pub algorithm: Algorithm,
    pub words: Vec<EncodedWord>,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub algorithm: Algorithm,
    pub first: String,
    pub second: String,
    pub first_key: String,
    pub second_key: String,
    pub distance: f64,
    pub within_max_distance: bool,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub algorithm: Algorithm,
    pub words_checked: usize,
    pub unknown_words: Vec<QuerySuggestions>,
    pub duration_ms: u64,
}

impl HumanReadable for SuggestResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            render_query(&mut out, result);
        }
        let _ = writeln!(
            out,
            "{} queries against {} words ({}, max distance {}) in {}ms",
            self.results.len(),
            self.dictionary_words,
            self.algorithm,
            self.max_distance,
            self.duration_ms
        );
        out
    }
}

impl HumanReadable for EncodeResults {
    fn render_human(&self) -> String {
        let width = self.words.iter().map(|w| w.word.len()).max().unwrap_or(0);
        let mut out = String::new();
        for encoded in &self.words {
            let _ = writeln!(out, "{:<width$}  {}", encoded.word, encoded.key);
        }
        out
    }
}

impl HumanReadable for DistanceResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({}) -> {} ({}): {}",
            self.first, self.first_key, self.second, self.second_key, self.distance
        );
        if !self.within_max_distance {
            let _ = writeln!(out, "(outside the {} bound)", self.algorithm);
        }
        out
    }
}

impl HumanReadable for CheckResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        if self.unknown_words.is_empty() {
            let _ = writeln!(out, "No unknown words.");
        }
        for result in &self.unknown_words {
            render_query(&mut out, result);
        }
        let _ = writeln!(
            out,
            "{} unknown of {} words checked in {}ms",
            self.unknown_words.len(),
            self.words_checked,
            self.duration_ms
        );
        out
    }
}

fn render_query(out: &mut String, result: &QuerySuggestions) {
    let _ = writeln!(out, "{} [{}]", result.query, result.key);
    if result.suggestions.is_empty() {
        let _ = writeln!(out, "  (no suggestions)");
    }
    for suggestion in &result.suggestions {
        let _ = writeln!(out, "  {:<24} {}", suggestion.word, suggestion.distance);
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SpellwiseArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &SpellwiseArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellwiseArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
