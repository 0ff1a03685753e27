//! Command implementations for the spellwise CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use ahash::AHashSet;
use anyhow::{Context, Result};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::preprocess::{Lowercase, Preprocessor};
use crate::suggest::Suggester;

/// Execute a CLI command.
pub fn execute_command(args: SpellwiseArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => {
            let results = suggest_words(suggest_args)?;
            output_result("Suggestions", &results, &args)?;
        }
        Command::Encode(encode_args) => {
            let results = encode_words(encode_args)?;
            output_result("Encoded words", &results, &args)?;
        }
        Command::Distance(distance_args) => {
            let result = measure_distance(distance_args)?;
            output_result("Distance", &result, &args)?;
        }
        Command::Check(check_args) => {
            let results = check_text(check_args)?;
            output_result("Check completed", &results, &args)?;
        }
    }
    Ok(())
}

/// Load a dictionary file into a suggester built from `args`.
fn load_suggester(dictionary: &Path, args: &AlgorithmArgs) -> Result<Suggester> {
    let config = args.to_config().context("invalid algorithm settings")?;
    let mut suggester = Suggester::with_config(config)?;
    let added = suggester
        .add_from_path(dictionary)
        .with_context(|| format!("failed to read dictionary {}", dictionary.display()))?;

    log::info!(
        "indexed {added} words from {} ({} trie nodes)",
        dictionary.display(),
        suggester.trie().node_count()
    );
    Ok(suggester)
}

/// Suggestions for each query against a dictionary.
pub fn suggest_words(args: &SuggestArgs) -> Result<SuggestResults> {
    let suggester = load_suggester(&args.dictionary, &args.algorithm)?;
    let start_time = Instant::now();

    let results = suggester
        .suggest_many(&args.queries)
        .into_iter()
        .map(|(query, suggestions)| QuerySuggestions {
            key: suggester.process(&query),
            query,
            suggestions,
        })
        .collect();

    Ok(SuggestResults {
        algorithm: suggester.algorithm(),
        max_distance: suggester.config().effective_max_distance(),
        dictionary_words: suggester.word_count(),
        results,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// The key of each word under the chosen algorithm.
pub fn encode_words(args: &EncodeArgs) -> Result<EncodeResults> {
    let config = args.algorithm.to_config().context("invalid algorithm settings")?;
    let preprocessor = config.algorithm.preprocessor();

    Ok(EncodeResults {
        algorithm: config.algorithm,
        words: args
            .words
            .iter()
            .map(|word| EncodedWord {
                word: word.clone(),
                key: preprocessor.process(word),
            })
            .collect(),
    })
}

/// Distance between two words under the chosen algorithm.
pub fn measure_distance(args: &DistanceArgs) -> Result<DistanceResult> {
    let config = args.algorithm.to_config().context("invalid algorithm settings")?;
    let max_distance = config.effective_max_distance();
    let suggester = Suggester::with_config(config)?;
    let distance = suggester.distance(&args.first, &args.second);

    Ok(DistanceResult {
        algorithm: suggester.algorithm(),
        first: args.first.clone(),
        second: args.second.clone(),
        first_key: suggester.process(&args.first),
        second_key: suggester.process(&args.second),
        distance,
        within_max_distance: distance <= max_distance,
    })
}

/// Suggestions for every word of a text file missing from the dictionary.
pub fn check_text(args: &CheckArgs) -> Result<CheckResults> {
    let suggester = load_suggester(&args.dictionary, &args.algorithm)?;
    let text = fs::read_to_string(&args.text)
        .with_context(|| format!("failed to read text {}", args.text.display()))?;
    let start_time = Instant::now();

    let mut seen = AHashSet::new();
    let mut words_checked = 0;
    let mut unknown = Vec::new();
    for raw in text.split_whitespace() {
        let word = Lowercase.process(raw);
        if word.is_empty() {
            continue;
        }
        words_checked += 1;
        if !suggester.contains_spelling(&word) && seen.insert(word.clone()) {
            unknown.push(word);
        }
    }
    log::debug!("{} of {words_checked} words are unknown", unknown.len());

    let unknown_words = suggester
        .suggest_many(&unknown)
        .into_iter()
        .map(|(query, suggestions)| QuerySuggestions {
            key: suggester.process(&query),
            query,
            suggestions,
        })
        .collect();

    Ok(CheckResults {
        algorithm: suggester.algorithm(),
        words_checked,
        unknown_words,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;

    fn algorithm_args(algorithm: Algorithm) -> AlgorithmArgs {
        AlgorithmArgs {
            algorithm: Some(algorithm),
            ..Default::default()
        }
    }

    #[test]
    fn test_encode_words() {
        let args = EncodeArgs {
            words: vec!["Robert".into(), "Rupert".into()],
            algorithm: algorithm_args(Algorithm::Soundex),
        };

        let results = encode_words(&args).unwrap();
        assert_eq!(results.algorithm, Algorithm::Soundex);
        assert!(results.words.iter().all(|w| w.key == "R163"));
    }

    #[test]
    fn test_measure_distance() {
        let args = DistanceArgs {
            first: "kitten".into(),
            second: "sitting".into(),
            algorithm: algorithm_args(Algorithm::Levenshtein),
        };

        let result = measure_distance(&args).unwrap();
        assert_eq!(result.distance, 3.0);
        assert!(!result.within_max_distance);
    }

    #[test]
    fn test_missing_dictionary_has_context() {
        let args = SuggestArgs {
            dictionary: "/nonexistent/words.txt".into(),
            queries: vec!["word".into()],
            algorithm: AlgorithmArgs::default(),
        };

        let error = suggest_words(&args).unwrap_err();
        assert!(format!("{error:#}").contains("failed to read dictionary"));
    }
}
