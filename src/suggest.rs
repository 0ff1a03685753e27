//! Suggestion generation: indexing words and ranking search results.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::config::{SuggesterConfig, validate_max_distance};
use crate::cost::LetterCost;
use crate::distance::edit_distance;
use crate::error::Result;
use crate::preprocess::{Preprocessor, ascii_letters};
use crate::search::TrieSearch;
use crate::trie::Trie;

/// An indexed word close to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The original indexed word.
    pub word: String,
    /// Distance between the query key and the word's key.
    pub distance: f64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: f64) -> Self {
        Suggestion { word, distance }
    }
}

/// Direction of the distance ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Closest first
    #[default]
    Ascending,
    /// Farthest first
    Descending,
}

/// Stable sort by distance. Equal distances keep their relative order in
/// both directions.
pub fn sort_suggestions(suggestions: &mut [Suggestion], order: SortOrder) {
    match order {
        SortOrder::Ascending => suggestions.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
        SortOrder::Descending => suggestions.sort_by(|a, b| b.distance.total_cmp(&a.distance)),
    }
}

/// Sort and then keep at most `limit` suggestions.
pub fn rank_suggestions(
    mut suggestions: Vec<Suggestion>,
    order: SortOrder,
    limit: Option<usize>,
) -> Vec<Suggestion> {
    sort_suggestions(&mut suggestions, order);
    if let Some(limit) = limit {
        suggestions.truncate(limit);
    }
    suggestions
}

/// A word index bound to one algorithm.
///
/// Words go through the algorithm's pre-processor on the way in; queries go
/// through the same pre-processor before the trie search, and the results
/// are ranked by distance.
///
/// # Examples
///
/// ```
/// use spellwise::algorithm::Algorithm;
/// use spellwise::suggest::Suggester;
///
/// let mut suggester = Suggester::new(Algorithm::Levenshtein);
/// suggester.add_words(["spelling", "checker"]);
///
/// let suggestions = suggester.get_suggestions("speling");
/// assert_eq!(suggestions.len(), 1);
/// assert_eq!(suggestions[0].word, "spelling");
/// ```
#[derive(Debug)]
pub struct Suggester {
    config: SuggesterConfig,
    preprocessor: Box<dyn Preprocessor>,
    cost: Box<dyn LetterCost>,
    trie: Trie,
}

impl Suggester {
    /// Create an empty suggester with the default settings of `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Suggester {
            config: SuggesterConfig::new(algorithm),
            preprocessor: algorithm.preprocessor(),
            cost: algorithm.default_cost_model(),
            trie: Trie::new(),
        }
    }

    /// Create an empty suggester from a validated configuration.
    pub fn with_config(config: SuggesterConfig) -> Result<Self> {
        config.validate()?;
        let cost = config
            .algorithm
            .cost_model(config.group_cost, config.non_group_cost)?;

        Ok(Suggester {
            preprocessor: config.algorithm.preprocessor(),
            cost,
            config,
            trie: Trie::new(),
        })
    }

    /// Index one word. Returns `false` when its key is empty and it was
    /// skipped.
    pub fn add_word(&mut self, word: &str) -> bool {
        let key = self.preprocessor.process(word);
        if key.is_empty() {
            log::debug!("skipping {word:?}: empty {} key", self.preprocessor.name());
            return false;
        }
        self.trie.insert(word, &key);
        true
    }

    /// Index every word of `words`. Returns how many were indexed.
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.add_word(word.as_ref()))
            .count()
    }

    /// Index the whitespace-separated words of a file, lower-cased.
    pub fn add_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let added = self.add_from_reader(file)?;
        log::debug!("loaded {added} words from {}", path.display());
        Ok(added)
    }

    /// Index the whitespace-separated words read from `reader`, lower-cased.
    pub fn add_from_reader<R: Read>(&mut self, reader: R) -> Result<usize> {
        let reader = BufReader::new(reader);
        let mut added = 0;

        for line in reader.lines() {
            let line = line?;
            for word in line.split_whitespace() {
                if self.add_word(&word.to_lowercase()) {
                    added += 1;
                }
            }
        }

        Ok(added)
    }

    /// Ranked suggestions for `query` within the configured bound.
    pub fn get_suggestions(&self, query: &str) -> Vec<Suggestion> {
        self.rank(self.search(query, self.config.effective_max_distance()))
    }

    /// Ranked suggestions for `query` within `max_distance`.
    pub fn get_suggestions_within(&self, query: &str, max_distance: f64) -> Result<Vec<Suggestion>> {
        validate_max_distance(max_distance)?;
        Ok(self.rank(self.search(query, max_distance)))
    }

    /// Suggestions for several queries, computed in parallel. Results are in
    /// query order.
    pub fn suggest_many<S>(&self, queries: &[S]) -> Vec<(String, Vec<Suggestion>)>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| {
                let query = query.as_ref();
                (query.to_string(), self.get_suggestions(query))
            })
            .collect()
    }

    /// The key `word` is indexed under.
    pub fn process(&self, word: &str) -> String {
        self.preprocessor.process(word)
    }

    /// Whether a word with the same key as `word` is indexed.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains_key(&self.process(word))
    }

    /// Whether `word` itself was indexed, not just a word sharing its key.
    pub fn contains_word(&self, word: &str) -> bool {
        self.trie
            .words_for(&self.process(word))
            .is_some_and(|words| words.iter().any(|indexed| indexed == word))
    }

    /// Whether an indexed word has the same letters as `word`, ignoring case
    /// and everything outside `a-z`. `"Don't"` matches an indexed `"dont"`.
    pub fn contains_spelling(&self, word: &str) -> bool {
        let letters = ascii_letters(word);
        if letters.is_empty() {
            return false;
        }
        self.trie
            .words_for(&self.process(word))
            .is_some_and(|words| {
                words
                    .iter()
                    .any(|indexed| ascii_letters(indexed) == letters)
            })
    }

    /// Distance between two words under this suggester's algorithm.
    pub fn distance(&self, query: &str, word: &str) -> f64 {
        edit_distance(
            self.cost.as_ref(),
            &self.process(query),
            &self.process(word),
        )
    }

    /// Number of indexed words.
    pub fn word_count(&self) -> usize {
        self.trie.word_count()
    }

    /// The underlying index.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The cost model in use.
    pub fn cost(&self) -> &dyn LetterCost {
        self.cost.as_ref()
    }

    /// The algorithm in use.
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// The active configuration.
    pub fn config(&self) -> &SuggesterConfig {
        &self.config
    }

    fn search(&self, query: &str, max_distance: f64) -> Vec<Suggestion> {
        let key = self.process(query);
        TrieSearch::new(&self.trie, self.cost.as_ref()).search(&key, max_distance)
    }

    fn rank(&self, suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
        rank_suggestions(
            suggestions,
            self.config.sort_order,
            self.config.max_suggestions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn test_sort_is_stable() {
        let mut suggestions = vec![
            Suggestion::new("b".into(), 1.0),
            Suggestion::new("a".into(), 0.0),
            Suggestion::new("c".into(), 1.0),
            Suggestion::new("d".into(), 0.0),
        ];

        sort_suggestions(&mut suggestions, SortOrder::Ascending);
        assert_eq!(words(&suggestions), vec!["a", "d", "b", "c"]);

        sort_suggestions(&mut suggestions, SortOrder::Descending);
        assert_eq!(words(&suggestions), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_rank_applies_limit_after_sorting() {
        let suggestions = vec![
            Suggestion::new("far".into(), 2.0),
            Suggestion::new("near".into(), 0.5),
            Suggestion::new("mid".into(), 1.0),
        ];

        let ranked = rank_suggestions(suggestions, SortOrder::Ascending, Some(2));
        assert_eq!(words(&ranked), vec!["near", "mid"]);
    }

    #[test]
    fn test_levenshtein_suggestions() {
        let mut suggester = Suggester::new(Algorithm::Levenshtein);
        assert_eq!(suggester.add_words(["spelling", "checker", "peeling"]), 3);

        let suggestions = suggester.get_suggestions("speling");
        assert_eq!(words(&suggestions), vec!["spelling", "peeling"]);
        assert_eq!(suggestions[0].distance, 1.0);
        assert_eq!(suggestions[1].distance, 2.0);
    }

    #[test]
    fn test_soundex_shared_code() {
        let mut suggester = Suggester::new(Algorithm::Soundex);
        suggester.add_words(["Robert", "Rupert", "Rubin"]);

        let suggestions = suggester.get_suggestions("robert");
        assert_eq!(words(&suggestions), vec!["Robert", "Rupert"]);
        assert!(suggestions.iter().all(|s| s.distance == 0.0));

        assert!(suggester.contains("Rupurt"));
        assert!(!suggester.contains_word("Rupurt"));
        assert!(suggester.contains_word("Rupert"));
    }

    #[test]
    fn test_contains_spelling_ignores_punctuation() {
        let mut suggester = Suggester::new(Algorithm::Levenshtein);
        suggester.add_words(["don't", "rock-n-roll", "Paris"]);

        assert!(suggester.contains_spelling("dont"));
        assert!(suggester.contains_spelling("DON'T"));
        assert!(suggester.contains_spelling("rocknroll"));
        assert!(suggester.contains_spelling("paris"));
        assert!(!suggester.contains_word("dont"));
        assert!(!suggester.contains_spelling("don"));
        assert!(!suggester.contains_spelling("'"));

        let mut soundex = Suggester::new(Algorithm::Soundex);
        soundex.add_words(["o'brien"]);
        assert!(soundex.contains_spelling("OBrien"));
        assert!(!soundex.contains_spelling("obrian"));
    }

    #[test]
    fn test_empty_keys_are_skipped() {
        let mut suggester = Suggester::new(Algorithm::Editex);
        assert!(!suggester.add_word("1234"));
        assert!(!suggester.add_word(""));
        assert!(suggester.add_word("word"));
        assert_eq!(suggester.word_count(), 1);
        assert!(suggester.contains("WORD"));
        assert!(!suggester.contains("words"));
    }

    #[test]
    fn test_config_limit_and_order() {
        let config = SuggesterConfig::new(Algorithm::Levenshtein)
            .with_max_suggestions(2)
            .with_sort_order(SortOrder::Descending);
        let mut suggester = Suggester::with_config(config).unwrap();
        suggester.add_words(["cat", "cart", "carts"]);

        let suggestions = suggester.get_suggestions("cat");
        assert_eq!(words(&suggestions), vec!["carts", "cart"]);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = SuggesterConfig::new(Algorithm::Typox).with_costs(-1.0, 2.0);
        assert!(Suggester::with_config(config).is_err());

        let config = SuggesterConfig::default().with_max_distance(f64::NAN);
        assert!(Suggester::with_config(config).is_err());
    }

    #[test]
    fn test_get_suggestions_within() {
        let mut suggester = Suggester::new(Algorithm::Levenshtein);
        suggester.add_words(["hello", "help", "world"]);

        let exact = suggester.get_suggestions_within("hello", 0.0).unwrap();
        assert_eq!(words(&exact), vec!["hello"]);

        let wider = suggester.get_suggestions_within("hello", 2.0).unwrap();
        assert_eq!(words(&wider), vec!["hello", "help"]);

        assert!(suggester.get_suggestions_within("hello", -1.0).is_err());
    }

    #[test]
    fn test_add_from_reader_lowercases() {
        let mut suggester = Suggester::new(Algorithm::Levenshtein);
        let added = suggester
            .add_from_reader("Alpha beta\n\n  GAMMA 42\n".as_bytes())
            .unwrap();

        assert_eq!(added, 3);
        assert_eq!(suggester.trie().words_for("gamma").unwrap(), &["gamma"]);
    }

    #[test]
    fn test_suggest_many_keeps_query_order() {
        let mut suggester = Suggester::new(Algorithm::Levenshtein);
        suggester.add_words(["apple", "banana", "cherry"]);

        let results = suggester.suggest_many(&["banan", "aple", "zzzzzz"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "banan");
        assert_eq!(words(&results[0].1), vec!["banana"]);
        assert_eq!(words(&results[1].1), vec!["apple"]);
        assert!(results[2].1.is_empty());
    }

    #[test]
    fn test_distance() {
        let suggester = Suggester::new(Algorithm::Levenshtein);
        assert_eq!(suggester.distance("Kitten", "sitting"), 3.0);

        let soundex = Suggester::new(Algorithm::Soundex);
        assert_eq!(soundex.distance("Robert", "Rupert"), 0.0);
    }
}
