//! Caverphone 1.0 and 2.0 phonetic codes.
//!
//! Both versions are an ordered pipeline of literal rewrites over the
//! lowercased word. Digits act as temporary markers: `2` marks a letter to
//! be removed, `3` marks a vowel. Upper-case letters mark consonants that are
//! already final so later lower-case rules skip them. The order of the
//! tables below is significant.

use crate::preprocess::{Preprocessor, ascii_letters};

/// Width of a Caverphone 1.0 code.
pub const CAVERPHONE_ONE_WIDTH: usize = 6;

/// Width of a Caverphone 2.0 code.
pub const CAVERPHONE_TWO_WIDTH: usize = 10;

/// One rewrite step.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Rewrite a leading pattern.
    Prefix(&'static str, &'static str),
    /// Rewrite a trailing pattern.
    Suffix(&'static str, &'static str),
    /// Rewrite every non-overlapping occurrence, left to right.
    Replace(&'static str, &'static str),
    /// Apply a table of `Replace` rewrites in order.
    ReplaceAll(&'static [(&'static str, &'static str)]),
    /// Turn a leading vowel into `A`.
    InitialVowel,
    /// Turn every remaining vowel into `3`.
    Vowels,
    /// Collapse runs of each letter to one, then upper-case it.
    Squeeze(&'static str),
}

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

const CONSONANT_REWRITES: &[(&str, &str)] = &[
    ("cq", "2q"),
    ("ci", "si"),
    ("ce", "se"),
    ("cy", "sy"),
    ("tch", "2ch"),
    ("c", "k"),
    ("q", "k"),
    ("x", "k"),
    ("v", "f"),
    ("dg", "2g"),
    ("tio", "sio"),
    ("tia", "sia"),
    ("d", "t"),
    ("ph", "fh"),
    ("b", "p"),
    ("sh", "s2"),
    ("z", "s"),
];

const CAVERPHONE_ONE_RULES: &[Rule] = &[
    Rule::Prefix("cough", "cou2f"),
    Rule::Prefix("rough", "rou2f"),
    Rule::Prefix("tough", "tou2f"),
    Rule::Prefix("enough", "enou2f"),
    Rule::Prefix("gn", "2n"),
    Rule::Suffix("mb", "m2"),
    Rule::ReplaceAll(CONSONANT_REWRITES),
    Rule::InitialVowel,
    Rule::Vowels,
    Rule::Replace("3gh3", "3kh3"),
    Rule::Replace("gh", "22"),
    Rule::Replace("g", "k"),
    Rule::Squeeze("stpkfmn"),
    Rule::ReplaceAll(&[
        ("w3", "W3"),
        ("wy", "Wy"),
        ("wh3", "Wh3"),
        ("why", "Why"),
        ("w", "2"),
    ]),
    Rule::Prefix("h", "A"),
    Rule::ReplaceAll(&[
        ("h", "2"),
        ("r3", "R3"),
        ("ry", "Ry"),
        ("r", "2"),
        ("l3", "L3"),
        ("ly", "Ly"),
        ("l", "2"),
        ("j", "y"),
        ("y3", "Y3"),
        ("y", "2"),
        ("2", ""),
        ("3", ""),
    ]),
];

const CAVERPHONE_TWO_RULES: &[Rule] = &[
    Rule::Suffix("e", ""),
    Rule::Prefix("cough", "cou2f"),
    Rule::Prefix("rough", "rou2f"),
    Rule::Prefix("tough", "tou2f"),
    Rule::Prefix("enough", "enou2f"),
    Rule::Prefix("trough", "trou2f"),
    Rule::Prefix("gn", "2n"),
    Rule::Suffix("mb", "m2"),
    Rule::ReplaceAll(CONSONANT_REWRITES),
    Rule::InitialVowel,
    Rule::Vowels,
    Rule::Replace("j", "y"),
    Rule::Replace("y3", "Y3"),
    Rule::Prefix("y", "A"),
    Rule::ReplaceAll(&[("y", "3"), ("3gh3", "3kh3"), ("gh", "22"), ("g", "k")]),
    Rule::Squeeze("stpkfmn"),
    Rule::Replace("w3", "W3"),
    Rule::Replace("wh3", "Wh3"),
    Rule::Suffix("w", "3"),
    Rule::Replace("w", "2"),
    Rule::Prefix("h", "A"),
    Rule::Replace("h", "2"),
    Rule::Replace("r3", "R3"),
    Rule::Suffix("r", "3"),
    Rule::Replace("r", "2"),
    Rule::Replace("l3", "L3"),
    Rule::Suffix("l", "3"),
    Rule::Replace("l", "2"),
    Rule::Replace("2", ""),
    Rule::Suffix("3", "A"),
    Rule::Replace("3", ""),
];

impl Rule {
    fn apply(self, word: String) -> String {
        match self {
            Rule::Prefix(from, to) => match word.strip_prefix(from) {
                Some(rest) => format!("{to}{rest}"),
                None => word,
            },
            Rule::Suffix(from, to) => match word.strip_suffix(from) {
                Some(rest) => format!("{rest}{to}"),
                None => word,
            },
            Rule::Replace(from, to) => word.replace(from, to),
            Rule::ReplaceAll(table) => table
                .iter()
                .fold(word, |word, (from, to)| word.replace(from, to)),
            Rule::InitialVowel => match word.chars().next() {
                Some(first) if VOWELS.contains(&first) => format!("A{}", &word[1..]),
                _ => word,
            },
            Rule::Vowels => word.replace(VOWELS, "3"),
            Rule::Squeeze(letters) => letters.chars().fold(word, |word, letter| {
                let mut squeezed = String::with_capacity(word.len());
                for c in word.chars() {
                    if !(c == letter && squeezed.ends_with(letter)) {
                        squeezed.push(c);
                    }
                }
                squeezed.replace(letter, &letter.to_ascii_uppercase().to_string())
            }),
        }
    }
}

/// Run `rules` over the filtered word and pad/truncate the result to `width`.
fn encode(word: &str, rules: &[Rule], width: usize) -> String {
    let word = ascii_letters(word);
    if word.is_empty() {
        return word;
    }

    let mut code = rules.iter().fold(word, |word, rule| rule.apply(word));
    while code.len() < width {
        code.push('1');
    }
    code.truncate(width);
    code
}

/// Caverphone 1.0 encoder producing six character codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaverphoneOne;

impl Preprocessor for CaverphoneOne {
    fn process(&self, word: &str) -> String {
        encode(word, CAVERPHONE_ONE_RULES, CAVERPHONE_ONE_WIDTH)
    }

    fn name(&self) -> &'static str {
        "caverphone_one"
    }
}

/// Caverphone 2.0 encoder producing ten character codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaverphoneTwo;

impl Preprocessor for CaverphoneTwo {
    fn process(&self, word: &str) -> String {
        encode(word, CAVERPHONE_TWO_RULES, CAVERPHONE_TWO_WIDTH)
    }

    fn name(&self) -> &'static str {
        "caverphone_two"
    }
}
