//! Soundex phonetic codes.

use crate::preprocess::{Preprocessor, ascii_letters};

/// Width of a Soundex code.
pub const SOUNDEX_WIDTH: usize = 4;

/// Soundex encoder.
///
/// The first letter is kept (upper-cased); every following letter maps to a
/// digit class, runs of the same digit collapse to one, the vowel class `0`
/// is dropped and the code is padded with `0` to four characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Soundex;

impl Soundex {
    fn digit(letter: char) -> char {
        match letter {
            'b' | 'f' | 'p' | 'v' => '1',
            'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => '2',
            'd' | 't' => '3',
            'l' => '4',
            'm' | 'n' => '5',
            'r' => '6',
            // aeiouhwy
            _ => '0',
        }
    }
}

impl Preprocessor for Soundex {
    fn process(&self, word: &str) -> String {
        let letters = ascii_letters(word);
        let mut chars = letters.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        let mut digits: Vec<char> = chars.map(Self::digit).collect();
        digits.dedup();

        let mut code = String::with_capacity(SOUNDEX_WIDTH);
        code.push(first.to_ascii_uppercase());
        code.extend(digits.into_iter().filter(|&d| d != '0'));
        while code.len() < SOUNDEX_WIDTH {
            code.push('0');
        }
        code.truncate(SOUNDEX_WIDTH);
        code
    }

    fn name(&self) -> &'static str {
        "soundex"
    }
}
