use std::fmt;

use crate::model::{Sentence, Token};

pub mod cohesion;
pub mod counts;
pub mod dictionary;
pub mod diversity;
pub mod morphology;
pub mod ngrams;
pub mod readability;
pub mod syntax;

pub const VOWELS: &str = "ауоыиэяюёе";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Count(usize),
    Real(f64),
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Self::Count(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(value) => write!(f, "{value}"),
            Self::Real(value) => f.write_str(&format_real(*value)),
        }
    }
}

pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let rendered = format!("{value:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => rendered,
        };
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

pub fn tokens(words: &[Sentence]) -> impl Iterator<Item = &Token> {
    words.iter().flat_map(|sentence| sentence.tokens.iter())
}

pub fn token_count(words: &[Sentence]) -> usize {
    words.iter().map(Sentence::len).sum()
}

pub fn vowel_count(text: &str) -> usize {
    text.chars().filter(|c| VOWELS.contains(*c)).count()
}

pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn guarded_ratio(numerator: f64, denominator: f64) -> Scalar {
    if denominator == 0.0 {
        Scalar::Count(0)
    } else {
        Scalar::Real(numerator / denominator)
    }
}

pub fn token_share<F>(words: &[Sentence], predicate: F) -> Scalar
where
    F: Fn(&Token) -> bool,
{
    let matched = tokens(words).filter(|token| predicate(token)).count();
    Scalar::Real(ratio(matched as f64, token_count(words) as f64))
}

pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
