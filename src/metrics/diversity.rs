use std::collections::HashMap;

use super::counts::{distinct_lemmas, distinct_words, lemma_char_total};
use super::{Scalar, guarded_ratio, ratio, token_count, tokens};
use crate::model::Sentence;

pub fn ttr_word(words: &[Sentence]) -> Scalar {
    Scalar::Real(ratio(
        distinct_words(words).len() as f64,
        token_count(words) as f64,
    ))
}

pub fn ttr_lemma(words: &[Sentence]) -> Scalar {
    Scalar::Real(ratio(
        distinct_lemmas(words).len() as f64,
        lemma_char_total(words) as f64,
    ))
}

pub fn yules_k_word(words: &[Sentence]) -> Scalar {
    let spectrum = FrequencySpectrum::of(tokens(words).map(|token| token.word.as_str()));
    Scalar::Real(spectrum.yules_k(token_count(words)))
}

pub fn yules_k_lemma(words: &[Sentence]) -> Scalar {
    let spectrum = FrequencySpectrum::of(tokens(words).map(|token| token.lemma.as_str()));
    Scalar::Real(spectrum.yules_k(lemma_char_total(words)))
}

pub fn yules_i_word(words: &[Sentence]) -> Scalar {
    let spectrum = FrequencySpectrum::of(tokens(words).map(|token| token.word.as_str()));
    spectrum.yules_i()
}

pub fn yules_i_lemma(words: &[Sentence]) -> Scalar {
    let spectrum = FrequencySpectrum::of(tokens(words).map(|token| token.lemma.as_str()));
    spectrum.yules_i()
}

pub fn hapax1_pr(words: &[Sentence]) -> Scalar {
    hapax_share(words, 1)
}

pub fn hapax2_pr(words: &[Sentence]) -> Scalar {
    hapax_share(words, 2)
}

fn hapax_share(words: &[Sentence], frequency: usize) -> Scalar {
    let spectrum = FrequencySpectrum::of(tokens(words).map(|token| token.lemma.as_str()));
    Scalar::Real(ratio(
        spectrum.types_with_frequency(frequency) as f64,
        spectrum.tokens as f64,
    ))
}

struct FrequencySpectrum {
    types: usize,
    tokens: usize,
    by_frequency: HashMap<usize, usize>,
}

impl FrequencySpectrum {
    fn of<'a, I>(items: I) -> Self
    where
        I: Iterator<Item = &'a str>,
    {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut total = 0;
        for item in items {
            *counts.entry(item).or_insert(0) += 1;
            total += 1;
        }

        let mut by_frequency = HashMap::new();
        for frequency in counts.values() {
            *by_frequency.entry(*frequency).or_insert(0) += 1;
        }

        Self {
            types: counts.len(),
            tokens: total,
            by_frequency,
        }
    }

    fn types_with_frequency(&self, frequency: usize) -> usize {
        self.by_frequency.get(&frequency).copied().unwrap_or(0)
    }

    fn visited_frequencies(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.types).map(|i| (i as f64, self.types_with_frequency(i) as f64))
    }

    fn yules_k(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        let n = n as f64;
        let sum: f64 = self
            .visited_frequencies()
            .map(|(i, types)| types * (i / n).powi(2))
            .sum();
        10_f64.powi(4) * (-1.0 / n + sum)
    }

    fn yules_i(&self) -> Scalar {
        let v = self.types as f64;
        let m: f64 = self
            .visited_frequencies()
            .map(|(i, types)| types * i.powi(2))
            .sum();
        guarded_ratio(v.powi(2), m - v)
    }
}
