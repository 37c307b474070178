use super::counts::{long_lemma_count, long_word_count, sentence_char_total};
use super::{Scalar, guarded_ratio, ratio, token_count, tokens, vowel_count};
use crate::model::Sentence;

pub fn word_long_pr(words: &[Sentence]) -> Scalar {
    guarded_ratio(long_word_count(words) as f64, token_count(words) as f64)
}

pub fn lemma_long_pr(words: &[Sentence]) -> Scalar {
    guarded_ratio(long_lemma_count(words) as f64, token_count(words) as f64)
}

pub fn comma_pr(words: &[Sentence]) -> Scalar {
    let commas = tokens(words).filter(|token| token.word == ",").count();
    Scalar::Real(ratio(commas as f64, token_count(words) as f64))
}

pub fn asl(words: &[Sentence]) -> Scalar {
    guarded_ratio(token_count(words) as f64, words.len() as f64)
}

pub fn ass(words: &[Sentence]) -> Scalar {
    let syllables: usize = tokens(words).map(|token| vowel_count(&token.word)).sum();
    Scalar::Real(ratio(syllables as f64, words.len() as f64))
}

pub fn asw(words: &[Sentence]) -> Scalar {
    Scalar::Real(average_syllables_per_word(words))
}

pub fn acw(words: &[Sentence]) -> Scalar {
    Scalar::Real(average_chars_per_word(words))
}

pub fn l(words: &[Sentence]) -> Scalar {
    Scalar::Real(average_chars_per_word(words) * 100.0)
}

pub fn s(words: &[Sentence]) -> Scalar {
    Scalar::Real(ratio(100.0, average_sentence_length(words)))
}

pub fn fre_gl(words: &[Sentence]) -> Scalar {
    if token_count(words) == 0 {
        return Scalar::Real(0.0);
    }
    Scalar::Real(
        0.5 * average_sentence_length(words) + 8.4 * average_syllables_per_word(words) - 15.59,
    )
}

pub fn smog(words: &[Sentence], sents: &[String]) -> Scalar {
    if sents.is_empty() {
        return Scalar::Real(0.0);
    }
    let long_words = long_word_count(words) as f64;
    Scalar::Real(1.1 * (64.6 / sents.len() as f64 * long_words).sqrt() + 0.05)
}

pub fn ari(words: &[Sentence], sents: &[String]) -> Scalar {
    let n = token_count(words) as f64;
    if n == 0.0 || sents.is_empty() {
        return Scalar::Real(0.0);
    }
    let chars = sentence_char_total(sents) as f64;
    Scalar::Real(6.26 * (chars / n) + 0.2805 * (n / sents.len() as f64) - 31.04)
}

pub fn dci(words: &[Sentence], sents: &[String]) -> Scalar {
    let n = token_count(words) as f64;
    if n == 0.0 || sents.is_empty() {
        return Scalar::Real(0.0);
    }
    let long_words = long_word_count(words) as f64;
    Scalar::Real(0.552 * (100.0 * long_words / n) + 0.273 * (n / sents.len() as f64))
}

pub fn cli(words: &[Sentence]) -> Scalar {
    let asl = average_sentence_length(words);
    if asl == 0.0 {
        return Scalar::Real(0.0);
    }
    Scalar::Real(0.055 * (average_chars_per_word(words) * 100.0) - 0.35 * (100.0 / asl) - 20.33)
}

fn average_sentence_length(words: &[Sentence]) -> f64 {
    ratio(token_count(words) as f64, words.len() as f64)
}

fn average_syllables_per_word(words: &[Sentence]) -> f64 {
    let syllables: usize = tokens(words).map(|token| vowel_count(&token.word)).sum();
    ratio(syllables as f64, token_count(words) as f64)
}

fn average_chars_per_word(words: &[Sentence]) -> f64 {
    let chars: usize = tokens(words).map(|token| token.word.chars().count()).sum();
    ratio(chars as f64, token_count(words) as f64)
}
