use std::collections::HashSet;

use super::{Scalar, VOWELS, token_count, tokens, vowel_count};
use crate::model::Sentence;

const PUNCTUATION: &str = ".,;:!?()[]{}'\"-";

pub fn n_word(words: &[Sentence]) -> Scalar {
    Scalar::Count(token_count(words))
}

pub fn v_word(words: &[Sentence]) -> Scalar {
    Scalar::Count(distinct_words(words).len())
}

pub fn n_lemma(words: &[Sentence]) -> Scalar {
    Scalar::Count(lemma_char_total(words))
}

pub fn v_lemma(words: &[Sentence]) -> Scalar {
    Scalar::Count(distinct_lemmas(words).len())
}

pub fn chars(sents: &[String]) -> Scalar {
    Scalar::Count(sentence_char_total(sents))
}

pub fn punct(words: &[Sentence]) -> Scalar {
    Scalar::Count(
        tokens(words)
            .filter(|token| PUNCTUATION.contains(token.word.as_str()))
            .count(),
    )
}

pub fn letters(sents: &[String]) -> Scalar {
    Scalar::Count(count_chars(sents, is_counted_letter))
}

pub fn digits(sents: &[String]) -> Scalar {
    Scalar::Count(count_chars(sents, |c| c.is_ascii_digit()))
}

pub fn syllables(sents: &[String]) -> Scalar {
    Scalar::Count(count_chars(sents, |c| VOWELS.contains(c)))
}

pub fn sent(sents: &[String]) -> Scalar {
    Scalar::Count(sents.len())
}

pub fn word_long(words: &[Sentence]) -> Scalar {
    Scalar::Count(long_word_count(words))
}

pub fn lemma_long(words: &[Sentence]) -> Scalar {
    Scalar::Count(long_lemma_count(words))
}

pub(crate) fn distinct_words(words: &[Sentence]) -> HashSet<&str> {
    tokens(words).map(|token| token.word.as_str()).collect()
}

pub(crate) fn distinct_lemmas(words: &[Sentence]) -> HashSet<&str> {
    tokens(words).map(|token| token.lemma.as_str()).collect()
}

pub(crate) fn lemma_char_total(words: &[Sentence]) -> usize {
    distinct_lemmas(words)
        .iter()
        .map(|lemma| lemma.chars().count())
        .sum()
}

pub(crate) fn sentence_char_total(sents: &[String]) -> usize {
    sents.iter().map(|sentence| sentence.chars().count()).sum()
}

pub(crate) fn long_word_count(words: &[Sentence]) -> usize {
    tokens(words)
        .filter(|token| vowel_count(&token.word) > 3)
        .count()
}

pub(crate) fn long_lemma_count(words: &[Sentence]) -> usize {
    tokens(words)
        .filter(|token| vowel_count(&token.lemma) > 3)
        .count()
}

fn is_counted_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('а'..='я').contains(&c) || ('А'..='Я').contains(&c)
}

fn count_chars<F>(sents: &[String], keep: F) -> usize
where
    F: Fn(char) -> bool,
{
    sents
        .iter()
        .map(|sentence| sentence.chars().filter(|c| keep(*c)).count())
        .sum()
}
