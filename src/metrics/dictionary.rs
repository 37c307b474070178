use once_cell::sync::Lazy;
use regex::Regex;

use super::{Scalar, count_occurrences, ratio, token_count, token_share, tokens};
use crate::lexicon::{LexicalResources, WordList};
use crate::model::Sentence;

static FEDERAL_LAW_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]-ФЗ").expect("federal law pattern is valid"));

fn joined_lower_words(words: &[Sentence]) -> String {
    tokens(words)
        .map(|token| token.word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn joined_lower_lemmas(words: &[Sentence]) -> String {
    tokens(words)
        .map(|token| token.lemma.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn entries_present(list: &WordList, text: &str, words: &[Sentence]) -> Scalar {
    let present = list.iter().filter(|entry| text.contains(entry)).count();
    Scalar::Real(ratio(present as f64, token_count(words) as f64))
}

pub fn textdeixis_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    token_share(words, |token| {
        lexicon
            .text_deixis
            .iter()
            .any(|marker| token.word.starts_with(marker))
    })
}

pub fn sokr_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    token_share(words, |token| {
        lexicon.contractions.contains(&token.word.to_lowercase())
    })
}

pub fn abbr_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    token_share(words, |token| {
        lexicon.abbreviations.contains(&token.word.to_lowercase())
    })
}

pub fn fz_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    let references: usize = sents
        .iter()
        .map(|sentence| FEDERAL_LAW_REFERENCE.find_iter(sentence).count())
        .sum();
    Scalar::Real(ratio(references as f64, token_count(words) as f64))
}

pub fn term_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    let joined = joined_lower_lemmas(words);
    let occurrences: usize = lexicon
        .legal_terms
        .iter()
        .map(|term| count_occurrences(&joined, term))
        .sum();
    Scalar::Real(ratio(occurrences as f64, token_count(words) as f64))
}

pub fn abstr_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    token_share(words, |token| {
        lexicon.abstract_nouns.contains(&token.lemma.to_lowercase())
    })
}

pub fn deont_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    token_share(words, |token| {
        lexicon.deontic.contains(&token.lemma.to_lowercase())
    })
}

pub fn prep_mw_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    entries_present(
        &lexicon.multiword_prepositions,
        &joined_lower_words(words),
        words,
    )
}

pub fn conj_mw_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    entries_present(
        &lexicon.multiword_conjunctions,
        &joined_lower_words(words),
        words,
    )
}

pub fn lvc_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    entries_present(
        &lexicon.light_verb_constructions,
        &joined_lower_lemmas(words),
        words,
    )
}

pub fn arch_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    entries_present(&lexicon.archaic_words, &joined_lower_lemmas(words), words)
}

pub fn word_form(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    token_share(words, |token| {
        lexicon
            .word_formation_suffixes
            .iter()
            .any(|suffix| token.lemma.ends_with(suffix))
    })
}

fn zipf_share(words: &[Sentence], lexicon: &LexicalResources, class: u8) -> Scalar {
    token_share(words, |token| lexicon.frequency.class_of(&token.lemma) == Some(class))
}

pub fn zipf_0_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 0)
}

pub fn zipf_1_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 1)
}

pub fn zipf_2_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 2)
}

pub fn zipf_3_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 3)
}

pub fn zipf_4_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 4)
}

pub fn zipf_5_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 5)
}

pub fn zipf_6_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 6)
}

pub fn zipf_7_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 7)
}

pub fn zipf_8_pr(words: &[Sentence], lexicon: &LexicalResources) -> Scalar {
    zipf_share(words, lexicon, 8)
}
