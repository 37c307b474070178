use std::collections::HashSet;

use super::Scalar;
use crate::model::{Sentence, Token};

const ASPECTS: [&str; 2] = ["impf", "perf"];
const TENSES: [&str; 3] = ["pres", "past", "futr"];

pub fn cohes_1(words: &[Sentence]) -> Scalar {
    let shared = words
        .windows(2)
        .map(|pair| {
            let left = noun_lemmas(&pair[0]);
            let right = noun_lemmas(&pair[1]);
            left.intersection(&right).count()
        })
        .sum();
    Scalar::Count(shared)
}

pub fn cohes_2(words: &[Sentence]) -> Scalar {
    let total = words
        .windows(2)
        .map(|pair| {
            let mut pair_total = 0;
            for aspect in ASPECTS {
                for tense in TENSES {
                    pair_total += pair
                        .iter()
                        .flat_map(|sentence| sentence.tokens.iter())
                        .filter(|token| is_verb_form(token, aspect, tense))
                        .count();
                }
            }
            pair_total
        })
        .sum();
    Scalar::Count(total)
}

fn noun_lemmas(sentence: &Sentence) -> HashSet<&str> {
    sentence
        .tokens
        .iter()
        .filter(|token| token.pos == "NOUN")
        .map(|token| token.lemma.as_str())
        .collect()
}

fn is_verb_form(token: &Token, aspect: &str, tense: &str) -> bool {
    token.has_tag("VERB") && token.has_tag(aspect) && token.has_tag(tense)
}
