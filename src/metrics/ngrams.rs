use super::{Scalar, count_occurrences, guarded_ratio, ratio, token_count, tokens};
use crate::model::{Sentence, Token};

pub fn tag_string(words: &[Sentence]) -> String {
    tokens(words)
        .map(Token::lead_tag)
        .collect::<Vec<_>>()
        .join("+")
}

fn pattern_share(words: &[Sentence], patterns: &[&str]) -> Scalar {
    let joined = tag_string(words);
    let matched: usize = patterns
        .iter()
        .map(|pattern| count_occurrences(&joined, pattern))
        .sum();
    Scalar::Real(ratio(matched as f64, token_count(words) as f64))
}

pub fn pos_ngrams_1_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["VERB+NOUN"])
}

pub fn pos_ngrams_2_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["NOUN+VERB"])
}

pub fn pos_ngrams_3_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["ADVB+VERB"])
}

pub fn pos_ngrams_4_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["ADJF+NOUN"])
}

pub fn pos_ngrams_5_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["NOUN+NOUN"])
}

pub fn pos_ngrams_6_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["NOUN+NOUN+NOUN"])
}

pub fn pos_ngrams_7_pr(words: &[Sentence]) -> Scalar {
    let flat: Vec<&Token> = tokens(words).collect();
    let matched = flat
        .windows(2)
        .filter(|pair| {
            pair[0].has_tag("NOUN") && pair[1].has_tag("NOUN") && pair[1].has_tag("gent")
        })
        .count();
    Scalar::Real(ratio(matched as f64, flat.len() as f64))
}

pub fn pos_ngrams_8_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["GRND+NOUN"])
}

pub fn pos_ngrams_9_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["ADVB+GRND"])
}

pub fn pos_ngrams_10_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["PRTF+NOUN"])
}

pub fn pos_ngrams_11_pr(words: &[Sentence]) -> Scalar {
    let flat: Vec<&Token> = tokens(words).collect();
    let mut matched = 0;
    for i in 0..flat.len().saturating_sub(1) {
        if !flat[i].has_tag("NOUN") {
            continue;
        }
        let next = flat[i + 1];
        let participle = if next.has_tag("PNCT") {
            flat.get(i + 2).is_some_and(|after| after.has_tag("PRTF"))
        } else {
            next.has_tag("PRTF")
        };
        if participle {
            matched += 1;
        }
    }
    Scalar::Real(ratio(matched as f64, flat.len() as f64))
}

pub fn pos_ngrams_12_pr(words: &[Sentence]) -> Scalar {
    pattern_share(words, &["PRTF+ADVB", "PRTS+ADVB"])
}

pub fn dyn_stat(words: &[Sentence]) -> Scalar {
    let joined = tag_string(words);
    let count = |patterns: &[&str]| -> usize {
        patterns
            .iter()
            .map(|pattern| count_occurrences(&joined, pattern))
            .sum()
    };
    let dynamic = count(&[
        "VERB+NOUN",
        "NOUN+VERB",
        "ADVB+VERB",
        "GRND+NOUN",
        "ADVB+GRND",
    ]);
    let stative = count(&["NOUN+NOUN", "ADJF+VERB"]);
    guarded_ratio(dynamic as f64, stative as f64)
}
