use super::{Scalar, ratio, tokens};
use crate::model::Sentence;

fn relation_rate(words: &[Sentence], sents: &[String], relation: &str) -> Scalar {
    let matched = tokens(words)
        .filter(|token| token.dep.to_lowercase() == relation)
        .count();
    Scalar::Real(ratio(matched as f64, sents.len() as f64))
}

pub fn acl_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "acl")
}

pub fn aclrelcl_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "acl:relcl")
}

pub fn advcl_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "advcl")
}

pub fn advmod_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "advmod")
}

pub fn amod_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "amod")
}

pub fn appos_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "appos")
}

pub fn auxpass_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "aux:pass")
}

pub fn cc_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "cc")
}

pub fn ccomp_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "ccomp")
}

pub fn compound_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "compound")
}

pub fn conj_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "conj")
}

pub fn cop_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "cop")
}

pub fn csubj_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "csubj")
}

pub fn csubjpass_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "csubj:pass")
}

pub fn discourse_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "discourse")
}

pub fn mark_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "mark")
}

pub fn nsubj_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "nsubj")
}

pub fn nsubjpass_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "nsubj:pass")
}

pub fn nummod_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "nummod")
}

pub fn orphan_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "orphan")
}

pub fn parataxis_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "parataxis")
}

pub fn xcomp_pr(words: &[Sentence], sents: &[String]) -> Scalar {
    relation_rate(words, sents, "xcomp")
}
