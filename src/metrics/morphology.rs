use super::{
    Scalar, count_occurrences, guarded_ratio, ratio, token_count, token_share, tokens,
};
use crate::model::{Sentence, Token};

const FUNCTION_WORD_POS: &[&str] = &["ADP", "AUX", "CCONJ", "PART", "SCONJ"];
const VERB_POS: &[&str] = &["VERB", "AUX"];
const NOUN_POS: &[&str] = &["NOUN", "PROPN"];
const ADJECTIVE_POS: &[&str] = &["ADJ"];
const PRONOUN_POS: &[&str] = &["DET", "PRON"];
const AUTOSEMANTIC_POS: &[&str] = &["ADJ", "ADV", "NOUN", "NUM", "PROPN", "VERB"];
const NOMINAL_POS: &[&str] = &["ADJ", "NOUN", "PROPN"];

fn pos_in(token: &Token, set: &[&str]) -> bool {
    set.contains(&token.pos.as_str())
}

fn pos_share(words: &[Sentence], set: &[&str]) -> Scalar {
    token_share(words, |token| pos_in(token, set))
}

fn tag_share(words: &[Sentence], tag: &str) -> Scalar {
    token_share(words, |token| token.has_tag(tag))
}

pub fn func_word_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, FUNCTION_WORD_POS)
}

pub fn verb_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, VERB_POS)
}

pub fn noun_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, NOUN_POS)
}

pub fn adj_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, ADJECTIVE_POS)
}

pub fn prop_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, PRONOUN_POS)
}

pub fn autosem_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, AUTOSEMANTIC_POS)
}

pub fn nouns_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, NOMINAL_POS)
}

pub fn cconj_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, &["CCONJ"])
}

pub fn sconj_pr(words: &[Sentence]) -> Scalar {
    pos_share(words, &["SCONJ"])
}

pub fn nvr(words: &[Sentence]) -> Scalar {
    let nouns = tokens(words).filter(|token| pos_in(token, NOUN_POS)).count();
    let verbs = tokens(words).filter(|token| pos_in(token, VERB_POS)).count();
    guarded_ratio(nouns as f64, verbs as f64)
}

pub fn adjs_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "ADJS")
}

pub fn prtf_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "PRTF")
}

pub fn prts_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "PRTS")
}

pub fn npro_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "NPRO")
}

pub fn pred_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "PRED")
}

pub fn grnd_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "GRND")
}

pub fn infn_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "INFN")
}

pub fn numr_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "NUMR")
}

pub fn prcl_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "PRCL")
}

pub fn prep_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "PREP")
}

pub fn comp_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "COMP")
}

pub fn gen_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "gent")
}

pub fn ablt_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "ablt")
}

pub fn datv(words: &[Sentence]) -> Scalar {
    tag_share(words, "datv")
}

pub fn nomn(words: &[Sentence]) -> Scalar {
    tag_share(words, "nomn")
}

pub fn loct(words: &[Sentence]) -> Scalar {
    tag_share(words, "loct")
}

pub fn neut_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "neut")
}

pub fn inan_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "inan")
}

pub fn p1_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "1per")
}

pub fn p3_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "3per")
}

pub fn pres_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "pres")
}

pub fn futr_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "futr")
}

pub fn past_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "past")
}

pub fn impf_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "impf")
}

pub fn perf_pr(words: &[Sentence]) -> Scalar {
    tag_share(words, "perf")
}

pub fn pssv_prtf_pr(words: &[Sentence]) -> Scalar {
    token_share(words, |token| token.has_tag("pssv") && token.has_tag("PRTF"))
}

pub fn pssv_prts_pr(words: &[Sentence]) -> Scalar {
    token_share(words, |token| token.has_tag("pssv") && token.has_tag("PRTS"))
}

pub fn adjif_pr(words: &[Sentence]) -> Scalar {
    let joined = tokens(words)
        .map(|token| token.morph.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Scalar::Real(ratio(
        count_occurrences(&joined, "ADJF") as f64,
        token_count(words) as f64,
    ))
}

pub fn sja_verb_pr(words: &[Sentence]) -> Scalar {
    token_share(words, |token| {
        token.lead_tag() == "VERB" && token.word.ends_with("ся")
    })
}

pub fn yavl_pr(words: &[Sentence]) -> Scalar {
    token_share(words, |token| token.lemma == "являться")
}
