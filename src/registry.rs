use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::lexicon::LexicalResources;
use crate::metrics::{
    Scalar, cohesion, counts, dictionary, diversity, morphology, ngrams, readability, syntax,
};
use crate::model::{Document, Sentence};

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*\(\s*(words|sents|words\s*,\s*sents)\s*\)\s*$")
        .expect("declaration pattern is valid")
});

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ArgSpec {
    Words,
    Sents,
    WordsSents,
}

impl ArgSpec {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Sents => "sents",
            Self::WordsSents => "words, sents",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "words" => Some(Self::Words),
            "sents" => Some(Self::Sents),
            "words,sents" => Some(Self::WordsSents),
            _ => None,
        }
    }
}

impl fmt::Display for ArgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug)]
pub enum MetricFn {
    Words(fn(&[Sentence]) -> Scalar),
    Sents(fn(&[String]) -> Scalar),
    WordsSents(fn(&[Sentence], &[String]) -> Scalar),
    Lexicon(fn(&[Sentence], &LexicalResources) -> Scalar),
}

impl MetricFn {
    pub fn args(self) -> ArgSpec {
        match self {
            Self::Words(_) | Self::Lexicon(_) => ArgSpec::Words,
            Self::Sents(_) => ArgSpec::Sents,
            Self::WordsSents(_) => ArgSpec::WordsSents,
        }
    }

    pub fn call(self, document: &Document, lexicon: &LexicalResources) -> Scalar {
        match self {
            Self::Words(metric) => metric(document.words()),
            Self::Sents(metric) => metric(document.sents()),
            Self::WordsSents(metric) => metric(document.words(), document.sents()),
            Self::Lexicon(metric) => metric(document.words(), lexicon),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read metric declarations {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `Name(words)`, `Name(sents)` or `Name(words, sents)`, found `{text}`")]
    Malformed { line: usize, text: String },
    #[error("line {line}: no metric named `{name}`")]
    UnknownMetric { line: usize, name: String },
    #[error("line {line}: `{name}` takes ({expected}) but was declared with ({declared})")]
    SignatureMismatch {
        line: usize,
        name: String,
        declared: ArgSpec,
        expected: ArgSpec,
    },
    #[error("no metrics declared")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: String,
    pub args: ArgSpec,
    metric: MetricFn,
}

impl Declaration {
    pub fn metric(&self) -> MetricFn {
        self.metric
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    declarations: Vec<Declaration>,
}

impl Registry {
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let text = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, RegistryError> {
        let mut declarations = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let captures = DECLARATION
                .captures(raw)
                .ok_or_else(|| RegistryError::Malformed {
                    line,
                    text: raw.trim().to_string(),
                })?;
            let name = &captures[1];
            let args = ArgSpec::parse(&captures[2]).ok_or_else(|| RegistryError::Malformed {
                line,
                text: raw.trim().to_string(),
            })?;

            let metric = lookup(name).ok_or_else(|| RegistryError::UnknownMetric {
                line,
                name: name.to_string(),
            })?;
            if metric.args() != args {
                return Err(RegistryError::SignatureMismatch {
                    line,
                    name: name.to_string(),
                    declared: args,
                    expected: metric.args(),
                });
            }

            declarations.push(Declaration {
                name: name.to_string(),
                args,
                metric,
            });
        }

        if declarations.is_empty() {
            return Err(RegistryError::Empty);
        }

        Ok(Self { declarations })
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn names(&self) -> Vec<&str> {
        self.declarations
            .iter()
            .map(|declaration| declaration.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn needs_lexicon(&self) -> bool {
        self.declarations
            .iter()
            .any(|declaration| matches!(declaration.metric, MetricFn::Lexicon(_)))
    }

    pub fn evaluate(&self, document: &Document, lexicon: &LexicalResources) -> Vec<Scalar> {
        self.declarations
            .iter()
            .map(|declaration| declaration.metric.call(document, lexicon))
            .collect()
    }
}

pub fn lookup(name: &str) -> Option<MetricFn> {
    CATALOG
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, metric)| *metric)
}

pub fn catalog() -> &'static [(&'static str, MetricFn)] {
    CATALOG
}

const CATALOG: &[(&str, MetricFn)] = &[
    ("N_word", MetricFn::Words(counts::n_word)),
    ("V_word", MetricFn::Words(counts::v_word)),
    ("N_lemma", MetricFn::Words(counts::n_lemma)),
    ("V_lemma", MetricFn::Words(counts::v_lemma)),
    ("C", MetricFn::Sents(counts::chars)),
    ("punct", MetricFn::Words(counts::punct)),
    ("let", MetricFn::Sents(counts::letters)),
    ("N", MetricFn::Sents(counts::digits)),
    ("syl", MetricFn::Sents(counts::syllables)),
    ("sent", MetricFn::Sents(counts::sent)),
    ("word_long", MetricFn::Words(counts::word_long)),
    ("word_long_pr", MetricFn::Words(readability::word_long_pr)),
    ("lemma_long", MetricFn::Words(counts::lemma_long)),
    ("lemma_long_pr", MetricFn::Words(readability::lemma_long_pr)),
    ("comma_pr", MetricFn::Words(readability::comma_pr)),
    ("ASL", MetricFn::Words(readability::asl)),
    ("ASS", MetricFn::Words(readability::ass)),
    ("ASW", MetricFn::Words(readability::asw)),
    ("ACW", MetricFn::Words(readability::acw)),
    ("L", MetricFn::Words(readability::l)),
    ("S", MetricFn::Words(readability::s)),
    ("TTR_word", MetricFn::Words(diversity::ttr_word)),
    ("TTR_lemma", MetricFn::Words(diversity::ttr_lemma)),
    ("YulesK_word", MetricFn::Words(diversity::yules_k_word)),
    ("YulesK_lemma", MetricFn::Words(diversity::yules_k_lemma)),
    ("YulesI_word", MetricFn::Words(diversity::yules_i_word)),
    ("YulesI_lemma", MetricFn::Words(diversity::yules_i_lemma)),
    ("hapax1_pr", MetricFn::Words(diversity::hapax1_pr)),
    ("hapax2_pr", MetricFn::Words(diversity::hapax2_pr)),
    ("FRE_GL", MetricFn::Words(readability::fre_gl)),
    ("SMOG", MetricFn::WordsSents(readability::smog)),
    ("ARI", MetricFn::WordsSents(readability::ari)),
    ("DCI", MetricFn::WordsSents(readability::dci)),
    ("CLI", MetricFn::Words(readability::cli)),
    ("Func_word_pr", MetricFn::Words(morphology::func_word_pr)),
    ("Verb_pr", MetricFn::Words(morphology::verb_pr)),
    ("Noun_pr", MetricFn::Words(morphology::noun_pr)),
    ("Adj_pr", MetricFn::Words(morphology::adj_pr)),
    ("Prop_pr", MetricFn::Words(morphology::prop_pr)),
    ("Autosem_pr", MetricFn::Words(morphology::autosem_pr)),
    ("Nouns_pr", MetricFn::Words(morphology::nouns_pr)),
    ("NVR", MetricFn::Words(morphology::nvr)),
    ("Cconj_pr", MetricFn::Words(morphology::cconj_pr)),
    ("Sconj_pr", MetricFn::Words(morphology::sconj_pr)),
    ("Adjs_pr", MetricFn::Words(morphology::adjs_pr)),
    ("Prtf_pr", MetricFn::Words(morphology::prtf_pr)),
    ("Prts_pr", MetricFn::Words(morphology::prts_pr)),
    ("Npro_pr", MetricFn::Words(morphology::npro_pr)),
    ("Pred_pr", MetricFn::Words(morphology::pred_pr)),
    ("Grnd_pr", MetricFn::Words(morphology::grnd_pr)),
    ("Infn_pr", MetricFn::Words(morphology::infn_pr)),
    ("Numr_pr", MetricFn::Words(morphology::numr_pr)),
    ("Prcl_pr", MetricFn::Words(morphology::prcl_pr)),
    ("Prep_pr", MetricFn::Words(morphology::prep_pr)),
    ("Comp_pr", MetricFn::Words(morphology::comp_pr)),
    ("Pos_ngrams_1_pr", MetricFn::Words(ngrams::pos_ngrams_1_pr)),
    ("Pos_ngrams_2_pr", MetricFn::Words(ngrams::pos_ngrams_2_pr)),
    ("Pos_ngrams_3_pr", MetricFn::Words(ngrams::pos_ngrams_3_pr)),
    ("Pos_ngrams_4_pr", MetricFn::Words(ngrams::pos_ngrams_4_pr)),
    ("Pos_ngrams_5_pr", MetricFn::Words(ngrams::pos_ngrams_5_pr)),
    ("Pos_ngrams_6_pr", MetricFn::Words(ngrams::pos_ngrams_6_pr)),
    ("Pos_ngrams_7_pr", MetricFn::Words(ngrams::pos_ngrams_7_pr)),
    ("Pos_ngrams_8_pr", MetricFn::Words(ngrams::pos_ngrams_8_pr)),
    ("Pos_ngrams_9_pr", MetricFn::Words(ngrams::pos_ngrams_9_pr)),
    ("Pos_ngrams_10_pr", MetricFn::Words(ngrams::pos_ngrams_10_pr)),
    ("Pos_ngrams_11_pr", MetricFn::Words(ngrams::pos_ngrams_11_pr)),
    ("Pos_ngrams_12_pr", MetricFn::Words(ngrams::pos_ngrams_12_pr)),
    ("Dyn_Stat", MetricFn::Words(ngrams::dyn_stat)),
    ("Zipf_0_pr", MetricFn::Lexicon(dictionary::zipf_0_pr)),
    ("Zipf_1_pr", MetricFn::Lexicon(dictionary::zipf_1_pr)),
    ("Zipf_2_pr", MetricFn::Lexicon(dictionary::zipf_2_pr)),
    ("Zipf_3_pr", MetricFn::Lexicon(dictionary::zipf_3_pr)),
    ("Zipf_4_pr", MetricFn::Lexicon(dictionary::zipf_4_pr)),
    ("Zipf_5_pr", MetricFn::Lexicon(dictionary::zipf_5_pr)),
    ("Zipf_6_pr", MetricFn::Lexicon(dictionary::zipf_6_pr)),
    ("Zipf_7_pr", MetricFn::Lexicon(dictionary::zipf_7_pr)),
    ("Zipf_8_pr", MetricFn::Lexicon(dictionary::zipf_8_pr)),
    ("Word_form", MetricFn::Lexicon(dictionary::word_form)),
    ("Gen_pr", MetricFn::Words(morphology::gen_pr)),
    ("Ablt_pr", MetricFn::Words(morphology::ablt_pr)),
    ("datv", MetricFn::Words(morphology::datv)),
    ("nomn", MetricFn::Words(morphology::nomn)),
    ("loct", MetricFn::Words(morphology::loct)),
    ("Adjif_pr", MetricFn::Words(morphology::adjif_pr)),
    ("Neut_pr", MetricFn::Words(morphology::neut_pr)),
    ("Inan_pr", MetricFn::Words(morphology::inan_pr)),
    ("P1_pr", MetricFn::Words(morphology::p1_pr)),
    ("P3_pr", MetricFn::Words(morphology::p3_pr)),
    ("Pres_pr", MetricFn::Words(morphology::pres_pr)),
    ("Futr_pr", MetricFn::Words(morphology::futr_pr)),
    ("Past_pr", MetricFn::Words(morphology::past_pr)),
    ("Impf_pr", MetricFn::Words(morphology::impf_pr)),
    ("Perf_pr", MetricFn::Words(morphology::perf_pr)),
    ("Pssv_prtf_pr", MetricFn::Words(morphology::pssv_prtf_pr)),
    ("Pssv_prts_pr", MetricFn::Words(morphology::pssv_prts_pr)),
    ("Sja_verb_pr", MetricFn::Words(morphology::sja_verb_pr)),
    ("Yavl_pr", MetricFn::Words(morphology::yavl_pr)),
    ("Textdeixis_pr", MetricFn::Lexicon(dictionary::textdeixis_pr)),
    ("Sokr_pr", MetricFn::Lexicon(dictionary::sokr_pr)),
    ("Abbr_pr", MetricFn::Lexicon(dictionary::abbr_pr)),
    ("FZ_pr", MetricFn::WordsSents(dictionary::fz_pr)),
    ("Term_pr", MetricFn::Lexicon(dictionary::term_pr)),
    ("Abstr_pr", MetricFn::Lexicon(dictionary::abstr_pr)),
    ("Deont_pr", MetricFn::Lexicon(dictionary::deont_pr)),
    ("Prep_mw_pr", MetricFn::Lexicon(dictionary::prep_mw_pr)),
    ("Conj_mw_pr", MetricFn::Lexicon(dictionary::conj_mw_pr)),
    ("LVC_pr", MetricFn::Lexicon(dictionary::lvc_pr)),
    ("Arch_pr", MetricFn::Lexicon(dictionary::arch_pr)),
    ("Acl_pr", MetricFn::WordsSents(syntax::acl_pr)),
    ("Aclrelcl_pr", MetricFn::WordsSents(syntax::aclrelcl_pr)),
    ("Advcl_pr", MetricFn::WordsSents(syntax::advcl_pr)),
    ("Advmod_pr", MetricFn::WordsSents(syntax::advmod_pr)),
    ("Amod_pr", MetricFn::WordsSents(syntax::amod_pr)),
    ("Appos_pr", MetricFn::WordsSents(syntax::appos_pr)),
    ("Auxpass_pr", MetricFn::WordsSents(syntax::auxpass_pr)),
    ("Cc_pr", MetricFn::WordsSents(syntax::cc_pr)),
    ("Ccomp_pr", MetricFn::WordsSents(syntax::ccomp_pr)),
    ("Compound_pr", MetricFn::WordsSents(syntax::compound_pr)),
    ("Conj_pr", MetricFn::WordsSents(syntax::conj_pr)),
    ("Cop_pr", MetricFn::WordsSents(syntax::cop_pr)),
    ("Csubj_pr", MetricFn::WordsSents(syntax::csubj_pr)),
    ("Csubjpass_pr", MetricFn::WordsSents(syntax::csubjpass_pr)),
    ("Discourse_pr", MetricFn::WordsSents(syntax::discourse_pr)),
    ("Mark_pr", MetricFn::WordsSents(syntax::mark_pr)),
    ("Nsubj_pr", MetricFn::WordsSents(syntax::nsubj_pr)),
    ("Nsubjpass_pr", MetricFn::WordsSents(syntax::nsubjpass_pr)),
    ("Nummod_pr", MetricFn::WordsSents(syntax::nummod_pr)),
    ("Orphan_pr", MetricFn::WordsSents(syntax::orphan_pr)),
    ("Parataxis_pr", MetricFn::WordsSents(syntax::parataxis_pr)),
    ("Xcomp_pr", MetricFn::WordsSents(syntax::xcomp_pr)),
    ("Cohes_1", MetricFn::Words(cohesion::cohes_1)),
    ("Cohes_2", MetricFn::Words(cohesion::cohes_2)),
];
