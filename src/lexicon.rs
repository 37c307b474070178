use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::util::read_entry_lines;

pub const FREQUENCY_TABLE_FILE: &str = "zipf_dict.csv";
pub const FREQUENCY_CLASS_COLUMN: usize = 13;
pub const WORD_FORMATION_FILE: &str = "Word_form.txt";

pub const DEFAULT_WORD_FORMATION_SUFFIXES: &[&str] = &[
    "ция", "ние", "вие", "тие", "ист", "изм", "ура", "ище", "ство", "ость", "овка", "атор",
    "итор", "тель", "льный", "овать",
];

#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl WordList {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let index = entries.iter().cloned().collect();
        Self { entries, index }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let list = Self::from_entries(read_entry_lines(path)?);
        if list.is_empty() {
            warn!(path = %path.display(), "word list has no entries");
        } else {
            debug!(path = %path.display(), entries = list.len(), "loaded word list");
        }
        Ok(list)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrequencyClasses {
    classes: HashMap<String, u8>,
}

impl FrequencyClasses {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self {
            classes: pairs
                .into_iter()
                .map(|(lemma, class)| (lemma.into(), class))
                .collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open frequency table: {}", path.display()))?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quote(b'"')
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut classes = HashMap::new();
        for (index, record) in reader.records().enumerate() {
            let line = index + 2;
            let record = record.with_context(|| {
                format!("malformed frequency table row {line}: {}", path.display())
            })?;
            let lemma = record.get(0).with_context(|| {
                format!("frequency table row {line} has no lemma: {}", path.display())
            })?;
            let raw_class = record.get(FREQUENCY_CLASS_COLUMN).with_context(|| {
                format!(
                    "frequency table row {line} has no column {FREQUENCY_CLASS_COLUMN}: {}",
                    path.display()
                )
            })?;
            let class = raw_class.trim().parse::<u8>().with_context(|| {
                format!(
                    "invalid frequency class '{raw_class}' on row {line}: {}",
                    path.display()
                )
            })?;
            classes.insert(lemma.to_string(), class);
        }

        debug!(path = %path.display(), lemmas = classes.len(), "loaded frequency table");
        Ok(Self { classes })
    }

    pub fn class_of(&self, lemma: &str) -> Option<u8> {
        self.classes.get(lemma).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LexicalResources {
    pub frequency: FrequencyClasses,
    pub text_deixis: WordList,
    pub contractions: WordList,
    pub abbreviations: WordList,
    pub legal_terms: WordList,
    pub abstract_nouns: WordList,
    pub deontic: WordList,
    pub multiword_prepositions: WordList,
    pub multiword_conjunctions: WordList,
    pub light_verb_constructions: WordList,
    pub archaic_words: WordList,
    pub word_formation_suffixes: WordList,
}

impl LexicalResources {
    pub fn empty() -> Self {
        Self {
            word_formation_suffixes: WordList::from_entries(
                DEFAULT_WORD_FORMATION_SUFFIXES.iter().copied(),
            ),
            ..Self::default()
        }
    }

    pub fn load(dir: &Path) -> Result<Self> {
        let list = |name: &str| WordList::load(&dir.join(name));

        let suffix_path = dir.join(WORD_FORMATION_FILE);
        let word_formation_suffixes = if suffix_path.is_file() {
            WordList::load(&suffix_path)?
        } else {
            WordList::from_entries(DEFAULT_WORD_FORMATION_SUFFIXES.iter().copied())
        };

        let resources = Self {
            frequency: FrequencyClasses::load(&dir.join(FREQUENCY_TABLE_FILE))?,
            text_deixis: list("Textdeixis.txt")?,
            contractions: list("Sokr.txt")?,
            abbreviations: list("Abbr.txt")?,
            legal_terms: list("Term.txt")?,
            abstract_nouns: list("Abstract.txt")?,
            deontic: list("Deont.txt")?,
            multiword_prepositions: list("Prep_mw.txt")?,
            multiword_conjunctions: list("Conj_mw.txt")?,
            light_verb_constructions: list("LVC.txt")?,
            archaic_words: list("Archaic_words.txt")?,
            word_formation_suffixes,
        };

        info!(
            dir = %dir.display(),
            frequency_lemmas = resources.frequency.len(),
            legal_terms = resources.legal_terms.len(),
            abbreviations = resources.abbreviations.len(),
            "loaded lexical resources"
        );
        Ok(resources)
    }
}
