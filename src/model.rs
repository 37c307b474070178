use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub lemma: String,
    pub pos: String,
    pub morph: String,
    pub dep: String,
}

impl Token {
    pub fn new(word: &str, lemma: &str, pos: &str, morph: &str, dep: &str) -> Self {
        Self {
            word: word.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            morph: morph.to_string(),
            dep: dep.to_string(),
        }
    }

    pub fn is_valid_word(word: &str) -> bool {
        !word.is_empty() && (word.chars().all(char::is_alphabetic) || word.contains('-'))
    }

    pub fn morph_tags(&self) -> impl Iterator<Item = &str> {
        self.morph.split(',')
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.morph_tags().any(|candidate| candidate == tag)
    }

    pub fn lead_tag(&self) -> &str {
        self.morph_tags().next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sentences: Vec<Sentence>,
    raw_sentences: Vec<String>,
}

#[derive(Debug, Default)]
pub struct DocumentBuilder {
    groups: Vec<Sentence>,
    raw_sentences: Vec<String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_sentence(&mut self, text: &str) -> usize {
        self.groups.push(Sentence::default());
        self.raw_sentences.push(text.to_string());
        self.groups.len() - 1
    }

    pub fn push_token(&mut self, group: usize, token: Token) {
        if let Some(sentence) = self.groups.get_mut(group) {
            sentence.tokens.push(token);
        }
    }

    pub fn build(self) -> Document {
        Document {
            sentences: self
                .groups
                .into_iter()
                .filter(|sentence| !sentence.is_empty())
                .collect(),
            raw_sentences: self.raw_sentences,
        }
    }
}

impl Document {
    pub fn words(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sents(&self) -> &[String] {
        &self.raw_sentences
    }

    pub fn sentence_count(&self) -> usize {
        self.raw_sentences.len()
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputFileEntry {
    pub fname: String,
    pub sha256: String,
    pub sentence_count: usize,
    pub token_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub fname: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractPaths {
    pub input_path: String,
    pub output_path: String,
    pub features_path: String,
    pub dictionaries_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractCounts {
    pub file_count: usize,
    pub processed_count: usize,
    pub failed_count: usize,
    pub metric_count: usize,
    pub sentences_total: usize,
    pub tokens_total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractRunReport {
    pub report_version: u32,
    pub run_id: String,
    pub status: String,
    pub started_at: String,
    pub finished_at: String,
    pub num_workers: usize,
    pub fail_fast: bool,
    pub paths: ExtractPaths,
    pub counts: ExtractCounts,
    pub metrics: Vec<String>,
    pub inputs: Vec<InputFileEntry>,
    pub failures: Vec<FileFailure>,
}
