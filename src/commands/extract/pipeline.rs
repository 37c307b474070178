use super::*;

#[derive(Debug, Clone)]
pub struct FeatureRow {
    pub fname: String,
    pub sha256: String,
    pub sentence_count: usize,
    pub token_count: usize,
    pub values: Vec<Scalar>,
}

impl FeatureRow {
    pub fn input_entry(&self) -> InputFileEntry {
        InputFileEntry {
            fname: self.fname.clone(),
            sha256: self.sha256.clone(),
            sentence_count: self.sentence_count,
            token_count: self.token_count,
        }
    }
}

#[derive(Debug)]
pub struct FileOutcome {
    pub fname: String,
    pub result: Result<FeatureRow>,
}

pub fn extract_file(
    path: &Path,
    registry: &Registry,
    lexicon: &LexicalResources,
) -> Result<FeatureRow> {
    let fname = file_name_string(path)?;
    let sha256 = sha256_file(path)?;
    let document = parse_annotated_csv(path)?;

    let values = panic::catch_unwind(AssertUnwindSafe(|| registry.evaluate(&document, lexicon)))
        .map_err(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|message| message.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            anyhow!("metric evaluation panicked: {message}")
        })?;

    debug!(
        file = %fname,
        sentences = document.sentence_count(),
        tokens = document.token_count(),
        groups = document.words().len(),
        "extracted features"
    );

    Ok(FeatureRow {
        fname,
        sha256,
        sentence_count: document.sentence_count(),
        token_count: document.token_count(),
        values,
    })
}

pub fn extract_batch(
    inputs: &[PathBuf],
    registry: &Registry,
    lexicon: &LexicalResources,
    num_workers: usize,
) -> Result<Vec<FileOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers.max(1))
        .thread_name(|index| format!("extract-{index}"))
        .build()
        .context("failed to build extraction worker pool")?;

    let outcomes = pool.install(|| {
        inputs
            .par_iter()
            .map(|path| FileOutcome {
                fname: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                result: extract_file(path, registry, lexicon),
            })
            .collect()
    });

    Ok(outcomes)
}
