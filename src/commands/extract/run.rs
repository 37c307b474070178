use super::*;

pub fn run(args: ExtractArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = run_id_for(started_ts);

    info!(
        input_path = %args.input_path.display(),
        run_id = %run_id,
        "starting feature extraction"
    );

    let registry = Registry::load(&args.features_path).with_context(|| {
        format!(
            "invalid metric declarations: {}",
            args.features_path.display()
        )
    })?;
    info!(metrics = registry.len(), "loaded metric declarations");

    let lexicon = if registry.needs_lexicon() {
        LexicalResources::load(&args.dictionaries_dir)?
    } else {
        debug!("no dictionary metrics declared; skipping lexical resources");
        LexicalResources::empty()
    };

    let file_pattern = args
        .file_pattern
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("failed to compile --file-pattern")?;
    let inputs = discover_inputs(&args.input_path, file_pattern.as_ref())?;

    let num_workers = args.num_workers.unwrap_or_else(default_worker_count);
    info!(files = inputs.len(), num_workers, "processing annotated files");

    let outcomes = extract_batch(&inputs, &registry, &lexicon, num_workers)?;

    let mut rows = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(row) => rows.push(row),
            Err(err) if args.fail_fast => {
                return Err(err.context(format!("extraction failed for {}", outcome.fname)));
            }
            Err(err) => {
                warn!(file = %outcome.fname, error = %format!("{err:#}"), "skipping file");
                failures.push(FileFailure {
                    fname: outcome.fname,
                    error: format!("{err:#}"),
                });
            }
        }
    }

    write_feature_matrix(&args.output_path, &registry.names(), &rows)?;
    info!(
        path = %args.output_path.display(),
        rows = rows.len(),
        failed = failures.len(),
        "wrote feature matrix"
    );

    if let Some(report_path) = &args.report_path {
        let report = ExtractRunReport {
            report_version: REPORT_VERSION,
            run_id,
            status: if failures.is_empty() {
                "completed".to_string()
            } else {
                "completed_with_failures".to_string()
            },
            started_at,
            finished_at: now_utc_string(),
            num_workers,
            fail_fast: args.fail_fast,
            paths: ExtractPaths {
                input_path: args.input_path.display().to_string(),
                output_path: args.output_path.display().to_string(),
                features_path: args.features_path.display().to_string(),
                dictionaries_dir: registry
                    .needs_lexicon()
                    .then(|| args.dictionaries_dir.display().to_string()),
            },
            counts: ExtractCounts {
                file_count: inputs.len(),
                processed_count: rows.len(),
                failed_count: failures.len(),
                metric_count: registry.len(),
                sentences_total: rows.iter().map(|row| row.sentence_count).sum(),
                tokens_total: rows.iter().map(|row| row.token_count).sum(),
            },
            metrics: registry.names().into_iter().map(ToOwned::to_owned).collect(),
            inputs: rows.iter().map(FeatureRow::input_entry).collect(),
            failures,
        };
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote run report");
    }

    Ok(())
}

pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(usize::from)
        .unwrap_or(1)
}
