use super::*;

pub fn discover_inputs(input_dir: &Path, file_pattern: Option<&Regex>) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("failed to read {}", input_dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", input_dir.display()))?;
        let path = entry.path();

        if !entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?
            .is_file()
        {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            continue;
        }

        if let Some(pattern) = file_pattern {
            let name = file_name_string(&path)?;
            if !pattern.is_match(&name) {
                debug!(file = %name, "skipping file outside --file-pattern");
                continue;
            }
        }

        inputs.push(path);
    }

    inputs.sort();

    if inputs.is_empty() {
        bail!("no annotated CSV files found in {}", input_dir.display());
    }

    Ok(inputs)
}
