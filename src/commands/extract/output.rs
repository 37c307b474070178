use super::*;

pub fn write_feature_matrix(path: &Path, metric_names: &[&str], rows: &[FeatureRow]) -> Result<()> {
    ensure_parent_directory(path)?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut header = Vec::with_capacity(metric_names.len() + 1);
    header.push(FILE_ID_COLUMN);
    header.extend_from_slice(metric_names);
    writer
        .write_record(&header)
        .with_context(|| format!("failed to write header to {}", path.display()))?;

    for row in rows {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.fname.clone());
        record.extend(row.values.iter().map(Scalar::to_string));
        writer
            .write_record(&record)
            .with_context(|| format!("failed to write row for {}", row.fname))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
