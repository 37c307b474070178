use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::FeaturesArgs;
use crate::registry::{MetricFn, Registry, catalog};

pub fn run(args: FeaturesArgs) -> Result<()> {
    if args.list {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in catalog_lines() {
            writeln!(out, "{line}").context("failed to write metric catalog")?;
        }
        return Ok(());
    }

    let registry = Registry::load(&args.features_path).with_context(|| {
        format!(
            "invalid metric declarations: {}",
            args.features_path.display()
        )
    })?;

    for (column, declaration) in registry.declarations().iter().enumerate() {
        info!(
            column = column + 1,
            name = %declaration.name,
            args = %declaration.args,
            dictionary = matches!(declaration.metric(), MetricFn::Lexicon(_)),
            "declared metric"
        );
    }
    info!(
        path = %args.features_path.display(),
        metrics = registry.len(),
        needs_dictionaries = registry.needs_lexicon(),
        "metric declarations valid"
    );

    Ok(())
}

pub fn catalog_lines() -> Vec<String> {
    catalog()
        .iter()
        .map(|(name, metric)| format!("{name}({})", metric.args()))
        .collect()
}
