use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "complexity",
    version,
    about = "Linguistic complexity features for annotated legal texts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Features(FeaturesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long, default_value = "./data")]
    pub input_path: PathBuf,

    #[arg(long, default_value = "metrics.csv")]
    pub output_path: PathBuf,

    #[arg(long)]
    pub num_workers: Option<usize>,

    #[arg(long, default_value = "features.txt")]
    pub features_path: PathBuf,

    #[arg(long, default_value = "./Dictionaries")]
    pub dictionaries_dir: PathBuf,

    #[arg(long)]
    pub file_pattern: Option<String>,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FeaturesArgs {
    #[arg(long, default_value = "features.txt")]
    pub features_path: PathBuf,

    #[arg(long, default_value_t = false)]
    pub list: bool,
}
