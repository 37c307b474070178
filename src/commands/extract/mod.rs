use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::cli::ExtractArgs;
use crate::lexicon::LexicalResources;
use crate::metrics::Scalar;
use crate::model::{
    Document, DocumentBuilder, ExtractCounts, ExtractPaths, ExtractRunReport, FileFailure, InputFileEntry, Token,
};
use crate::registry::Registry;
use crate::util::{
    ensure_parent_directory, file_name_string, now_utc_string, run_id_for, sha256_file,
    write_json_pretty,
};

const REPORT_VERSION: u32 = 1;
const FILE_ID_COLUMN: &str = "fname";

mod discover;
mod output;
mod parse;
mod pipeline;
mod run;
#[cfg(test)]
mod tests;

pub use run::run;

use discover::*;
use output::*;
use parse::*;
use pipeline::*;
