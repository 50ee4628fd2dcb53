//! CLI command implementations

pub mod auth;
pub mod catalog;
pub mod guests;
pub mod reports;
pub mod sales;
pub mod status;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use iiko_api_client::DateRange;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Optional date bounds shared by list and report commands
#[derive(Debug, Clone, Default, Args)]
pub struct RangeArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl RangeArgs {
    /// Convert to a client date range, rejecting reversed bounds
    pub fn range(&self) -> Result<DateRange> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                bail!("--from ({from}) is after --to ({to})");
            }
        }
        Ok(DateRange {
            from: self.from,
            to: self.to,
        })
    }
}

/// JSON request body read from a file
#[derive(Debug, Clone, Args)]
pub struct BodyArgs {
    /// Path to a JSON file holding the request body
    #[arg(long)]
    pub file: PathBuf,
}

impl BodyArgs {
    /// Read and parse the body
    pub fn load(&self) -> Result<Value> {
        load_body(&self.file)
    }
}

/// Read a JSON object from `path`
pub fn load_body(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let body: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;

    if !body.is_object() {
        bail!("{} must contain a JSON object", path.display());
    }
    Ok(body)
}
