pub mod settings;

use crate::core::importer::DEFAULT_TIMEOUT_SECS;
use crate::utils::error::Result;
use crate::utils::validation;
use clap::Parser;
use settings::Settings;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "inv-import")]
#[command(about = "Import an inventory JSON document from a URL into the record store")]
pub struct CliConfig {
    /// URL of the inventory JSON document to import
    pub import_url: String,

    /// Where the record store file lives
    #[arg(long)]
    pub store_path: Option<String>,

    /// HTTP timeout for the fetch, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective configuration after merging CLI flags over the settings file.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub import_url: String,
    pub store_path: String,
    pub timeout: Duration,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ImportConfig> {
        let settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        let store_path = self
            .store_path
            .clone()
            .or_else(|| settings.store_path().map(str::to_string))
            .unwrap_or_else(|| "./records.jsonl".to_string());

        let timeout_secs = self
            .timeout_secs
            .or_else(|| settings.timeout_seconds())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        validation::validate_url("import_url", &self.import_url)?;
        validation::validate_path("store_path", &store_path)?;

        Ok(ImportConfig {
            import_url: self.import_url.clone(),
            store_path,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
