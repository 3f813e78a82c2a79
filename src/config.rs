use std::time::Duration;

use camino::Utf8PathBuf;

use crate::error::OrthoError;

pub const DEFAULT_BASE_URL: &str = "https://rest.ensembl.org";
pub const DEFAULT_SPECIES: &str = "homo_sapiens";
pub const DEFAULT_GENE_SYMBOL: &str = "MDC1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything one pipeline run needs to know about where to look and where to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub base_url: String,
    pub species: String,
    pub gene_symbol: String,
    pub output: Utf8PathBuf,
    pub timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            species: DEFAULT_SPECIES.to_string(),
            gene_symbol: DEFAULT_GENE_SYMBOL.to_string(),
            output: default_output_path(DEFAULT_GENE_SYMBOL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Optional values supplied on the command line; anything left `None` falls
/// back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub species: Option<String>,
    pub gene_symbol: Option<String>,
    pub output: Option<Utf8PathBuf>,
    pub timeout_secs: Option<u64>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn resolve(overrides: ConfigOverrides) -> Result<PipelineConfig, OrthoError> {
        let defaults = PipelineConfig::default();

        let base_url = overrides
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(OrthoError::InvalidConfig(format!(
                "base url must be http(s): {base_url}"
            )));
        }

        let species = non_empty(overrides.species, defaults.species, "species")?;
        let gene_symbol = non_empty(overrides.gene_symbol, defaults.gene_symbol, "gene symbol")?;

        let output = overrides
            .output
            .unwrap_or_else(|| default_output_path(&gene_symbol));
        if output.as_str().is_empty() {
            return Err(OrthoError::InvalidConfig("output path is empty".to_string()));
        }

        let timeout_secs = overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(OrthoError::InvalidConfig(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(PipelineConfig {
            base_url,
            species,
            gene_symbol,
            output,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

pub fn default_output_path(gene_symbol: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{gene_symbol}_all_orthologues.fasta"))
}

fn non_empty(value: Option<String>, default: String, what: &str) -> Result<String, OrthoError> {
    match value {
        None => Ok(default),
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(OrthoError::InvalidConfig(format!("{what} is empty")))
            } else {
                Ok(trimmed.to_string())
            }
        }
    }
}
