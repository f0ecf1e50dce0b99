//! Analysis configuration
//!
//! Settings are layered, lowest priority first:
//! 1. Built-in defaults
//! 2. `collocate.toml` (or the file named with `--config`)
//! 3. Environment variables and CLI flags (resolved by clap)
//!
//! # Configuration Format
//!
//! ```toml
//! # collocate.toml
//! corpus_size = 909768
//! alpha = 0.0005
//! output_root = "results"
//! templates = [["J", "N"], ["N", "N"], ["V", "I"], ["V", "N"]]
//! ```

use crate::error::{CollocateError, CollocateResult};
use crate::models::TemplateSet;
use crate::significance::Alpha;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Token count of the reference corpus the bigram table was built from.
pub const DEFAULT_CORPUS_SIZE: u64 = 909_768;

/// Looked up in the working directory when no `--config` is given.
pub const CONFIG_FILENAME: &str = "collocate.toml";

/// Raw contents of a config file. Every key is optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub corpus_size: Option<u64>,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub output_root: Option<PathBuf>,
    #[serde(default)]
    pub templates: Option<TemplateSet>,
}

/// Values that take priority over any file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub corpus_size: Option<u64>,
    pub alpha: Option<f64>,
    pub output_root: Option<PathBuf>,
}

/// Fully resolved settings threaded through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Total token count `N`
    pub corpus_size: u64,
    /// Significance level for the t and chi-square filters
    pub alpha: f64,
    /// Allowed `(pos1, pos2)` pairs
    pub templates: TemplateSet,
    /// Directory under which `output_<word>/` is created
    pub output_root: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            corpus_size: DEFAULT_CORPUS_SIZE,
            alpha: Alpha::DEFAULT,
            templates: TemplateSet::default(),
            output_root: PathBuf::from("."),
        }
    }
}

impl AnalysisConfig {
    /// Resolve the config from defaults, a config file and overrides.
    ///
    /// An explicitly named file must exist and parse. The implicit
    /// `collocate.toml` in `search_dir` is optional and a broken one is only
    /// warned about.
    pub fn load(
        explicit: Option<&Path>,
        search_dir: &Path,
        overrides: ConfigOverrides,
    ) -> CollocateResult<Self> {
        let file = match explicit {
            Some(path) => Some(load_config_file(path)?),
            None => {
                let implicit = search_dir.join(CONFIG_FILENAME);
                if implicit.exists() {
                    match load_config_file(&implicit) {
                        Ok(file) => Some(file),
                        Err(e) => {
                            warn!("Ignoring {}: {}", implicit.display(), e);
                            None
                        }
                    }
                } else {
                    debug!("No {} found, using defaults", CONFIG_FILENAME);
                    None
                }
            }
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.merge_file(file);
        }
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    fn merge_file(&mut self, file: FileConfig) {
        if let Some(n) = file.corpus_size {
            self.corpus_size = n;
        }
        if let Some(alpha) = file.alpha {
            self.alpha = alpha;
        }
        if let Some(root) = file.output_root {
            self.output_root = root;
        }
        if let Some(templates) = file.templates {
            self.templates = templates;
        }
    }

    fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(n) = overrides.corpus_size {
            self.corpus_size = n;
        }
        if let Some(alpha) = overrides.alpha {
            self.alpha = alpha;
        }
        if let Some(root) = overrides.output_root {
            self.output_root = root;
        }
    }

    /// Reject settings no computation could run with.
    pub fn validate(&self) -> CollocateResult<()> {
        if self.corpus_size == 0 {
            return Err(CollocateError::InvalidCorpusSize(self.corpus_size));
        }
        Alpha::new(self.alpha)?;
        if self.templates.is_empty() {
            return Err(CollocateError::Config(
                "at least one part-of-speech template is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn alpha(&self) -> CollocateResult<Alpha> {
        Alpha::new(self.alpha)
    }

    /// `<output_root>/output_<word>`. Words with path separators would
    /// land outside `output_root` and are rejected.
    pub fn output_dir(&self, word: &str) -> CollocateResult<PathBuf> {
        if word.contains(['/', '\\', '\0']) {
            return Err(CollocateError::InvalidTargetWord(word.to_string()));
        }
        Ok(self.output_root.join(format!("output_{}", word)))
    }
}

fn load_config_file(path: &Path) -> CollocateResult<FileConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CollocateError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let file: FileConfig = toml::from_str(&content)
        .map_err(|e| CollocateError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
    debug!("Loaded config from {}", path.display());
    Ok(file)
}
