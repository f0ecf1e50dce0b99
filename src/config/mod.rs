//! Configuration module for collocate
//!
//! This module handles:
//! - Corpus size and significance level
//! - Part-of-speech templates
//! - Output location

mod analysis_config;

pub use analysis_config::{
    AnalysisConfig, ConfigOverrides, FileConfig, CONFIG_FILENAME, DEFAULT_CORPUS_SIZE,
};
