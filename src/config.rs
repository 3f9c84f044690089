//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-erd.toml` in current directory
//! 4. `~/.config/sql-erd/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [files]
//! schema = "schema.sql"      # input file looked up in every folder
//! diagram = "ERD.mmd"        # generated diagram
//! markdown = "ERD.md"        # document whose mermaid block is refreshed
//!
//! [markdown]
//! update = true
//! ```
//!
//! # Environment Variables
//!
//! The file names can also come from `SQL_ERD_SCHEMA_FILE`,
//! `SQL_ERD_DIAGRAM_FILE` and `SQL_ERD_MARKDOWN_FILE`. Clap reads them as
//! fallbacks for the matching `generate` flags, so they land in
//! [`crate::app::GenerateParams`] and beat the config files.

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub files:    FilesConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig
}

/// File names used inside every processed folder
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub schema:   String,
    pub diagram:  String,
    pub markdown: String
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            schema:   String::from("schema.sql"),
            diagram:  String::from("ERD.mmd"),
            markdown: String::from("ERD.md")
        }
    }
}

/// Markdown refresh settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Refresh the mermaid block of an existing markdown file
    pub update: bool
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            update: true
        }
    }
}

impl Config {
    /// Load configuration from files
    ///
    /// Priority (highest to lowest):
    /// 1. Config file in current directory (.sql-erd.toml)
    /// 2. Config file in home directory (~/.config/sql-erd/config.toml)
    /// 3. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-erd")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        let local_config = PathBuf::from(".sql-erd.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }
}
