//! # Configuration
//!
//! Notemark configuration is managed by [`confique`], which handles layered
//! loading from a TOML file and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `NOTEMARK_DEFAULT_TITLE`, `NOTEMARK_OWNER`,
//!    `NOTEMARK_STYLE_BOUNDARY_RUNS`.
//! 2. **Config file**: `notemark.toml` in the data directory.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_title` | `Note` | Title given to new notes |
//! | `owner` | `local` | Owner id the CLI reads and writes notes as |
//! | `style_boundary_runs` | `false` | Style markup that runs up to the very end of a note |
//! | `rules` | none | Extra markup rules, appended after the built-in ones |
//!
//! Extra rules look like:
//!
//! ```toml
//! [[rules]]
//! name = "highlight"
//! pattern = "==(\\w+(?:\\s\\w+)*)=="
//! style = "bold"
//! ```

use crate::error::Result;
use crate::markup::{BoundaryPolicy, Rule, RuleTable, Scanner, StyleName};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "notemark.toml";

/// One user-defined markup rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
    pub style: StyleName,
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotemarkConfig {
    /// Title given to newly added notes.
    #[config(default = "Note", env = "NOTEMARK_DEFAULT_TITLE")]
    pub default_title: String,

    /// Owner id used by the command line client.
    #[config(default = "local", env = "NOTEMARK_OWNER")]
    pub owner: String,

    /// Keep markup matches that reach the end of a note. Off by default:
    /// a run whose closing marker is the note's last character stays plain.
    #[config(default = false, env = "NOTEMARK_STYLE_BOUNDARY_RUNS")]
    pub style_boundary_runs: bool,

    /// Extra rules applied after the built-in table.
    pub rules: Option<Vec<RuleConfig>>,
}

impl Default for NotemarkConfig {
    fn default() -> Self {
        Self {
            default_title: "Note".to_string(),
            owner: "local".to_string(),
            style_boundary_runs: false,
            rules: None,
        }
    }
}

impl NotemarkConfig {
    /// Load from the environment and `<dir>/notemark.toml`, falling back to
    /// defaults for anything unset. A missing file is fine.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let config = NotemarkConfig::builder()
            .env()
            .file(dir.as_ref().join(CONFIG_FILENAME))
            .load()?;
        Ok(config)
    }

    /// The built-in rules followed by any configured ones.
    pub fn rule_table(&self) -> RuleTable {
        let extra = self
            .rules
            .iter()
            .flatten()
            .map(|r| Rule::new(r.name.clone(), r.pattern.clone(), r.style.attributes()));
        RuleTable::standard().extended(extra)
    }

    pub fn scanner(&self) -> Scanner {
        if self.style_boundary_runs {
            Scanner::new(BoundaryPolicy::Inclusive)
        } else {
            Scanner::new(BoundaryPolicy::DiscardAtEnd)
        }
    }
}
