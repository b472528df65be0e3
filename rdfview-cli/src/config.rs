//! `rdfview.toml` loading and flag precedence
//!
//! ```toml
//! [view]
//! base_iri = "http://example.org/base"
//! mode = "advanced"
//! format = "json"
//! ontologies = ["vocab/foaf.ttl"]
//! ```
//!
//! Flags win over the file, the file wins over built-in defaults.
//! Relative ontology paths are resolved against the config file's directory.

use crate::cli::{OutputFormat, SourceArgs, ViewArgs};
use crate::error::{CliError, CliResult};
use rdfview_core::{DisplayMode, RdfSyntax};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "rdfview.toml";
pub const DEFAULT_BASE_IRI: &str = "http://example.org/base";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    pub base_iri: Option<String>,
    pub mode: Option<DisplayMode>,
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub ontologies: Vec<PathBuf>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read an explicit `--config`, else `./rdfview.toml` if it exists.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let path = match explicit {
            Some(p) if !p.is_file() => {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            Some(p) => p.to_path_buf(),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if !local.is_file() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let mut config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded config file");

        if let Some(dir) = path.parent() {
            for onto in &mut config.view.ontologies {
                if onto.is_relative() {
                    *onto = dir.join(&*onto);
                }
            }
        }
        Ok(config)
    }
}

/// Effective settings for one command run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_iri: String,
    pub mode: DisplayMode,
    pub format: OutputFormat,
    /// Forced dataset syntax
    pub syntax: Option<RdfSyntax>,
    /// Config-file ontologies first, then `--ontology` flags
    pub ontologies: Vec<PathBuf>,
}

impl Settings {
    pub fn resolve(config: ConfigFile, source: &SourceArgs, view: ViewArgs) -> Self {
        let ViewConfig {
            base_iri,
            mode,
            format,
            ontologies: mut all_ontologies,
        } = config.view;

        let mode = if view.advanced {
            DisplayMode::Advanced
        } else {
            mode.unwrap_or_default()
        };

        all_ontologies.extend(source.ontologies.iter().cloned());

        Self {
            base_iri: source
                .base_iri
                .clone()
                .or(base_iri)
                .unwrap_or_else(|| DEFAULT_BASE_IRI.to_string()),
            mode,
            format: view.format.or(format).unwrap_or_default(),
            syntax: source.syntax,
            ontologies: all_ontologies,
        }
    }
}
