use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rdfview_core::RdfSyntax;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rdfview", about = "Browse RDF graphs from the terminal", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file (defaults to ./rdfview.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Dataset and ontology inputs shared by every command
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// RDF file to browse
    pub file: PathBuf,

    /// Ontology file merged after the dataset (repeatable)
    #[arg(long = "ontology", short = 'o', value_name = "FILE")]
    pub ontologies: Vec<PathBuf>,

    /// Dataset syntax; detected from the file extension if omitted
    #[arg(long, value_parser = syntax_parser())]
    pub syntax: Option<RdfSyntax>,

    /// Base IRI for resolving relative references
    #[arg(long, value_name = "IRI")]
    pub base_iri: Option<String>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ViewArgs {
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show raw identifiers instead of labels
    #[arg(long)]
    pub advanced: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the entities of a dataset
    Entities {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show the properties of one entity
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Entity IRI (defaults to the first entity)
        #[arg(value_name = "IRI")]
        entity: Option<String>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Print the node/edge graph among the dataset's entities
    Graph {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show session statistics and merged ontologies
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Accepts the names and aliases `RdfSyntax::from_str` knows.
fn syntax_parser() -> impl TypedValueParser<Value = RdfSyntax> {
    let values = RdfSyntax::ALL.map(|syntax| {
        let value = PossibleValue::new(syntax.name());
        match syntax {
            RdfSyntax::Turtle => value.alias("ttl"),
            RdfSyntax::NTriples => value.aliases(["n-triples", "nt"]),
            RdfSyntax::JsonLd => value.alias("json-ld"),
            RdfSyntax::N3 => value,
            RdfSyntax::RdfXml => value.aliases(["rdf/xml", "xml"]),
        }
    });
    PossibleValuesParser::new(values).try_map(|name| name.parse::<RdfSyntax>())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
