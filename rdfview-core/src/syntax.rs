//! Serialization syntaxes the loader can be asked for
//!
//! The browser core never parses text; this table only tells the parser
//! collaborator which reader to use for a file.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RdfSyntax {
    Turtle,
    #[serde(rename = "ntriples")]
    NTriples,
    #[serde(rename = "jsonld")]
    JsonLd,
    N3,
    #[serde(rename = "rdfxml")]
    RdfXml,
}

impl RdfSyntax {
    pub const ALL: [RdfSyntax; 5] = [
        RdfSyntax::Turtle,
        RdfSyntax::NTriples,
        RdfSyntax::JsonLd,
        RdfSyntax::N3,
        RdfSyntax::RdfXml,
    ];

    /// Pick a syntax from a file name's extension
    ///
    /// Unknown or missing extensions fall back to RDF/XML.
    pub fn from_filename(name: impl AsRef<Path>) -> Self {
        let ext = name
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("ttl") => RdfSyntax::Turtle,
            Some("nt") => RdfSyntax::NTriples,
            Some("json") | Some("jsonld") => RdfSyntax::JsonLd,
            Some("n3") => RdfSyntax::N3,
            _ => RdfSyntax::RdfXml,
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            RdfSyntax::Turtle => "text/turtle",
            RdfSyntax::NTriples => "application/n-triples",
            RdfSyntax::JsonLd => "application/ld+json",
            RdfSyntax::N3 => "text/n3",
            RdfSyntax::RdfXml => "application/rdf+xml",
        }
    }

    /// Name accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            RdfSyntax::Turtle => "turtle",
            RdfSyntax::NTriples => "ntriples",
            RdfSyntax::JsonLd => "jsonld",
            RdfSyntax::N3 => "n3",
            RdfSyntax::RdfXml => "rdfxml",
        }
    }
}

impl FromStr for RdfSyntax {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(RdfSyntax::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(RdfSyntax::NTriples),
            "jsonld" | "json-ld" => Ok(RdfSyntax::JsonLd),
            "n3" => Ok(RdfSyntax::N3),
            "rdfxml" | "rdf/xml" | "xml" => Ok(RdfSyntax::RdfXml),
            other => Err(CoreError::UnknownSyntax(other.to_string())),
        }
    }
}

impl std::fmt::Display for RdfSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
