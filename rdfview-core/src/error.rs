//! Error types for the browser core

use rdfview_graph::GraphError;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("unknown RDF syntax '{0}' (expected turtle, ntriples, jsonld, n3 or rdfxml)")]
    UnknownSyntax(String),

    #[error("unknown display mode '{0}' (expected normal or advanced)")]
    UnknownDisplayMode(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
