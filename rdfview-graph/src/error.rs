//! Error types for statement construction

/// Error type for building statements from parser output
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Subject is a literal
    #[error("Invalid subject {0}: subjects must be IRIs or blank nodes")]
    InvalidSubject(String),

    /// Predicate is not an IRI
    #[error("Invalid predicate {0}: predicates must be IRIs")]
    InvalidPredicate(String),

    /// Named graph label is a literal
    #[error("Invalid graph name {0}: named graphs must be IRIs or blank nodes")]
    InvalidGraphName(String),

    /// A sink was handed a term id it never issued
    #[error("Unknown term id {0}")]
    UnknownTerm(u32),
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
