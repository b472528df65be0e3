//! RDF statement: a triple plus its graph partition

use crate::error::{GraphError, Result};
use crate::Term;
use serde::{Deserialize, Serialize};

/// The named-graph partition a statement belongs to
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphName {
    /// The single implicit default graph
    #[default]
    Default,
    /// A named graph, labelled by an IRI or blank node
    Named(Term),
}

impl GraphName {
    /// Named graph from an IRI
    pub fn named(iri: impl AsRef<str>) -> Self {
        GraphName::Named(Term::iri(iri))
    }

    /// Check if this is the default graph
    pub fn is_default(&self) -> bool {
        matches!(self, GraphName::Default)
    }
}

/// A `(subject, predicate, object)` statement in a graph
///
/// The store does not enforce position typing; parser adapters construct
/// statements through [`Statement::try_new`], which does.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// Subject (IRI or blank node)
    pub s: Term,
    /// Predicate (IRI)
    pub p: Term,
    /// Object (any term)
    pub o: Term,
    /// Graph partition
    #[serde(default, skip_serializing_if = "GraphName::is_default")]
    pub g: GraphName,
}

impl Statement {
    /// Create a statement in the default graph
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self {
            s,
            p,
            o,
            g: GraphName::Default,
        }
    }

    /// Create a statement in a specific graph
    pub fn in_graph(s: Term, p: Term, o: Term, g: GraphName) -> Self {
        Self { s, p, o, g }
    }

    /// Create a statement, checking the position restrictions
    pub fn try_new(s: Term, p: Term, o: Term, g: GraphName) -> Result<Self> {
        let statement = Self::in_graph(s, p, o, g);
        statement.validate()?;
        Ok(statement)
    }

    /// Check subject, predicate and graph-name positions
    pub fn validate(&self) -> Result<()> {
        if !self.s.is_resource() {
            return Err(GraphError::InvalidSubject(self.s.to_string()));
        }
        if !self.p.is_iri() {
            return Err(GraphError::InvalidPredicate(self.p.to_string()));
        }
        if let GraphName::Named(g) = &self.g {
            if !g.is_resource() {
                return Err(GraphError::InvalidGraphName(g.to_string()));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.s, self.p, self.o)?;
        if let GraphName::Named(g) = &self.g {
            write!(f, " {}", g)?;
        }
        write!(f, " .")
    }
}
