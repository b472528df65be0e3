//! Literal datatype representation
//!
//! Datatypes are always explicit - there is no "untyped" literal. Plain
//! strings default to `xsd:string`, and language-tagged strings use
//! `rdf:langString`. The store carries datatypes through unchanged; nothing
//! in the browser core interprets them beyond equality.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Common XSD and RDF datatype IRIs (re-exported from vocab crate)
pub mod iri {
    pub use rdfview_vocab::rdf::LANG_STRING as RDF_LANG_STRING;
    pub use rdfview_vocab::xsd::{INTEGER as XSD_INTEGER, STRING as XSD_STRING};
}

/// RDF literal datatype, always an expanded IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(iri::RDF_LANG_STRING)
    }

    /// Get the IRI of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }

    /// Check if this is the rdf:langString datatype
    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_LANG_STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_constructors() {
        assert_eq!(Datatype::xsd_string().as_iri(), iri::XSD_STRING);
        assert_eq!(Datatype::xsd_integer().as_iri(), iri::XSD_INTEGER);
        assert_eq!(Datatype::rdf_lang_string().as_iri(), iri::RDF_LANG_STRING);
    }

    #[test]
    fn test_is_checks() {
        assert!(Datatype::xsd_string().is_xsd_string());
        assert!(!Datatype::xsd_integer().is_xsd_string());

        assert!(Datatype::rdf_lang_string().is_lang_string());
        assert!(!Datatype::xsd_string().is_lang_string());
    }

    #[test]
    fn test_equality_is_by_iri() {
        assert_eq!(Datatype::from_iri(iri::XSD_STRING), Datatype::xsd_string());
        assert_ne!(Datatype::xsd_string(), Datatype::xsd_integer());
    }
}
