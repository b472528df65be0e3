//! In-memory RDF statement store
//!
//! This crate provides the data model for the browser core and the store
//! that holds it:
//!
//! - [`Term`] - a closed IRI / blank node / literal sum type
//! - [`Statement`] - a triple plus its [`GraphName`]
//! - [`Store`] - an insertion-ordered set of statements with pattern matching
//! - [`StatementSink`] / [`StoreSink`] - the boundary external parsers emit into
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype.
//!    Plain strings use `xsd:string`, language-tagged strings use
//!    `rdf:langString`.
//!
//! 3. **Set semantics, insertion order** - `Store::add` ignores structural
//!    duplicates, and every query yields statements in the order they were
//!    first added.
//!
//! # Example
//!
//! ```
//! use rdfview_graph::{Store, Term};
//!
//! let mut store = Store::new();
//! store.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//!
//! let alice = Term::iri("http://example.org/alice");
//! assert_eq!(store.matching(Some(&alice), None, None, None).count(), 1);
//! ```

pub mod datatype;
pub mod error;
mod sink;
mod statement;
mod store;
mod term;

pub use datatype::Datatype;
pub use error::{GraphError, Result};
pub use sink::{StatementSink, StoreSink, TermId};
pub use statement::{GraphName, Statement};
pub use store::{Matches, Store};
pub use term::{BlankId, Term, TermKind};
