//! Browser core for RDF datasets
//!
//! Everything here is a pure computation over an already-resident
//! [`Store`](rdfview_graph::Store): label resolution, the one-hop ontology
//! merge, the entity/property views and the node/edge projection. Parsing
//! and rendering happen elsewhere.
//!
//! # Example
//!
//! ```
//! use rdfview_core::Session;
//! use rdfview_graph::{Store, Term};
//!
//! let mut store = Store::new();
//! store.add_triple(
//!     Term::iri("http://ex.org/a"),
//!     Term::iri("http://ex.org/knows"),
//!     Term::iri("http://ex.org/b"),
//! );
//!
//! let session = Session::load(store);
//! assert_eq!(session.resolver().label_iri("http://ex.org/a"), "a");
//! assert_eq!(session.graph().edges.len(), 0);
//! ```

pub mod error;
pub mod label;
pub mod ontology;
pub mod projection;
mod session;
pub mod syntax;
pub mod view;

pub use error::{CoreError, Result};
pub use label::{
    comment_of, compute_label_predicates, label_of, local_name, DisplayMode, LabelPredicateSet,
    LabelResolver,
};
pub use ontology::{merge_ontology, MergeOutcome, OntologyLog, OntologyRecord};
pub use projection::{project, Edge, GraphProjection, Node};
pub use session::{Session, SessionStats};
pub use syntax::RdfSyntax;
pub use view::{entity_list, property_rows, EntityEntry, PropertyRow, PropertyView};
