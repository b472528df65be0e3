//! StatementSink trait for event-driven store construction
//!
//! Parsers are external collaborators: they call methods like `term_iri()`
//! and `emit_statement()` on a sink without knowing the concrete sink type.
//! `StoreSink` is the standard sink and collects events into a [`Store`].

use crate::error::{GraphError, Result};
use crate::{Datatype, GraphName, Statement, Store, Term};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Opaque term identifier for efficient statement emission
///
/// `TermId` is only valid within a single sink session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermId(pub(crate) u32);

/// Event-driven interface for statement-set construction
///
/// # Example
///
/// ```
/// use rdfview_graph::{StatementSink, StoreSink};
///
/// let mut sink = StoreSink::new();
///
/// let alice = sink.term_iri("http://example.org/alice");
/// let name = sink.term_iri("http://xmlns.com/foaf/0.1/name");
/// let alice_name = sink.term_literal("Alice", None, None);
///
/// sink.emit_statement(alice, name, alice_name, None).unwrap();
///
/// let store = sink.finish();
/// assert_eq!(store.len(), 1);
/// ```
pub trait StatementSink {
    /// Called when a base IRI is declared
    fn on_base(&mut self, base_iri: &str);

    /// Called when a prefix is declared
    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str);

    /// Create an IRI term and return its ID
    ///
    /// The IRI should be fully expanded (not prefixed).
    fn term_iri(&mut self, iri: &str) -> TermId;

    /// Create a blank node term and return its ID
    ///
    /// If `label` is Some, the blank node has that label (consistent
    /// identity across references). If None, generate a fresh blank node.
    fn term_blank(&mut self, label: Option<&str>) -> TermId;

    /// Create a literal term from its lexical form
    ///
    /// A missing datatype means `xsd:string`, or `rdf:langString` when a
    /// language is given.
    fn term_literal(&mut self, value: &str, datatype: Option<&str>, language: Option<&str>)
        -> TermId;

    /// Emit a statement using previously created term IDs
    ///
    /// Returns whether the statement was new to the sink.
    fn emit_statement(
        &mut self,
        subject: TermId,
        predicate: TermId,
        object: TermId,
        graph: Option<TermId>,
    ) -> Result<bool>;
}

/// A sink that collects statements into a [`Store`]
///
/// IRIs are interned so every occurrence of the same IRI shares one
/// allocation.
#[derive(Debug, Default)]
pub struct StoreSink {
    store: Store,
    base: Option<String>,
    prefixes: BTreeMap<String, String>,
    terms: Vec<Term>,
    iri_ids: FxHashMap<Arc<str>, TermId>,
    blank_labels: FxHashMap<String, TermId>,
    blank_counter: u32,
    /// Prepended to every blank label
    blank_scope: Option<String>,
}

impl StoreSink {
    /// Create a new collector sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink with a pre-configured base IRI
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
            ..Default::default()
        }
    }

    /// Scope blank node labels with a prefix
    ///
    /// Two documents parsed with different scopes never share blank nodes,
    /// even if both use `_:b0`.
    pub fn with_blank_scope(mut self, scope: impl Into<String>) -> Self {
        self.blank_scope = Some(scope.into());
        self
    }

    /// The base IRI, if declared or configured
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Prefix mappings seen so far (deterministic order)
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    /// The store being built
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Finish building and return the store
    pub fn finish(self) -> Store {
        self.store
    }

    fn get_term(&self, id: TermId) -> Result<&Term> {
        self.terms
            .get(id.0 as usize)
            .ok_or(GraphError::UnknownTerm(id.0))
    }

    fn add_term(&mut self, term: Term) -> TermId {
        let id = TermId(self.terms.len() as u32);
        self.terms.push(term);
        id
    }

    fn scoped(&self, label: &str) -> String {
        match &self.blank_scope {
            Some(scope) => format!("{scope}{label}"),
            None => label.to_string(),
        }
    }
}

impl StatementSink for StoreSink {
    fn on_base(&mut self, base_iri: &str) {
        self.base = Some(base_iri.to_string());
    }

    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.prefixes
            .insert(prefix.to_string(), namespace_iri.to_string());
    }

    fn term_iri(&mut self, iri: &str) -> TermId {
        if let Some(&id) = self.iri_ids.get(iri) {
            return id;
        }
        let shared: Arc<str> = Arc::from(iri);
        let id = self.add_term(Term::iri_shared(shared.clone()));
        self.iri_ids.insert(shared, id);
        id
    }

    fn term_blank(&mut self, label: Option<&str>) -> TermId {
        match label {
            Some(l) => {
                if let Some(&id) = self.blank_labels.get(l) {
                    return id;
                }
                let id = self.add_term(Term::blank(self.scoped(l)));
                self.blank_labels.insert(l.to_string(), id);
                id
            }
            None => {
                self.blank_counter += 1;
                let label = self.scoped(&format!("gen{}", self.blank_counter));
                self.add_term(Term::blank(label))
            }
        }
    }

    fn term_literal(
        &mut self,
        value: &str,
        datatype: Option<&str>,
        language: Option<&str>,
    ) -> TermId {
        let term = match (language, datatype) {
            (Some(lang), _) => Term::lang_string(value, lang),
            (None, Some(dt)) => Term::typed(value, Datatype::from_iri(dt)),
            (None, None) => Term::string(value),
        };
        self.add_term(term)
    }

    fn emit_statement(
        &mut self,
        subject: TermId,
        predicate: TermId,
        object: TermId,
        graph: Option<TermId>,
    ) -> Result<bool> {
        let s = self.get_term(subject)?.clone();
        let p = self.get_term(predicate)?.clone();
        let o = self.get_term(object)?.clone();
        let g = match graph {
            Some(id) => GraphName::Named(self.get_term(id)?.clone()),
            None => GraphName::Default,
        };
        let statement = Statement::try_new(s, p, o, g)?;
        Ok(self.store.add(statement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_sink_basic() {
        let mut sink = StoreSink::new();

        let s = sink.term_iri("http://example.org/alice");
        let p = sink.term_iri("http://xmlns.com/foaf/0.1/name");
        let o = sink.term_literal("Alice", None, None);

        assert!(sink.emit_statement(s, p, o, None).unwrap());

        let store = sink.finish();
        assert_eq!(store.len(), 1);

        let st = store.iter().next().unwrap();
        assert_eq!(st.s.as_iri(), Some("http://example.org/alice"));
        assert_eq!(st.p.as_iri(), Some("http://xmlns.com/foaf/0.1/name"));
        assert_eq!(st.o, Term::string("Alice"));
    }

    #[test]
    fn test_iris_are_interned() {
        let mut sink = StoreSink::new();
        let a = sink.term_iri("http://example.org/a");
        let b = sink.term_iri("http://example.org/a");
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_emission_collapses() {
        let mut sink = StoreSink::new();
        let s = sink.term_iri("http://example.org/s");
        let p = sink.term_iri("http://example.org/p");
        let o = sink.term_literal("x", None, None);
        let o2 = sink.term_literal("x", None, None);

        assert!(sink.emit_statement(s, p, o, None).unwrap());
        assert!(!sink.emit_statement(s, p, o2, None).unwrap());
        assert_eq!(sink.store().len(), 1);
    }

    #[test]
    fn test_blank_nodes() {
        let mut sink = StoreSink::new();

        let b1 = sink.term_blank(Some("b0"));
        let b2 = sink.term_blank(Some("b0"));
        assert_eq!(b1, b2);

        let b3 = sink.term_blank(Some("b1"));
        assert_ne!(b1, b3);

        let anon1 = sink.term_blank(None);
        let anon2 = sink.term_blank(None);
        assert_ne!(anon1, anon2);
    }

    #[test]
    fn test_blank_scope() {
        let mut sink = StoreSink::new().with_blank_scope("onto1.");
        let b = sink.term_blank(Some("b0"));
        let p = sink.term_iri("http://example.org/p");
        let o = sink.term_literal("x", None, None);
        sink.emit_statement(b, p, o, None).unwrap();

        let store = sink.finish();
        let st = store.iter().next().unwrap();
        assert_eq!(st.s, Term::blank("onto1.b0"));
    }

    #[test]
    fn test_base_and_prefixes() {
        let mut sink = StoreSink::with_base("http://example.org/base");
        assert_eq!(sink.base(), Some("http://example.org/base"));

        sink.on_base("http://example.org/");
        sink.on_prefix("foaf", "http://xmlns.com/foaf/0.1/");

        assert_eq!(sink.base(), Some("http://example.org/"));
        assert_eq!(
            sink.prefixes().get("foaf").map(String::as_str),
            Some("http://xmlns.com/foaf/0.1/")
        );
    }

    #[test]
    fn test_literal_forms() {
        let mut sink = StoreSink::new();
        let s = sink.term_iri("http://example.org/test");
        let p = sink.term_iri("http://example.org/value");

        let lang = sink.term_literal("Alicia", None, Some("es"));
        let typed = sink.term_literal("42", Some(rdfview_vocab::xsd::INTEGER), None);
        sink.emit_statement(s, p, lang, None).unwrap();
        sink.emit_statement(s, p, typed, None).unwrap();

        let store = sink.finish();
        let objects: Vec<_> = store.iter().map(|st| st.o.clone()).collect();
        assert_eq!(objects, vec![Term::lang_string("Alicia", "es"), Term::integer(42)]);
    }

    #[test]
    fn test_named_graph() {
        let mut sink = StoreSink::new();
        let s = sink.term_iri("http://example.org/s");
        let p = sink.term_iri("http://example.org/p");
        let o = sink.term_iri("http://example.org/o");
        let g = sink.term_iri("http://example.org/g");
        sink.emit_statement(s, p, o, Some(g)).unwrap();

        let store = sink.finish();
        assert_eq!(
            store.iter().next().unwrap().g,
            GraphName::named("http://example.org/g")
        );
    }

    #[test]
    fn test_invalid_positions_are_rejected() {
        let mut sink = StoreSink::new();
        let lit = sink.term_literal("x", None, None);
        let p = sink.term_iri("http://example.org/p");
        let o = sink.term_iri("http://example.org/o");

        let err = sink.emit_statement(lit, p, o, None).unwrap_err();
        assert!(matches!(err, GraphError::InvalidSubject(_)));
        assert!(sink.store().is_empty());
    }

    #[test]
    fn test_unknown_term_id() {
        let mut sink = StoreSink::new();
        let p = sink.term_iri("http://example.org/p");
        let err = sink
            .emit_statement(TermId(99), p, p, None)
            .unwrap_err();
        assert_eq!(err, GraphError::UnknownTerm(99));
    }
}
