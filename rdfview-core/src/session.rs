//! Browsing session state
//!
//! A `Session` owns one store plus everything derived from it. The label
//! predicate set is recomputed after every load and merge and is never
//! cached inside the store.

use crate::error::Result;
use crate::label::{compute_label_predicates, DisplayMode, LabelPredicateSet, LabelResolver};
use crate::ontology::{self, MergeOutcome, OntologyLog, OntologyRecord};
use crate::projection::{self, GraphProjection};
use crate::view::{self, EntityEntry, PropertyView};
use rdfview_graph::{Statement, Store, Term};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Counters reported by `Session::stats`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub statements: usize,
    pub entities: usize,
    pub base_entities: usize,
    pub label_predicates: usize,
    pub ontology_count: usize,
}

#[derive(Debug)]
pub struct Session {
    store: Store,
    /// Entities present at dataset load; ontology merges never change this
    base_entities: Vec<Arc<str>>,
    label_predicates: LabelPredicateSet,
    ontologies: OntologyLog,
    mode: DisplayMode,
}

impl Session {
    /// Start a session over a freshly loaded dataset
    pub fn load(store: Store) -> Self {
        let base_entities = view::entity_list(&store);
        let label_predicates = compute_label_predicates(&store);
        debug!(
            statements = store.len(),
            entities = base_entities.len(),
            label_predicates = label_predicates.len(),
            "loaded dataset"
        );
        Self {
            store,
            base_entities,
            label_predicates,
            ontologies: OntologyLog::new(),
            mode: DisplayMode::default(),
        }
    }

    /// Start a session from loose statements, checking term positions
    pub fn from_statements<I>(statements: I) -> Result<Self>
    where
        I: IntoIterator<Item = Statement>,
    {
        let mut store = Store::new();
        for st in statements {
            st.validate()?;
            store.add(st);
        }
        Ok(Self::load(store))
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Merge the reachable part of an ontology and record it
    pub fn merge_ontology(
        &mut self,
        name: impl Into<String>,
        base_iri: impl Into<String>,
        ontology: &Store,
    ) -> MergeOutcome {
        let ontology_iri = ontology::declared_ontology_iri(ontology).map(|iri| iri.to_string());
        let outcome = ontology::merge_ontology(&mut self.store, ontology);
        self.label_predicates = compute_label_predicates(&self.store);
        self.ontologies.push(OntologyRecord {
            name: name.into(),
            base_iri: base_iri.into(),
            ontology_iri,
            merged_statement_count: outcome.added_count,
        });
        outcome
    }

    /// The entity list captured when the dataset was loaded
    pub fn entities(&self) -> &[Arc<str>] {
        &self.base_entities
    }

    /// The entity shown when none is requested
    pub fn default_entity(&self) -> Option<&Arc<str>> {
        self.base_entities.first()
    }

    pub fn label_predicates(&self) -> &LabelPredicateSet {
        &self.label_predicates
    }

    pub fn ontologies(&self) -> &OntologyLog {
        &self.ontologies
    }

    pub fn resolver(&self) -> LabelResolver<'_> {
        LabelResolver::new(&self.store, &self.label_predicates, self.mode)
    }

    pub fn entity_entries(&self) -> Vec<EntityEntry> {
        view::entity_entries(&self.base_entities, &self.resolver())
    }

    pub fn property_view(&self, iri: &str) -> PropertyView {
        PropertyView::build(&self.resolver(), &Term::iri(iri))
    }

    /// Projection over the base entities
    pub fn graph(&self) -> GraphProjection {
        projection::project(&self.base_entities, &self.resolver())
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            statements: self.store.len(),
            entities: view::entity_list(&self.store).len(),
            base_entities: self.base_entities.len(),
            label_predicates: self.label_predicates.len(),
            ontology_count: self.ontologies.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use rdfview_graph::GraphError;
    use rdfview_vocab::rdfs;

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://ex.org/{local}"))
    }

    fn dataset() -> Store {
        let mut store = Store::new();
        store.add_triple(ex("a"), ex("knows"), ex("b"));
        store.add_triple(ex("b"), ex("age"), Term::integer(42));
        store
    }

    #[test]
    fn test_load_captures_base_entities() {
        let session = Session::load(dataset());
        let entities: Vec<_> = session.entities().iter().map(|e| e.as_ref()).collect();
        assert_eq!(entities, vec!["http://ex.org/a", "http://ex.org/b"]);
        assert_eq!(
            session.default_entity().map(|e| e.as_ref()),
            Some("http://ex.org/a")
        );
    }

    #[test]
    fn test_merge_keeps_base_entities_and_refreshes_labels() {
        let mut session = Session::load(dataset());

        let mut ontology = Store::new();
        ontology.add_triple(ex("knows"), Term::iri(rdfs::SUB_PROPERTY_OF), Term::iri(rdfs::LABEL));
        ontology.add_triple(ex("q"), ex("relatesTo"), ex("b"));

        let outcome = session.merge_ontology("onto.ttl", "http://example.org/base", &ontology);
        assert_eq!(outcome.added_count, 2);

        assert_eq!(session.entities().len(), 2);
        assert!(session.label_predicates().contains("http://ex.org/knows"));
        assert_eq!(session.resolver().label(&ex("a")), "http://ex.org/b");

        let stats = session.stats();
        assert_eq!(stats.statements, 4);
        assert_eq!(stats.entities, 4);
        assert_eq!(stats.base_entities, 2);
        assert_eq!(stats.label_predicates, 2);
        assert_eq!(stats.ontology_count, 1);

        let record = session.ontologies().iter().next().unwrap();
        assert_eq!(record.name, "onto.ttl");
        assert_eq!(record.ontology_iri, None);
        assert_eq!(record.merged_statement_count, 2);
    }

    #[test]
    fn test_merge_records_declared_ontology_iri() {
        let mut session = Session::load(dataset());
        let mut ontology = Store::new();
        ontology.add_triple(
            Term::iri("http://ex.org/vocab"),
            Term::iri(rdfview_vocab::rdf::TYPE),
            Term::iri(rdfview_vocab::owl::ONTOLOGY),
        );
        ontology.add_triple(ex("knows"), Term::iri(rdfs::LABEL), Term::string("knows"));

        session.merge_ontology("vocab.ttl", "http://example.org/base", &ontology);
        let record = session.ontologies().iter().next().unwrap();
        assert_eq!(record.ontology_iri.as_deref(), Some("http://ex.org/vocab"));
        assert_eq!(record.base_iri, "http://example.org/base");
    }

    #[test]
    fn test_graph_ignores_merged_entities() {
        let mut session = Session::load(dataset());
        let mut ontology = Store::new();
        ontology.add_triple(ex("q"), ex("relatesTo"), ex("b"));
        session.merge_ontology("onto.ttl", "http://example.org/base", &ontology);

        let graph = session.graph();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_mode_switch() {
        let mut session = Session::load(dataset());
        assert_eq!(session.property_view("http://ex.org/a").heading, "a");

        session.set_mode(DisplayMode::Advanced);
        assert_eq!(session.mode(), DisplayMode::Advanced);
        assert_eq!(
            session.property_view("http://ex.org/a").heading,
            "http://ex.org/a"
        );
    }

    #[test]
    fn test_from_statements_validates_positions() {
        let ok = Session::from_statements(vec![Statement::new(ex("a"), ex("p"), ex("b"))]);
        assert_eq!(ok.unwrap().store().len(), 1);

        let err = Session::from_statements(vec![Statement::new(
            Term::string("a"),
            ex("p"),
            ex("b"),
        )])
        .unwrap_err();
        assert!(matches!(err, CoreError::Graph(GraphError::InvalidSubject(_))));
    }

    #[test]
    fn test_empty_session() {
        let session = Session::load(Store::new());
        assert!(session.default_entity().is_none());
        assert!(session.graph().is_empty());
        assert_eq!(session.entity_entries(), vec![]);
    }
}
