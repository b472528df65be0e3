//! One-hop ontology merge
//!
//! Only ontology statements that touch an IRI already present in the base
//! store are copied in. Statements that connect two ontology-only terms are
//! never pulled in, even when each term is reachable on its own; there is
//! no closure computation.
//!
//! The referenced set is taken from the store as it stands when the merge
//! runs, so a second ontology sees the IRIs contributed by the first.

use rdfview_graph::{Statement, Store, Term};
use rdfview_vocab::{owl, rdf};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Result of a single merge
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    /// Number of candidate statements selected from the ontology
    pub added_count: usize,
    /// Number of candidates that were new to the base store
    pub inserted: usize,
}

/// Every IRI appearing as subject, predicate or object in `store`
pub fn referenced_iris(store: &Store) -> FxHashSet<Arc<str>> {
    let mut referenced = FxHashSet::default();
    for st in store {
        for term in [&st.s, &st.p, &st.o] {
            if let Some(iri) = term.as_iri_arc() {
                referenced.insert(iri.clone());
            }
        }
    }
    referenced
}

fn touches(st: &Statement, referenced: &FxHashSet<Arc<str>>) -> bool {
    [&st.s, &st.p, &st.o]
        .into_iter()
        .filter_map(|t| t.as_iri())
        .any(|iri| referenced.contains(iri))
}

/// Merge the reachable part of `ontology` into `base`
///
/// `added_count` counts candidates, not newly inserted statements. Nothing
/// is ever removed from `base`.
pub fn merge_ontology(base: &mut Store, ontology: &Store) -> MergeOutcome {
    let referenced = referenced_iris(base);

    let candidates: Vec<Statement> = ontology
        .iter()
        .filter(|st| touches(st, &referenced))
        .cloned()
        .collect();

    let added_count = candidates.len();
    let mut inserted = 0;
    for st in candidates {
        if base.add(st) {
            inserted += 1;
        }
    }

    debug!(
        referenced = referenced.len(),
        ontology_statements = ontology.len(),
        candidates = added_count,
        inserted,
        "merged ontology"
    );

    MergeOutcome {
        added_count,
        inserted,
    }
}

/// The IRI an ontology document names itself with `a owl:Ontology`
///
/// The first such IRI subject in store order; blank-node headers are ignored.
pub fn declared_ontology_iri(ontology: &Store) -> Option<Arc<str>> {
    let rdf_type = Term::iri(rdf::TYPE);
    let class = Term::iri(owl::ONTOLOGY);
    ontology
        .matching(None, Some(&rdf_type), Some(&class), None)
        .find_map(|st| st.s.as_iri_arc().cloned())
}

/// Audit entry for one merged ontology
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OntologyRecord {
    pub name: String,
    pub base_iri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ontology_iri: Option<String>,
    pub merged_statement_count: usize,
}

/// Append-only list of merged ontologies, in merge order
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct OntologyLog {
    records: Vec<OntologyRecord>,
}

impl OntologyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: OntologyRecord) {
        self.records.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OntologyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a OntologyLog {
    type Item = &'a OntologyRecord;
    type IntoIter = std::slice::Iter<'a, OntologyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
