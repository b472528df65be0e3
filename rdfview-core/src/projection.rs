//! Node/edge projection for graph renderers
//!
//! Only relationships among the caller's base entities are shown. Terms that
//! arrived through an ontology merge, object-only IRIs, blank nodes and
//! literal objects never produce nodes or edges.

use crate::label::LabelResolver;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Entity IRI
    pub id: Arc<str>,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// `subject-predicate-object`, for display only; not unique when IRIs
    /// contain `-`
    pub id: String,
    pub source: Arc<str>,
    pub target: Arc<str>,
    pub label: String,
    pub predicate: Arc<str>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphProjection {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphProjection {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Project the statements among `base_entities` into nodes and edges
///
/// Nodes follow `base_entities` order (duplicates dropped); edges follow
/// store order. An edge's identity is exactly its triple, so the same
/// triple asserted in several named graphs yields one edge.
pub fn project(base_entities: &[Arc<str>], resolver: &LabelResolver<'_>) -> GraphProjection {
    let mut members: FxHashSet<&str> = FxHashSet::default();
    let mut nodes = Vec::with_capacity(base_entities.len());
    for entity in base_entities {
        if members.insert(entity.as_ref()) {
            nodes.push(Node {
                id: entity.clone(),
                label: resolver.label_iri(entity),
            });
        }
    }

    let mut seen: FxHashSet<(&Arc<str>, &Arc<str>, &Arc<str>)> = FxHashSet::default();
    let mut edges = Vec::new();
    for st in resolver.store() {
        let (Some(s), Some(p), Some(o)) = (st.s.as_iri_arc(), st.p.as_iri_arc(), st.o.as_iri_arc())
        else {
            continue;
        };
        if !members.contains(s.as_ref()) || !members.contains(o.as_ref()) {
            continue;
        }
        if !seen.insert((s, p, o)) {
            continue;
        }
        edges.push(Edge {
            id: format!("{s}-{p}-{o}"),
            source: s.clone(),
            target: o.clone(),
            label: resolver.label(&st.p),
            predicate: p.clone(),
        });
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "projected graph");
    GraphProjection { nodes, edges }
}
