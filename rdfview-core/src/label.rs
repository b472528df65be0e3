//! Entity label and annotation resolution
//!
//! A [`LabelPredicateSet`] is a pure function of the store: it is seeded with
//! `rdfs:label` and extended with every IRI declared
//! `rdfs:subPropertyOf rdfs:label`. Callers recompute it after every load
//! or merge; the store never caches it.
//!
//! Resolution order for a display label:
//! 1. `Advanced` mode returns the raw identifier.
//! 2. The first label predicate (set order) with a statement on the entity
//!    wins, and the first such statement (store order) supplies the value.
//! 3. Otherwise the last non-empty `/` or `#` segment of the IRI.
//! 4. Otherwise the IRI itself.

use crate::error::CoreError;
use rdfview_graph::{Store, Term};
use rdfview_vocab::rdfs;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// How entity names are shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Resolve labels through the label predicates
    #[default]
    Normal,
    /// Show raw identifiers
    Advanced,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Normal => "normal",
            DisplayMode::Advanced => "advanced",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(DisplayMode::Normal),
            "advanced" | "raw" => Ok(DisplayMode::Advanced),
            other => Err(CoreError::UnknownDisplayMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicates recognized as producing a human label
///
/// Iteration order is insertion order: `rdfs:label` first, then
/// sub-properties in the order their declarations appear in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelPredicateSet {
    order: Vec<Term>,
    members: FxHashSet<Arc<str>>,
}

impl LabelPredicateSet {
    /// The fixed seed set `{rdfs:label}`
    pub fn seed() -> Self {
        let mut set = Self {
            order: Vec::new(),
            members: FxHashSet::default(),
        };
        set.insert(Arc::from(rdfs::LABEL));
        set
    }

    /// Add a predicate IRI; returns whether it was new
    pub fn insert(&mut self, iri: Arc<str>) -> bool {
        if !self.members.insert(iri.clone()) {
            return false;
        }
        self.order.push(Term::iri_shared(iri));
        true
    }

    pub fn contains(&self, iri: &str) -> bool {
        self.members.contains(iri)
    }

    /// Predicate IRIs in resolution order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().filter_map(Term::as_iri)
    }

    /// Predicates as terms, ready for pattern matching
    pub fn terms(&self) -> &[Term] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for LabelPredicateSet {
    fn default() -> Self {
        Self::seed()
    }
}

/// Compute the label predicates for a store
///
/// Non-IRI subjects of `rdfs:subPropertyOf rdfs:label` are ignored.
pub fn compute_label_predicates(store: &Store) -> LabelPredicateSet {
    let mut set = LabelPredicateSet::seed();
    let sub_property_of = Term::iri(rdfs::SUB_PROPERTY_OF);
    let label = Term::iri(rdfs::LABEL);

    for st in store.matching(None, Some(&sub_property_of), Some(&label), None) {
        if let Some(iri) = st.s.as_iri_arc() {
            set.insert(iri.clone());
        }
    }
    set
}

/// Last non-empty segment of an IRI split on `/` or `#`
///
/// Returns the IRI unchanged when it has no such segment.
pub fn local_name(iri: &str) -> &str {
    iri.rsplit(['/', '#'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(iri)
}

/// Display label for a term
///
/// Never fails; worst case it returns the raw identifier.
pub fn label_of(
    store: &Store,
    predicates: &LabelPredicateSet,
    entity: &Term,
    mode: DisplayMode,
) -> String {
    if mode == DisplayMode::Advanced {
        return entity.value().into_owned();
    }

    let iri = match entity {
        Term::Literal { value, .. } => return value.to_string(),
        Term::Iri(iri) => Some(iri.as_ref()),
        Term::BlankNode(_) => None,
    };

    for predicate in predicates.terms() {
        if let Some(st) = store
            .matching(Some(entity), Some(predicate), None, None)
            .next()
        {
            return st.o.value().into_owned();
        }
    }

    match iri {
        Some(iri) => local_name(iri).to_string(),
        None => entity.value().into_owned(),
    }
}

/// The first `rdfs:comment` value on a term, if any
pub fn comment_of(store: &Store, entity: &Term) -> Option<String> {
    let comment = Term::iri(rdfs::COMMENT);
    store
        .matching(Some(entity), Some(&comment), None, None)
        .next()
        .map(|st| st.o.value().into_owned())
}

/// Borrowed view that resolves labels against one store
///
/// Holds only shared references; resolving never mutates the store.
#[derive(Clone, Copy, Debug)]
pub struct LabelResolver<'a> {
    store: &'a Store,
    predicates: &'a LabelPredicateSet,
    mode: DisplayMode,
}

impl<'a> LabelResolver<'a> {
    pub fn new(store: &'a Store, predicates: &'a LabelPredicateSet, mode: DisplayMode) -> Self {
        Self {
            store,
            predicates,
            mode,
        }
    }

    pub fn store(&self) -> &'a Store {
        self.store
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn label(&self, term: &Term) -> String {
        label_of(self.store, self.predicates, term, self.mode)
    }

    pub fn label_iri(&self, iri: &str) -> String {
        self.label(&Term::iri(iri))
    }

    pub fn comment(&self, term: &Term) -> Option<String> {
        comment_of(self.store, term)
    }
}
