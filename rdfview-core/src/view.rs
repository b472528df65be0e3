//! Entity list and per-entity property table

use crate::label::LabelResolver;
use rdfview_graph::{Store, Term, TermKind};
use serde::Serialize;
use std::sync::Arc;

/// IRI subjects in first-appearance order
///
/// Blank-node subjects are not browsable and are left out.
pub fn entity_list(store: &Store) -> Vec<Arc<str>> {
    store.entities()
}

/// An entity paired with its display label
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntityEntry {
    pub iri: Arc<str>,
    pub label: String,
}

pub fn entity_entries(entities: &[Arc<str>], resolver: &LabelResolver<'_>) -> Vec<EntityEntry> {
    entities
        .iter()
        .map(|iri| EntityEntry {
            iri: iri.clone(),
            label: resolver.label_iri(iri),
        })
        .collect()
}

/// One `(subject, predicate, object)` row of the property table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyRow {
    pub predicate_label: String,
    pub predicate_iri: String,
    /// Resolver label for IRI/blank objects, lexical form for literals
    pub object_label: String,
    /// Raw identifier or lexical form
    pub object_value: String,
    pub object_kind: TermKind,
    /// The object is an IRI the user can navigate to
    pub is_entity: bool,
    /// The predicate is itself described in the store
    pub predicate_navigable: bool,
}

/// Rows for every statement about `subject`, in store order
pub fn property_rows(resolver: &LabelResolver<'_>, subject: &Term) -> Vec<PropertyRow> {
    let store = resolver.store();
    store
        .matching(Some(subject), None, None, None)
        .map(|st| {
            let object_label = match &st.o {
                Term::Literal { value, .. } => value.to_string(),
                other => resolver.label(other),
            };
            PropertyRow {
                predicate_label: resolver.label(&st.p),
                predicate_iri: st.p.value().into_owned(),
                object_label,
                object_value: st.o.value().into_owned(),
                object_kind: st.o.kind(),
                is_entity: st.o.is_iri(),
                predicate_navigable: store.has_subject(&st.p),
            }
        })
        .collect()
}

/// Everything needed to render one entity page
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyView {
    pub subject: String,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub rows: Vec<PropertyRow>,
}

impl PropertyView {
    pub fn build(resolver: &LabelResolver<'_>, subject: &Term) -> Self {
        Self {
            subject: subject.value().into_owned(),
            heading: resolver.label(subject),
            comment: resolver.comment(subject),
            rows: property_rows(resolver, subject),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{compute_label_predicates, DisplayMode};
    use rdfview_vocab::rdfs;

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://ex.org/{local}"))
    }

    fn sample() -> Store {
        let mut store = Store::new();
        store.add_triple(ex("alice"), ex("knows"), ex("bob"));
        store.add_triple(ex("alice"), Term::iri(rdfs::LABEL), Term::string("Alice"));
        store.add_triple(ex("alice"), Term::iri(rdfs::COMMENT), Term::string("A person"));
        store.add_triple(ex("alice"), ex("friend"), Term::blank("b0"));
        store.add_triple(ex("bob"), Term::iri(rdfs::LABEL), Term::string("Bob"));
        store.add_triple(ex("knows"), Term::iri(rdfs::LABEL), Term::string("knows well"));
        store
    }

    #[test]
    fn test_entity_list_skips_blank_subjects() {
        let mut store = sample();
        store.add_triple(Term::blank("b0"), ex("p"), Term::string("x"));
        let entities = entity_list(&store);
        let names: Vec<_> = entities.iter().map(|e| e.as_ref()).collect();
        assert_eq!(
            names,
            vec!["http://ex.org/alice", "http://ex.org/bob", "http://ex.org/knows"]
        );
    }

    #[test]
    fn test_property_rows() {
        let store = sample();
        let predicates = compute_label_predicates(&store);
        let resolver = LabelResolver::new(&store, &predicates, DisplayMode::Normal);

        let rows = property_rows(&resolver, &ex("alice"));
        assert_eq!(rows.len(), 4);

        let knows = &rows[0];
        assert_eq!(knows.predicate_label, "knows well");
        assert_eq!(knows.predicate_iri, "http://ex.org/knows");
        assert_eq!(knows.object_label, "Bob");
        assert_eq!(knows.object_value, "http://ex.org/bob");
        assert_eq!(knows.object_kind, TermKind::Iri);
        assert!(knows.is_entity);
        assert!(knows.predicate_navigable);

        let label = &rows[1];
        assert_eq!(label.predicate_label, "label");
        assert_eq!(label.object_label, "Alice");
        assert!(!label.is_entity);
        assert!(!label.predicate_navigable);

        let blank = &rows[3];
        assert_eq!(blank.object_kind, TermKind::Blank);
        assert_eq!(blank.object_value, "_:b0");
        assert!(!blank.is_entity);
    }

    #[test]
    fn test_property_view() {
        let store = sample();
        let predicates = compute_label_predicates(&store);
        let resolver = LabelResolver::new(&store, &predicates, DisplayMode::Normal);

        let view = PropertyView::build(&resolver, &ex("alice"));
        assert_eq!(view.subject, "http://ex.org/alice");
        assert_eq!(view.heading, "Alice");
        assert_eq!(view.comment.as_deref(), Some("A person"));
        assert_eq!(view.rows.len(), 4);

        let missing = PropertyView::build(&resolver, &ex("nobody"));
        assert!(missing.is_empty());
        assert_eq!(missing.heading, "nobody");
    }

    #[test]
    fn test_entity_entries_use_mode() {
        let store = sample();
        let predicates = compute_label_predicates(&store);
        let entities = entity_list(&store);

        let normal = LabelResolver::new(&store, &predicates, DisplayMode::Normal);
        assert_eq!(entity_entries(&entities, &normal)[0].label, "Alice");

        let advanced = LabelResolver::new(&store, &predicates, DisplayMode::Advanced);
        assert_eq!(
            entity_entries(&entities, &advanced)[0].label,
            "http://ex.org/alice"
        );
    }
}
