//! In-memory statement store
//!
//! The `Store` holds a set of distinct statements in insertion order and
//! answers pattern-match queries. Pattern matching is the only query
//! primitive; label lookup, property listing and projection are all built
//! on repeated [`Store::matching`] calls.
//!
//! # Design Decisions
//!
//! - **Insertion order is explicit**: statements live in a `Vec`, and every
//!   position index stores ascending offsets into it. Any query therefore
//!   yields statements in the order they were first added.
//! - **Set semantics**: a dedup set keyed by the full statement (including
//!   the graph name) rejects structural duplicates on `add`.
//! - **Monotonic**: there is no removal. Querying never mutates the store.

use crate::{GraphName, Statement, Term};
use rustc_hash::{FxHashMap, FxHashSet};
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

/// An insertion-ordered set of statements with pattern-match lookup
///
/// # Example
///
/// ```
/// use rdfview_graph::{Store, Statement, Term};
///
/// let mut store = Store::new();
/// let alice = Term::iri("http://example.org/alice");
/// let name = Term::iri("http://xmlns.com/foaf/0.1/name");
///
/// assert!(store.add(Statement::new(alice.clone(), name.clone(), Term::string("Alice"))));
/// assert!(!store.add(Statement::new(alice.clone(), name.clone(), Term::string("Alice"))));
///
/// let names: Vec<_> = store.matching(Some(&alice), Some(&name), None, None).collect();
/// assert_eq!(names.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Store {
    statements: Vec<Statement>,
    seen: FxHashSet<Statement>,
    by_subject: FxHashMap<Term, Vec<usize>>,
    by_predicate: FxHashMap<Term, Vec<usize>>,
    by_object: FxHashMap<Term, Vec<usize>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a statement unless a structurally equal one is present
    ///
    /// Returns whether the statement was new.
    pub fn add(&mut self, statement: Statement) -> bool {
        if self.seen.contains(&statement) {
            return false;
        }
        let idx = self.statements.len();
        self.by_subject
            .entry(statement.s.clone())
            .or_default()
            .push(idx);
        self.by_predicate
            .entry(statement.p.clone())
            .or_default()
            .push(idx);
        self.by_object
            .entry(statement.o.clone())
            .or_default()
            .push(idx);
        self.seen.insert(statement.clone());
        self.statements.push(statement);
        true
    }

    /// Add a statement by components in the default graph
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) -> bool {
        self.add(Statement::new(s, p, o))
    }

    /// Find statements matching a pattern
    ///
    /// Each `None` is a wildcard; bound positions must be equal. A `graph`
    /// of `Some(GraphName::Default)` restricts to the default graph.
    /// The returned iterator borrows the store, yields statements in
    /// insertion order, and can be cloned to restart it.
    pub fn matching<'a>(
        &'a self,
        s: Option<&'a Term>,
        p: Option<&'a Term>,
        o: Option<&'a Term>,
        g: Option<&'a GraphName>,
    ) -> Matches<'a> {
        let pattern = Pattern { s, p, o, g };
        Matches {
            statements: &self.statements,
            candidates: self.candidates(&pattern),
            pattern,
        }
    }

    /// All statements, in insertion order
    pub fn all_statements(&self) -> Matches<'_> {
        self.matching(None, None, None, None)
    }

    /// Pick the narrowest position list for the bound positions
    fn candidates(&self, pattern: &Pattern<'_>) -> Candidates<'_> {
        let lists = [
            pattern.s.map(|t| self.by_subject.get(t)),
            pattern.p.map(|t| self.by_predicate.get(t)),
            pattern.o.map(|t| self.by_object.get(t)),
        ];

        let mut best: Option<&Vec<usize>> = None;
        for list in lists.into_iter().flatten() {
            match list {
                // A bound position nobody uses: nothing can match
                None => return Candidates::Empty,
                Some(list) => {
                    if best.map_or(true, |b| list.len() < b.len()) {
                        best = Some(list);
                    }
                }
            }
        }

        match best {
            Some(list) => Candidates::Indexed(list.iter()),
            None => Candidates::Scan(0..self.statements.len()),
        }
    }

    /// Iterate over all statements
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// All statements as a slice, in insertion order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Get the number of statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Check whether a statement is present
    pub fn contains(&self, statement: &Statement) -> bool {
        self.seen.contains(statement)
    }

    /// Check whether a term occurs in subject position
    pub fn has_subject(&self, term: &Term) -> bool {
        self.by_subject.contains_key(term)
    }

    /// Distinct subjects in order of first appearance
    pub fn subjects(&self) -> Vec<&Term> {
        let mut seen = FxHashSet::default();
        self.statements
            .iter()
            .map(|st| &st.s)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Distinct IRI subjects in order of first appearance
    ///
    /// These are the navigable entities; blank-node subjects are excluded.
    pub fn entities(&self) -> Vec<Arc<str>> {
        self.subjects()
            .into_iter()
            .filter_map(|s| s.as_iri_arc().cloned())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl FromIterator<Statement> for Store {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        let mut store = Store::new();
        store.extend(iter);
        store
    }
}

impl Extend<Statement> for Store {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        for statement in iter {
            self.add(statement);
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Pattern<'a> {
    s: Option<&'a Term>,
    p: Option<&'a Term>,
    o: Option<&'a Term>,
    g: Option<&'a GraphName>,
}

impl Pattern<'_> {
    fn accepts(&self, st: &Statement) -> bool {
        self.s.map_or(true, |s| *s == st.s)
            && self.p.map_or(true, |p| *p == st.p)
            && self.o.map_or(true, |o| *o == st.o)
            && self.g.map_or(true, |g| *g == st.g)
    }
}

#[derive(Clone, Debug)]
enum Candidates<'a> {
    Scan(Range<usize>),
    Indexed(std::slice::Iter<'a, usize>),
    Empty,
}

impl Iterator for Candidates<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Candidates::Scan(range) => range.next(),
            Candidates::Indexed(iter) => iter.next().copied(),
            Candidates::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Candidates::Scan(range) => range.size_hint(),
            Candidates::Indexed(iter) => iter.size_hint(),
            Candidates::Empty => (0, Some(0)),
        }
    }
}

/// Iterator over statements matching a pattern
///
/// Produced by [`Store::matching`]. Cloning yields an independent iterator
/// positioned at the same point.
#[derive(Clone, Debug)]
pub struct Matches<'a> {
    statements: &'a [Statement],
    candidates: Candidates<'a>,
    pattern: Pattern<'a>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Statement;

    fn next(&mut self) -> Option<Self::Item> {
        let statements = self.statements;
        let pattern = self.pattern;
        self.candidates
            .by_ref()
            .map(|idx| &statements[idx])
            .find(|st| pattern.accepts(st))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.candidates.size_hint().1)
    }
}

impl FusedIterator for Matches<'_> {}
