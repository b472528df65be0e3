use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{new_table, print_json};
use colored::Colorize;
use rdfview_core::{PropertyView, Session};

pub fn run(session: &Session, entity: Option<&str>, format: OutputFormat) -> CliResult<()> {
    let iri = match entity {
        Some(iri) => iri.to_string(),
        None => session
            .default_entity()
            .map(|e| e.to_string())
            .ok_or_else(|| CliError::NotFound("the dataset has no entities".into()))?,
    };
    let view = session.property_view(&iri);

    match format {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Table => {
            print!("{}", render(&view));
            Ok(())
        }
    }
}

/// Heading, optional comment, then the property table.
pub fn render(view: &PropertyView) -> String {
    let mut out = format!("{}\n{}\n", view.heading.bold(), view.subject.dimmed());
    if let Some(comment) = &view.comment {
        out.push_str(&format!("{}\n", comment.italic()));
    }
    out.push('\n');

    if view.is_empty() {
        out.push_str("No properties found for this entity\n");
        return out;
    }

    let mut table = new_table(vec!["PREDICATE", "VALUE", "LINK"]);
    for row in &view.rows {
        let mut predicate = row.predicate_label.clone();
        if row.predicate_navigable {
            predicate.push_str(" *");
        }
        if row.predicate_iri != row.predicate_label {
            predicate = format!("{predicate}\n{}", row.predicate_iri.dimmed());
        }
        let link = if row.is_entity {
            row.object_value.clone()
        } else {
            String::new()
        };
        table.add_row(vec![predicate, row.object_label.clone(), link]);
    }
    out.push_str(&format!("{table}\n"));
    if view.rows.iter().any(|row| row.predicate_navigable) {
        out.push_str(&format!("{}\n", "* predicate has its own page".dimmed()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfview_graph::{Store, Term};
    use rdfview_vocab::rdfs;

    #[test]
    fn test_render_rows_and_comment() {
        let mut store = Store::new();
        let alice = Term::iri("http://ex.org/alice");
        store.add_triple(alice.clone(), Term::iri(rdfs::LABEL), Term::string("Alice"));
        store.add_triple(alice.clone(), Term::iri(rdfs::COMMENT), Term::string("Met at the conference"));
        store.add_triple(alice, Term::iri("http://ex.org/knows"), Term::iri("http://ex.org/bob"));
        let session = Session::load(store);

        let out = render(&session.property_view("http://ex.org/alice"));
        assert!(out.contains("Alice"));
        assert!(out.contains("Met at the conference"));
        assert!(out.contains("knows"));
        assert!(out.contains("http://ex.org/bob"));
        assert!(out.contains("http://ex.org/knows"));
        assert!(out.contains(rdfs::LABEL));
        assert!(!out.contains(" *"));
        assert!(!out.contains("has its own page"));
    }

    #[test]
    fn test_render_marks_navigable_predicates() {
        let mut store = Store::new();
        let knows = Term::iri("http://ex.org/knows");
        store.add_triple(
            Term::iri("http://ex.org/alice"),
            knows.clone(),
            Term::iri("http://ex.org/bob"),
        );
        store.add_triple(knows, Term::iri(rdfs::LABEL), Term::string("is acquainted with"));
        let session = Session::load(store);

        let out = render(&session.property_view("http://ex.org/alice"));
        assert!(out.contains("is acquainted with *"));
        assert!(out.contains("http://ex.org/knows"));
        assert!(out.contains("* predicate has its own page"));
    }

    #[test]
    fn test_render_empty_entity() {
        let session = Session::load(Store::new());
        let out = render(&session.property_view("http://ex.org/nobody"));
        assert!(out.contains("No properties found for this entity"));
    }
}
