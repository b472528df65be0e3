use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{new_table, print_json};
use rdfview_core::{OntologyLog, Session, SessionStats};
use serde::Serialize;

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: SessionStats,
    label_predicate_iris: Vec<&'a str>,
    ontologies: &'a OntologyLog,
}

fn report(session: &Session) -> StatsReport<'_> {
    StatsReport {
        stats: session.stats(),
        label_predicate_iris: session.label_predicates().iter().collect(),
        ontologies: session.ontologies(),
    }
}

pub fn run(session: &Session, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&report(session)),
        OutputFormat::Table => {
            let stats = session.stats();
            println!("Statements:       {}", stats.statements);
            println!("Entities:         {}", stats.entities);
            println!("Base entities:    {}", stats.base_entities);
            println!("Label predicates: {}", stats.label_predicates);
            for iri in session.label_predicates().iter() {
                println!("  {iri}");
            }
            println!("Ontologies:       {}", stats.ontology_count);

            if !session.ontologies().is_empty() {
                let mut table = new_table(vec!["NAME", "BASE IRI", "ONTOLOGY IRI", "MERGED"]);
                for record in session.ontologies() {
                    table.add_row(vec![
                        record.name.clone(),
                        record.base_iri.clone(),
                        record.ontology_iri.clone().unwrap_or_default(),
                        record.merged_statement_count.to_string(),
                    ]);
                }
                println!("{table}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfview_graph::{Store, Term};
    use rdfview_vocab::rdfs;

    #[test]
    fn test_report_json_has_unique_keys() {
        let mut store = Store::new();
        store.add_triple(
            Term::iri("http://ex.org/a"),
            Term::iri("http://ex.org/knows"),
            Term::iri("http://ex.org/b"),
        );
        let mut session = Session::load(store);
        let mut ontology = Store::new();
        ontology.add_triple(
            Term::iri("http://ex.org/knows"),
            Term::iri(rdfs::LABEL),
            Term::string("knows"),
        );
        session.merge_ontology("vocab.ttl", "http://example.org/base", &ontology);

        let text = serde_json::to_string(&report(&session)).unwrap();
        assert_eq!(text.matches("\"ontologies\"").count(), 1);
        assert_eq!(text.matches("\"ontology_count\"").count(), 1);

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["ontology_count"], 1);
        assert_eq!(json["ontologies"].as_array().unwrap().len(), 1);
        assert_eq!(json["ontologies"][0]["name"], "vocab.ttl");
        assert_eq!(json["label_predicate_iris"][0], rdfs::LABEL);
    }
}
