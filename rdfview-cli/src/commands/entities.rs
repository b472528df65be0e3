use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{new_table, print_json};
use rdfview_core::Session;

pub fn run(session: &Session, format: OutputFormat) -> CliResult<()> {
    let entries = session.entity_entries();

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Table => {
            if entries.is_empty() {
                println!("No entities found.");
                return Ok(());
            }
            let mut table = new_table(vec!["LABEL", "IRI"]);
            for entry in &entries {
                table.add_row(vec![entry.label.clone(), entry.iri.to_string()]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
