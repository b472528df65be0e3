use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{new_table, print_json};
use rdfview_core::Session;

pub fn run(session: &Session, format: OutputFormat) -> CliResult<()> {
    let graph = session.graph();

    match format {
        OutputFormat::Json => print_json(&graph),
        OutputFormat::Table => {
            if graph.is_empty() {
                println!("No entities to draw.");
                return Ok(());
            }

            println!("Nodes ({}):", graph.nodes.len());
            let mut nodes = new_table(vec!["ID", "LABEL"]);
            for node in &graph.nodes {
                nodes.add_row(vec![node.id.to_string(), node.label.clone()]);
            }
            println!("{nodes}");

            println!();
            println!("Edges ({}):", graph.edges.len());
            if graph.edges.is_empty() {
                println!("(none)");
                return Ok(());
            }
            let mut edges = new_table(vec!["SOURCE", "LABEL", "TARGET"]);
            for edge in &graph.edges {
                edges.add_row(vec![
                    edge.source.to_string(),
                    edge.label.clone(),
                    edge.target.to_string(),
                ]);
            }
            println!("{edges}");
            Ok(())
        }
    }
}
