//! Session construction from command-line inputs

use crate::cli::SourceArgs;
use crate::config::Settings;
use crate::error::CliResult;
use crate::loader::{self, LoadOptions};
use rdfview_core::Session;
use std::path::Path;
use tracing::info;

/// Blank-node scope of the dataset; ontologies use `onto1.`, `onto2.` and so on
const DATA_BLANK_SCOPE: &str = "data.";

/// Load the dataset, then merge every configured ontology in order.
pub fn build_session(source: &SourceArgs, settings: &Settings) -> CliResult<Session> {
    let store = loader::load_file(
        &source.file,
        &LoadOptions {
            syntax: settings.syntax,
            base_iri: Some(&settings.base_iri),
            blank_scope: Some(DATA_BLANK_SCOPE),
        },
    )?;
    let mut session = Session::load(store).with_mode(settings.mode);

    for (i, path) in settings.ontologies.iter().enumerate() {
        let scope = format!("onto{}.", i + 1);
        let ontology = loader::load_file(
            path,
            &LoadOptions {
                syntax: None,
                base_iri: Some(&settings.base_iri),
                blank_scope: Some(&scope),
            },
        )?;
        let outcome = session.merge_ontology(display_name(path), &settings.base_iri, &ontology);
        info!(
            ontology = %path.display(),
            candidates = outcome.added_count,
            inserted = outcome.inserted,
            "merged ontology"
        );
    }
    Ok(session)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
