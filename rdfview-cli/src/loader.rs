//! File loading through the rio parsers
//!
//! Turtle and N-Triples are parsed with `rio_turtle` and fed into a
//! [`StoreSink`]. The other syntaxes in the table are recognized but have no
//! parser here. RDF-star quoted triples cannot be represented in the store
//! and are skipped with a warning.

use crate::error::{CliError, CliResult};
use oxiri::Iri;
use rdfview_core::RdfSyntax;
use rdfview_graph::{StatementSink, Store, StoreSink, TermId};
use rio_api::model::{Literal, Subject, Term, Triple};
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleParser};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// How to read one file
#[derive(Debug, Clone, Default)]
pub struct LoadOptions<'a> {
    /// Overrides extension-based detection
    pub syntax: Option<RdfSyntax>,
    pub base_iri: Option<&'a str>,
    /// Prefix for blank-node labels, keeping files apart after a merge
    pub blank_scope: Option<&'a str>,
}

/// Parse a file into a fresh store
pub fn load_file(path: &Path, opts: &LoadOptions<'_>) -> CliResult<Store> {
    let syntax = opts
        .syntax
        .unwrap_or_else(|| RdfSyntax::from_filename(path));
    let file = File::open(path)
        .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display())))?;

    let store = parse_reader(BufReader::new(file), syntax, opts).map_err(|e| match e {
        CliError::Parse(msg) => CliError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    info!(
        path = %path.display(),
        syntax = %syntax,
        statements = store.len(),
        "loaded file"
    );
    Ok(store)
}

/// Parse RDF text from any reader
pub fn parse_reader<R: BufRead>(
    reader: R,
    syntax: RdfSyntax,
    opts: &LoadOptions<'_>,
) -> CliResult<Store> {
    let mut sink = match opts.base_iri {
        Some(base) => StoreSink::with_base(base),
        None => StoreSink::new(),
    };
    if let Some(scope) = opts.blank_scope {
        sink = sink.with_blank_scope(scope);
    }

    let mut skipped = 0usize;
    match syntax {
        RdfSyntax::Turtle => {
            let base = opts.base_iri.map(parse_base).transpose()?;
            let mut parser = TurtleParser::new(reader, base);
            parser.parse_all(&mut |t| emit(&mut sink, t, &mut skipped))?;
        }
        RdfSyntax::NTriples => {
            let mut parser = NTriplesParser::new(reader);
            parser.parse_all(&mut |t| emit(&mut sink, t, &mut skipped))?;
        }
        other => return Err(CliError::UnsupportedSyntax(other)),
    }

    if skipped > 0 {
        warn!(skipped, "skipped RDF-star statements");
    }
    debug!(
        statements = sink.store().len(),
        prefixes = sink.prefixes().len(),
        "parse finished"
    );
    Ok(sink.finish())
}

fn parse_base(base: &str) -> CliResult<Iri<String>> {
    Iri::parse(base.to_string())
        .map_err(|e| CliError::Usage(format!("invalid base IRI '{base}': {e}")))
}

fn emit(sink: &mut StoreSink, triple: Triple<'_>, skipped: &mut usize) -> CliResult<()> {
    let (Some(s), Some(o)) = (subject_id(sink, triple.subject), object_id(sink, triple.object))
    else {
        *skipped += 1;
        return Ok(());
    };
    let p = sink.term_iri(triple.predicate.iri);
    sink.emit_statement(s, p, o, None)?;
    Ok(())
}

fn subject_id(sink: &mut StoreSink, subject: Subject<'_>) -> Option<TermId> {
    match subject {
        Subject::NamedNode(n) => Some(sink.term_iri(n.iri)),
        Subject::BlankNode(b) => Some(sink.term_blank(Some(b.id))),
        Subject::Triple(_) => None,
    }
}

fn object_id(sink: &mut StoreSink, object: Term<'_>) -> Option<TermId> {
    match object {
        Term::NamedNode(n) => Some(sink.term_iri(n.iri)),
        Term::BlankNode(b) => Some(sink.term_blank(Some(b.id))),
        Term::Literal(Literal::Simple { value }) => Some(sink.term_literal(value, None, None)),
        Term::Literal(Literal::LanguageTaggedString { value, language }) => {
            Some(sink.term_literal(value, None, Some(language)))
        }
        Term::Literal(Literal::Typed { value, datatype }) => {
            Some(sink.term_literal(value, Some(datatype.iri), None))
        }
        Term::Triple(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfview_graph::Term as StoreTerm;
    use std::io::Cursor;

    const TTL: &str = r#"
        @prefix ex: <http://ex.org/> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

        ex:alice rdfs:label "Alice"@en ;
            ex:age 42 ;
            ex:knows ex:bob , [ ex:name "anon" ] .
        <relative> ex:p ex:o .
    "#;

    fn turtle(text: &str, opts: &LoadOptions<'_>) -> CliResult<Store> {
        parse_reader(Cursor::new(text), RdfSyntax::Turtle, opts)
    }

    #[test]
    fn test_parse_turtle() {
        let opts = LoadOptions {
            base_iri: Some("http://example.org/base/"),
            ..Default::default()
        };
        let store = turtle(TTL, &opts).unwrap();
        assert_eq!(store.len(), 6);

        let alice = StoreTerm::iri("http://ex.org/alice");
        let objects: Vec<_> = store
            .matching(Some(&alice), None, None, None)
            .map(|st| st.o.clone())
            .collect();
        assert_eq!(objects[0], StoreTerm::lang_string("Alice", "en"));
        assert_eq!(objects[1], StoreTerm::integer(42));

        let relative = StoreTerm::iri("http://example.org/base/relative");
        assert!(store.has_subject(&relative));
    }

    #[test]
    fn test_blank_scope_applies() {
        let opts = LoadOptions {
            blank_scope: Some("o1."),
            ..Default::default()
        };
        let store = turtle("_:x <http://ex.org/p> \"v\" .", &opts).unwrap();
        let st = store.iter().next().unwrap();
        assert_eq!(st.s, StoreTerm::blank("o1.x"));
    }

    #[test]
    fn test_parse_ntriples() {
        let nt = "<http://ex.org/a> <http://ex.org/p> <http://ex.org/b> .\n\
                  <http://ex.org/a> <http://ex.org/p> <http://ex.org/b> .\n";
        let store =
            parse_reader(Cursor::new(nt), RdfSyntax::NTriples, &LoadOptions::default()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_syntax_error() {
        let err = turtle("ex:a ex:b", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }

    #[test]
    fn test_unsupported_syntax() {
        let err = parse_reader(Cursor::new("{}"), RdfSyntax::JsonLd, &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, CliError::UnsupportedSyntax(RdfSyntax::JsonLd)));
    }

    #[test]
    fn test_invalid_base_iri() {
        let opts = LoadOptions {
            base_iri: Some("not a base"),
            ..Default::default()
        };
        let err = turtle("", &opts).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }
}
