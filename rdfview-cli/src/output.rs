use crate::error::CliResult;
use comfy_table::{ContentArrangement, Row, Table};
use serde::Serialize;

/// A table with the layout used by every command.
pub fn new_table(header: impl Into<Row>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

pub fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_header_and_rows() {
        let mut table = new_table(["LABEL", "IRI"]);
        table.add_row(vec!["Alice", "http://ex.org/alice"]);
        let rendered = table.to_string();
        assert!(rendered.contains("LABEL"));
        assert!(rendered.contains("http://ex.org/alice"));
    }

    #[test]
    fn test_json_is_pretty() {
        let out = to_json(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }
}
