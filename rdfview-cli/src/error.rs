use colored::Colorize;
use rdfview_core::{CoreError, RdfSyntax};
use rdfview_graph::GraphError;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Bad config file.
    Config(String),
    /// Unreadable input file.
    Input(String),
    /// Syntax error reported by the parser.
    Parse(String),
    /// Recognized syntax without a parser.
    UnsupportedSyntax(RdfSyntax),
    /// Requested entity does not exist.
    NotFound(String),
    /// Argument / usage errors.
    Usage(String),
    /// Statement rejected by the store.
    Graph(GraphError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Parse(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::UnsupportedSyntax(syntax) => write!(
                f,
                "{} {} ({}) input is not supported\n  {} convert the file to Turtle or N-Triples, or pass --syntax",
                "error:".red().bold(),
                syntax,
                syntax.media_type(),
                "help:".cyan().bold(),
            ),
            CliError::NotFound(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Graph(e) => write!(f, "{} {e}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON encode error: {e}"))
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(format!("invalid config file: {e}"))
    }
}

impl From<rio_turtle::TurtleError> for CliError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        CliError::Parse(e.to_string())
    }
}

impl From<GraphError> for CliError {
    fn from(e: GraphError) -> Self {
        CliError::Graph(e)
    }
}

impl From<CoreError> for CliError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Graph(e) => CliError::Graph(e),
            other => CliError::Usage(other.to_string()),
        }
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
