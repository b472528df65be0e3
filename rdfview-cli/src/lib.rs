//! rdfview CLI library.
//!
//! Argument types, config resolution, the file loader and the command
//! handlers behind the `rdfview` binary. Other front ends can reuse
//! [`run`] or call [`context::build_session`] directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod output;

use cli::{Cli, Commands, SourceArgs, ViewArgs};
use config::{ConfigFile, Settings};
use rdfview_core::Session;

/// Dispatch a parsed [`Cli`] to the appropriate command handler.
pub fn run(cli: Cli) -> error::CliResult<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Entities { source, view } => {
            let (session, settings) = open(config_path, &source, view)?;
            commands::entities::run(&session, settings.format)
        }

        Commands::Show {
            source,
            entity,
            view,
        } => {
            let (session, settings) = open(config_path, &source, view)?;
            commands::show::run(&session, entity.as_deref(), settings.format)
        }

        Commands::Graph { source, view } => {
            let (session, settings) = open(config_path, &source, view)?;
            commands::graph::run(&session, settings.format)
        }

        Commands::Stats { source, format } => {
            let view = ViewArgs {
                format,
                advanced: false,
            };
            let (session, settings) = open(config_path, &source, view)?;
            commands::stats::run(&session, settings.format)
        }
    }
}

fn open(
    config_path: Option<&std::path::Path>,
    source: &SourceArgs,
    view: ViewArgs,
) -> error::CliResult<(Session, Settings)> {
    let config = ConfigFile::load(config_path)?;
    let settings = Settings::resolve(config, source, view);
    let session = context::build_session(source, &settings)?;
    Ok((session, settings))
}
