//! Command dispatch logic for algraph

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::load::GraphDescription;
use algraph_core::config::AlgraphConfig;
use algraph_core::error::Result;
use algraph_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: AlgraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: AlgraphConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn precision(&self) -> usize {
        self.config.output.precision
    }

    /// Read and validate a graph description
    pub fn load(&self, path: &std::path::Path) -> Result<GraphDescription> {
        let loaded = Instant::now();
        let description = GraphDescription::read(path)?;
        trace_time!(loaded, "load_graph", vertices = description.vertices);
        Ok(description)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Stats(input) => commands::stats::execute(ctx, &input.input),
            Commands::Paths {
                input,
                source,
                method,
                directed,
            } => commands::paths::execute(ctx, &input.input, *source, *method, *directed),
            Commands::Components(input) => commands::components::execute(ctx, &input.input),
            Commands::Scc(input) => commands::components::execute_strong(ctx, &input.input),
            Commands::Topo(input) => commands::topo::execute(ctx, &input.input),
            Commands::Mst { input, algorithm } => {
                let algorithm = algorithm.unwrap_or(ctx.config.mst.algorithm);
                commands::mst::execute(ctx, &input.input, algorithm)
            }
            Commands::Sp {
                input,
                algorithm,
                source,
                longest,
            } => commands::sp::execute(
                ctx,
                &input.input,
                commands::sp::SpOptions {
                    algorithm: *algorithm,
                    source: source.unwrap_or(ctx.config.shortest_path.source),
                    longest: *longest,
                },
            ),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = AlgraphConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);
    let result = cli.command.execute(&ctx);

    debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
    result
}
