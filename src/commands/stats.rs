//! `algraph stats`

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::{fmt_number, print_json};
use algraph_core::error::Result;
use algraph_core::graph::summarize;

pub fn execute(ctx: &CommandContext, input: &Path) -> Result<()> {
    let graph = ctx.load(input)?.to_graph()?;
    let summary = summarize(&graph);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Human => {
            println!("vertices: {}", summary.vertices);
            println!("edges: {}", summary.edges);
            println!("max degree: {}", summary.max_degree);
            println!(
                "average degree: {}",
                fmt_number(summary.average_degree, ctx.precision())
            );
            println!("self-loops: {}", summary.self_loops);
        }
    }
    Ok(())
}
