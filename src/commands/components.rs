//! `algraph components` and `algraph scc`

use std::path::Path;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::{join_vertices, print_json};
use algraph_core::error::Result;
use algraph_core::traversal::{ConnectedComponents, StrongComponents};

/// Group vertices by component label
fn members(count: usize, labels: impl Iterator<Item = (usize, usize)>) -> Vec<Vec<usize>> {
    let mut groups = vec![Vec::new(); count];
    for (v, label) in labels {
        groups[label].push(v);
    }
    groups
}

fn report(ctx: &CommandContext, kind: &str, groups: &[Vec<usize>]) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "kind": kind,
            "count": groups.len(),
            "components": groups,
        })),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{} {kind} components", groups.len());
            }
            for group in groups {
                println!("{}", join_vertices(group, " "));
            }
            Ok(())
        }
    }
}

pub fn execute(ctx: &CommandContext, input: &Path) -> Result<()> {
    let description = ctx.load(input)?;
    let graph = description.to_graph()?;
    let cc = ConnectedComponents::new(&graph);
    let labels = (0..description.vertices)
        .map(|v| cc.id(v).map(|label| (v, label)))
        .collect::<Result<Vec<_>>>()?;
    report(ctx, "connected", &members(cc.count(), labels.into_iter()))
}

pub fn execute_strong(ctx: &CommandContext, input: &Path) -> Result<()> {
    let description = ctx.load(input)?;
    let graph = description.to_digraph()?;
    let scc = StrongComponents::new(&graph);
    let labels = (0..description.vertices)
        .map(|v| scc.id(v).map(|label| (v, label)))
        .collect::<Result<Vec<_>>>()?;
    report(ctx, "strong", &members(scc.count(), labels.into_iter()))
}
