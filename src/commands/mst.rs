//! `algraph mst`

use std::path::Path;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::{fmt_number, print_json};
use algraph_core::config::MstAlgorithm;
use algraph_core::error::Result;
use algraph_core::mst::{EagerPrim, Kruskal, LazyPrim, MinimumSpanningTree};

fn report(
    ctx: &CommandContext,
    algorithm: MstAlgorithm,
    mst: &impl MinimumSpanningTree,
) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "algorithm": algorithm.as_str(),
            "weight": mst.weight(),
            "edges": mst.edges(),
        })),
        OutputFormat::Human => {
            let precision = ctx.precision();
            for edge in mst.edges() {
                let (v, w) = edge.endpoints();
                println!("{v}-{w} {}", fmt_number(edge.weight(), precision));
            }
            if !ctx.cli.quiet {
                println!("weight: {}", fmt_number(mst.weight(), precision));
            }
            Ok(())
        }
    }
}

pub fn execute(ctx: &CommandContext, input: &Path, algorithm: MstAlgorithm) -> Result<()> {
    let graph = ctx.load(input)?.to_weighted_graph()?;
    tracing::debug!(%algorithm, "computing spanning tree");

    match algorithm {
        MstAlgorithm::EagerPrim => report(ctx, algorithm, &EagerPrim::new(&graph)?),
        MstAlgorithm::LazyPrim => report(ctx, algorithm, &LazyPrim::new(&graph)?),
        MstAlgorithm::Kruskal => report(ctx, algorithm, &Kruskal::new(&graph)?),
    }
}
