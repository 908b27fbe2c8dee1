//! `algraph topo`

use std::path::Path;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::{join_vertices, print_json};
use algraph_core::error::Result;
use algraph_core::traversal::DepthFirstOrder;

pub fn execute(ctx: &CommandContext, input: &Path) -> Result<()> {
    let graph = ctx.load(input)?.to_digraph()?;
    let order = DepthFirstOrder::new(&graph);
    let topological: Vec<usize> = order.reverse_post().collect();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "order": topological,
            "preorder": order.pre().collect::<Vec<_>>(),
            "postorder": order.post().collect::<Vec<_>>(),
        })),
        OutputFormat::Human => {
            println!("{}", join_vertices(&topological, " "));
            Ok(())
        }
    }
}
