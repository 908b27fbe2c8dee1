//! `algraph paths`

use std::path::Path;

use serde_json::json;

use crate::cli::{OutputFormat, PathMethod};
use crate::commands::dispatch::CommandContext;
use crate::commands::{join_vertices, print_json};
use algraph_core::error::Result;
use algraph_core::graph::GraphView;
use algraph_core::traversal::{BreadthFirstPaths, DepthFirstPaths};

/// Path to one target; `distance` only for breadth-first search
struct Route {
    target: usize,
    distance: Option<usize>,
    path: Option<Vec<usize>>,
}

fn routes<G: GraphView>(graph: &G, source: usize, method: PathMethod) -> Result<Vec<Route>> {
    let targets = 0..graph.vertex_count();
    match method {
        PathMethod::Bfs => {
            let bfs = BreadthFirstPaths::new(graph, source)?;
            targets
                .map(|target| -> Result<Route> {
                    Ok(Route {
                        target,
                        distance: bfs.dist_to(target)?,
                        path: bfs.path_to(target)?,
                    })
                })
                .collect()
        }
        PathMethod::Dfs => {
            let dfs = DepthFirstPaths::new(graph, source)?;
            targets
                .map(|target| -> Result<Route> {
                    Ok(Route {
                        target,
                        distance: None,
                        path: dfs.path_to(target)?,
                    })
                })
                .collect()
        }
    }
}

pub fn execute(
    ctx: &CommandContext,
    input: &Path,
    source: usize,
    method: PathMethod,
    directed: bool,
) -> Result<()> {
    let description = ctx.load(input)?;
    let routes = if directed {
        routes(&description.to_digraph()?, source, method)?
    } else {
        routes(&description.to_graph()?, source, method)?
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            let paths: Vec<_> = routes
                .iter()
                .map(|route| {
                    json!({
                        "target": route.target,
                        "reachable": route.path.is_some(),
                        "distance": route.distance,
                        "path": route.path,
                    })
                })
                .collect();
            print_json(&json!({
                "source": source,
                "method": method.as_str(),
                "directed": directed,
                "paths": paths,
            }))?;
        }
        OutputFormat::Human => {
            let separator = if directed { "->" } else { "-" };
            for route in &routes {
                match (&route.path, route.distance) {
                    (Some(path), Some(distance)) => println!(
                        "{source} to {} ({distance}): {}",
                        route.target,
                        join_vertices(path, separator)
                    ),
                    (Some(path), None) => println!(
                        "{source} to {}: {}",
                        route.target,
                        join_vertices(path, separator)
                    ),
                    (None, _) if !ctx.cli.quiet => {
                        println!("{source} to {}: not connected", route.target)
                    }
                    (None, _) => {}
                }
            }
        }
    }
    Ok(())
}
