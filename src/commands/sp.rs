//! `algraph sp`

use std::path::Path;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::{fmt_number, print_json};
use algraph_core::config::SpAlgorithm;
use algraph_core::error::{AlgoError, Result};
use algraph_core::graph::{DirectedEdge, EdgeWeightedDigraph, GraphView};
use algraph_core::sp::{AcyclicSp, BellmanFord, Dijkstra, ShortestPaths};
use algraph_core::{bail_usage, ensure_vertex};

/// Resolved `sp` arguments; `algorithm` falls back to the config
pub struct SpOptions {
    pub algorithm: Option<SpAlgorithm>,
    pub source: usize,
    pub longest: bool,
}

impl SpOptions {
    /// `--longest` only works with topological relaxation
    fn resolve(&self, configured: SpAlgorithm) -> Result<SpAlgorithm> {
        match (self.longest, self.algorithm) {
            (true, None | Some(SpAlgorithm::Acyclic)) => Ok(SpAlgorithm::Acyclic),
            (true, Some(other)) => Err(AlgoError::UsageError(format!(
                "--longest requires --algorithm acyclic, not {other}"
            ))),
            (false, chosen) => Ok(chosen.unwrap_or(configured)),
        }
    }
}

fn edge_json(edge: &DirectedEdge) -> serde_json::Value {
    json!({ "from": edge.from(), "to": edge.to(), "weight": edge.weight() })
}

fn report<S: ShortestPaths>(
    ctx: &CommandContext,
    algorithm: SpAlgorithm,
    vertices: usize,
    sp: &S,
) -> Result<()> {
    let source = sp.source();
    let precision = ctx.precision();

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut paths = Vec::with_capacity(vertices);
            for target in 0..vertices {
                let path = sp.path_to(target)?;
                paths.push(json!({
                    "target": target,
                    "reachable": path.is_some(),
                    "distance": sp.dist_to(target)?,
                    "path": path.map(|edges| edges.iter().map(edge_json).collect::<Vec<_>>()),
                }));
            }
            print_json(&json!({
                "algorithm": algorithm.as_str(),
                "source": source,
                "paths": paths,
            }))
        }
        OutputFormat::Human => {
            for target in 0..vertices {
                match sp.path_to(target)? {
                    Some(path) => {
                        let hops: Vec<String> = path
                            .iter()
                            .map(|edge| {
                                format!(
                                    "{}->{} {}",
                                    edge.from(),
                                    edge.to(),
                                    fmt_number(edge.weight(), precision)
                                )
                            })
                            .collect();
                        println!(
                            "{source} to {target} ({}): {}",
                            fmt_number(sp.dist_to(target)?, precision),
                            hops.join("  ")
                        );
                    }
                    None if !ctx.cli.quiet => println!("{source} to {target}: no path"),
                    None => {}
                }
            }
            Ok(())
        }
    }
}

/// Print the cycle, then fail so the exit code reflects it
fn report_cycle(ctx: &CommandContext, cycle: &[DirectedEdge]) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "algorithm": SpAlgorithm::BellmanFord.as_str(),
            "negative_cycle": cycle.iter().map(edge_json).collect::<Vec<_>>(),
        }))?,
        OutputFormat::Human => {
            println!("negative cycle:");
            for edge in cycle {
                println!(
                    "{}->{} {}",
                    edge.from(),
                    edge.to(),
                    fmt_number(edge.weight(), ctx.precision())
                );
            }
        }
    }
    Err(AlgoError::NegativeCycle)
}

fn check_dijkstra_weights(graph: &EdgeWeightedDigraph) -> Result<()> {
    if let Some(edge) = graph.edges().find(|edge| edge.weight() < 0.0) {
        bail_usage!(format!(
            "dijkstra requires non-negative weights, found {edge}; use --algorithm bellman-ford"
        ));
    }
    Ok(())
}

pub fn execute(ctx: &CommandContext, input: &Path, options: SpOptions) -> Result<()> {
    let algorithm = options.resolve(ctx.config.shortest_path.algorithm)?;
    let graph = ctx.load(input)?.to_weighted_digraph()?;
    let vertices = graph.vertex_count();
    let source = options.source;
    ensure_vertex!(source, vertices);

    tracing::debug!(%algorithm, source, longest = options.longest, "computing shortest paths");

    match algorithm {
        SpAlgorithm::Dijkstra => {
            check_dijkstra_weights(&graph)?;
            report(ctx, algorithm, vertices, &Dijkstra::new(&graph, source)?)
        }
        SpAlgorithm::BellmanFord => {
            let sp = BellmanFord::new(&graph, source)?;
            match sp.negative_cycle() {
                Some(cycle) => report_cycle(ctx, cycle),
                None => report(ctx, algorithm, vertices, &sp),
            }
        }
        SpAlgorithm::Acyclic => {
            let sp = if options.longest {
                AcyclicSp::longest(&graph, source)?
            } else {
                AcyclicSp::new(&graph, source)?
            };
            report(ctx, algorithm, vertices, &sp)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(algorithm: Option<SpAlgorithm>, longest: bool) -> SpOptions {
        SpOptions {
            algorithm,
            source: 0,
            longest,
        }
    }

    #[test]
    fn test_resolve_uses_config_when_unset() {
        let resolved = options(None, false)
            .resolve(SpAlgorithm::BellmanFord)
            .unwrap();
        assert_eq!(resolved, SpAlgorithm::BellmanFord);
    }

    #[test]
    fn test_resolve_longest_forces_acyclic() {
        let resolved = options(None, true).resolve(SpAlgorithm::Dijkstra).unwrap();
        assert_eq!(resolved, SpAlgorithm::Acyclic);
        assert!(matches!(
            options(Some(SpAlgorithm::Dijkstra), true).resolve(SpAlgorithm::Acyclic),
            Err(AlgoError::UsageError(_))
        ));
    }

    #[test]
    fn test_dijkstra_rejects_negative_weights() {
        let mut graph = EdgeWeightedDigraph::new(2);
        graph.add_edge(0, 1, -1.0).unwrap();
        assert!(matches!(
            check_dijkstra_weights(&graph),
            Err(AlgoError::UsageError(_))
        ));
    }
}
