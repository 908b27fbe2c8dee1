use std::collections::VecDeque;

use crate::error::{AlgoError, Result};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, GraphView};
use crate::sp::{PathTree, ShortestPaths};

/// Queue-based Bellman-Ford.
///
/// Only vertices whose distance just improved are re-scanned. After every `V`
/// edge relaxations the parent edges are checked for a cycle; a cycle there is
/// a negative cycle reachable from the source, and the search stops. Distance
/// and path queries then fail with `NegativeCycle`.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    tree: PathTree,
    cycle: Option<Vec<DirectedEdge>>,
}

impl BellmanFord {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;

        let vertices = graph.vertex_count();
        let mut tree = PathTree::new(vertices, source, f64::INFINITY);
        let mut on_queue = vec![false; vertices];
        let mut queue = VecDeque::from([source]);
        on_queue[source] = true;

        let mut calls = 0_usize;
        let mut cycle = None;

        'search: while let Some(v) = queue.pop_front() {
            on_queue[v] = false;
            for edge in graph.adjacent(v) {
                let w = edge.to();
                let candidate = tree.dist_to[v] + edge.weight();
                if candidate < tree.dist_to[w] {
                    tree.improve(edge, candidate);
                    if !on_queue[w] {
                        queue.push_back(w);
                        on_queue[w] = true;
                    }
                }
                calls += 1;
                if calls % vertices == 0 {
                    cycle = parent_cycle(&tree.edge_to);
                    if cycle.is_some() {
                        break 'search;
                    }
                }
            }
        }

        match &cycle {
            Some(edges) => {
                let weight: f64 = edges.iter().map(DirectedEdge::weight).sum();
                tracing::warn!(
                    length = edges.len(),
                    weight,
                    "negative cycle reachable from source {source}"
                );
            }
            None => {
                tracing::debug!(calls, reached = tree.reached_count(), "bellman-ford complete");
            }
        }

        Ok(Self { tree, cycle })
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Edges of the detected cycle in travel order
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_deref()
    }

    fn ensure_no_cycle(&self) -> Result<()> {
        if self.has_negative_cycle() {
            return Err(AlgoError::NegativeCycle);
        }
        Ok(())
    }
}

impl ShortestPaths for BellmanFord {
    fn source(&self) -> usize {
        self.tree.source
    }

    fn dist_to(&self, v: usize) -> Result<f64> {
        self.ensure_no_cycle()?;
        self.tree.dist(v)
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.ensure_no_cycle()?;
        self.tree.has_path(v)
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        self.ensure_no_cycle()?;
        self.tree.path(v)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unseen,
    OnWalk,
    Done,
}

/// Find a cycle in the graph formed by the parent edges.
///
/// Every vertex has at most one parent, so following parents from any start
/// either ends at a root, joins an earlier walk, or closes a cycle.
fn parent_cycle(edge_to: &[Option<DirectedEdge>]) -> Option<Vec<DirectedEdge>> {
    let mut marks = vec![Mark::Unseen; edge_to.len()];

    for start in 0..edge_to.len() {
        if marks[start] != Mark::Unseen {
            continue;
        }
        let mut walk = Vec::new();
        let mut v = start;
        loop {
            match marks[v] {
                Mark::OnWalk => return collect_cycle(edge_to, v),
                Mark::Done => break,
                Mark::Unseen => {}
            }
            marks[v] = Mark::OnWalk;
            walk.push(v);
            match edge_to[v] {
                Some(edge) => v = edge.from(),
                None => break,
            }
        }
        for u in walk {
            marks[u] = Mark::Done;
        }
    }
    None
}

/// Parent edges around the cycle through `anchor`, in travel order
fn collect_cycle(edge_to: &[Option<DirectedEdge>], anchor: usize) -> Option<Vec<DirectedEdge>> {
    let mut cycle = Vec::new();
    let mut v = anchor;
    loop {
        let edge = edge_to[v]?;
        cycle.push(edge);
        v = edge.from();
        if v == anchor {
            break;
        }
    }
    cycle.reverse();
    Some(cycle)
}
