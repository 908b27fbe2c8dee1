use crate::error::Result;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, GraphView};
use crate::sp::{PathTree, ShortestPaths};
use crate::traversal::DepthFirstOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Shortest,
    Longest,
}

impl Objective {
    fn unreached(self) -> f64 {
        match self {
            Objective::Shortest => f64::INFINITY,
            Objective::Longest => f64::NEG_INFINITY,
        }
    }

    fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Objective::Shortest => candidate < current,
            Objective::Longest => candidate > current,
        }
    }
}

/// Shortest or longest paths in an edge-weighted DAG.
///
/// Vertices are relaxed once each in reverse postorder, which handles negative
/// weights in linear time. Results on a graph with a cycle are meaningless.
#[derive(Debug, Clone)]
pub struct AcyclicSp {
    tree: PathTree,
    objective: Objective,
}

impl AcyclicSp {
    pub fn new(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        Self::build(graph, source, Objective::Shortest)
    }

    /// Longest paths from `source`; unreachable vertices sit at negative infinity
    pub fn longest(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        Self::build(graph, source, Objective::Longest)
    }

    pub fn is_longest(&self) -> bool {
        self.objective == Objective::Longest
    }

    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn build(graph: &EdgeWeightedDigraph, source: usize, objective: Objective) -> Result<Self> {
        graph.validate_vertex(source)?;

        let order = DepthFirstOrder::new(graph);
        let mut tree = PathTree::new(graph.vertex_count(), source, objective.unreached());

        for v in order.reverse_post() {
            if !tree.reached(v) {
                continue;
            }
            for edge in graph.adjacent(v) {
                let candidate = tree.dist_to[v] + edge.weight();
                if objective.improves(candidate, tree.dist_to[edge.to()]) {
                    tree.improve(edge, candidate);
                }
            }
        }

        tracing::debug!(reached = tree.reached_count(), "acyclic relaxation complete");
        Ok(Self { tree, objective })
    }
}

impl ShortestPaths for AcyclicSp {
    fn source(&self) -> usize {
        self.tree.source
    }

    fn dist_to(&self, v: usize) -> Result<f64> {
        self.tree.dist(v)
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.tree.has_path(v)
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        self.tree.path(v)
    }
}
