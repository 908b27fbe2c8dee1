//! Text graph descriptions
//!
//! ```text
//! 4          vertex count
//! 3          edge count
//! 0 1 0.5    one edge per line: v w [weight]
//! 1 2 1.25
//! 2 3 -0.75
//! ```
//!
//! Blank lines are ignored. The whole description is parsed and validated
//! before any graph is built, so a bad line never leaves a partial graph.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use algraph_core::error::{AlgoError, Result};
use algraph_core::graph::{Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph};

/// One parsed edge line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    pub line: usize,
    pub v: usize,
    pub w: usize,
    pub weight: Option<f64>,
}

/// A validated graph description
#[derive(Debug, Clone, PartialEq)]
pub struct GraphDescription {
    pub vertices: usize,
    pub edges: Vec<EdgeLine>,
}

impl GraphDescription {
    /// Read a description from `path`, or from stdin when `path` is "-"
    pub fn read(path: &Path) -> Result<Self> {
        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(path)?
        };
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line, first) = lines
            .next()
            .ok_or_else(|| AlgoError::invalid_input(1, "missing vertex count"))?;
        let vertices = parse_count(line, first, "vertex count")?;
        check_vertex_count(line, vertices)?;

        let (line, second) = lines
            .next()
            .ok_or_else(|| AlgoError::invalid_input(line + 1, "missing edge count"))?;
        let expected = parse_count(line, second, "edge count")?;

        // the declared count is untrusted; grow with the lines actually present
        let mut edges = Vec::new();
        for (line, text) in lines {
            if edges.len() == expected {
                return Err(AlgoError::invalid_input(
                    line,
                    format!("more than the declared {expected} edges"),
                ));
            }
            edges.push(parse_edge(line, text, vertices)?);
        }
        if edges.len() < expected {
            return Err(AlgoError::invalid_input(
                text.lines().count().max(1),
                format!("expected {expected} edges, found {}", edges.len()),
            ));
        }

        tracing::debug!(vertices, edges = edges.len(), "parsed graph description");
        Ok(Self { vertices, edges })
    }

    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertices);
        for edge in &self.edges {
            graph.add_edge(edge.v, edge.w)?;
        }
        Ok(graph)
    }

    pub fn to_digraph(&self) -> Result<Digraph> {
        let mut graph = Digraph::new(self.vertices);
        for edge in &self.edges {
            graph.add_edge(edge.v, edge.w)?;
        }
        Ok(graph)
    }

    pub fn to_weighted_graph(&self) -> Result<EdgeWeightedGraph> {
        self.require_weights()?;
        let mut graph = EdgeWeightedGraph::new(self.vertices);
        for edge in &self.edges {
            graph.add_edge(edge.v, edge.w, edge.weight.unwrap_or_default())?;
        }
        Ok(graph)
    }

    pub fn to_weighted_digraph(&self) -> Result<EdgeWeightedDigraph> {
        self.require_weights()?;
        let mut graph = EdgeWeightedDigraph::new(self.vertices);
        for edge in &self.edges {
            graph.add_edge(edge.v, edge.w, edge.weight.unwrap_or_default())?;
        }
        Ok(graph)
    }

    fn require_weights(&self) -> Result<()> {
        match self.edges.iter().find(|edge| edge.weight.is_none()) {
            Some(edge) => Err(AlgoError::invalid_input(edge.line, "edge weight required")),
            None => Ok(()),
        }
    }
}

fn parse_count(line: usize, text: &str, what: &str) -> Result<usize> {
    text.parse()
        .map_err(|_| AlgoError::invalid_input(line, format!("invalid {what} '{text}'")))
}

/// Reject a vertex count whose adjacency table could not be allocated
fn check_vertex_count(line: usize, vertices: usize) -> Result<()> {
    let mut table: Vec<Vec<usize>> = Vec::new();
    table.try_reserve_exact(vertices).map_err(|_| {
        AlgoError::invalid_input(line, format!("vertex count {vertices} is too large"))
    })
}

fn parse_edge(line: usize, text: &str, vertices: usize) -> Result<EdgeLine> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(AlgoError::invalid_input(
            line,
            format!("expected 'v w [weight]', found '{text}'"),
        ));
    }

    let vertex = |field: &str| -> Result<usize> {
        let v: usize = field
            .parse()
            .map_err(|_| AlgoError::invalid_input(line, format!("invalid vertex '{field}'")))?;
        if v >= vertices {
            return Err(AlgoError::invalid_input(
                line,
                format!("vertex {v} is out of range for {vertices} vertices"),
            ));
        }
        Ok(v)
    };
    let v = vertex(fields[0])?;
    let w = vertex(fields[1])?;

    let weight = match fields.get(2) {
        Some(field) => {
            let weight: f64 = field
                .parse()
                .map_err(|_| AlgoError::invalid_input(line, format!("invalid weight '{field}'")))?;
            if !weight.is_finite() {
                return Err(AlgoError::invalid_input(
                    line,
                    format!("weight '{field}' is not a finite number"),
                ));
            }
            Some(weight)
        }
        None => None,
    };

    Ok(EdgeLine { line, v, w, weight })
}

#[cfg(test)]
mod tests {
    use super::*;
    use algraph_core::graph::GraphView;

    #[test]
    fn test_parse_weighted_description() {
        let desc = GraphDescription::parse("3\n2\n0 1 0.5\n\n1 2 -1.5\n").unwrap();
        assert_eq!(desc.vertices, 3);
        assert_eq!(desc.edges.len(), 2);
        assert_eq!(desc.edges[1].weight, Some(-1.5));
        assert_eq!(desc.edges[1].line, 5);

        let g = desc.to_weighted_digraph().unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_unweighted_lines_build_plain_graphs_only() {
        let desc = GraphDescription::parse("2\n1\n0 1\n").unwrap();
        assert_eq!(desc.to_graph().unwrap().edge_count(), 1);
        assert_eq!(desc.to_digraph().unwrap().edge_count(), 1);
        assert!(matches!(
            desc.to_weighted_graph(),
            Err(AlgoError::InvalidInput { line: 3, .. })
        ));
    }

    #[test]
    fn test_out_of_range_vertex_reports_line() {
        let err = GraphDescription::parse("2\n2\n0 1\n1 2\n").unwrap_err();
        assert!(matches!(err, AlgoError::InvalidInput { line: 4, .. }));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_edge_count_mismatch() {
        assert!(matches!(
            GraphDescription::parse("3\n2\n0 1\n"),
            Err(AlgoError::InvalidInput { .. })
        ));
        assert!(matches!(
            GraphDescription::parse("3\n1\n0 1\n1 2\n"),
            Err(AlgoError::InvalidInput { line: 4, .. })
        ));
    }

    #[test]
    fn test_malformed_lines() {
        for text in [
            "",
            "x\n0\n",
            "2\n",
            "2\n1\n0\n",
            "2\n1\n0 1 2 3\n",
            "2\n1\n0 a\n",
            "2\n1\n0 1 heavy\n",
            "2\n1\n0 1 NaN\n",
            "2\n1\n0 1 inf\n",
            "2\n1\n0 1 -inf\n",
            "2\n1\n-1 1\n",
        ] {
            assert!(
                GraphDescription::parse(text).is_err(),
                "accepted malformed input {text:?}"
            );
        }
    }

    #[test]
    fn test_huge_declared_counts_are_rejected_without_allocating() {
        let err = GraphDescription::parse("1\n18446744073709551615\n").unwrap_err();
        assert!(matches!(err, AlgoError::InvalidInput { .. }));
        assert!(err.to_string().contains("expected 18446744073709551615 edges"));

        let err = GraphDescription::parse("18446744073709551615\n0\n").unwrap_err();
        assert!(matches!(err, AlgoError::InvalidInput { line: 1, .. }));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_infinite_weight_reports_line() {
        let err = GraphDescription::parse("2\n1\n\n0 1 inf\n").unwrap_err();
        assert!(matches!(err, AlgoError::InvalidInput { line: 4, .. }));
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let desc = GraphDescription::parse("0\n0\n").unwrap();
        assert_eq!(desc.to_graph().unwrap().vertex_count(), 0);
    }
}
