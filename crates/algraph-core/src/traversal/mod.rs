//! Graph traversal: path discovery, components and depth-first orderings
//!
//! Every depth-first algorithm here runs on [`depth_first`], an explicit-stack
//! driver that reproduces recursive DFS exactly: a vertex is marked when it is
//! discovered, its neighbors are scanned in adjacency order, and it is finished
//! only after every vertex discovered from it has finished. Algorithms plug in
//! through [`DfsVisitor`] callbacks.

pub mod bfs;
pub mod components;
pub mod dfs;
pub mod order;
pub mod scc;

pub use bfs::BreadthFirstPaths;
pub use components::ConnectedComponents;
pub use dfs::DepthFirstPaths;
pub use order::DepthFirstOrder;
pub use scc::StrongComponents;

use crate::graph::GraphView;

/// Callbacks fired by [`depth_first`]
pub trait DfsVisitor {
    /// `v` was discovered and marked
    fn pre_visit(&mut self, _v: usize) {}

    /// `w` was discovered while scanning the neighbors of `v`
    fn tree_edge(&mut self, _v: usize, _w: usize) {}

    /// Every vertex reachable from `v` through unmarked vertices is done
    fn post_visit(&mut self, _v: usize) {}
}

/// Depth-first search from `root` over vertices not yet set in `marked`.
///
/// `marked` must have one slot per vertex and is shared across calls so that a
/// sweep over all roots visits each vertex once. Does nothing if `root` is
/// already marked.
pub fn depth_first<G, V>(graph: &G, root: usize, marked: &mut [bool], visitor: &mut V)
where
    G: GraphView,
    V: DfsVisitor + ?Sized,
{
    if marked[root] {
        return;
    }
    marked[root] = true;
    visitor.pre_visit(root);

    let mut stack = vec![(root, graph.neighbors(root))];
    while let Some((v, neighbors)) = stack.last_mut() {
        let v = *v;
        let next = neighbors.next();
        match next {
            Some(w) if !marked[w] => {
                marked[w] = true;
                visitor.tree_edge(v, w);
                visitor.pre_visit(w);
                stack.push((w, graph.neighbors(w)));
            }
            Some(_) => {}
            None => {
                stack.pop();
                visitor.post_visit(v);
            }
        }
    }
}

/// Walk `edge_to` back from `target` to `source`, returning the vertices from
/// `source` to `target`.
///
/// `target` must have been reached.
pub(crate) fn trace_back(edge_to: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match edge_to[current] {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests;
