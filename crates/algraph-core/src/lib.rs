//! Algraph Core Library
//!
//! Classical graph algorithms and the priority structures they are built on:
//! indexed and plain binary heaps, union-find, graph containers, traversal,
//! minimum spanning trees and single-source shortest paths.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod mst;
pub mod pq;
pub mod sp;
pub mod traversal;
pub mod union_find;
