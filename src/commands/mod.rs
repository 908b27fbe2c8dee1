//! CLI commands for algraph

pub mod components;
pub mod dispatch;
pub mod load;
pub mod mst;
pub mod paths;
pub mod sp;
pub mod stats;
pub mod topo;

use serde::Serialize;

use algraph_core::error::Result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a weight or distance with the configured number of decimals
pub fn fmt_number(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Join vertices with a separator
pub fn join_vertices(vertices: &[usize], separator: &str) -> String {
    vertices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_number() {
        assert_eq!(fmt_number(1.23456, 2), "1.23");
        assert_eq!(fmt_number(2.0, 0), "2");
        assert_eq!(fmt_number(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn test_join_vertices() {
        assert_eq!(join_vertices(&[0, 1, 3], "-"), "0-1-3");
        assert_eq!(join_vertices(&[], " "), "");
    }
}
