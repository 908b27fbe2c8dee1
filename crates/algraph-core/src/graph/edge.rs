use std::fmt;

use serde::Serialize;

use crate::error::{AlgoError, Result};

/// Position of an edge record in its graph's edge arena
pub type EdgeId = usize;

/// Reject NaN and infinite weights; infinity marks unreached vertices
pub(crate) fn checked_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() {
        return Err(AlgoError::InvalidWeight { value: weight });
    }
    Ok(weight)
}

/// Weighted undirected edge between `v` and `w`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    v: usize,
    w: usize,
    weight: f64,
}

impl Edge {
    pub fn new(v: usize, w: usize, weight: f64) -> Result<Self> {
        Ok(Self {
            v,
            w,
            weight: checked_weight(weight)?,
        })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// One of the two endpoints (the first one given at construction)
    pub fn either(&self) -> usize {
        self.v
    }

    /// The endpoint that is not `vertex`; `vertex` must be an endpoint
    pub fn other(&self, vertex: usize) -> usize {
        debug_assert!(vertex == self.v || vertex == self.w);
        if vertex == self.v {
            self.w
        } else {
            self.v
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.v, self.w)
    }

    pub(crate) fn set_weight(&mut self, weight: f64) -> Result<()> {
        self.weight = checked_weight(weight)?;
        Ok(())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.2}", self.v, self.w, self.weight)
    }
}

/// Weighted edge pointing from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl DirectedEdge {
    pub fn new(from: usize, to: usize, weight: f64) -> Result<Self> {
        Ok(Self {
            from,
            to,
            weight: checked_weight(weight)?,
        })
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Same edge pointing the other way
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    pub(crate) fn set_weight(&mut self, weight: f64) -> Result<()> {
        self.weight = checked_weight(weight)?;
        Ok(())
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}
