use serde::{Deserialize, Serialize};

pub const PRINCIPAL_NODE: &str = "Principal";
pub const INTEREST_NODE: &str = "Interest";
pub const TOTAL_NODE: &str = "Total Paid";

/// Label of a period node covering the 1-based, inclusive years `first..=last`.
pub fn period_label(first: u32, last: u32) -> String {
    format!("Years {first}–{last}")
}

/// A weighted link between two nodes, by index into [`FlowGraph::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    /// Currency amount carried by the link.
    pub weight: f64,
}

/// Payments of a loan as a flow diagram.
///
/// Nodes are ordered as one node per period, then `Principal`, `Interest` and
/// `Total Paid`. Every period has an edge into `Principal` and one into
/// `Interest`; those two have a single edge each into `Total Paid`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == label)
    }

    /// Number of period nodes (everything before `Principal`).
    pub fn period_count(&self) -> usize {
        self.node_index(PRINCIPAL_NODE).unwrap_or(self.nodes.len())
    }

    pub fn inflow(&self, target: usize) -> f64 {
        self.edges
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.weight)
            .sum()
    }

    pub fn outflow(&self, source: usize) -> f64 {
        self.edges
            .iter()
            .filter(|e| e.source == source)
            .map(|e| e.weight)
            .sum()
    }

    pub fn edges_from(&self, source: usize) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter().filter(move |e| e.source == source)
    }

    pub(crate) fn push_node(&mut self, label: impl Into<String>) -> usize {
        self.nodes.push(label.into());
        self.nodes.len() - 1
    }

    pub(crate) fn push_edge(&mut self, source: usize, target: usize, weight: f64) {
        self.edges.push(FlowEdge {
            source,
            target,
            weight,
        });
    }
}
