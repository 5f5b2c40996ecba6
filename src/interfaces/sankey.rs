//! Render-ready Sankey description.
//!
//! [`SankeyFigure`] serializes to the figure JSON accepted by Plotly's `sankey`
//! trace, with the outline, padding and thickness used for loan diagrams.

use crate::domain::flow::FlowGraph;
use serde::Serialize;

pub const OUTLINE_COLOR: &str = "black";
pub const OUTLINE_WIDTH: f64 = 1.0;
pub const NODE_PAD: f64 = 50.0;
pub const NODE_THICKNESS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub color: String,
    pub width: f64,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            color: OUTLINE_COLOR.to_string(),
            width: OUTLINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyNodes {
    pub label: Vec<String>,
    pub pad: f64,
    pub thickness: f64,
    pub line: Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyLinks {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<f64>,
    pub line: Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub node: SankeyNodes,
    pub link: SankeyLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyFigure {
    pub data: Vec<SankeyTrace>,
}

impl From<&FlowGraph> for SankeyFigure {
    fn from(graph: &FlowGraph) -> Self {
        let node = SankeyNodes {
            label: graph.nodes.clone(),
            pad: NODE_PAD,
            thickness: NODE_THICKNESS,
            line: Outline::default(),
        };
        let link = SankeyLinks {
            source: graph.edges.iter().map(|e| e.source).collect(),
            target: graph.edges.iter().map(|e| e.target).collect(),
            value: graph.edges.iter().map(|e| e.weight).collect(),
            line: Outline::default(),
        };
        Self {
            data: vec![SankeyTrace {
                kind: "sankey",
                node,
                link,
            }],
        }
    }
}
