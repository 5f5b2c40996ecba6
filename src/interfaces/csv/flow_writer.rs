use crate::domain::flow::FlowGraph;
use crate::domain::money::Money;
use crate::error::{FlowError, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct EdgeRecord<'a> {
    scenario: usize,
    source: &'a str,
    target: &'a str,
    weight: Money,
}

/// Writes flow graph edges as CSV, one row per edge with node labels resolved.
pub struct FlowWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> FlowWriter<W> {
    /// Creates a new `FlowWriter`. The header is emitted with the first row.
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Appends every edge of `graph`, tagged with the scenario number.
    pub fn write_graph(&mut self, scenario: usize, graph: &FlowGraph) -> Result<()> {
        for edge in &graph.edges {
            self.writer.serialize(EdgeRecord {
                scenario,
                source: node_label(graph, edge.source)?,
                target: node_label(graph, edge.target)?,
                weight: Money::from_f64(edge.weight)?,
            })?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn node_label(graph: &FlowGraph, idx: usize) -> Result<&str> {
    graph
        .nodes
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| FlowError::InvalidInput(format!("Edge refers to missing node {idx}")))
}
