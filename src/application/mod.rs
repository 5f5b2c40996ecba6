//! Application layer: turns loan parameters into a flow graph.
//!
//! This module defines the `AmortizationFlowBuilder`, the single entry point a
//! presentation layer calls on every parameter change. It keeps no state between
//! calls.

pub mod builder;
