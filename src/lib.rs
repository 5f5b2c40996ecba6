pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::builder::AmortizationFlowBuilder;
pub use config::{BuilderConfig, RemainderPolicy};
pub use domain::flow::{FlowEdge, FlowGraph};
pub use error::{FlowError, Result};
