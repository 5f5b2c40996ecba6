//! Domain types and the amortization math.
//!
//! Everything here is pure: values are built, validated and consumed within a
//! single computation.

pub mod flow;
pub mod loan;
pub mod money;
pub mod schedule;
