//! CLI command handlers.
//!
//! Thin presentation layer over the pipeline: each handler wires parsed
//! arguments into the core, prints or writes the rendered result, and
//! returns an exit code. The core itself never logs-and-recovers or exits
//! the process.

mod compare;

pub use compare::run_compare;
