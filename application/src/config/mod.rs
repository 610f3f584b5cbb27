//! Application-level configuration.
//!
//! - [`ExecutionParams`] — dispatch loop control (tool turns, search limits, deadline)

pub mod execution_params;

pub use execution_params::ExecutionParams;
