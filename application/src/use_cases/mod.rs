//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod converse;
pub mod dispatch_chat;
pub mod execute_task;
pub mod search_case_law;
pub(crate) mod shared;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;
