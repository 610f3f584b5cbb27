//! Tools the model may call during a task
//!
//! - `legal_search`: case-law lookup through the legal-search port

mod executor;
mod legal_search;
mod schema;

pub use executor::LegalToolExecutor;
pub use legal_search::legal_search_definition;
pub use schema::JsonSchemaToolConverter;
