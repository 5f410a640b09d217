// Resume document: in-memory store, per-section editors, required-field
// checks and the completeness report.

pub mod completeness;
pub mod handlers;
pub mod sections;
pub mod store;
pub mod validation;
