// Template-driven writing aids: professional summary and cover letter.
// Output is deterministic; handlers add the configured generation delay.

pub mod cover_letter;
pub mod handlers;
pub mod summary;
pub mod templates;
pub mod tone;
