// ATS analysis: JD keyword extraction and resume scoring.
// Scoring sits behind the AtsScorer trait; AppState picks the backend.

pub mod handlers;
pub mod keywords;
pub mod scoring;
