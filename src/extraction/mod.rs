//! Extraction module
//!
//! The field and grid readers plus the orchestrator that drives a
//! declarative extraction plan into a snapshot.

pub mod field;
pub mod grid;
pub mod orchestrator;

pub use field::FieldReader;
pub use grid::GridReader;
pub use orchestrator::WorkerExtractor;
