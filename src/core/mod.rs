//! Core module: roster model, grade validation, aggregation and the menu session

pub mod aggregate;
pub mod error;
pub mod grades;
pub mod models;
pub mod report;
pub mod session;
pub mod top_performer;

pub use error::{AnalyzerError, ValidationError};
