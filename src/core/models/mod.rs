//! Data models for the Student Grade Analyzer

pub mod roster;
pub mod student;

pub use roster::Roster;
pub use student::Student;
