//! Shared library for the Student Grade Analyzer
//! Contains the roster model, grade validation, aggregation and the menu session

pub mod core;
pub mod logger;
pub mod shared;

pub use shared::*;
