// =====================================================================
// File: error.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 6, 2025
//
// Description:
//   Crate-wide error type. Lookups never fail (they return `Option`),
//   so errors only come from configuration (B-tree degree, benchmark
//   settings) and from writing reports to an output sink.
// =====================================================================
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("B-tree degree must be at least {min}, got {degree}")]
    InvalidDegree { degree: usize, min: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IndexResult<T> = std::result::Result<T, IndexError>;
