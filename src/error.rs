//! Error types for dataset analysis

use thiserror::Error;

/// Errors that can occur while classifying or summarizing a dataset.
///
/// Individual tokens that fail to parse as numbers are never errors; they
/// are dropped from the numeric value set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No data to analyze: the dataset is empty")]
    EmptyDataset,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
