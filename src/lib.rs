//! scalestat - descriptive statistics by measurement scale
//!
//! Classifies a list of raw values as quantitative (discrete or continuous)
//! or qualitative (ordinal or nominal) and computes the summary measures and
//! frequency table that make sense for that scale.
//!
//! ```
//! use scalestat::analysis::{analyze_text, AnalysisOptions};
//! use scalestat::models::ScaleClassification;
//!
//! let analysis = analyze_text("10, 20, 20, 30", &AnalysisOptions::default()).unwrap();
//! assert_eq!(analysis.classification, ScaleClassification::QuantitativeDiscrete);
//! assert_eq!(analysis.statistics.mode.label(), "20");
//! ```

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod demo;
pub mod error;
pub mod input;
pub mod models;
pub mod reporters;
pub mod stats;
pub mod tokenizer;

pub use analysis::{analyze, analyze_text, Analysis, AnalysisOptions};
pub use classifier::{classify, classify_with, ScaleRegistry};
pub use error::{AnalysisError, AnalysisResult};
pub use stats::{build_frequency_table, compute_statistics};
