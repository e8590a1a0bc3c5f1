//! Analysis orchestration
//!
//! Runs one analysis end to end (tokenize, classify, summarize, tabulate)
//! and returns everything as a single [`Analysis`] value. Reporters and
//! exporters receive that value explicitly; nothing is cached between runs.

mod insight;

pub use insight::Insight;

use crate::classifier::{self, ScaleRegistry};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{
    FrequencyRow, FrequencyTotals, ScaleClassification, SummaryStatistics, VarianceMode,
};
use crate::stats;
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Settings for one analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub variance_mode: VarianceMode,
    pub registry: ScaleRegistry,
}

impl AnalysisOptions {
    pub fn new(variance_mode: VarianceMode) -> Self {
        Self {
            variance_mode,
            ..Default::default()
        }
    }

    pub fn with_registry(mut self, registry: ScaleRegistry) -> Self {
        self.registry = registry;
        self
    }
}

/// Complete result of analyzing one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Tokens as received, in input order
    pub data: Vec<String>,
    /// Observations the measures were computed on
    pub sample_size: usize,
    /// Non-numeric tokens dropped from quantitative data
    pub discarded: usize,
    pub classification: ScaleClassification,
    pub variance_mode: VarianceMode,
    pub statistics: SummaryStatistics,
    pub frequency_table: Vec<FrequencyRow>,
    pub totals: FrequencyTotals,
    pub insight: Insight,
}

impl Analysis {
    pub fn is_quantitative(&self) -> bool {
        self.classification.is_quantitative()
    }
}

/// Analyze already-tokenized values
pub fn analyze<S: AsRef<str>>(tokens: &[S], options: &AnalysisOptions) -> AnalysisResult<Analysis> {
    let classification = classifier::classify_with(tokens, &options.registry)?;
    info!("Classified {} tokens as {}", tokens.len(), classification);

    let statistics = stats::compute_statistics(tokens, &classification, options.variance_mode)?;
    let frequency_table = stats::build_frequency_table(tokens, &classification)?;

    let sample_size: usize = frequency_table.iter().map(|r| r.absolute_freq).sum();
    if sample_size == 0 {
        return Err(AnalysisError::EmptyDataset);
    }
    let discarded = tokens.len() - sample_size;
    if discarded > 0 {
        debug!("Discarded {} non-numeric tokens", discarded);
    }

    let totals = stats::frequency_totals(&frequency_table, sample_size);
    let insight = if classification.is_quantitative() {
        Insight::quantitative(sample_size, &statistics)
    } else {
        Insight::qualitative(&frequency_table)
    };

    Ok(Analysis {
        data: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
        sample_size,
        discarded,
        classification,
        variance_mode: options.variance_mode,
        statistics,
        frequency_table,
        totals,
        insight,
    })
}

/// Tokenize freeform text and analyze it
pub fn analyze_text(text: &str, options: &AnalysisOptions) -> AnalysisResult<Analysis> {
    let tokens = tokenize(text);
    debug!("Tokenized input into {} values", tokens.len());
    analyze(&tokens, options)
}
