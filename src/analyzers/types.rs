//! Data types produced by the analysis pipeline.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::Dataset;

/// Severity tier shared by grade bands and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

/// Descriptive statistics for one battery's valid SUS scores.
#[derive(Debug, Clone, Serialize)]
pub struct BatteryStatistics {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (Bessel's correction); 0.0 when only one
    /// score exists.
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub scores: Vec<f64>,
    pub grade: &'static str,
    pub label: &'static str,
    pub severity: Severity,
    pub symbol: &'static str,
}

/// Respondent demographics pulled from auxiliary columns. Every field
/// falls back to its default when the source column cannot be located.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Demographics {
    pub total_respondents: usize,
    pub tech_familiarity_mean: Option<f64>,
    pub experience_yes: usize,
    pub experience_no: usize,
    pub age_distribution: BTreeMap<String, usize>,
    pub tech_familiarity_distribution: BTreeMap<String, usize>,
}

/// One human-readable finding emitted by the recommendation rules.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub symbol: &'static str,
    pub title: &'static str,
    pub message: String,
}

/// Terminal artifact of one analysis pass, handed to the report writers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub gallery: Option<BatteryStatistics>,
    pub map: Option<BatteryStatistics>,
    pub demographics: Demographics,
    /// In rule-evaluation order, not sorted by severity.
    pub recommendations: Vec<Recommendation>,
    /// Cleaned dataset annotated with the two score columns.
    pub scored: Dataset,
}
