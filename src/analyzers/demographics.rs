//! Summarizes auxiliary demographic columns.
//!
//! Columns are located by case-insensitive substring match against fixed
//! vocabularies, first match wins. A vocabulary with no matching column
//! yields default values, never an error.

use std::collections::BTreeMap;

use tracing::debug;

use crate::analyzers::types::Demographics;
use crate::dataset::Dataset;

/// Name fragments identifying the technology-familiarity column.
const FAMILIARITY_MARKERS: &[&str] = &["familiaritat", "tecnolog", "technology", "familiarity"];
/// Name fragment identifying the prior institution-experience column.
const EXPERIENCE_MARKERS: &[&str] = &["uab"];
/// Name fragments identifying the age-bracket column.
const AGE_MARKERS: &[&str] = &["edat", "age"];

/// Literal categorical tokens counted in the experience column. The match
/// is case-sensitive; any other value is ignored.
const EXPERIENCE_YES: &str = "SI";
const EXPERIENCE_NO: &str = "NO";

/// Extracts demographic distributions from the cleaned dataset.
pub fn summarize(dataset: &Dataset) -> Demographics {
    let mut demographics = Demographics {
        total_respondents: dataset.len(),
        ..Demographics::default()
    };

    if let Some(col) = find_column(dataset, FAMILIARITY_MARKERS) {
        let values: Vec<f64> = dataset
            .column_cells(&col)
            .iter()
            .filter_map(|cell| cell.as_number())
            .collect();
        if !values.is_empty() {
            demographics.tech_familiarity_mean =
                Some(values.iter().sum::<f64>() / values.len() as f64);
        }
        demographics.tech_familiarity_distribution = value_counts(dataset, &col);
    }

    if let Some(col) = find_column(dataset, EXPERIENCE_MARKERS) {
        for cell in dataset.column_cells(&col) {
            match cell.label().as_deref() {
                Some(EXPERIENCE_YES) => demographics.experience_yes += 1,
                Some(EXPERIENCE_NO) => demographics.experience_no += 1,
                _ => {}
            }
        }
    }

    if let Some(col) = find_column(dataset, AGE_MARKERS) {
        demographics.age_distribution = value_counts(dataset, &col);
    }

    demographics
}

/// First column whose lowercased name contains any of the markers.
fn find_column(dataset: &Dataset, markers: &[&str]) -> Option<String> {
    let found = dataset.columns().iter().find(|col| {
        let lower = col.to_lowercase();
        markers.iter().any(|m| lower.contains(m))
    });

    match found {
        Some(col) => Some(col.clone()),
        None => {
            debug!(?markers, "no matching demographic column");
            None
        }
    }
}

/// Frequency of each non-missing value in a column, keyed by display label.
fn value_counts(dataset: &Dataset, column: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for cell in dataset.column_cells(column) {
        if let Some(label) = cell.label() {
            *counts.entry(label).or_insert(0) += 1;
        }
    }
    counts
}
