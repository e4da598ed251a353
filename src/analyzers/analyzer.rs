//! Pipeline orchestration: classify columns, clean rows, score both
//! batteries, aggregate, summarize demographics, derive recommendations.

use anyhow::Result;
use tracing::info;

use crate::analyzers::columns::{Battery, classify_columns};
use crate::analyzers::demographics::summarize;
use crate::analyzers::recommend::{RuleContext, recommendations};
use crate::analyzers::score::score_battery;
use crate::analyzers::statistics::{battery_statistics, log_statistics};
use crate::analyzers::types::AnalysisResult;
use crate::analyzers::validate::clean_dataset;
use crate::dataset::{Cell, Dataset};

/// Column names for the derived score columns on the annotated dataset.
pub const GALLERY_SCORE_COLUMN: &str = "SUS_Gallery";
pub const MAP_SCORE_COLUMN: &str = "SUS_Map";

/// Runs one full analysis pass over the dataset.
///
/// Pure with respect to its input: the dataset is copied before
/// cleaning, and the copy carries the derived score columns.
///
/// # Errors
///
/// Fails when the dataset is empty or no complete responses survive
/// validation; callers are expected to fall back to sample data.
pub fn analyze(dataset: &Dataset) -> Result<AnalysisResult> {
    let columns = classify_columns(dataset.columns());
    info!(
        gallery_columns = ?columns.gallery,
        map_columns = ?columns.map,
        "battery columns classified"
    );

    let cleaned = clean_dataset(dataset, &columns)?;

    let gallery_scores = score_battery(&cleaned, &columns.gallery);
    let map_scores = score_battery(&cleaned, &columns.map);

    let mut scored = cleaned;
    scored.push_column(GALLERY_SCORE_COLUMN, to_cells(&gallery_scores));
    scored.push_column(MAP_SCORE_COLUMN, to_cells(&map_scores));

    let gallery = battery_statistics(&gallery_scores);
    let map = battery_statistics(&map_scores);
    log_statistics(Battery::Gallery, gallery.as_ref());
    log_statistics(Battery::Map, map.as_ref());

    let demographics = summarize(&scored);

    let ctx = RuleContext {
        gallery_mean: gallery.as_ref().map(|s| s.mean).unwrap_or(0.0),
        map_mean: map.as_ref().map(|s| s.mean).unwrap_or(0.0),
        demographics: &demographics,
    };
    let recommendations = recommendations(&ctx);
    info!(count = recommendations.len(), "recommendations generated");

    Ok(AnalysisResult {
        gallery,
        map,
        demographics,
        recommendations,
        scored,
    })
}

fn to_cells(scores: &[Option<f64>]) -> Vec<Cell> {
    scores
        .iter()
        .map(|score| match score {
            Some(v) => Cell::Number(*v),
            None => Cell::Missing,
        })
        .collect()
}
