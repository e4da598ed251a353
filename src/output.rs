//! Report export and console summary.
//!
//! Writes the full analysis as pretty-printed JSON, the annotated dataset
//! as CSV, and logs a short human summary.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::analyzers::types::AnalysisResult;
use crate::dataset::Dataset;

#[derive(Serialize)]
struct ReportMetadata<'a> {
    generated_at: DateTime<Utc>,
    methodology: &'static str,
    sample_size: usize,
    source: Option<&'a str>,
}

#[derive(Serialize)]
struct Report<'a> {
    metadata: ReportMetadata<'a>,
    results: &'a AnalysisResult,
}

/// Writes the complete analysis result as pretty-printed JSON.
pub fn write_json_report(path: &str, result: &AnalysisResult, source: Option<&str>) -> Result<()> {
    let report = Report {
        metadata: ReportMetadata {
            generated_at: Utc::now(),
            methodology: "System Usability Scale (SUS)",
            sample_size: result.demographics.total_respondents,
            source,
        },
        results: result,
    };

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&report)?)?;
    info!(path, "JSON report written");
    Ok(())
}

/// Writes the annotated dataset (including the two score columns) as CSV.
pub fn write_scored_csv(path: &str, dataset: &Dataset) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        let fields: Vec<String> = row
            .iter()
            .map(|cell| cell.label().unwrap_or_default())
            .collect();
        writer.write_record(&fields)?;
    }
    writer.flush()?;

    info!(path, rows = dataset.len(), "scored CSV written");
    Ok(())
}

/// Logs the headline numbers of one analysis pass.
pub fn log_summary(result: &AnalysisResult) {
    info!(
        respondents = result.demographics.total_respondents,
        "analysis complete"
    );

    match (&result.gallery, &result.map) {
        (Some(gallery), Some(map)) => {
            info!(
                mean = %format!("{:.1}", gallery.mean),
                label = gallery.label,
                grade = gallery.grade,
                "Gallery"
            );
            info!(
                mean = %format!("{:.1}", map.mean),
                label = map.label,
                grade = map.grade,
                "Map"
            );
            info!(
                gap = %format!("{:.1}", (gallery.mean - map.mean).abs()),
                "score difference"
            );
        }
        _ => warn!("analysis incomplete, one or both batteries produced no scores"),
    }

    for rec in &result.recommendations {
        info!(
            severity = ?rec.severity,
            title = rec.title,
            message = %rec.message,
            "recommendation"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::analyzer::analyze;
    use crate::sample::sample_dataset;
    use std::env;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_write_json_report() {
        let result = analyze(&sample_dataset()).unwrap();
        let path = temp_path("sus_rater_test_report.json");
        let _ = fs::remove_file(&path);

        write_json_report(&path, &result, Some("sample")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["metadata"]["sample_size"], 6);
        assert_eq!(
            parsed["metadata"]["methodology"],
            "System Usability Scale (SUS)"
        );
        assert!(parsed["results"]["gallery"]["mean"].is_number());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_scored_csv_round_trips_columns() {
        let result = analyze(&sample_dataset()).unwrap();
        let path = temp_path("sus_rater_test_scored.csv");
        let _ = fs::remove_file(&path);

        write_scored_csv(&path, &result.scored).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert!(header.contains("SUS_Gallery"));
        assert!(header.contains("SUS_Map"));
        // 1 header + 6 respondents
        assert_eq!(content.lines().count(), 7);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_log_summary_does_not_panic() {
        let result = analyze(&sample_dataset()).unwrap();
        log_summary(&result);
    }
}
