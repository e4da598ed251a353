use crate::analyzers::types::Severity;

/// Interpretation of a mean SUS score: letter grade, qualitative label,
/// severity tier, and display symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub grade: &'static str,
    pub label: &'static str,
    pub severity: Severity,
    pub symbol: &'static str,
}

/// Maps a mean SUS score (0–100) onto its grade band.
///
/// | Range    | Grade | Label        |
/// |----------|-------|--------------|
/// | >= 90    | A+    | Outstanding+ |
/// | >= 80    | A     | Excellent    |
/// | >= 70    | B     | Good         |
/// | >= 60    | C     | Acceptable   |
/// | >= 50    | D     | Poor         |
/// | < 50     | F     | Unacceptable |
pub fn interpret(mean: f64) -> GradeBand {
    match mean {
        m if m >= 90.0 => GradeBand {
            grade: "A+",
            label: "Outstanding+",
            severity: Severity::Success,
            symbol: "🏆",
        },
        m if m >= 80.0 => GradeBand {
            grade: "A",
            label: "Excellent",
            severity: Severity::Success,
            symbol: "⭐",
        },
        m if m >= 70.0 => GradeBand {
            grade: "B",
            label: "Good",
            severity: Severity::Info,
            symbol: "👍",
        },
        m if m >= 60.0 => GradeBand {
            grade: "C",
            label: "Acceptable",
            severity: Severity::Warning,
            symbol: "⚠️",
        },
        m if m >= 50.0 => GradeBand {
            grade: "D",
            label: "Poor",
            severity: Severity::Warning,
            symbol: "👎",
        },
        _ => GradeBand {
            grade: "F",
            label: "Unacceptable",
            severity: Severity::Danger,
            symbol: "❌",
        },
    }
}
