//! Rule-based recommendations derived from the aggregated results.
//!
//! An ordered list of independent predicate rules; each appends at most
//! one recommendation. Output keeps rule-evaluation order.

use crate::analyzers::types::{Demographics, Recommendation, Severity};

/// Inputs shared by every rule. A battery without statistics enters as
/// mean 0.
pub struct RuleContext<'a> {
    pub gallery_mean: f64,
    pub map_mean: f64,
    pub demographics: &'a Demographics,
}

type Rule = fn(&RuleContext) -> Option<Recommendation>;

const RULES: &[Rule] = &[
    overall_usability,
    gallery_needs_improvement,
    map_needs_improvement,
    significant_difference,
    low_tech_familiarity,
    new_users,
];

/// Evaluates every rule in order and collects the findings.
pub fn recommendations(ctx: &RuleContext) -> Vec<Recommendation> {
    RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

/// Fires only when *both* batteries clear the same threshold. One battery
/// at >= 80 with the other between 70 and 80 produces nothing; this gap
/// matches the original study's rule set and is kept deliberately.
fn overall_usability(ctx: &RuleContext) -> Option<Recommendation> {
    if ctx.gallery_mean >= 80.0 && ctx.map_mean >= 80.0 {
        Some(Recommendation {
            severity: Severity::Success,
            symbol: "🎉",
            title: "Excellent Global Usability",
            message: "Both tools reached excellent usability levels.".to_string(),
        })
    } else if ctx.gallery_mean >= 70.0 && ctx.map_mean >= 70.0 {
        Some(Recommendation {
            severity: Severity::Info,
            symbol: "✅",
            title: "Good General Usability",
            message: "Both tools show acceptable to good usability.".to_string(),
        })
    } else {
        None
    }
}

fn gallery_needs_improvement(ctx: &RuleContext) -> Option<Recommendation> {
    (ctx.gallery_mean < 70.0).then(|| Recommendation {
        severity: Severity::Warning,
        symbol: "🖼️",
        title: "Gallery Needs Improvement",
        message: format!(
            "The gallery ({:.1}) requires usability improvements.",
            ctx.gallery_mean
        ),
    })
}

fn map_needs_improvement(ctx: &RuleContext) -> Option<Recommendation> {
    (ctx.map_mean < 70.0).then(|| Recommendation {
        severity: Severity::Warning,
        symbol: "🗺️",
        title: "Map Needs Improvement",
        message: format!(
            "The map ({:.1}) requires navigation and interaction improvements.",
            ctx.map_mean
        ),
    })
}

fn significant_difference(ctx: &RuleContext) -> Option<Recommendation> {
    let gap = (ctx.gallery_mean - ctx.map_mean).abs();
    (gap > 15.0).then(|| {
        let better = if ctx.gallery_mean > ctx.map_mean {
            "Gallery"
        } else {
            "Map"
        };
        Recommendation {
            severity: Severity::Info,
            symbol: "⚖️",
            title: "Significant Difference",
            message: format!(
                "{better} outperforms the other tool by {gap:.1} points. Consider standardizing the experience."
            ),
        }
    })
}

fn low_tech_familiarity(ctx: &RuleContext) -> Option<Recommendation> {
    // An absent familiarity column defaults to 3, which never fires.
    let familiarity = ctx.demographics.tech_familiarity_mean.unwrap_or(3.0);
    (familiarity < 3.0).then(|| Recommendation {
        severity: Severity::Info,
        symbol: "💡",
        title: "Low Technology Familiarity",
        message: "Users report low familiarity with technology. Consider adding tutorials and visual aids."
            .to_string(),
    })
}

fn new_users(ctx: &RuleContext) -> Option<Recommendation> {
    // Strict inequality: a tie (including 0 vs 0) produces nothing.
    (ctx.demographics.experience_no > ctx.demographics.experience_yes).then(|| Recommendation {
        severity: Severity::Info,
        symbol: "🎓",
        title: "New Users",
        message: "Many users have not used the institution's web resources before. Consider a dedicated orientation."
            .to_string(),
    })
}
