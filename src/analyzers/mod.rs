//! SUS scoring and statistical aggregation.
//!
//! Turns a cleaned survey dataset into per-respondent SUS scores,
//! per-battery descriptive statistics with letter grades, demographic
//! distributions, and rule-based recommendations.

pub mod analyzer;
pub mod columns;
pub mod demographics;
pub mod grade;
pub mod recommend;
pub mod score;
pub mod statistics;
pub mod types;
pub mod utility;
pub mod validate;
