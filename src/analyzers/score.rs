//! The SUS item transform.

use crate::dataset::Dataset;

/// 1-indexed item positions that are reverse-scored. Fixed by the SUS
/// instrument, independent of column naming.
pub const REVERSE_ITEMS: [usize; 5] = [2, 4, 6, 8, 10];

/// Converts one respondent's 10 answers (canonical item order) into a
/// SUS score in [0, 100].
///
/// Odd-positioned items contribute `answer - 1`, reverse-scored items
/// contribute `5 - answer`; the sum over all items is scaled by 2.5.
/// Returns `None` unless exactly 10 answers are given, all within [1, 5].
pub fn sus_score(answers: &[f64]) -> Option<f64> {
    if answers.len() != 10 {
        return None;
    }

    let mut total = 0.0;
    for (i, &answer) in answers.iter().enumerate() {
        let position = i + 1;
        if !(1.0..=5.0).contains(&answer) {
            return None;
        }

        total += if REVERSE_ITEMS.contains(&position) {
            5.0 - answer
        } else {
            answer - 1.0
        };
    }

    Some(total * 2.5)
}

/// Scores every row of the dataset against one battery's sorted columns.
/// A row with any missing or unlocatable answer yields `None`.
pub fn score_battery(dataset: &Dataset, battery_columns: &[String]) -> Vec<Option<f64>> {
    let indices: Vec<Option<usize>> = battery_columns
        .iter()
        .map(|name| dataset.column_index(name))
        .collect();

    dataset
        .rows()
        .iter()
        .map(|row| {
            let answers: Option<Vec<f64>> = indices
                .iter()
                .map(|idx| idx.and_then(|i| row[i].as_number()))
                .collect();
            answers.as_deref().and_then(sus_score)
        })
        .collect()
}
