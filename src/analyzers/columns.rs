//! Classifies dataset columns into the two 10-item SUS batteries.

use tracing::warn;

/// One evaluated tool, each with its own 10-item battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Battery {
    Gallery,
    Map,
}

impl Battery {
    pub fn letter(self) -> char {
        match self {
            Battery::Gallery => 'G',
            Battery::Map => 'M',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Battery::Gallery => "Gallery",
            Battery::Map => "Map",
        }
    }
}

/// Column names of both batteries, each sorted by item number.
#[derive(Debug, Clone)]
pub struct BatteryColumns {
    pub gallery: Vec<String>,
    pub map: Vec<String>,
}

impl BatteryColumns {
    /// All 20 battery columns, Gallery first.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.gallery.iter().chain(self.map.iter())
    }
}

/// Partitions the dataset's columns into the Gallery and Map batteries.
///
/// Primary rule: the name contains a zero-padded item tag ("G01".."G10",
/// "M01".."M10"). Fallback, only when the primary rule matches nothing
/// for a battery: the name starts with the battery letter and is at most
/// 4 characters long. A battery that does not end up with exactly 10
/// columns is reported but not fatal.
pub fn classify_columns(columns: &[String]) -> BatteryColumns {
    let gallery = battery_columns(columns, Battery::Gallery);
    let map = battery_columns(columns, Battery::Map);

    for (battery, found) in [(Battery::Gallery, &gallery), (Battery::Map, &map)] {
        if found.len() != 10 {
            warn!(
                battery = battery.name(),
                expected = 10,
                found = found.len(),
                "unexpected battery column count"
            );
        }
    }

    BatteryColumns { gallery, map }
}

fn battery_columns(columns: &[String], battery: Battery) -> Vec<String> {
    let letter = battery.letter();
    let tags: Vec<String> = (1..=10).map(|i| format!("{letter}{i:02}")).collect();

    let mut found: Vec<String> = columns
        .iter()
        .filter(|col| tags.iter().any(|tag| col.contains(tag.as_str())))
        .cloned()
        .collect();

    if found.is_empty() {
        found = columns
            .iter()
            .filter(|col| col.starts_with(letter) && col.len() <= 4)
            .cloned()
            .collect();
    }

    sort_by_item_number(&mut found, battery);
    found
}

/// Sorts columns ascending by the digits embedded in their names. If any
/// name yields no parsable number, the encountered order is kept.
fn sort_by_item_number(columns: &mut [String], battery: Battery) {
    let keys: Option<Vec<u32>> = columns.iter().map(|col| item_number(col)).collect();
    match keys {
        Some(_) => columns.sort_by_key(|col| item_number(col).unwrap_or(u32::MAX)),
        None => warn!(
            battery = battery.name(),
            "could not extract item numbers, keeping column order as encountered"
        ),
    }
}

fn item_number(column: &str) -> Option<u32> {
    let digits: String = column.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_primary_rule_partitions_batteries() {
        let names = cols(&[
            "Marca temporal",
            "Edat:",
            "G01",
            "G02",
            "M01",
            "M02",
            "G10",
            "M10",
        ]);
        let classified = classify_columns(&names);

        assert_eq!(classified.gallery, cols(&["G01", "G02", "G10"]));
        assert_eq!(classified.map, cols(&["M01", "M02", "M10"]));
    }

    #[test]
    fn test_sort_by_embedded_digits() {
        let names = cols(&["G10", "G02", "G01"]);
        let classified = classify_columns(&names);
        assert_eq!(classified.gallery, cols(&["G01", "G02", "G10"]));
    }

    #[test]
    fn test_tag_matches_inside_longer_names() {
        let names = cols(&["Pregunta G03 - facilitat", "G01 inici"]);
        let classified = classify_columns(&names);
        assert_eq!(
            classified.gallery,
            cols(&["G01 inici", "Pregunta G03 - facilitat"])
        );
    }

    #[test]
    fn test_fallback_short_prefixed_names() {
        // No zero-padded tags at all, so the short-name fallback kicks in.
        let names = cols(&["G1", "G2", "Gallery notes", "M1", "M2"]);
        let classified = classify_columns(&names);

        assert_eq!(classified.gallery, cols(&["G1", "G2"]));
        assert_eq!(classified.map, cols(&["M1", "M2"]));
    }

    #[test]
    fn test_fallback_not_used_when_primary_matches() {
        let names = cols(&["G01", "G9"]);
        let classified = classify_columns(&names);
        assert_eq!(classified.gallery, cols(&["G01"]));
    }

    #[test]
    fn test_unsortable_names_keep_encountered_order() {
        let names = cols(&["Gb", "Ga"]);
        let classified = classify_columns(&names);
        assert_eq!(classified.gallery, cols(&["Gb", "Ga"]));
    }

    #[test]
    fn test_all_iterates_gallery_first() {
        let names = cols(&["M01", "G01"]);
        let classified = classify_columns(&names);
        let all: Vec<&String> = classified.all().collect();
        assert_eq!(all, [&"G01".to_string(), &"M01".to_string()]);
    }
}
