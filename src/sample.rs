//! Embedded sample survey used when no live spreadsheet is reachable.
//!
//! Six complete responses from the Gallery-vs-Map usability study. The CSV
//! literal goes through the same parse path as remote data, so the fallback
//! exercises the full pipeline.

use crate::dataset::Dataset;

pub const SAMPLE_CSV: &str = "\
Marca temporal,Edat:,Familiaritat amb tecnologies digitals:,Has utilitzat abans recursos web de la UAB?,G01,G02,G03,G04,G05,G06,G07,G08,G09,G10,M01,M02,M03,M04,M05,M06,M07,M08,M09,M10
22/05/2025 17:46:26,18 a 23,4,SI,5,1,5,1,5,1,5,2,5,1,5,1,5,1,5,1,5,1,5,1
22/05/2025 17:46:35,24 a 28,5,SI,5,1,5,2,5,2,4,1,5,5,5,1,5,5,1,5,1,5,1,5
22/05/2025 17:46:39,29 a 33,3,NO,5,2,5,1,5,1,4,1,5,5,5,1,5,5,5,1,5,5,5,5
22/05/2025 17:48:55,34 a 39,2,NO,5,1,5,1,5,2,5,1,5,5,1,5,1,2,5,1,5,1,5,1
22/05/2025 17:49:10,18 a 23,4,SI,4,2,4,2,5,1,4,2,4,3,3,3,4,2,4,3,4,2,4,3
22/05/2025 17:49:25,29 a 33,3,NO,3,3,4,2,4,2,3,3,4,2,4,2,3,3,4,2,3,4,4,2
";

/// Parses the embedded sample into a [`Dataset`].
pub fn sample_dataset() -> Dataset {
    // The literal above is well-formed CSV; parsing it cannot fail.
    Dataset::from_csv_bytes(SAMPLE_CSV.as_bytes())
        .unwrap_or_else(|_| Dataset::new(Vec::new(), Vec::new()))
}
