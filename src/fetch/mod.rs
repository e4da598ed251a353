mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Result, bail};
use tracing::{debug, warn};

pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    Ok(resp.bytes().await?.to_vec())
}

/// Extracts the spreadsheet id from a Google Sheets share URL.
pub fn extract_sheet_id(url: &str) -> Option<&str> {
    url.split("/spreadsheets/d/").nth(1)?.split('/').next()
}

/// CSV export endpoints for a spreadsheet, in the order they are tried.
pub fn export_urls(sheet_id: &str) -> [String; 2] {
    [
        format!("https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv"),
        format!("https://docs.google.com/spreadsheets/d/{sheet_id}/gviz/tq?tqx=out:csv"),
    ]
}

/// Downloads a spreadsheet as CSV, trying each export endpoint in turn.
/// The first successful response with a non-empty body wins.
pub async fn fetch_sheet_csv<C: HttpClient>(client: &C, sheet_id: &str) -> Result<Vec<u8>> {
    for url in export_urls(sheet_id) {
        debug!(url = %url, "trying spreadsheet export endpoint");
        let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

        match client.execute(req).await {
            Ok(resp) if resp.status().is_success() => {
                let body = resp.bytes().await?.to_vec();
                if !body.is_empty() {
                    return Ok(body);
                }
                warn!(url = %url, "export endpoint returned an empty body");
            }
            Ok(resp) => warn!(url = %url, status = %resp.status(), "export endpoint refused"),
            Err(e) => warn!(url = %url, error = %e, "export endpoint unreachable"),
        }
    }

    bail!("spreadsheet {sheet_id} is not reachable through any export endpoint");
}
