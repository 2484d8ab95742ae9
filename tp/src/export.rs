//! Export adapter
//!
//! Flattens the generated plan into spreadsheet rows, day-major. The
//! crate renders rows as CSV; producing the binary workbook from the
//! envelope is the consumer's job.

use eyre::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::domain::Day;

/// Workbook file name the export targets
pub const EXPORT_FILE_NAME: &str = "travel-itinerary.xlsx";

/// Sheet the rows belong on
pub const EXPORT_SHEET_NAME: &str = "Itinerary";

/// File name used when the rows are saved as CSV instead
pub const EXPORT_CSV_NAME: &str = "travel-itinerary.csv";

/// One spreadsheet row
///
/// Field renames are the column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Focus")]
    pub focus: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Detail")]
    pub detail: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Map")]
    pub map: String,
}

/// Everything a spreadsheet writer needs: target file, sheet, and rows
#[derive(Debug, Clone, Serialize)]
pub struct SpreadsheetExport {
    pub file: &'static str,
    pub sheet: &'static str,
    pub rows: Vec<ExportRow>,
}

impl SpreadsheetExport {
    pub fn new(days: &[Day]) -> Self {
        Self {
            file: EXPORT_FILE_NAME,
            sheet: EXPORT_SHEET_NAME,
            rows: flatten(days),
        }
    }
}

/// Flatten days into rows, one row per scheduled activity
pub fn flatten(days: &[Day]) -> Vec<ExportRow> {
    debug!(days = days.len(), "flatten: called");
    days.iter()
        .flat_map(|day| {
            day.activities.iter().map(|activity| ExportRow {
                day: day.label.clone(),
                focus: day.focus.clone(),
                time: activity.time_block.label().to_string(),
                activity: activity.title.clone(),
                detail: activity.detail.clone(),
                notes: activity.notes.clone(),
                map: activity.map_link.clone(),
            })
        })
        .collect()
}

/// Render rows as CSV with a header line
///
/// An empty row list renders as an empty string.
pub fn to_csv(rows: &[ExportRow]) -> Result<String> {
    debug!(rows = rows.len(), "to_csv: called");
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .context("Failed to serialize export row")?;
    }
    let bytes = writer
        .into_inner()
        .context("Failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
