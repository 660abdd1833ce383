use anyhow::{Context, Result};
use csv::Writer;
use rust_decimal::Decimal;
use skinscan_comparison::ComparisonRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Columns written for every row.
pub const BASE_COLUMNS: [&str; 7] = [
    "base_name",
    "wear",
    "stattrak",
    "market_hash_name",
    "steam_usd",
    "skinport_min_usd",
    "spread_usd",
];

/// Optional trailing column with the matcher's reason.
pub const DEBUG_COLUMN: &str = "match_debug";

pub struct CsvExporter;

impl CsvExporter {
    /// Writes comparison rows to a CSV file.
    ///
    /// Format: base_name,wear,stattrak,market_hash_name,steam_usd,skinport_min_usd,spread_usd[,match_debug]
    ///
    /// Absent values are written as empty cells. Prices are the raw values,
    /// not the display-capped ones.
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_rows(path: impl AsRef<Path>, rows: &[ComparisonRow], include_debug: bool) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        Self::write_to(file, rows, include_debug)
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

        tracing::info!(path = %path.display(), rows = rows.len(), "Wrote comparison CSV");
        Ok(())
    }

    /// Renders comparison rows as CSV bytes.
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_bytes(rows: &[ComparisonRow], include_debug: bool) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        Self::write_to(&mut buf, rows, include_debug)?;
        Ok(buf)
    }

    fn write_to<W: Write>(sink: W, rows: &[ComparisonRow], include_debug: bool) -> Result<()> {
        let mut writer = Writer::from_writer(sink);

        // Write header
        let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
        if include_debug {
            header.push(DEBUG_COLUMN);
        }
        writer.write_record(&header)?;

        // Write data rows
        for row in rows {
            let mut record = vec![
                row.base_name.clone(),
                row.wear.map(|w| w.to_string()).unwrap_or_default(),
                row.stattrak.to_string(),
                row.market_hash_name.clone(),
                cell(row.steam_usd),
                cell(row.skinport_min_usd),
                cell(row.spread_usd),
            ];
            if include_debug {
                record.push(row.match_debug.clone().unwrap_or_default());
            }
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn cell(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
