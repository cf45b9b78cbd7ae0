//! CSV tick source.
//!
//! Expects two columns per row: a time token followed by a price. A
//! header row whose time token contains the substring "time" is skipped.
//! Rows with unparsable or invalid prices are dropped (counted, never
//! fatal); only a failed open or read aborts the run.

use std::path::{Path, PathBuf};

use crate::domain::Tick;

use super::{SourceError, TickSource};

pub struct CsvTickSource {
    path: PathBuf,
    skipped: usize,
}

impl CsvTickSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            skipped: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TickSource for CsvTickSource {
    fn ticks(&mut self) -> Result<Vec<Tick>, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| SourceError::Unavailable(format!("{}: {e}", self.path.display())))?;

        self.skipped = 0;
        let mut ticks = Vec::new();

        for (row_index, record) in reader.records().enumerate() {
            let record =
                record.map_err(|e| SourceError::Unavailable(format!("read failed: {e}")))?;

            let time_token = record.get(0).unwrap_or("").trim();
            if time_token.to_ascii_lowercase().contains("time") {
                // Header row.
                continue;
            }

            let Some(price_field) = record.get(1) else {
                self.skipped += 1;
                continue;
            };
            let Ok(price) = price_field.trim().parse::<f64>() else {
                self.skipped += 1;
                continue;
            };

            // Integer time tokens become timestamps directly; anything
            // else keeps the row's position in nanosecond steps, which
            // preserves stream order.
            let ts_ns = time_token
                .parse::<u64>()
                .unwrap_or(1_000 * row_index as u64);

            let tick = Tick::new(ts_ns, price);
            if !tick.is_valid() {
                self.skipped += 1;
                continue;
            }
            ticks.push(tick);
        }

        Ok(ticks)
    }

    fn skipped(&self) -> usize {
        self.skipped
    }
}
