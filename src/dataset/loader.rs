//! Launch records loader
//!
//! Reads a delimited file into typed `LaunchRecord`s. Columns are matched by
//! header name, so column order and extra columns don't matter.

use super::*;
use std::io::Read;
use std::path::Path;

/// Configurable reader for the launch records file
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    /// Field delimiter
    delimiter: u8,
    /// Whether the file has a header row
    has_header: bool,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Comma-delimited with a header row
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the file has a header row
    ///
    /// Without a header, columns must appear in `LaunchRecord` field order.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Load the dataset from a file
    pub fn load(&self, path: &Path) -> DatasetResult<Dataset> {
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = self.load_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            payload_bounds = %dataset.bounds(),
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Load from an in-memory string (useful for testing)
    pub fn load_str(&self, data: &str) -> DatasetResult<Dataset> {
        self.load_reader(data.as_bytes())
    }

    /// Load from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> DatasetResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = if self.has_header {
            Some(reader.headers()?.clone())
        } else {
            None
        };

        let mut records = Vec::new();

        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();

            let record: LaunchRecord = row.deserialize(headers.as_ref())?;
            record
                .validate()
                .map_err(|reason| DatasetError::InvalidRecord { line, reason })?;

            records.push(record);
        }

        Dataset::from_records(records)
    }
}
