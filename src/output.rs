use crate::error::Result;
use crate::filing::FilingRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV destination for filing rows.
///
/// Quoting of commas, quotes and line breaks inside cells is left to `csv`; rows are
/// written in the order they are handed in.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvSink<File> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
            rows: 0,
        })
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            rows: 0,
        }
    }

    pub fn write_header(&mut self, header: &[String]) -> Result<()> {
        self.writer.write_record(header)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &FilingRow) -> Result<()> {
        self.writer.write_record(row.cells())?;
        self.rows += 1;
        Ok(())
    }

    /// Number of filing rows written so far, header excluded.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::EdinetError::FileError(e.into_error()))
    }
}
