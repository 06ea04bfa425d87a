//! Row storage behind the ranking workflow.
//!
//! Saves go through a temporary file in the destination directory and are
//! renamed into place, so a failed write leaves the previous file intact.
use crate::dataset::{Dataset, Record, Snapshot};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub trait DataSource {
    /// Load rows, splitting off the first as a header when asked.
    fn load(&self, location: &Path, has_header: bool) -> Result<Snapshot>;

    /// Write the header (if any) followed by `records`.
    fn save(&self, location: &Path, header: Option<&Record>, records: &[Record]) -> Result<()>;
}

/// CSV files read and written with the `csv` crate.
#[derive(Debug, Clone, Copy)]
pub struct CsvSource {
    delimiter: u8,
}

impl Default for CsvSource {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvSource {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Parse a single line of delimited fields typed at a prompt.
    pub fn parse_line(&self, line: &str) -> Result<Record> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(line.as_bytes());
        let fields = match reader.records().next() {
            Some(row) => row.context("parse record")?,
            None => return Ok(Record::new(Vec::new())),
        };
        Ok(fields.iter().map(str::to_string).collect::<Vec<_>>().into())
    }

    fn read_rows(&self, location: &Path) -> Result<Vec<Record>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(location)
            .with_context(|| format!("open {}", location.display()))?;
        let mut rows = Vec::new();
        for row in reader.records() {
            let row = row.with_context(|| format!("read {}", location.display()))?;
            rows.push(Record::new(row.iter().map(str::to_string).collect()));
        }
        Ok(rows)
    }

    fn write_rows<'a, W, I>(&self, out: W, rows: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a Record>,
    {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .delimiter(self.delimiter)
            .from_writer(out);
        for row in rows {
            writer.write_record(row.fields()).context("write record")?;
        }
        writer.flush().context("flush records")?;
        Ok(())
    }
}

impl DataSource for CsvSource {
    fn load(&self, location: &Path, has_header: bool) -> Result<Snapshot> {
        if !location.exists() {
            return Ok(Snapshot::Missing);
        }
        let rows = self.read_rows(location)?;
        tracing::info!(
            path = %location.display(),
            rows = rows.len(),
            has_header,
            "loaded rows"
        );
        Ok(Snapshot::Present(Dataset::from_rows(rows, has_header)))
    }

    fn save(&self, location: &Path, header: Option<&Record>, records: &[Record]) -> Result<()> {
        // Replace the file a symlink points at, not the link itself.
        let existing = location.exists();
        let target = if existing {
            fs::canonicalize(location)
                .with_context(|| format!("resolve {}", location.display()))?
        } else {
            location.to_path_buf()
        };
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("create temporary file in {}", parent.display()))?;
        self.write_rows(tmp.as_file_mut(), header.into_iter().chain(records.iter()))
            .with_context(|| format!("write {}", location.display()))?;
        if existing {
            let permissions = fs::metadata(&target)
                .with_context(|| format!("stat {}", target.display()))?
                .permissions();
            tmp.as_file()
                .set_permissions(permissions)
                .with_context(|| format!("copy permissions of {}", target.display()))?;
        }
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("sync {}", location.display()))?;
        tmp.persist(&target)
            .with_context(|| format!("publish {}", target.display()))?;
        tracing::info!(
            path = %target.display(),
            rows = records.len() + usize::from(header.is_some()),
            "saved rows"
        );
        Ok(())
    }
}
