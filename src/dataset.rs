//! Records and the ordered dataset they live in.
use std::fmt;

/// One row of fields. Identity is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Record {
    fn from(fields: [&str; N]) -> Self {
        Self(fields.iter().map(|field| field.to_string()).collect())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Records ordered top first, with the header kept apart from ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub header: Option<Record>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Split the first row off as a header when requested.
    pub fn from_rows(mut rows: Vec<Record>, has_header: bool) -> Self {
        let header = (has_header && !rows.is_empty()).then(|| rows.remove(0));
        Self {
            header,
            records: rows,
        }
    }
}

/// What a data source found at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Missing,
    Present(Dataset),
}
