//! Tabular exchange format between the catalog and a presentation host.
//!
//! A [`Dataset`] is an ordered sequence of uniformly keyed records. Column
//! order and naming are part of each producer's contract, so columns are
//! stored once and every row carries exactly one [`Value`] per column.
//!
//! # Examples
//!
//! ```
//! use advisor_core::types::{Dataset, Value};
//!
//! let mut ds = Dataset::new(["Client", "Net Flow"]);
//! ds.push_row(vec!["Arthur Pendragon".into(), 500_000_i64.into()]).unwrap();
//! ds.push_row(vec!["Lancelot du Lac".into(), (-20_000_i64).into()]).unwrap();
//!
//! let outflows = ds.filter_rows(|r| {
//!     r.get("Net Flow").and_then(Value::as_f64).unwrap_or(0.0) < 0.0
//! });
//! assert_eq!(outflows.len(), 1);
//! ```

use chrono::NaiveDate;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::io;

use super::error::DatasetError;

/// Separator used when a tag list is flattened to a single text cell.
pub const LIST_SEPARATOR: &str = "; ";

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Signed integer (counts, whole currency amounts, scores)
    Int(i64),
    /// Floating point (fractions, exposures, returns)
    Float(f64),
    /// Free text
    Text(String),
    /// Calendar date
    Date(NaiveDate),
    /// Ordered list of labels (reason tags, related clients)
    List(Vec<String>),
}

impl Value {
    /// Text content, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content as `f64` for integer and float values
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer content, if this is an integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// List content, if this is a list value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::List(items) => f.write_str(&items.join(LIST_SEPARATOR)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Ordered sequence of uniformly keyed records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create an empty dataset with the given column order.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a dataset from fixed-width rows.
    ///
    /// Row width is checked at compile time, so construction cannot fail.
    ///
    /// ```
    /// use advisor_core::types::{Dataset, Value};
    ///
    /// let ds = Dataset::from_rows(
    ///     ["Risk Category", "Client Count"],
    ///     [["Low".into(), Value::Int(5)], ["High".into(), Value::Int(10)]],
    /// );
    /// assert_eq!(ds.len(), 2);
    /// ```
    pub fn from_rows<const N: usize, R>(columns: [&str; N], rows: R) -> Self
    where
        R: IntoIterator<Item = [Value; N]>,
    {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows.into_iter().map(Vec::from).collect(),
        }
    }

    /// Column names in contract order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether a column is present
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Append a row. The row must carry one value per column.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<(), DatasetError> {
        if values.len() != self.columns.len() {
            return Err(DatasetError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Cell lookup by row position and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// All values of one column, top to bottom
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value> + '_, DatasetError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| DatasetError::unknown_column(name))?;
        Ok(self.rows.iter().map(move |r| &r[idx]))
    }

    /// Record view of one row
    pub fn record(&self, row: usize) -> Option<RecordRef<'_>> {
        self.rows.get(row).map(|values| RecordRef {
            columns: &self.columns,
            values,
        })
    }

    /// Iterate rows as records
    pub fn records(&self) -> impl Iterator<Item = RecordRef<'_>> + '_ {
        self.rows.iter().map(move |values| RecordRef {
            columns: &self.columns,
            values,
        })
    }

    /// New dataset holding the rows accepted by `keep`, in original order.
    pub fn filter_rows<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&RecordRef<'_>) -> bool,
    {
        let rows = self
            .records()
            .filter(|r| keep(r))
            .map(|r| r.values.to_vec())
            .collect();
        Dataset {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Stable sort by a numeric column, largest first.
    ///
    /// Non-numeric cells sort after every number.
    pub fn sorted_desc_by(mut self, column: &str) -> Result<Dataset, DatasetError> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| DatasetError::unknown_column(column))?;
        self.rows.sort_by(|a, b| match (a[idx].as_f64(), b[idx].as_f64()) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        Ok(self)
    }

    /// Write the dataset as CSV with a header row.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), DatasetError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|v| v.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for record in self.records() {
            seq.serialize_element(&record)?;
        }
        seq.end()
    }
}

/// Borrowed view of one row keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct RecordRef<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl<'a> RecordRef<'a> {
    /// Value for a column, if present
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.values.get(idx)
    }

    /// Text value for a column, if present and textual
    pub fn text(&self, column: &str) -> Option<&'a str> {
        self.get(column).and_then(Value::as_str)
    }

    /// Values in column order
    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    /// `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl Serialize for RecordRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
