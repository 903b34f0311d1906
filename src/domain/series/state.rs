//! Aligned time-series table — per-coin frames left-joined on timestamp.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::Currency;

/// A named value column. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Option<Decimal>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<Decimal>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Option<Decimal>] {
        &self.values
    }

    /// Index of the first non-missing value.
    pub fn first_valid_index(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }

    fn forward_fill(&mut self) {
        let mut last = None;
        for v in self.values.iter_mut() {
            if v.is_some() {
                last = *v;
            } else {
                *v = last;
            }
        }
    }
}

/// One coin's columns, indexed by ascending unique timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinFrame {
    pub currency: Currency,
    pub timestamps: Vec<DateTime<Utc>>,
    pub columns: Vec<Column>,
}

/// A table indexed by timestamp with one or more value columns.
///
/// The first joined frame fixes the index; later frames are left-joined on
/// it, so their timestamps outside the index are discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
    skipped: Vec<Currency>,
}

impl AlignedSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left-join `frame` onto the table by timestamp.
    pub fn left_join(&mut self, frame: CoinFrame) {
        if self.timestamps.is_empty() && self.columns.is_empty() {
            self.timestamps = frame.timestamps;
            self.columns = frame.columns;
            return;
        }

        let mut row_of: HashMap<DateTime<Utc>, usize> = HashMap::new();
        for (i, ts) in frame.timestamps.iter().enumerate() {
            row_of.entry(*ts).or_insert(i);
        }

        for column in frame.columns {
            let values = self
                .timestamps
                .iter()
                .map(|ts| row_of.get(ts).and_then(|&i| column.values.get(i).copied().flatten()))
                .collect();
            self.columns.push(Column::new(column.name, values));
        }
    }

    /// Propagate the last known value forward through gaps in every column.
    pub fn forward_fill(&mut self) {
        for column in self.columns.iter_mut() {
            column.forward_fill();
        }
    }

    pub(crate) fn record_skipped(&mut self, currency: Currency) {
        self.skipped.push(currency);
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Value at `row` in column `name`; `None` if absent or missing.
    pub fn value(&self, row: usize, name: &str) -> Option<Decimal> {
        self.column(name)?.values.get(row).copied().flatten()
    }

    /// Coins that returned no candle data and were left out.
    pub fn skipped(&self) -> &[Currency] {
        &self.skipped
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
