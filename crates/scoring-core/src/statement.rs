use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single cell of a statement table.
///
/// Providers occasionally return a list of values for a line item (duplicate
/// rows collapsed into one label). Those composites are not usable as model
/// inputs; only `Number` cells are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineValue {
    Number(f64),
    Series(Vec<f64>),
}

/// An in-memory financial statement, keyed by (line-item label, fiscal
/// period). Periods are fiscal-year-end dates. The scoring core only ever
/// reads from the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementTable {
    rows: HashMap<String, HashMap<NaiveDate, LineValue>>,
}

impl StatementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, period: NaiveDate, value: LineValue) {
        self.rows.entry(label.into()).or_default().insert(period, value);
    }

    /// Extract the scalar at (label, period).
    ///
    /// Returns `None` when the row is absent, the cell is absent, or the
    /// cell holds a composite entry. Missing data is signaled, never thrown,
    /// so "cannot score" stays a first-class outcome downstream.
    pub fn scalar(&self, label: &str, period: NaiveDate) -> Option<f64> {
        match self.rows.get(label)?.get(&period)? {
            LineValue::Number(v) => Some(*v),
            LineValue::Series(_) => None,
        }
    }

    /// All fiscal periods present in any row, most recent first.
    pub fn periods(&self) -> Vec<NaiveDate> {
        let set: BTreeSet<NaiveDate> = self
            .rows
            .values()
            .flat_map(|cells| cells.keys().copied())
            .collect();
        set.into_iter().rev().collect()
    }

    pub fn period_count(&self) -> usize {
        self.periods().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(|cells| cells.is_empty())
    }
}

/// Everything the retrieval collaborator hands over for one entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyStatements {
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub financials: StatementTable,
    #[serde(default)]
    pub balance_sheet: StatementTable,
    #[serde(default)]
    pub cash_flow: StatementTable,
}
