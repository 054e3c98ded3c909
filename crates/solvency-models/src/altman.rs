//! Altman Z″ distress index.
//!
//! The four-ratio variant for private/emerging-market firms:
//! `z = 3.25 + 6.56·x1 + 3.26·x2 + 6.72·x3 + 1.05·x4` with
//! x1 = working capital / total assets, x2 = retained earnings / total
//! assets, x3 = EBIT / total assets, x4 = book equity / total liabilities.

use chrono::NaiveDate;
use scoring_core::StatementTable;

use crate::anomaly::AnomalyLog;
use crate::labels::{EBIT, RETAINED_EARNINGS, TOTAL_ASSETS, TOTAL_LIABILITIES, WORKING_CAPITAL};
use crate::round2;

/// Compute the Z″ score for one fiscal period, rounded to 2 decimals.
///
/// Returns `None` when any required scalar is missing or when total assets
/// or total liabilities is exactly zero. Implausible ratios and implausibly
/// high scores are recorded in `anomalies` independently of the returned
/// value.
pub fn distress_index(
    ticker: &str,
    fiscal_year: i32,
    balance_sheet: &StatementTable,
    income_statement: &StatementTable,
    period: NaiveDate,
    anomalies: &mut AnomalyLog,
) -> Option<f64> {
    let working_capital = balance_sheet.scalar(WORKING_CAPITAL, period)?;
    let total_assets = balance_sheet.scalar(TOTAL_ASSETS, period)?;
    let retained_earnings = balance_sheet.scalar(RETAINED_EARNINGS, period)?;
    let total_liabilities = balance_sheet.scalar(TOTAL_LIABILITIES, period)?;
    let ebit = income_statement.scalar(EBIT, period)?;

    if total_assets == 0.0 || total_liabilities == 0.0 {
        return None;
    }

    let book_equity = total_assets - total_liabilities;
    let x1 = working_capital / total_assets;
    let x2 = retained_earnings / total_assets;
    let x3 = ebit / total_assets;
    let x4 = book_equity / total_liabilities;

    if x1.abs() > 1.0 || x2.abs() > 2.0 || x3.abs() > 1.0 || x4 > 10.0 {
        anomalies.record_ratio_warning(ticker, fiscal_year, (x1, x2, x3, x4));
    }

    let z = 3.25 + 6.56 * x1 + 3.26 * x2 + 6.72 * x3 + 1.05 * x4;

    if z > 25.0 {
        anomalies.record_score_outlier(ticker, fiscal_year, z, x4);
    }

    Some(round2(z))
}
