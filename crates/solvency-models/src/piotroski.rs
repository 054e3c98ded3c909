//! Piotroski F-score: a count of nine fundamental-improvement signals over
//! the two most recent fiscal periods.
//!
//! Signals: return on assets positive; operating cash flow positive; return
//! on assets improved; operating cash flow exceeds net income; leverage
//! (long-term debt over current liabilities) decreased; current ratio
//! improved; no dilution of equity; gross margin improved; asset turnover
//! improved.

use scoring_core::StatementTable;

use crate::labels::{
    COMMON_STOCK_EQUITY, CURRENT_ASSETS, CURRENT_LIABILITIES, GROSS_PROFIT, LONG_TERM_DEBT,
    NET_INCOME, OPERATING_CASH_FLOW, TOTAL_ASSETS, TOTAL_REVENUE,
};
use crate::lenient;

/// Compute the F-score, an integer in [0, 9].
///
/// Requires at least two periods of financials, balance-sheet, and cash-flow
/// data, and computable return-on-assets, gross-margin, and asset-turnover
/// ratios for both periods; otherwise `None`. Signals whose optional
/// operands are unavailable count as misses rather than voiding the score.
pub fn quality_score(
    financials: &StatementTable,
    balance_sheet: &StatementTable,
    cash_flow: &StatementTable,
) -> Option<u8> {
    if financials.period_count() < 2
        || balance_sheet.period_count() < 2
        || cash_flow.period_count() < 2
    {
        return None;
    }

    let periods = financials.periods();
    let (cur, prev) = (periods[0], periods[1]);

    let net_income_cur = financials.scalar(NET_INCOME, cur);
    let roa_cur = ratio(net_income_cur, balance_sheet.scalar(TOTAL_ASSETS, cur))?;
    let roa_prev = ratio(
        financials.scalar(NET_INCOME, prev),
        balance_sheet.scalar(TOTAL_ASSETS, prev),
    )?;

    let margin_cur = ratio(
        financials.scalar(GROSS_PROFIT, cur),
        financials.scalar(TOTAL_REVENUE, cur),
    )?;
    let margin_prev = ratio(
        financials.scalar(GROSS_PROFIT, prev),
        financials.scalar(TOTAL_REVENUE, prev),
    )?;

    let turnover_cur = ratio(
        financials.scalar(TOTAL_REVENUE, cur),
        balance_sheet.scalar(TOTAL_ASSETS, cur),
    )?;
    let turnover_prev = ratio(
        financials.scalar(TOTAL_REVENUE, prev),
        balance_sheet.scalar(TOTAL_ASSETS, prev),
    )?;

    let ocf_cur = cash_flow.scalar(OPERATING_CASH_FLOW, cur);

    let debt_cur = balance_sheet.scalar(LONG_TERM_DEBT, cur).unwrap_or(0.0);
    let debt_prev = balance_sheet.scalar(LONG_TERM_DEBT, prev).unwrap_or(0.0);
    let current_assets_cur = balance_sheet.scalar(CURRENT_ASSETS, cur).unwrap_or(0.0);
    let current_assets_prev = balance_sheet.scalar(CURRENT_ASSETS, prev).unwrap_or(0.0);
    let current_liabilities_cur = balance_sheet
        .scalar(CURRENT_LIABILITIES, cur)
        .unwrap_or(0.0);
    let current_liabilities_prev = balance_sheet
        .scalar(CURRENT_LIABILITIES, prev)
        .unwrap_or(0.0);

    let equity_cur = balance_sheet.scalar(COMMON_STOCK_EQUITY, cur);
    let equity_prev = balance_sheet.scalar(COMMON_STOCK_EQUITY, prev);

    let signals = [
        roa_cur > 0.0,
        lenient::positive(ocf_cur),
        roa_cur > roa_prev,
        lenient::gt(ocf_cur, net_income_cur),
        leverage_decreased(
            debt_cur,
            debt_prev,
            current_liabilities_cur,
            current_liabilities_prev,
        ),
        current_ratio_improved(
            current_assets_cur,
            current_assets_prev,
            current_liabilities_cur,
            current_liabilities_prev,
        ),
        lenient::le(equity_cur, equity_prev),
        margin_cur > margin_prev,
        turnover_cur > turnover_prev,
    ];

    Some(signals.into_iter().filter(|s| *s).count() as u8)
}

fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

fn leverage_decreased(debt_cur: f64, debt_prev: f64, liab_cur: f64, liab_prev: f64) -> bool {
    liab_cur != 0.0 && liab_prev != 0.0 && (debt_cur / liab_cur) < (debt_prev / liab_prev)
}

fn current_ratio_improved(
    assets_cur: f64,
    assets_prev: f64,
    liab_cur: f64,
    liab_prev: f64,
) -> bool {
    assets_cur != 0.0
        && liab_cur != 0.0
        && assets_prev != 0.0
        && liab_prev != 0.0
        && (assets_cur / liab_cur) > (assets_prev / liab_prev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels;
    use chrono::NaiveDate;
    use scoring_core::LineValue;

    fn cur() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    fn prev() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    }

    fn table(rows: &[(&str, f64, f64)]) -> StatementTable {
        let mut t = StatementTable::new();
        for (label, cur_v, prev_v) in rows {
            t.insert(*label, cur(), LineValue::Number(*cur_v));
            t.insert(*label, prev(), LineValue::Number(*prev_v));
        }
        t
    }

    fn improving_firm() -> (StatementTable, StatementTable, StatementTable) {
        let financials = table(&[
            (labels::NET_INCOME, 120.0, 50.0),
            (labels::TOTAL_REVENUE, 1000.0, 900.0),
            (labels::GROSS_PROFIT, 500.0, 360.0),
        ]);
        let balance_sheet = table(&[
            (labels::TOTAL_ASSETS, 1000.0, 1000.0),
            (labels::LONG_TERM_DEBT, 100.0, 200.0),
            (labels::CURRENT_ASSETS, 500.0, 400.0),
            (labels::CURRENT_LIABILITIES, 200.0, 200.0),
            (labels::COMMON_STOCK_EQUITY, 300.0, 300.0),
        ]);
        let cash_flow = table(&[(labels::OPERATING_CASH_FLOW, 150.0, 80.0)]);
        (financials, balance_sheet, cash_flow)
    }

    #[test]
    fn all_nine_signals_fire() {
        let (fin, bs, cf) = improving_firm();
        assert_eq!(quality_score(&fin, &bs, &cf), Some(9));
    }

    #[test]
    fn deteriorating_firm_scores_zero() {
        let financials = table(&[
            (labels::NET_INCOME, -50.0, 50.0),
            (labels::TOTAL_REVENUE, 800.0, 900.0),
            (labels::GROSS_PROFIT, 240.0, 360.0),
        ]);
        let balance_sheet = table(&[
            (labels::TOTAL_ASSETS, 1000.0, 1000.0),
            (labels::LONG_TERM_DEBT, 300.0, 100.0),
            (labels::CURRENT_ASSETS, 300.0, 400.0),
            (labels::CURRENT_LIABILITIES, 200.0, 200.0),
            (labels::COMMON_STOCK_EQUITY, 400.0, 300.0),
        ]);
        let cash_flow = table(&[(labels::OPERATING_CASH_FLOW, -60.0, 10.0)]);

        assert_eq!(quality_score(&financials, &balance_sheet, &cash_flow), Some(0));
    }

    #[test]
    fn insufficient_history_yields_none() {
        let (fin, bs, _) = improving_firm();
        // Cash flow with a single period.
        let mut cf = StatementTable::new();
        cf.insert(labels::OPERATING_CASH_FLOW, cur(), LineValue::Number(150.0));

        assert_eq!(quality_score(&fin, &bs, &cf), None);
        assert_eq!(quality_score(&StatementTable::new(), &bs, &cf), None);
    }

    #[test]
    fn unattainable_required_ratio_yields_none() {
        let (mut fin, bs, cf) = improving_firm();
        // Zero revenue kills the gross-margin ratio.
        fin.insert(labels::TOTAL_REVENUE, cur(), LineValue::Number(0.0));
        assert_eq!(quality_score(&fin, &bs, &cf), None);

        let (fin, mut bs, cf) = improving_firm();
        bs.insert(labels::TOTAL_ASSETS, prev(), LineValue::Series(vec![]));
        assert_eq!(quality_score(&fin, &bs, &cf), None);
    }

    #[test]
    fn missing_optional_operands_degrade_the_score() {
        let (fin, bs, _) = improving_firm();
        // Two periods present but no usable operating-cash-flow scalar for
        // the current year: signals 2 and 4 miss, everything else holds.
        let mut cf = StatementTable::new();
        cf.insert(labels::OPERATING_CASH_FLOW, prev(), LineValue::Number(80.0));
        cf.insert("Depreciation", cur(), LineValue::Number(30.0));
        assert_eq!(quality_score(&fin, &bs, &cf), Some(7));

        // Dropping equity data additionally misses the dilution signal.
        let (fin, _, cf) = improving_firm();
        let balance_sheet = table(&[
            (labels::TOTAL_ASSETS, 1000.0, 1000.0),
            (labels::LONG_TERM_DEBT, 100.0, 200.0),
            (labels::CURRENT_ASSETS, 500.0, 400.0),
            (labels::CURRENT_LIABILITIES, 200.0, 200.0),
        ]);
        assert_eq!(quality_score(&fin, &balance_sheet, &cf), Some(8));
    }

    #[test]
    fn score_stays_in_range() {
        let (fin, bs, cf) = improving_firm();
        let score = quality_score(&fin, &bs, &cf).unwrap();
        assert!(score <= 9);
    }
}
