//! Downgrade detection over per-entity status histories.
//!
//! Walks each entity's year-ordered records and emits one alert per
//! adjacent pair that moves from a valid prior status (safe/strong/neutral)
//! to a downgrade target (distress/weak/grey).

use serde::{Deserialize, Serialize};

use scoring_core::{PeriodRecord, RiskStatus, ScoreModel};

/// One detected downgrade transition. `fiscal_year` and `model` are those
/// of the downgraded record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DowngradeAlert {
    pub ticker: String,
    pub fiscal_year: i32,
    pub from_status: RiskStatus,
    pub to_status: RiskStatus,
    pub model: ScoreModel,
}

/// Scan the full record collection for downgrade transitions.
///
/// Records without a status and records carrying the finance-sector
/// sentinel are excluded before the scan. Adjacency is positional in each
/// entity's filtered, year-sorted sequence — a multi-year gap between two
/// surviving records still counts as adjacent.
pub fn detect_downgrades(records: &[PeriodRecord]) -> Vec<DowngradeAlert> {
    let mut eligible: Vec<(&PeriodRecord, RiskStatus)> = records
        .iter()
        .filter_map(|r| r.status.map(|s| (r, s)))
        .filter(|(_, s)| s.is_valid_prior() || s.is_downgrade_target())
        .collect();
    eligible.sort_by(|(a, _), (b, _)| {
        a.ticker
            .cmp(&b.ticker)
            .then(a.fiscal_year.cmp(&b.fiscal_year))
    });

    let mut alerts = Vec::new();
    for pair in eligible.windows(2) {
        let (prev, prev_status) = &pair[0];
        let (cur, cur_status) = &pair[1];
        if prev.ticker != cur.ticker {
            continue;
        }
        if prev_status.is_valid_prior() && cur_status.is_downgrade_target() {
            tracing::info!(
                ticker = %cur.ticker,
                fiscal_year = cur.fiscal_year,
                from = %prev_status,
                to = %cur_status,
                "downgrade detected"
            );
            alerts.push(DowngradeAlert {
                ticker: cur.ticker.clone(),
                fiscal_year: cur.fiscal_year,
                from_status: *prev_status,
                to_status: *cur_status,
                model: cur.model,
            });
        }
    }

    alerts
}
