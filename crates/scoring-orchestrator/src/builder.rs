use chrono::Datelike;
use scoring_core::{CompanyStatements, PeriodRecord, RiskStatus, ScoreModel};
use solvency_models::{distress_index, quality_score, AnomalyLog};

use crate::router::ModelRoute;

/// How many of the most recent fiscal years get a record per entity.
const RECENT_PERIOD_WINDOW: usize = 5;

const UNKNOWN_SECTOR: &str = "Unknown";

/// Build one immutable `PeriodRecord` per recent fiscal year for one entity.
///
/// Entities without usable financials or balance-sheet data produce zero
/// records — skipped entirely, not recorded as failures. The F-score always
/// reads the two most recent periods, so it is computed once and recorded
/// against each year in the window.
pub fn build_period_records(
    ticker: &str,
    statements: &CompanyStatements,
    anomalies: &mut AnomalyLog,
) -> Vec<PeriodRecord> {
    if statements.financials.is_empty() || statements.balance_sheet.is_empty() {
        tracing::debug!(ticker, "no usable statement data, skipping");
        return Vec::new();
    }

    let sector = statements
        .sector
        .clone()
        .unwrap_or_else(|| UNKNOWN_SECTOR.to_string());
    let route = ModelRoute::for_sector(&sector);

    let quality = match route {
        ModelRoute::Quality => quality_score(
            &statements.financials,
            &statements.balance_sheet,
            &statements.cash_flow,
        ),
        _ => None,
    };

    statements
        .balance_sheet
        .periods()
        .into_iter()
        .take(RECENT_PERIOD_WINDOW)
        .map(|period| {
            let fiscal_year = period.year();
            match route {
                ModelRoute::Quality => PeriodRecord {
                    ticker: ticker.to_string(),
                    fiscal_year,
                    sector: sector.clone(),
                    model: ScoreModel::PiotroskiF,
                    score: quality.map(f64::from),
                    status: quality.map(RiskStatus::from_quality_score),
                },
                ModelRoute::Skip => PeriodRecord {
                    ticker: ticker.to_string(),
                    fiscal_year,
                    sector: sector.clone(),
                    model: ScoreModel::Skipped,
                    score: None,
                    status: Some(RiskStatus::FinanceSector),
                },
                ModelRoute::Distress => {
                    let z = distress_index(
                        ticker,
                        fiscal_year,
                        &statements.balance_sheet,
                        &statements.financials,
                        period,
                        anomalies,
                    );
                    PeriodRecord {
                        ticker: ticker.to_string(),
                        fiscal_year,
                        sector: sector.clone(),
                        model: ScoreModel::AltmanZ,
                        score: z,
                        status: z.map(RiskStatus::from_distress_index),
                    }
                }
            }
        })
        .collect()
}
