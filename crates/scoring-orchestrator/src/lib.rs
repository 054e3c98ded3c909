//! Portfolio scoring pipeline: routes each entity to its scoring model,
//! builds per-year period records, and aggregates the anomaly log.

pub mod builder;
pub mod router;

pub use builder::build_period_records;
pub use router::ModelRoute;

use std::sync::Arc;

use scoring_core::{PeriodRecord, StatementSource};
use solvency_models::AnomalyLog;

/// Everything one scoring pass produces.
#[derive(Debug, Default)]
pub struct ScoringRun {
    /// All period records, sorted by (ticker, fiscal year ascending).
    pub records: Vec<PeriodRecord>,
    pub anomalies: AnomalyLog,
}

pub struct PortfolioScorer {
    source: Arc<dyn StatementSource>,
}

impl PortfolioScorer {
    pub fn new(source: Arc<dyn StatementSource>) -> Self {
        Self { source }
    }

    /// Score every ticker in the portfolio.
    ///
    /// Each entity is independent: a source failure logs a warning and
    /// contributes zero records, never aborting the batch.
    pub async fn score_portfolio(&self, tickers: &[String]) -> ScoringRun {
        let mut records = Vec::new();
        let mut anomalies = AnomalyLog::new();

        for ticker in tickers {
            match self.source.fetch(ticker).await {
                Ok(statements) => {
                    let built = build_period_records(ticker, &statements, &mut anomalies);
                    tracing::debug!(ticker, records = built.len(), "scored entity");
                    records.extend(built);
                }
                Err(e) => {
                    tracing::warn!(ticker, error = %e, "statement fetch failed, skipping entity");
                }
            }
        }

        records.sort_by(|a, b| {
            a.ticker
                .cmp(&b.ticker)
                .then(a.fiscal_year.cmp(&b.fiscal_year))
        });

        tracing::info!(
            records = records.len(),
            ratio_warnings = anomalies.ratio_warnings.len(),
            score_outliers = anomalies.score_outliers.len(),
            "scoring pass complete"
        );

        ScoringRun { records, anomalies }
    }
}
