use serde::{Deserialize, Serialize};

use crate::{round2, round4};

/// Ratio inputs outside their plausibility band — usually a statement
/// extraction problem rather than genuine distress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioWarning {
    pub ticker: String,
    pub fiscal_year: i32,
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
    pub x4: f64,
}

/// An implausibly high Z″ score, most often a malformed x4 from near-zero
/// liabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreOutlier {
    pub ticker: String,
    pub fiscal_year: i32,
    pub score: f64,
    pub x4: f64,
}

/// Diagnostic side-records accumulated during distress-index computation.
///
/// Injected `&mut` through the scoring path so the engine stays reentrant;
/// both sequences are append-only and independent of the main
/// classification.
#[derive(Debug, Clone, Default)]
pub struct AnomalyLog {
    pub ratio_warnings: Vec<RatioWarning>,
    pub score_outliers: Vec<ScoreOutlier>,
}

impl AnomalyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_ratio_warning(
        &mut self,
        ticker: &str,
        fiscal_year: i32,
        (x1, x2, x3, x4): (f64, f64, f64, f64),
    ) {
        tracing::debug!(ticker, fiscal_year, x1, x2, x3, x4, "ratio outside plausibility band");
        self.ratio_warnings.push(RatioWarning {
            ticker: ticker.to_string(),
            fiscal_year,
            x1: round4(x1),
            x2: round4(x2),
            x3: round4(x3),
            x4: round4(x4),
        });
    }

    pub fn record_score_outlier(&mut self, ticker: &str, fiscal_year: i32, score: f64, x4: f64) {
        tracing::debug!(ticker, fiscal_year, score, "implausibly high distress-index score");
        self.score_outliers.push(ScoreOutlier {
            ticker: ticker.to_string(),
            fiscal_year,
            score: round2(score),
            x4: round4(x4),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.ratio_warnings.is_empty() && self.score_outliers.is_empty()
    }
}
