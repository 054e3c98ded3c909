pub mod altman;
pub mod anomaly;
pub mod labels;
mod lenient;
pub mod piotroski;

pub use altman::distress_index;
pub use anomaly::{AnomalyLog, RatioWarning, ScoreOutlier};
pub use piotroski::quality_score;

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub(crate) fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
