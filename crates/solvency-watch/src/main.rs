//! solvency-watch: score a portfolio's solvency from statement fixtures,
//! export the results, and send downgrade alerts.
//!
//! Usage:
//!   cargo run -p solvency-watch -- --data fixtures --out output
//!   cargo run -p solvency-watch -- --tickers ATUL.NS CCL.NS --dry-run
//!   cargo run -p solvency-watch -- --alerts-only output/records.csv

mod export;
mod source;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use downgrade_detector::detect_downgrades;
use notification_service::{NotificationConfig, NotificationService};
use scoring_core::PeriodRecord;
use scoring_orchestrator::PortfolioScorer;
use source::JsonFileSource;

const DEFAULT_TICKERS: &[&str] = &[
    "ATUL.NS", "BAYERCROP.NS", "BATAINDIA.NS", "GRAPHITE.NS",
    "CARBORUNIV.NS", "FINCABLES.NS", "CEATLTD.NS", "ELGIEQUIP.NS",
    "HAPPSTMNDS.NS", "SKFINDIA.NS", "CYIENT.NS", "EIHOTEL.NS",
    "BLUEDART.NS", "ASTRAZEN.NS", "CESC.NS", "DEEPAKFERT.NS",
    "CCL.NS", "EIDPARRY.NS", "MGL.NS", "CERA.NS",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solvency_watch=info,scoring_orchestrator=info,downgrade_detector=info,notification_service=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let dry_run = args.iter().any(|a| a == "--dry-run");
    let data_dir = flag_value(&args, "--data").unwrap_or_else(|| "fixtures".to_string());
    let out_dir = flag_value(&args, "--out").unwrap_or_else(|| "output".to_string());
    let alerts_only = flag_value(&args, "--alerts-only");
    let tickers = flag_values(&args, "--tickers")
        .unwrap_or_else(|| DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect());

    let out_dir = Path::new(&out_dir);
    std::fs::create_dir_all(out_dir)?;

    let records = if let Some(ref path) = alerts_only {
        tracing::info!(path, "detect-only run over an existing record table");
        export::read_records(Path::new(path))?
    } else {
        let scorer = PortfolioScorer::new(Arc::new(JsonFileSource::new(&data_dir)));
        let run = scorer.score_portfolio(&tickers).await;

        export::write_records(&out_dir.join("records.csv"), &run.records)?;
        export::write_ratio_warnings(
            &out_dir.join("ratio_warnings.csv"),
            &run.anomalies.ratio_warnings,
        )?;
        export::write_score_outliers(
            &out_dir.join("score_outliers.csv"),
            &run.anomalies.score_outliers,
        )?;
        tracing::info!(
            ratio_warnings = run.anomalies.ratio_warnings.len(),
            score_outliers = run.anomalies.score_outliers.len(),
            "diagnostics exported"
        );
        log_summary(&run.records);
        run.records
    };

    let alerts = detect_downgrades(&records);
    if alerts.is_empty() {
        tracing::info!("No downgrades detected");
        return Ok(());
    }

    export::write_alerts(&out_dir.join("alert_log.csv"), &alerts, Utc::now())?;
    tracing::info!(alerts = alerts.len(), "downgrade alerts exported");

    if dry_run {
        tracing::info!("Dry run, skipping notification delivery");
    } else {
        let service = NotificationService::new(&NotificationConfig::from_env());
        service.notify(&alerts).await;
    }

    Ok(())
}

/// Per-(sector, model) status counts, mirroring the record table the
/// reporting collaborators consume.
fn log_summary(records: &[PeriodRecord]) {
    let mut counts: BTreeMap<(String, String, String), usize> = BTreeMap::new();
    for record in records {
        let status = record
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Unscored".to_string());
        *counts
            .entry((record.sector.clone(), record.model.to_string(), status))
            .or_default() += 1;
    }
    for ((sector, model, status), count) in counts {
        tracing::info!(sector, model, status, count, "summary");
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .map(|pair| pair[1].clone())
}

fn flag_values(args: &[String], flag: &str) -> Option<Vec<String>> {
    let start = args.iter().position(|a| a == flag)? + 1;
    let values: Vec<String> = args[start..]
        .iter()
        .take_while(|a| !a.starts_with("--"))
        .cloned()
        .collect();
    (!values.is_empty()).then_some(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flag_parsing() {
        let argv = args(&["solvency-watch", "--data", "d", "--tickers", "A.NS", "B.NS", "--dry-run"]);
        assert_eq!(flag_value(&argv, "--data").as_deref(), Some("d"));
        assert_eq!(flag_value(&argv, "--out"), None);
        assert_eq!(
            flag_values(&argv, "--tickers"),
            Some(vec!["A.NS".to_string(), "B.NS".to_string()])
        );
        assert_eq!(flag_values(&argv, "--missing"), None);
    }
}
