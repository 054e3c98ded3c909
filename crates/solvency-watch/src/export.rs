//! CSV export of scoring results and re-import of record tables for
//! detect-only runs.

use std::io;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use downgrade_detector::DowngradeAlert;
use scoring_core::{PeriodRecord, RiskStatus, ScoreModel};
use serde::Serialize;
use solvency_models::{RatioWarning, ScoreOutlier};

pub fn write_records(path: &Path, records: &[PeriodRecord]) -> Result<()> {
    write_rows(path, records)
}

pub fn write_ratio_warnings(path: &Path, warnings: &[RatioWarning]) -> Result<()> {
    write_rows(path, warnings)
}

pub fn write_score_outliers(path: &Path, outliers: &[ScoreOutlier]) -> Result<()> {
    write_rows(path, outliers)
}

#[derive(Serialize)]
struct AlertRow<'a> {
    ticker: &'a str,
    fiscal_year: i32,
    from_status: RiskStatus,
    to_status: RiskStatus,
    model: ScoreModel,
    generated_at: String,
}

pub fn write_alerts(path: &Path, alerts: &[DowngradeAlert], generated_at: DateTime<Utc>) -> Result<()> {
    let stamp = generated_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let rows: Vec<AlertRow> = alerts
        .iter()
        .map(|a| AlertRow {
            ticker: &a.ticker,
            fiscal_year: a.fiscal_year,
            from_status: a.from_status,
            to_status: a.to_status,
            model: a.model,
            generated_at: stamp.clone(),
        })
        .collect();
    write_rows(path, &rows)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a previously exported record table.
///
/// Rows that fail to deserialize (unknown status or model labels, mangled
/// numbers) are dropped with a debug log instead of failing the run.
pub fn read_records(path: &Path) -> Result<Vec<PeriodRecord>> {
    let file = std::fs::File::open(path)?;
    Ok(read_records_from(file))
}

fn read_records_from(reader: impl io::Read) -> Vec<PeriodRecord> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => tracing::debug!(error = %e, "dropping malformed record row"),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, year: i32, status: Option<RiskStatus>) -> PeriodRecord {
        PeriodRecord {
            ticker: ticker.to_string(),
            fiscal_year: year,
            sector: "Basic Materials".to_string(),
            model: ScoreModel::AltmanZ,
            score: status.map(|_| 2.5),
            status,
        }
    }

    fn to_csv(records: &[PeriodRecord]) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for r in records {
            writer.serialize(r).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn records_roundtrip_through_csv() {
        let records = vec![
            record("ATUL.NS", 2023, Some(RiskStatus::Grey)),
            record("ATUL.NS", 2024, None),
        ];
        let csv_text = to_csv(&records);
        let parsed = read_records_from(csv_text.as_bytes());

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].status, Some(RiskStatus::Grey));
        assert_eq!(parsed[0].score, Some(2.5));
        assert_eq!(parsed[1].status, None);
        assert_eq!(parsed[1].score, None);
    }

    #[test]
    fn status_parsing_is_case_insensitive() {
        let csv_text = "ticker,fiscal_year,sector,model,score,status\n\
                        CESC.NS,2023,Utilities,Altman Z″,1.05,distress\n";
        let parsed = read_records_from(csv_text.as_bytes());

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].status, Some(RiskStatus::Distress));
    }

    #[test]
    fn malformed_rows_are_dropped() {
        let csv_text = "ticker,fiscal_year,sector,model,score,status\n\
                        GOOD.NS,2023,Utilities,Altman Z″,3.1,Safe\n\
                        BAD.NS,2023,Utilities,Altman Z″,3.1,Bankrupt\n\
                        WORSE.NS,2023,Utilities,Hindenburg,3.1,Safe\n";
        let parsed = read_records_from(csv_text.as_bytes());

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].ticker, "GOOD.NS");
    }

    #[test]
    fn alert_rows_carry_the_generation_stamp() {
        let alerts = vec![DowngradeAlert {
            ticker: "CESC.NS".to_string(),
            fiscal_year: 2023,
            from_status: RiskStatus::Safe,
            to_status: RiskStatus::Grey,
            model: ScoreModel::AltmanZ,
        }];
        let stamp = Utc::now();
        let rows: Vec<AlertRow> = alerts
            .iter()
            .map(|a| AlertRow {
                ticker: &a.ticker,
                fiscal_year: a.fiscal_year,
                from_status: a.from_status,
                to_status: a.to_status,
                model: a.model,
                generated_at: stamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            })
            .collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &rows {
            writer.serialize(row).unwrap();
        }
        let csv_text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(csv_text.contains("CESC.NS"));
        assert!(csv_text.contains(&stamp.format("%Y-%m-%d").to_string()));
    }
}
