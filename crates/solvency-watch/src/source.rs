use std::path::PathBuf;

use async_trait::async_trait;
use scoring_core::{CompanyStatements, ScoringError, StatementSource};

/// Statement source backed by a directory of `<TICKER>.json` fixtures.
///
/// Each fixture carries the sector string plus the three statement tables
/// as label -> period -> value maps.
pub struct JsonFileSource {
    root: PathBuf,
}

impl JsonFileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl StatementSource for JsonFileSource {
    async fn fetch(&self, ticker: &str) -> Result<CompanyStatements, ScoringError> {
        let path = self.root.join(format!("{ticker}.json"));
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| ScoringError::Source(format!("{}: {e}", path.display())))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn missing_fixture_is_a_source_error() {
        let source = JsonFileSource::new("/nonexistent-fixture-dir");
        let err = source.fetch("ATUL.NS").await.unwrap_err();
        assert!(matches!(err, ScoringError::Source(_)));
    }

    #[tokio::test]
    async fn fixture_roundtrip() {
        let dir = std::env::temp_dir().join(format!("solvency-watch-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("ATUL.NS.json"),
            r#"{
                "sector": "Basic Materials",
                "financials": { "EBIT": { "2024-03-31": 5.0 } },
                "balance_sheet": { "Total Assets": { "2024-03-31": 100.0 } },
                "cash_flow": {}
            }"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&dir);
        let statements = source.fetch("ATUL.NS").await.unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(statements.sector.as_deref(), Some("Basic Materials"));
        let period = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(statements.financials.scalar("EBIT", period), Some(5.0));
    }
}
