use async_trait::async_trait;

use crate::{CompanyStatements, ScoringError};

/// Trait for statement-retrieval collaborators.
///
/// Retrieval (provider APIs, caching, retries) lives entirely behind this
/// seam; the scoring core only consumes the tables it returns.
#[async_trait]
pub trait StatementSource: Send + Sync {
    async fn fetch(&self, ticker: &str) -> Result<CompanyStatements, ScoringError>;
}
