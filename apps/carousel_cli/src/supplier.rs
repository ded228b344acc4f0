//! Result supplier backed by a saved scoring-service response.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use carousel_core::ResultSupplier;
use shared::{domain::RankedResult, error::ApiError, protocol::parse_suggestions};
use tracing::{info, warn};

pub struct JsonFileSupplier {
    path: PathBuf,
}

impl JsonFileSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResultSupplier for JsonFileSupplier {
    async fn fetch(&self) -> Result<Vec<RankedResult>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read results file '{}'", self.path.display()))?;
        let results = parse_suggestions(&raw)
            .map_err(|err| {
                let err = ApiError::from(err);
                warn!(
                    path = %self.path.display(),
                    code = ?err.code,
                    message = %err.message,
                    "scoring response rejected"
                );
                err
            })
            .with_context(|| format!("failed to parse results file '{}'", self.path.display()))?;

        info!(
            path = %self.path.display(),
            count = results.len(),
            "fetched ranked results"
        );
        Ok(results)
    }
}

#[cfg(test)]
#[path = "tests/supplier_tests.rs"]
mod tests;
