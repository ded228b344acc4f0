//! Tabular projection of a result set for report/export collaborators.

use serde::Serialize;
use shared::domain::Rank;

use crate::store::ResultStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub rank: Rank,
    pub primary_label: String,
    pub secondary_label: String,
    pub score: Option<f64>,
    pub scaled_score: Option<i64>,
    pub reasons: Vec<String>,
}

pub fn report_rows(store: &ResultStore) -> Vec<ReportRow> {
    store
        .iter()
        .map(|result| ReportRow {
            rank: result.rank,
            primary_label: result.primary_label.clone(),
            secondary_label: result.secondary_label.clone(),
            score: result.score,
            scaled_score: result.scaled_score,
            reasons: result.reason_codes.clone(),
        })
        .collect()
}
