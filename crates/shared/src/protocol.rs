//! Wire contract of the scoring service's suggestion response.
//!
//! The service answers with `{"suggestions": {"1": {...}, "2": {...}}}` keyed
//! by rank, or `{"error": "..."}` when it could not score the request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{pad_region_code, Rank, RankedResult, UNKNOWN_REGION_CODE},
    error::{ApiError, ErrorCode, PayloadError},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionCodeValue {
    Text(String),
    Number(u64),
}

impl RegionCodeValue {
    pub fn padded(&self) -> String {
        match self {
            Self::Text(text) => pad_region_code(text),
            Self::Number(number) => format!("{number:02}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionPayload {
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default, rename = "stateFIPS", skip_serializing_if = "Option::is_none")]
    pub state_fips: Option<RegionCodeValue>,
    #[serde(default)]
    pub top_features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaled_score: Option<i64>,
}

impl SuggestionPayload {
    pub fn into_ranked_result(self, rank: Rank) -> RankedResult {
        let region_code = self
            .state_fips
            .as_ref()
            .map(RegionCodeValue::padded)
            .unwrap_or_else(|| UNKNOWN_REGION_CODE.to_string());

        let mut result = RankedResult::new(rank, self.city_name, self.state_name)
            .with_reason_codes(self.top_features)
            .with_region_code(&region_code);
        result.score = self.score;
        result.scaled_score = self.scaled_score;
        result
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub suggestions: BTreeMap<String, SuggestionPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuggestionsResponse {
    /// Converts the keyed payload into results ordered by rank. Density of
    /// the ranks is not checked here; the result store owns that rule.
    pub fn into_ranked_results(self) -> Result<Vec<RankedResult>, PayloadError> {
        if let Some(message) = self.error {
            return Err(PayloadError::Upstream(ApiError::new(
                ErrorCode::Upstream,
                message,
            )));
        }

        let mut results = self
            .suggestions
            .into_iter()
            .map(|(key, payload)| {
                let rank = key
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| PayloadError::InvalidRankKey { key: key.clone() })?;
                Ok(payload.into_ranked_result(Rank(rank)))
            })
            .collect::<Result<Vec<_>, PayloadError>>()?;
        results.sort_by_key(|result| result.rank);
        Ok(results)
    }
}

pub fn parse_suggestions(raw: &str) -> Result<Vec<RankedResult>, PayloadError> {
    serde_json::from_str::<SuggestionsResponse>(raw)?.into_ranked_results()
}
