use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! rank_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

rank_newtype!(Rank);

/// Maximum number of reason codes carried per result.
pub const MAX_REASON_CODES: usize = 5;

/// Region code used when the supplier does not know where a result lives.
pub const UNKNOWN_REGION_CODE: &str = "00";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub rank: Rank,
    pub primary_label: String,
    pub secondary_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaled_score: Option<i64>,
    #[serde(default)]
    pub reason_codes: Vec<String>,
    pub image_key: String,
}

impl RankedResult {
    pub fn new(
        rank: Rank,
        primary_label: impl Into<String>,
        secondary_label: impl Into<String>,
    ) -> Self {
        Self {
            rank,
            primary_label: primary_label.into(),
            secondary_label: secondary_label.into(),
            score: None,
            scaled_score: None,
            reason_codes: Vec::new(),
            image_key: image_key_for(UNKNOWN_REGION_CODE),
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_scaled_score(mut self, scaled_score: i64) -> Self {
        self.scaled_score = Some(scaled_score);
        self
    }

    pub fn with_reason_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reason_codes = codes
            .into_iter()
            .take(MAX_REASON_CODES)
            .map(Into::into)
            .collect();
        self
    }

    pub fn with_region_code(mut self, region_code: &str) -> Self {
        self.image_key = image_key_for(region_code);
        self
    }
}

/// Left-pads a region code with zeros to two digits. Blank codes map to
/// [`UNKNOWN_REGION_CODE`].
pub fn pad_region_code(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNKNOWN_REGION_CODE.to_string();
    }
    format!("{trimmed:0>2}")
}

pub fn image_key_for(region_code: &str) -> String {
    format!("city_images/{}000.jpg", pad_region_code(region_code))
}
