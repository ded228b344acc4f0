use std::collections::BTreeMap;

use shared::domain::{Rank, RankedResult};

use crate::error::ValidationError;

/// Owns the ranked results of one result set, indexed by rank.
///
/// Ranks always form the dense sequence `1..=N`, so the backing vector is
/// addressed by `rank - 1`.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: Vec<RankedResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored result set. Input order does not matter. On error
    /// the previous contents are left untouched.
    pub fn load(&mut self, results: Vec<RankedResult>) -> Result<(), ValidationError> {
        self.results = index_by_rank(results)?;
        Ok(())
    }

    pub fn get(&self, rank: Rank) -> Option<&RankedResult> {
        let index = rank.0.checked_sub(1)?;
        self.results.get(index as usize)
    }

    /// Results for ranks `[start_rank, start_rank + count - 1]` intersected
    /// with `[1, size()]`. Shorter than `count` near either end.
    pub fn slice(&self, start_rank: u32, count: u32) -> &[RankedResult] {
        if count == 0 || self.results.is_empty() {
            return &[];
        }

        let first = start_rank.max(1);
        let last = start_rank.saturating_add(count - 1).min(self.size());
        if first > last {
            return &[];
        }

        &self.results[(first - 1) as usize..last as usize]
    }

    pub fn size(&self) -> u32 {
        // `load` rejects sets that do not fit in a u32.
        self.results.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedResult> {
        self.results.iter()
    }
}

fn index_by_rank(results: Vec<RankedResult>) -> Result<Vec<RankedResult>, ValidationError> {
    let len = results.len();
    u32::try_from(len).map_err(|_| ValidationError::TooLarge { len })?;

    let mut by_rank = BTreeMap::new();
    for result in results {
        let rank = result.rank.0;
        if rank == 0 {
            return Err(ValidationError::ZeroRank);
        }
        if by_rank.insert(rank, result).is_some() {
            return Err(ValidationError::DuplicateRank { rank });
        }
    }

    // Ranks are unique and positive here, so the first break in the
    // sequence is the lowest missing rank.
    for (expected, &rank) in (1_u32..).zip(by_rank.keys()) {
        if rank != expected {
            return Err(ValidationError::MissingRank { rank: expected });
        }
    }

    Ok(by_rank.into_values().collect())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
