use shared::domain::{Rank, RankedResult};

use crate::store::ResultStore;

/// Which rank the detail panel shows. Independent of the window cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSelector {
    selected: Rank,
}

impl Default for HighlightSelector {
    fn default() -> Self {
        Self { selected: Rank(1) }
    }
}

impl HighlightSelector {
    pub fn selected_rank(&self) -> Rank {
        self.selected
    }

    /// Moves the highlight to `rank` if the store resolves it. Returns
    /// whether the selection changed; a miss keeps the prior highlight.
    pub fn select(&mut self, store: &ResultStore, rank: Rank) -> bool {
        if store.get(rank).is_none() {
            return false;
        }
        let changed = self.selected != rank;
        self.selected = rank;
        changed
    }

    pub fn current<'a>(&self, store: &'a ResultStore) -> Option<&'a RankedResult> {
        store.get(self.selected)
    }

    pub fn reset(&mut self) {
        self.selected = Rank(1);
    }
}
