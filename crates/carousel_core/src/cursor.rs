//! Window cursor: which run of [`WINDOW_SIZE`] ranks is visible.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::WINDOW_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCursor {
    first_rank: u32,
    total: u32,
}

impl WindowCursor {
    pub fn new(total: u32) -> Self {
        Self {
            first_rank: 1,
            total,
        }
    }

    pub fn first_rank(&self) -> u32 {
        self.first_rank
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// `max(1, total - WINDOW_SIZE + 1)`
    pub fn last_start_rank(&self) -> u32 {
        last_start_rank(self.total)
    }

    pub fn can_advance(&self) -> bool {
        self.first_rank < self.last_start_rank()
    }

    pub fn can_retreat(&self) -> bool {
        self.first_rank > 1
    }

    pub fn can_step(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.can_advance(),
            Direction::Backward => self.can_retreat(),
        }
    }

    /// First rank the cursor would land on after a step, without moving.
    /// Returns the current first rank when the step is not allowed.
    pub fn peek(&self, direction: Direction) -> u32 {
        if !self.can_step(direction) {
            return self.first_rank;
        }
        match direction {
            Direction::Forward => self
                .first_rank
                .saturating_add(WINDOW_SIZE)
                .min(self.last_start_rank()),
            Direction::Backward => self.first_rank.saturating_sub(WINDOW_SIZE).max(1),
        }
    }

    pub fn peek_advance(&self) -> u32 {
        self.peek(Direction::Forward)
    }

    pub fn peek_retreat(&self) -> u32 {
        self.peek(Direction::Backward)
    }

    pub fn advance(&mut self) -> u32 {
        self.step(Direction::Forward)
    }

    pub fn retreat(&mut self) -> u32 {
        self.step(Direction::Backward)
    }

    pub fn step(&mut self, direction: Direction) -> u32 {
        self.first_rank = self.peek(direction);
        self.first_rank
    }

    pub fn reset(&mut self) {
        self.first_rank = 1;
    }

    pub fn reset_with_total(&mut self, total: u32) {
        self.total = total;
        self.reset();
    }

    /// Ranks of the current window, clipped to `total`. Empty for an empty set.
    pub fn window(&self) -> RangeInclusive<u32> {
        window_at(self.first_rank, self.total)
    }

    /// Ranks adjoining the current window: `[first+5, first+9]` clipped to
    /// `total` going forward, `[max(1, first-5), first-1]` going backward.
    /// `None` at that edge.
    pub fn neighbor(&self, direction: Direction) -> Option<RangeInclusive<u32>> {
        if !self.can_step(direction) {
            return None;
        }
        let window = match direction {
            Direction::Forward => {
                window_at(self.first_rank.saturating_add(WINDOW_SIZE), self.total)
            }
            Direction::Backward => {
                self.first_rank.saturating_sub(WINDOW_SIZE).max(1)..=self.first_rank - 1
            }
        };
        Some(window)
    }

    /// Neighbor in `direction` of the window a step would land on. `None`
    /// when that window would fall outside `[1, total]`.
    pub fn beyond(&self, direction: Direction) -> Option<RangeInclusive<u32>> {
        if !self.can_step(direction) {
            return None;
        }
        let mut target = *self;
        target.step(direction);
        target.neighbor(direction)
    }
}

pub fn last_start_rank(total: u32) -> u32 {
    total.saturating_sub(WINDOW_SIZE).saturating_add(1).max(1)
}

fn window_at(first_rank: u32, total: u32) -> RangeInclusive<u32> {
    let last = first_rank.saturating_add(WINDOW_SIZE - 1).min(total);
    first_rank..=last
}

#[cfg(test)]
#[path = "tests/cursor_tests.rs"]
mod tests;
