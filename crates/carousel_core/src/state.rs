//! The single mutable value behind a carousel: results, cursor, slots,
//! highlight, and the transition gate.

use std::ops::RangeInclusive;

use serde::Serialize;
use shared::domain::{Rank, RankedResult};

use crate::{
    cursor::{Direction, WindowCursor},
    error::{CarouselError, ValidationError},
    highlight::HighlightSelector,
    slots::{SlotRole, SlotRotator},
    store::ResultStore,
    RenderTarget, WINDOW_SIZE,
};

pub type BoxedTarget = Box<dyn RenderTarget>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Animating,
}

/// Which navigation buttons should be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationState {
    pub can_retreat: bool,
    pub can_advance: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSnapshot {
    pub index: usize,
    pub role: SlotRole,
    pub visible: bool,
    pub window: Option<RangeInclusive<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub phase: Phase,
    pub generation: u64,
    pub first_rank: u32,
    pub total: u32,
    pub window: RangeInclusive<u32>,
    pub navigation: NavigationState,
    pub selected_rank: Rank,
    pub slots: [SlotSnapshot; 3],
}

impl CarouselSnapshot {
    pub fn slot(&self, role: SlotRole) -> Option<&SlotSnapshot> {
        self.slots.iter().find(|slot| slot.role == role)
    }
}

pub struct CarouselState {
    pub(crate) store: ResultStore,
    pub(crate) cursor: WindowCursor,
    pub(crate) slots: SlotRotator<BoxedTarget>,
    pub(crate) highlight: HighlightSelector,
    pub(crate) phase: Phase,
    pub(crate) generation: u64,
}

impl CarouselState {
    pub fn new(targets: [BoxedTarget; 3]) -> Self {
        Self {
            store: ResultStore::new(),
            cursor: WindowCursor::new(0),
            slots: SlotRotator::initialize(targets),
            highlight: HighlightSelector::default(),
            phase: Phase::Idle,
            generation: 0,
        }
    }

    /// Swaps in a new result set and resets cursor, slot roles, highlight and
    /// phase together. Validation failures leave everything as it was.
    pub fn replace_results(&mut self, results: Vec<RankedResult>) -> Result<(), ValidationError> {
        self.store.load(results)?;
        self.generation += 1;
        self.phase = Phase::Idle;
        self.cursor.reset_with_total(self.store.size());
        self.slots.reset_roles();
        self.highlight.reset();
        self.render_all();
        Ok(())
    }

    /// Renders current, previous and next from the cursor, hiding neighbors
    /// that fall outside the result set.
    pub fn render_all(&mut self) {
        let current = self.cursor.window();
        self.fill(SlotRole::Current, Some(current));
        self.fill(SlotRole::Previous, self.cursor.neighbor(Direction::Backward));
        self.fill(SlotRole::Next, self.cursor.neighbor(Direction::Forward));
    }

    /// Loads the window revealed beyond the step target into the hidden slot
    /// on the opposite side, which becomes the far slot after rotation.
    pub fn prefetch(&mut self, direction: Direction) -> Result<(), CarouselError> {
        let target_first = self.cursor.peek(direction);
        if self.store.slice(target_first, WINDOW_SIZE).is_empty() {
            return Err(CarouselError::WindowUnavailable {
                first_rank: target_first,
            });
        }

        let opposite = SlotRole::far_side(direction.opposite());
        self.fill(opposite, self.cursor.beyond(direction));
        Ok(())
    }

    /// Rotates slot roles, moves the cursor and reopens the gate. Returns
    /// the new first rank.
    ///
    /// After an unclamped step every slot already holds its window and
    /// nothing is rendered. A clamped step leaves the rotated-in current
    /// slot and the trailing slot short, so those are refilled.
    pub fn commit(&mut self, direction: Direction) -> u32 {
        self.slots.rotate(direction);
        let first_rank = self.cursor.step(direction);

        let current = self.cursor.window();
        self.refresh(SlotRole::Current, Some(current));
        self.refresh(
            SlotRole::far_side(direction),
            self.cursor.neighbor(direction),
        );
        self.refresh(
            SlotRole::far_side(direction.opposite()),
            self.cursor.neighbor(direction.opposite()),
        );

        self.phase = Phase::Idle;
        first_rank
    }

    /// Drops any in-flight transition effects and re-renders from the
    /// committed cursor.
    pub fn abort_transition(&mut self) {
        self.phase = Phase::Idle;
        self.render_all();
    }

    pub fn select(&mut self, rank: Rank) -> bool {
        self.highlight.select(&self.store, rank)
    }

    pub fn highlighted(&self) -> Option<&RankedResult> {
        self.highlight.current(&self.store)
    }

    pub fn navigation(&self) -> NavigationState {
        if self.phase == Phase::Animating {
            return NavigationState::default();
        }
        NavigationState {
            can_retreat: self.cursor.can_retreat(),
            can_advance: self.cursor.can_advance(),
        }
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        let slots = self.slots.slots();
        let slot_snapshot = |index: usize| SlotSnapshot {
            index,
            role: slots[index].role(),
            visible: slots[index].is_visible(),
            window: slots[index].window(),
        };

        CarouselSnapshot {
            phase: self.phase,
            generation: self.generation,
            first_rank: self.cursor.first_rank(),
            total: self.cursor.total(),
            window: self.cursor.window(),
            navigation: self.navigation(),
            selected_rank: self.highlight.selected_rank(),
            slots: [slot_snapshot(0), slot_snapshot(1), slot_snapshot(2)],
        }
    }

    /// Like [`Self::fill`], but skips slots already showing `window`.
    fn refresh(&mut self, role: SlotRole, window: Option<RangeInclusive<u32>>) {
        if self.slots.slot(role).window() != window {
            self.fill(role, window);
        }
    }

    fn fill(&mut self, role: SlotRole, window: Option<RangeInclusive<u32>>) {
        let results = window
            .map(|ranks| {
                let count = ranks.end().saturating_sub(*ranks.start()).saturating_add(1);
                self.store.slice(*ranks.start(), count)
            })
            .unwrap_or_default();
        self.slots.slot_mut(role).show(results);
    }
}
