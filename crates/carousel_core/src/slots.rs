//! Three stable render targets whose previous/current/next roles rotate as
//! the window moves.

use std::ops::RangeInclusive;

use serde::Serialize;
use shared::domain::RankedResult;

use crate::{cursor::Direction, RenderTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    Previous,
    Current,
    Next,
}

impl SlotRole {
    pub const ALL: [SlotRole; 3] = [SlotRole::Previous, SlotRole::Current, SlotRole::Next];

    fn index(self) -> usize {
        match self {
            Self::Previous => 0,
            Self::Current => 1,
            Self::Next => 2,
        }
    }

    /// Role a slot takes once the content has slid one window in `direction`.
    pub fn rotated(self, direction: Direction) -> Self {
        match (direction, self) {
            (Direction::Forward, Self::Previous) => Self::Next,
            (Direction::Forward, Self::Current) => Self::Previous,
            (Direction::Forward, Self::Next) => Self::Current,
            (Direction::Backward, Self::Previous) => Self::Current,
            (Direction::Backward, Self::Current) => Self::Next,
            (Direction::Backward, Self::Next) => Self::Previous,
        }
    }

    /// Slot that sits off-screen on the side content slides away from.
    pub fn far_side(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::Next,
            Direction::Backward => Self::Previous,
        }
    }
}

#[derive(Debug)]
pub struct Slot<T> {
    target: T,
    role: SlotRole,
    visible: bool,
    window: Option<RangeInclusive<u32>>,
}

impl<T> Slot<T> {
    fn hidden(target: T, role: SlotRole) -> Self {
        Self {
            target,
            role,
            visible: false,
            window: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn role(&self) -> SlotRole {
        self.role
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Ranks currently rendered into this slot.
    pub fn window(&self) -> Option<RangeInclusive<u32>> {
        self.window.clone()
    }
}

impl<T: RenderTarget> Slot<T> {
    /// Renders `results` into the target. An empty slice hides the slot.
    pub fn show(&mut self, results: &[RankedResult]) {
        let (Some(first), Some(last)) = (results.first(), results.last()) else {
            self.hide();
            return;
        };
        self.window = Some(first.rank.0..=last.rank.0);
        self.target.render(results);
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.window = None;
        self.set_visible(false);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.target.set_visible(visible);
    }
}

/// Fixed array of three slots. Slot order (and therefore target identity)
/// never changes; only the role labels move.
#[derive(Debug)]
pub struct SlotRotator<T> {
    slots: [Slot<T>; 3],
    by_role: [usize; 3],
}

impl<T> SlotRotator<T> {
    /// Assigns `A = previous`, `B = current`, `C = next`. All slots start
    /// hidden until something is rendered into them.
    pub fn initialize(targets: [T; 3]) -> Self {
        let [a, b, c] = targets;
        Self {
            slots: [
                Slot::hidden(a, SlotRole::Previous),
                Slot::hidden(b, SlotRole::Current),
                Slot::hidden(c, SlotRole::Next),
            ],
            by_role: [0, 1, 2],
        }
    }

    pub fn rotate_forward(&mut self) {
        self.rotate(Direction::Forward);
    }

    pub fn rotate_backward(&mut self) {
        self.rotate(Direction::Backward);
    }

    pub fn rotate(&mut self, direction: Direction) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.role = slot.role.rotated(direction);
            self.by_role[slot.role.index()] = index;
        }
    }

    /// Puts the initial role assignment back without touching the targets.
    pub fn reset_roles(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.role = SlotRole::ALL[index];
        }
        self.by_role = [0, 1, 2];
    }

    pub fn slot(&self, role: SlotRole) -> &Slot<T> {
        &self.slots[self.by_role[role.index()]]
    }

    pub fn slot_mut(&mut self, role: SlotRole) -> &mut Slot<T> {
        &mut self.slots[self.by_role[role.index()]]
    }

    /// Position of the slot currently holding `role` in the fixed array.
    pub fn index_of(&self, role: SlotRole) -> usize {
        self.by_role[role.index()]
    }

    pub fn slots(&self) -> &[Slot<T>; 3] {
        &self.slots
    }
}

#[cfg(test)]
#[path = "tests/slots_tests.rs"]
mod tests;
