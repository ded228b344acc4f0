//! Windowed carousel over a ranked result set: five results at a time,
//! three recycled display slots, and a gated slide transition between
//! windows.

use std::time::Duration;

use async_trait::async_trait;
use shared::domain::{Rank, RankedResult};

pub mod cursor;
pub mod error;
pub mod highlight;
pub mod report;
pub mod slots;
pub mod state;
pub mod store;
pub mod transition;

pub use cursor::{Direction, WindowCursor};
pub use error::{CarouselError, ValidationError};
pub use highlight::HighlightSelector;
pub use report::{report_rows, ReportRow};
pub use slots::{Slot, SlotRole, SlotRotator};
pub use state::{CarouselSnapshot, CarouselState, NavigationState, Phase, SlotSnapshot};
pub use store::ResultStore;
pub use transition::{
    NavigateOutcome, SlotMotion, SlotPosition, TimedTransition, TransitionController,
    TransitionPlan,
};

pub const WINDOW_SIZE: u32 = 5;
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(750);

/// Source of a ranked result set, e.g. a scoring service client.
#[async_trait]
pub trait ResultSupplier: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Vec<RankedResult>>;
}

/// One of the three display regions. Write-only from the carousel's side.
pub trait RenderTarget: Send {
    fn render(&mut self, results: &[RankedResult]);
    fn set_visible(&mut self, visible: bool);
}

impl<R: RenderTarget + ?Sized> RenderTarget for Box<R> {
    fn render(&mut self, results: &[RankedResult]) {
        (**self).render(results);
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }
}

/// Plays the positional slide between windows. Resolving the future means
/// the motion finished.
#[async_trait]
pub trait TransitionPlayer: Send + Sync {
    async fn play(&self, plan: &TransitionPlan) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    Loaded {
        total: u32,
        generation: u64,
    },
    NavigationChanged(NavigationState),
    TransitionStarted {
        direction: Direction,
        from_rank: u32,
    },
    TransitionCommitted {
        direction: Direction,
        first_rank: u32,
    },
    TransitionDiscarded {
        direction: Direction,
    },
    TransitionAborted {
        direction: Direction,
        reason: String,
    },
    HighlightChanged {
        rank: Rank,
    },
}
