//! Transition controller: the `Idle`/`Animating` gate around every window
//! change.
//!
//! A navigation request checks the cursor bounds, prefetches the window
//! beyond its target, closes the gate and hands a [`TransitionPlan`] to the
//! [`TransitionPlayer`]. The state lock is released while the player runs, so
//! highlight selection and loads stay responsive. Once the player resolves,
//! the rotation and cursor step are committed together under the lock,
//! unless a load replaced the result set in the meantime.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::Serialize;
use shared::domain::{Rank, RankedResult};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::{
    cursor::Direction,
    error::CarouselError,
    report::{report_rows, ReportRow},
    slots::{SlotRole, SlotRotator},
    state::{BoxedTarget, CarouselSnapshot, CarouselState, Phase},
    CarouselEvent, ResultSupplier, TransitionPlayer, DEFAULT_TRANSITION_DURATION,
};

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPosition {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotMotion {
    pub slot: usize,
    pub role: SlotRole,
    pub from: SlotPosition,
    pub to: SlotPosition,
    /// The slot travels behind the others and is faded out while moving.
    pub fades: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionPlan {
    pub direction: Direction,
    pub duration: Duration,
    pub motions: [SlotMotion; 3],
}

impl TransitionPlan {
    pub fn for_slots<T>(direction: Direction, duration: Duration, slots: &SlotRotator<T>) -> Self {
        use SlotPosition::{Center, Left, Right};

        let motion = |role: SlotRole, from, to, fades| SlotMotion {
            slot: slots.index_of(role),
            role,
            from,
            to,
            fades,
        };

        let motions = match direction {
            Direction::Forward => [
                motion(SlotRole::Previous, Left, Right, true),
                motion(SlotRole::Current, Center, Left, false),
                motion(SlotRole::Next, Right, Center, false),
            ],
            Direction::Backward => [
                motion(SlotRole::Previous, Left, Center, false),
                motion(SlotRole::Current, Center, Right, false),
                motion(SlotRole::Next, Right, Left, true),
            ],
        };

        Self {
            direction,
            duration,
            motions,
        }
    }
}

/// Transition player that simply waits out the plan's duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedTransition;

#[async_trait]
impl TransitionPlayer for TimedTransition {
    async fn play(&self, plan: &TransitionPlan) -> anyhow::Result<()> {
        debug!(
            direction = ?plan.direction,
            duration = ?plan.duration,
            "playing slide transition"
        );
        tokio::time::sleep(plan.duration).await;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigateOutcome {
    /// The window moved; `first_rank` is the new cursor.
    Committed { first_rank: u32 },
    /// Nothing lies in that direction.
    AtBoundary,
    /// Another transition was already in flight.
    Dropped,
    /// A load replaced the result set while this transition was playing.
    Discarded,
    /// Prefetch or playback failed; the visible window is unchanged.
    Aborted,
}

pub struct TransitionController {
    state: Mutex<CarouselState>,
    player: Arc<dyn TransitionPlayer>,
    duration: Duration,
    events: broadcast::Sender<CarouselEvent>,
}

impl TransitionController {
    pub fn new(targets: [BoxedTarget; 3], player: Arc<dyn TransitionPlayer>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Mutex::new(CarouselState::new(targets)),
            player,
            duration: DEFAULT_TRANSITION_DURATION,
            events,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<CarouselEvent> {
        self.events.subscribe()
    }

    /// Replaces the result set. A transition still playing is discarded and
    /// the gate is forced back open.
    pub async fn load(&self, results: Vec<RankedResult>) -> Result<(), CarouselError> {
        let mut state = self.state.lock().await;
        let interrupted = state.phase == Phase::Animating;

        state.replace_results(results)?;
        if interrupted {
            warn!(
                generation = state.generation,
                "result set replaced during a transition; pending commit discarded"
            );
        }
        info!(
            total = state.store.size(),
            generation = state.generation,
            "loaded ranked results"
        );

        self.emit(CarouselEvent::Loaded {
            total: state.store.size(),
            generation: state.generation,
        });
        self.emit(CarouselEvent::NavigationChanged(state.navigation()));
        self.emit(CarouselEvent::HighlightChanged {
            rank: state.highlight.selected_rank(),
        });
        Ok(())
    }

    pub async fn load_from(&self, supplier: &dyn ResultSupplier) -> Result<u32, CarouselError> {
        let results = supplier.fetch().await.map_err(CarouselError::Supplier)?;
        self.load(results).await?;
        Ok(self.state.lock().await.store.size())
    }

    pub async fn navigate(&self, direction: Direction) -> NavigateOutcome {
        let (plan, generation) = {
            let mut state = self.state.lock().await;
            if state.phase == Phase::Animating {
                debug!(?direction, "navigation dropped; transition already in flight");
                return NavigateOutcome::Dropped;
            }
            if !state.cursor.can_step(direction) {
                debug!(
                    ?direction,
                    first_rank = state.cursor.first_rank(),
                    "navigation at boundary"
                );
                return NavigateOutcome::AtBoundary;
            }

            if let Err(err) = state.prefetch(direction) {
                warn!(?direction, error = %err, "prefetch failed; transition aborted");
                state.abort_transition();
                self.emit(CarouselEvent::TransitionAborted {
                    direction,
                    reason: err.to_string(),
                });
                return NavigateOutcome::Aborted;
            }

            state.phase = Phase::Animating;
            self.emit(CarouselEvent::NavigationChanged(state.navigation()));
            self.emit(CarouselEvent::TransitionStarted {
                direction,
                from_rank: state.cursor.first_rank(),
            });

            (
                TransitionPlan::for_slots(direction, self.duration, &state.slots),
                state.generation,
            )
        };

        let played = self.player.play(&plan).await;

        let mut state = self.state.lock().await;
        if state.generation != generation || state.phase != Phase::Animating {
            debug!(?direction, "transition outlived its result set; discarded");
            self.emit(CarouselEvent::TransitionDiscarded { direction });
            return NavigateOutcome::Discarded;
        }

        if let Err(err) = played {
            warn!(?direction, error = %err, "transition playback failed; aborted");
            state.abort_transition();
            self.emit(CarouselEvent::TransitionAborted {
                direction,
                reason: err.to_string(),
            });
            self.emit(CarouselEvent::NavigationChanged(state.navigation()));
            return NavigateOutcome::Aborted;
        }

        let first_rank = state.commit(direction);
        debug!(?direction, first_rank, "transition committed");
        self.emit(CarouselEvent::TransitionCommitted {
            direction,
            first_rank,
        });
        self.emit(CarouselEvent::NavigationChanged(state.navigation()));
        NavigateOutcome::Committed { first_rank }
    }

    /// Moves the highlight. Works in either phase; a miss keeps the prior
    /// selection.
    pub async fn select(&self, rank: Rank) -> bool {
        let mut state = self.state.lock().await;
        let changed = state.select(rank);
        if changed {
            self.emit(CarouselEvent::HighlightChanged { rank });
        }
        changed
    }

    pub async fn highlighted(&self) -> Option<RankedResult> {
        self.state.lock().await.highlighted().cloned()
    }

    pub async fn snapshot(&self) -> CarouselSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn report(&self) -> Vec<ReportRow> {
        report_rows(self.state.lock().await.store())
    }

    fn emit(&self, event: CarouselEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
