use super::*;
use shared::domain::Rank;

#[derive(Debug, Default)]
struct RecordingTarget {
    rendered: Vec<Vec<u32>>,
    visible: Vec<bool>,
}

impl RenderTarget for RecordingTarget {
    fn render(&mut self, results: &[RankedResult]) {
        self.rendered
            .push(results.iter().map(|r| r.rank.0).collect());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible.push(visible);
    }
}

fn roles<T>(rotator: &SlotRotator<T>) -> Vec<SlotRole> {
    rotator.slots().iter().map(Slot::role).collect()
}

#[test]
fn initialize_assigns_previous_current_next() {
    let rotator = SlotRotator::initialize(["A", "B", "C"]);

    assert_eq!(
        roles(&rotator),
        vec![SlotRole::Previous, SlotRole::Current, SlotRole::Next]
    );
    assert_eq!(*rotator.slot(SlotRole::Current).target(), "B");
    assert!(rotator.slots().iter().all(|slot| !slot.is_visible()));
}

#[test]
fn rotate_forward_relabels_without_moving_targets() {
    let mut rotator = SlotRotator::initialize(["A", "B", "C"]);
    rotator.rotate_forward();

    assert_eq!(*rotator.slot(SlotRole::Previous).target(), "B");
    assert_eq!(*rotator.slot(SlotRole::Current).target(), "C");
    assert_eq!(*rotator.slot(SlotRole::Next).target(), "A");

    let targets: Vec<&str> = rotator.slots().iter().map(|s| *s.target()).collect();
    assert_eq!(targets, vec!["A", "B", "C"]);
}

#[test]
fn rotate_backward_is_the_inverse() {
    let mut rotator = SlotRotator::initialize(["A", "B", "C"]);
    rotator.rotate_backward();

    assert_eq!(*rotator.slot(SlotRole::Previous).target(), "C");
    assert_eq!(*rotator.slot(SlotRole::Current).target(), "A");
    assert_eq!(*rotator.slot(SlotRole::Next).target(), "B");

    rotator.rotate_forward();
    assert_eq!(
        roles(&rotator),
        vec![SlotRole::Previous, SlotRole::Current, SlotRole::Next]
    );
}

#[test]
fn three_forward_rotations_restore_every_role() {
    let mut rotator = SlotRotator::initialize(["A", "B", "C"]);
    let original = roles(&rotator);

    for _ in 0..3 {
        rotator.rotate_forward();
        let targets: Vec<&str> = rotator.slots().iter().map(|s| *s.target()).collect();
        assert_eq!(targets, vec!["A", "B", "C"]);
    }

    assert_eq!(roles(&rotator), original);
    assert_eq!(rotator.index_of(SlotRole::Current), 1);
}

#[test]
fn every_role_is_held_by_exactly_one_slot() {
    let mut rotator = SlotRotator::initialize([0_u8, 1, 2]);
    let sequence = [
        Direction::Forward,
        Direction::Forward,
        Direction::Backward,
        Direction::Forward,
        Direction::Backward,
        Direction::Backward,
    ];

    for direction in sequence {
        rotator.rotate(direction);
        for role in SlotRole::ALL {
            let holders = rotator
                .slots()
                .iter()
                .filter(|slot| slot.role() == role)
                .count();
            assert_eq!(holders, 1);
            assert_eq!(rotator.slot(role).role(), role);
        }
    }
}

#[test]
fn reset_roles_restores_initial_assignment() {
    let mut rotator = SlotRotator::initialize(["A", "B", "C"]);
    rotator.rotate_forward();
    rotator.rotate_forward();

    rotator.reset_roles();
    assert_eq!(*rotator.slot(SlotRole::Current).target(), "B");
    assert_eq!(rotator.index_of(SlotRole::Next), 2);
}

#[test]
fn show_records_window_and_hide_clears_it() {
    let mut rotator = SlotRotator::initialize([
        RecordingTarget::default(),
        RecordingTarget::default(),
        RecordingTarget::default(),
    ]);
    let results: Vec<RankedResult> = (6..=8)
        .map(|rank| RankedResult::new(Rank(rank), "City", "State"))
        .collect();

    let next = rotator.slot_mut(SlotRole::Next);
    next.show(&results);
    assert_eq!(next.window(), Some(6..=8));
    assert!(next.is_visible());

    next.show(&[]);
    assert_eq!(next.window(), None);
    assert!(!next.is_visible());

    let target = rotator.slot(SlotRole::Next).target();
    assert_eq!(target.rendered, vec![vec![6, 7, 8]]);
    assert_eq!(target.visible, vec![true, false]);
}

#[test]
fn rotation_keeps_rendered_content_with_its_target() {
    let mut rotator = SlotRotator::initialize([
        RecordingTarget::default(),
        RecordingTarget::default(),
        RecordingTarget::default(),
    ]);
    let window: Vec<RankedResult> = (6..=10)
        .map(|rank| RankedResult::new(Rank(rank), "City", "State"))
        .collect();
    rotator.slot_mut(SlotRole::Next).show(&window);

    rotator.rotate_forward();

    let current = rotator.slot(SlotRole::Current);
    assert_eq!(current.window(), Some(6..=10));
    assert_eq!(rotator.index_of(SlotRole::Current), 2);
    assert_eq!(current.target().rendered.len(), 1);
}
