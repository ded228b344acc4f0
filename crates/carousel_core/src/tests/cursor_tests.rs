use super::*;

#[test]
fn last_start_rank_tracks_total() {
    assert_eq!(last_start_rank(0), 1);
    assert_eq!(last_start_rank(3), 1);
    assert_eq!(last_start_rank(5), 1);
    assert_eq!(last_start_rank(6), 2);
    assert_eq!(last_start_rank(10), 6);
    assert_eq!(last_start_rank(25), 21);
}

#[test]
fn short_list_cannot_move_in_either_direction() {
    let mut cursor = WindowCursor::new(3);

    assert!(!cursor.can_advance());
    assert!(!cursor.can_retreat());
    assert_eq!(cursor.advance(), 1);
    assert_eq!(cursor.retreat(), 1);
    assert_eq!(cursor.window(), 1..=3);
    assert_eq!(cursor.neighbor(Direction::Forward), None);
    assert_eq!(cursor.neighbor(Direction::Backward), None);
}

#[test]
fn ten_results_clamp_the_final_step() {
    let mut cursor = WindowCursor::new(10);

    assert_eq!(cursor.advance(), 6);
    assert_eq!(cursor.window(), 6..=10);
    assert!(!cursor.can_advance());
    assert_eq!(cursor.advance(), 6);
}

#[test]
fn peeking_does_not_move_the_cursor() {
    let mut cursor = WindowCursor::new(12);

    assert_eq!(cursor.peek_advance(), 6);
    assert_eq!(cursor.peek_retreat(), 1);
    assert_eq!(cursor.first_rank(), 1);

    cursor.advance();
    assert_eq!(cursor.peek_advance(), 8);
    assert_eq!(cursor.peek_retreat(), 1);
    assert_eq!(cursor.first_rank(), 6);
}

#[test]
fn twenty_five_results_walk_to_the_last_window_and_back() {
    let mut cursor = WindowCursor::new(25);

    let visited: Vec<u32> = (0..6).map(|_| cursor.advance()).collect();
    assert_eq!(visited, vec![6, 11, 16, 21, 21, 21]);
    assert_eq!(cursor.window(), 21..=25);

    assert_eq!(cursor.retreat(), 16);
}

#[test]
fn retreat_undoes_advance_away_from_edges() {
    for total in [11_u32, 17, 25, 40] {
        let mut cursor = WindowCursor::new(total);
        while cursor.can_advance() {
            let before = cursor.first_rank();
            let after = cursor.advance();
            if after == before + WINDOW_SIZE {
                assert_eq!(cursor.retreat(), before, "total={total} first={before}");
                cursor.advance();
            }
        }
    }
}

#[test]
fn first_rank_never_leaves_bounds() {
    let moves = [
        Direction::Forward,
        Direction::Forward,
        Direction::Backward,
        Direction::Forward,
        Direction::Forward,
        Direction::Forward,
        Direction::Backward,
        Direction::Backward,
        Direction::Backward,
        Direction::Backward,
        Direction::Forward,
    ];

    for total in 0..=32 {
        let mut cursor = WindowCursor::new(total);
        for direction in moves {
            cursor.step(direction);
            assert!(cursor.first_rank() >= 1);
            assert!(cursor.first_rank() <= cursor.last_start_rank());
        }
    }
}

#[test]
fn boundary_steps_are_no_ops() {
    let mut cursor = WindowCursor::new(12);
    assert_eq!(cursor.retreat(), 1);

    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.first_rank(), 8);
    assert_eq!(cursor.advance(), 8);
}

#[test]
fn neighbors_and_beyond_windows() {
    let mut cursor = WindowCursor::new(12);

    assert_eq!(cursor.neighbor(Direction::Forward), Some(6..=10));
    assert_eq!(cursor.neighbor(Direction::Backward), None);
    assert_eq!(cursor.beyond(Direction::Forward), Some(11..=12));

    cursor.advance();
    assert_eq!(cursor.neighbor(Direction::Forward), Some(11..=12));
    assert_eq!(cursor.neighbor(Direction::Backward), Some(1..=5));
    assert_eq!(cursor.beyond(Direction::Forward), None);
    assert_eq!(cursor.beyond(Direction::Backward), None);
}

#[test]
fn neighbors_never_overlap_a_clamped_window() {
    let mut cursor = WindowCursor::new(12);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.window(), 8..=12);
    assert_eq!(cursor.neighbor(Direction::Backward), Some(3..=7));
    assert_eq!(cursor.neighbor(Direction::Forward), None);

    cursor.retreat();
    assert_eq!(cursor.window(), 3..=7);
    assert_eq!(cursor.neighbor(Direction::Backward), Some(1..=2));
    assert_eq!(cursor.neighbor(Direction::Forward), Some(8..=12));
    assert_eq!(cursor.beyond(Direction::Backward), None);
}

#[test]
fn reset_with_total_returns_to_first_window() {
    let mut cursor = WindowCursor::new(30);
    cursor.advance();
    cursor.advance();

    cursor.reset_with_total(7);
    assert_eq!(cursor.first_rank(), 1);
    assert_eq!(cursor.total(), 7);
    assert_eq!(cursor.last_start_rank(), 3);
}
