use super::*;

fn ranked(total: u32) -> Vec<RankedResult> {
    (1..=total)
        .map(|rank| RankedResult::new(Rank(rank), format!("City {rank}"), "State"))
        .collect()
}

fn ranks(results: &[RankedResult]) -> Vec<u32> {
    results.iter().map(|r| r.rank.0).collect()
}

#[test]
fn load_indexes_results_regardless_of_input_order() {
    let mut results = ranked(6);
    results.reverse();

    let mut store = ResultStore::new();
    store.load(results).expect("load");

    assert_eq!(store.size(), 6);
    let ordered: Vec<u32> = store.iter().map(|r| r.rank.0).collect();
    assert_eq!(ordered, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(
        store.get(Rank(4)).map(|r| r.primary_label.as_str()),
        Some("City 4")
    );
}

#[test]
fn get_misses_return_none() {
    let mut store = ResultStore::new();
    store.load(ranked(3)).expect("load");

    assert!(store.get(Rank(0)).is_none());
    assert!(store.get(Rank(4)).is_none());
    assert!(ResultStore::new().get(Rank(1)).is_none());
}

#[test]
fn slice_clips_at_both_ends() {
    let mut store = ResultStore::new();
    store.load(ranked(12)).expect("load");

    assert_eq!(ranks(store.slice(1, 5)), vec![1, 2, 3, 4, 5]);
    assert_eq!(ranks(store.slice(11, 5)), vec![11, 12]);
    assert_eq!(ranks(store.slice(0, 3)), vec![1, 2]);
    assert!(store.slice(13, 5).is_empty());
    assert!(store.slice(3, 0).is_empty());
    assert!(store.slice(u32::MAX, 5).is_empty());
}

#[test]
fn empty_load_is_a_valid_state() {
    let mut store = ResultStore::new();
    store.load(Vec::new()).expect("empty load");

    assert!(store.is_empty());
    assert_eq!(store.size(), 0);
    assert!(store.slice(1, 5).is_empty());
}

#[test]
fn rejects_duplicate_ranks() {
    let mut results = ranked(4);
    results[3].rank = Rank(2);

    let err = ResultStore::new().load(results).expect_err("should fail");
    assert_eq!(err, ValidationError::DuplicateRank { rank: 2 });
}

#[test]
fn rejects_gaps_and_zero_ranks() {
    let mut gapped = ranked(3);
    gapped[2].rank = Rank(4);
    let err = ResultStore::new().load(gapped).expect_err("should fail");
    assert_eq!(err, ValidationError::MissingRank { rank: 3 });

    let mut late_start = ranked(3);
    late_start[0].rank = Rank(9);
    let err = ResultStore::new().load(late_start).expect_err("should fail");
    assert_eq!(err, ValidationError::MissingRank { rank: 1 });

    let mut zero = ranked(2);
    zero[0].rank = Rank(0);
    let err = ResultStore::new().load(zero).expect_err("should fail");
    assert_eq!(err, ValidationError::ZeroRank);
}

#[test]
fn failed_load_keeps_previous_results() {
    let mut store = ResultStore::new();
    store.load(ranked(8)).expect("load");

    let mut broken = ranked(3);
    broken[2].rank = Rank(1);
    store.load(broken).expect_err("should fail");

    assert_eq!(store.size(), 8);
    assert!(store.get(Rank(8)).is_some());
}
