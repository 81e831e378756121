//! Roster validation accept/reject coverage.

use crate::domain::test_helpers::{player, roster};
use crate::domain::validate::validate_roster;
use crate::errors::ValidationError;

#[test]
fn accepts_every_table_size() {
    for n in 2..=6 {
        let players = roster(n);
        let seated = validate_roster(&players, 100).expect("contiguous roster must seat");
        assert_eq!(seated.len(), n);
    }
}

#[test]
fn out_of_range_orders_are_dropped_silently() {
    let mut players = roster(3);
    players.push(player(900, 0));
    players.push(player(901, 7));
    players.push(player(902, -2));

    let seated = validate_roster(&players, 100).expect("spectator rows must not break seating");
    assert_eq!(seated.len(), 3);
    assert!(seated.iter().all(|p| (1..=6).contains(&p.turn_order)));
}

#[test]
fn too_few_players_after_filtering() {
    let players = vec![player(1, 1), player(2, 9)];
    assert_eq!(
        validate_roster(&players, 1),
        Err(ValidationError::TooFewPlayers { count: 1 })
    );
}

#[test]
fn empty_roster_is_too_few() {
    assert_eq!(
        validate_roster(&[], 1),
        Err(ValidationError::TooFewPlayers { count: 0 })
    );
}

#[test]
fn too_many_players() {
    let mut players = roster(6);
    players.push(player(200, 1));
    assert_eq!(
        validate_roster(&players, 100),
        Err(ValidationError::TooManyPlayers { count: 7 })
    );
}

#[test]
fn missing_anchor() {
    let players = roster(3);
    assert_eq!(
        validate_roster(&players, 999),
        Err(ValidationError::NoAnchor { anchor_id: 999 })
    );
}

#[test]
fn duplicated_anchor_id() {
    let mut players = roster(4);
    players.push(player(100, 5));
    assert_eq!(
        validate_roster(&players, 100),
        Err(ValidationError::MultipleAnchors {
            anchor_id: 100,
            count: 2
        })
    );
}

#[test]
fn duplicate_turn_order() {
    let mut players = roster(4);
    players[3].turn_order = 2;
    assert_eq!(
        validate_roster(&players, 100),
        Err(ValidationError::DuplicateOrder { order: 2 })
    );
}

#[test]
fn orders_with_a_gap_are_non_contiguous() {
    let players = vec![player(1, 1), player(2, 2), player(3, 4)];
    assert_eq!(
        validate_roster(&players, 1),
        Err(ValidationError::NonContiguousOrder { count: 3 })
    );
}

#[test]
fn orders_not_starting_at_one_are_non_contiguous() {
    let players = vec![player(1, 2), player(2, 3), player(3, 4)];
    assert_eq!(
        validate_roster(&players, 1),
        Err(ValidationError::NonContiguousOrder { count: 3 })
    );
}

#[test]
fn count_checks_run_before_anchor_checks() {
    // Seven in-range players, none of them the viewer: the size failure
    // must win over the missing anchor.
    let mut players = roster(6);
    players.push(player(200, 3));
    assert_eq!(
        validate_roster(&players, 999),
        Err(ValidationError::TooManyPlayers { count: 7 })
    );
}
