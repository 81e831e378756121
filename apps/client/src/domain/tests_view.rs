//! Full projection passes over assembled snapshots.

use crate::domain::test_helpers::{anchor, anchor_with_ally, player, roster};
use crate::domain::view::{project, Concealable, NameHighlight};
use crate::error::ProjectionError;
use crate::errors::ValidationError;
use crate::protocol::snapshot::{
    DetectiveSet, GameSnapshot, OwnedCard, OwnedSecret, Role, SetCard,
};

fn snapshot(players: Vec<crate::protocol::snapshot::PublicPlayer>) -> GameSnapshot {
    GameSnapshot {
        game_id: 77,
        players,
        cards: Vec::new(),
        secrets: Vec::new(),
    }
}

#[test]
fn viewer_seat_is_always_redacted() {
    let mut snap = snapshot(roster(4));
    snap.cards = vec![
        OwnedCard {
            id: 1,
            owner: Some(100),
        },
        OwnedCard {
            id: 2,
            owner: Some(101),
        },
    ];
    snap.secrets = vec![OwnedSecret {
        id: 9,
        owner: Some(100),
        revealed: false,
        name: None,
    }];

    let board = project(&snap, &anchor(100, Some(Role::Detective))).expect("valid snapshot");

    let own = &board.seats[0];
    assert!(own.meta.actual_player);
    // Hidden, never a zero or an empty list standing in for "unknown".
    assert_eq!(own.num_cards, Concealable::Hidden);
    assert_eq!(own.secrets, Concealable::Hidden);

    let other = &board.seats[1];
    assert!(!other.meta.actual_player);
    assert_eq!(other.num_cards, Concealable::Shown(1));
    assert!(matches!(&other.secrets, Concealable::Shown(s) if s.is_empty()));
}

#[test]
fn hidden_team_worked_example() {
    // Viewer 1 is the murderer; player 4 is their declared accomplice.
    let players = vec![player(9, 1), player(1, 2), player(4, 3)];
    let snap = snapshot(players);
    let ctx = anchor_with_ally(1, Role::Murderer, 4, Role::Accomplice);

    let board = project(&snap, &ctx).expect("valid snapshot");

    let by_id = |id: i64| {
        board
            .seats
            .iter()
            .find(|s| s.meta.player_id == id)
            .expect("seated")
    };

    let own = by_id(1);
    assert_eq!(own.meta.visible_role, Some(Role::Murderer));
    assert_eq!(own.name_highlight, NameHighlight::Danger);

    let ally = by_id(4);
    assert_eq!(ally.meta.visible_role, Some(Role::Accomplice));
    assert_eq!(ally.name_highlight, NameHighlight::Caution);

    let stranger = by_id(9);
    assert_eq!(stranger.meta.visible_role, None);
    assert_eq!(stranger.name_highlight, NameHighlight::Default);
}

#[test]
fn detective_viewer_sees_default_highlights_everywhere() {
    let snap = snapshot(roster(4));
    let board = project(&snap, &anchor(102, Some(Role::Detective))).expect("valid snapshot");
    assert!(board
        .seats
        .iter()
        .all(|s| s.name_highlight == NameHighlight::Default));
}

#[test]
fn display_orders_are_one_based_and_anchored() {
    let snap = snapshot(roster(5));
    let board = project(&snap, &anchor(102, None)).expect("valid snapshot");

    let orders: Vec<u8> = board.seats.iter().map(|s| s.meta.order).collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    assert_eq!(board.seats[0].meta.player_id, 102);
    assert_eq!(board.game_id, 77);
}

#[test]
fn detective_sets_pass_through_unredacted() {
    let mut players = roster(3);
    players[2].sets = vec![DetectiveSet {
        set_id: 5,
        set_name: "Motive".into(),
        cards: vec![SetCard {
            id: 61,
            name: "Inheritance".into(),
        }],
    }];
    let snap = snapshot(players);

    let board = project(&snap, &anchor(100, None)).expect("valid snapshot");
    let seat = board
        .seats
        .iter()
        .find(|s| s.meta.player_id == 102)
        .expect("seated");
    assert_eq!(seat.sets.len(), 1);
    assert_eq!(seat.sets[0].set_name, "Motive");
}

#[test]
fn validation_failure_aborts_the_pass() {
    let snap = snapshot(vec![player(1, 1)]);
    let err = project(&snap, &anchor(1, None)).expect_err("single player cannot seat");
    match err {
        ProjectionError::Validation(ValidationError::TooFewPlayers { count }) => {
            assert_eq!(count, 1)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
