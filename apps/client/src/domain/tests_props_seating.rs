//! Property tests for validation and seating determinism.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::layout::seat_sequence;
use crate::domain::seating::assign_seats;
use crate::domain::test_gens;
use crate::domain::test_helpers::anchor;
use crate::domain::validate::validate_roster;
use crate::domain::view::{project, Concealable};
use crate::protocol::snapshot::GameSnapshot;

proptest! {
    /// Any roster with unique ids and a shuffled permutation of 1..=n as
    /// turn orders must seat, whoever is viewing.
    #[test]
    fn prop_validator_accepts_contiguous_rosters(
        (roster, viewer) in test_gens::roster_with_anchor(),
    ) {
        let seated = validate_roster(&roster, viewer);
        prop_assert!(seated.is_ok());
        prop_assert_eq!(seated.expect("accepted").len(), roster.len());
    }

    /// The viewer is always first, offsets ascend 0..n, and every player
    /// occupies a distinct seat of the declared sequence.
    #[test]
    fn prop_anchor_first_offsets_ascending(
        (roster, viewer) in test_gens::roster_with_anchor(),
    ) {
        let seated = assign_seats(&roster, viewer);

        prop_assert_eq!(seated[0].player.id, viewer);
        for (index, seat) in seated.iter().enumerate() {
            prop_assert_eq!(seat.offset as usize, index);
        }

        let expected = seat_sequence(roster.len()).expect("seatable count");
        let seats: Vec<_> = seated.iter().map(|s| s.seat).collect();
        prop_assert_eq!(&seats[..], expected);

        let distinct: HashSet<_> = seats.iter().copied().collect();
        prop_assert_eq!(distinct.len(), seated.len());
    }

    /// Permuting the input list never changes the assignment.
    #[test]
    fn prop_assignment_is_input_order_independent(
        (shuffled, roster, viewer) in test_gens::roster_with_anchor()
            .prop_flat_map(|(roster, viewer)| {
                (Just(roster.clone()).prop_shuffle(), Just(roster), Just(viewer))
            }),
    ) {
        prop_assert_eq!(
            assign_seats(&roster, viewer),
            assign_seats(&shuffled, viewer)
        );
    }

    /// Whatever the roster, projection always conceals the viewer's own
    /// counts and shows everyone else's.
    #[test]
    fn prop_projection_redacts_exactly_the_viewer(
        (roster, viewer) in test_gens::roster_with_anchor(),
    ) {
        let snap = GameSnapshot {
            game_id: 1,
            players: roster,
            cards: Vec::new(),
            secrets: Vec::new(),
        };
        let board = project(&snap, &anchor(viewer, None)).expect("seatable roster");

        for seat in &board.seats {
            if seat.meta.player_id == viewer {
                prop_assert!(seat.meta.actual_player);
                prop_assert!(seat.num_cards.is_hidden());
                prop_assert!(seat.secrets.is_hidden());
            } else {
                prop_assert!(!seat.meta.actual_player);
                prop_assert_eq!(seat.num_cards.clone(), Concealable::Shown(0));
                prop_assert!(!seat.secrets.is_hidden());
            }
        }
    }
}
