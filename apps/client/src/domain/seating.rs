//! Circular seat assignment around the fixed table.

use crate::domain::layout::{
    position_label, seat_sequence, PositionLabel, RingColor, SeatId, SeatSize,
};
use crate::protocol::snapshot::{PlayerId, PublicPlayer, TurnStatus};

/// A validated player placed on a fixed seat, before information redaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatedPlayer {
    pub seat: SeatId,
    pub player: PublicPlayer,
    /// Turn-order steps clockwise from the viewer. The viewer is always 0.
    pub offset: u8,
    pub size: SeatSize,
    pub ring_color: RingColor,
    pub position: PositionLabel,
}

/// Seat a validated roster so the viewing player lands on the first seat of
/// the layout sequence and turn order proceeds clockwise from there.
///
/// Deterministic in the roster's contents; the input ordering is irrelevant
/// because every player sorts by their unique offset from the viewer.
/// Callers must pass a roster accepted by
/// [`validate_roster`](crate::domain::validate::validate_roster).
pub fn assign_seats(players: &[PublicPlayer], anchor_id: PlayerId) -> Vec<SeatedPlayer> {
    debug_assert_eq!(
        players.iter().filter(|p| p.id == anchor_id).count(),
        1,
        "assign_seats requires a validated roster"
    );

    let n = players.len() as i32;
    let anchor_order = players
        .iter()
        .find(|p| p.id == anchor_id)
        .map(|p| p.turn_order)
        .unwrap_or(1);

    let mut by_offset: Vec<(u8, &PublicPlayer)> = players
        .iter()
        .map(|p| ((p.turn_order - anchor_order).rem_euclid(n) as u8, p))
        .collect();
    by_offset.sort_by_key(|(offset, _)| *offset);

    let seats = seat_sequence(players.len()).unwrap_or(&[]);

    by_offset
        .into_iter()
        .zip(seats.iter())
        .map(|((offset, player), &seat)| SeatedPlayer {
            seat,
            offset,
            size: if offset == 0 {
                SeatSize::Large
            } else {
                SeatSize::Small
            },
            ring_color: ring_color(player.turn_status),
            position: position_label(seat),
            player: player.clone(),
        })
        .collect()
}

/// Ring color is a fixed function of turn status.
pub const fn ring_color(status: TurnStatus) -> RingColor {
    match status {
        TurnStatus::Waiting => RingColor::Neutral,
        TurnStatus::Playing => RingColor::PrimaryActive,
        TurnStatus::TakingAction => RingColor::SecondaryActive,
        TurnStatus::Discarding => RingColor::Warning,
        TurnStatus::DiscardingOpt => RingColor::SoftWarning,
        TurnStatus::Drawing => RingColor::Danger,
    }
}
