//! Roster validation ahead of seat assignment.

use crate::domain::layout::{MAX_SEATED, MIN_SEATED};
use crate::errors::ValidationError;
use crate::protocol::snapshot::{PlayerId, PublicPlayer};

/// Sanitize and validate a raw roster against the viewing player.
///
/// Players whose turn order falls outside the seatable range are spectators
/// or leavers and are dropped silently. Every other irregularity is fatal:
/// the checks run in a fixed order (count, anchor, duplicate orders,
/// contiguity) and the first failure aborts the pass.
pub fn validate_roster(
    players: &[PublicPlayer],
    anchor_id: PlayerId,
) -> Result<Vec<PublicPlayer>, ValidationError> {
    let seated: Vec<PublicPlayer> = players
        .iter()
        .filter(|p| (1..=MAX_SEATED as i32).contains(&p.turn_order))
        .cloned()
        .collect();

    let count = seated.len();
    if count < MIN_SEATED {
        return Err(ValidationError::TooFewPlayers { count });
    }
    if count > MAX_SEATED {
        return Err(ValidationError::TooManyPlayers { count });
    }

    let anchors = seated.iter().filter(|p| p.id == anchor_id).count();
    if anchors == 0 {
        return Err(ValidationError::NoAnchor { anchor_id });
    }
    if anchors > 1 {
        return Err(ValidationError::MultipleAnchors {
            anchor_id,
            count: anchors,
        });
    }

    // The filter above guarantees every order is in 1..=MAX_SEATED.
    let mut seen = [false; MAX_SEATED];
    for player in &seated {
        let slot = (player.turn_order - 1) as usize;
        if seen[slot] {
            return Err(ValidationError::DuplicateOrder {
                order: player.turn_order as u8,
            });
        }
        seen[slot] = true;
    }

    // With no duplicates, the orders are contiguous exactly when the first
    // `count` slots are all taken.
    if !seen[..count].iter().all(|&taken| taken) {
        return Err(ValidationError::NonContiguousOrder { count });
    }

    Ok(seated)
}
