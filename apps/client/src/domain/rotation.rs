//! Display-order rotation for roster surfaces that do not use the fixed
//! table geometry.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::protocol::snapshot::{PlayerId, Role, RosterEntry};

/// One roster row in final display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySlot {
    /// 1-based display position.
    pub order: u8,
    pub name: String,
    pub actual_player: bool,
    pub turn: bool,
    /// `None` when the wire token was unrecognized.
    pub role: Option<Role>,
    pub player_id: PlayerId,
}

/// Put the acting player first, then cyclically rotate everyone else by a
/// random step for cosmetic variety. Concealed state is untouched; this
/// shuffle carries no information-hiding duty.
///
/// `rng` is injected so tests, and callers wanting a stable layout, can fix
/// it. A source that always draws 0 leaves the relative order unchanged.
/// An acting id absent from the roster leaves the whole list unrotated.
pub fn plan_rotation<R: Rng + ?Sized>(
    players: &[RosterEntry],
    acting_id: PlayerId,
    anchor_id: PlayerId,
    rng: &mut R,
) -> Vec<DisplaySlot> {
    let mut ordered: Vec<&RosterEntry> = players.iter().collect();

    // Acting player first; a cyclic rotation keeps everyone else's
    // relative order exactly as given.
    if let Some(lead) = ordered.iter().position(|p| p.id == acting_id) {
        ordered.rotate_left(lead);

        let rest = ordered.len() - 1;
        if rest > 0 {
            let step = rng.random_range(0..rest);
            ordered[1..].rotate_left(step);
        }
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, player)| DisplaySlot {
            order: (index + 1) as u8,
            name: player.name.clone(),
            actual_player: player.id == anchor_id,
            turn: player.id == acting_id,
            role: player.role,
            player_id: player.id,
        })
        .collect()
}

/// Stable per-game display seed, so rebuilding the same game state yields
/// the same cosmetic layout instead of a fresh shuffle on every render.
pub fn derive_display_seed(game_id: i64) -> u64 {
    (game_id as u64)
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(1)
}

/// RNG for [`plan_rotation`] keyed to a game.
pub fn display_rng(game_id: i64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_display_seed(game_id))
}
