//! Final per-viewer render model and the projection entry point.

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::domain::aggregate::OwnershipIndex;
use crate::domain::layout::{PositionLabel, RingColor, SeatId, SeatSize};
use crate::domain::seating::assign_seats;
use crate::domain::validate::validate_roster;
use crate::domain::visibility::{name_highlight, visible_role};
use crate::error::ProjectionError;
use crate::protocol::snapshot::{AnchorContext, DetectiveSet, GameSnapshot, PlayerId, Role};

/// A value the viewer is not entitled to see on the public board.
///
/// Serialized as the string `"hidden"` so a concealed count can never be
/// mistaken for a literal zero by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Concealable<T> {
    Hidden,
    Shown(T),
}

impl<T> Concealable<T> {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Concealable::Hidden)
    }

    pub fn shown(&self) -> Option<&T> {
        match self {
            Concealable::Shown(value) => Some(value),
            Concealable::Hidden => None,
        }
    }
}

impl<T: Serialize> Serialize for Concealable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Concealable::Hidden => serializer.serialize_str("hidden"),
            Concealable::Shown(value) => value.serialize(serializer),
        }
    }
}

/// Highlight behind a seated player's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NameHighlight {
    Default,
    Danger,
    Caution,
}

/// Public view of one secret card slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretView {
    pub id: i64,
    pub revealed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMeta {
    /// 1-based turn-order position relative to the viewer.
    pub order: u8,
    pub actual_player: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_role: Option<Role>,
    pub player_id: PlayerId,
}

/// One occupied seat, fully redacted for the viewing player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub seat_id: SeatId,
    pub name: String,
    pub avatar: String,
    pub size: SeatSize,
    pub social_disgrace: bool,
    pub ring_color: RingColor,
    pub position: PositionLabel,
    pub name_highlight: NameHighlight,
    pub num_cards: Concealable<u32>,
    pub secrets: Concealable<Vec<SecretView>>,
    pub sets: Vec<DetectiveSet>,
    pub meta: SeatMeta,
}

/// The per-viewer board the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub game_id: i64,
    pub seats: Vec<SeatView>,
}

/// Project one snapshot into the viewing player's board.
///
/// Pure and synchronous; every derived value is recomputed from scratch. A
/// validation failure aborts the whole pass and the caller falls back to a
/// placeholder board until the next snapshot arrives.
pub fn project(
    snapshot: &GameSnapshot,
    anchor: &AnchorContext,
) -> Result<BoardView, ProjectionError> {
    let ownership = OwnershipIndex::build(&snapshot.cards, &snapshot.secrets);
    let roster = validate_roster(&snapshot.players, anchor.id)?;
    let seated = assign_seats(&roster, anchor.id);

    let seats: Vec<SeatView> = seated
        .into_iter()
        .map(|sp| {
            let player = sp.player;
            let is_anchor = player.id == anchor.id;
            let visible = visible_role(anchor, player.id);

            // The viewer's own hand and secrets travel on a private
            // channel; the public board never restates them.
            let (num_cards, secrets) = if is_anchor {
                (Concealable::Hidden, Concealable::Hidden)
            } else {
                (
                    Concealable::Shown(ownership.card_count(player.id)),
                    Concealable::Shown(ownership.secrets(player.id).to_vec()),
                )
            };

            SeatView {
                seat_id: sp.seat,
                name: player.name,
                avatar: player.avatar,
                size: sp.size,
                social_disgrace: player.social_disgrace,
                ring_color: sp.ring_color,
                position: sp.position,
                name_highlight: name_highlight(anchor.role, visible),
                num_cards,
                secrets,
                sets: player.sets,
                meta: SeatMeta {
                    order: sp.offset + 1,
                    actual_player: is_anchor,
                    visible_role: visible,
                    player_id: player.id,
                },
            }
        })
        .collect();

    debug!(
        game_id = snapshot.game_id,
        seats = seats.len(),
        "projected board"
    );

    Ok(BoardView {
        game_id: snapshot.game_id,
        seats,
    })
}
