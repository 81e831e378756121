//! Incoming snapshot wire types.
//!
//! Every snapshot fully replaces the previous one; nothing here is patched
//! incrementally. Free-form role tokens are normalized into [`Role`] at this
//! boundary, once, so the rest of the crate never sees raw strings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProjectionError;

pub type PlayerId = i64;

/// Closed set of roles a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Detective,
    Murderer,
    Accomplice,
}

impl Role {
    /// Normalize a free-form wire token. Matching is case-insensitive and
    /// tolerant of decorated spellings ("The Murderer", "accomplice_2");
    /// anything unrecognized maps to `None`.
    pub fn from_token(token: &str) -> Option<Role> {
        let token = token.trim().to_ascii_lowercase();
        if token.contains("murder") {
            Some(Role::Murderer)
        } else if token.contains("accompl") {
            Some(Role::Accomplice)
        } else if token.contains("detect") {
            Some(Role::Detective)
        } else {
            None
        }
    }

    /// Murderer and accomplice may recognize each other on the board.
    pub fn is_hidden_team(self) -> bool {
        matches!(self, Role::Murderer | Role::Accomplice)
    }
}

fn role_from_token<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.as_deref().and_then(|t| {
        let role = Role::from_token(t);
        if role.is_none() {
            tracing::debug!(token = %t, "unrecognized role token, treating as unknown");
        }
        role
    }))
}

/// What a player is currently doing, as declared by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnStatus {
    Waiting,
    Playing,
    TakingAction,
    Discarding,
    DiscardingOpt,
    Drawing,
}

/// A card on the table, keyed to its owning player while held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedCard {
    pub id: i64,
    #[serde(default)]
    pub owner: Option<PlayerId>,
}

/// A secret card slot as publicly visible. `name` is present only once the
/// secret has been revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedSecret {
    pub id: i64,
    #[serde(default)]
    pub owner: Option<PlayerId>,
    pub revealed: bool,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCard {
    pub id: i64,
    pub name: String,
}

/// A completed detective evidence set. Sets are public the moment they are
/// played, so they pass through projection unredacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectiveSet {
    pub set_id: i64,
    pub set_name: String,
    #[serde(default)]
    pub cards: Vec<SetCard>,
}

/// A player as published to every client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPlayer {
    pub id: PlayerId,
    pub name: String,
    /// Avatar reference key, resolved to an asset by the rendering layer.
    pub avatar: String,
    #[serde(default)]
    pub social_disgrace: bool,
    /// 1-based rank around the table. Out-of-range values mark spectators
    /// and leavers; validation drops them instead of rejecting the snapshot.
    pub turn_order: i32,
    pub turn_status: TurnStatus,
    #[serde(default)]
    pub sets: Vec<DetectiveSet>,
}

/// Full board snapshot. Card and secret ownership arrives flat and is
/// grouped per player again on every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: i64,
    pub players: Vec<PublicPlayer>,
    #[serde(default)]
    pub cards: Vec<OwnedCard>,
    #[serde(default)]
    pub secrets: Vec<OwnedSecret>,
}

/// A declared teammate. Only hidden-team members declare allies, so the
/// role here is never `Detective`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllyDeclaration {
    pub id: PlayerId,
    #[serde(default, deserialize_with = "role_from_token")]
    pub role: Option<Role>,
}

/// What the viewing player privately knows about themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorContext {
    pub id: PlayerId,
    /// `None` until the server has dealt this player a role.
    #[serde(default, deserialize_with = "role_from_token")]
    pub role: Option<Role>,
    #[serde(default)]
    pub ally: Option<AllyDeclaration>,
}

/// Roster row for end-of-game and spectator surfaces. Unlike the seated
/// board, these surfaces may know everyone's claimed role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, deserialize_with = "role_from_token")]
    pub role: Option<Role>,
}

/// Decode a raw snapshot payload. A malformed body, including a `players`
/// field that is not a list, aborts the pass before any seating work.
pub fn decode_snapshot(raw: &str) -> Result<GameSnapshot, ProjectionError> {
    serde_json::from_str(raw).map_err(ProjectionError::from)
}

pub fn decode_anchor(raw: &str) -> Result<AnchorContext, ProjectionError> {
    serde_json::from_str(raw).map_err(ProjectionError::from)
}

pub fn decode_roster(raw: &str) -> Result<Vec<RosterEntry>, ProjectionError> {
    serde_json::from_str(raw).map_err(ProjectionError::from)
}
