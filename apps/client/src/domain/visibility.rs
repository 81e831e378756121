//! Asymmetric information disclosure rules.

use crate::domain::view::NameHighlight;
use crate::protocol::snapshot::{AnchorContext, PlayerId, Role};

/// The role the viewer is entitled to know for a given player.
///
/// The viewer knows their own role and their declared ally's; everyone else
/// is unknown here even when a true role exists server-side.
pub fn visible_role(anchor: &AnchorContext, player_id: PlayerId) -> Option<Role> {
    if player_id == anchor.id {
        return anchor.role;
    }
    match &anchor.ally {
        Some(ally) if ally.id == player_id => ally.role,
        _ => None,
    }
}

/// Name highlight for a seat, given what the viewer may see there.
///
/// Only a hidden-team viewer gets recognition colors. Detectives, and
/// viewers whose own role is still unknown, see the default everywhere:
/// the hidden team recognizes itself, detectives get no such help.
pub fn name_highlight(anchor_role: Option<Role>, visible: Option<Role>) -> NameHighlight {
    let viewer_on_hidden_team = matches!(anchor_role, Some(role) if role.is_hidden_team());
    if !viewer_on_hidden_team {
        return NameHighlight::Default;
    }
    match visible {
        Some(Role::Murderer) => NameHighlight::Danger,
        Some(Role::Accomplice) => NameHighlight::Caution,
        _ => NameHighlight::Default,
    }
}
