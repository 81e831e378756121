//! Wire types crossing the transport boundary.

pub mod board;
pub mod snapshot;

pub use board::{BoardPayload, PlaceholderView};
pub use snapshot::{
    AllyDeclaration, AnchorContext, DetectiveSet, GameSnapshot, OwnedCard, OwnedSecret, PlayerId,
    PublicPlayer, Role, RosterEntry, SetCard, TurnStatus,
};
