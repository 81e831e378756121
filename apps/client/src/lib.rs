#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Client-side board projection for the deduction table: turns authoritative
//! game snapshots into a per-viewer, information-redacted render model.

pub mod assets;
pub mod display;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod session;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::rotation::{display_rng, plan_rotation, DisplaySlot};
pub use domain::view::{project, BoardView, Concealable, NameHighlight, SeatView};
pub use error::ProjectionError;
pub use errors::ValidationError;
pub use protocol::board::{BoardPayload, PlaceholderView};
pub use protocol::snapshot::{
    decode_anchor, decode_roster, decode_snapshot, AnchorContext, GameSnapshot, PublicPlayer, Role,
    TurnStatus,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
