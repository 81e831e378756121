//! Domain layer: pure projection logic.

pub mod aggregate;
pub mod layout;
pub mod rotation;
pub mod seating;
pub mod validate;
pub mod view;
pub mod visibility;

#[cfg(test)]
mod tests_props_seating;
#[cfg(test)]
mod tests_validate;
#[cfg(test)]
mod tests_view;

// Re-exports for ergonomics
pub use aggregate::OwnershipIndex;
pub use layout::{seat_sequence, SeatId};
pub use rotation::{display_rng, plan_rotation};
pub use seating::assign_seats;
pub use validate::validate_roster;
pub use view::project;
pub use visibility::{name_highlight, visible_role};
