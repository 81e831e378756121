//! Fixed table geometry.
//!
//! Six seats with static screen anchors. Which seats a given player count
//! uses is declared here, never computed; only the occupant of a seat
//! changes between renders.

use serde::Serialize;

pub const MIN_SEATED: usize = 2;
pub const MAX_SEATED: usize = 6;

/// The six fixed seats, in table order: the viewer's own seat first, then
/// clockwise around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeatId {
    South,
    SouthWest,
    NorthWest,
    North,
    NorthEast,
    SouthEast,
}

/// Side of the screen a seat's auxiliary panels open toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionLabel {
    Bottom,
    Left,
    Top,
    Right,
}

/// Turn-status ring drawn around a seat's avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RingColor {
    Neutral,
    PrimaryActive,
    SecondaryActive,
    Warning,
    SoftWarning,
    Danger,
}

/// The viewer's seat is drawn large, everyone else's small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeatSize {
    Large,
    Small,
}

/// Static screen anchor for a seat, in percent of the board area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenAnchor {
    pub x: f32,
    pub y: f32,
}

/// All six seats in table order.
pub const SEAT_RING: [SeatId; 6] = [
    SeatId::South,
    SeatId::SouthWest,
    SeatId::NorthWest,
    SeatId::North,
    SeatId::NorthEast,
    SeatId::SouthEast,
];

/// Seat sequence for a seated player count. Index 0 is always the viewer.
/// Counts outside 2..=6 have no layout.
pub fn seat_sequence(count: usize) -> Option<&'static [SeatId]> {
    const TWO: [SeatId; 2] = [SeatId::South, SeatId::North];
    const THREE: [SeatId; 3] = [SeatId::South, SeatId::NorthWest, SeatId::NorthEast];
    const FOUR: [SeatId; 4] = [
        SeatId::South,
        SeatId::SouthWest,
        SeatId::North,
        SeatId::SouthEast,
    ];
    const FIVE: [SeatId; 5] = [
        SeatId::South,
        SeatId::SouthWest,
        SeatId::NorthWest,
        SeatId::NorthEast,
        SeatId::SouthEast,
    ];

    match count {
        2 => Some(&TWO),
        3 => Some(&THREE),
        4 => Some(&FOUR),
        5 => Some(&FIVE),
        6 => Some(&SEAT_RING),
        _ => None,
    }
}

/// Where a seat sits on screen.
pub const fn screen_anchor(seat: SeatId) -> ScreenAnchor {
    match seat {
        SeatId::South => ScreenAnchor { x: 50.0, y: 88.0 },
        SeatId::SouthWest => ScreenAnchor { x: 12.0, y: 70.0 },
        SeatId::NorthWest => ScreenAnchor { x: 12.0, y: 30.0 },
        SeatId::North => ScreenAnchor { x: 50.0, y: 10.0 },
        SeatId::NorthEast => ScreenAnchor { x: 88.0, y: 30.0 },
        SeatId::SouthEast => ScreenAnchor { x: 88.0, y: 70.0 },
    }
}

pub const fn position_label(seat: SeatId) -> PositionLabel {
    match seat {
        SeatId::South => PositionLabel::Bottom,
        SeatId::SouthWest | SeatId::NorthWest => PositionLabel::Left,
        SeatId::North => PositionLabel::Top,
        SeatId::NorthEast | SeatId::SouthEast => PositionLabel::Right,
    }
}
