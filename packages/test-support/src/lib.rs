//! Shared fixtures and logging init for integration tests.
//!
//! Snapshot fixtures here mirror what the transport layer actually pushes:
//! camelCase keys, flat ownership lists, free-form role tokens.

use serde_json::{json, Value};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging. Idempotent; level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_tracing() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Four-player table snapshot. Player 1 views it; player 9 holds two cards
/// and an unrevealed secret, player 4 has a revealed secret, and one card
/// and one secret sit unowned on the table.
pub fn snapshot_json() -> Value {
    json!({
        "gameId": 31,
        "players": [
            {
                "id": 9,
                "name": "Ada",
                "avatar": "inspector",
                "turnOrder": 1,
                "turnStatus": "playing",
                "sets": []
            },
            {
                "id": 1,
                "name": "Brid",
                "avatar": "constable",
                "turnOrder": 2,
                "turnStatus": "waiting",
                "sets": [
                    {
                        "setId": 7,
                        "setName": "Alibi",
                        "cards": [{ "id": 70, "name": "Train Ticket" }]
                    }
                ]
            },
            {
                "id": 4,
                "name": "Cato",
                "avatar": "professor",
                "turnOrder": 3,
                "turnStatus": "drawing",
                "socialDisgrace": true,
                "sets": []
            },
            {
                "id": 6,
                "name": "Dara",
                "avatar": "heiress",
                "turnOrder": 4,
                "turnStatus": "discarding",
                "sets": []
            }
        ],
        "cards": [
            { "id": 201, "owner": 9 },
            { "id": 202, "owner": 9 },
            { "id": 203, "owner": 4 },
            { "id": 204, "owner": null },
            { "id": 205, "owner": 6 },
            { "id": 206, "owner": 6 },
            { "id": 207, "owner": 6 }
        ],
        "secrets": [
            { "id": 301, "owner": 9, "revealed": false, "name": null },
            { "id": 302, "owner": 4, "revealed": true, "name": "Gambling Debts" },
            { "id": 303, "owner": null, "revealed": false, "name": null },
            { "id": 304, "owner": 1, "revealed": false, "name": null }
        ]
    })
}

/// The viewer is player 1, a murderer whose declared accomplice is player 4.
pub fn anchor_json() -> Value {
    json!({
        "id": 1,
        "role": "murderer",
        "ally": { "id": 4, "role": "accomplice" }
    })
}

/// End-of-game roster with one decorated and one unrecognizable role token.
pub fn roster_json() -> Value {
    json!([
        { "id": 9, "name": "Ada", "role": "detective" },
        { "id": 1, "name": "Brid", "role": "The Murderer" },
        { "id": 4, "name": "Cato", "role": "accomplice_2" },
        { "id": 6, "name": "Dara", "role": "bystander" }
    ])
}
