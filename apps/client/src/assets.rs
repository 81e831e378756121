//! Avatar asset lookup with a safe placeholder.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

pub const DEFAULT_AVATAR: &str = "avatars/unknown.png";

static AVATARS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("inspector", "avatars/inspector.png"),
        ("constable", "avatars/constable.png"),
        ("professor", "avatars/professor.png"),
        ("heiress", "avatars/heiress.png"),
        ("butler", "avatars/butler.png"),
        ("gardener", "avatars/gardener.png"),
    ])
});

/// Resolve an avatar key to its asset path. An unknown key falls back to
/// the placeholder and is reported as a diagnostic, never an error.
pub fn avatar_path(key: &str) -> &'static str {
    match AVATARS.get(key) {
        Some(path) => path,
        None => {
            debug!(key = %key, "unknown avatar key, using placeholder");
            DEFAULT_AVATAR
        }
    }
}
