//! Display-mode coordination between sibling presentation components.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

/// Overlays that take over the board while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    SetBrowser,
    SecretDetail,
    GameMenu,
}

/// Shared handle describing whether an overlay currently covers the board.
///
/// Handed explicitly to the components that need it; this replaces the
/// ambient global flag the board used to consult.
#[derive(Debug, Clone, Default)]
pub struct DisplayMode {
    current: Arc<RwLock<Option<Overlay>>>,
}

impl DisplayMode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an overlay, replacing whichever one was open before.
    pub fn open(&self, overlay: Overlay) {
        let mut current = self.current.write();
        if let Some(previous) = *current {
            debug!(?previous, ?overlay, "overlay replaced");
        }
        *current = Some(overlay);
    }

    /// Close whatever overlay is open. Idempotent.
    pub fn close(&self) {
        *self.current.write() = None;
    }

    pub fn current(&self) -> Option<Overlay> {
        *self.current.read()
    }

    pub fn is_open(&self) -> bool {
        self.current().is_some()
    }
}
