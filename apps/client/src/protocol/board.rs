//! Render-model envelope delivered to the rendering boundary.

use serde::Serialize;

use crate::domain::view::BoardView;
use crate::error::ProjectionError;

/// What the rendering layer receives each pass: a fully seated board, or
/// the neutral placeholder it must show instead. There is no partial form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum BoardPayload {
    Board(BoardView),
    Placeholder(PlaceholderView),
}

/// Background-only stand-in shown while no valid projection exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderView {
    /// Stable code of the failure that emptied the board.
    pub code: &'static str,
}

impl BoardPayload {
    /// Collapse a projection result, logging the failure. No retry happens
    /// here; the next snapshot triggers a fresh pass on its own.
    pub fn from_result(result: Result<BoardView, ProjectionError>) -> Self {
        match result {
            Ok(board) => BoardPayload::Board(board),
            Err(err) => {
                tracing::warn!(code = err.code(), error = %err, "projection failed, showing placeholder");
                BoardPayload::Placeholder(PlaceholderView { code: err.code() })
            }
        }
    }
}
