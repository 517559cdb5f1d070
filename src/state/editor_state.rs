//! Pointer state of the editor.
//!
//! ```text
//!              primary press
//!   ┌──────┐ ───────────────► ┌─────────┐ ──┐
//!   │ Idle │                  │ Drawing │   │ move: paint / update last_pos
//!   └──────┘ ◄─────────────── └─────────┘ ◄─┘
//!              primary release
//! ```
//!
//! Tool, color, size and fill changes are independent of this state and may
//! happen in either one.
use crate::geometry::PixelPos;
use crate::tools::PendingShape;

/// Whether the primary button is held, and what the current drag remembers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No button held
    #[default]
    Idle,
    /// Primary button held since the last press
    Drawing {
        /// Where the previous stroke segment ended
        last_pos: PixelPos,
        /// Anchor of a rectangle or circle drag, if the press started one
        pending: Option<PendingShape>,
    },
}

impl EditorState {
    /// Returns true if the editor is currently in a drawing state
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    pub fn last_pos(&self) -> Option<PixelPos> {
        match self {
            EditorState::Drawing { last_pos, .. } => Some(*last_pos),
            EditorState::Idle => None,
        }
    }

    pub fn pending_shape(&self) -> Option<PendingShape> {
        match self {
            EditorState::Drawing { pending, .. } => *pending,
            EditorState::Idle => None,
        }
    }
}
