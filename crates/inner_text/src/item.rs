use core::num::NonZeroUsize;
use serde::Serialize;

/// One entry of a collected item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Item {
    /// Literal text. Empty strings may appear while collecting and are dropped on reduction.
    Text(String),
    /// At least this many line feeds separate the surrounding content.
    /// Adjacent counts collapse to their maximum.
    RequiredBreak(NonZeroUsize),
    /// Opens a scope that has already been merged and normalized.
    BlockStart,
    /// Closes the innermost open scope.
    BlockEnd,
}

impl Item {
    /// Emitted around block-level and caption boxes.
    pub const LINE_BREAK: Self = Self::RequiredBreak(NonZeroUsize::MIN);

    /// Emitted around `p` elements.
    pub const PARAGRAPH_BREAK: Self = Self::RequiredBreak(NonZeroUsize::MIN.saturating_add(1));

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Self::RequiredBreak(_))
    }
}
