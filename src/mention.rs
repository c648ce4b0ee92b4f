// 📍 Mention - an annotated span of story text
//
// Offsets are character offsets (not bytes), end exclusive, as produced by
// the annotation tool.

use crate::entities::{Entity, EntityKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    pub name: String,
    pub kind: EntityKind,
    pub start_in_text: usize,
    pub end_in_text: usize,
}

impl Mention {
    pub fn new(name: impl Into<String>, kind: EntityKind, start_in_text: usize, end_in_text: usize) -> Self {
        Mention {
            name: name.into(),
            kind,
            start_in_text,
            end_in_text,
        }
    }

    /// Build the concrete entity for this mention.
    ///
    /// Left neighborhood: up to `window` characters right before the span.
    /// Right neighborhood: up to `window` characters right after it.
    /// Offsets past the end of `text` are clamped.
    pub fn to_entity(&self, text: &str, window: usize) -> Box<dyn Entity> {
        let len = text.chars().count();
        let start = self.start_in_text.min(len);
        let end = self.end_in_text.clamp(start, len);

        let left = char_slice(text, start.saturating_sub(window), start);
        let right = char_slice(text, end, end.saturating_add(window).min(len));

        self.kind.build(self.name.clone(), left, right)
    }
}

/// Slice `text` by character offsets. Callers keep `start <= end <= len`.
pub(crate) fn char_slice(text: &str, start: usize, end: usize) -> &str {
    &text[byte_offset(text, start)..byte_offset(text, end)]
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
