// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

use crate::{BlockKey, BlockKind, Selection, StyleSet};

/// A contiguous run of identically-styled text within a block.
///
/// Offsets are UTF-16 code units.  A block's spans are kept normalized:
/// sorted, non-overlapping, style sets non-empty, and adjacent spans with
/// equal style sets merged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub styles: StyleSet,
}

/// A paragraph-like unit of structured text: a stable key, a kind, text
/// content, and the styles over it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub key: BlockKey,
    pub kind: BlockKind,
    pub text: String,
    pub styles: Vec<StyleSpan>,
}

impl Block {
    /// An empty `normal` block with a fresh key.
    pub fn empty() -> Self {
        Self {
            key: BlockKey::generate(),
            kind: BlockKind::Normal,
            text: String::new(),
            styles: Vec::new(),
        }
    }

    /// An unstyled `normal` block containing `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            ..Self::empty()
        }
    }

    /// A `normal` block containing `text` with `spans` applied, normalized.
    pub fn with_spans(text: &str, spans: Vec<StyleSpan>) -> Self {
        let mut block = Self::with_text(text);
        block.styles = spans;
        block.styles = rebuild_spans(&block.unit_styles());
        block
    }

    /// Text length in UTF-16 code units.
    pub fn text_len(&self) -> usize {
        utf16_len(&self.text)
    }

    /// Expand the normalized spans into one style set per UTF-16 code unit.
    pub(crate) fn unit_styles(&self) -> Vec<StyleSet> {
        let len = self.text_len();
        let mut units = vec![StyleSet::new(); len];
        for span in &self.styles {
            let start = span.start.min(len);
            let end = span.end.min(len);
            for unit in &mut units[start..end] {
                for style in span.styles.iter() {
                    unit.insert(style);
                }
            }
        }
        units
    }

    /// Styles of the code unit at `offset`, or an empty set out of range.
    pub(crate) fn styles_at(&self, offset: usize) -> StyleSet {
        self.styles
            .iter()
            .find(|span| span.start <= offset && offset < span.end)
            .map(|span| span.styles.clone())
            .unwrap_or_default()
    }
}

/// Rebuild normalized spans from per-unit style sets: run-length merge of
/// equal adjacent sets, dropping empty runs.
pub(crate) fn rebuild_spans(units: &[StyleSet]) -> Vec<StyleSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    while start < units.len() {
        let set = &units[start];
        let mut end = start + 1;
        while end < units.len() && units[end] == *set {
            end += 1;
        }
        if !set.is_empty() {
            spans.push(StyleSpan {
                start,
                end,
                styles: set.clone(),
            });
        }
        start = end;
    }
    spans
}

/// An immutable snapshot of the document: an ordered block sequence plus
/// the caret style override.
///
/// Mutating operations take `&self` and return a new `Document`; a
/// snapshot handed out is never edited in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,

    /// Styles the next insertion at a collapsed caret will carry, set by
    /// toggling a style without a range selection.  Ephemeral editor
    /// state: cleared by any text mutation and never persisted.
    #[serde(skip)]
    pub caret_styles: Option<StyleSet>,
}

impl Document {
    /// A document with a single empty `normal` block.
    pub fn new() -> Self {
        Self::from_blocks(vec![Block::empty()])
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            caret_styles: None,
        }
    }

    /// The block identified by `key`.
    pub fn block(&self, key: &BlockKey) -> Option<&Block> {
        self.blocks.iter().find(|block| block.key == *key)
    }

    /// The full text of the block identified by `key`.
    pub fn block_text(&self, key: &BlockKey) -> Option<&str> {
        self.block(key).map(|block| block.text.as_str())
    }

    pub(crate) fn block_index(&self, key: &BlockKey) -> Option<usize> {
        self.blocks.iter().position(|block| block.key == *key)
    }

    /// A copy of this document with the block at `index` replaced.  The
    /// caret style override carries over; text-mutating callers clear it.
    pub(crate) fn with_block(&self, index: usize, block: Block) -> Document {
        let mut doc = self.clone();
        doc.blocks[index] = block;
        doc
    }

    /// Resolve a selection to document order: `((block, offset), (block,
    /// offset))` with the start first.  `None` if either endpoint's block
    /// is unknown.
    pub(crate) fn ordered_positions(
        &self,
        selection: &Selection,
    ) -> Option<((usize, usize), (usize, usize))> {
        let anchor = (
            self.block_index(&selection.anchor.block)?,
            selection.anchor.offset,
        );
        let focus = (
            self.block_index(&selection.focus.block)?,
            selection.focus.offset,
        );
        Some(if anchor <= focus {
            (anchor, focus)
        } else {
            (focus, anchor)
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// UTF-16 length of a string, the offset unit used throughout.
pub(crate) fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Byte index corresponding to a UTF-16 offset.  An offset landing inside
/// a surrogate pair snaps back to the start of that character; offsets
/// past the end clamp to the end.
pub(crate) fn utf16_to_byte(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units >= offset {
            return byte;
        }
        units += ch.len_utf16();
        if units > offset {
            return byte;
        }
    }
    text.len()
}
