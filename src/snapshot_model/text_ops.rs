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

//! Text editing operations: insert_text and delete_backward_range.
//!
//! Both clear the caret style override; it applies to the very next
//! insertion only.

use super::base::{rebuild_spans, utf16_len, utf16_to_byte};
use crate::{BlockKey, Document, Selection};

impl Document {
    /// Insert `text` at the selection, replacing a same-block range
    /// selection first.  Inserted characters carry the caret style
    /// override when one is set, otherwise the styles effective at the
    /// caret; the override is consumed.
    ///
    /// This is the default insertion the input pipeline applies when the
    /// autoformat engine reports not-handled.  Cross-block ranges are not
    /// produced by that pipeline; they insert at the start position
    /// without deleting.
    pub fn insert_text(&self, selection: &Selection, text: &str) -> Document {
        let Some(((start_block, start), (end_block, end))) =
            self.ordered_positions(selection)
        else {
            return self.clone();
        };

        let mut doc = self.clone();
        if start_block == end_block && start < end {
            let key = doc.blocks[start_block].key.clone();
            doc = doc.delete_backward_range(&key, start, end);
        }

        let block = &doc.blocks[start_block];
        let at = start.min(block.text_len());
        let styles = match &self.caret_styles {
            Some(override_set) => override_set.clone(),
            None => doc.effective_caret_styles(start_block, at),
        };

        let mut units = block.unit_styles();
        for i in 0..utf16_len(text) {
            units.insert(at + i, styles.clone());
        }

        let mut new_block = block.clone();
        let byte = utf16_to_byte(&new_block.text, at);
        new_block.text.insert_str(byte, text);
        new_block.styles = rebuild_spans(&units);

        let mut doc = doc.with_block(start_block, new_block);
        doc.caret_styles = None;
        doc
    }

    /// Delete the UTF-16 range `[from, to)` of `block`'s text as a
    /// backward-anchored removal, shifting the style spans left over the
    /// gap.  Ranges are clamped to the text length; an unknown key or an
    /// empty range returns the document unchanged (minus the override).
    pub fn delete_backward_range(
        &self,
        block: &BlockKey,
        from: usize,
        to: usize,
    ) -> Document {
        let Some(index) = self.block_index(block) else {
            return self.clone();
        };

        let current = &self.blocks[index];
        let len = current.text_len();
        let from = from.min(len);
        let to = to.min(len);
        if from >= to {
            let mut doc = self.clone();
            doc.caret_styles = None;
            return doc;
        }

        let mut units = current.unit_styles();
        units.drain(from..to);

        let mut new_block = current.clone();
        let from_byte = utf16_to_byte(&new_block.text, from);
        let to_byte = utf16_to_byte(&new_block.text, to);
        new_block.text.replace_range(from_byte..to_byte, "");
        new_block.styles = rebuild_spans(&units);

        let mut doc = self.with_block(index, new_block);
        doc.caret_styles = None;
        doc
    }
}
