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

//! Inline style queries and toggles.
//!
//! "Active style at the caret" is a pure query over the snapshot and the
//! selection; the only state involved is the snapshot's own caret style
//! override, never a session-global flag.

use super::base::rebuild_spans;
use crate::{Document, InlineStyle, Selection, StyleSet};

impl Document {
    /// The styles a character inserted at a collapsed caret would carry,
    /// ignoring the override: the styles of the code unit before the
    /// caret, or at the block start the first code unit's.  An empty
    /// block inherits from the end of the nearest non-empty block above.
    pub(crate) fn effective_caret_styles(
        &self,
        block_index: usize,
        offset: usize,
    ) -> StyleSet {
        let block = &self.blocks[block_index];
        if offset > 0 {
            return block.styles_at(offset - 1);
        }
        if block.text_len() > 0 {
            return block.styles_at(0);
        }
        for previous in self.blocks[..block_index].iter().rev() {
            let len = previous.text_len();
            if len > 0 {
                return previous.styles_at(len - 1);
            }
        }
        StyleSet::new()
    }

    /// The inline style set effective at the selection: the caret style
    /// override when one is set, otherwise derived from the text around
    /// the selection start.
    pub fn current_inline_styles(&self, selection: &Selection) -> StyleSet {
        if let Some(override_set) = &self.caret_styles {
            return override_set.clone();
        }
        let Some(((block_index, offset), _)) =
            self.ordered_positions(selection)
        else {
            return StyleSet::new();
        };
        if selection.is_collapsed() {
            self.effective_caret_styles(block_index, offset)
        } else {
            self.blocks[block_index].styles_at(offset)
        }
    }

    /// Toggle an inline style at the selection.
    ///
    /// - **Collapsed caret**: flips the style in the effective set and
    ///   stores the result as the caret style override, so the next
    ///   insertion picks it up.
    /// - **Range selection**: applies the style across the range, or
    ///   removes it when it is already active over every selected unit.
    pub fn toggle_inline_style(
        &self,
        selection: &Selection,
        style: InlineStyle,
    ) -> Document {
        if selection.is_collapsed() {
            let mut styles = self.current_inline_styles(selection);
            styles.toggle(style);
            let mut doc = self.clone();
            doc.caret_styles = Some(styles);
            return doc;
        }

        let Some(((start_block, start), (end_block, end))) =
            self.ordered_positions(selection)
        else {
            return self.clone();
        };

        // Per-block unit ranges covered by the selection.
        let mut segments = Vec::new();
        for block_index in start_block..=end_block {
            let len = self.blocks[block_index].text_len();
            let from = if block_index == start_block {
                start.min(len)
            } else {
                0
            };
            let to = if block_index == end_block { end.min(len) } else { len };
            if from < to {
                segments.push((block_index, from..to));
            }
        }
        if segments.is_empty() {
            return self.clone();
        }

        // Active only when every selected unit carries the style.
        let active = segments.iter().all(|(block_index, range)| {
            let units = self.blocks[*block_index].unit_styles();
            units[range.clone()].iter().all(|set| set.contains(style))
        });

        let mut doc = self.clone();
        for (block_index, range) in segments {
            let mut units = doc.blocks[block_index].unit_styles();
            for set in &mut units[range] {
                if active {
                    set.remove(style);
                } else {
                    set.insert(style);
                }
            }
            doc.blocks[block_index].styles = rebuild_spans(&units);
        }
        doc.caret_styles = None;
        doc
    }
}
