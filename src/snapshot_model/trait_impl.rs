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

//! Implements [`DocumentModelInterface`] for [`Document`], forwarding to
//! the snapshot model's inherent methods.

use crate::document_model_interface::DocumentModelInterface;
use crate::{BlockKey, BlockKind, Document, InlineStyle, Selection, StyleSet};

impl DocumentModelInterface for Document {
    fn delete_backward_range(
        &self,
        block: &BlockKey,
        from: usize,
        to: usize,
    ) -> Self {
        self.delete_backward_range(block, from, to)
    }

    fn set_block_type(&self, block: &BlockKey, kind: BlockKind) -> Self {
        self.set_block_type(block, kind)
    }

    fn toggle_inline_style(
        &self,
        selection: &Selection,
        style: InlineStyle,
    ) -> Self {
        self.toggle_inline_style(selection, style)
    }

    fn current_inline_styles(&self, selection: &Selection) -> StyleSet {
        self.current_inline_styles(selection)
    }

    fn block_text(&self, block: &BlockKey) -> Option<&str> {
        self.block_text(block)
    }

    fn block_kind(&self, block: &BlockKey) -> Option<BlockKind> {
        self.block_kind(block)
    }
}
