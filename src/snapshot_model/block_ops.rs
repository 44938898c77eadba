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

//! Block-level operations: kind lookup and kind assignment.

use crate::{BlockKey, BlockKind, Document};

impl Document {
    /// Unconditionally set `block`'s kind.  Idempotent; the caret style
    /// override survives, since no text changed.
    pub fn set_block_type(
        &self,
        block: &BlockKey,
        kind: BlockKind,
    ) -> Document {
        let Some(index) = self.block_index(block) else {
            return self.clone();
        };
        let mut doc = self.clone();
        doc.blocks[index].kind = kind;
        doc
    }

    /// The kind of `block`, or `None` for an unknown key.
    pub fn block_kind(&self, block: &BlockKey) -> Option<BlockKind> {
        self.block(block).map(|b| b.kind)
    }
}
