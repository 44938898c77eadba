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

//! Defines the [`DocumentModelInterface`] trait, the contract the
//! autoformat engine requires from the host's document model.
//!
//! The in-crate snapshot model ([`Document`]) implements it; a host editor
//! with its own document representation can implement it instead and run
//! the engine unchanged.
//!
//! [`Document`]: crate::Document

use crate::{BlockKey, BlockKind, InlineStyle, Selection, StyleSet};

/// The document model operations the autoformat engine depends on.
///
/// Implementations are value-semantic: every mutating operation takes the
/// current snapshot by shared reference and returns a **new** snapshot,
/// never editing shared state in place.  This keeps each trigger a single
/// logical edit unit for the host's undo history.
///
/// Operations addressing an unknown block key must return the document
/// unchanged; they never panic.
///
/// All offsets are UTF-16 code units, matching platform text APIs.
pub trait DocumentModelInterface: Sized {
    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Delete the UTF-16 range `[from, to)` of `block`'s text, as a
    /// backward-anchored removal.  Ranges are clamped to the text length.
    fn delete_backward_range(
        &self,
        block: &BlockKey,
        from: usize,
        to: usize,
    ) -> Self;

    /// Unconditionally set `block`'s kind.  Idempotent.
    fn set_block_type(&self, block: &BlockKey, kind: BlockKind) -> Self;

    /// Toggle an inline style at the selection: on a collapsed caret the
    /// style applies to the next insertion; on a range it is applied or
    /// removed across the range depending on whether it is already active
    /// throughout.
    fn toggle_inline_style(
        &self,
        selection: &Selection,
        style: InlineStyle,
    ) -> Self;

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The inline style set effective at the selection: the styles the
    /// next inserted character would carry.
    fn current_inline_styles(&self, selection: &Selection) -> StyleSet;

    /// The full text of `block`, or `None` for an unknown key.
    fn block_text(&self, block: &BlockKey) -> Option<&str>;

    /// The kind of `block`, or `None` for an unknown key.
    fn block_kind(&self, block: &BlockKey) -> Option<BlockKind>;
}
