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

//! The autoformat controller.
//!
//! Consumes trigger decisions from [`match_trigger`] and performs the
//! mutation sequence against the document model: consume the prefix,
//! apply the transformation, return a handled/not-handled verdict to the
//! input pipeline.
//!
//! The host forwards `(document, selection, incoming)` here *before*
//! committing default insertion.  [`InsertOutcome::Handled`] means the
//! engine already applied its own edit and default insertion must be
//! suppressed; [`InsertOutcome::NotHandled`] means the document is
//! untouched and default insertion proceeds.

use log::warn;

use crate::document_model_interface::DocumentModelInterface;
use crate::triggers::{match_trigger, Transform, TriggerRule};
use crate::{BlockKind, Selection};

/// Verdict returned to the input pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum InsertOutcome<D> {
    /// The engine applied its own edit; suppress default insertion.
    Handled(D),
    /// No trigger fired; apply default insertion to the input document.
    NotHandled,
}

impl<D> InsertOutcome<D> {
    pub fn is_handled(&self) -> bool {
        matches!(self, InsertOutcome::Handled(_))
    }

    /// The new document snapshot, if the input was handled.
    pub fn into_document(self) -> Option<D> {
        match self {
            InsertOutcome::Handled(document) => Some(document),
            InsertOutcome::NotHandled => None,
        }
    }
}

/// Intercept a character about to be inserted at `selection`.
///
/// When the text of the caret's block starts with a trigger prefix and
/// `incoming` is the trigger character, the prefix is consumed and the
/// rule's transformation applied, producing exactly one new snapshot:
/// one logical edit unit for the host's undo history.
pub fn on_before_insert<D: DocumentModelInterface>(
    document: &D,
    selection: &Selection,
    incoming: char,
) -> InsertOutcome<D> {
    let block = &selection.focus.block;
    let Some(block_text) = document.block_text(block) else {
        return InsertOutcome::NotHandled;
    };
    let Some(rule) = match_trigger(block_text, incoming) else {
        return InsertOutcome::NotHandled;
    };
    InsertOutcome::Handled(apply_trigger(document, selection, rule))
}

/// Consume the rule's prefix and apply its transformation.
///
/// The removal is anchored at the block start and clamped to the
/// available text; if the block turns out shorter than the prefix (the
/// matcher's own prefix check makes this unreachable through
/// [`on_before_insert`]), the transformation is skipped as a logged
/// no-op and only the truncated removal stands.
pub(crate) fn apply_trigger<D: DocumentModelInterface>(
    document: &D,
    selection: &Selection,
    rule: &TriggerRule,
) -> D {
    let block = &selection.focus.block;
    let available = document
        .block_text(block)
        .map(|text| text.encode_utf16().count())
        .unwrap_or(0);
    let prefix_len = rule.prefix_len();
    let removed = prefix_len.min(available);

    let doc = document.delete_backward_range(block, 0, removed);
    if removed < prefix_len {
        warn!(
            "prefix removal clamped from {prefix_len} to {removed} code \
             units in block {}; skipping transformation",
            block
        );
        return doc;
    }

    // Caret position once the prefix is gone.
    let caret = Selection::caret(
        block.clone(),
        selection.focus.offset.saturating_sub(removed),
    );

    match rule.transform {
        Transform::SetBlockKind(kind) => doc.set_block_type(block, kind),
        Transform::ToggleStyle { on, off } => {
            let style = if doc.current_inline_styles(&caret).contains(on) {
                off
            } else {
                on
            };
            doc.toggle_inline_style(&caret, style)
        }
        Transform::ToggleCodeBlock => {
            let kind = match doc.block_kind(block) {
                Some(BlockKind::CodeBlock) => BlockKind::Normal,
                _ => BlockKind::CodeBlock,
            };
            doc.set_block_type(block, kind)
        }
    }
}
