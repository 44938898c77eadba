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

//! Model code to power inline autoformatting for a rich text editor.
//!
//! The engine watches characters entering a structured document.  When
//! the block containing the caret starts with a trigger prefix (`#`, `*`,
//! `**`, `***`, or four backticks) and the incoming character is a space,
//! it atomically rewrites the document snapshot: the prefix is consumed
//! and a structural or stylistic transformation applied (heading
//! promotion, bold/color/underline toggling, or a code block flip).
//!
//! The host's input pipeline calls [`on_before_insert`] before committing
//! default insertion and honors the returned [`InsertOutcome`].  The
//! document model is reached through [`DocumentModelInterface`]; the
//! in-crate [`Document`] snapshot model implements it and also backs the
//! [`save`]/[`restore`] persistence cycle.
//!
//! ```
//! use autoformat::{on_before_insert, Document, Selection};
//!
//! let doc = Document::new();
//! let key = doc.blocks[0].key.clone();
//! let doc = doc.insert_text(&Selection::caret(key.clone(), 0), "#");
//!
//! let outcome = on_before_insert(&doc, &Selection::caret(key, 1), ' ');
//! assert!(outcome.is_handled());
//! ```

mod autoformat;
mod block_kind;
mod document_model_interface;
mod error;
mod inline_style;
mod persistence;
mod selection;
mod snapshot_model;
mod triggers;

pub use crate::autoformat::{on_before_insert, InsertOutcome};
pub use crate::block_kind::BlockKind;
pub use crate::document_model_interface::DocumentModelInterface;
pub use crate::error::PersistError;
pub use crate::inline_style::{InlineStyle, StyleSet};
pub use crate::persistence::{
    restore, save, ContentStore, MemoryStore, EDITOR_CONTENT_KEY,
};
pub use crate::selection::{BlockKey, Position, Selection};
pub use crate::snapshot_model::{Block, Document, StyleSpan};
pub use crate::triggers::{match_trigger, Transform, TriggerRule};
