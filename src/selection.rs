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

//! Block identity and selection types.
//!
//! All offsets are UTF-16 code units, matching platform text APIs.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Stable identifier of a block within a document.
///
/// Keys are generated from a process-wide counter and survive
/// serialization, so a restored document keeps its block identities.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockKey(String);

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

impl BlockKey {
    /// A fresh key, unique within this process.
    pub fn generate() -> Self {
        Self(format!("b{}", NEXT_KEY.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A caret endpoint: a block and a UTF-16 offset within its text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub block: BlockKey,
    pub offset: usize,
}

impl Position {
    pub fn new(block: BlockKey, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// An (anchor, focus) selection pair.  Anchor and focus coincide for a
/// collapsed caret; focus is the end the caret moves with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub focus: Position,
}

impl Selection {
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    /// A collapsed caret at `offset` within `block`.
    pub fn caret(block: BlockKey, offset: usize) -> Self {
        let position = Position::new(block, offset);
        Self {
            anchor: position.clone(),
            focus: position,
        }
    }

    /// A range within a single block, from `start` to `end`.
    pub fn range(block: BlockKey, start: usize, end: usize) -> Self {
        Self {
            anchor: Position::new(block.clone(), start),
            focus: Position::new(block, end),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockKey, Selection};

    #[test]
    fn generated_keys_are_unique() {
        let a = BlockKey::generate();
        let b = BlockKey::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn caret_is_collapsed() {
        let caret = Selection::caret(BlockKey::from("b"), 3);
        assert!(caret.is_collapsed());
        assert_eq!(caret.focus.offset, 3);
    }

    #[test]
    fn range_is_not_collapsed() {
        let range = Selection::range(BlockKey::from("b"), 1, 4);
        assert!(!range.is_collapsed());
        assert_eq!(range.anchor.offset, 1);
        assert_eq!(range.focus.offset, 4);
    }

    #[test]
    fn zero_width_range_is_collapsed() {
        let range = Selection::range(BlockKey::from("b"), 2, 2);
        assert!(range.is_collapsed());
    }

    #[test]
    fn key_round_trips_through_serde() {
        let key = BlockKey::from("b42");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"b42\"");
        let back: BlockKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
