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

//! Saving and restoring the document model.
//!
//! The persisted form is a structural JSON encoding of the blocks (key,
//! kind, text, style spans), written to an external key-value store under
//! a fixed session key.  Saves are last-write-wins; there is no merging.
//! The caret style override is ephemeral editor state and is not part of
//! the persisted form.

use std::collections::HashMap;
use std::io;

use log::debug;

use crate::error::PersistError;
use crate::Document;

/// Fixed session key documents are stored under.
pub const EDITOR_CONTENT_KEY: &str = "editorContent";

/// External key-value storage contract.
pub trait ContentStore {
    /// Store `value` under `key`, replacing any prior value.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// The value stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> io::Result<Option<String>>;
}

/// An in-memory [`ContentStore`], used in tests and as the reference
/// implementation of the contract.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryStore {
    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }
}

/// Serialize `document` and write it under [`EDITOR_CONTENT_KEY`],
/// unconditionally overwriting any prior value.
pub fn save<S: ContentStore>(
    store: &mut S,
    document: &Document,
) -> Result<(), PersistError> {
    let payload =
        serde_json::to_string(document).map_err(PersistError::Encode)?;
    store.write(EDITOR_CONTENT_KEY, &payload)?;
    debug!(
        "saved {} block(s) under '{EDITOR_CONTENT_KEY}'",
        document.blocks.len()
    );
    Ok(())
}

/// Read and deserialize the document stored under [`EDITOR_CONTENT_KEY`].
///
/// An absent key yields a document with a single empty block.  A present
/// but malformed payload is fatal ([`PersistError::Malformed`]); the
/// engine does not attempt partial recovery.
pub fn restore<S: ContentStore>(store: &S) -> Result<Document, PersistError> {
    match store.read(EDITOR_CONTENT_KEY)? {
        Some(payload) => {
            let document = serde_json::from_str(&payload)
                .map_err(PersistError::Malformed)?;
            debug!("restored document from '{EDITOR_CONTENT_KEY}'");
            Ok(document)
        }
        None => {
            debug!("no stored content under '{EDITOR_CONTENT_KEY}', starting empty");
            Ok(Document::new())
        }
    }
}
