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

use std::io;

use thiserror::Error;

/// Errors from the save/restore cycle.
///
/// A malformed stored document is fatal at restore time: the engine does
/// not fall back to partial data or silently start an empty session over
/// content the user saved.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The underlying key-value store failed.
    #[error("storage I/O failed: {0}")]
    Store(#[from] io::Error),

    /// The stored payload could not be parsed into a document.
    #[error("malformed persisted document: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The document could not be encoded for storage.
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::PersistError;

    #[test]
    fn messages_name_the_failure() {
        let err = PersistError::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        ));
        assert!(err.to_string().contains("storage I/O failed"));

        let parse = serde_json::from_str::<crate::Document>("{")
            .expect_err("invalid json");
        let err = PersistError::Malformed(parse);
        assert!(err.to_string().contains("malformed persisted document"));
    }

    #[test]
    fn store_errors_keep_their_source() {
        use std::error::Error;
        let err = PersistError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
    }
}
