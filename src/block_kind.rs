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

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The structural kind of a [`Block`](crate::Block).
///
/// Kind names use the conventional editor block type strings:
/// `normal`, `header-one`, `code-block`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BlockKind {
    #[default]
    Normal,
    HeaderOne,
    CodeBlock,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::BlockKind;

    #[test]
    fn kind_names_use_editor_block_type_strings() {
        assert_eq!(BlockKind::Normal.to_string(), "normal");
        assert_eq!(BlockKind::HeaderOne.to_string(), "header-one");
        assert_eq!(BlockKind::CodeBlock.to_string(), "code-block");
    }

    #[test]
    fn kind_parses_from_type_string() {
        assert_eq!(
            BlockKind::from_str("header-one").unwrap(),
            BlockKind::HeaderOne
        );
        assert!(BlockKind::from_str("header-two").is_err());
    }

    #[test]
    fn serialized_form_matches_display_name() {
        let json = serde_json::to_string(&BlockKind::CodeBlock).unwrap();
        assert_eq!(json, "\"code-block\"");
        let kind: BlockKind = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(kind, BlockKind::Normal);
    }

    #[test]
    fn default_kind_is_normal() {
        assert_eq!(BlockKind::default(), BlockKind::Normal);
    }
}
