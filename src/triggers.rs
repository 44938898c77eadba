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

//! Trigger recognition: literal leading-character patterns that, followed
//! by a space, invoke a document transformation.
//!
//! | Prefix         | Consumes | Transformation                      |
//! |----------------|----------|-------------------------------------|
//! | four backticks | 4        | toggle code block                   |
//! | `***`          | 3        | toggle `UNDERLINE` / `NO_UNDERLINE` |
//! | `**`           | 2        | toggle `RED` / `NO_COLOR`           |
//! | `*`            | 1        | toggle `BOLD` / `NORMAL`            |
//! | `#`            | 1        | set block kind `header-one`         |

use crate::{BlockKind, InlineStyle};

/// The transformation a trigger rule applies once its prefix is consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Unconditionally set the block kind.  Never a toggle; retriggering
    /// is idempotent.
    SetBlockKind(BlockKind),
    /// Toggle an inline style: `on` when inactive at the caret, `off`
    /// (the explicit deactivation marker) when already active.
    ToggleStyle { on: InlineStyle, off: InlineStyle },
    /// Flip the block into or out of a code block.
    ToggleCodeBlock,
}

/// One entry of the trigger table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerRule {
    /// Literal prefix the block text must start with.
    pub prefix: &'static str,
    pub transform: Transform,
}

impl TriggerRule {
    /// Number of UTF-16 code units the trigger consumes.  Prefixes are
    /// ASCII, so the byte length is the UTF-16 length.
    pub fn prefix_len(&self) -> usize {
        self.prefix.len()
    }
}

/// The only character that fires trigger evaluation.
const TRIGGER_CHAR: char = ' ';

/// Trigger rules in priority order: longer prefixes strictly before
/// shorter ones, so a block starting with `***` can never satisfy the
/// `**` or `*` rules.
pub(crate) const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        prefix: "````",
        transform: Transform::ToggleCodeBlock,
    },
    TriggerRule {
        prefix: "***",
        transform: Transform::ToggleStyle {
            on: InlineStyle::Underline,
            off: InlineStyle::NoUnderline,
        },
    },
    TriggerRule {
        prefix: "**",
        transform: Transform::ToggleStyle {
            on: InlineStyle::Red,
            off: InlineStyle::NoColor,
        },
    },
    TriggerRule {
        prefix: "*",
        transform: Transform::ToggleStyle {
            on: InlineStyle::Bold,
            off: InlineStyle::Normal,
        },
    },
    TriggerRule {
        prefix: "#",
        transform: Transform::SetBlockKind(BlockKind::HeaderOne),
    },
];

/// Decide whether `incoming`, about to be inserted into the block whose
/// current text is `block_text`, fires a trigger.
///
/// `block_text` is the block content *before* the incoming character is
/// inserted.  Rules are evaluated top-to-bottom with early exit; the first
/// (longest) matching prefix wins.  Prefixes must match at the start of
/// the block, not merely anywhere in it.
pub fn match_trigger(
    block_text: &str,
    incoming: char,
) -> Option<&'static TriggerRule> {
    if incoming != TRIGGER_CHAR {
        return None;
    }
    TRIGGER_RULES
        .iter()
        .find(|rule| block_text.starts_with(rule.prefix))
}

#[cfg(test)]
mod tests {
    use super::{match_trigger, Transform, TRIGGER_RULES};
    use crate::{BlockKind, InlineStyle};

    fn transform_for(block_text: &str) -> Option<Transform> {
        match_trigger(block_text, ' ').map(|rule| rule.transform)
    }

    // ===================================================================
    // Trigger character
    // ===================================================================

    #[test]
    fn only_space_fires() {
        for incoming in ['a', '*', '#', '`', '\n', '\t'] {
            assert_eq!(match_trigger("*", incoming), None);
            assert_eq!(match_trigger("#", incoming), None);
        }
        assert!(match_trigger("*", ' ').is_some());
    }

    // ===================================================================
    // Rule table
    // ===================================================================

    #[test]
    fn hash_sets_header_one() {
        assert_eq!(
            transform_for("#"),
            Some(Transform::SetBlockKind(BlockKind::HeaderOne))
        );
    }

    #[test]
    fn single_asterisk_toggles_bold() {
        assert_eq!(
            transform_for("*"),
            Some(Transform::ToggleStyle {
                on: InlineStyle::Bold,
                off: InlineStyle::Normal,
            })
        );
    }

    #[test]
    fn double_asterisk_toggles_red() {
        assert_eq!(
            transform_for("**"),
            Some(Transform::ToggleStyle {
                on: InlineStyle::Red,
                off: InlineStyle::NoColor,
            })
        );
    }

    #[test]
    fn triple_asterisk_toggles_underline() {
        assert_eq!(
            transform_for("***"),
            Some(Transform::ToggleStyle {
                on: InlineStyle::Underline,
                off: InlineStyle::NoUnderline,
            })
        );
    }

    #[test]
    fn four_backticks_toggle_code() {
        assert_eq!(transform_for("````"), Some(Transform::ToggleCodeBlock));
    }

    // ===================================================================
    // Longest-prefix priority
    // ===================================================================

    #[test]
    fn triple_asterisk_never_matches_shorter_rules() {
        let rule = match_trigger("***", ' ').unwrap();
        assert_eq!(rule.prefix, "***");
        let rule = match_trigger("***abc", ' ').unwrap();
        assert_eq!(rule.prefix, "***");
    }

    #[test]
    fn double_asterisk_with_trailing_text_matches_double_rule() {
        // The two-asterisk rule wins over the single-asterisk rule even
        // when trailing text follows the prefix.
        let rule = match_trigger("**a", ' ').unwrap();
        assert_eq!(rule.prefix, "**");
    }

    #[test]
    fn single_asterisk_with_trailing_text_matches_single_rule() {
        let rule = match_trigger("*a", ' ').unwrap();
        assert_eq!(rule.prefix, "*");
    }

    #[test]
    fn toggle_rules_pair_styles_with_their_deactivation_markers() {
        for rule in TRIGGER_RULES {
            if let Transform::ToggleStyle { on, off } = rule.transform {
                assert_eq!(on.deactivation(), Some(off), "rule {:?}", rule);
            }
        }
    }

    #[test]
    fn rules_are_ordered_longest_first_within_a_family() {
        let asterisk_lens: Vec<usize> = TRIGGER_RULES
            .iter()
            .filter(|rule| rule.prefix.starts_with('*'))
            .map(|rule| rule.prefix_len())
            .collect();
        let mut sorted = asterisk_lens.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(asterisk_lens, sorted);
    }

    // ===================================================================
    // No match
    // ===================================================================

    #[test]
    fn prefix_must_be_at_block_start() {
        assert_eq!(transform_for("a*"), None);
        assert_eq!(transform_for(" #"), None);
        assert_eq!(transform_for("text # more"), None);
    }

    #[test]
    fn fewer_than_four_backticks_do_not_match() {
        assert_eq!(transform_for("`"), None);
        assert_eq!(transform_for("``"), None);
        assert_eq!(transform_for("```"), None);
    }

    #[test]
    fn empty_block_matches_nothing() {
        assert_eq!(transform_for(""), None);
    }
}
