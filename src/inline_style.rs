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

//! Inline style names and style sets.
//!
//! Activation and deactivation are *distinct named styles*, not an
//! on/absent binary: toggling bold off applies the explicit `NORMAL`
//! marker, which visually overrides `BOLD` rather than deleting it.
//! The style map a renderer would pair with these names:
//!
//! | Style          | Rendered as            |
//! |----------------|------------------------|
//! | `BOLD`         | bold weight            |
//! | `NORMAL`       | normal weight          |
//! | `RED`          | red text color         |
//! | `NO_COLOR`     | color cleared          |
//! | `UNDERLINE`    | underline decoration   |
//! | `NO_UNDERLINE` | decoration cleared     |

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A named inline style carried by a run of characters.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InlineStyle {
    Bold,
    /// Explicit normal-weight marker; the deactivation style for [`Bold`](Self::Bold).
    Normal,
    Red,
    /// Explicit color-clearing marker; the deactivation style for [`Red`](Self::Red).
    NoColor,
    Underline,
    /// Explicit decoration-clearing marker; the deactivation style for
    /// [`Underline`](Self::Underline).
    NoUnderline,
}

impl InlineStyle {
    /// The deactivation marker paired with an activation style, or `None`
    /// for styles that are themselves deactivation markers.
    pub fn deactivation(self) -> Option<InlineStyle> {
        match self {
            InlineStyle::Bold => Some(InlineStyle::Normal),
            InlineStyle::Red => Some(InlineStyle::NoColor),
            InlineStyle::Underline => Some(InlineStyle::NoUnderline),
            InlineStyle::Normal
            | InlineStyle::NoColor
            | InlineStyle::NoUnderline => None,
        }
    }
}

/// An ordered set of [`InlineStyle`] names, as carried by a run of text or
/// by the caret style override.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSet(BTreeSet<InlineStyle>);

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, style: InlineStyle) -> bool {
        self.0.contains(&style)
    }

    pub fn insert(&mut self, style: InlineStyle) -> bool {
        self.0.insert(style)
    }

    pub fn remove(&mut self, style: InlineStyle) -> bool {
        self.0.remove(&style)
    }

    /// Flip membership of `style`.
    pub fn toggle(&mut self, style: InlineStyle) {
        if !self.0.remove(&style) {
            self.0.insert(style);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = InlineStyle> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<InlineStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[InlineStyle; N]> for StyleSet {
    fn from(styles: [InlineStyle; N]) -> Self {
        styles.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{InlineStyle, StyleSet};

    #[test]
    fn style_names_match_the_style_map() {
        assert_eq!(InlineStyle::Bold.to_string(), "BOLD");
        assert_eq!(InlineStyle::Normal.to_string(), "NORMAL");
        assert_eq!(InlineStyle::Red.to_string(), "RED");
        assert_eq!(InlineStyle::NoColor.to_string(), "NO_COLOR");
        assert_eq!(InlineStyle::Underline.to_string(), "UNDERLINE");
        assert_eq!(InlineStyle::NoUnderline.to_string(), "NO_UNDERLINE");
    }

    #[test]
    fn activation_styles_have_deactivation_markers() {
        assert_eq!(
            InlineStyle::Bold.deactivation(),
            Some(InlineStyle::Normal)
        );
        assert_eq!(
            InlineStyle::Red.deactivation(),
            Some(InlineStyle::NoColor)
        );
        assert_eq!(
            InlineStyle::Underline.deactivation(),
            Some(InlineStyle::NoUnderline)
        );
    }

    #[test]
    fn deactivation_markers_have_no_deactivation() {
        assert_eq!(InlineStyle::Normal.deactivation(), None);
        assert_eq!(InlineStyle::NoColor.deactivation(), None);
        assert_eq!(InlineStyle::NoUnderline.deactivation(), None);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut styles = StyleSet::new();
        styles.toggle(InlineStyle::Bold);
        assert!(styles.contains(InlineStyle::Bold));
        styles.toggle(InlineStyle::Bold);
        assert!(!styles.contains(InlineStyle::Bold));
    }

    #[test]
    fn toggling_off_keeps_the_on_style() {
        // The legacy semantic: deactivation adds a marker, it does not
        // remove the activation style.
        let mut styles = StyleSet::from([InlineStyle::Bold]);
        styles.toggle(InlineStyle::Normal);
        assert!(styles.contains(InlineStyle::Bold));
        assert!(styles.contains(InlineStyle::Normal));
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let styles = StyleSet::from([InlineStyle::Red, InlineStyle::Bold]);
        let json = serde_json::to_string(&styles).unwrap();
        assert_eq!(json, "[\"BOLD\",\"RED\"]");
        let back: StyleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, styles);
    }
}
