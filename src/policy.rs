//! Configurable rules for how presentation defaults are applied to shapes.  Hand-made icon sets
//! disagree about whether line caps get rounded and about what happens to colors which an icon's
//! author already wrote into the data; these rules let the caller pick.

use serde::Deserialize;

use crate::node::Tag;

/// How presentation defaults are applied by a [`Renderer`](crate::Renderer)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttrPolicy {
    /// Which shapes get `stroke-linecap="round"` and `stroke-linejoin="round"` when they don't
    /// set those attributes themselves
    pub round_line_caps: RoundLineCaps,
    /// What happens to `stroke`/`fill` values that are already present in the icon data
    pub preset_colors: PresetColors,
}

impl AttrPolicy {
    /// Only fill in what's strictly required (stroke, fill and stroke width)
    pub fn minimal() -> Self {
        Self {
            round_line_caps: RoundLineCaps::Never,
            preset_colors: PresetColors::Keep,
        }
    }
}

impl Default for AttrPolicy {
    fn default() -> Self {
        Self {
            round_line_caps: RoundLineCaps::AllShapes,
            preset_colors: PresetColors::Substitute,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundLineCaps {
    Never,
    AllShapes,
    /// Only the listed tags get round caps and joins
    Only(Vec<Tag>),
}

impl RoundLineCaps {
    pub fn applies_to(&self, tag: Tag) -> bool {
        match self {
            RoundLineCaps::Never => false,
            RoundLineCaps::AllShapes => tag.is_shape(),
            RoundLineCaps::Only(tags) => tags.contains(&tag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetColors {
    /// Leave pre-set colors exactly as written
    Keep,
    /// Replace any `currentColor` inside a pre-set value with the effective color
    Substitute,
    /// Replace pre-set strokes and fills (other than `none`) with the effective color
    Overwrite,
}
