//! Library-wide fallback values, shared (read-only) by every render.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::{Color, Error, Result};

static GLOBAL: OnceLock<IconDefaults> = OnceLock::new();
static EMPTY: IconDefaults = IconDefaults {
    size: None,
    color: None,
    stroke_width: None,
    absolute_stroke_width: None,
};

/// Values used when the caller doesn't specify one.  Any value left as `None` falls through to
/// the icon's own fallback.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IconDefaults {
    #[serde(rename = "defaultSize", default)]
    pub size: Option<f32>,
    #[serde(rename = "defaultColor", default)]
    pub color: Option<Color>,
    #[serde(rename = "defaultStrokeWidth", default)]
    pub stroke_width: Option<f32>,
    #[serde(rename = "defaultAbsoluteStrokeWidth", default)]
    pub absolute_stroke_width: Option<bool>,
}

impl IconDefaults {
    /// The conventional defaults: 24 units, `currentColor`, stroke width 2, scaled strokes
    pub fn standard() -> Self {
        Self {
            size: Some(24.0),
            color: Some(Color::CurrentColor),
            stroke_width: Some(2.0),
            absolute_stroke_width: Some(false),
        }
    }

    /// Reads defaults from a JSON object such as `{"defaultSize": 32, "defaultColor": "#333"}`.
    /// Missing keys are left unset.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Installs `self` as the process-wide defaults.  This can only happen once per process.
    pub fn install(self) -> Result<()> {
        log::debug!("Installing shared icon defaults: {:?}", self);
        GLOBAL
            .set(self)
            .map_err(|_| Error::DefaultsAlreadyInstalled)
    }

    /// The process-wide defaults, or an empty set (where every value is unset) if none have been
    /// [`install`](Self::install)ed.
    pub fn global() -> &'static IconDefaults {
        GLOBAL.get().unwrap_or(&EMPTY)
    }
}
