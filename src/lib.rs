//! glyphkit: one generic renderer for a library of stroke-based SVG icons.
//!
//! Each icon is plain data (an [`IconDef`]).  Rendering resolves the effective size, color and
//! stroke width (caller [`IconProps`], then the shared [`IconDefaults`], then the icon's own
//! fallback), fills in the presentation attributes every shape is missing and wraps the result
//! in a root `<svg>` element:
//!
//! ```
//! use glyphkit::{IconDefaults, IconProps, IconSet, Renderer};
//!
//! let icons = IconSet::builtin();
//! let renderer = Renderer::with_defaults(IconDefaults::standard());
//! let icon = icons.render("x", &IconProps::new().size(48.0), &renderer).unwrap();
//! assert_eq!(icon.attrs.get("width"), Some("48"));
//! println!("{}", icon.svg_string());
//! ```

mod builtin;
mod catalog;
mod color;
mod defaults;
mod error;
mod icon;
pub mod node;
mod policy;
mod props;
mod render;
mod svg;

pub use catalog::IconSet;
pub use color::{Color, CURRENT_COLOR};
pub use defaults::IconDefaults;
pub use error::{Error, Result};
pub use icon::{Fallback, IconDef, CANONICAL_SIZE};
pub use policy::{AttrPolicy, PresetColors, RoundLineCaps};
pub use props::IconProps;
pub use render::{RenderedIcon, Renderer, ResolvedConfig, SVG_NAMESPACE, VIEW_BOX};
