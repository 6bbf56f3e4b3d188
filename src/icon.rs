use crate::{
    color::CURRENT_COLOR,
    node::IconNode,
    render::{RenderedIcon, Renderer},
    IconProps,
};

/// The canonical coordinate frame which all icon geometry is drawn in.  Stroke widths scale
/// relative to this size.
pub const CANONICAL_SIZE: f32 = 24.0;

/// An icon, declared as data: a name, some geometry and the values to use when neither the
/// caller nor the shared defaults provide them.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDef {
    pub name: String,
    pub nodes: Vec<IconNode>,
    pub fallback: Fallback,
}

/// Icon-specific last resort values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fallback {
    pub size: f32,
    pub stroke_width: f32,
}

impl Default for Fallback {
    fn default() -> Self {
        Self {
            size: CANONICAL_SIZE,
            stroke_width: 2.0,
        }
    }
}

impl IconDef {
    /// Creates an icon with the default [`Fallback`]
    pub fn new(name: impl Into<String>, nodes: Vec<IconNode>) -> Self {
        Self {
            name: name.into(),
            nodes,
            fallback: Fallback::default(),
        }
    }

    pub fn with_fallback(mut self, size: f32, stroke_width: f32) -> Self {
        self.fallback = Fallback { size, stroke_width };
        self
    }

    /// Render this icon using the process-wide defaults and the default
    /// [`AttrPolicy`](crate::AttrPolicy)
    pub fn render(&self, props: &IconProps) -> RenderedIcon {
        Renderer::new().render(self, props)
    }

    /// Returns `false` if any shape in this icon hard-codes a stroke or fill color, meaning that
    /// passing a `color` won't fully recolor it.  `none` and values containing `currentColor` are
    /// not hard-coded.
    pub fn is_recolorable(&self) -> bool {
        let mut recolorable = true;
        for node in &self.nodes {
            node.walk(&mut |n| {
                if !n.tag.is_shape() {
                    return;
                }
                for attr in ["stroke", "fill"] {
                    if let Some(value) = n.attrs.get(attr) {
                        let fixed =
                            !value.is_empty() && value != "none" && !value.contains(CURRENT_COLOR);
                        if fixed {
                            recolorable = false;
                        }
                    }
                }
            });
        }
        recolorable
    }
}
