use crate::{node::Attrs, Color};

/// Per-render overrides supplied by the caller.  Every field is optional; anything left unset is
/// taken from the shared [`IconDefaults`](crate::IconDefaults), then from the icon itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconProps {
    pub size: Option<f32>,
    pub color: Option<Color>,
    pub stroke_width: Option<f32>,
    pub absolute_stroke_width: Option<bool>,

    /// Class name(s) put on the root `<svg>` element
    pub class: Option<String>,
    /// Extra attributes spread onto the root `<svg>` element, overriding any generated attribute
    /// of the same name
    pub extra_attrs: Attrs,
}

impl IconProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = Some(absolute);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.extra_attrs.set(name, value);
        self
    }
}
