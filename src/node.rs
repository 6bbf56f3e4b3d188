//! The data model for icon geometry.  An icon is a list of [`IconNode`]s, each of which names an
//! SVG primitive, carries a set of attributes and (rarely) some nested children.  Nodes are plain
//! data: the renderer never mutates them, it produces resolved copies.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// The kind of SVG element a [`IconNode`] becomes.  This is a closed set: anything else is
/// rejected when icon data is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Path,
    Circle,
    Rect,
    Line,
    Polyline,
    Polygon,
    Ellipse,
    /// The generic `<g>` container
    #[serde(rename = "g")]
    Group,
}

impl Tag {
    /// Every tag which draws something (i.e. everything except [`Tag::Group`])
    pub const SHAPES: [Tag; 7] = [
        Tag::Path,
        Tag::Circle,
        Tag::Rect,
        Tag::Line,
        Tag::Polyline,
        Tag::Polygon,
        Tag::Ellipse,
    ];

    /// The SVG element name of this tag
    pub fn name(self) -> &'static str {
        match self {
            Tag::Path => "path",
            Tag::Circle => "circle",
            Tag::Rect => "rect",
            Tag::Line => "line",
            Tag::Polyline => "polyline",
            Tag::Polygon => "polygon",
            Tag::Ellipse => "ellipse",
            Tag::Group => "g",
        }
    }

    /// Parses an SVG element name, returning `None` for anything outside the closed set
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "path" => Tag::Path,
            "circle" => Tag::Circle,
            "rect" => Tag::Rect,
            "line" => Tag::Line,
            "polyline" => Tag::Polyline,
            "polygon" => Tag::Polygon,
            "ellipse" => Tag::Ellipse,
            "g" => Tag::Group,
            _ => return None,
        })
    }

    /// Returns `true` if this tag receives presentation defaults when rendered
    pub fn is_shape(self) -> bool {
        self != Tag::Group
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

////////////////
// ATTRIBUTES //
////////////////

/// An insertion-ordered map of attribute names to values.  Names are stored in their SVG
/// (kebab-case) form, so `strokeWidth` and `stroke-width` refer to the same attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style version of [`Attrs::set`]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Gets the value of an attribute, if it has been set (even to an empty string)
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = normalise_name(name);
        self.entries
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the attribute is absent or set to an empty string.  Renderers treat both
    /// cases the same way.
    pub fn is_missing(&self, name: &str) -> bool {
        self.get(name).map_or(true, str::is_empty)
    }

    /// Sets an attribute.  An existing attribute keeps its position; new ones are appended.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let name = normalise_name(name);
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name.into_owned(), value)),
        }
    }

    /// Sets an attribute only if [`Attrs::is_missing`] says it isn't already there
    pub fn set_if_missing(&mut self, name: &str, value: impl Into<String>) {
        if self.is_missing(name) {
            self.set(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Attrs {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut attrs = Attrs::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl Serialize for Attrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Converts React-style presentation attribute names (`strokeWidth`, `fillRule`, `className`)
/// to their SVG names.  Genuinely camel-cased SVG attributes (`viewBox`, `pathLength`) are left
/// alone.
pub(crate) fn normalise_name(name: &str) -> Cow<'_, str> {
    if name == "className" {
        return Cow::Borrowed("class");
    }
    let is_presentation = ["stroke", "fill", "clip"]
        .iter()
        .any(|prefix| name.starts_with(prefix));
    if !is_presentation || !name.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }

    let mut kebab = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    Cow::Owned(kebab)
}

///////////
// NODES //
///////////

/// A single shape descriptor: `(tag, attributes, children)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconNode {
    pub tag: Tag,
    pub attrs: Attrs,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Content>,
}

/// One child of an [`IconNode`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Node(IconNode),
    Text(String),
}

impl IconNode {
    /// Creates a node with no attributes or children
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn child(mut self, node: IconNode) -> Self {
        self.children.push(Content::Node(node));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    /// Iterates over the child nodes of this node, skipping text runs
    pub fn child_nodes(&self) -> impl Iterator<Item = &IconNode> {
        self.children.iter().filter_map(|c| match c {
            Content::Node(n) => Some(n),
            Content::Text(_) => None,
        })
    }

    /// Calls `f` on this node and every node below it, parents before children
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a IconNode)) {
        f(self);
        for c in self.child_nodes() {
            c.walk(f);
        }
    }
}
