//! A table of icons, looked up by name.  Icons come from the built-in set or from JSON data in the
//! same `[tag, attrs, children?]` node shape that icon exporters commonly emit.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    builtin,
    icon::Fallback,
    node::{Attrs, Content, IconNode, Tag},
    Error, IconDef, IconProps, RenderedIcon, Renderer, Result,
};

/// A set of [`IconDef`]s, keyed (and iterated in order of) their names
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: BTreeMap<String, IconDef>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The icons which ship with glyphkit
    pub fn builtin() -> Self {
        let mut set = Self::new();
        for icon in builtin::all() {
            set.insert(icon);
        }
        set
    }

    /// Loads icons from a JSON object mapping names to icons, for example:
    ///
    /// ```json
    /// { "minus": { "size": 16, "nodes": [["path", { "d": "M5 12h14" }]] } }
    /// ```
    ///
    /// `size` and `strokeWidth` are optional and set the icon's [`Fallback`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw_icons: BTreeMap<String, RawIcon> = serde_json::from_str(json)?;
        let mut set = Self::new();
        for (name, raw) in raw_icons {
            set.insert(raw.into_icon(name)?);
        }
        log::debug!("Loaded {} icons from JSON", set.len());
        let fixed = set.non_recolorable();
        if !fixed.is_empty() {
            log::debug!("Icons with hard-coded colors: {}", fixed.iter().join(", "));
        }
        Ok(set)
    }

    /// Adds an icon, returning the icon it replaced (if any)
    pub fn insert(&mut self, icon: IconDef) -> Option<IconDef> {
        let replaced = self.icons.insert(icon.name.clone(), icon);
        if let Some(old) = &replaced {
            log::warn!("Icon `{}` was defined twice; keeping the last one", old.name);
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&IconDef> {
        self.icons.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconDef> {
        self.icons.values()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Renders the icon called `name`
    pub fn render(
        &self,
        name: &str,
        props: &IconProps,
        renderer: &Renderer,
    ) -> Result<RenderedIcon> {
        let icon = self
            .get(name)
            .ok_or_else(|| Error::UnknownIcon(name.to_owned()))?;
        Ok(renderer.render(icon, props))
    }

    /// Names of the icons which hard-code a color (see [`IconDef::is_recolorable`])
    pub fn non_recolorable(&self) -> Vec<&str> {
        self.iter()
            .filter(|icon| !icon.is_recolorable())
            .map(|icon| icon.name.as_str())
            .collect_vec()
    }
}

///////////////
// JSON DATA //
///////////////

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIcon {
    size: Option<f32>,
    stroke_width: Option<f32>,
    nodes: Vec<RawNode>,
}

/// `[tag, attrs]` or `[tag, attrs, children]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Parent(String, Map<String, Value>, Vec<RawContent>),
    Leaf(String, Map<String, Value>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawContent {
    Text(String),
    Node(RawNode),
}

impl RawIcon {
    fn into_icon(self, name: String) -> Result<IconDef> {
        let default = Fallback::default();
        let fallback = Fallback {
            size: self.size.unwrap_or(default.size),
            stroke_width: self.stroke_width.unwrap_or(default.stroke_width),
        };
        let nodes = self
            .nodes
            .into_iter()
            .map(RawNode::into_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(IconDef {
            name,
            nodes,
            fallback,
        })
    }
}

impl RawNode {
    fn into_node(self) -> Result<IconNode> {
        let (tag_name, raw_attrs, raw_children) = match self {
            RawNode::Parent(tag, attrs, children) => (tag, attrs, children),
            RawNode::Leaf(tag, attrs) => (tag, attrs, Vec::new()),
        };
        let tag = Tag::from_name(&tag_name).ok_or(Error::UnknownTag(tag_name))?;

        let mut attrs = Attrs::new();
        for (name, value) in raw_attrs {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                _ => return Err(Error::InvalidAttribute(name)),
            };
            attrs.set(&name, value);
        }

        let children = raw_children
            .into_iter()
            .map(|c| match c {
                RawContent::Text(text) => Ok(Content::Text(text)),
                RawContent::Node(node) => node.into_node().map(Content::Node),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(IconNode {
            tag,
            attrs,
            children,
        })
    }
}
