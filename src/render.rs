//! The one rendering routine shared by every icon.  Rendering 'lowers' an [`IconDef`] into a
//! [`RenderedIcon`]: the effective size, color and stroke width are resolved once, then every
//! shape gets its missing presentation attributes filled in from them.  Afterwards the
//! [`IconProps`] and [`IconDefaults`] are no longer needed.

use itertools::Itertools;
use serde::Serialize;

use crate::{
    color::CURRENT_COLOR,
    icon::{Fallback, CANONICAL_SIZE},
    node::{Attrs, Content, IconNode, Tag},
    AttrPolicy, Color, IconDef, IconDefaults, IconProps, PresetColors,
};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// Every icon is drawn in the same `24x24` frame, whatever size it's rendered at
pub const VIEW_BOX: &str = "0 0 24 24";

/// The values which actually get used for one render, after falling back through
/// caller → shared defaults → icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub size: f32,
    pub color: Color,
    pub stroke_width: f32,
    pub absolute_stroke_width: bool,
}

impl ResolvedConfig {
    pub fn resolve(props: &IconProps, defaults: &IconDefaults, fallback: &Fallback) -> Self {
        Self {
            size: props.size.or(defaults.size).unwrap_or(fallback.size),
            // Blank colors count as unset
            color: props
                .color
                .as_ref()
                .filter(|c| !c.is_blank())
                .or(defaults.color.as_ref().filter(|c| !c.is_blank()))
                .cloned()
                .unwrap_or(Color::CurrentColor),
            stroke_width: props
                .stroke_width
                .or(defaults.stroke_width)
                .unwrap_or(fallback.stroke_width),
            absolute_stroke_width: props
                .absolute_stroke_width
                .or(defaults.absolute_stroke_width)
                .unwrap_or(false),
        }
    }

    /// The stroke width given to shapes which don't set their own.  In absolute mode this is just
    /// `stroke_width`, otherwise it grows in proportion to `size`.
    pub fn shape_stroke_width(&self) -> f32 {
        if self.absolute_stroke_width {
            self.stroke_width
        } else {
            self.stroke_width * (self.size / CANONICAL_SIZE)
        }
    }
}

/// A fully resolved icon: the attributes of the root `<svg>` element plus the shape tree, in which
/// every shape has its presentation attributes set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedIcon {
    pub name: String,
    pub config: ResolvedConfig,
    pub attrs: Attrs,
    pub nodes: Vec<IconNode>,
}

impl RenderedIcon {
    /// Collects every shape (i.e. non-container) node in this icon, at any depth
    pub fn shapes(&self) -> Vec<&IconNode> {
        let mut shapes = Vec::new();
        for node in &self.nodes {
            node.walk(&mut |n| {
                if n.tag.is_shape() {
                    shapes.push(n);
                }
            });
        }
        shapes
    }
}

/// Renders [`IconDef`]s.  A `Renderer` is cheap to create and holds no state between renders.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// `None` means 'read the process-wide defaults at render time'
    defaults: Option<IconDefaults>,
    policy: AttrPolicy,
}

impl Renderer {
    /// Creates a `Renderer` which uses the process-wide [`IconDefaults::global`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Renderer` which uses `defaults` instead of the process-wide defaults
    pub fn with_defaults(defaults: IconDefaults) -> Self {
        Self {
            defaults: Some(defaults),
            policy: AttrPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AttrPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn defaults(&self) -> &IconDefaults {
        match &self.defaults {
            Some(defaults) => defaults,
            None => IconDefaults::global(),
        }
    }

    pub fn policy(&self) -> &AttrPolicy {
        &self.policy
    }

    pub fn render(&self, icon: &IconDef, props: &IconProps) -> RenderedIcon {
        let config = ResolvedConfig::resolve(props, self.defaults(), &icon.fallback);
        log::trace!("Rendering `{}` with {:?}", icon.name, config);

        let lowering = Lowering {
            policy: &self.policy,
            color: config.color.to_string(),
            stroke_width: config.shape_stroke_width().to_string(),
        };
        let nodes = icon
            .nodes
            .iter()
            .map(|n| lowering.lower_node(n))
            .collect_vec();

        RenderedIcon {
            name: icon.name.clone(),
            attrs: root_attrs(&config, props),
            config,
            nodes,
        }
    }
}

/// Generates the attributes of the root `<svg>` element.  The caller's extra attributes come last,
/// so they override anything generated here.
fn root_attrs(config: &ResolvedConfig, props: &IconProps) -> Attrs {
    let size = config.size.to_string();
    let mut attrs = Attrs::new()
        .with("xmlns", SVG_NAMESPACE)
        .with("width", &size)
        .with("height", &size)
        .with("viewBox", VIEW_BOX);
    if let Some(class) = &props.class {
        attrs.set("class", class.as_str());
    }
    for (name, value) in props.extra_attrs.iter() {
        attrs.set(name, value);
    }
    attrs
}

/// The pre-stringified values which get written onto shapes during one render
struct Lowering<'p> {
    policy: &'p AttrPolicy,
    color: String,
    stroke_width: String,
}

impl Lowering<'_> {
    /// Lowers a node and (recursively) its children.  Text runs are copied as they are.
    fn lower_node(&self, node: &IconNode) -> IconNode {
        let mut attrs = node.attrs.clone();
        if node.tag.is_shape() {
            self.fill_presentation_attrs(node.tag, &mut attrs);
        }
        let children = node
            .children
            .iter()
            .map(|c| match c {
                Content::Node(child) => Content::Node(self.lower_node(child)),
                Content::Text(text) => Content::Text(text.to_owned()),
            })
            .collect_vec();
        IconNode {
            tag: node.tag,
            attrs,
            children,
        }
    }

    fn fill_presentation_attrs(&self, tag: Tag, attrs: &mut Attrs) {
        self.apply_preset_colors(attrs);

        attrs.set_if_missing("stroke", self.color.as_str());
        attrs.set_if_missing("fill", "none");
        attrs.set_if_missing("stroke-width", self.stroke_width.as_str());
        if self.policy.round_line_caps.applies_to(tag) {
            attrs.set_if_missing("stroke-linecap", "round");
            attrs.set_if_missing("stroke-linejoin", "round");
        }
    }

    /// Deals with `stroke`/`fill` values which the icon's author already set
    fn apply_preset_colors(&self, attrs: &mut Attrs) {
        for name in ["stroke", "fill"] {
            let new_value = match (self.policy.preset_colors, attrs.get(name)) {
                (_, None) | (_, Some("")) | (PresetColors::Keep, _) => None,
                (PresetColors::Substitute, Some(v)) if v.contains(CURRENT_COLOR) => {
                    Some(v.replace(CURRENT_COLOR, &self.color))
                }
                (PresetColors::Substitute, Some(_)) => None,
                (PresetColors::Overwrite, Some("none")) => None,
                (PresetColors::Overwrite, Some(_)) => Some(self.color.clone()),
            };
            if let Some(v) = new_value {
                attrs.set(name, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::RoundLineCaps;

    fn cross() -> IconDef {
        IconDef::new(
            "x",
            vec![
                IconNode::new(Tag::Path).attr("d", "M18 6 6 18"),
                IconNode::new(Tag::Path).attr("d", "m6 6 12 12"),
            ],
        )
    }

    fn renderer() -> Renderer {
        Renderer::with_defaults(IconDefaults::standard())
    }

    fn attrs_of(node: &IconNode) -> Vec<(&str, &str)> {
        node.attrs.iter().collect()
    }

    #[test]
    fn plain_render_uses_defaults() {
        let icon = renderer().render(&cross(), &IconProps::new());
        assert_eq!(icon.attrs.get("width"), Some("24"));
        assert_eq!(icon.attrs.get("height"), Some("24"));
        assert_eq!(
            attrs_of(&icon.nodes[0]),
            vec![
                ("d", "M18 6 6 18"),
                ("stroke", "currentColor"),
                ("fill", "none"),
                ("stroke-width", "2"),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ]
        );
    }

    #[test]
    fn stroke_width_scales_with_size() {
        let icon = renderer().render(&cross(), &IconProps::new().size(48.0));
        assert_eq!(icon.attrs.get("width"), Some("48"));
        assert_eq!(icon.config.shape_stroke_width(), 4.0);
        for shape in icon.shapes() {
            assert_eq!(shape.attrs.get("stroke-width"), Some("4"));
        }
    }

    #[test]
    fn absolute_stroke_width_ignores_size() {
        let props = IconProps::new()
            .size(96.0)
            .stroke_width(3.0)
            .absolute_stroke_width(true);
        let icon = renderer().render(&cross(), &props);
        assert_eq!(icon.attrs.get("width"), Some("96"));
        for shape in icon.shapes() {
            assert_eq!(shape.attrs.get("stroke-width"), Some("3"));
        }
    }

    #[test]
    fn resolution_order() {
        let fallback = Fallback {
            size: 16.0,
            stroke_width: 1.5,
        };
        let defaults = IconDefaults {
            size: Some(32.0),
            ..IconDefaults::default()
        };

        // Nothing set anywhere: icon fallback
        let c = ResolvedConfig::resolve(&IconProps::new(), &IconDefaults::default(), &fallback);
        assert_eq!(
            c,
            ResolvedConfig {
                size: 16.0,
                color: Color::CurrentColor,
                stroke_width: 1.5,
                absolute_stroke_width: false,
            }
        );
        // Shared default beats fallback
        let c = ResolvedConfig::resolve(&IconProps::new(), &defaults, &fallback);
        assert_eq!(c.size, 32.0);
        assert_eq!(c.stroke_width, 1.5);
        // Caller beats shared default
        let c = ResolvedConfig::resolve(&IconProps::new().size(20.0), &defaults, &fallback);
        assert_eq!(c.size, 20.0);
    }

    #[test]
    fn author_attributes_are_kept() {
        let icon = IconDef::new(
            "dot",
            vec![IconNode::new(Tag::Circle)
                .attr("cx", "12")
                .attr("cy", "12")
                .attr("r", "1")
                .attr("fill", "currentColor")
                .attr("strokeWidth", "1")],
        );
        let rendered = renderer().render(&icon, &IconProps::new().color("#ff0000"));
        let dot = &rendered.nodes[0];
        assert_eq!(dot.attrs.get("fill"), Some("#ff0000"));
        assert_eq!(dot.attrs.get("stroke"), Some("#ff0000"));
        assert_eq!(dot.attrs.get("stroke-width"), Some("1"));
    }

    #[test]
    fn preset_color_policies() {
        let icon = IconDef::new(
            "swatch",
            vec![IconNode::new(Tag::Rect)
                .attr("width", "10")
                .attr("stroke", "currentColor")
                .attr("fill", "white")],
        );
        let props = IconProps::new().color("blue");
        let render_with = |preset_colors| {
            let policy = AttrPolicy {
                preset_colors,
                ..AttrPolicy::default()
            };
            let rendered = renderer().with_policy(policy).render(&icon, &props);
            let attrs = &rendered.nodes[0].attrs;
            (
                attrs.get("stroke").unwrap().to_owned(),
                attrs.get("fill").unwrap().to_owned(),
            )
        };

        assert_eq!(
            render_with(PresetColors::Keep),
            ("currentColor".to_owned(), "white".to_owned())
        );
        assert_eq!(
            render_with(PresetColors::Substitute),
            ("blue".to_owned(), "white".to_owned())
        );
        assert_eq!(
            render_with(PresetColors::Overwrite),
            ("blue".to_owned(), "blue".to_owned())
        );
    }

    #[test]
    fn substitute_replaces_current_color_inside_longer_values() {
        let icon = IconDef::new(
            "gradient",
            vec![IconNode::new(Tag::Path)
                .attr("d", "M0 0h24")
                .attr("fill", "url(#g) currentColor")
                .attr("stroke", "currentColor currentColor")],
        );
        let rendered = renderer().render(&icon, &IconProps::new().color("#00ff00"));
        let attrs = &rendered.nodes[0].attrs;
        assert_eq!(attrs.get("fill"), Some("url(#g) #00ff00"));
        assert_eq!(attrs.get("stroke"), Some("#00ff00 #00ff00"));
    }

    #[test]
    fn overwrite_leaves_none_alone() {
        let icon = IconDef::new(
            "filled",
            vec![IconNode::new(Tag::Path)
                .attr("d", "M0 0h1")
                .attr("stroke", "none")
                .attr("fill", "black")],
        );
        let policy = AttrPolicy {
            preset_colors: PresetColors::Overwrite,
            ..AttrPolicy::default()
        };
        let rendered = renderer()
            .with_policy(policy)
            .render(&icon, &IconProps::new().color("red"));
        assert_eq!(rendered.nodes[0].attrs.get("stroke"), Some("none"));
        assert_eq!(rendered.nodes[0].attrs.get("fill"), Some("red"));
    }

    #[test]
    fn round_caps_follow_policy() {
        let icon = IconDef::new(
            "mixed",
            vec![
                IconNode::new(Tag::Line).attr("x1", "0"),
                IconNode::new(Tag::Circle).attr("r", "2"),
                IconNode::new(Tag::Path)
                    .attr("d", "M0 0")
                    .attr("stroke-linecap", "square"),
            ],
        );
        let policy = AttrPolicy {
            round_line_caps: RoundLineCaps::Only(vec![Tag::Line, Tag::Path]),
            ..AttrPolicy::default()
        };
        let rendered = renderer().with_policy(policy).render(&icon, &IconProps::new());
        let caps = rendered
            .nodes
            .iter()
            .map(|n| n.attrs.get("stroke-linecap"))
            .collect_vec();
        assert_eq!(caps, vec![Some("round"), None, Some("square")]);

        let rendered = renderer()
            .with_policy(AttrPolicy::minimal())
            .render(&icon, &IconProps::new());
        assert!(rendered.nodes[0].attrs.get("stroke-linejoin").is_none());
    }

    #[test]
    fn groups_are_recursed_but_not_styled() {
        let icon = IconDef::new(
            "grouped",
            vec![IconNode::new(Tag::Group)
                .attr("opacity", "0.5")
                .child(IconNode::new(Tag::Path).attr("d", "M1 1"))
                .text("caption")],
        );
        let rendered = renderer().render(&icon, &IconProps::new().size(12.0));
        let group = &rendered.nodes[0];
        assert_eq!(attrs_of(group), vec![("opacity", "0.5")]);
        assert_eq!(group.children[1], Content::Text("caption".to_owned()));
        let path = group.child_nodes().next().unwrap();
        assert_eq!(path.attrs.get("stroke-width"), Some("1"));
        assert_eq!(path.attrs.get("fill"), Some("none"));
    }

    #[test]
    fn container_attributes() {
        let props = IconProps::new()
            .class("icon large")
            .attr("aria-hidden", "true")
            .attr("width", "100%");
        let icon = renderer().render(&cross(), &props);
        assert_eq!(
            icon.attrs.iter().collect_vec(),
            vec![
                ("xmlns", SVG_NAMESPACE),
                ("width", "100%"),
                ("height", "24"),
                ("viewBox", VIEW_BOX),
                ("class", "icon large"),
                ("aria-hidden", "true"),
            ]
        );
    }

    #[test]
    fn renders_are_repeatable() {
        let r = renderer();
        let props = IconProps::new().size(30.0).color("#123456");
        assert_eq!(r.render(&cross(), &props), r.render(&cross(), &props));
    }

    #[test]
    fn renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
        assert_send_sync::<IconDef>();
    }
}
