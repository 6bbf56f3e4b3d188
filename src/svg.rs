//! Code to convert a [`RenderedIcon`] to SVG markup

use itertools::Itertools;
use simple_xml_builder::XMLElement;

use crate::{
    node::{Attrs, Content, IconNode},
    render::RenderedIcon,
};

impl RenderedIcon {
    /// Generate the root `<svg>` element for this icon
    pub fn svg_element(&self) -> XMLElement {
        let mut root = XMLElement::new("svg");
        add_attrs(&self.attrs, &mut root);
        for node in &self.nodes {
            root.add_child(gen_svg_elem(node));
        }
        root
    }

    /// Generate an SVG string for this icon
    pub fn svg_string(&self) -> String {
        self.svg_element().to_string()
    }
}

/// Creates an [`XMLElement`] for a given (already lowered) [`IconNode`]
fn gen_svg_elem(node: &IconNode) -> XMLElement {
    let mut elem = XMLElement::new(node.tag.name());
    add_attrs(&node.attrs, &mut elem);

    // `XMLElement` can hold either child elements or text, never both.  Text is only written for
    // nodes which contain nothing else.
    let text = node
        .children
        .iter()
        .filter_map(|c| match c {
            Content::Text(t) => Some(t.as_str()),
            Content::Node(_) => None,
        })
        .join("");
    if node.child_nodes().next().is_none() {
        if !text.is_empty() {
            elem.add_text(text.as_str());
        }
        return elem;
    }
    if !text.is_empty() {
        log::warn!("Dropping text {:?} from a <{}> with child elements", text, node.tag);
    }
    for child in node.child_nodes() {
        elem.add_child(gen_svg_elem(child));
    }
    elem
}

fn add_attrs(attrs: &Attrs, elem: &mut XMLElement) {
    for (name, value) in attrs.iter() {
        elem.add_attribute(name, value);
    }
}
