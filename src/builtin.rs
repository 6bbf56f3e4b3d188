//! A small set of built-in icons, declared as data.  All geometry is in the `24x24` frame.

use crate::{
    node::{IconNode, Tag},
    IconDef,
};

/// Every built-in icon, in no particular order
pub fn all() -> Vec<IconDef> {
    vec![
        IconDef::new("x", vec![path("M18 6 6 18"), path("m6 6 12 12")]),
        IconDef::new("plus", vec![path("M5 12h14"), path("M12 5v14")]),
        IconDef::new("check", vec![polyline("20 6 9 17 4 12")]),
        IconDef::new("chevron-down", vec![path("m6 9 6 6 6-6")]),
        IconDef::new("circle", vec![circle(12, 12, 10)]),
        IconDef::new("square", vec![rect(3, 3, 18, 18).attr("rx", "2")]),
        IconDef::new("slash", vec![line(4, 20, 20, 4)]),
        IconDef::new(
            "eye-outline",
            vec![
                IconNode::new(Tag::Ellipse)
                    .attr("cx", "12")
                    .attr("cy", "12")
                    .attr("rx", "10")
                    .attr("ry", "6"),
                circle(12, 12, 3),
            ],
        ),
        IconDef::new(
            "layers",
            vec![IconNode::new(Tag::Group)
                .child(polygon("12 2 2 7 12 12 22 7 12 2"))
                .child(polyline("2 17 12 22 22 17"))
                .child(polyline("2 12 12 17 22 12"))],
        ),
        IconDef::new(
            "record",
            vec![
                circle(12, 12, 10),
                circle(12, 12, 4).attr("fill", "currentColor"),
            ],
        ),
        // Drawn for small UI chrome, so the icon itself defaults to a small size and thin stroke
        IconDef::new("minus-small", vec![path("M8 12h8")]).with_fallback(16.0, 1.5),
        // Brand colored, so deliberately not recolorable
        IconDef::new(
            "flag-red",
            vec![
                path("M4 22V4").attr("stroke", "#1f2937"),
                path("M4 4h14l-3 5 3 5H4")
                    .attr("fill", "#e11d48")
                    .attr("stroke", "none"),
            ],
        ),
    ]
}

/* SHAPE HELPERS */

fn path(d: &str) -> IconNode {
    IconNode::new(Tag::Path).attr("d", d)
}

fn circle(cx: u8, cy: u8, r: u8) -> IconNode {
    IconNode::new(Tag::Circle)
        .attr("cx", cx.to_string())
        .attr("cy", cy.to_string())
        .attr("r", r.to_string())
}

fn rect(x: u8, y: u8, width: u8, height: u8) -> IconNode {
    IconNode::new(Tag::Rect)
        .attr("x", x.to_string())
        .attr("y", y.to_string())
        .attr("width", width.to_string())
        .attr("height", height.to_string())
}

fn line(x1: u8, y1: u8, x2: u8, y2: u8) -> IconNode {
    IconNode::new(Tag::Line)
        .attr("x1", x1.to_string())
        .attr("y1", y1.to_string())
        .attr("x2", x2.to_string())
        .attr("y2", y2.to_string())
}

fn polyline(points: &str) -> IconNode {
    IconNode::new(Tag::Polyline).attr("points", points)
}

fn polygon(points: &str) -> IconNode {
    IconNode::new(Tag::Polygon).attr("points", points)
}
