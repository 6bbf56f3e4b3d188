use std::fmt::{Display, Formatter};

use rgb::RGB8;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The keyword which makes an SVG element inherit the CSS `color` of its context
pub const CURRENT_COLOR: &str = "currentColor";

/// A color which an icon can be drawn in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Color {
    /// Inherit the surrounding text color
    #[default]
    CurrentColor,
    Rgb(RGB8),
    /// Any other CSS color expression (`red`, `rgb(1 2 3 / 50%)`, `var(--accent)`, ...)
    Named(String),
}

impl Color {
    /// Parses a color.  `currentColor` and `#rgb`/`#rrggbb` hex are understood; anything else is
    /// passed through as a [`Color::Named`] value.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s == CURRENT_COLOR {
            return Color::CurrentColor;
        }
        match s.strip_prefix('#').and_then(parse_hex) {
            Some(rgb) => Color::Rgb(rgb),
            None => Color::Named(s.to_owned()),
        }
    }

    /// Returns `true` for a [`Color::Named`] which is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            Color::Named(name) => name.trim().is_empty(),
            _ => false,
        }
    }
}

fn parse_hex(hex: &str) -> Option<RGB8> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        // `#abc` is shorthand for `#aabbcc`
        3 => {
            let mut rgb = hex.chars().filter_map(|c| c.to_digit(16)).map(|d| d as u8 * 17);
            Some(RGB8::new(rgb.next()?, rgb.next()?, rgb.next()?))
        }
        6 => Some(RGB8::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Color::CurrentColor => f.write_str(CURRENT_COLOR),
            Color::Rgb(c) => write!(f, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
            Color::Named(name) => f.write_str(name),
        }
    }
}

impl From<RGB8> for Color {
    fn from(c: RGB8) -> Self {
        Color::Rgb(c)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Color::parse(&s))
    }
}
