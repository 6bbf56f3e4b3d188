//! Kept in its own test binary, since it installs the process-wide defaults

use glyphkit::{Color, Error, IconDefaults, IconProps, IconSet, Renderer};

#[test]
fn installed_defaults_are_used_by_plain_renders() {
    let icons = IconSet::builtin();
    let x = icons.get("x").unwrap();

    // Before installation, the icon's own fallback is used
    let before = x.render(&IconProps::new());
    assert_eq!(before.attrs.get("width"), Some("24"));

    let defaults = IconDefaults::from_json(
        r##"{"defaultSize": 36, "defaultColor": "#00ff00", "defaultStrokeWidth": 1}"##,
    )
    .unwrap();
    defaults.install().unwrap();
    assert!(matches!(
        IconDefaults::standard().install(),
        Err(Error::DefaultsAlreadyInstalled)
    ));

    let after = x.render(&IconProps::new());
    assert_eq!(after.attrs.get("width"), Some("36"));
    assert_eq!(after.config.color, Color::parse("#00ff00"));
    for shape in after.shapes() {
        assert_eq!(shape.attrs.get("stroke"), Some("#00ff00"));
        // 1 * (36 / 24)
        assert_eq!(shape.attrs.get("stroke-width"), Some("1.5"));
    }

    // A `Renderer` without explicit defaults reads the installed ones
    let renderer = Renderer::new();
    let small = icons
        .render("x", &IconProps::new().size(12.0), &renderer)
        .unwrap();
    assert_eq!(small.attrs.get("width"), Some("12"));
    assert_eq!(small.shapes()[0].attrs.get("stroke-width"), Some("0.5"));
}
