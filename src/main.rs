use glyphkit::{IconDefaults, IconProps, IconSet};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    IconDefaults::standard().install()?;

    // Write every built-in icon to its own SVG file
    let icons = IconSet::builtin();
    for icon in icons.iter() {
        let svg = icon.render(&IconProps::new()).svg_string();
        let file_name = format!("{}.svg", icon.name);
        std::fs::write(&file_name, svg)?;
        log::info!("Wrote {}", file_name);
    }
    Ok(())
}
