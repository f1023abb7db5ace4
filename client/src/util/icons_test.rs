use super::*;

use catalog::Catalog;

#[test]
fn known_icons_map_to_glyphs() {
    assert_eq!(icon_glyph("palette"), "🎨");
    assert_eq!(icon_glyph("key"), "🔑");
}

#[test]
fn unknown_icon_uses_default_glyph() {
    assert_eq!(icon_glyph("no-such-icon"), DEFAULT_GLYPH);
    assert_eq!(icon_glyph(""), DEFAULT_GLYPH);
}

#[test]
fn every_builtin_icon_has_a_glyph() {
    let catalog = Catalog::builtin();
    let icons = catalog
        .tools()
        .iter()
        .map(|t| t.icon)
        .chain(catalog.categories().iter().map(|c| c.icon));
    for icon in icons {
        assert_ne!(icon_glyph(icon), DEFAULT_GLYPH, "icon {icon} has no glyph");
    }
}

#[test]
fn color_class_sanitizes_tokens() {
    assert_eq!(color_class("Blue"), "accent--blue");
    assert_eq!(color_class("sky-500"), "accent--sky-500");
    assert_eq!(color_class("red;}"), "accent--red");
    assert_eq!(color_class(""), "accent--default");
}
