//! Glyphs for the catalog's symbolic icon references.
//!
//! The catalog only names icons; this is where the presentation layer
//! decides what they look like.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// Fallback glyph for icon names without a mapping.
pub const DEFAULT_GLYPH: &str = "🧰";

/// Map a symbolic icon reference to a display glyph.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "type" | "case" | "align-left" => "🔤",
        "hash" => "#️⃣",
        "columns" => "🏛",
        "list" => "📋",
        "link" => "🔗",
        "code" | "file-code" | "braces" => "🧩",
        "file-text" => "📝",
        "wand" => "🪄",
        "database" | "table" => "🗃",
        "search" => "🔍",
        "clock" => "⏱",
        "binary" => "🔢",
        "key" => "🔑",
        "repeat" => "🔁",
        "ruler" => "📏",
        "thermometer" => "🌡",
        "sparkles" => "✨",
        "fingerprint" => "🆔",
        "lock" | "shield" => "🔒",
        "qr-code" | "barcode" => "🔳",
        "users" => "👥",
        "calculator" | "percent" => "🧮",
        "activity" => "💓",
        "banknote" | "receipt" => "💵",
        "cake" => "🎂",
        "palette" | "droplet" | "layers" => "🎨",
        "eye" => "👁",
        "image" | "file-image" | "maximize" | "minimize" => "🖼",
        "star" => "⭐",
        _ => DEFAULT_GLYPH,
    }
}

/// CSS modifier class for a category colour token.
pub fn color_class(color: &str) -> String {
    let token: String = color
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if token.is_empty() {
        return "accent--default".to_owned();
    }
    format!("accent--{}", token.to_ascii_lowercase())
}
