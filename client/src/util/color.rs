//! Color parsing and HEX / RGB / HSL conversion.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;
        if d.abs() < f64::EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if (max - r).abs() < f64::EPSILON {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl { h: h * 60.0, s, l }
    }
}

impl Hsl {
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.h.round() % 360.0,
            (self.s * 100.0).round(),
            (self.l * 100.0).round()
        )
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        if s == 0.0 {
            let v = channel(l);
            return Rgb { r: v, g: v, b: v };
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Rgb {
            r: channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            g: channel(hue_to_rgb(p, q, h)),
            b: channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        }
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<Rgb> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    fn pair(s: &str) -> Option<u8> {
        u8::from_str_radix(s, 16).ok()
    }
    match hex.len() {
        3 => Some(Rgb {
            r: pair(&hex[0..1].repeat(2))?,
            g: pair(&hex[1..2].repeat(2))?,
            b: pair(&hex[2..3].repeat(2))?,
        }),
        6 => Some(Rgb { r: pair(&hex[0..2])?, g: pair(&hex[2..4])?, b: pair(&hex[4..6])? }),
        _ => None,
    }
}

/// Parse `rgb(r, g, b)` with integer channels in `0..=255`.
pub fn parse_rgb_fn(raw: &str) -> Option<Rgb> {
    let args = function_args(raw, "rgb")?;
    let [r, g, b] = args[..] else {
        return None;
    };
    Some(Rgb { r: r.parse().ok()?, g: g.parse().ok()?, b: b.parse().ok()? })
}

/// Parse `hsl(h, s%, l%)`.
pub fn parse_hsl_fn(raw: &str) -> Option<Hsl> {
    let args = function_args(raw, "hsl")?;
    let [h, s, l] = args[..] else {
        return None;
    };
    let percent = |v: &str| -> Option<f64> {
        let n: f64 = v.strip_suffix('%').unwrap_or(v).trim().parse().ok()?;
        (0.0..=100.0).contains(&n).then_some(n / 100.0)
    };
    Some(Hsl { h: h.parse().ok()?, s: percent(s)?, l: percent(l)? })
}

/// Parse any supported notation: hex, `rgb()`, or `hsl()`.
pub fn parse_color(raw: &str) -> Option<Rgb> {
    parse_hex_rgb(raw)
        .or_else(|| parse_rgb_fn(raw))
        .or_else(|| parse_hsl_fn(raw).map(Hsl::to_rgb))
}

fn function_args<'a>(raw: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let trimmed = raw.trim();
    let inner = trimmed
        .get(..name.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(name))
        .and_then(|_| trimmed[name.len()..].trim_start().strip_prefix('('))?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}
