//! Terminal stand-ins for icon names and color tokens stored with ledgers
//! and categories.

use std::collections::HashMap;

use colored::Color;
use once_cell::sync::Lazy;

pub const FALLBACK_ICON: &str = "Cat";

static ICON_GLYPHS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Utensils", "🍴"),
        ("Bus", "🚌"),
        ("ShoppingBag", "🛍"),
        ("Home", "🏠"),
        ("Gamepad2", "🎮"),
        ("HeartPulse", "💓"),
        ("GraduationCap", "🎓"),
        ("Banknote", "💵"),
        ("Briefcase", "💼"),
        ("Gift", "🎁"),
        ("Coffee", "☕"),
        ("Cat", "🐱"),
        ("Wallet", "👛"),
        ("PiggyBank", "🐷"),
        ("CreditCard", "💳"),
        ("HelpCircle", "❓"),
    ])
});

/// Glyph for an icon name. Unknown names render as the cat.
pub fn glyph(icon: &str) -> &'static str {
    ICON_GLYPHS
        .get(icon)
        .or_else(|| ICON_GLYPHS.get(FALLBACK_ICON))
        .copied()
        .unwrap_or("*")
}

/// Maps a `bg-<family>-<shade>` token onto the closest terminal color.
pub fn token_color(token: &str) -> Color {
    let family = token
        .trim()
        .trim_start_matches("bg-")
        .split('-')
        .next()
        .unwrap_or_default();
    match family {
        "red" => Color::Red,
        "rose" => Color::BrightRed,
        "orange" | "amber" => Color::Yellow,
        "yellow" => Color::BrightYellow,
        "lime" | "emerald" | "green" => Color::Green,
        "teal" | "cyan" => Color::Cyan,
        "sky" => Color::BrightCyan,
        "blue" | "indigo" => Color::Blue,
        "purple" | "violet" => Color::Magenta,
        "pink" => Color::BrightMagenta,
        "gray" | "slate" => Color::BrightBlack,
        _ => Color::White,
    }
}

/// Parses `#rrggbb`; anything else yields `None`.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::TrueColor {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icon_falls_back_to_cat() {
        assert_eq!(glyph("Rocket"), glyph("Cat"));
        assert_eq!(glyph("Bus"), "🚌");
    }

    #[test]
    fn color_tokens_map_by_family() {
        assert_eq!(token_color("bg-rose-400"), Color::BrightRed);
        assert_eq!(token_color("bg-emerald-500"), Color::Green);
        assert_eq!(token_color("mystery"), Color::White);
    }

    #[test]
    fn palette_hex_parses() {
        assert_eq!(
            hex_color("#fb7185"),
            Some(Color::TrueColor {
                r: 0xfb,
                g: 0x71,
                b: 0x85
            })
        );
        assert_eq!(hex_color("fb7185"), None);
        assert_eq!(hex_color("#zz0000"), None);
    }
}
