// src/colors.rs

use plotters::style::RGBColor;

use crate::error::{RenderError, RenderResult};

/// Named colours accepted in chart definitions (matplotlib names and shorthands).
const NAMED_COLORS: &[(&str, RGBColor)] = &[
    ("b", RGBColor(0, 0, 255)),
    ("blue", RGBColor(0, 0, 255)),
    ("g", RGBColor(0, 128, 0)),
    ("green", RGBColor(0, 128, 0)),
    ("r", RGBColor(255, 0, 0)),
    ("red", RGBColor(255, 0, 0)),
    ("c", RGBColor(0, 191, 191)),
    ("m", RGBColor(191, 0, 191)),
    ("y", RGBColor(191, 191, 0)),
    ("k", RGBColor(0, 0, 0)),
    ("black", RGBColor(0, 0, 0)),
    ("w", RGBColor(255, 255, 255)),
    ("white", RGBColor(255, 255, 255)),
    ("aqua", RGBColor(0, 255, 255)),
    ("cyan", RGBColor(0, 255, 255)),
    ("crimson", RGBColor(220, 20, 60)),
    ("darkgray", RGBColor(169, 169, 169)),
    ("darkgrey", RGBColor(169, 169, 169)),
    ("darkorange", RGBColor(255, 140, 0)),
    ("gold", RGBColor(255, 215, 0)),
    ("gray", RGBColor(128, 128, 128)),
    ("grey", RGBColor(128, 128, 128)),
    ("lime", RGBColor(0, 255, 0)),
    ("magenta", RGBColor(255, 0, 255)),
    ("navy", RGBColor(0, 0, 128)),
    ("orange", RGBColor(255, 165, 0)),
    ("purple", RGBColor(128, 0, 128)),
    ("teal", RGBColor(0, 128, 128)),
    ("violet", RGBColor(238, 130, 238)),
];

/// Resolves a colour name or `#rrggbb` hex string.
pub fn parse_color(spec: &str) -> RenderResult<RGBColor> {
    let trimmed = spec.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| unknown_color(spec));
    }
    let lowered = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, color)| *color)
        .ok_or_else(|| unknown_color(spec))
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

fn unknown_color(spec: &str) -> RenderError {
    RenderError::Config(format!("unknown colour '{spec}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matplotlib_shorthands() {
        assert_eq!(parse_color("b").unwrap(), RGBColor(0, 0, 255));
        assert_eq!(parse_color("g").unwrap(), RGBColor(0, 128, 0));
        assert_eq!(parse_color("k").unwrap(), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_named_colors_case_insensitive() {
        assert_eq!(parse_color("DarkOrange").unwrap(), RGBColor(255, 140, 0));
        assert_eq!(parse_color(" crimson ").unwrap(), RGBColor(220, 20, 60));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#1f77b4").unwrap(), RGBColor(31, 119, 180));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#zzzzzz").is_err());
    }

    #[test]
    fn test_unknown_color() {
        let err = parse_color("chartreuse-ish").unwrap_err();
        assert!(err.to_string().contains("chartreuse-ish"));
    }
}
