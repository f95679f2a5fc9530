//! Theme-aware colors for every decorative element.

use crate::error::FxError;
use crate::theme::Theme;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string accepted by both style properties and canvas
    /// fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Named hues used by particles, shapes and code snippets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hue {
    #[default]
    Accent,
    Purple,
    Pink,
    Blue,
    Green,
}

impl Hue {
    pub fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        let dark = theme.is_dark();
        match self {
            Hue::Accent if dark => (99, 102, 241),
            Hue::Accent => (79, 70, 229),
            Hue::Purple if dark => (168, 85, 247),
            Hue::Purple => (147, 51, 234),
            Hue::Pink if dark => (236, 72, 153),
            Hue::Pink => (219, 39, 119),
            Hue::Blue if dark => (59, 130, 246),
            Hue::Blue => (37, 99, 235),
            Hue::Green if dark => (34, 197, 94),
            Hue::Green => (22, 163, 74),
        }
    }

    pub fn with_alpha(self, theme: Theme, a: f32) -> Rgba {
        let (r, g, b) = self.rgb(theme);
        Rgba::new(r, g, b, a)
    }

    /// Floating particle fill. Light backgrounds need a stronger tint.
    pub fn particle(self, theme: Theme) -> Rgba {
        self.with_alpha(theme, if theme.is_dark() { 0.2 } else { 0.3 })
    }

    pub fn shape(self, theme: Theme) -> Rgba {
        self.with_alpha(theme, if theme.is_dark() { 0.1 } else { 0.15 })
    }

    pub fn code(self, theme: Theme) -> Rgba {
        self.with_alpha(theme, if theme.is_dark() { 0.3 } else { 0.4 })
    }

    /// Background grid lines, barely visible.
    pub fn grid(self, theme: Theme) -> Rgba {
        self.with_alpha(theme, if theme.is_dark() { 0.03 } else { 0.05 })
    }

    pub fn orb(self, theme: Theme) -> Rgba {
        self.with_alpha(theme, 0.1)
    }
}

impl FromStr for Hue {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accent" => Ok(Hue::Accent),
            "purple" => Ok(Hue::Purple),
            "pink" => Ok(Hue::Pink),
            "blue" => Ok(Hue::Blue),
            "green" => Ok(Hue::Green),
            _ => Err(FxError::invalid("color", s)),
        }
    }
}

/// Canvas colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub network_node: Rgba,
    pub network_line: Rgba,
    pub rain_glyph: Rgba,
    /// Translucent wash drawn over the rain each tick to fade old glyphs.
    pub rain_fade: Rgba,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                network_node: Rgba::new(99, 102, 241, 0.6),
                network_line: Rgba::new(99, 102, 241, 0.15),
                rain_glyph: Rgba::new(99, 102, 241, 0.4),
                rain_fade: Rgba::new(0, 0, 0, 0.05),
            },
            Theme::Light => Self {
                network_node: Rgba::new(79, 70, 229, 0.5),
                network_line: Rgba::new(79, 70, 229, 0.1),
                rain_glyph: Rgba::new(79, 70, 229, 0.3),
                rain_fade: Rgba::new(255, 255, 255, 0.08),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_format_is_stable() {
        assert_eq!(Rgba::new(99, 102, 241, 0.6).to_css(), "rgba(99, 102, 241, 0.6)");
    }

    #[test]
    fn grid_lines_follow_theme() {
        assert_eq!(
            Hue::Accent.grid(Theme::Dark).to_css(),
            "rgba(99, 102, 241, 0.03)"
        );
        assert_eq!(
            Hue::Accent.grid(Theme::Light).to_css(),
            "rgba(79, 70, 229, 0.05)"
        );
    }

    #[test]
    fn hue_parses_case_insensitively() {
        assert_eq!("Purple".parse::<Hue>(), Ok(Hue::Purple));
        assert!("teal".parse::<Hue>().is_err());
    }
}
