//! Color values and CSS color parsing.

use csscolorparser::Color;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Opaque color from RGB channels.
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    /// Fully transparent black.
    #[inline]
    pub const fn transparent() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
        }
    }
}

/// Parse a CSS color into 8-bit RGBA channels.
///
/// Supports named colors, hex forms (`#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`),
/// and functional notations like `rgb()`/`rgba()`. Returns `None` for
/// anything unparsable; callers decide the degrade policy.
#[inline]
pub fn parse_css_color(input: &str) -> Option<Rgba> {
    let parsed: Color = input.trim().parse().ok()?;
    let channels = parsed.to_rgba8();
    Some(Rgba {
        red: channels[0],
        green: channels[1],
        blue: channels[2],
        alpha: channels[3],
    })
}
