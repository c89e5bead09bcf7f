//! Margin, padding, and border widths resolved from a computed style.

use crate::geometry::EdgeInsets;
use trellis_style::{BorderStyle, ComputedStyle};

/// The three inset layers around a node's content.
///
/// Padding and border widths are clamped non-negative; margins can be
/// negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSides {
    pub margin: EdgeInsets,
    pub padding: EdgeInsets,
    pub border: EdgeInsets,
}

/// Resolve margin/padding/border widths from a computed style.
///
/// Border widths contribute only when a border style is declared and is not
/// `none`: a width with no style occupies no geometry.
pub fn compute_box_sides(style: &ComputedStyle) -> BoxSides {
    let border = if style.border_style == BorderStyle::None {
        EdgeInsets::default()
    } else {
        EdgeInsets {
            top: style.border_width.top.max(0.0),
            right: style.border_width.right.max(0.0),
            bottom: style.border_width.bottom.max(0.0),
            left: style.border_width.left.max(0.0),
        }
    };

    BoxSides {
        margin: EdgeInsets {
            top: style.margin.top,
            right: style.margin.right,
            bottom: style.margin.bottom,
            left: style.margin.left,
        },
        padding: EdgeInsets {
            top: style.padding.top.max(0.0),
            right: style.padding.right.max(0.0),
            bottom: style.padding.bottom.max(0.0),
            left: style.padding.left.max(0.0),
        },
        border,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_style::{EdgeValues, StyleFragment, compute, resolve};

    #[test]
    /// # Panics
    /// Panics if declared borders do not resolve to insets.
    fn solid_border_contributes_width() {
        let (style, _) = compute(&resolve(&[Some(
            StyleFragment::new()
                .with("borderWidth", 2)
                .with("borderStyle", "solid"),
        )]));
        let sides = compute_box_sides(&style);
        assert!((sides.border.top - 2.0).abs() < 0.001);
        assert!((sides.border.horizontal() - 4.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if an undeclared border style still produces border insets.
    fn missing_border_style_zeroes_insets() {
        let (style, _) = compute(&resolve(&[Some(
            StyleFragment::new().with("borderWidth", 2),
        )]));
        let sides = compute_box_sides(&style);
        assert!((sides.border.top - 0.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if negative margins are clamped (they must pass through).
    fn negative_margins_pass_through() {
        let style = ComputedStyle {
            margin: EdgeValues::uniform(-3.0),
            ..ComputedStyle::default()
        };
        let sides = compute_box_sides(&style);
        assert!((sides.margin.top - -3.0).abs() < 0.001);
    }
}
