//! Border strokes and corner radii.

use trellis_style::{BorderStyle, ComputedStyle, Rgba};

/// One edge's stroke description.
///
/// An edge is visible only when all three of width, a recognized style, and
/// a color are present; any missing component degrades that edge to no
/// stroke. A declared width alone still occupies box geometry when a style
/// is set — visibility is purely a paint concern.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderEdge {
    pub width: f32,
    pub style: BorderStyle,
    pub color: Option<Rgba>,
}

impl BorderEdge {
    /// Whether this edge paints a stroke.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.style != BorderStyle::None && self.color.is_some()
    }
}

/// Per-edge strokes for one node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderSpec {
    pub top: BorderEdge,
    pub right: BorderEdge,
    pub bottom: BorderEdge,
    pub left: BorderEdge,
}

impl BorderSpec {
    /// Whether any edge paints.
    #[inline]
    pub fn any_visible(&self) -> bool {
        self.top.is_visible()
            || self.right.is_visible()
            || self.bottom.is_visible()
            || self.left.is_visible()
    }
}

/// Per-corner radii, clockwise from top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Read the resolved radii off a computed style (uniform radius with
    /// per-corner overrides already applied at compute time).
    #[inline]
    pub fn from_style(style: &ComputedStyle) -> Self {
        Self {
            top_left: style.border_radius.top_left.max(0.0),
            top_right: style.border_radius.top_right.max(0.0),
            bottom_right: style.border_radius.bottom_right.max(0.0),
            bottom_left: style.border_radius.bottom_left.max(0.0),
        }
    }

    /// Whether any corner is rounded.
    #[inline]
    pub fn any_rounded(&self) -> bool {
        self.top_left > 0.0 || self.top_right > 0.0 || self.bottom_right > 0.0 || self.bottom_left > 0.0
    }
}

/// Build the per-edge border strokes for a computed style.
pub fn describe_borders(style: &ComputedStyle) -> BorderSpec {
    BorderSpec {
        top: BorderEdge {
            width: style.border_width.top.max(0.0),
            style: style.border_style,
            color: style.border_color.top,
        },
        right: BorderEdge {
            width: style.border_width.right.max(0.0),
            style: style.border_style,
            color: style.border_color.right,
        },
        bottom: BorderEdge {
            width: style.border_width.bottom.max(0.0),
            style: style.border_style,
            color: style.border_color.bottom,
        },
        left: BorderEdge {
            width: style.border_width.left.max(0.0),
            style: style.border_style,
            color: style.border_color.left,
        },
    }
}
