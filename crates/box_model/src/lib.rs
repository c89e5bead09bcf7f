//! Box geometry derivation: content/padding/border/margin rectangles and
//! size constraints from a computed style.
//!
//! Width and height describe the border box; padding and border are
//! subtracted inward for the content box. All values are CSS px as f32;
//! placements are quantized downstream by the flex engine.

#![forbid(unsafe_code)]

pub mod geometry;
pub mod sides;

pub use geometry::{BoxGeometry, EdgeInsets, Rect, Size};
pub use sides::{BoxSides, compute_box_sides};

use trellis_style::{ComputedStyle, Dimension};

/// Nested rectangles describing one node's box, outermost to innermost.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxModelSpec {
    pub margin_box: Rect,
    pub border_box: Rect,
    pub padding_box: Rect,
    pub content: Rect,
}

/// The containing block's extents a percent dimension resolves against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainingBlock {
    pub width: f32,
    pub height: f32,
}

/// Resolve a node's declared border-box size against its containing block.
///
/// `None` in either slot means the axis is auto/intrinsic and is left for
/// the flex engine to settle from flex-basis or content. Min/max clamps
/// apply to whichever axes are declared.
pub fn resolve_declared_size(
    style: &ComputedStyle,
    containing: ContainingBlock,
) -> (Option<f32>, Option<f32>) {
    let width = style
        .width
        .map(|dimension| dimension.resolve(containing.width));
    let height = style
        .height
        .map(|dimension| dimension.resolve(containing.height));
    (
        width.map(|value| clamp_axis(value, style.min_width, style.max_width, containing.width)),
        height.map(|value| {
            clamp_axis(value, style.min_height, style.max_height, containing.height)
        }),
    )
}

/// Clamp one axis value by optional min/max dimensions, never below zero.
pub fn clamp_axis(
    value: f32,
    min: Option<Dimension>,
    max: Option<Dimension>,
    containing: f32,
) -> f32 {
    let lower = min.map_or(0.0, |dimension| dimension.resolve(containing).max(0.0));
    let upper = max.map_or(f32::INFINITY, |dimension| {
        dimension.resolve(containing).max(0.0)
    });
    if lower > upper {
        // Contradictory constraints: min wins, as in CSS sizing.
        return value.max(lower).max(0.0);
    }
    value.clamp(lower, upper).max(0.0)
}

/// Derive the nested box rectangles for a node whose border box has been
/// placed at `origin` with the given size.
///
/// A content box that would go negative (padding + border exceed the border
/// box) clamps to zero instead of erroring.
pub fn derive_box(style: &ComputedStyle, origin: (f32, f32), border_box_size: Size) -> BoxModelSpec {
    let sides = compute_box_sides(style);
    let (origin_x, origin_y) = origin;

    let border_box = Rect {
        x: origin_x,
        y: origin_y,
        width: border_box_size.width.max(0.0),
        height: border_box_size.height.max(0.0),
    };

    let margin_box = Rect {
        x: border_box.x - sides.margin.left,
        y: border_box.y - sides.margin.top,
        width: (border_box.width + sides.margin.left + sides.margin.right).max(0.0),
        height: (border_box.height + sides.margin.top + sides.margin.bottom).max(0.0),
    };

    let padding_box = border_box.inset(&sides.border);
    let content = padding_box.inset(&sides.padding);

    BoxModelSpec {
        margin_box,
        border_box,
        padding_box,
        content,
    }
}
