//! The typed style record produced from a resolved property map.

use crate::color::Rgba;

/// A length that may be absolute or relative to the containing block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// Absolute CSS pixels.
    Px(f32),
    /// Fraction of the containing block's corresponding extent (0.0..=1.0).
    Percent(f32),
}

impl Dimension {
    /// Resolve against the containing block extent, in px.
    #[inline]
    pub const fn resolve(self, containing: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(fraction) => fraction * containing,
        }
    }
}

/// Per-edge lengths in px (top, right, bottom, left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeValues {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeValues {
    /// The same value on all four edges.
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Per-edge optional colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeColors {
    pub top: Option<Rgba>,
    pub right: Option<Rgba>,
    pub bottom: Option<Rgba>,
    pub left: Option<Rgba>,
}

impl EdgeColors {
    /// The same color on all four edges.
    #[inline]
    pub const fn uniform(color: Option<Rgba>) -> Self {
        Self {
            top: color,
            right: color,
            bottom: color,
            left: color,
        }
    }
}

/// Per-corner radii in px, clockwise from top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerValues {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerValues {
    /// The same radius on all four corners.
    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    RowReverse,
    /// Default main axis in this engine (Yoga convention, not CSS's row).
    #[default]
    Column,
    ColumnReverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignSelf {
    /// Defer to the parent's `align-items`.
    #[default]
    Auto,
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Stretch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Relative,
    Absolute,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dotted,
    Dashed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Flex,
    None,
}

/// The typed style a node exposes to layout and paint.
///
/// Every field has the engine's documented default so an empty resolved map
/// computes to a usable style. Dimensions are `None` for auto/intrinsic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputedStyle {
    // Dimensions (border-box; None means auto/intrinsic)
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,

    // Box spacing
    pub margin: EdgeValues,
    pub padding: EdgeValues,

    // Borders
    pub border_width: EdgeValues,
    pub border_style: BorderStyle,
    pub border_color: EdgeColors,
    pub border_radius: CornerValues,

    // Fills
    pub background_color: Option<Rgba>,
    /// Raw `backgroundImage` value; the paint layer's parse step decides
    /// whether it is an image reference or a gradient function.
    pub background_image: Option<String>,
    /// Opacity multiplier in [0.0, 1.0]. None represents fully opaque.
    pub opacity: Option<f32>,

    // Flex container
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,

    // Flex item
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Option<Dimension>,
    pub align_self: AlignSelf,

    // Positioning
    pub position: Position,
    pub top: Option<Dimension>,
    pub right: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub left: Option<Dimension>,

    pub overflow: Overflow,
    pub display: Display,
}

impl FlexDirection {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "row" => Some(Self::Row),
            "row-reverse" => Some(Self::RowReverse),
            "column" => Some(Self::Column),
            "column-reverse" => Some(Self::ColumnReverse),
            _ => None,
        }
    }
}

impl FlexWrap {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "nowrap" => Some(Self::NoWrap),
            "wrap" => Some(Self::Wrap),
            "wrap-reverse" => Some(Self::WrapReverse),
            _ => None,
        }
    }
}

impl JustifyContent {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "flex-start" => Some(Self::FlexStart),
            "center" => Some(Self::Center),
            "flex-end" => Some(Self::FlexEnd),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            "space-evenly" => Some(Self::SpaceEvenly),
            _ => None,
        }
    }
}

impl AlignItems {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "stretch" => Some(Self::Stretch),
            "flex-start" => Some(Self::FlexStart),
            "center" => Some(Self::Center),
            "flex-end" => Some(Self::FlexEnd),
            _ => None,
        }
    }
}

impl AlignSelf {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "auto" => Some(Self::Auto),
            "stretch" => Some(Self::Stretch),
            "flex-start" => Some(Self::FlexStart),
            "center" => Some(Self::Center),
            "flex-end" => Some(Self::FlexEnd),
            _ => None,
        }
    }
}

impl AlignContent {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "flex-start" => Some(Self::FlexStart),
            "center" => Some(Self::Center),
            "flex-end" => Some(Self::FlexEnd),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            "space-evenly" => Some(Self::SpaceEvenly),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }
}

impl Position {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "relative" => Some(Self::Relative),
            "absolute" => Some(Self::Absolute),
            _ => None,
        }
    }
}

impl BorderStyle {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "none" => Some(Self::None),
            "solid" => Some(Self::Solid),
            "dotted" => Some(Self::Dotted),
            "dashed" => Some(Self::Dashed),
            _ => None,
        }
    }
}

impl Overflow {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "visible" => Some(Self::Visible),
            "hidden" => Some(Self::Hidden),
            "scroll" => Some(Self::Scroll),
            _ => None,
        }
    }
}

impl Display {
    #[inline]
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "flex" => Some(Self::Flex),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}
