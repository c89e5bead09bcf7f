//! Flexbox layout for the trellis UI core.
//!
//! Pure per-container primitives: the caller (the layout driver) resolves
//! styles to [`FlexItem`] inputs and a [`FlexContainer`], and this crate
//! returns main/cross placements in item order. Overflow is measured and
//! reported, never clipped; contradictory constraints clamp to zero.
//!
//! Offsets and sizes are CSS px (f32), quantized to the 1/64 px layout unit
//! at placement time to keep accumulated positions stable.

#![forbid(unsafe_code)]

pub mod axis;
pub mod cross_axis;
pub mod distribution;
pub mod main_axis;
pub mod quantize;
pub mod wrap;

pub use axis::{Axes, resolve_axes};
pub use cross_axis::{CrossPlacement, align_item_cross};
pub use main_axis::{MainPlacement, layout_line};
pub use wrap::layout_lines;

use trellis_style::{
    AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent,
};

/// Main-axis and cross-axis inputs for one flex item.
///
/// All lengths are px, already resolved against the containing block by the
/// caller; `min`/`max` default to `0.0` and `f32::INFINITY` when
/// unconstrained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlexItem {
    /// Caller-side child index; placements echo it back in input order.
    pub index: usize,
    /// Flex base size: the hypothetical main size before flexing.
    pub flex_basis: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub min_main: f32,
    pub max_main: f32,
    /// Main-axis margins at the start/end of the flow direction.
    pub margin_main_start: f32,
    pub margin_main_end: f32,
    /// Hypothetical cross size; ignored for stretch when `cross_auto`.
    pub cross_size: f32,
    /// Whether the cross size is auto (unset), making the item stretchable.
    pub cross_auto: bool,
    pub min_cross: f32,
    pub max_cross: f32,
    pub margin_cross_start: f32,
    pub margin_cross_end: f32,
    /// Per-item override of the container's `align-items`.
    pub align_self: AlignSelf,
}

impl Default for FlexItem {
    fn default() -> Self {
        Self {
            index: 0,
            flex_basis: 0.0,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            min_main: 0.0,
            max_main: f32::INFINITY,
            margin_main_start: 0.0,
            margin_main_end: 0.0,
            cross_size: 0.0,
            cross_auto: true,
            min_cross: 0.0,
            max_cross: f32::INFINITY,
            margin_cross_start: 0.0,
            margin_cross_end: 0.0,
            align_self: AlignSelf::Auto,
        }
    }
}

impl FlexItem {
    /// Hypothetical main size clamped by the item's constraints.
    #[inline]
    pub fn clamped_basis(&self) -> f32 {
        clamp(self.flex_basis, self.min_main, self.max_main)
    }

    /// Outer hypothetical main size: clamped basis plus main-axis margins.
    #[inline]
    pub fn outer_basis(&self) -> f32 {
        self.clamped_basis() + self.margin_main_start + self.margin_main_end
    }

    /// The alignment that applies to this item under the given container
    /// `align-items`.
    #[inline]
    pub fn effective_align(&self, container_align: AlignItems) -> AlignItems {
        match self.align_self {
            AlignSelf::Auto => container_align,
            AlignSelf::Stretch => AlignItems::Stretch,
            AlignSelf::FlexStart => AlignItems::FlexStart,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::FlexEnd => AlignItems::FlexEnd,
        }
    }
}

/// Container inputs for one flex layout pass over its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlexContainer {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Definite main extent of the content box, px.
    pub main_size: f32,
    /// Definite cross extent of the content box, px.
    pub cross_size: f32,
}

/// One item's resolved placement, in the container's content-box
/// coordinates along main/cross axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlexPlacement {
    pub index: usize,
    pub main_offset: f32,
    pub main_size: f32,
    pub cross_offset: f32,
    pub cross_size: f32,
}

/// The result of laying out a container's children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexLayout {
    /// Placements in input item order.
    pub placements: Vec<FlexPlacement>,
    /// Main-axis px that did not fit the container (0 when content fits).
    pub main_overflow: f32,
    /// Cross-axis px that did not fit the container (0 when lines fit).
    pub cross_overflow: f32,
    /// Number of flex lines produced.
    pub line_count: usize,
}

/// Clamp a value between min and max inclusive.
///
/// Guards against contradictory constraints where min exceeds max: min wins,
/// and the result never goes below zero.
#[inline]
pub fn clamp(value: f32, min_value: f32, max_value: f32) -> f32 {
    if min_value > max_value {
        return value.max(min_value).max(0.0);
    }
    value.max(min_value).min(max_value).max(0.0)
}
