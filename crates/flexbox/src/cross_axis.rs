//! Cross-axis alignment within a line.

use crate::{FlexItem, clamp};
use trellis_style::AlignItems;

/// One item's cross-axis placement within its line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CrossPlacement {
    /// Resolved cross size after alignment and clamping, px.
    pub cross_size: f32,
    /// Offset of the item's border box from the line's cross-start, px.
    pub cross_offset: f32,
}

/// Align one item within a line of the given cross extent.
///
/// Stretch applies only when the item's cross size is auto; a declared cross
/// size always wins. Margins reduce the space the item is aligned within.
pub fn align_item_cross(
    container_align: AlignItems,
    line_cross: f32,
    item: &FlexItem,
) -> CrossPlacement {
    let margins = item.margin_cross_start + item.margin_cross_end;
    let available = (line_cross - margins).max(0.0);
    let clamped_item = clamp(item.cross_size, item.min_cross, item.max_cross);
    let align = item.effective_align(container_align);

    let (cross_size, offset_in_available) = match align {
        AlignItems::Stretch => {
            if item.cross_auto {
                (clamp(available, item.min_cross, item.max_cross), 0.0)
            } else {
                (clamped_item, 0.0)
            }
        }
        AlignItems::FlexStart => (clamped_item, 0.0),
        AlignItems::Center => (clamped_item, ((available - clamped_item) * 0.5).max(0.0)),
        AlignItems::FlexEnd => (clamped_item, (available - clamped_item).max(0.0)),
    };

    CrossPlacement {
        cross_size,
        cross_offset: item.margin_cross_start + offset_in_available,
    }
}
