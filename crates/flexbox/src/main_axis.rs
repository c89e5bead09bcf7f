//! Single-line main-axis sizing and placement.

use crate::FlexItem;
use crate::distribution::{distribute_grow, distribute_shrink};
use crate::quantize::{quantize_layout, quantize_layout_floor};
use log::debug;
use trellis_style::JustifyContent;

/// One item's main-axis placement within its line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MainPlacement {
    pub index: usize,
    /// Offset of the item's border box from the line's main-start, px.
    pub main_offset: f32,
    /// Final main size of the border box after flexing, px.
    pub main_size: f32,
}

/// Compute justify-content start offset and between-item spacing.
///
/// `space-between` puts equal gaps between consecutive items and none at the
/// ends; `space-around` gives every item a half-gap at each end;
/// `space-evenly` makes all slots equal including the ends. Negative
/// remaining space packs at main-start.
#[inline]
fn justify_params(
    justify: JustifyContent,
    container_main: f32,
    content_total: f32,
    item_count: usize,
) -> (f32, f32) {
    let remaining = (container_main - content_total).max(0.0);
    let (start, between) = match (justify, item_count) {
        (JustifyContent::FlexEnd, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / (count as f32))
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        // FlexStart and degenerate counts.
        _ => (0.0, 0.0),
    };
    (quantize_layout(start), quantize_layout_floor(between))
}

/// Accumulate per-item outer-box start offsets along the main axis.
///
/// Reverse directions accumulate from the container's far edge so earlier
/// logical items land at larger main coordinates.
#[inline]
fn accumulate_offsets(
    reverse: bool,
    container_main: f32,
    start_offset: f32,
    between_spacing: f32,
    outer_sizes: &[f32],
) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(outer_sizes.len());
    if reverse {
        let mut cursor = quantize_layout(container_main - start_offset);
        let mut iter = outer_sizes.iter().peekable();
        while let Some(size) = iter.next() {
            cursor = quantize_layout(cursor - *size);
            offsets.push(cursor);
            if iter.peek().is_some() {
                cursor = quantize_layout(cursor - between_spacing);
            }
        }
    } else {
        let mut cursor = quantize_layout(start_offset);
        let mut iter = outer_sizes.iter().peekable();
        while let Some(size) = iter.next() {
            offsets.push(cursor);
            cursor = quantize_layout(cursor + *size);
            if iter.peek().is_some() {
                cursor = quantize_layout(cursor + between_spacing);
            }
        }
    }
    offsets
}

/// Lay out one line of items along the main axis.
///
/// Returns placements in input order plus the main-axis overflow: px of
/// content that did not fit after shrinking (zero when the line fits).
pub fn layout_line(
    container_main: f32,
    reverse: bool,
    justify: JustifyContent,
    items: &[FlexItem],
) -> (Vec<MainPlacement>, f32) {
    // 1) Hypothetical sizes and free space.
    let mut sizes: Vec<f32> = items.iter().map(FlexItem::clamped_basis).collect();
    let margins_total: f32 = items
        .iter()
        .map(|item| item.margin_main_start + item.margin_main_end)
        .sum();
    let free_space = container_main - sizes.iter().copied().sum::<f32>() - margins_total;
    debug!(
        target: "trellis::flexbox::main_axis",
        "line: items={} container_main={:.3} free_space={:.3} justify={justify:?}",
        items.len(),
        container_main,
        free_space
    );

    // 2) Flex the sizes toward the free space.
    if free_space > 0.0 {
        distribute_grow(free_space, items, &mut sizes);
    } else if free_space < 0.0 {
        distribute_shrink(free_space, items, &mut sizes);
    }

    // 3) Outer sizes and justify spacing over what remains after flexing.
    let outer_sizes: Vec<f32> = items
        .iter()
        .zip(sizes.iter())
        .map(|(item, size)| size + item.margin_main_start + item.margin_main_end)
        .collect();
    let content_total: f32 = outer_sizes.iter().copied().sum();
    let (start_offset, between_spacing) =
        justify_params(justify, container_main, content_total, items.len());

    // 4) Outer starts, then border-box placements.
    let outer_starts =
        accumulate_offsets(reverse, container_main, start_offset, between_spacing, &outer_sizes);
    let placements = items
        .iter()
        .zip(sizes.iter())
        .zip(outer_starts.iter())
        .map(|((item, size), outer_start)| MainPlacement {
            index: item.index,
            main_offset: quantize_layout(outer_start + item.margin_main_start),
            main_size: *size,
        })
        .collect();

    let overflow = (content_total - container_main).max(0.0);
    (placements, overflow)
}
