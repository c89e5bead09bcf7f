//! Line breaking and multi-line packing.
//!
//! The container entry point: breaks items into lines (or keeps one line for
//! `nowrap`), runs the single-line main algorithm per line, sizes each line
//! on the cross axis, and packs lines per `align-content`.

use crate::cross_axis::align_item_cross;
use crate::main_axis::layout_line;
use crate::quantize::quantize_layout;
use crate::{FlexContainer, FlexItem, FlexLayout, FlexPlacement, clamp, resolve_axes};
use log::debug;
use trellis_style::{AlignContent, FlexWrap};

/// Item index ranges per line: `[start, end)`.
type LineRange = (usize, usize);

/// Break items into lines by accumulating outer hypothetical sizes until the
/// container's main extent is exceeded. Every line holds at least one item.
fn break_into_lines(container_main: f32, items: &[FlexItem]) -> Vec<LineRange> {
    let mut ranges: Vec<LineRange> = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0.0f32;
    for (idx, item) in items.iter().enumerate() {
        let outer = item.outer_basis();
        let is_first_in_line = idx == start;
        let next = cursor + outer;
        if next <= container_main || is_first_in_line {
            cursor = next;
        } else {
            ranges.push((start, idx));
            start = idx;
            cursor = outer;
        }
    }
    if start < items.len() {
        ranges.push((start, items.len()));
    }
    ranges
}

/// The cross extent a line needs: the largest clamped outer cross size among
/// its items (auto-sized items contribute only their margins).
fn line_cross_extent(items: &[FlexItem]) -> f32 {
    let mut extent = 0.0f32;
    for item in items {
        let own = if item.cross_auto {
            0.0
        } else {
            clamp(item.cross_size, item.min_cross, item.max_cross)
        };
        let outer = own + item.margin_cross_start + item.margin_cross_end;
        if outer > extent {
            extent = outer;
        }
    }
    extent
}

/// Compute align-content start offset and between-line spacing for packing
/// lines into the container's cross extent.
fn align_content_params(
    align: AlignContent,
    container_cross: f32,
    content_total: f32,
    line_count: usize,
) -> (f32, f32) {
    let remaining = (container_cross - content_total).max(0.0);
    let (start, between) = match (align, line_count) {
        (AlignContent::FlexEnd, _) => (remaining, 0.0),
        (AlignContent::Center, _) => (remaining * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 => (0.0, remaining / (count as f32 - 1.0)),
        (AlignContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / (count as f32))
        }
        (AlignContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        // FlexStart; Stretch is handled by line expansion before packing.
        _ => (0.0, 0.0),
    };
    (quantize_layout(start), quantize_layout(between))
}

/// Expand line cross extents for `align-content: stretch`: remaining space
/// is shared equally among lines.
fn stretch_line_crosses(container: &FlexContainer, line_crosses: &mut [f32]) {
    if container.align_content != AlignContent::Stretch || line_crosses.is_empty() {
        return;
    }
    let total: f32 = line_crosses.iter().copied().sum();
    let remaining = (container.cross_size - total).max(0.0);
    let add_each = remaining / line_crosses.len() as f32;
    for line_cross in line_crosses.iter_mut() {
        *line_cross += add_each;
    }
}

/// Lay out a container's children across one or more flex lines.
///
/// Placements come back in input item order. Overflow on either axis is
/// measured and reported in the result; nothing is clipped here.
pub fn layout_lines(container: &FlexContainer, items: &[FlexItem]) -> FlexLayout {
    if items.is_empty() {
        return FlexLayout::default();
    }
    let axes = resolve_axes(container.direction);
    let wrapping = container.wrap != FlexWrap::NoWrap;

    let line_ranges = if wrapping {
        break_into_lines(container.main_size, items)
    } else {
        vec![(0, items.len())]
    };
    debug!(
        target: "trellis::flexbox::wrap",
        "container main={:.3} cross={:.3} items={} lines={}",
        container.main_size,
        container.cross_size,
        items.len(),
        line_ranges.len()
    );

    // Cross extent per line: the container's full cross for a single
    // non-wrapping line, content-driven otherwise.
    let mut line_crosses: Vec<f32> = if wrapping {
        line_ranges
            .iter()
            .filter_map(|&(start, end)| items.get(start..end).map(line_cross_extent))
            .collect()
    } else {
        vec![container.cross_size]
    };
    stretch_line_crosses(container, &mut line_crosses);

    let lines_total: f32 = line_crosses.iter().copied().sum();
    let (line_start, line_between) = if wrapping {
        align_content_params(
            container.align_content,
            container.cross_size,
            lines_total,
            line_crosses.len(),
        )
    } else {
        (0.0, 0.0)
    };

    let mut placements: Vec<FlexPlacement> = Vec::with_capacity(items.len());
    let mut main_overflow = 0.0f32;
    let mut line_offset = line_start;
    for (&(start, end), &line_cross) in line_ranges.iter().zip(line_crosses.iter()) {
        let Some(line_items) = items.get(start..end) else {
            continue;
        };
        let (main_placements, line_main_overflow) = layout_line(
            container.main_size,
            axes.main_reverse,
            container.justify_content,
            line_items,
        );
        if line_main_overflow > main_overflow {
            main_overflow = line_main_overflow;
        }

        // Reversed wrap stacks lines from the cross-end.
        let packed_offset = if container.wrap == FlexWrap::WrapReverse {
            (container.cross_size - line_offset - line_cross).max(0.0)
        } else {
            line_offset
        };

        for (item, main_placement) in line_items.iter().zip(main_placements.iter()) {
            let cross_placement = align_item_cross(container.align_items, line_cross, item);
            placements.push(FlexPlacement {
                index: main_placement.index,
                main_offset: main_placement.main_offset,
                main_size: main_placement.main_size,
                cross_offset: quantize_layout(packed_offset + cross_placement.cross_offset),
                cross_size: cross_placement.cross_size,
            });
        }
        line_offset += line_cross + line_between;
    }

    let used_cross = line_offset - line_between;
    let cross_overflow = (used_cross - container.cross_size).max(0.0);
    FlexLayout {
        placements,
        main_overflow,
        cross_overflow,
        line_count: line_ranges.len(),
    }
}
