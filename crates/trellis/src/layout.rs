//! The render pipeline: resolve → compute → measure → place → describe.
//!
//! One synchronous pass over an immutable input tree. Every derived record
//! (geometry, paint, accessibility) is built fresh into a new [`RenderTree`]
//! — a style change means re-running this pass and diffing trees, never
//! patching the old one in place.

use crate::images::ImageDimensionSource;
use crate::node::Node;
use crate::output::{
    NodeIssue, NodePath, OverflowAxis, OverflowReport, RenderNode, RenderTree,
};
use log::debug;
use trellis_accessibility::build as build_accessibility;
use trellis_box::{
    BoxGeometry, ContainingBlock, Rect, Size, clamp_axis, compute_box_sides, derive_box,
    resolve_declared_size,
};
use trellis_flexbox::{FlexContainer, FlexItem, FlexLayout, layout_lines, resolve_axes};
use trellis_paint::{Fill, describe, is_gradient_text};
use trellis_style::{ComputedStyle, Display, Position, StyleIssue, compute, resolve};

/// The root constraint: the screen (or host window) extent in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// A node with its style computed once for the whole pass.
struct Styled<'tree> {
    node: &'tree Node,
    style: ComputedStyle,
    style_issues: Vec<StyleIssue>,
    children: Vec<Styled<'tree>>,
}

/// Resolve and compute styles for the whole tree up front.
fn style_tree(node: &Node) -> Styled<'_> {
    let resolved = resolve(&node.fragments);
    let (style, style_issues) = compute(&resolved);
    Styled {
        node,
        style,
        style_issues,
        children: node.children.iter().map(style_tree).collect(),
    }
}

/// Whether a child takes part in its parent's flex flow.
fn in_flow(child: &Styled<'_>) -> bool {
    child.style.display != Display::None && child.style.position == Position::Relative
}

/// The intrinsic content size of a leaf, if anything supplies one.
///
/// The externally measured size wins; otherwise a background image whose
/// natural dimensions are already known acts as the intrinsic size. An
/// unresolved image contributes nothing — layout never waits on decoding.
fn intrinsic_size(styled: &Styled<'_>, images: &dyn ImageDimensionSource) -> Option<Size> {
    if let Some(size) = styled.node.intrinsic_size {
        return Some(size);
    }
    let image = styled.style.background_image.as_deref()?;
    if is_gradient_text(image) {
        return None;
    }
    let (width, height) = images.natural_size(image.trim())?;
    Some(Size { width, height })
}

/// Measure a node's border-box size when laid out within `containing`.
///
/// Declared dimensions win; auto axes fall back to content: the sum of
/// child outer sizes along this node's main axis and the max across it,
/// plus this node's padding and border. Min/max clamps apply last.
fn measure(
    styled: &Styled<'_>,
    containing: ContainingBlock,
    images: &dyn ImageDimensionSource,
) -> Size {
    let (declared_width, declared_height) = resolve_declared_size(&styled.style, containing);
    if let (Some(width), Some(height)) = (declared_width, declared_height) {
        return Size { width, height };
    }

    let sides = compute_box_sides(&styled.style);
    let inset_width = sides.border.horizontal() + sides.padding.horizontal();
    let inset_height = sides.border.vertical() + sides.padding.vertical();

    let content = if styled.children.is_empty() {
        intrinsic_size(styled, images).unwrap_or_default()
    } else {
        let inner = ContainingBlock {
            width: (declared_width.unwrap_or(containing.width) - inset_width).max(0.0),
            height: (declared_height.unwrap_or(containing.height) - inset_height).max(0.0),
        };
        let horizontal_main = resolve_axes(styled.style.flex_direction).horizontal_main;
        let mut main_total = 0.0f32;
        let mut cross_max = 0.0f32;
        for child in styled.children.iter().filter(|child| in_flow(child)) {
            let child_size = measure(child, inner, images);
            let outer_width =
                child_size.width + child.style.margin.left + child.style.margin.right;
            let outer_height =
                child_size.height + child.style.margin.top + child.style.margin.bottom;
            let (outer_main, outer_cross) = if horizontal_main {
                (outer_width, outer_height)
            } else {
                (outer_height, outer_width)
            };
            main_total += outer_main;
            if outer_cross > cross_max {
                cross_max = outer_cross;
            }
        }
        if horizontal_main {
            Size {
                width: main_total,
                height: cross_max,
            }
        } else {
            Size {
                width: cross_max,
                height: main_total,
            }
        }
    };

    let width = declared_width.unwrap_or(content.width + inset_width);
    let height = declared_height.unwrap_or(content.height + inset_height);
    Size {
        width: clamp_axis(
            width,
            styled.style.min_width,
            styled.style.max_width,
            containing.width,
        ),
        height: clamp_axis(
            height,
            styled.style.min_height,
            styled.style.max_height,
            containing.height,
        ),
    }
}

/// Build the flex-item inputs for one in-flow child.
fn flex_item_for(
    index: usize,
    child: &Styled<'_>,
    containing: ContainingBlock,
    horizontal_main: bool,
    images: &dyn ImageDimensionSource,
) -> FlexItem {
    let measured = measure(child, containing, images);
    let (containing_main, containing_cross) = if horizontal_main {
        (containing.width, containing.height)
    } else {
        (containing.height, containing.width)
    };
    let (measured_main, measured_cross) = if horizontal_main {
        (measured.width, measured.height)
    } else {
        (measured.height, measured.width)
    };

    let basis = child
        .style
        .flex_basis
        .map_or(measured_main, |dimension| {
            dimension.resolve(containing_main).max(0.0)
        });

    let (declared_cross, min_main, max_main, min_cross, max_cross) = if horizontal_main {
        (
            child.style.height,
            child.style.min_width,
            child.style.max_width,
            child.style.min_height,
            child.style.max_height,
        )
    } else {
        (
            child.style.width,
            child.style.min_height,
            child.style.max_height,
            child.style.min_width,
            child.style.max_width,
        )
    };
    let cross_auto = declared_cross.is_none() && intrinsic_size(child, images).is_none();

    let margin = child.style.margin;
    let (main_start, main_end, cross_start, cross_end) = if horizontal_main {
        (margin.left, margin.right, margin.top, margin.bottom)
    } else {
        (margin.top, margin.bottom, margin.left, margin.right)
    };

    FlexItem {
        index,
        flex_basis: basis,
        flex_grow: child.style.flex_grow,
        flex_shrink: child.style.flex_shrink,
        min_main: min_main.map_or(0.0, |dim| dim.resolve(containing_main).max(0.0)),
        max_main: max_main.map_or(f32::INFINITY, |dim| dim.resolve(containing_main).max(0.0)),
        margin_main_start: main_start,
        margin_main_end: main_end,
        cross_size: measured_cross,
        cross_auto,
        min_cross: min_cross.map_or(0.0, |dim| dim.resolve(containing_cross).max(0.0)),
        max_cross: max_cross.map_or(f32::INFINITY, |dim| {
            dim.resolve(containing_cross).max(0.0)
        }),
        margin_cross_start: cross_start,
        margin_cross_end: cross_end,
        align_self: child.style.align_self,
    }
}

/// Resolve one absolutely positioned child against its parent's padding box.
fn place_absolute(
    child: &Styled<'_>,
    padding_box: Rect,
    images: &dyn ImageDimensionSource,
) -> (f32, f32, Size) {
    let containing = ContainingBlock {
        width: padding_box.width,
        height: padding_box.height,
    };
    let measured = measure(child, containing, images);
    let left = child.style.left.map(|dim| dim.resolve(padding_box.width));
    let right = child.style.right.map(|dim| dim.resolve(padding_box.width));
    let top = child.style.top.map(|dim| dim.resolve(padding_box.height));
    let bottom = child.style.bottom.map(|dim| dim.resolve(padding_box.height));

    // Opposing offsets with no declared size solve the size instead.
    let width = match (child.style.width, left, right) {
        (None, Some(from_left), Some(from_right)) => {
            (padding_box.width - from_left - from_right).max(0.0)
        }
        _ => measured.width,
    };
    let height = match (child.style.height, top, bottom) {
        (None, Some(from_top), Some(from_bottom)) => {
            (padding_box.height - from_top - from_bottom).max(0.0)
        }
        _ => measured.height,
    };

    let origin_x = left.map_or_else(
        || {
            right.map_or(padding_box.x, |from_right| {
                padding_box.x + padding_box.width - from_right - width
            })
        },
        |from_left| padding_box.x + from_left,
    );
    let origin_y = top.map_or_else(
        || {
            bottom.map_or(padding_box.y, |from_bottom| {
                padding_box.y + padding_box.height - from_bottom - height
            })
        },
        |from_top| padding_box.y + from_top,
    );

    (origin_x, origin_y, Size { width, height })
}

/// Place one node at a settled origin/size and recurse into its children.
fn place_node(
    styled: &Styled<'_>,
    origin: (f32, f32),
    size: Size,
    path: &NodePath,
    images: &dyn ImageDimensionSource,
    overflows: &mut Vec<OverflowReport>,
) -> RenderNode {
    let spec = derive_box(&styled.style, origin, size);
    let sides = compute_box_sides(&styled.style);
    let geometry = BoxGeometry {
        rect: spec.border_box,
        border: sides.border,
        padding: sides.padding,
    };
    let content = spec.content;
    let containing = ContainingBlock {
        width: content.width,
        height: content.height,
    };

    // Flow layout over the participating children.
    let axes = resolve_axes(styled.style.flex_direction);
    let flow: Vec<(usize, &Styled<'_>)> = styled
        .children
        .iter()
        .enumerate()
        .filter(|(_, child)| in_flow(child))
        .collect();
    let items: Vec<FlexItem> = flow
        .iter()
        .map(|(child_index, child)| {
            flex_item_for(*child_index, child, containing, axes.horizontal_main, images)
        })
        .collect();
    let (container_main, container_cross) = if axes.horizontal_main {
        (content.width, content.height)
    } else {
        (content.height, content.width)
    };
    let container = FlexContainer {
        direction: styled.style.flex_direction,
        wrap: styled.style.flex_wrap,
        justify_content: styled.style.justify_content,
        align_items: styled.style.align_items,
        align_content: styled.style.align_content,
        main_size: container_main,
        cross_size: container_cross,
    };
    let layout: FlexLayout = layout_lines(&container, &items);
    debug!(
        target: "trellis::layout",
        "placed {:?} at {:?} size {:.1}x{:.1}: {} flow children, {} lines",
        styled.node.kind,
        path,
        size.width,
        size.height,
        flow.len(),
        layout.line_count
    );
    record_overflow(&layout, axes.horizontal_main, path, overflows);

    // Children render in input order regardless of flow membership.
    let mut rendered: Vec<Option<RenderNode>> = Vec::new();
    rendered.resize_with(styled.children.len(), || None);

    for (placement, (child_index, child)) in layout.placements.iter().zip(flow.iter()) {
        let (child_x, child_y, child_size) = if axes.horizontal_main {
            (
                content.x + placement.main_offset,
                content.y + placement.cross_offset,
                Size {
                    width: placement.main_size,
                    height: placement.cross_size,
                },
            )
        } else {
            (
                content.x + placement.cross_offset,
                content.y + placement.main_offset,
                Size {
                    width: placement.cross_size,
                    height: placement.main_size,
                },
            )
        };
        let mut child_path = path.clone();
        child_path.push(*child_index);
        if let Some(slot) = rendered.get_mut(*child_index) {
            *slot = Some(place_node(
                child,
                (child_x, child_y),
                child_size,
                &child_path,
                images,
                overflows,
            ));
        }
    }

    for (child_index, child) in styled.children.iter().enumerate() {
        if child.style.display == Display::None {
            // Hidden subtree: present in the output for stable diffing, but
            // zero-sized and not descended into.
            if let Some(slot) = rendered.get_mut(child_index) {
                *slot = Some(RenderNode {
                    kind: child.node.kind,
                    ..RenderNode::default()
                });
            }
            continue;
        }
        if child.style.position != Position::Absolute {
            continue;
        }
        let (child_x, child_y, child_size) = place_absolute(child, spec.padding_box, images);
        let mut child_path = path.clone();
        child_path.push(child_index);
        if let Some(slot) = rendered.get_mut(child_index) {
            *slot = Some(place_node(
                child,
                (child_x, child_y),
                child_size,
                &child_path,
                images,
                overflows,
            ));
        }
    }

    let children: Vec<RenderNode> = rendered.into_iter().flatten().collect();

    // Derived paint and accessibility records.
    let (mut paint, paint_issues) = describe(&styled.style);
    if let Fill::Image(image) = &mut paint.fill {
        image.natural_size = images.natural_size(&image.uri);
    }
    let issues = styled
        .style_issues
        .iter()
        .cloned()
        .map(NodeIssue::Style)
        .chain(paint_issues.into_iter().map(NodeIssue::Paint))
        .collect();

    RenderNode {
        kind: styled.node.kind,
        geometry,
        paint,
        accessibility: build_accessibility(&styled.node.accessibility),
        opacity: styled.style.opacity,
        issues,
        children,
    }
}

/// Append overflow reports for a finished container layout.
fn record_overflow(
    layout: &FlexLayout,
    horizontal_main: bool,
    path: &NodePath,
    overflows: &mut Vec<OverflowReport>,
) {
    if layout.main_overflow > 0.0 {
        overflows.push(OverflowReport {
            path: path.clone(),
            axis: if horizontal_main {
                OverflowAxis::Horizontal
            } else {
                OverflowAxis::Vertical
            },
            overflow_px: layout.main_overflow,
        });
    }
    if layout.cross_overflow > 0.0 {
        overflows.push(OverflowReport {
            path: path.clone(),
            axis: if horizontal_main {
                OverflowAxis::Vertical
            } else {
                OverflowAxis::Horizontal
            },
            overflow_px: layout.cross_overflow,
        });
    }
}

/// Run the full pipeline over an input tree.
///
/// The root's declared size wins over the viewport; an auto root axis fills
/// the viewport. The returned tree is a fresh value: rendering the same
/// input with the same viewport and image state yields an identical tree.
pub fn render(root: &Node, viewport: Viewport, images: &dyn ImageDimensionSource) -> RenderTree {
    let styled = style_tree(root);
    let containing = ContainingBlock {
        width: viewport.width,
        height: viewport.height,
    };
    let (declared_width, declared_height) = resolve_declared_size(&styled.style, containing);
    let root_size = Size {
        width: declared_width.unwrap_or(viewport.width),
        height: declared_height.unwrap_or(viewport.height),
    };

    let mut overflows = Vec::new();
    let root_node = place_node(
        &styled,
        (0.0, 0.0),
        root_size,
        &NodePath::new(),
        images,
        &mut overflows,
    );
    RenderTree {
        root: root_node,
        overflows,
    }
}
