//! The per-node output handed to the external Renderer.

use crate::node::NodeKind;
use trellis_accessibility::AccessibilityRecord;
use trellis_box::BoxGeometry;
use trellis_paint::{PaintIssue, PaintSpec};
use trellis_style::StyleIssue;

/// Child-index path from the root to a node (empty path = root).
pub type NodePath = Vec<usize>;

/// The screen axis an overflow report refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowAxis {
    Horizontal,
    Vertical,
}

/// An informational signal: a container's content did not fit.
///
/// Not an error — this engine never clips. The Renderer decides whether the
/// container scrolls (a `ScrollView` consumes the report) or paints
/// overflowing.
#[derive(Clone, Debug, PartialEq)]
pub struct OverflowReport {
    /// The overflowing container.
    pub path: NodePath,
    pub axis: OverflowAxis,
    /// How many px of content did not fit.
    pub overflow_px: f32,
}

/// A non-fatal per-node diagnostic collected while deriving records.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeIssue {
    Style(StyleIssue),
    Paint(PaintIssue),
}

/// One node's derived records, in the same tree shape as the input.
///
/// A fresh value every render: derived records are recomputed whole, never
/// patched, so the Renderer diffs the previous tree against this one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderNode {
    pub kind: NodeKind,
    pub geometry: BoxGeometry,
    pub paint: PaintSpec,
    pub accessibility: AccessibilityRecord,
    /// Opacity multiplier from the style, for the Renderer's compositor.
    pub opacity: Option<f32>,
    pub issues: Vec<NodeIssue>,
    /// Children in input order.
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Walk to a node by child-index path.
    pub fn at_path(&self, path: &[usize]) -> Option<&Self> {
        let mut current = self;
        for &index in path {
            current = current.children.get(index)?;
        }
        Some(current)
    }
}

/// The complete result of one render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderTree {
    pub root: RenderNode,
    /// Overflow signals across the whole tree, in traversal order.
    pub overflows: Vec<OverflowReport>,
}
