//! trellis — a style-resolution and flexbox layout core for declarative UI
//! primitives.
//!
//! The engine turns an ordered list of style fragments per node and a
//! component tree into geometry, a paint description, and an accessibility
//! record per node. Tree construction, text measurement, image decoding,
//! and the platform renderer are external collaborators behind the seams in
//! this crate ([`Node`], [`ImageDimensionSource`], [`RenderTree`]).
//!
//! The whole pipeline is synchronous and pure: [`render`] walks an immutable
//! input tree and produces a fresh output tree. Re-running with identical
//! inputs yields an identical result, which is the engine's only retry and
//! re-layout mechanism — when an image decodes or a style changes, render
//! again and diff the trees. Concurrent renders of independent trees need
//! no locking; mutation of a shared input tree must be serialized by the
//! caller.

#![forbid(unsafe_code)]

pub mod images;
pub mod layout;
pub mod node;
pub mod output;

pub use images::{ImageDimensionSource, UnresolvedImages};
pub use layout::{Viewport, render};
pub use node::{Node, NodeKind};
pub use output::{
    NodeIssue, NodePath, OverflowAxis, OverflowReport, RenderNode, RenderTree,
};

// The building blocks, re-exported for callers that construct styles or
// inspect derived records directly.
pub use trellis_accessibility::{
    AccessibilityProps, AccessibilityRecord, AccessibilityState, AccessibilityValue, Role,
};
pub use trellis_box::{BoxGeometry, Rect, Size};
pub use trellis_paint::{
    BorderSpec, CornerRadii, Fill, ImageSource, LinearGradient, MalformedGradient, PaintIssue,
    PaintSpec,
};
pub use trellis_style::{
    ComputedStyle, ResolvedStyle, Rgba, StyleFragment, StyleIssue, StyleIssueKind, StyleValue,
};
