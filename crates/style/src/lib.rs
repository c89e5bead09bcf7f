//! Style resolution for the trellis UI core.
//!
//! Turns an ordered sequence of partial style fragments into a single
//! resolved property map, then parses that map into a typed [`ComputedStyle`]
//! the box, flexbox, and paint layers consume.

#![forbid(unsafe_code)]

pub mod color;
pub mod compute;
pub mod fragment;
pub mod model;
pub mod value;

pub use color::{Rgba, parse_css_color};
pub use compute::{StyleIssue, StyleIssueKind, compute};
pub use fragment::{ResolvedStyle, StyleFragment, resolve};
pub use model::{
    AlignContent, AlignItems, AlignSelf, BorderStyle, ComputedStyle, CornerValues, Dimension,
    Display, EdgeColors, EdgeValues, FlexDirection, FlexWrap, JustifyContent, Overflow, Position,
};
pub use value::StyleValue;
