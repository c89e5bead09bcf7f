//! Paint descriptions for the trellis UI core.
//!
//! Converts a computed style into renderer-agnostic drawable primitives:
//! a background fill (solid color, image, or linear gradient), per-edge
//! border strokes, and corner radii. Everything here is derived data —
//! recomputed whole on style change, never patched.

#![forbid(unsafe_code)]

pub mod border;
pub mod gradient;

pub use border::{BorderEdge, BorderSpec, CornerRadii, describe_borders};
pub use gradient::{
    ColorStop, GradientStops, LinearGradient, MalformedGradient, is_gradient_text,
    parse_linear_gradient,
};

use log::warn;
use trellis_style::{ComputedStyle, Rgba};

/// A background image reference, resolved or not.
///
/// Natural dimensions arrive from the external image pipeline; `None` means
/// the image has not been decoded yet and layout must not wait on it.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    pub uri: String,
    /// Natural pixel dimensions once known.
    pub natural_size: Option<(f32, f32)>,
}

/// What fills a node's background.
///
/// A tagged variant decided by a parse step: gradient-function text becomes
/// [`Fill::Gradient`], any other `backgroundImage` text is an image
/// reference, and a bare `backgroundColor` is a solid fill.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fill {
    #[default]
    None,
    Color(Rgba),
    Image(ImageSource),
    Gradient(LinearGradient),
}

/// The full paint description for one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaintSpec {
    pub fill: Fill,
    pub borders: BorderSpec,
    pub corner_radii: CornerRadii,
}

/// A non-fatal paint diagnostic for one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintIssue {
    /// The `backgroundImage` gradient text failed to parse; fill degraded
    /// to none.
    MalformedGradient(MalformedGradient),
}

/// Build the paint description for a computed style.
///
/// Fill precedence: an explicit `backgroundImage` overrides
/// `backgroundColor`; with both absent the fill is none. A malformed
/// gradient degrades the fill to none and is reported, never propagated as
/// a failure — one bad node must not stop its siblings from painting.
pub fn describe(style: &ComputedStyle) -> (PaintSpec, Vec<PaintIssue>) {
    let mut issues = Vec::new();

    let fill = match style.background_image.as_deref() {
        Some(image) if gradient::is_gradient_text(image) => {
            match parse_linear_gradient(image) {
                Ok(parsed) => Fill::Gradient(parsed),
                Err(error) => {
                    warn!(
                        target: "trellis::paint",
                        "background gradient rejected: {error:?}"
                    );
                    issues.push(PaintIssue::MalformedGradient(error));
                    Fill::None
                }
            }
        }
        Some(image) if !image.trim().is_empty() => Fill::Image(ImageSource {
            uri: image.trim().to_owned(),
            natural_size: None,
        }),
        _ => style.background_color.map_or(Fill::None, Fill::Color),
    };

    let spec = PaintSpec {
        fill,
        borders: describe_borders(style),
        corner_radii: CornerRadii::from_style(style),
    };
    (spec, issues)
}
