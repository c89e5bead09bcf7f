//! Linear gradient parsing.
//!
//! Accepts the `linear-gradient(<angle>deg, <color> <stop>%, ...)` form the
//! style layer passes through in `backgroundImage`. The grammar is strict:
//! a parsable angle, at least one `<color> <stop>%` pair, and stop positions
//! that never decrease. Trailing whitespace and a trailing `;` are
//! tolerated — style objects commonly carry one. Arguments are
//! comma-separated, so stop colors must be comma-free forms (named colors
//! and hex); `rgb()` notation inside a gradient is rejected as a malformed
//! stop.

use smallvec::SmallVec;
use trellis_style::{Rgba, parse_css_color};

/// One gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub color: Rgba,
    /// Stop position as a percentage in 0..=100.
    pub position: f32,
}

/// Inline storage for the common small stop counts.
pub type GradientStops = SmallVec<[ColorStop; 4]>;

/// A parsed linear gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Angle in degrees (0 = up, 90 = right), exactly as written.
    pub angle_deg: f32,
    /// Ordered, non-decreasing color stops.
    pub stops: GradientStops,
}

/// Why a gradient string was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedGradient {
    /// The text is not a `linear-gradient(...)` call.
    NotAGradientCall,
    /// The first argument is not `<number>deg`.
    UnparsableAngle,
    /// A stop is not of the form `<color> <number>%`.
    UnparsableStop,
    /// A stop's color did not parse.
    UnparsableColor,
    /// A stop position is smaller than the one before it.
    DecreasingStop,
    /// The gradient has no color stops.
    MissingStops,
}

/// Whether `backgroundImage` text should be treated as a gradient function
/// rather than an image reference.
#[inline]
pub fn is_gradient_text(input: &str) -> bool {
    input.trim_start().starts_with("linear-gradient(")
}

/// Strip surrounding whitespace and an optional trailing `;`.
fn trim_outer(input: &str) -> &str {
    input.trim().trim_end_matches(';').trim_end()
}

/// Parse a `linear-gradient(...)` string.
///
/// # Errors
/// Returns [`MalformedGradient`] naming the first offending part; the caller
/// degrades the fill rather than failing the node.
pub fn parse_linear_gradient(input: &str) -> Result<LinearGradient, MalformedGradient> {
    let trimmed = trim_outer(input);
    let body = trimmed
        .strip_prefix("linear-gradient(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(MalformedGradient::NotAGradientCall)?;

    let mut arguments = body.split(',').map(str::trim);
    let angle_text = arguments.next().ok_or(MalformedGradient::UnparsableAngle)?;
    let angle_deg = parse_angle(angle_text)?;

    let mut stops = GradientStops::new();
    let mut previous_position = f32::NEG_INFINITY;
    for argument in arguments {
        let stop = parse_stop(argument)?;
        if stop.position < previous_position {
            return Err(MalformedGradient::DecreasingStop);
        }
        previous_position = stop.position;
        stops.push(stop);
    }
    if stops.is_empty() {
        return Err(MalformedGradient::MissingStops);
    }

    Ok(LinearGradient { angle_deg, stops })
}

/// Parse `<number>deg`.
fn parse_angle(text: &str) -> Result<f32, MalformedGradient> {
    let number_text = text
        .strip_suffix("deg")
        .ok_or(MalformedGradient::UnparsableAngle)?;
    number_text
        .trim()
        .parse::<f32>()
        .map_err(|_| MalformedGradient::UnparsableAngle)
}

/// Parse `<color> <number>%`.
fn parse_stop(text: &str) -> Result<ColorStop, MalformedGradient> {
    let (color_text, position_text) = text
        .rsplit_once(char::is_whitespace)
        .ok_or(MalformedGradient::UnparsableStop)?;
    let percent_text = position_text
        .strip_suffix('%')
        .ok_or(MalformedGradient::UnparsableStop)?;
    let position = percent_text
        .trim()
        .parse::<f32>()
        .map_err(|_| MalformedGradient::UnparsableStop)?;
    let color = parse_css_color(color_text).ok_or(MalformedGradient::UnparsableColor)?;
    Ok(ColorStop { color, position })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the reference gradient does not parse to its exact parts.
    fn parses_reference_gradient() {
        let gradient = parse_linear_gradient("linear-gradient(30deg, blue 10%, yellow 40%, red 50%)")
            .expect("reference gradient parses");
        assert!((gradient.angle_deg - 30.0).abs() < 0.001);
        let positions: Vec<f32> = gradient.stops.iter().map(|stop| stop.position).collect();
        assert_eq!(positions, vec![10.0, 40.0, 50.0]);
        assert_eq!(gradient.stops[0].color, Rgba::opaque(0, 0, 255));
        assert_eq!(gradient.stops[1].color, Rgba::opaque(255, 255, 0));
        assert_eq!(gradient.stops[2].color, Rgba::opaque(255, 0, 0));
    }

    #[test]
    /// # Panics
    /// Panics if a trailing semicolon breaks parsing.
    fn tolerates_trailing_semicolon() {
        let gradient =
            parse_linear_gradient("linear-gradient(30deg, blue 10%, yellow 40%, red 50%);")
                .expect("trailing semicolon tolerated");
        assert_eq!(gradient.stops.len(), 3);
    }

    #[test]
    /// # Panics
    /// Panics if a non-numeric angle is accepted.
    fn rejects_non_numeric_angle() {
        assert_eq!(
            parse_linear_gradient("linear-gradient(sidewaysdeg, blue 10%)"),
            Err(MalformedGradient::UnparsableAngle)
        );
        assert_eq!(
            parse_linear_gradient("linear-gradient(to right, blue 10%)"),
            Err(MalformedGradient::UnparsableAngle)
        );
    }

    #[test]
    /// # Panics
    /// Panics if decreasing stops are accepted.
    fn rejects_decreasing_stops() {
        assert_eq!(
            parse_linear_gradient("linear-gradient(30deg, blue 40%, yellow 10%)"),
            Err(MalformedGradient::DecreasingStop)
        );
    }

    #[test]
    /// # Panics
    /// Panics if equal adjacent stops are rejected (non-decreasing allows
    /// equality).
    fn accepts_equal_adjacent_stops() {
        let gradient = parse_linear_gradient("linear-gradient(90deg, blue 40%, yellow 40%)")
            .expect("equal stops are legal");
        assert_eq!(gradient.stops.len(), 2);
    }

    #[test]
    /// # Panics
    /// Panics if bad stop grammar or colors pass.
    fn rejects_bad_stops() {
        assert_eq!(
            parse_linear_gradient("linear-gradient(30deg, blue)"),
            Err(MalformedGradient::UnparsableStop)
        );
        assert_eq!(
            parse_linear_gradient("linear-gradient(30deg, blurple 10%)"),
            Err(MalformedGradient::UnparsableColor)
        );
        assert_eq!(
            parse_linear_gradient("linear-gradient(30deg)"),
            Err(MalformedGradient::MissingStops)
        );
    }

    #[test]
    /// # Panics
    /// Panics if non-gradient text is accepted.
    fn rejects_non_gradient_text() {
        assert_eq!(
            parse_linear_gradient("radial-gradient(circle, blue 10%)"),
            Err(MalformedGradient::NotAGradientCall)
        );
        assert!(!is_gradient_text("defaultSource.jpg"));
        assert!(is_gradient_text("  linear-gradient(0deg, red 0%)"));
    }
}
