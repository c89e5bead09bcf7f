//! Parse a resolved property map into a [`ComputedStyle`].
//!
//! Interpretation happens here, not at merge time: the resolver passes every
//! key through untouched, and this step reads the keys the engine
//! understands. Unknown keys are ignored; malformed values degrade to the
//! property default and are reported as issues, never as failures.

use crate::color::{Rgba, parse_css_color};
use crate::fragment::ResolvedStyle;
use crate::model::{
    AlignContent, AlignItems, AlignSelf, BorderStyle, ComputedStyle, CornerValues, Dimension,
    Display, EdgeColors, EdgeValues, FlexDirection, FlexWrap, JustifyContent, Overflow, Position,
};
use crate::value::StyleValue;
use log::warn;

/// Why a property value was rejected or adjusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleIssueKind {
    /// The value was not a number or numeric text.
    InvalidNumber,
    /// A length that must be non-negative was negative; clamped to zero.
    NegativeLength,
    /// The keyword is not one the property accepts; default kept.
    UnknownKeyword,
    /// The color text did not parse; property left unset.
    InvalidColor,
}

/// A non-fatal diagnostic from style computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleIssue {
    /// The camelCase property name the issue belongs to.
    pub property: String,
    pub kind: StyleIssueKind,
}

/// Accumulates the typed style and any diagnostics while reading keys.
struct Collector<'resolved> {
    resolved: &'resolved ResolvedStyle,
    issues: Vec<StyleIssue>,
}

impl Collector<'_> {
    fn report(&mut self, property: &str, kind: StyleIssueKind) {
        warn!(
            target: "trellis::style::compute",
            "property {property:?} rejected: {kind:?}"
        );
        self.issues.push(StyleIssue {
            property: property.to_owned(),
            kind,
        });
    }

    /// A raw f32 from a number or numeric text, no sign policy.
    fn number(&mut self, property: &str) -> Option<f32> {
        let value = self.resolved.get(property)?;
        let parsed = match value {
            StyleValue::Number(number) => Some(*number as f32),
            StyleValue::Text(text) => text.trim().parse::<f32>().ok(),
            StyleValue::Truth(_) | StyleValue::Record(_) => None,
        };
        if parsed.is_none() {
            self.report(property, StyleIssueKind::InvalidNumber);
        }
        parsed
    }

    /// A length that may be px or percent text; negative values allowed.
    fn length(&mut self, property: &str) -> Option<Dimension> {
        let value = self.resolved.get(property)?;
        let parsed = parse_dimension(value);
        if parsed.is_none() {
            self.report(property, StyleIssueKind::InvalidNumber);
        }
        parsed
    }

    /// A length that must be non-negative; negatives clamp to zero.
    fn size(&mut self, property: &str) -> Option<Dimension> {
        let dimension = self.length(property)?;
        let negative = match dimension {
            Dimension::Px(px) => px < 0.0,
            Dimension::Percent(fraction) => fraction < 0.0,
        };
        if negative {
            self.report(property, StyleIssueKind::NegativeLength);
            return Some(match dimension {
                Dimension::Px(_) => Dimension::Px(0.0),
                Dimension::Percent(_) => Dimension::Percent(0.0),
            });
        }
        Some(dimension)
    }

    /// A non-negative px value (percent not accepted), clamped at zero.
    fn px_clamped(&mut self, property: &str) -> Option<f32> {
        let parsed = self.number(property)?;
        if parsed < 0.0 {
            self.report(property, StyleIssueKind::NegativeLength);
            return Some(0.0);
        }
        Some(parsed)
    }

    /// A keyword parsed by the property's accepted set.
    fn keyword<Keyword>(
        &mut self,
        property: &str,
        parse: fn(&str) -> Option<Keyword>,
    ) -> Option<Keyword> {
        let value = self.resolved.get(property)?;
        let Some(text) = value.as_text() else {
            self.report(property, StyleIssueKind::UnknownKeyword);
            return None;
        };
        let parsed = parse(text.trim());
        if parsed.is_none() {
            self.report(property, StyleIssueKind::UnknownKeyword);
        }
        parsed
    }

    fn color(&mut self, property: &str) -> Option<Rgba> {
        let value = self.resolved.get(property)?;
        let parsed = value.as_text().and_then(parse_css_color);
        if parsed.is_none() {
            self.report(property, StyleIssueKind::InvalidColor);
        }
        parsed
    }

    fn text(&self, property: &str) -> Option<String> {
        self.resolved
            .get(property)
            .and_then(StyleValue::as_text)
            .map(ToOwned::to_owned)
    }
}

/// Parse one value as a dimension: bare numbers and numeric text are px,
/// `"NN%"` is a fraction of the containing block.
fn parse_dimension(value: &StyleValue) -> Option<Dimension> {
    match value {
        StyleValue::Number(number) => Some(Dimension::Px(*number as f32)),
        StyleValue::Text(text) => {
            let trimmed = text.trim();
            if let Some(percent_text) = trimmed.strip_suffix('%') {
                let fraction = percent_text.trim().parse::<f32>().ok()? / 100.0;
                Some(Dimension::Percent(fraction))
            } else {
                trimmed.parse::<f32>().ok().map(Dimension::Px)
            }
        }
        StyleValue::Truth(_) | StyleValue::Record(_) => None,
    }
}

/// Compute the typed style from a resolved property map.
///
/// Shorthands apply first, then axis shorthands, then per-edge keys, so the
/// most specific declaration always wins regardless of map ordering
/// (`marginTop` beats `marginVertical` beats `margin`).
pub fn compute(resolved: &ResolvedStyle) -> (ComputedStyle, Vec<StyleIssue>) {
    let mut collector = Collector {
        resolved,
        issues: Vec::new(),
    };
    let mut style = ComputedStyle::default();

    compute_dimensions(&mut collector, &mut style);
    compute_spacing(&mut collector, &mut style);
    compute_borders(&mut collector, &mut style);
    compute_fills(&mut collector, &mut style);
    compute_flex(&mut collector, &mut style);
    compute_positioning(&mut collector, &mut style);

    (style, collector.issues)
}

fn compute_dimensions(collector: &mut Collector<'_>, style: &mut ComputedStyle) {
    style.width = collector.size("width");
    style.height = collector.size("height");
    style.min_width = collector.size("minWidth");
    style.min_height = collector.size("minHeight");
    style.max_width = collector.size("maxWidth");
    style.max_height = collector.size("maxHeight");
}

fn compute_spacing(collector: &mut Collector<'_>, style: &mut ComputedStyle) {
    // Margins may be negative.
    if let Some(all) = collector.number("margin") {
        style.margin = EdgeValues::uniform(all);
    }
    if let Some(vertical) = collector.number("marginVertical") {
        style.margin.top = vertical;
        style.margin.bottom = vertical;
    }
    if let Some(horizontal) = collector.number("marginHorizontal") {
        style.margin.left = horizontal;
        style.margin.right = horizontal;
    }
    if let Some(top) = collector.number("marginTop") {
        style.margin.top = top;
    }
    if let Some(right) = collector.number("marginRight") {
        style.margin.right = right;
    }
    if let Some(bottom) = collector.number("marginBottom") {
        style.margin.bottom = bottom;
    }
    if let Some(left) = collector.number("marginLeft") {
        style.margin.left = left;
    }

    // Padding clamps at zero.
    if let Some(all) = collector.px_clamped("padding") {
        style.padding = EdgeValues::uniform(all);
    }
    if let Some(vertical) = collector.px_clamped("paddingVertical") {
        style.padding.top = vertical;
        style.padding.bottom = vertical;
    }
    if let Some(horizontal) = collector.px_clamped("paddingHorizontal") {
        style.padding.left = horizontal;
        style.padding.right = horizontal;
    }
    if let Some(top) = collector.px_clamped("paddingTop") {
        style.padding.top = top;
    }
    if let Some(right) = collector.px_clamped("paddingRight") {
        style.padding.right = right;
    }
    if let Some(bottom) = collector.px_clamped("paddingBottom") {
        style.padding.bottom = bottom;
    }
    if let Some(left) = collector.px_clamped("paddingLeft") {
        style.padding.left = left;
    }
}

fn compute_borders(collector: &mut Collector<'_>, style: &mut ComputedStyle) {
    if let Some(all) = collector.px_clamped("borderWidth") {
        style.border_width = EdgeValues::uniform(all);
    }
    if let Some(top) = collector.px_clamped("borderTopWidth") {
        style.border_width.top = top;
    }
    if let Some(right) = collector.px_clamped("borderRightWidth") {
        style.border_width.right = right;
    }
    if let Some(bottom) = collector.px_clamped("borderBottomWidth") {
        style.border_width.bottom = bottom;
    }
    if let Some(left) = collector.px_clamped("borderLeftWidth") {
        style.border_width.left = left;
    }

    if let Some(border_style) = collector.keyword("borderStyle", BorderStyle::from_keyword) {
        style.border_style = border_style;
    }

    if collector.resolved.get("borderColor").is_some() {
        style.border_color = EdgeColors::uniform(collector.color("borderColor"));
    }
    if collector.resolved.get("borderTopColor").is_some() {
        style.border_color.top = collector.color("borderTopColor");
    }
    if collector.resolved.get("borderRightColor").is_some() {
        style.border_color.right = collector.color("borderRightColor");
    }
    if collector.resolved.get("borderBottomColor").is_some() {
        style.border_color.bottom = collector.color("borderBottomColor");
    }
    if collector.resolved.get("borderLeftColor").is_some() {
        style.border_color.left = collector.color("borderLeftColor");
    }

    if let Some(all) = collector.px_clamped("borderRadius") {
        style.border_radius = CornerValues::uniform(all);
    }
    if let Some(radius) = collector.px_clamped("borderTopLeftRadius") {
        style.border_radius.top_left = radius;
    }
    if let Some(radius) = collector.px_clamped("borderTopRightRadius") {
        style.border_radius.top_right = radius;
    }
    if let Some(radius) = collector.px_clamped("borderBottomRightRadius") {
        style.border_radius.bottom_right = radius;
    }
    if let Some(radius) = collector.px_clamped("borderBottomLeftRadius") {
        style.border_radius.bottom_left = radius;
    }
}

fn compute_fills(collector: &mut Collector<'_>, style: &mut ComputedStyle) {
    if collector.resolved.get("backgroundColor").is_some() {
        style.background_color = collector.color("backgroundColor");
    }
    style.background_image = collector.text("backgroundImage");
    if let Some(opacity) = collector.number("opacity") {
        style.opacity = Some(opacity.clamp(0.0, 1.0));
    }
}

fn compute_flex(collector: &mut Collector<'_>, style: &mut ComputedStyle) {
    if let Some(direction) = collector.keyword("flexDirection", FlexDirection::from_keyword) {
        style.flex_direction = direction;
    }
    if let Some(wrap) = collector.keyword("flexWrap", FlexWrap::from_keyword) {
        style.flex_wrap = wrap;
    }
    if let Some(justify) = collector.keyword("justifyContent", JustifyContent::from_keyword) {
        style.justify_content = justify;
    }
    if let Some(align) = collector.keyword("alignItems", AlignItems::from_keyword) {
        style.align_items = align;
    }
    if let Some(align) = collector.keyword("alignContent", AlignContent::from_keyword) {
        style.align_content = align;
    }
    if let Some(align) = collector.keyword("alignSelf", AlignSelf::from_keyword) {
        style.align_self = align;
    }

    // Numeric `flex` shorthand (Yoga semantics): positive n means
    // grow=n, shrink=1, basis 0; zero means fully rigid; negative means
    // shrink-only.
    if let Some(flex) = collector.number("flex") {
        if flex > 0.0 {
            style.flex_grow = flex;
            style.flex_shrink = 1.0;
            style.flex_basis = Some(Dimension::Px(0.0));
        } else if flex < 0.0 {
            style.flex_grow = 0.0;
            style.flex_shrink = 1.0;
            style.flex_basis = None;
        } else {
            style.flex_grow = 0.0;
            style.flex_shrink = 0.0;
            style.flex_basis = None;
        }
    }
    if let Some(grow) = collector.number("flexGrow") {
        style.flex_grow = grow.max(0.0);
    }
    if let Some(shrink) = collector.number("flexShrink") {
        style.flex_shrink = shrink.max(0.0);
    }
    if collector.resolved.get("flexBasis").is_some() {
        style.flex_basis = collector.size("flexBasis");
    }
}

fn compute_positioning(collector: &mut Collector<'_>, style: &mut ComputedStyle) {
    if let Some(position) = collector.keyword("position", Position::from_keyword) {
        style.position = position;
    }
    style.top = collector.length("top");
    style.right = collector.length("right");
    style.bottom = collector.length("bottom");
    style.left = collector.length("left");

    if let Some(overflow) = collector.keyword("overflow", Overflow::from_keyword) {
        style.overflow = overflow;
    }
    if let Some(display) = collector.keyword("display", Display::from_keyword) {
        style.display = display;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{StyleFragment, resolve};

    fn computed(fragment: StyleFragment) -> (ComputedStyle, Vec<StyleIssue>) {
        compute(&resolve(&[Some(fragment)]))
    }

    #[test]
    /// # Panics
    /// Panics if plain dimensions and colors do not land in the typed style.
    fn reads_dimensions_and_colors() {
        let (style, issues) = computed(
            StyleFragment::new()
                .with("width", 160)
                .with("height", 80)
                .with("backgroundColor", "#4c9afa"),
        );
        assert!(issues.is_empty());
        assert_eq!(style.width, Some(Dimension::Px(160.0)));
        assert_eq!(style.height, Some(Dimension::Px(80.0)));
        assert_eq!(style.background_color, Some(Rgba::opaque(76, 154, 250)));
    }

    #[test]
    /// # Panics
    /// Panics if a negative size is not clamped and reported.
    fn negative_size_clamps_to_zero() {
        let (style, issues) = computed(StyleFragment::new().with("width", -40));
        assert_eq!(style.width, Some(Dimension::Px(0.0)));
        assert_eq!(
            issues,
            vec![StyleIssue {
                property: "width".to_owned(),
                kind: StyleIssueKind::NegativeLength,
            }]
        );
    }

    #[test]
    /// # Panics
    /// Panics if percent text does not parse as a fraction.
    fn percent_text_parses_as_fraction() {
        let (style, issues) = computed(StyleFragment::new().with("width", "50%"));
        assert!(issues.is_empty());
        assert_eq!(style.width, Some(Dimension::Percent(0.5)));
    }

    #[test]
    /// # Panics
    /// Panics if axis and per-edge margins apply in the wrong precedence.
    fn margin_shorthand_precedence() {
        let (style, issues) = computed(
            StyleFragment::new()
                .with("margin", 4)
                .with("marginVertical", 10)
                .with("marginTop", 20),
        );
        assert!(issues.is_empty());
        assert!((style.margin.top - 20.0).abs() < f32::EPSILON);
        assert!((style.margin.bottom - 10.0).abs() < f32::EPSILON);
        assert!((style.margin.left - 4.0).abs() < f32::EPSILON);
        assert!((style.margin.right - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if the numeric flex shorthand or overrides misbehave.
    fn flex_shorthand_and_overrides() {
        let (style, _) = computed(StyleFragment::new().with("flex", 2));
        assert!((style.flex_grow - 2.0).abs() < f32::EPSILON);
        assert!((style.flex_shrink - 1.0).abs() < f32::EPSILON);
        assert_eq!(style.flex_basis, Some(Dimension::Px(0.0)));

        let (style, _) = computed(
            StyleFragment::new()
                .with("flex", 2)
                .with("flexGrow", 3)
                .with("flexBasis", 40),
        );
        assert!((style.flex_grow - 3.0).abs() < f32::EPSILON);
        assert_eq!(style.flex_basis, Some(Dimension::Px(40.0)));
    }

    #[test]
    /// # Panics
    /// Panics if keyword properties fall back incorrectly.
    fn unknown_keyword_keeps_default_and_reports() {
        let (style, issues) = computed(
            StyleFragment::new()
                .with("flexDirection", "row")
                .with("justifyContent", "sideways"),
        );
        assert_eq!(style.flex_direction, FlexDirection::Row);
        assert_eq!(style.justify_content, JustifyContent::FlexStart);
        assert_eq!(
            issues,
            vec![StyleIssue {
                property: "justifyContent".to_owned(),
                kind: StyleIssueKind::UnknownKeyword,
            }]
        );
    }

    #[test]
    /// # Panics
    /// Panics if opacity is not clamped into the unit interval.
    fn opacity_clamps_to_unit_interval() {
        let (style, _) = computed(StyleFragment::new().with("opacity", 1.5));
        assert_eq!(style.opacity, Some(1.0));
        let (style, _) = computed(StyleFragment::new().with("opacity", 0.5));
        assert_eq!(style.opacity, Some(0.5));
    }

    #[test]
    /// # Panics
    /// Panics if unknown properties leak into diagnostics.
    fn unknown_properties_are_ignored() {
        let (_, issues) = computed(StyleFragment::new().with("collapsable", false));
        assert!(issues.is_empty());
    }

    #[test]
    /// # Panics
    /// Panics if border edge overrides do not win over the uniform values.
    fn border_edge_overrides() {
        let (style, issues) = computed(
            StyleFragment::new()
                .with("borderWidth", 1)
                .with("borderTopWidth", 3)
                .with("borderColor", "#e0e0e0")
                .with("borderStyle", "solid"),
        );
        assert!(issues.is_empty());
        assert!((style.border_width.top - 3.0).abs() < f32::EPSILON);
        assert!((style.border_width.left - 1.0).abs() < f32::EPSILON);
        assert_eq!(style.border_style, BorderStyle::Solid);
        assert_eq!(style.border_color.top, Some(Rgba::opaque(224, 224, 224)));
    }
}
