//! Layout-unit quantization.
//!
//! Placements snap to 1/64 px, the sub-pixel layout unit browsers use, so
//! accumulated offsets stay stable across identical runs.

/// Quantize a px value to the nearest 1/64 px.
#[inline]
pub fn quantize_layout(value: f32) -> f32 {
    (value * 64.0).round() / 64.0
}

/// Quantize a px value downward to 1/64 px. Used for between-item spacing so
/// rounding never accumulates past the container's far edge.
#[inline]
pub fn quantize_layout_floor(value: f32) -> f32 {
    (value * 64.0).floor() / 64.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if quantization does not snap to 1/64 px.
    fn snaps_to_layout_units() {
        assert!((quantize_layout(8.328_125) - 8.328_125).abs() < f32::EPSILON);
        assert!((quantize_layout(10.003) - 10.0).abs() < 0.01);
        assert!(quantize_layout_floor(9.999) <= 9.999);
    }
}
