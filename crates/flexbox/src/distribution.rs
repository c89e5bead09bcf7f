//! Flex grow and shrink distribution.
//!
//! Distributes free space among items by their flex factors with iterative
//! freezing: an item that hits a min/max constraint stops participating and
//! the remainder redistributes among the rest.

use crate::{FlexItem, clamp};

/// Distribute positive free space to items using flex-grow factors.
///
/// `sizes` holds the hypothetical main sizes and is updated in place.
pub fn distribute_grow(free_space: f32, items: &[FlexItem], sizes: &mut [f32]) {
    debug_assert!(free_space >= 0.0, "grow called with negative free space");
    let mut remaining = free_space;
    let mut saturated = vec![false; items.len()];
    // Bounded by item count: each pass freezes at least one item or exits.
    for _ in 0..items.len() {
        let mut sum_grow = 0.0f32;
        for (item, frozen) in items.iter().zip(saturated.iter()) {
            if !*frozen {
                sum_grow += item.flex_grow.max(0.0);
            }
        }
        if sum_grow <= 0.0 || remaining <= 0.0 {
            break;
        }
        let unit = remaining / sum_grow;
        let mut any_saturated = false;
        let mut applied_total = 0.0f32;
        for ((size_slot, item), frozen) in sizes.iter_mut().zip(items).zip(saturated.iter_mut()) {
            if *frozen {
                continue;
            }
            let grown = *size_slot + item.flex_grow.max(0.0) * unit;
            let clamped = clamp(grown, item.min_main, item.max_main);
            applied_total += clamped - *size_slot;
            *size_slot = clamped;
            if item.max_main.is_finite() && (clamped - item.max_main).abs() < f32::EPSILON {
                *frozen = true;
                any_saturated = true;
            }
        }
        remaining -= applied_total;
        if !any_saturated {
            break;
        }
    }
}

/// Distribute negative free space to items using weighted flex-shrink
/// factors (factor × base size), freezing items that bottom out at min.
pub fn distribute_shrink(free_space: f32, items: &[FlexItem], sizes: &mut [f32]) {
    debug_assert!(free_space <= 0.0, "shrink called with positive free space");
    let mut remaining = -free_space;
    let mut frozen = vec![false; items.len()];
    for _ in 0..items.len() {
        let mut sum_weight = 0.0f32;
        for ((size_slot, item), is_frozen) in sizes.iter().zip(items).zip(frozen.iter()) {
            if !*is_frozen {
                sum_weight += size_slot.max(0.0) * item.flex_shrink.max(0.0);
            }
        }
        if sum_weight <= 0.0 || remaining <= 0.0 {
            break;
        }
        let mut any_froze = false;
        let mut applied_total = 0.0f32;
        for ((size_slot, item), frozen_slot) in sizes.iter_mut().zip(items).zip(frozen.iter_mut()) {
            if *frozen_slot {
                continue;
            }
            let weight = size_slot.max(0.0) * item.flex_shrink.max(0.0);
            let shrunk = (*size_slot - remaining * (weight / sum_weight)).max(0.0);
            let clamped = clamp(shrunk, item.min_main, item.max_main);
            applied_total += *size_slot - clamped;
            *size_slot = clamped;
            if (clamped - item.min_main).abs() < f32::EPSILON {
                *frozen_slot = true;
                any_froze = true;
            }
        }
        remaining -= applied_total;
        if !any_froze {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(basis: f32, grow: f32, shrink: f32) -> FlexItem {
        FlexItem {
            flex_basis: basis,
            flex_grow: grow,
            flex_shrink: shrink,
            ..FlexItem::default()
        }
    }

    #[test]
    /// # Panics
    /// Panics if equal grow factors do not split free space evenly.
    fn grow_splits_evenly() {
        let items = vec![item(50.0, 1.0, 1.0), item(50.0, 1.0, 1.0)];
        let mut sizes = vec![50.0, 50.0];
        distribute_grow(100.0, &items, &mut sizes);
        assert!((sizes.iter().sum::<f32>() - 200.0).abs() < 0.001);
        for size in &sizes {
            assert!((size - 100.0).abs() < 0.001);
        }
    }

    #[test]
    /// # Panics
    /// Panics if a max-constrained item does not redistribute its excess.
    fn grow_redistributes_after_saturation() {
        let mut capped = item(50.0, 1.0, 1.0);
        capped.max_main = 60.0;
        let items = vec![capped, item(50.0, 1.0, 1.0)];
        let mut sizes = vec![50.0, 50.0];
        distribute_grow(100.0, &items, &mut sizes);
        assert!((sizes[0] - 60.0).abs() < 0.001);
        assert!((sizes[1] - 140.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if shrink weighting is not proportional to base size.
    fn shrink_is_weighted_by_base() {
        let items = vec![item(120.0, 0.0, 1.0), item(80.0, 0.0, 1.0)];
        let mut sizes = vec![120.0, 80.0];
        distribute_shrink(-40.0, &items, &mut sizes);
        // 120/200 and 80/200 of the 40px deficit.
        assert!((sizes[0] - 96.0).abs() < 0.001);
        assert!((sizes[1] - 64.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if min constraints are violated while shrinking.
    fn shrink_freezes_at_min() {
        let mut floored = item(100.0, 0.0, 1.0);
        floored.min_main = 90.0;
        let items = vec![floored, item(100.0, 0.0, 1.0)];
        let mut sizes = vec![100.0, 100.0];
        distribute_shrink(-60.0, &items, &mut sizes);
        assert!(sizes[0] >= 90.0 - 0.001);
        assert!((sizes.iter().sum::<f32>() - 140.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if zero shrink factors let sizes change.
    fn rigid_items_do_not_shrink() {
        let items = vec![item(100.0, 0.0, 0.0), item(100.0, 0.0, 0.0)];
        let mut sizes = vec![100.0, 100.0];
        distribute_shrink(-50.0, &items, &mut sizes);
        assert!((sizes[0] - 100.0).abs() < 0.001);
        assert!((sizes[1] - 100.0).abs() < 0.001);
    }
}
