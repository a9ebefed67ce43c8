//! Morning/evening routine derived from a selection
//!
//! A pure partition over the selected products: usage markers decide which
//! list a product lands in, and a stable sort by category rank decides the
//! application order within each list. The routine is recomputed in full
//! whenever the selection changes.

use crate::catalog::Product;
use crate::selection::Selection;
use serde::Serialize;

/// Display estimate for a morning routine, in minutes.
const MORNING_MINUTES: u32 = 5;
/// Display estimate for an evening routine, in minutes.
const EVENING_MINUTES: u32 = 7;

/// The AM/PM partition of a selection, in application order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Routine {
    pub morning: Vec<Product>,
    pub evening: Vec<Product>,
}

impl Routine {
    /// Partition a selection into morning and evening lists.
    ///
    /// A product with both usage markers appears in both lists; one with
    /// neither appears in neither. Each list is stable-sorted by
    /// [`Category::routine_rank`](crate::types::Category::routine_rank),
    /// so equal-rank products keep their selection order.
    pub fn partition(selection: &Selection) -> Self {
        let mut morning = Vec::new();
        let mut evening = Vec::new();

        for product in selection.members() {
            if product.for_morning() {
                morning.push(*product);
            }
            if product.for_evening() {
                evening.push(*product);
            }
        }

        // Vec::sort_by_key is stable, which the tie rule depends on.
        morning.sort_by_key(|p| p.category.routine_rank());
        evening.sort_by_key(|p| p.category.routine_rank());

        Self { morning, evening }
    }

    /// Rough duration estimate for the morning routine.
    pub fn morning_minutes(&self) -> u32 {
        if self.morning.is_empty() { 0 } else { MORNING_MINUTES }
    }

    /// Rough duration estimate for the evening routine.
    pub fn evening_minutes(&self) -> u32 {
        if self.evening.is_empty() { 0 } else { EVENING_MINUTES }
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.evening.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{base_products, concern_rules};

    fn product(id: &str) -> Product {
        base_products()
            .iter()
            .chain(concern_rules().iter().map(|(_, p)| p))
            .find(|p| p.id == id)
            .copied()
            .unwrap_or_else(|| panic!("unknown product id {id}"))
    }

    #[test]
    fn test_sunscreen_and_cleanser_scenario() {
        let mut selection = Selection::new();
        // Sunscreen is AM only; cleanser is AM & PM.
        selection.toggle(product("sunscreen-1"));
        selection.toggle(product("cleanser-1"));

        let routine = Routine::partition(&selection);

        let morning: Vec<&str> = routine.morning.iter().map(|p| p.id).collect();
        let evening: Vec<&str> = routine.evening.iter().map(|p| p.id).collect();
        // Cleanser ranks before sunscreen despite later selection.
        assert_eq!(morning, ["cleanser-1", "sunscreen-1"]);
        assert_eq!(evening, ["cleanser-1"]);
    }

    #[test]
    fn test_dual_usage_product_lands_in_both_lists() {
        let mut selection = Selection::new();
        selection.toggle(product("moisturizer-1"));

        let routine = Routine::partition(&selection);
        assert_eq!(routine.morning.len(), 1);
        assert_eq!(routine.evening.len(), 1);
    }

    #[test]
    fn test_evening_only_product_skips_morning() {
        let mut selection = Selection::new();
        selection.toggle(product("treatment-1"));

        let routine = Routine::partition(&selection);
        assert!(routine.morning.is_empty());
        assert_eq!(routine.evening[0].id, "treatment-1");
    }

    #[test]
    fn test_partition_sort_is_stable_for_equal_rank() {
        let mut selection = Selection::new();
        // Three serums, all rank 1: selection order must survive the sort.
        selection.toggle(product("serum-2"));
        selection.toggle(product("serum-1"));

        let routine = Routine::partition(&selection);
        let evening: Vec<&str> = routine.evening.iter().map(|p| p.id).collect();
        assert_eq!(evening, ["serum-2", "serum-1"]);
    }

    #[test]
    fn test_full_selection_is_ordered_by_category() {
        let mut selection = Selection::new();
        for p in base_products().iter().rev() {
            selection.toggle(*p);
        }

        let routine = Routine::partition(&selection);
        let ranks: Vec<usize> = routine
            .morning
            .iter()
            .map(|p| p.category.routine_rank())
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_empty_selection_has_empty_routine() {
        let routine = Routine::partition(&Selection::new());
        assert!(routine.is_empty());
        assert_eq!(routine.morning_minutes(), 0);
        assert_eq!(routine.evening_minutes(), 0);
    }

    #[test]
    fn test_duration_estimates() {
        let mut selection = Selection::new();
        selection.toggle(product("cleanser-1"));
        let routine = Routine::partition(&selection);
        assert_eq!(routine.morning_minutes(), 5);
        assert_eq!(routine.evening_minutes(), 7);
    }
}
