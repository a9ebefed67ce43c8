//! Property-based tests for dermtui
//!
//! Uses proptest to verify invariants:
//! - Enum string round trips (parse → to_string → parse)
//! - Recommendation length law
//! - Selection toggle involution
//! - Routine partition stability

use proptest::prelude::*;

use dermtui::catalog::{all_products, recommend, Product};
use dermtui::quiz::{QuestionId, QuizState};
use dermtui::routine::Routine;
use dermtui::selection::Selection;
use dermtui::types::{
    AgeGroup, Category, Concern, Lifestyle, RoutineHabit, Sensitivity, SkinType,
};
use dermtui::SkinProfile;

// =============================================================================
// Enum Property Tests
// =============================================================================

fn skin_type_strategy() -> impl Strategy<Value = SkinType> {
    prop_oneof![
        Just(SkinType::Oily),
        Just(SkinType::Dry),
        Just(SkinType::Combination),
        Just(SkinType::Normal),
        Just(SkinType::Sensitive),
    ]
}

fn concern_strategy() -> impl Strategy<Value = Concern> {
    prop_oneof![
        Just(Concern::Acne),
        Just(Concern::Aging),
        Just(Concern::Pigmentation),
        Just(Concern::Dullness),
        Just(Concern::Pores),
        Just(Concern::Dryness),
    ]
}

fn age_group_strategy() -> impl Strategy<Value = AgeGroup> {
    prop_oneof![
        Just(AgeGroup::From18To21),
        Just(AgeGroup::From22To25),
        Just(AgeGroup::From26To30),
        Just(AgeGroup::Over30),
    ]
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Cleanser),
        Just(Category::Serum),
        Just(Category::Treatment),
        Just(Category::Moisturizer),
        Just(Category::Sunscreen),
    ]
}

proptest! {
    /// SkinType: to_string → parse round trip is identity
    #[test]
    fn skin_type_roundtrip(skin_type in skin_type_strategy()) {
        let s = skin_type.to_string();
        let parsed: SkinType = s.parse().expect("should parse");
        prop_assert_eq!(skin_type, parsed);
    }

    /// Concern: to_string → parse round trip is identity
    #[test]
    fn concern_roundtrip(concern in concern_strategy()) {
        let s = concern.to_string();
        let parsed: Concern = s.parse().expect("should parse");
        prop_assert_eq!(concern, parsed);
    }

    /// AgeGroup: to_string → parse round trip is identity
    #[test]
    fn age_group_roundtrip(age in age_group_strategy()) {
        let s = age.to_string();
        let parsed: AgeGroup = s.parse().expect("should parse");
        prop_assert_eq!(age, parsed);
    }

    /// Category: rank is a permutation index into the precedence table
    #[test]
    fn category_rank_is_bounded(category in category_strategy()) {
        prop_assert!(category.routine_rank() < 5);
    }
}

// =============================================================================
// Recommendation Property Tests
// =============================================================================

fn all_concerns() -> Vec<Concern> {
    vec![
        Concern::Acne,
        Concern::Aging,
        Concern::Pigmentation,
        Concern::Dullness,
        Concern::Pores,
        Concern::Dryness,
    ]
}

fn profile_with(concerns: Vec<Concern>) -> SkinProfile {
    SkinProfile {
        skin_type: SkinType::Normal,
        concerns,
        age: AgeGroup::From22To25,
        lifestyle: Lifestyle::Moderate,
        current_routine: RoutineHabit::Basic,
        sensitivity: Sensitivity::Low,
    }
}

proptest! {
    /// Output length is 4 plus the number of rule-bearing concerns present.
    #[test]
    fn recommend_length_law(concerns in prop::sample::subsequence(all_concerns(), 0..=6)) {
        let rule_hits = concerns
            .iter()
            .filter(|c| matches!(c, Concern::Acne | Concern::Aging | Concern::Pigmentation))
            .count();
        let products = recommend(&profile_with(concerns));
        prop_assert_eq!(products.len(), 4 + rule_hits);
    }

    /// Same profile always produces the identical output sequence.
    #[test]
    fn recommend_is_deterministic(concerns in prop::sample::subsequence(all_concerns(), 0..=6)) {
        let profile = profile_with(concerns);
        prop_assert_eq!(recommend(&profile), recommend(&profile));
    }

    /// The first four products are always the base set, in order.
    #[test]
    fn recommend_base_prefix_is_fixed(concerns in prop::sample::subsequence(all_concerns(), 0..=6)) {
        let products = recommend(&profile_with(concerns));
        let ids: Vec<&str> = products.iter().take(4).map(|p| p.id).collect();
        prop_assert_eq!(ids, vec!["cleanser-1", "serum-1", "moisturizer-1", "sunscreen-1"]);
    }
}

// =============================================================================
// Selection Property Tests
// =============================================================================

fn catalog_vec() -> Vec<Product> {
    all_products().copied().collect()
}

proptest! {
    /// Toggling any product twice restores membership and total price.
    #[test]
    fn toggle_is_involution(
        initial in prop::sample::subsequence(catalog_vec(), 0..=7),
        extra in prop::sample::select(catalog_vec()),
    ) {
        let mut selection = Selection::new();
        for product in initial {
            selection.toggle(product);
        }
        let was_selected = selection.is_selected(extra.id);
        let total_before = selection.total();
        let len_before = selection.len();

        selection.toggle(extra);
        selection.toggle(extra);

        prop_assert_eq!(selection.is_selected(extra.id), was_selected);
        prop_assert_eq!(selection.total(), total_before);
        prop_assert_eq!(selection.len(), len_before);
    }

    /// The total is always the sum of the members' prices.
    #[test]
    fn total_matches_members(products in prop::sample::subsequence(catalog_vec(), 0..=7)) {
        let mut selection = Selection::new();
        for product in products {
            selection.toggle(product);
        }
        let expected: u32 = selection.members().iter().map(|p| p.price).sum();
        prop_assert_eq!(selection.total(), expected);
    }
}

// =============================================================================
// Routine Property Tests
// =============================================================================

fn assert_stable_partition(input: &[Product], output: &[Product]) -> Result<(), TestCaseError> {
    // Ranks must be non-decreasing.
    for pair in output.windows(2) {
        prop_assert!(pair[0].category.routine_rank() <= pair[1].category.routine_rank());
    }
    // Equal-rank products must keep their input order.
    for (i, a) in output.iter().enumerate() {
        for b in &output[i + 1..] {
            if a.category.routine_rank() == b.category.routine_rank() {
                let a_pos = input.iter().position(|p| p.id == a.id).unwrap();
                let b_pos = input.iter().position(|p| p.id == b.id).unwrap();
                prop_assert!(a_pos < b_pos);
            }
        }
    }
    Ok(())
}

proptest! {
    /// Partition is stable: equal-rank products keep selection order, and
    /// every selected product lands exactly where its usage markers say.
    #[test]
    fn partition_is_stable_and_complete(products in prop::sample::subsequence(catalog_vec(), 0..=7)) {
        let mut selection = Selection::new();
        for product in products {
            selection.toggle(product);
        }

        let routine = Routine::partition(&selection);
        assert_stable_partition(selection.members(), &routine.morning)?;
        assert_stable_partition(selection.members(), &routine.evening)?;

        for product in selection.members() {
            prop_assert_eq!(
                routine.morning.iter().any(|p| p.id == product.id),
                product.for_morning()
            );
            prop_assert_eq!(
                routine.evening.iter().any(|p| p.id == product.id),
                product.for_evening()
            );
        }
    }
}

// =============================================================================
// Quiz Property Tests
// =============================================================================

proptest! {
    /// On the multi-select question, can_advance is true iff the toggled
    /// set is non-empty, for any toggle sequence.
    #[test]
    fn can_advance_iff_concerns_nonempty(
        toggles in prop::collection::vec(concern_strategy(), 0..20)
    ) {
        let mut quiz = QuizState::new();
        quiz.answer(QuestionId::SkinType, "normal");
        quiz.advance();

        let mut expected: Vec<Concern> = Vec::new();
        for concern in toggles {
            quiz.answer(QuestionId::Concerns, &concern.to_string());
            if let Some(pos) = expected.iter().position(|c| *c == concern) {
                expected.remove(pos);
            } else {
                expected.push(concern);
            }
        }

        prop_assert_eq!(quiz.can_advance(), !expected.is_empty());
    }
}
