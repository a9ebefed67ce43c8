//! Type-safe domain types for dermtui
//!
//! This module replaces stringly-typed quiz answers with proper Rust enums
//! that provide compile-time validation and exhaustive matching. The
//! serialize strings match the quiz option values exactly, so quiz input
//! and profile JSON files share one vocabulary.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Skin type as determined by the first quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    #[default]
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "oily")]
    Oily,
    #[strum(serialize = "dry")]
    Dry,
    #[strum(serialize = "combination")]
    Combination,
    #[strum(serialize = "sensitive")]
    Sensitive,
}

impl SkinType {
    /// Display headline for the results screen.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Oily => "Oily Skin",
            Self::Dry => "Dry Skin",
            Self::Combination => "Combination Skin",
            Self::Normal => "Normal Skin",
            Self::Sensitive => "Sensitive Skin",
        }
    }

    /// One-line summary shown under the headline.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Oily => "Your skin produces excess sebum, leading to shine and enlarged pores.",
            Self::Dry => "Your skin lacks moisture and may feel tight or appear flaky.",
            Self::Combination => "Your T-zone is oily while other areas are normal to dry.",
            Self::Normal => "Your skin is well-balanced with minimal concerns.",
            Self::Sensitive => "Your skin reacts easily to products and environmental factors.",
        }
    }

    /// Three care tips for this skin type.
    pub fn care_tips(&self) -> [&'static str; 3] {
        match self {
            Self::Oily => [
                "Use gentle, non-comedogenic products",
                "Include salicylic acid for pore care",
                "Don't skip moisturizer",
            ],
            Self::Dry => [
                "Focus on hydrating ingredients",
                "Use cream-based moisturizers",
                "Avoid harsh cleansers",
            ],
            Self::Combination => [
                "Use different products for different areas",
                "Balance oil control and hydration",
                "Gentle exfoliation",
            ],
            Self::Normal => [
                "Maintain with gentle, consistent routine",
                "Focus on prevention",
                "Use antioxidants",
            ],
            Self::Sensitive => [
                "Patch test new products",
                "Use fragrance-free formulas",
                "Introduce actives slowly",
            ],
        }
    }
}

/// Skin concern selected in the multi-select quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Concern {
    #[strum(serialize = "acne")]
    Acne,
    #[strum(serialize = "aging")]
    Aging,
    #[strum(serialize = "pigmentation")]
    Pigmentation,
    #[strum(serialize = "dullness")]
    Dullness,
    #[strum(serialize = "pores")]
    Pores,
    #[strum(serialize = "dryness")]
    Dryness,
}

/// Age bucket selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum AgeGroup {
    #[default]
    #[strum(serialize = "18-21")]
    #[serde(rename = "18-21")]
    From18To21,
    #[strum(serialize = "22-25")]
    #[serde(rename = "22-25")]
    From22To25,
    #[strum(serialize = "26-30")]
    #[serde(rename = "26-30")]
    From26To30,
    #[strum(serialize = "30+")]
    #[serde(rename = "30+")]
    Over30,
}

/// Lifestyle selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
    #[default]
    #[strum(serialize = "moderate")]
    Moderate,
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "sedentary")]
    Sedentary,
    #[strum(serialize = "variable")]
    Variable,
}

/// Current skincare routine habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoutineHabit {
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "minimal")]
    Minimal,
    #[strum(serialize = "basic")]
    Basic,
    #[strum(serialize = "extensive")]
    Extensive,
}

/// Skin sensitivity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "high")]
    High,
    #[strum(serialize = "moderate")]
    Moderate,
    #[strum(serialize = "low")]
    Low,
}

/// Product category
///
/// The variant order doubles as the application order within a routine:
/// cleanse first, protect last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cleanser,
    Serum,
    Treatment,
    Moisturizer,
    Sunscreen,
}

impl Category {
    /// Rank of this category in the fixed routine application order.
    ///
    /// Used as the stable-sort key when partitioning a selection into
    /// morning and evening lists.
    pub fn routine_rank(&self) -> usize {
        match self {
            Self::Cleanser => 0,
            Self::Serum => 1,
            Self::Treatment => 2,
            Self::Moisturizer => 3,
            Self::Sunscreen => 4,
        }
    }

    /// How a product of this category is applied, shown per routine step.
    pub fn application_note(&self) -> &'static str {
        match self {
            Self::Cleanser => "Massage gently for 30 seconds, rinse with lukewarm water",
            Self::Serum => "Apply 2-3 drops, pat gently into skin",
            Self::Treatment => "Apply a thin layer to affected areas only",
            Self::Moisturizer => "Apply evenly, massage until fully absorbed",
            Self::Sunscreen => "Apply generously 15 minutes before sun exposure",
        }
    }
}
