//! Static product catalog and recommendation rules
//!
//! The catalog is a fixed set of seven products: four base products that
//! every profile receives, plus three concern-triggered extras. The
//! recommendation logic is an explicit ordered rule table iterated once,
//! which keeps the output order deterministic and testable.

use crate::profile::SkinProfile;
use crate::types::{Category, Concern};
use serde::Serialize;

/// A catalog product.
///
/// All products are static data; uniqueness is by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub ingredients: &'static [&'static str],
    /// Price in whole rupees.
    pub price: u32,
    pub description: &'static str,
    /// Usage marker string containing "AM" and/or "PM".
    pub usage: &'static str,
}

impl Product {
    /// Whether this product belongs in a morning routine.
    pub fn for_morning(&self) -> bool {
        self.usage.contains("AM")
    }

    /// Whether this product belongs in an evening routine.
    pub fn for_evening(&self) -> bool {
        self.usage.contains("PM")
    }
}

const SALICYLIC_CLEANSER: Product = Product {
    id: "cleanser-1",
    name: "Salicylic Acid Cleanser",
    category: Category::Cleanser,
    ingredients: &["Salicylic Acid 2%", "Sodium Hyaluronate"],
    price: 299,
    description: "Gentle daily cleanser that unclogs pores and removes excess oil",
    usage: "AM & PM",
};

const NIACINAMIDE_SERUM: Product = Product {
    id: "serum-1",
    name: "Niacinamide Serum 10%",
    category: Category::Serum,
    ingredients: &["Niacinamide 10%", "Zinc PCA"],
    price: 449,
    description: "Controls oil production and minimizes pore appearance",
    usage: "AM & PM",
};

const LIGHTWEIGHT_MOISTURIZER: Product = Product {
    id: "moisturizer-1",
    name: "Lightweight Moisturizer",
    category: Category::Moisturizer,
    ingredients: &["Hyaluronic Acid", "Ceramides", "Glycerin"],
    price: 349,
    description: "Non-comedogenic moisturizer for balanced hydration",
    usage: "AM & PM",
};

const SPF50_SUNSCREEN: Product = Product {
    id: "sunscreen-1",
    name: "SPF 50 Sunscreen",
    category: Category::Sunscreen,
    ingredients: &["Zinc Oxide", "Titanium Dioxide"],
    price: 399,
    description: "Broad-spectrum protection without white cast",
    usage: "AM",
};

const ACNE_TREATMENT: Product = Product {
    id: "treatment-1",
    name: "Salicylic Acid Serum 2%",
    category: Category::Treatment,
    ingredients: &["Salicylic Acid 2%", "Niacinamide"],
    price: 499,
    description: "Targeted treatment for active breakouts",
    usage: "PM (alternate nights)",
};

const RETINOL_SERUM: Product = Product {
    id: "serum-2",
    name: "Retinol Serum 0.5%",
    category: Category::Serum,
    ingredients: &["Retinol 0.5%", "Squalane", "Vitamin E"],
    price: 699,
    description: "Anti-aging serum for fine lines and texture",
    usage: "PM (start 2x/week)",
};

const VITAMIN_C_SERUM: Product = Product {
    id: "serum-3",
    name: "Vitamin C Serum 15%",
    category: Category::Serum,
    ingredients: &["L-Ascorbic Acid 15%", "Vitamin E", "Ferulic Acid"],
    price: 599,
    description: "Brightening serum for dark spots and uneven tone",
    usage: "AM",
};

/// Base products recommended to every profile, in declaration order.
const BASE_PRODUCTS: [Product; 4] = [
    SALICYLIC_CLEANSER,
    NIACINAMIDE_SERUM,
    LIGHTWEIGHT_MOISTURIZER,
    SPF50_SUNSCREEN,
];

/// Ordered rule table: a rule fires when its concern is in the profile.
///
/// The table order, not the profile's concern order, decides the output
/// order of the extras. Concerns without a rule add nothing.
const CONCERN_RULES: [(Concern, Product); 3] = [
    (Concern::Acne, ACNE_TREATMENT),
    (Concern::Aging, RETINOL_SERUM),
    (Concern::Pigmentation, VITAMIN_C_SERUM),
];

/// The base product list.
pub fn base_products() -> &'static [Product] {
    &BASE_PRODUCTS
}

/// The concern-to-product rule table.
pub fn concern_rules() -> &'static [(Concern, Product)] {
    &CONCERN_RULES
}

/// Every product in the catalog, base products first.
pub fn all_products() -> impl Iterator<Item = &'static Product> {
    BASE_PRODUCTS
        .iter()
        .chain(CONCERN_RULES.iter().map(|(_, product)| product))
}

/// Compute the recommended product list for a profile.
///
/// The four base products come first in declaration order, followed by one
/// extra per matching rule in table order. There is no deduplication step;
/// the fixed catalog has no overlap between base and rule products, so
/// duplicates cannot occur today.
pub fn recommend(profile: &SkinProfile) -> Vec<Product> {
    let mut products: Vec<Product> = BASE_PRODUCTS.to_vec();
    for (concern, product) in &CONCERN_RULES {
        if profile.has_concern(*concern) {
            products.push(*product);
        }
    }
    products
}
