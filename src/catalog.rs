//! Reference data for gap recommendations.
//!
//! Shopping options and stylist picks are not computed by the engine; they
//! are reference data associated with each gap category. The catalog is an
//! explicitly passed-in repository rather than a module-level mutable
//! table, so lifetime and mutation stay caller-controlled.

use crate::core::{
    GapCategory, GarmentType, Impact, MissingItem, Occasion, PriceRange, Score, Season,
    ShoppingOption, StylistRecommendation,
};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RecommendationCatalog {
    entries: HashMap<GapCategory, Vec<MissingItem>>,
}

impl RecommendationCatalog {
    /// An empty catalog. Gap analysis against it still detects gaps; the
    /// gaps simply carry no shopping recommendations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in reference catalog: one curated acquisition per gap
    /// category, with retailer listings and (for formal wear) a stylist
    /// pick.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.append(GapCategory::FormalWear, formal_blazer());
        catalog.append(GapCategory::VersatileFootwear, derby_shoes());
        catalog.append(GapCategory::Outerwear, wool_overcoat());
        catalog
    }

    /// Recommendations registered for a category, in insertion order.
    pub fn recommendations_for(&self, category: GapCategory) -> Vec<MissingItem> {
        self.entries.get(&category).cloned().unwrap_or_default()
    }

    /// Append a recommendation to a category.
    pub fn append(&mut self, category: GapCategory, item: MissingItem) {
        self.entries.entry(category).or_default().push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|v| v.is_empty())
    }
}

fn shopping_option(
    retailer: &str,
    product_name: &str,
    price: f64,
    url: &str,
    rating: f32,
    in_stock: bool,
    similarity: u8,
) -> ShoppingOption {
    ShoppingOption {
        retailer: retailer.to_string(),
        product_name: product_name.to_string(),
        price,
        currency: "USD".to_string(),
        url: url.to_string(),
        image: None,
        rating: Some(rating),
        in_stock,
        similarity: Score::new(similarity),
    }
}

fn formal_blazer() -> MissingItem {
    MissingItem {
        id: "rec-formal-blazer".to_string(),
        kind: GarmentType::Top,
        name: "Navy Wool Blazer".to_string(),
        description: "A structured navy blazer that anchors formal and smart outfits alike."
            .to_string(),
        image: None,
        colors: vec!["navy".to_string(), "charcoal".to_string()],
        seasons: vec![Season::Fall, Season::Winter, Season::Spring],
        occasions: vec![Occasion::Formal, Occasion::Smart],
        priority: Impact::High,
        reason: "Nothing in the wardrobe dresses up for formal occasions.".to_string(),
        price: PriceRange::new(120.0, 260.0, "USD"),
        shopping_options: vec![
            shopping_option(
                "Meridian Menswear",
                "Structured Wool Blazer",
                189.0,
                "https://shop.example/meridian/structured-wool-blazer",
                4.5,
                true,
                82,
            ),
            shopping_option(
                "Atelier Nord",
                "Tailored Navy Blazer",
                240.0,
                "https://shop.example/atelier-nord/tailored-navy-blazer",
                4.8,
                false,
                95,
            ),
            shopping_option(
                "Harbor & Main",
                "Half-Canvas Blazer",
                152.0,
                "https://shop.example/harbor-main/half-canvas-blazer",
                4.2,
                true,
                88,
            ),
        ],
        stylist_pick: Some(StylistRecommendation {
            stylist_id: "sty-ava".to_string(),
            stylist_name: "Ava Lindqvist".to_string(),
            note: "Go half-canvas in navy; it pairs with everything from denim to grey wool."
                .to_string(),
            rating: Some(4.9),
        }),
    }
}

fn derby_shoes() -> MissingItem {
    MissingItem {
        id: "rec-derby-shoes".to_string(),
        kind: GarmentType::Shoes,
        name: "Leather Derby Shoes".to_string(),
        description: "Dark leather derbies that bridge smart and formal wear.".to_string(),
        image: None,
        colors: vec!["black".to_string(), "brown".to_string()],
        seasons: vec![Season::All],
        occasions: vec![Occasion::Smart, Occasion::Formal],
        priority: Impact::Medium,
        reason: "Current footwear only covers casual and sport occasions.".to_string(),
        price: PriceRange::new(90.0, 180.0, "USD"),
        shopping_options: vec![
            shopping_option(
                "Calder Shoe Co.",
                "Plain-Toe Derby",
                135.0,
                "https://shop.example/calder/plain-toe-derby",
                4.6,
                true,
                90,
            ),
            shopping_option(
                "Harbor & Main",
                "Grain Leather Derby",
                110.0,
                "https://shop.example/harbor-main/grain-leather-derby",
                4.1,
                true,
                78,
            ),
        ],
        stylist_pick: None,
    }
}

fn wool_overcoat() -> MissingItem {
    MissingItem {
        id: "rec-wool-overcoat".to_string(),
        kind: GarmentType::Outer,
        name: "Wool Overcoat".to_string(),
        description: "A mid-length overcoat for cold-weather layering.".to_string(),
        image: None,
        colors: vec!["camel".to_string(), "charcoal".to_string()],
        seasons: vec![Season::Fall, Season::Winter],
        occasions: vec![Occasion::Smart, Occasion::Casual],
        priority: Impact::Medium,
        reason: "No outer layer for cold or wet weather.".to_string(),
        price: PriceRange::new(150.0, 320.0, "USD"),
        shopping_options: vec![
            shopping_option(
                "Atelier Nord",
                "Mid-Length Wool Coat",
                280.0,
                "https://shop.example/atelier-nord/mid-length-wool-coat",
                4.7,
                true,
                92,
            ),
            shopping_option(
                "Meridian Menswear",
                "City Overcoat",
                198.0,
                "https://shop.example/meridian/city-overcoat",
                4.3,
                true,
                84,
            ),
        ],
        stylist_pick: None,
    }
}
