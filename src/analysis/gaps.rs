//! Wardrobe gap detection.
//!
//! A fixed, ordered list of independent rules, each checking for the
//! absence of at least one available item satisfying a predicate. Gaps are
//! emitted in rule order, never re-sorted by severity. Adding a gap type
//! means appending one more rule; nothing ties the rules together.

use crate::catalog::RecommendationCatalog;
use crate::core::{
    GapCategory, GarmentType, Impact, Occasion, Score, WardrobeGap, WardrobeItem,
};

struct GapRule {
    category: GapCategory,
    description: &'static str,
    impact: Impact,
    completion: u8,
    satisfied: fn(&[&WardrobeItem]) -> bool,
}

fn has_formal_top(items: &[&WardrobeItem]) -> bool {
    items
        .iter()
        .any(|i| i.kind == GarmentType::Top && i.wears_for(Occasion::Formal))
}

fn has_versatile_shoes(items: &[&WardrobeItem]) -> bool {
    items.iter().any(|i| {
        i.kind == GarmentType::Shoes
            && (i.wears_for(Occasion::Smart) || i.wears_for(Occasion::Formal))
    })
}

fn has_outer_layer(items: &[&WardrobeItem]) -> bool {
    items.iter().any(|i| i.kind == GarmentType::Outer)
}

const GAP_RULES: &[GapRule] = &[
    GapRule {
        category: GapCategory::FormalWear,
        description: "No top suitable for formal occasions.",
        impact: Impact::High,
        completion: 25,
        satisfied: has_formal_top,
    },
    GapRule {
        category: GapCategory::VersatileFootwear,
        description: "No footwear that works for smart or formal occasions.",
        impact: Impact::Medium,
        completion: 40,
        satisfied: has_versatile_shoes,
    },
    GapRule {
        category: GapCategory::Outerwear,
        description: "No outer layer for weather or layering.",
        impact: Impact::Medium,
        completion: 60,
        satisfied: has_outer_layer,
    },
];

/// Detect coverage gaps in an item collection.
///
/// Only available (`status == ok`) items count toward coverage, so a
/// donated formal blazer does not paper over a formal-wear gap. An empty
/// collection yields every gap. Recommendations attached to each gap are
/// drawn from the supplied catalog.
pub fn analyze_gaps(
    items: &[WardrobeItem],
    catalog: &RecommendationCatalog,
) -> Vec<WardrobeGap> {
    let available: Vec<&WardrobeItem> = items.iter().filter(|i| i.is_available()).collect();

    GAP_RULES
        .iter()
        .filter(|rule| {
            let satisfied = (rule.satisfied)(&available);
            log::debug!(
                "gap rule {}: {}",
                rule.category,
                if satisfied { "satisfied" } else { "gap" }
            );
            !satisfied
        })
        .map(|rule| WardrobeGap {
            category: rule.category,
            title: rule.category.to_string(),
            description: rule.description.to_string(),
            impact: rule.impact,
            completion: Score::new(rule.completion),
            recommendations: catalog.recommendations_for(rule.category),
        })
        .collect()
}
