//! Item substitution within a generated variant.
//!
//! A swap replaces one member of a variant with another item from the
//! caller's catalog. Failed lookups surface as [`EngineError::ItemNotFound`]
//! rather than silently returning the variant untouched, so callers can
//! tell a bad reference from a no-op. Swap candidates for a slot are ranked
//! by the same deterministic compatibility score the generator uses.

use crate::config::ScoringWeights;
use crate::core::{GarmentType, ItemSwapOption, OutfitVariant, Score, WardrobeItem};
use crate::errors::EngineError;
use crate::outfit::scoring::pair_compatibility;

/// Replace the member `old_id` of a variant with catalog item `new_id`.
///
/// The replacement must exist in `catalog` and carry the same garment type
/// as the member it displaces. On success the returned variant keeps its
/// member order, with score and palette recomputed for the new lineup.
pub fn swap_item(
    variant: &OutfitVariant,
    old_id: &str,
    new_id: &str,
    catalog: &[WardrobeItem],
    weights: &ScoringWeights,
) -> Result<OutfitVariant, EngineError> {
    let position = variant
        .items
        .iter()
        .position(|i| i.id == old_id)
        .ok_or_else(|| EngineError::ItemNotFound {
            id: old_id.to_string(),
        })?;

    let replacement = catalog
        .iter()
        .find(|i| i.id == new_id)
        .ok_or_else(|| EngineError::ItemNotFound {
            id: new_id.to_string(),
        })?;

    let displaced = &variant.items[position];
    if replacement.kind != displaced.kind {
        return Err(EngineError::TypeMismatch {
            expected: displaced.kind,
            found: replacement.kind,
        });
    }

    let mut swapped = variant.clone();
    swapped.items[position] = replacement.clone();
    swapped.palette = crate::outfit::build_palette(&swapped.items);
    swapped.score = rescore(&swapped, weights);
    swapped
        .reasons
        .push(format!("Swapped {} for {}", displaced.name, replacement.name));
    Ok(swapped)
}

fn rescore(variant: &OutfitVariant, weights: &ScoringWeights) -> Score {
    match variant.items.split_first() {
        Some((anchor, members)) if !members.is_empty() => {
            let refs: Vec<&WardrobeItem> = members.iter().collect();
            crate::outfit::scoring::variant_score(anchor, &refs, weights)
        }
        _ => Score::ZERO,
    }
}

/// Ranked alternatives for the slot currently occupied by `current_id`.
///
/// Candidates are same-type, different-id, available catalog items, scored
/// against the current occupant and sorted by compatibility descending.
/// Ties break by item id so the ranking is stable across runs.
pub fn swap_options(
    kind: GarmentType,
    current_id: &str,
    catalog: &[WardrobeItem],
    weights: &ScoringWeights,
) -> Result<Vec<ItemSwapOption>, EngineError> {
    let current = catalog
        .iter()
        .find(|i| i.id == current_id)
        .ok_or_else(|| EngineError::ItemNotFound {
            id: current_id.to_string(),
        })?;

    let mut options: Vec<ItemSwapOption> = catalog
        .iter()
        .filter(|i| i.kind == kind && i.id != current_id && i.is_available())
        .map(|candidate| ItemSwapOption {
            compatibility: pair_compatibility(current, candidate, weights),
            reason: swap_reason(current, candidate),
            item: candidate.clone(),
        })
        .collect();

    options.sort_by(|a, b| {
        b.compatibility
            .cmp(&a.compatibility)
            .then_with(|| a.item.id.cmp(&b.item.id))
    });
    Ok(options)
}

fn swap_reason(current: &WardrobeItem, candidate: &WardrobeItem) -> String {
    if let Some(color) = current.colors.iter().find(|c| candidate.has_color(c)) {
        return format!("Keeps {color} in the palette");
    }
    if current.shares_occasion(candidate) {
        return "Covers the same occasions".to_string();
    }
    "Fresh alternative for this slot".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemStatus, Occasion, OutfitConstraints, Season};
    use crate::outfit::generate_variants;
    use chrono::{DateTime, Utc};

    fn item(id: &str, name: &str, kind: GarmentType, colors: &[&str]) -> WardrobeItem {
        WardrobeItem {
            id: id.to_string(),
            name: name.to_string(),
            brand: None,
            kind,
            image: None,
            colors: colors.iter().map(|c| c.to_string()).collect(),
            seasons: vec![Season::All],
            occasions: vec![Occasion::Casual],
            wear_count: 0,
            last_worn: None,
            status: ItemStatus::Ok,
            collections: vec![],
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn catalog() -> Vec<WardrobeItem> {
        vec![
            item("t1", "Navy Tee", GarmentType::Top, &["navy"]),
            item("b1", "Grey Chinos", GarmentType::Bottom, &["grey"]),
            item("b2", "Navy Chinos", GarmentType::Bottom, &["navy"]),
            item("s1", "White Sneakers", GarmentType::Shoes, &["white"]),
        ]
    }

    fn variant() -> OutfitVariant {
        let catalog = catalog();
        let weights = ScoringWeights::default();
        generate_variants(
            &catalog[0],
            &catalog[1..],
            &OutfitConstraints::default(),
            &weights,
        )
        .into_iter()
        .next()
        .unwrap()
    }

    #[test]
    fn swap_replaces_member_in_place() {
        let weights = ScoringWeights::default();
        let variant = variant();
        let old_ids = variant.member_ids();
        let position = old_ids.iter().position(|id| *id == "b1").unwrap();

        let swapped = swap_item(&variant, "b1", "b2", &catalog(), &weights).unwrap();
        assert_eq!(swapped.items[position].id, "b2");
        assert_eq!(swapped.items.len(), variant.items.len());
        // Everything else stays where it was.
        for (i, id) in swapped.member_ids().iter().enumerate() {
            if i != position {
                assert_eq!(*id, old_ids[i]);
            }
        }
    }

    #[test]
    fn swap_recomputes_score_and_palette() {
        let weights = ScoringWeights::default();
        let variant = variant();
        let swapped = swap_item(&variant, "b1", "b2", &catalog(), &weights).unwrap();
        assert!(swapped.palette.iter().any(|c| c == "navy"));
        assert!(!swapped.palette.iter().any(|c| c == "grey"));
        // The navy chinos match the navy anchor better than grey did.
        assert!(swapped.score > variant.score);
    }

    #[test]
    fn swap_with_unknown_replacement_is_item_not_found() {
        let weights = ScoringWeights::default();
        let variant = variant();
        let err = swap_item(&variant, "b1", "ghost", &catalog(), &weights).unwrap_err();
        assert!(matches!(err, EngineError::ItemNotFound { id } if id == "ghost"));
    }

    #[test]
    fn swap_with_unknown_member_is_item_not_found() {
        let weights = ScoringWeights::default();
        let variant = variant();
        let err = swap_item(&variant, "ghost", "b2", &catalog(), &weights).unwrap_err();
        assert!(matches!(err, EngineError::ItemNotFound { id } if id == "ghost"));
    }

    #[test]
    fn swap_across_garment_types_is_rejected() {
        let weights = ScoringWeights::default();
        let variant = variant();
        let err = swap_item(&variant, "b1", "s1", &catalog(), &weights).unwrap_err();
        assert!(matches!(err, EngineError::TypeMismatch { .. }));
    }

    #[test]
    fn failed_swap_leaves_the_input_untouched() {
        let weights = ScoringWeights::default();
        let variant = variant();
        let before = variant.clone();
        let _ = swap_item(&variant, "b1", "ghost", &catalog(), &weights);
        assert_eq!(variant, before);
    }

    #[test]
    fn swap_options_rank_by_compatibility() {
        let weights = ScoringWeights::default();
        let mut catalog = catalog();
        catalog.push(item("b3", "Black Joggers", GarmentType::Bottom, &["black"]));

        let options =
            swap_options(GarmentType::Bottom, "b1", &catalog, &weights).unwrap();
        let ids: Vec<&str> = options.iter().map(|o| o.item.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        for pair in options.windows(2) {
            assert!(pair[0].compatibility >= pair[1].compatibility);
        }
        assert!(!ids.contains(&"b1"));
        assert!(!ids.contains(&"s1"));
    }

    #[test]
    fn swap_options_skip_unavailable_items() {
        let weights = ScoringWeights::default();
        let mut catalog = catalog();
        catalog[2].status = ItemStatus::Donate;
        let options =
            swap_options(GarmentType::Bottom, "b1", &catalog, &weights).unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn swap_options_for_unknown_item_fail() {
        let weights = ScoringWeights::default();
        let err = swap_options(GarmentType::Bottom, "ghost", &catalog(), &weights).unwrap_err();
        assert!(matches!(err, EngineError::ItemNotFound { .. }));
    }

    #[test]
    fn swap_options_tie_break_is_stable() {
        let weights = ScoringWeights::default();
        let mut catalog = catalog();
        // Two identical candidates: the lower id must come first.
        catalog.push(item("b9", "Navy Chinos Copy", GarmentType::Bottom, &["navy"]));
        let first = swap_options(GarmentType::Bottom, "b1", &catalog, &weights).unwrap();
        let second = swap_options(GarmentType::Bottom, "b1", &catalog, &weights).unwrap();
        assert_eq!(
            first.iter().map(|o| o.item.id.clone()).collect::<Vec<_>>(),
            second.iter().map(|o| o.item.id.clone()).collect::<Vec<_>>()
        );
    }
}
