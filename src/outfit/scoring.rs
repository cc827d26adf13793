//! Deterministic compatibility scoring.
//!
//! Compatibility between two items is a weighted blend of four factors,
//! each normalized to [0, 1]:
//!
//! - color overlap: shared color tokens over the smaller palette
//! - occasion overlap: shared occasions over the smaller occasion set
//! - season affinity: shared seasons, with `Season::All` matching anything
//! - freshness: decays with the candidate's wear count, favoring pieces
//!   that haven't been worn to death
//!
//! Weights come from [`crate::config::ScoringWeights`] and must sum to 1.0,
//! so the blend itself stays in [0, 1] before scaling to the 0-100 scale.

use crate::config::ScoringWeights;
use crate::core::{Score, Season, WardrobeItem, Weather, WeatherSuitability};

/// Shared elements over the smaller set, case-insensitive. Empty sets
/// score zero.
pub fn color_overlap(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a
        .iter()
        .filter(|c| b.iter().any(|d| d.eq_ignore_ascii_case(c)))
        .count();
    shared as f64 / a.len().min(b.len()) as f64
}

fn set_overlap<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.iter().filter(|x| b.contains(x)).count();
    shared as f64 / a.len().min(b.len()) as f64
}

/// Season overlap, treating `All` on either side as a full match.
pub fn season_affinity(a: &[Season], b: &[Season]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.contains(&Season::All) || b.contains(&Season::All) {
        return 1.0;
    }
    set_overlap(a, b)
}

/// Freshness decays with wear count: an unworn piece scores 1.0, ten wears
/// halve it.
pub fn freshness(item: &WardrobeItem) -> f64 {
    1.0 / (1.0 + item.wear_count as f64 / 10.0)
}

/// Compatibility of a candidate against an anchor on the 0-100 scale.
pub fn pair_compatibility(
    anchor: &WardrobeItem,
    candidate: &WardrobeItem,
    weights: &ScoringWeights,
) -> Score {
    let blend = weights.color * color_overlap(&anchor.colors, &candidate.colors)
        + weights.occasion * set_overlap(&anchor.occasions, &candidate.occasions)
        + weights.season * season_affinity(&anchor.seasons, &candidate.seasons)
        + weights.freshness * freshness(candidate);
    Score::from_ratio(blend)
}

/// Overall score of a variant: the mean member compatibility against the
/// anchor. A variant with no members beyond the anchor scores zero.
pub fn variant_score(
    anchor: &WardrobeItem,
    members: &[&WardrobeItem],
    weights: &ScoringWeights,
) -> Score {
    if members.is_empty() {
        return Score::ZERO;
    }
    let total: u32 = members
        .iter()
        .map(|m| pair_compatibility(anchor, m, weights).value() as u32)
        .sum();
    Score::from_f64(total as f64 / members.len() as f64)
}

/// How well an assembled outfit suits the requested weather. Cold and rain
/// want an outer layer; heat punishes one.
pub fn weather_suitability(weather: Weather, has_outer: bool) -> WeatherSuitability {
    let score = match (weather, has_outer) {
        (Weather::Cold | Weather::Rain, true) => 90,
        (Weather::Cold | Weather::Rain, false) => 55,
        (Weather::Mild, _) => 80,
        (Weather::Hot, true) => 60,
        (Weather::Hot, false) => 85,
    };
    WeatherSuitability {
        condition: weather,
        score: Score::new(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GarmentType, ItemStatus, Occasion};
    use chrono::{DateTime, Utc};

    fn item(id: &str, colors: &[&str], occasions: Vec<Occasion>, seasons: Vec<Season>) -> WardrobeItem {
        WardrobeItem {
            id: id.to_string(),
            name: format!("item {id}"),
            brand: None,
            kind: GarmentType::Top,
            image: None,
            colors: colors.iter().map(|c| c.to_string()).collect(),
            seasons,
            occasions,
            wear_count: 0,
            last_worn: None,
            status: ItemStatus::Ok,
            collections: vec![],
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn identical_attributes_score_maximum() {
        let weights = ScoringWeights::default();
        let a = item("a", &["navy"], vec![Occasion::Casual], vec![Season::Fall]);
        let b = item("b", &["navy"], vec![Occasion::Casual], vec![Season::Fall]);
        assert_eq!(pair_compatibility(&a, &b, &weights).value(), 100);
    }

    #[test]
    fn disjoint_attributes_score_only_freshness() {
        let weights = ScoringWeights::default();
        let a = item("a", &["navy"], vec![Occasion::Formal], vec![Season::Winter]);
        let b = item("b", &["white"], vec![Occasion::Sport], vec![Season::Summer]);
        // Only the freshness term survives: 0.15 * 1.0 -> 15.
        assert_eq!(pair_compatibility(&a, &b, &weights).value(), 15);
    }

    #[test]
    fn wear_count_erodes_the_score() {
        let weights = ScoringWeights::default();
        let a = item("a", &["navy"], vec![Occasion::Casual], vec![Season::Fall]);
        let fresh = item("b", &["navy"], vec![Occasion::Casual], vec![Season::Fall]);
        let mut tired = fresh.clone();
        tired.id = "c".to_string();
        tired.wear_count = 40;
        assert!(
            pair_compatibility(&a, &tired, &weights) < pair_compatibility(&a, &fresh, &weights)
        );
    }

    #[test]
    fn color_overlap_uses_smaller_palette() {
        let a: Vec<String> = vec!["navy".into(), "white".into(), "grey".into()];
        let b: Vec<String> = vec!["NAVY".into()];
        assert_eq!(color_overlap(&a, &b), 1.0);
    }

    #[test]
    fn season_all_gives_full_affinity() {
        assert_eq!(season_affinity(&[Season::All], &[Season::Winter]), 1.0);
        assert_eq!(season_affinity(&[Season::Summer], &[Season::Winter]), 0.0);
    }

    #[test]
    fn variant_score_is_mean_of_members() {
        let weights = ScoringWeights::default();
        let anchor = item("a", &["navy"], vec![Occasion::Casual], vec![Season::Fall]);
        let twin = item("b", &["navy"], vec![Occasion::Casual], vec![Season::Fall]);
        let stranger = item("c", &["white"], vec![Occasion::Sport], vec![Season::Summer]);
        let full = variant_score(&anchor, &[&twin, &stranger], &weights);
        // (100 + 15) / 2 = 57.5 -> 58
        assert_eq!(full.value(), 58);
    }

    #[test]
    fn empty_variant_scores_zero() {
        let weights = ScoringWeights::default();
        let anchor = item("a", &["navy"], vec![Occasion::Casual], vec![Season::Fall]);
        assert_eq!(variant_score(&anchor, &[], &weights), Score::ZERO);
    }

    #[test]
    fn cold_weather_rewards_an_outer_layer() {
        assert!(
            weather_suitability(Weather::Cold, true).score
                > weather_suitability(Weather::Cold, false).score
        );
        assert!(
            weather_suitability(Weather::Hot, false).score
                > weather_suitability(Weather::Hot, true).score
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::core::{GarmentType, ItemStatus, Occasion};
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    fn build_item(id: &str, wear_count: u32, color_mask: u8) -> WardrobeItem {
        let palette = ["navy", "white", "black", "camel", "grey"];
        let colors: Vec<String> = palette
            .iter()
            .enumerate()
            .filter(|(i, _)| color_mask & (1 << i) != 0)
            .map(|(_, c)| c.to_string())
            .collect();
        WardrobeItem {
            id: id.to_string(),
            name: format!("item {id}"),
            brand: None,
            kind: GarmentType::Top,
            image: None,
            colors: if colors.is_empty() {
                vec!["navy".to_string()]
            } else {
                colors
            },
            seasons: vec![Season::All],
            occasions: vec![Occasion::Casual],
            wear_count,
            last_worn: None,
            status: ItemStatus::Ok,
            collections: vec![],
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    proptest! {
        #[test]
        fn compatibility_always_in_bounds(
            wear_a in 0u32..200,
            wear_b in 0u32..200,
            mask_a in 0u8..32,
            mask_b in 0u8..32,
        ) {
            let weights = ScoringWeights::default();
            let a = build_item("a", wear_a, mask_a);
            let b = build_item("b", wear_b, mask_b);
            let score = pair_compatibility(&a, &b, &weights);
            prop_assert!(score.value() <= 100);
        }

        #[test]
        fn compatibility_is_deterministic(mask in 0u8..32, wear in 0u32..50) {
            let weights = ScoringWeights::default();
            let a = build_item("a", 0, 0b1);
            let b = build_item("b", wear, mask);
            prop_assert_eq!(
                pair_compatibility(&a, &b, &weights),
                pair_compatibility(&a, &b, &weights)
            );
        }
    }
}
