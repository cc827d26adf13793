//! Outfit variant generation.
//!
//! Given an anchor item and a candidate pool, the generator assembles one
//! variant per style: a classic pick, a weather-leaning pick, and a
//! dressed-up pick. Each variant fills one slot per garment type other
//! than the anchor's own, requiring every member to share at least one
//! season and one occasion with the anchor. Slots with no eligible
//! candidate are omitted rather than forced.

pub mod scoring;
pub mod swap;

pub use scoring::pair_compatibility;
pub use swap::{swap_item, swap_options};

use crate::config::ScoringWeights;
use crate::core::{
    GarmentType, Occasion, OutfitConstraints, OutfitVariant, WardrobeItem, Weather,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantStyle {
    Classic,
    Weather,
    Smart,
}

impl VariantStyle {
    pub const ALL: [VariantStyle; 3] =
        [VariantStyle::Classic, VariantStyle::Weather, VariantStyle::Smart];

    pub fn slug(self) -> &'static str {
        match self {
            VariantStyle::Classic => "classic",
            VariantStyle::Weather => "weather",
            VariantStyle::Smart => "smart",
        }
    }

    fn title(self) -> &'static str {
        match self {
            VariantStyle::Classic => "Classic Mix",
            VariantStyle::Weather => "Weather Ready",
            VariantStyle::Smart => "Dressed Up",
        }
    }

    fn tags(self) -> Vec<String> {
        let tags: &[&str] = match self {
            VariantStyle::Classic => &["everyday", "versatile"],
            VariantStyle::Weather => &["layered", "outdoor"],
            VariantStyle::Smart => &["polished", "office"],
        };
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn lead_reason(self) -> &'static str {
        match self {
            VariantStyle::Classic => "Balanced everyday pairing",
            VariantStyle::Weather => "Layered with the forecast in mind",
            VariantStyle::Smart => "Leans on the dressier pieces you own",
        }
    }
}

/// Generate ranked outfit variants around an anchor item.
///
/// Pool items are eligible only if they are not the anchor, are available,
/// avoid every constrained color, and list the required style when one is
/// set. Variants come back sorted by score, descending; ties keep the
/// fixed style order (classic, weather, smart).
pub fn generate_variants(
    anchor: &WardrobeItem,
    pool: &[WardrobeItem],
    constraints: &OutfitConstraints,
    weights: &ScoringWeights,
) -> Vec<OutfitVariant> {
    let candidates: Vec<&WardrobeItem> = pool
        .iter()
        .filter(|item| passes_constraints(item, anchor, constraints))
        .collect();

    log::debug!(
        "{} of {} pool items eligible around anchor {}",
        candidates.len(),
        pool.len(),
        anchor.id
    );

    let mut variants: Vec<OutfitVariant> = VariantStyle::ALL
        .iter()
        .map(|style| build_variant(*style, anchor, &candidates, constraints, weights))
        .collect();

    variants.sort_by(|a, b| b.score.cmp(&a.score));
    variants
}

fn passes_constraints(
    item: &WardrobeItem,
    anchor: &WardrobeItem,
    constraints: &OutfitConstraints,
) -> bool {
    if item.id == anchor.id || !item.is_available() {
        return false;
    }
    if constraints
        .avoid_colors
        .iter()
        .any(|color| item.has_color(color))
    {
        return false;
    }
    if let Some(style) = constraints.require_style {
        if !item.wears_for(style) {
            return false;
        }
    }
    true
}

fn slot_candidates<'a>(
    kind: GarmentType,
    anchor: &WardrobeItem,
    candidates: &[&'a WardrobeItem],
) -> Vec<&'a WardrobeItem> {
    candidates
        .iter()
        .filter(|item| {
            item.kind == kind && item.shares_season(anchor) && item.shares_occasion(anchor)
        })
        .copied()
        .collect()
}

fn pick_for_slot<'a>(
    style: VariantStyle,
    kind: GarmentType,
    slot: &[&'a WardrobeItem],
) -> Option<&'a WardrobeItem> {
    match style {
        VariantStyle::Classic => slot.first().copied(),
        VariantStyle::Weather if kind == GarmentType::Outer => slot
            .iter()
            .find(|item| item.name.to_lowercase().contains("coat"))
            .or_else(|| slot.first())
            .copied(),
        VariantStyle::Weather => slot.first().copied(),
        VariantStyle::Smart => slot
            .iter()
            .find(|item| {
                item.wears_for(Occasion::Smart) || item.wears_for(Occasion::Formal)
            })
            .or_else(|| slot.first())
            .copied(),
    }
}

fn build_variant(
    style: VariantStyle,
    anchor: &WardrobeItem,
    candidates: &[&WardrobeItem],
    constraints: &OutfitConstraints,
    weights: &ScoringWeights,
) -> OutfitVariant {
    let mut members: Vec<&WardrobeItem> = Vec::new();
    for kind in GarmentType::ALL {
        if kind == anchor.kind {
            continue;
        }
        // In the heat there is nothing to layer.
        if style == VariantStyle::Weather
            && kind == GarmentType::Outer
            && constraints.weather == Some(Weather::Hot)
        {
            continue;
        }
        let slot = slot_candidates(kind, anchor, candidates);
        if let Some(pick) = pick_for_slot(style, kind, &slot) {
            members.push(pick);
        }
    }

    let score = scoring::variant_score(anchor, &members, weights);
    let has_outer = members.iter().any(|m| m.kind == GarmentType::Outer);
    let weather = constraints
        .weather
        .map(|w| scoring::weather_suitability(w, has_outer));

    let mut reasons = vec![style.lead_reason().to_string()];
    reasons.extend(members.iter().map(|m| member_reason(anchor, m)));

    let mut items = vec![anchor.clone()];
    items.extend(members.iter().map(|m| (*m).clone()));

    OutfitVariant {
        id: format!("{}-{}", anchor.id, style.slug()),
        title: style.title().to_string(),
        description: format!("{} built around {}", style.title(), anchor.name),
        palette: build_palette(&items),
        items,
        score,
        reasons,
        tags: style.tags(),
        weather,
    }
}

fn member_reason(anchor: &WardrobeItem, member: &WardrobeItem) -> String {
    if let Some(color) = anchor.colors.iter().find(|c| member.has_color(c)) {
        return format!("{} picks up {} from {}", member.name, color, anchor.name);
    }
    if let Some(occasion) = anchor
        .occasions
        .iter()
        .find(|o| member.occasions.contains(o))
    {
        return format!("{} suits the same {} occasions", member.name, occasion);
    }
    format!("{} fits the same season", member.name)
}

/// Ordered color union across the outfit, first occurrence wins, compared
/// case-insensitively.
pub(crate) fn build_palette(items: &[WardrobeItem]) -> Vec<String> {
    let mut palette: Vec<String> = Vec::new();
    for item in items {
        for color in &item.colors {
            if !palette.iter().any(|c| c.eq_ignore_ascii_case(color)) {
                palette.push(color.clone());
            }
        }
    }
    palette
}
