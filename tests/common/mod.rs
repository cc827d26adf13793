//! Shared fixture builders for integration tests.

use chrono::{DateTime, Utc};
use stylemap::core::{GarmentType, ItemStatus, Occasion, Season, WardrobeItem};

pub fn item(
    id: &str,
    name: &str,
    kind: GarmentType,
    colors: &[&str],
    seasons: &[Season],
    occasions: &[Occasion],
) -> WardrobeItem {
    WardrobeItem {
        id: id.to_string(),
        name: name.to_string(),
        brand: None,
        kind,
        image: None,
        colors: colors.iter().map(|c| c.to_string()).collect(),
        seasons: seasons.to_vec(),
        occasions: occasions.to_vec(),
        wear_count: 0,
        last_worn: None,
        status: ItemStatus::Ok,
        collections: vec![],
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

pub fn with_status(mut item: WardrobeItem, status: ItemStatus) -> WardrobeItem {
    item.status = status;
    item
}

/// A wardrobe that covers every essential cell and gap rule.
pub fn complete_wardrobe() -> Vec<WardrobeItem> {
    vec![
        item(
            "top-oxford",
            "White Oxford Shirt",
            GarmentType::Top,
            &["white"],
            &[Season::All],
            &[Occasion::Casual, Occasion::Smart, Occasion::Formal],
        ),
        item(
            "bottom-wool",
            "Grey Wool Trousers",
            GarmentType::Bottom,
            &["grey"],
            &[Season::All],
            &[Occasion::Casual, Occasion::Smart, Occasion::Formal],
        ),
        item(
            "shoes-derby",
            "Black Leather Derbies",
            GarmentType::Shoes,
            &["black"],
            &[Season::All],
            &[Occasion::Casual, Occasion::Smart, Occasion::Formal],
        ),
        item(
            "outer-overcoat",
            "Camel Wool Overcoat",
            GarmentType::Outer,
            &["camel"],
            &[Season::Fall, Season::Winter],
            &[Occasion::Casual, Occasion::Smart],
        ),
        item(
            "acc-belt",
            "Brown Leather Belt",
            GarmentType::Accessory,
            &["brown"],
            &[Season::All],
            &[Occasion::Casual, Occasion::Smart],
        ),
    ]
}
