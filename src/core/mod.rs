pub mod score_types;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use score_types::Score;

/// Closed set of garment slots an outfit can fill.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    Top,
    Bottom,
    Shoes,
    Outer,
    Accessory,
}

impl GarmentType {
    /// Fixed slot order used by the variant builder and report writers.
    pub const ALL: [GarmentType; 5] = [
        GarmentType::Top,
        GarmentType::Bottom,
        GarmentType::Shoes,
        GarmentType::Outer,
        GarmentType::Accessory,
    ];
}

impl std::fmt::Display for GarmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GarmentType::Top => "top",
            GarmentType::Bottom => "bottom",
            GarmentType::Shoes => "shoes",
            GarmentType::Outer => "outer",
            GarmentType::Accessory => "accessory",
        };
        write!(f, "{s}")
    }
}

/// Seasons an item is suited to. `All` is a wildcard that matches any
/// concrete season when computing overlap.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    All,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Smart,
    Formal,
    Sport,
    Travel,
}

impl std::str::FromStr for Occasion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "casual" => Ok(Occasion::Casual),
            "smart" => Ok(Occasion::Smart),
            "formal" => Ok(Occasion::Formal),
            "sport" => Ok(Occasion::Sport),
            "travel" => Ok(Occasion::Travel),
            other => Err(format!("unknown occasion: {other}")),
        }
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Occasion::Casual => "casual",
            Occasion::Smart => "smart",
            Occasion::Formal => "formal",
            Occasion::Sport => "sport",
            Occasion::Travel => "travel",
        };
        write!(f, "{s}")
    }
}

/// Item availability. Anything other than `Ok` is excluded from gap
/// analysis and outfit generation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Ok,
    Laundry,
    Donate,
    Archived,
}

/// Severity of a detected wardrobe gap.
///
/// Declaration order doubles as sort order: `High` sorts first.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Hot,
    Mild,
    Cold,
    Rain,
}

impl std::str::FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(Weather::Hot),
            "mild" => Ok(Weather::Mild),
            "cold" => Ok(Weather::Cold),
            "rain" => Ok(Weather::Rain),
            other => Err(format!("unknown weather: {other}")),
        }
    }
}

/// A single owned garment or accessory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WardrobeItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub kind: GarmentType,
    #[serde(default)]
    pub image: Option<String>,
    pub colors: Vec<String>,
    pub seasons: Vec<Season>,
    pub occasions: Vec<Occasion>,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default)]
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
}

fn default_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl WardrobeItem {
    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Ok
    }

    /// Color tokens compare case-insensitively so `Navy` and `navy`
    /// (or hex tokens in either case) collide.
    pub fn has_color(&self, token: &str) -> bool {
        self.colors.iter().any(|c| c.eq_ignore_ascii_case(token))
    }

    pub fn wears_for(&self, occasion: Occasion) -> bool {
        self.occasions.contains(&occasion)
    }

    /// Season overlap, treating `Season::All` on either side as a match.
    pub fn shares_season(&self, other: &WardrobeItem) -> bool {
        if self.seasons.contains(&Season::All) || other.seasons.contains(&Season::All) {
            return !self.seasons.is_empty() && !other.seasons.is_empty();
        }
        self.seasons.iter().any(|s| other.seasons.contains(s))
    }

    pub fn shares_occasion(&self, other: &WardrobeItem) -> bool {
        self.occasions.iter().any(|o| other.occasions.contains(o))
    }
}

/// Price band for a recommended acquisition. The constructor keeps
/// `min <= max` regardless of argument order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

impl PriceRange {
    pub fn new(a: f64, b: f64, currency: impl Into<String>) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self {
            min,
            max,
            currency: currency.into(),
        }
    }

    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            format_price(self.min, &self.currency),
            format_price(self.max, &self.currency)
        )
    }
}

/// Render a price for display. Unknown currency codes fall back to
/// `amount CODE`.
pub fn format_price(amount: f64, currency: &str) -> String {
    match currency {
        "USD" => format!("${amount:.2}"),
        "EUR" => format!("\u{20ac}{amount:.2}"),
        "GBP" => format!("\u{a3}{amount:.2}"),
        other => format!("{amount:.2} {other}"),
    }
}

/// One retailer listing for a recommended item.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShoppingOption {
    pub retailer: String,
    pub product_name: String,
    pub price: f64,
    pub currency: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    pub in_stock: bool,
    pub similarity: Score,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StylistRecommendation {
    pub stylist_id: String,
    pub stylist_name: String,
    pub note: String,
    #[serde(default)]
    pub rating: Option<f32>,
}

/// A recommended acquisition attached to a wardrobe gap.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MissingItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: GarmentType,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub colors: Vec<String>,
    pub seasons: Vec<Season>,
    pub occasions: Vec<Occasion>,
    pub priority: Impact,
    pub reason: String,
    pub price: PriceRange,
    #[serde(default)]
    pub shopping_options: Vec<ShoppingOption>,
    #[serde(default)]
    pub stylist_pick: Option<StylistRecommendation>,
}

impl MissingItem {
    /// Best retailer listing: the in-stock option with the highest
    /// similarity score. Out-of-stock options never win, whatever their
    /// similarity.
    pub fn best_option(&self) -> Option<&ShoppingOption> {
        self.shopping_options
            .iter()
            .filter(|o| o.in_stock)
            .max_by_key(|o| o.similarity)
    }
}

/// Closed set of gap rules the analyzer knows about.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    FormalWear,
    VersatileFootwear,
    Outerwear,
}

impl std::fmt::Display for GapCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GapCategory::FormalWear => "Formal Wear",
            GapCategory::VersatileFootwear => "Versatile Footwear",
            GapCategory::Outerwear => "Outerwear",
        };
        write!(f, "{s}")
    }
}

/// A detected category of missing coverage. Computed fresh on every
/// analysis call and never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WardrobeGap {
    pub category: GapCategory,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub completion: Score,
    pub recommendations: Vec<MissingItem>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeatherSuitability {
    pub condition: Weather,
    pub score: Score,
}

/// One generated outfit built around an anchor item. The anchor is always
/// the first member.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutfitVariant {
    pub id: String,
    pub title: String,
    pub description: String,
    pub items: Vec<WardrobeItem>,
    pub score: Score,
    pub reasons: Vec<String>,
    pub palette: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub weather: Option<WeatherSuitability>,
}

impl OutfitVariant {
    pub fn anchor(&self) -> Option<&WardrobeItem> {
        self.items.first()
    }

    pub fn member_ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id.as_str()).collect()
    }
}

/// Optional constraints for the variant generator. Absent fields mean
/// "no constraint". `budget` and `brands` are accepted but not yet
/// applied by scoring.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct OutfitConstraints {
    #[serde(default)]
    pub avoid_colors: Vec<String>,
    #[serde(default)]
    pub require_style: Option<Occasion>,
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub brands: Vec<String>,
}

/// A ranked alternative for one slot of a generated variant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ItemSwapOption {
    pub item: WardrobeItem,
    pub compatibility: Score,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(in_stock: bool, similarity: u8) -> ShoppingOption {
        ShoppingOption {
            retailer: "shop".to_string(),
            product_name: "product".to_string(),
            price: 50.0,
            currency: "USD".to_string(),
            url: "https://example.com".to_string(),
            image: None,
            rating: None,
            in_stock,
            similarity: Score::new(similarity),
        }
    }

    fn missing_item(options: Vec<ShoppingOption>) -> MissingItem {
        MissingItem {
            id: "m1".to_string(),
            kind: GarmentType::Top,
            name: "Blazer".to_string(),
            description: String::new(),
            image: None,
            colors: vec!["navy".to_string()],
            seasons: vec![Season::All],
            occasions: vec![Occasion::Formal],
            priority: Impact::High,
            reason: String::new(),
            price: PriceRange::new(100.0, 200.0, "USD"),
            shopping_options: options,
            stylist_pick: None,
        }
    }

    #[test]
    fn best_option_prefers_highest_similarity_in_stock() {
        let item = missing_item(vec![option(true, 70), option(false, 99), option(true, 85)]);
        let best = item.best_option().unwrap();
        assert_eq!(best.similarity.value(), 85);
    }

    #[test]
    fn best_option_none_when_everything_out_of_stock() {
        let item = missing_item(vec![option(false, 99)]);
        assert!(item.best_option().is_none());
    }

    #[test]
    fn price_range_constructor_orders_bounds() {
        let range = PriceRange::new(260.0, 120.0, "USD");
        assert!(range.min <= range.max);
        assert_eq!(range.min, 120.0);
    }

    #[test]
    fn format_price_known_and_unknown_currencies() {
        assert_eq!(format_price(89.5, "USD"), "$89.50");
        assert_eq!(format_price(89.5, "SEK"), "89.50 SEK");
    }

    #[test]
    fn season_all_acts_as_wildcard() {
        let mut a = sample_item("a");
        let mut b = sample_item("b");
        a.seasons = vec![Season::All];
        b.seasons = vec![Season::Winter];
        assert!(a.shares_season(&b));
        assert!(b.shares_season(&a));
    }

    #[test]
    fn disjoint_concrete_seasons_do_not_overlap() {
        let mut a = sample_item("a");
        let mut b = sample_item("b");
        a.seasons = vec![Season::Summer];
        b.seasons = vec![Season::Winter];
        assert!(!a.shares_season(&b));
    }

    #[test]
    fn item_deserializes_with_defaults() {
        let json = r#"{
            "id": "i1",
            "name": "White Tee",
            "type": "top",
            "colors": ["white"],
            "seasons": ["summer"],
            "occasions": ["casual"]
        }"#;
        let item: WardrobeItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, ItemStatus::Ok);
        assert_eq!(item.wear_count, 0);
        assert!(item.brand.is_none());
    }

    #[test]
    fn color_matching_is_case_insensitive() {
        let mut item = sample_item("a");
        item.colors = vec!["Navy".to_string(), "#000000".to_string()];
        assert!(item.has_color("navy"));
        assert!(item.has_color("#000000"));
        assert!(!item.has_color("white"));
    }

    fn sample_item(id: &str) -> WardrobeItem {
        WardrobeItem {
            id: id.to_string(),
            name: format!("item {id}"),
            brand: None,
            kind: GarmentType::Top,
            image: None,
            colors: vec!["white".to_string()],
            seasons: vec![Season::All],
            occasions: vec![Occasion::Casual],
            wear_count: 0,
            last_worn: None,
            status: ItemStatus::Ok,
            collections: vec![],
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}
