// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the catalog API, the server functions and the
// filter engine. Every record tolerates missing fields: the catalog API
// is free to omit anything, and an empty object still deserializes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Number of cards shown per "page" of the incremental grids
pub const ITEMS_PER_PAGE: usize = 20;

/// Artificial latency of a "load more" request
pub const LOAD_MORE_DELAY: Duration = Duration::from_millis(300);

/// Quiescence window before search text reaches the filters
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Lower bound of the year slider when the catalog carries no years
pub const FALLBACK_MIN_YEAR: i32 = 1900;

/// Error returned when parsing one of the filter enums from its slug
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseOptionError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Fragrance from the catalog API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fragrance {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub gender: Option<String>,
    pub year: Option<i32>,
    /// Comma-separated accord names
    pub accords: Option<String>,
    pub top_notes: Option<String>,
    pub middle_notes: Option<String>,
    pub base_notes: Option<String>,
    pub uncategorized_notes: Option<String>,
}

impl Fragrance {
    /// Release year, with zero or negative values treated as unknown
    pub fn release_year(&self) -> Option<i32> {
        self.year.filter(|year| *year > 0)
    }

    /// The raw note list stored for one layer
    pub fn notes(&self, layer: NoteLayer) -> Option<&str> {
        match layer {
            NoteLayer::Top => self.top_notes.as_deref(),
            NoteLayer::Middle => self.middle_notes.as_deref(),
            NoteLayer::Base => self.base_notes.as_deref(),
            NoteLayer::Uncategorized => self.uncategorized_notes.as_deref(),
        }
    }
}

/// Note, accord or perfumer from the catalog API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    /// Reported for notes and accords
    pub total_appearances: Option<i64>,
    /// Reported for perfumers
    pub total_contributions: Option<i64>,
}

impl CatalogItem {
    /// Popularity metric, whichever one the endpoint reports
    pub fn popularity(&self) -> i64 {
        self.total_appearances
            .or(self.total_contributions)
            .unwrap_or(0)
    }
}

/// Brand from the catalog API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub name: String,
    pub country: Option<String>,
    pub parent: Option<String>,
    pub total_fragrances: Option<i64>,
}

/// Which flat collection an item list page shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    #[default]
    Notes,
    Accords,
    Perfumers,
}

impl CatalogKind {
    /// Path segment of the collection endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Notes => "notes",
            CatalogKind::Accords => "accords",
            CatalogKind::Perfumers => "perfumers",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Notes => write!(f, "Notes"),
            CatalogKind::Accords => write!(f, "Accords"),
            CatalogKind::Perfumers => write!(f, "Perfumers"),
        }
    }
}

/// Gender facet selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    #[default]
    All,
    Men,
    Women,
    Unisex,
}

impl GenderFilter {
    pub const ALL: [GenderFilter; 4] = [
        GenderFilter::All,
        GenderFilter::Men,
        GenderFilter::Women,
        GenderFilter::Unisex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderFilter::All => "all",
            GenderFilter::Men => "men",
            GenderFilter::Women => "women",
            GenderFilter::Unisex => "unisex",
        }
    }

    /// Case-insensitive comparison against a record's free-text gender
    pub fn matches(&self, gender: Option<&str>) -> bool {
        match self {
            GenderFilter::All => true,
            named => gender.is_some_and(|g| g.eq_ignore_ascii_case(named.as_str())),
        }
    }
}

impl std::fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenderFilter::All => write!(f, "All"),
            GenderFilter::Men => write!(f, "Men"),
            GenderFilter::Women => write!(f, "Women"),
            GenderFilter::Unisex => write!(f, "Unisex"),
        }
    }
}

impl FromStr for GenderFilter {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenderFilter::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOptionError::new("gender", s))
    }
}

/// Ordering by release year
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearSort {
    #[default]
    None,
    Newest,
    Oldest,
}

impl YearSort {
    pub const ALL: [YearSort; 3] = [YearSort::None, YearSort::Newest, YearSort::Oldest];

    pub fn as_str(&self) -> &'static str {
        match self {
            YearSort::None => "none",
            YearSort::Newest => "newest",
            YearSort::Oldest => "oldest",
        }
    }
}

impl std::fmt::Display for YearSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearSort::None => write!(f, "Default order"),
            YearSort::Newest => write!(f, "Newest First"),
            YearSort::Oldest => write!(f, "Oldest First"),
        }
    }
}

impl FromStr for YearSort {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearSort::ALL
            .into_iter()
            .find(|y| y.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOptionError::new("year sort", s))
    }
}

/// Inclusive release-year window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// An inverted range (`min > max`) contains nothing
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

/// Search bar mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Regular,       // Free-text substring search
    Layered,       // Accords plus top/middle/base note include-exclude
    Uncategorized, // Accords plus uncategorized note include-exclude
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [
        SearchMode::Regular,
        SearchMode::Layered,
        SearchMode::Uncategorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Regular => "regular",
            SearchMode::Layered => "layered",
            SearchMode::Uncategorized => "uncategorized",
        }
    }

    /// Note layers whose include/exclude lists are meaningful in this mode
    pub fn layers(&self) -> &'static [NoteLayer] {
        match self {
            SearchMode::Regular => &[],
            SearchMode::Layered => &[NoteLayer::Top, NoteLayer::Middle, NoteLayer::Base],
            SearchMode::Uncategorized => &[NoteLayer::Uncategorized],
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Regular => write!(f, "Regular"),
            SearchMode::Layered => write!(f, "Layered"),
            SearchMode::Uncategorized => write!(f, "Uncategorized"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOptionError::new("search mode", s))
    }
}

/// Olfactory layer a note occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteLayer {
    Top,
    Middle,
    Base,
    Uncategorized,
}

impl NoteLayer {
    pub const ALL: [NoteLayer; 4] = [
        NoteLayer::Top,
        NoteLayer::Middle,
        NoteLayer::Base,
        NoteLayer::Uncategorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteLayer::Top => "top",
            NoteLayer::Middle => "middle",
            NoteLayer::Base => "base",
            NoteLayer::Uncategorized => "uncategorized",
        }
    }
}

impl std::fmt::Display for NoteLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteLayer::Top => write!(f, "Top"),
            NoteLayer::Middle => write!(f, "Middle"),
            NoteLayer::Base => write!(f, "Base"),
            NoteLayer::Uncategorized => write!(f, "Uncategorized"),
        }
    }
}

/// Position facet on the note detail page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotePosition {
    #[default]
    All,
    Top,
    Middle,
    Base,
    Uncategorized,
}

impl NotePosition {
    pub const ALL: [NotePosition; 5] = [
        NotePosition::All,
        NotePosition::Top,
        NotePosition::Middle,
        NotePosition::Base,
        NotePosition::Uncategorized,
    ];

    pub fn layer(&self) -> Option<NoteLayer> {
        match self {
            NotePosition::All => None,
            NotePosition::Top => Some(NoteLayer::Top),
            NotePosition::Middle => Some(NoteLayer::Middle),
            NotePosition::Base => Some(NoteLayer::Base),
            NotePosition::Uncategorized => Some(NoteLayer::Uncategorized),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.layer().map(|l| l.as_str()).unwrap_or("all")
    }
}

impl std::fmt::Display for NotePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.layer() {
            Some(layer) => write!(f, "{}", layer),
            None => write!(f, "All positions"),
        }
    }
}

impl FromStr for NotePosition {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotePosition::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOptionError::new("note position", s))
    }
}

/// Sort order of the flat item and brand lists
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSort {
    #[default]
    Alphabetical,
    Popularity,
}

impl ItemSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSort::Alphabetical => "alphabetical",
            ItemSort::Popularity => "popularity",
        }
    }
}

impl std::fmt::Display for ItemSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemSort::Alphabetical => write!(f, "A to Z"),
            ItemSort::Popularity => write!(f, "Most Popular"),
        }
    }
}

impl FromStr for ItemSort {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetical" => Ok(ItemSort::Alphabetical),
            "popularity" => Ok(ItemSort::Popularity),
            _ => Err(ParseOptionError::new("item sort", s)),
        }
    }
}

/// Per-layer note lists used by advanced search
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerNotes {
    pub top: Vec<String>,
    pub middle: Vec<String>,
    pub base: Vec<String>,
    pub uncategorized: Vec<String>,
}

impl LayerNotes {
    pub fn get(&self, layer: NoteLayer) -> &[String] {
        match layer {
            NoteLayer::Top => &self.top,
            NoteLayer::Middle => &self.middle,
            NoteLayer::Base => &self.base,
            NoteLayer::Uncategorized => &self.uncategorized,
        }
    }

    pub fn get_mut(&mut self, layer: NoteLayer) -> &mut Vec<String> {
        match layer {
            NoteLayer::Top => &mut self.top,
            NoteLayer::Middle => &mut self.middle,
            NoteLayer::Base => &mut self.base,
            NoteLayer::Uncategorized => &mut self.uncategorized,
        }
    }

    pub fn is_empty(&self) -> bool {
        NoteLayer::ALL.iter().all(|layer| self.get(*layer).is_empty())
    }
}

/// Structured query produced by the advanced search panel
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedSearchData {
    pub mode: SearchMode,
    pub accords: Vec<String>,
    pub excluded_accords: Vec<String>,
    pub notes: LayerNotes,
    pub excluded_notes: LayerNotes,
}

impl AdvancedSearchData {
    /// Empty selections in the given mode
    pub fn with_mode(mode: SearchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// True when no accord or note list holds a term
    pub fn is_empty(&self) -> bool {
        self.accords.is_empty()
            && self.excluded_accords.is_empty()
            && self.notes.is_empty()
            && self.excluded_notes.is_empty()
    }
}

/// Fragrance counts per gender over the loaded collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCounts {
    pub all: usize,
    pub men: usize,
    pub women: usize,
    pub unisex: usize,
}

impl GenderCounts {
    pub fn get(&self, gender: GenderFilter) -> usize {
        match gender {
            GenderFilter::All => self.all,
            GenderFilter::Men => self.men,
            GenderFilter::Women => self.women,
            GenderFilter::Unisex => self.unisex,
        }
    }
}

/// How often a note appears in each layer across a collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStatistics {
    pub top: usize,
    pub middle: usize,
    pub base: usize,
    pub uncategorized: usize,
    pub total: usize,
}

impl NoteStatistics {
    pub fn get(&self, layer: NoteLayer) -> usize {
        match layer {
            NoteLayer::Top => self.top,
            NoteLayer::Middle => self.middle,
            NoteLayer::Base => self.base,
            NoteLayer::Uncategorized => self.uncategorized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_default() {
        assert_eq!(SearchMode::default(), SearchMode::Regular);
    }

    #[test]
    fn test_search_mode_display() {
        assert_eq!(SearchMode::Regular.to_string(), "Regular");
        assert_eq!(SearchMode::Layered.to_string(), "Layered");
        assert_eq!(SearchMode::Uncategorized.to_string(), "Uncategorized");
    }

    #[test]
    fn test_enum_slugs_parse_back() {
        for gender in GenderFilter::ALL {
            assert_eq!(gender.as_str().parse::<GenderFilter>(), Ok(gender));
        }
        for sort in YearSort::ALL {
            assert_eq!(sort.as_str().parse::<YearSort>(), Ok(sort));
        }
        for position in NotePosition::ALL {
            assert_eq!(position.as_str().parse::<NotePosition>(), Ok(position));
        }
        assert!("sideways".parse::<NotePosition>().is_err());
    }

    #[test]
    fn test_empty_record_deserializes() {
        let fragrance: Fragrance = serde_json::from_str("{}").unwrap();
        assert_eq!(fragrance, Fragrance::default());

        let brand: Brand = serde_json::from_str("{}").unwrap();
        assert!(brand.country.is_none());
    }

    #[test]
    fn test_fragrance_camel_case_fields() {
        let json = r#"{
            "id": 7,
            "name": "Aventus",
            "brand": "Creed",
            "gender": "men",
            "year": 2010,
            "accords": "fruity, woody",
            "topNotes": "pineapple, bergamot",
            "middleNotes": null,
            "baseNotes": "musk",
            "extraField": true
        }"#;
        let fragrance: Fragrance = serde_json::from_str(json).unwrap();
        assert_eq!(fragrance.id, 7);
        assert_eq!(fragrance.top_notes.as_deref(), Some("pineapple, bergamot"));
        assert!(fragrance.middle_notes.is_none());
        assert!(fragrance.uncategorized_notes.is_none());
    }

    #[test]
    fn test_release_year_ignores_non_positive() {
        let mut fragrance = Fragrance::default();
        fragrance.year = Some(0);
        assert_eq!(fragrance.release_year(), None);
        fragrance.year = Some(1921);
        assert_eq!(fragrance.release_year(), Some(1921));
    }

    #[test]
    fn test_item_popularity_prefers_present_metric() {
        let note = CatalogItem {
            total_appearances: Some(12),
            ..CatalogItem::default()
        };
        let perfumer = CatalogItem {
            total_contributions: Some(4),
            ..CatalogItem::default()
        };
        assert_eq!(note.popularity(), 12);
        assert_eq!(perfumer.popularity(), 4);
        assert_eq!(CatalogItem::default().popularity(), 0);
    }

    #[test]
    fn test_gender_filter_matches_case_insensitively() {
        assert!(GenderFilter::Women.matches(Some("Women")));
        assert!(!GenderFilter::Women.matches(Some("men")));
        assert!(!GenderFilter::Men.matches(None));
        assert!(GenderFilter::All.matches(None));
    }

    #[test]
    fn test_advanced_search_serializes_camel_case() {
        let mut data = AdvancedSearchData::with_mode(SearchMode::Layered);
        data.excluded_accords.push("spicy".to_string());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["mode"], "layered");
        assert_eq!(json["excludedAccords"][0], "spicy");
        assert!(json["excludedNotes"]["top"].as_array().unwrap().is_empty());
    }
}
