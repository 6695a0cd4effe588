//! Core value types shared by the catalog, logic, event, and UI layers.

use serde::{Deserialize, Serialize};

use crate::util::{percent_decode, percent_encode};

/// Lower bound of the representable model-year range (used as the "no minimum" default).
pub const YEAR_MIN: u16 = 0;
/// Upper bound of the representable model-year range (used as the "no maximum" default).
pub const YEAR_MAX: u16 = 9999;

/// One car entry in the bundled dataset: a specific manufacturer/model/year/trim
/// combination. Records are immutable for the process lifetime; the catalog
/// module hands out shared references only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    /// Unique stable identifier, e.g. `sonata-2023`.
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub year: u16,
    /// Optional trim/powertrain label, e.g. `2.5 GDI`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub category: String,
    pub specs: CarSpecs,
    #[serde(default)]
    pub model_info: ModelInfo,
    /// Display price string; never parsed or compared numerically.
    #[serde(default)]
    pub price: String,
}

/// Descriptive payload for a record. Opaque display text as far as the core
/// is concerned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    #[serde(default)]
    pub introduction: String,
}

/// Specification sheet for one record. The always-present powertrain block is
/// flat; detail sections are optional and presence-checked at render time.
/// The core reads only `horsepower` (and the record's `year`) for sorting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSpecs {
    pub engine: String,
    pub horsepower: u32,
    pub torque: u32,
    pub transmission: String,
    pub drivetrain: String,
    #[serde(default)]
    pub fuel_efficiency: String,
    pub dimensions: CarDimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<EngineSpecs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceSpecs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electric: Option<ElectricSpecs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<SafetySpecs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfort: Option<ComfortSpecs>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDimensions {
    pub length: u32,    // mm
    pub width: u32,     // mm
    pub height: u32,    // mm
    pub wheelbase: u32, // mm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_clearance: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curb_weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trunk_capacity: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement: Option<u32>, // cc
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cylinders: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_power_rpm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_torque_rpm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_injection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbocharger: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSpecs {
    /// 0-100 km/h, seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_speed: Option<u32>, // km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combined_fuel_economy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub braking_distance: Option<f64>, // m, 100-0
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_capacity: Option<f64>, // kWh
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<u32>, // km per charge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast_charging_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_power_kw: Option<u32>,
    /// Vehicle-to-load support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v2l: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetySpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airbags: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adas_features: Vec<String>,
    /// Crash-test stars, 1-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncap_rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncap_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncap_org: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComfortSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunroof: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<u32>,
}

/// What: The user's current search/filter criteria over the catalog.
///
/// Inputs:
/// - Assembled from CLI query-string arguments at startup and from filter-pane
///   and search-input events thereafter.
///
/// Output:
/// - Consumed by [`crate::catalog::query`]; serializable to a shareable query
///   string via [`FilterSpec::to_query_string`].
///
/// Details:
/// - Empty `manufacturer`/`category` mean "any"; `min_year`/`max_year` default
///   to the full representable range. `min_year > max_year` is a legal spec
///   that matches nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    /// Exact manufacturer to match; empty matches all.
    pub manufacturer: String,
    /// Exact category to match; empty matches all.
    pub category: String,
    /// Inclusive lower model-year bound.
    pub min_year: u16,
    /// Inclusive upper model-year bound.
    pub max_year: u16,
    /// Case-insensitive substring matched against manufacturer and model.
    pub search_query: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            manufacturer: String::new(),
            category: String::new(),
            min_year: YEAR_MIN,
            max_year: YEAR_MAX,
            search_query: String::new(),
        }
    }
}

impl FilterSpec {
    /// What: Decide whether a record satisfies every predicate of this spec.
    ///
    /// Inputs:
    /// - `car`: Record under test.
    ///
    /// Output:
    /// - `true` when all four predicates (search, manufacturer, category,
    ///   year range) hold.
    ///
    /// Details:
    /// - The search predicate is a case-insensitive substring test against
    ///   manufacturer OR model; the manufacturer/category predicates are
    ///   case-sensitive exact matches over controlled vocabulary.
    pub fn matches(&self, car: &CarRecord) -> bool {
        let matches_search = if self.search_query.is_empty() {
            true
        } else {
            let q = self.search_query.to_lowercase();
            car.manufacturer.to_lowercase().contains(&q) || car.model.to_lowercase().contains(&q)
        };
        let matches_manufacturer =
            self.manufacturer.is_empty() || car.manufacturer == self.manufacturer;
        let matches_category = self.category.is_empty() || car.category == self.category;
        let matches_year = car.year >= self.min_year && car.year <= self.max_year;
        matches_search && matches_manufacturer && matches_category && matches_year
    }

    /// `true` when every field still holds its default ("match everything") value.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// What: Serialize this spec as a shareable query string.
    ///
    /// Output:
    /// - `q=...&manufacturer=...&category=...&minYear=...&maxYear=...` with
    ///   default-valued parameters omitted; the empty string for a default
    ///   spec. Values are percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.search_query.is_empty() {
            parts.push(format!("q={}", percent_encode(&self.search_query)));
        }
        if !self.manufacturer.is_empty() {
            parts.push(format!("manufacturer={}", percent_encode(&self.manufacturer)));
        }
        if !self.category.is_empty() {
            parts.push(format!("category={}", percent_encode(&self.category)));
        }
        if self.min_year > YEAR_MIN {
            parts.push(format!("minYear={}", self.min_year));
        }
        if self.max_year < YEAR_MAX {
            parts.push(format!("maxYear={}", self.max_year));
        }
        parts.join("&")
    }

    /// What: Parse a query string back into a spec.
    ///
    /// Inputs:
    /// - `s`: Query string, with or without a leading `?`.
    ///
    /// Output:
    /// - A spec with every recognized parameter applied; unknown keys and
    ///   unparsable year values fall back to the defaults.
    pub fn from_query_string(s: &str) -> Self {
        let mut out = Self::default();
        for pair in s.trim().trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let mut it = pair.splitn(2, '=');
            let key = it.next().unwrap_or("");
            let val = percent_decode(it.next().unwrap_or(""));
            match key {
                "q" => out.search_query = val,
                "manufacturer" => out.manufacturer = val,
                "category" => out.category = val,
                "minYear" => {
                    if let Ok(v) = val.parse::<u16>() {
                        out.min_year = v;
                    }
                }
                "maxYear" => {
                    if let Ok(v) = val.parse::<u16>() {
                        out.max_year = v;
                    }
                }
                _ => {}
            }
        }
        out
    }
}

/// Which pane currently receives pane-level key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Filters,
    Results,
}

impl Focus {
    /// Next pane in Tab order, skipping Filters when that pane is hidden.
    pub fn next(self, filters_visible: bool) -> Self {
        match self {
            Focus::Search if filters_visible => Focus::Filters,
            Focus::Search => Focus::Results,
            Focus::Filters => Focus::Results,
            Focus::Results => Focus::Search,
        }
    }
}

/// Caller-requested ordering applied on top of the stable filter output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the dataset's own order (the filter is stable).
    #[default]
    DatasetOrder,
    /// Newest model year first.
    YearDesc,
    /// Highest horsepower first.
    HorsepowerDesc,
    /// Manufacturer then model, A-Z.
    NameAsc,
}

impl SortMode {
    /// Cycle to the next mode in display order.
    pub fn next(self) -> Self {
        match self {
            SortMode::DatasetOrder => SortMode::YearDesc,
            SortMode::YearDesc => SortMode::HorsepowerDesc,
            SortMode::HorsepowerDesc => SortMode::NameAsc,
            SortMode::NameAsc => SortMode::DatasetOrder,
        }
    }

    /// Short label shown in the Results pane title.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::DatasetOrder => "catalog",
            SortMode::YearDesc => "year ↓",
            SortMode::HorsepowerDesc => "power ↓",
            SortMode::NameAsc => "name A-Z",
        }
    }

    /// Canonical settings key written by `save_sort_mode`.
    pub fn config_key(self) -> &'static str {
        match self {
            SortMode::DatasetOrder => "catalog",
            SortMode::YearDesc => "year",
            SortMode::HorsepowerDesc => "horsepower",
            SortMode::NameAsc => "name",
        }
    }

    /// Parse a settings value back into a mode, accepting common aliases.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" | "dataset" | "none" => Some(SortMode::DatasetOrder),
            "year" | "year_desc" | "newest" => Some(SortMode::YearDesc),
            "horsepower" | "power" | "hp" => Some(SortMode::HorsepowerDesc),
            "name" | "name_asc" | "alphabetical" => Some(SortMode::NameAsc),
            _ => None,
        }
    }
}

/// Rows of the Filters pane, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Manufacturer,
    Category,
    MinYear,
    MaxYear,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Manufacturer,
        FilterField::Category,
        FilterField::MinYear,
        FilterField::MaxYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Manufacturer => "Manufacturer",
            FilterField::Category => "Category",
            FilterField::MinYear => "Min year",
            FilterField::MaxYear => "Max year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::car;

    #[test]
    /// What: Exercise every predicate of `FilterSpec::matches` in isolation.
    ///
    /// Inputs:
    /// - A Hyundai Sonata 2023 record against specs varying one field at a time.
    ///
    /// Output:
    /// - Search is case-insensitive over manufacturer and model, vocabulary
    ///   matches are exact, and year bounds are inclusive.
    fn filter_spec_predicates() {
        let c = car("a1", "Hyundai", "Sonata", 2023, "Sedan");
        assert!(FilterSpec::default().matches(&c));

        let mut spec = FilterSpec::default();
        spec.search_query = "sona".into();
        assert!(spec.matches(&c));
        spec.search_query = "HYUN".into();
        assert!(spec.matches(&c));
        spec.search_query = "kia".into();
        assert!(!spec.matches(&c));

        let mut spec = FilterSpec::default();
        spec.manufacturer = "Hyundai".into();
        assert!(spec.matches(&c));
        spec.manufacturer = "hyundai".into(); // controlled vocabulary is case-sensitive
        assert!(!spec.matches(&c));

        let mut spec = FilterSpec::default();
        spec.category = "SUV".into();
        assert!(!spec.matches(&c));

        let mut spec = FilterSpec::default();
        spec.min_year = 2023;
        spec.max_year = 2023;
        assert!(spec.matches(&c));
        spec.max_year = 2022;
        assert!(!spec.matches(&c));
    }

    #[test]
    /// What: Round-trip a spec through its query-string form.
    ///
    /// Inputs:
    /// - A fully populated spec and a default spec.
    ///
    /// Output:
    /// - Defaults serialize to the empty string; non-defaults survive the
    ///   round trip including percent-encoded values.
    fn filter_spec_query_string_round_trip() {
        assert_eq!(FilterSpec::default().to_query_string(), "");
        assert!(FilterSpec::from_query_string("").is_default());

        let spec = FilterSpec {
            manufacturer: "Hyundai".into(),
            category: "Sedan".into(),
            min_year: 2020,
            max_year: 2023,
            search_query: "grand tour".into(),
        };
        let qs = spec.to_query_string();
        assert_eq!(
            qs,
            "q=grand%20tour&manufacturer=Hyundai&category=Sedan&minYear=2020&maxYear=2023"
        );
        assert_eq!(FilterSpec::from_query_string(&qs), spec);

        // Leading '?' and unknown keys are tolerated.
        let parsed = FilterSpec::from_query_string("?q=k5&utm_source=x");
        assert_eq!(parsed.search_query, "k5");
        assert!(parsed.manufacturer.is_empty());
    }

    #[test]
    /// What: Verify sort-mode cycling and config-key round-trips.
    ///
    /// Output:
    /// - Four `next` steps return to the start; every mode's canonical key
    ///   parses back to itself.
    fn sort_mode_cycle_and_config_keys() {
        let start = SortMode::DatasetOrder;
        let mut m = start;
        for _ in 0..4 {
            m = m.next();
        }
        assert_eq!(m, start);

        for mode in [
            SortMode::DatasetOrder,
            SortMode::YearDesc,
            SortMode::HorsepowerDesc,
            SortMode::NameAsc,
        ] {
            assert_eq!(SortMode::from_config_key(mode.config_key()), Some(mode));
        }
        assert_eq!(SortMode::from_config_key("bogus"), None);
    }

    #[test]
    /// What: Tab order skips the Filters pane when it is hidden.
    fn focus_next_honors_filter_visibility() {
        assert_eq!(Focus::Search.next(true), Focus::Filters);
        assert_eq!(Focus::Search.next(false), Focus::Results);
        assert_eq!(Focus::Filters.next(true), Focus::Results);
        assert_eq!(Focus::Results.next(true), Focus::Search);
    }
}
