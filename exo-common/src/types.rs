use serde::{Deserialize, Serialize};

/// Mission labels shared by the mapper, the fetch buckets and the filters.
pub mod mission {
    pub const KEPLER: &str = "Kepler";
    pub const TESS: &str = "TESS";
    pub const SPITZER: &str = "Spitzer";
    pub const GROUND_BASED: &str = "Ground-based";
    pub const HUBBLE: &str = "Hubble";
    pub const JAMES_WEBB: &str = "James Webb";

    /// Every mission a normalized record can be labelled with, apart from
    /// unmapped discovery-method strings.
    pub const ALL: [&str; 6] = [KEPLER, TESS, SPITZER, GROUND_BASED, HUBBLE, JAMES_WEBB];
}

/// One row as returned by the archive's `ps` table.
///
/// Every column is optional: the archive emits `null` for unknown values and
/// older endpoints omit columns entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub pl_name: Option<String>,
    /// Orbital period in days
    pub pl_orbper: Option<f64>,
    /// Planet radius in Earth radii
    pub pl_rade: Option<f64>,
    /// Host system V-band magnitude
    pub sy_vmag: Option<f64>,
    pub discoverymethod: Option<String>,
    pub disc_year: Option<i32>,
}

/// Classification shown alongside a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExoplanetStatus {
    Confirmed,
    Candidate,
    FalsePositive,
    Unknown,
}

impl ExoplanetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExoplanetStatus::Confirmed => "confirmed",
            ExoplanetStatus::Candidate => "candidate",
            ExoplanetStatus::FalsePositive => "false_positive",
            ExoplanetStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ExoplanetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExoplanetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(ExoplanetStatus::Confirmed),
            "candidate" => Ok(ExoplanetStatus::Candidate),
            "false_positive" | "falsepositive" => Ok(ExoplanetStatus::FalsePositive),
            "unknown" => Ok(ExoplanetStatus::Unknown),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// Normalized planet record consumed by views and exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exoplanet {
    /// Synthetic identifier, unique within one fetch
    pub id: String,
    /// Trimmed, never empty
    pub name: String,
    pub orbital_period: Option<f64>,
    pub planet_radius: Option<f64>,
    pub stellar_magnitude: Option<f64>,
    pub mission: String,
    pub discovery_year: Option<i32>,
    pub status: ExoplanetStatus,
}

/// Status half of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Confirmed,
    Candidate,
    FalsePositive,
    Unknown,
}

impl StatusFilter {
    pub fn matches(&self, status: ExoplanetStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Confirmed => status == ExoplanetStatus::Confirmed,
            StatusFilter::Candidate => status == ExoplanetStatus::Candidate,
            StatusFilter::FalsePositive => status == ExoplanetStatus::FalsePositive,
            StatusFilter::Unknown => status == ExoplanetStatus::Unknown,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        Ok(match s.parse::<ExoplanetStatus>()? {
            ExoplanetStatus::Confirmed => StatusFilter::Confirmed,
            ExoplanetStatus::Candidate => StatusFilter::Candidate,
            ExoplanetStatus::FalsePositive => StatusFilter::FalsePositive,
            ExoplanetStatus::Unknown => StatusFilter::Unknown,
        })
    }
}

/// Mission half of the filter bar. Anything other than `"all"` is an exact
/// mission label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MissionFilter {
    #[default]
    All,
    Mission(String),
}

impl MissionFilter {
    pub fn matches(&self, mission: &str) -> bool {
        match self {
            MissionFilter::All => true,
            MissionFilter::Mission(wanted) => wanted == mission,
        }
    }
}

impl From<String> for MissionFilter {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("all") {
            MissionFilter::All
        } else {
            MissionFilter::Mission(value)
        }
    }
}

impl From<&str> for MissionFilter {
    fn from(value: &str) -> Self {
        MissionFilter::from(value.to_string())
    }
}

impl From<MissionFilter> for String {
    fn from(value: MissionFilter) -> Self {
        match value {
            MissionFilter::All => "all".to_string(),
            MissionFilter::Mission(name) => name,
        }
    }
}

/// Column the filtered list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    #[serde(alias = "orbitalPeriod")]
    OrbitalPeriod,
    #[serde(alias = "planetRadius")]
    PlanetRadius,
    #[serde(alias = "discoveryYear")]
    DiscoveryYear,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "orbital_period" | "orbitalPeriod" => Ok(SortKey::OrbitalPeriod),
            "planet_radius" | "planetRadius" => Ok(SortKey::PlanetRadius),
            "discovery_year" | "discoveryYear" => Ok(SortKey::DiscoveryYear),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// Complete filter bar state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status: StatusFilter,
    pub mission: MissionFilter,
    pub sort_by: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_tolerates_nulls_and_extra_columns() {
        let json = r#"[
            {"pl_name": "TOI-700 d", "pl_orbper": 37.42, "pl_rade": null, "sy_vmag": 13.1,
             "disc_year": 2020, "discoverymethod": "Transit", "pl_letter": "d"},
            {"pl_name": null}
        ]"#;
        let rows: Vec<RawRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pl_name.as_deref(), Some("TOI-700 d"));
        assert_eq!(rows[0].pl_rade, None);
        assert_eq!(rows[0].disc_year, Some(2020));
        assert_eq!(rows[1], RawRecord::default());
    }

    #[test]
    fn test_exoplanet_serializes_camel_case() {
        let planet = Exoplanet {
            id: "x".to_string(),
            name: "Kepler-22b".to_string(),
            orbital_period: Some(289.9),
            planet_radius: None,
            stellar_magnitude: Some(11.7),
            mission: mission::KEPLER.to_string(),
            discovery_year: Some(2011),
            status: ExoplanetStatus::FalsePositive,
        };
        let value = serde_json::to_value(&planet).unwrap();
        assert_eq!(value["orbitalPeriod"], 289.9);
        assert!(value["planetRadius"].is_null());
        assert_eq!(value["discoveryYear"], 2011);
        assert_eq!(value["status"], "false_positive");
    }

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [
            ExoplanetStatus::Confirmed,
            ExoplanetStatus::Candidate,
            ExoplanetStatus::FalsePositive,
            ExoplanetStatus::Unknown,
        ] {
            assert_eq!(status.as_str().parse::<ExoplanetStatus>(), Ok(status));
        }
        assert!("dwarf".parse::<ExoplanetStatus>().is_err());
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.matches(ExoplanetStatus::Candidate));
        assert!(StatusFilter::Candidate.matches(ExoplanetStatus::Candidate));
        assert!(!StatusFilter::Confirmed.matches(ExoplanetStatus::Candidate));
        assert_eq!("ALL".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "false_positive".parse::<StatusFilter>(),
            Ok(StatusFilter::FalsePositive)
        );
    }

    #[test]
    fn test_mission_filter_from_string() {
        assert_eq!(MissionFilter::from("all"), MissionFilter::All);
        let tess = MissionFilter::from("TESS");
        assert!(tess.matches("TESS"));
        assert!(!tess.matches("tess"));
        assert!(MissionFilter::All.matches("Radial Velocity"));
        assert_eq!(String::from(tess), "TESS");
    }

    #[test]
    fn test_sort_key_accepts_both_spellings() {
        assert_eq!("orbitalPeriod".parse::<SortKey>(), Ok(SortKey::OrbitalPeriod));
        assert_eq!("discovery_year".parse::<SortKey>(), Ok(SortKey::DiscoveryYear));
        assert!("mass".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_filter_criteria_deserializes_with_defaults() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"mission": "Kepler", "sort_by": "planetRadius"}"#).unwrap();
        assert_eq!(criteria.search_term, "");
        assert_eq!(criteria.status, StatusFilter::All);
        assert_eq!(criteria.mission, MissionFilter::Mission("Kepler".to_string()));
        assert_eq!(criteria.sort_by, SortKey::PlanetRadius);
    }
}
