//! Raw archive rows -> normalized records

use std::collections::HashSet;

use exo_common::{Exoplanet, ExoplanetStatus, RawRecord};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::mission::map_mission;

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How live records get their status. The archive's `ps` table carries no
/// candidate/false-positive classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Random draw: 70% confirmed, 20% candidate, 10% false positive
    #[default]
    Demo,
    /// Every live record is `unknown`
    Unknown,
}

impl StatusPolicy {
    pub fn assign<R: Rng + ?Sized>(&self, rng: &mut R) -> ExoplanetStatus {
        match self {
            StatusPolicy::Demo => status_for_roll(rng.random::<f64>()),
            StatusPolicy::Unknown => ExoplanetStatus::Unknown,
        }
    }
}

/// Map a uniform draw in `[0, 1)` onto the demo distribution.
pub fn status_for_roll(roll: f64) -> ExoplanetStatus {
    if roll < 0.7 {
        ExoplanetStatus::Confirmed
    } else if roll < 0.9 {
        ExoplanetStatus::Candidate
    } else {
        ExoplanetStatus::FalsePositive
    }
}

fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Normalize a batch of rows.
///
/// Rows without a usable name are dropped. The mission is derived from the
/// discovery method; callers that know better overwrite it afterwards.
pub fn normalize_records<R: Rng + ?Sized>(
    raw: Vec<RawRecord>,
    policy: StatusPolicy,
    rng: &mut R,
) -> Vec<Exoplanet> {
    raw.into_iter()
        .filter_map(|record| {
            let name = record.pl_name.as_deref().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return None;
            }

            let year = record
                .disc_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let method = record
                .discoverymethod
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or("Unknown");

            Some(Exoplanet {
                id: format!("{}_{}_{}", name, year, random_suffix(rng)),
                name: name.to_string(),
                orbital_period: record.pl_orbper,
                planet_radius: record.pl_rade,
                stellar_magnitude: record.sy_vmag,
                mission: map_mission(method),
                discovery_year: record.disc_year,
                status: policy.assign(rng),
            })
        })
        .collect()
}

/// Drop later records whose name was already seen. Exact, case-sensitive.
pub fn dedup_by_name(planets: Vec<Exoplanet>) -> Vec<Exoplanet> {
    let mut seen = HashSet::new();
    planets
        .into_iter()
        .filter(|planet| seen.insert(planet.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn raw(name: Option<&str>, method: Option<&str>, year: Option<i32>) -> RawRecord {
        RawRecord {
            pl_name: name.map(str::to_string),
            pl_orbper: Some(3.5),
            pl_rade: None,
            sy_vmag: Some(7.6),
            discoverymethod: method.map(str::to_string),
            disc_year: year,
        }
    }

    #[test]
    fn test_drops_missing_and_blank_names() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = vec![
            raw(None, Some("Transit"), Some(2015)),
            raw(Some(""), Some("Transit"), Some(2015)),
            raw(Some("   \t"), Some("Transit"), Some(2015)),
            raw(Some("  HD 209458 b "), Some("Transit"), Some(1999)),
        ];
        let planets = normalize_records(rows, StatusPolicy::Demo, &mut rng);
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].name, "HD 209458 b");
    }

    #[test]
    fn test_fields_pass_through_without_coercion() {
        let mut rng = StdRng::seed_from_u64(1);
        let planets = normalize_records(
            vec![raw(Some("GJ 1214 b"), Some("Transit"), None)],
            StatusPolicy::Unknown,
            &mut rng,
        );
        let planet = &planets[0];
        assert_eq!(planet.orbital_period, Some(3.5));
        assert_eq!(planet.planet_radius, None);
        assert_eq!(planet.stellar_magnitude, Some(7.6));
        assert_eq!(planet.discovery_year, None);
        assert_eq!(planet.mission, "Kepler");
        assert_eq!(planet.status, ExoplanetStatus::Unknown);
        assert!(planet.id.starts_with("GJ 1214 b_unknown_"));
        assert_eq!(planet.id.len(), "GJ 1214 b_unknown_".len() + ID_SUFFIX_LEN);
    }

    #[test]
    fn test_missing_method_maps_to_unknown() {
        let mut rng = StdRng::seed_from_u64(1);
        let planets = normalize_records(
            vec![raw(Some("X-1 b"), None, Some(2020))],
            StatusPolicy::Demo,
            &mut rng,
        );
        assert_eq!(planets[0].mission, "Unknown");
        assert!(planets[0].id.starts_with("X-1 b_2020_"));
    }

    #[test]
    fn test_empty_method_maps_to_unknown() {
        let mut rng = StdRng::seed_from_u64(3);
        let planets = normalize_records(
            vec![raw(Some("X-2 b"), Some(""), Some(2021))],
            StatusPolicy::Demo,
            &mut rng,
        );
        assert_eq!(planets[0].mission, "Unknown");
    }

    #[test]
    fn test_ids_unique_within_batch() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = (0..200)
            .map(|_| raw(Some("Same b"), Some("Transit"), Some(2020)))
            .collect();
        let planets = normalize_records(rows, StatusPolicy::Demo, &mut rng);
        let ids: HashSet<_> = planets.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_status_for_roll_boundaries() {
        assert_eq!(status_for_roll(0.0), ExoplanetStatus::Confirmed);
        assert_eq!(status_for_roll(0.6999), ExoplanetStatus::Confirmed);
        assert_eq!(status_for_roll(0.7), ExoplanetStatus::Candidate);
        assert_eq!(status_for_roll(0.8999), ExoplanetStatus::Candidate);
        assert_eq!(status_for_roll(0.9), ExoplanetStatus::FalsePositive);
    }

    #[test]
    fn test_demo_policy_distribution() {
        let mut rng = StdRng::seed_from_u64(2024);
        let draws: Vec<_> = (0..10_000).map(|_| StatusPolicy::Demo.assign(&mut rng)).collect();
        let confirmed = draws.iter().filter(|s| **s == ExoplanetStatus::Confirmed).count();
        let false_positive = draws
            .iter()
            .filter(|s| **s == ExoplanetStatus::FalsePositive)
            .count();
        assert!((6_500..7_500).contains(&confirmed));
        assert!((700..1_300).contains(&false_positive));
        assert!(!draws.contains(&ExoplanetStatus::Unknown));
    }

    #[test]
    fn test_dedup_first_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut planets = normalize_records(
            vec![
                raw(Some("WASP-12 b"), Some("Transit"), Some(2008)),
                raw(Some("wasp-12 b"), Some("Transit"), Some(2008)),
                raw(Some("WASP-12 b"), Some("Radial Velocity"), Some(2009)),
            ],
            StatusPolicy::Demo,
            &mut rng,
        );
        planets[0].mission = "first".to_string();
        let unique = dedup_by_name(planets);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].mission, "first");
        assert_eq!(unique[0].discovery_year, Some(2008));
        assert_eq!(unique[1].name, "wasp-12 b");
    }
}
