//! Search, filter and sort over an in-memory collection

use std::cmp::Ordering;

use exo_common::{Exoplanet, FilterCriteria, MissionFilter, SortKey, StatusFilter};

/// Filter and sort a collection. The input is left untouched.
///
/// A record is kept when its name contains `search_term` (case-insensitive)
/// and it passes both the status and the mission filter. Sorting is stable.
pub fn filter_exoplanets(
    exoplanets: &[Exoplanet],
    search_term: &str,
    status: &StatusFilter,
    mission: &MissionFilter,
    sort_by: SortKey,
) -> Vec<Exoplanet> {
    let needle = search_term.to_lowercase();

    let mut matched: Vec<Exoplanet> = exoplanets
        .iter()
        .filter(|planet| planet.name.to_lowercase().contains(&needle))
        .filter(|planet| status.matches(planet.status))
        .filter(|planet| mission.matches(&planet.mission))
        .cloned()
        .collect();

    matched.sort_by(|a, b| compare(a, b, sort_by));
    matched
}

/// Apply a full filter bar state.
pub fn apply(criteria: &FilterCriteria, exoplanets: &[Exoplanet]) -> Vec<Exoplanet> {
    filter_exoplanets(
        exoplanets,
        &criteria.search_term,
        &criteria.status,
        &criteria.mission,
        criteria.sort_by,
    )
}

fn compare(a: &Exoplanet, b: &Exoplanet, sort_by: SortKey) -> Ordering {
    match sort_by {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::OrbitalPeriod => nulls_last(a.orbital_period, b.orbital_period, |x, y| {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }),
        SortKey::PlanetRadius => nulls_last(a.planet_radius, b.planet_radius, |x, y| {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }),
        // Newest first
        SortKey::DiscoveryYear => nulls_last(a.discovery_year, b.discovery_year, |x, y| y.cmp(&x)),
    }
}

/// Case-insensitive first. Names equal up to case put lowercase first.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn nulls_last<T: Copy>(
    a: Option<T>,
    b: Option<T>,
    present: impl Fn(T, T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => present(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
