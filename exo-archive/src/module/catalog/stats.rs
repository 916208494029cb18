//! Distributions behind the catalog charts

use std::collections::BTreeMap;

use exo_common::{Exoplanet, ExoplanetStatus};
use serde::Serialize;

const TOP_MISSIONS: usize = 8;
const RECENT_YEARS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub confirmed: usize,
    pub candidate: usize,
    pub false_positive: usize,
    pub unknown: usize,
}

pub fn status_distribution(planets: &[Exoplanet]) -> StatusCounts {
    planets
        .iter()
        .fold(StatusCounts::default(), |mut counts, planet| {
            match planet.status {
                ExoplanetStatus::Confirmed => counts.confirmed += 1,
                ExoplanetStatus::Candidate => counts.candidate += 1,
                ExoplanetStatus::FalsePositive => counts.false_positive += 1,
                ExoplanetStatus::Unknown => counts.unknown += 1,
            }
            counts
        })
}

/// Planets per mission, most common first, at most eight entries. Ties
/// keep the order in which missions first appear.
pub fn mission_distribution(planets: &[Exoplanet]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for planet in planets {
        match counts.iter_mut().find(|(mission, _)| *mission == planet.mission) {
            Some((_, count)) => *count += 1,
            None => counts.push((planet.mission.clone(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_MISSIONS);
    counts
}

/// Discoveries per year, oldest first, limited to the ten latest years.
pub fn year_distribution(planets: &[Exoplanet]) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in planets.iter().filter_map(|p| p.discovery_year) {
        *counts.entry(year).or_default() += 1;
    }

    let skip = counts.len().saturating_sub(RECENT_YEARS);
    counts.into_iter().skip(skip).collect()
}

/// Orbital period against radius, for planets where both are known.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub name: String,
    pub orbital_period: f64,
    pub planet_radius: f64,
    pub status: ExoplanetStatus,
    pub mission: String,
    pub discovery_year: Option<i32>,
}

pub fn scatter_points(planets: &[Exoplanet]) -> Vec<ScatterPoint> {
    planets
        .iter()
        .filter_map(|planet| {
            Some(ScatterPoint {
                name: planet.name.clone(),
                orbital_period: planet.orbital_period?,
                planet_radius: planet.planet_radius?,
                status: planet.status,
                mission: planet.mission.clone(),
                discovery_year: planet.discovery_year,
            })
        })
        .collect()
}
