//! Bundled sample catalog served when every network path fails

use exo_common::{mission, Exoplanet, ExoplanetStatus};

struct FallbackEntry {
    id: &'static str,
    name: &'static str,
    orbital_period: Option<f64>,
    planet_radius: Option<f64>,
    stellar_magnitude: Option<f64>,
    mission: &'static str,
    discovery_year: i32,
    status: ExoplanetStatus,
}

#[allow(clippy::too_many_arguments)]
const fn entry(
    id: &'static str,
    name: &'static str,
    orbital_period: Option<f64>,
    planet_radius: Option<f64>,
    stellar_magnitude: Option<f64>,
    mission: &'static str,
    discovery_year: i32,
    status: ExoplanetStatus,
) -> FallbackEntry {
    FallbackEntry {
        id,
        name,
        orbital_period,
        planet_radius,
        stellar_magnitude,
        mission,
        discovery_year,
        status,
    }
}

static FALLBACK_CATALOG: &[FallbackEntry] = &[
    entry("kepler-452b", "Kepler-452b", Some(384.8), Some(1.63), Some(13.4), mission::KEPLER, 2015, ExoplanetStatus::Confirmed),
    entry("k2-18b", "K2-18b", Some(33.0), Some(2.3), Some(8.2), mission::KEPLER, 2015, ExoplanetStatus::Confirmed),
    entry("kepler-186f", "Kepler-186f", Some(129.9), Some(1.17), Some(15.3), mission::KEPLER, 2014, ExoplanetStatus::Confirmed),
    entry("kepler-22b", "Kepler-22b", Some(289.9), Some(2.38), Some(11.7), mission::KEPLER, 2011, ExoplanetStatus::Confirmed),
    entry("kepler-442b", "Kepler-442b", Some(112.3), Some(1.34), Some(14.9), mission::KEPLER, 2015, ExoplanetStatus::Confirmed),
    entry("kepler-62f", "Kepler-62f", Some(267.3), Some(1.41), Some(14.1), mission::KEPLER, 2013, ExoplanetStatus::Confirmed),
    entry("kepler-1649c", "Kepler-1649c", Some(19.5), Some(1.06), Some(16.8), mission::KEPLER, 2020, ExoplanetStatus::Confirmed),
    entry("kepler-438b", "Kepler-438b", Some(35.2), Some(1.12), Some(14.7), mission::KEPLER, 2015, ExoplanetStatus::Confirmed),
    entry("kepler-296e", "Kepler-296e", Some(34.1), Some(1.53), Some(14.6), mission::KEPLER, 2014, ExoplanetStatus::Confirmed),
    entry("kepler-1652b", "Kepler-1652b", Some(38.1), Some(1.6), Some(15.2), mission::KEPLER, 2017, ExoplanetStatus::Confirmed),
    entry("kepler-1638b", "Kepler-1638b", Some(259.3), Some(1.87), Some(14.8), mission::KEPLER, 2016, ExoplanetStatus::Confirmed),
    entry("kepler-1544b", "Kepler-1544b", Some(168.8), Some(1.34), Some(15.1), mission::KEPLER, 2016, ExoplanetStatus::Confirmed),
    entry("kepler-1606b", "Kepler-1606b", Some(196.4), Some(1.91), Some(15.4), mission::KEPLER, 2016, ExoplanetStatus::Confirmed),
    entry("kepler-1540b", "Kepler-1540b", Some(125.4), Some(1.25), Some(14.9), mission::KEPLER, 2016, ExoplanetStatus::Confirmed),
    entry("kepler-1593b", "Kepler-1593b", Some(174.5), Some(1.45), Some(15.3), mission::KEPLER, 2016, ExoplanetStatus::Confirmed),
    entry("toi-715b", "TOI-715b", Some(19.3), Some(1.55), Some(12.2), mission::TESS, 2023, ExoplanetStatus::Candidate),
    entry("trappist-1e", "TRAPPIST-1e", Some(6.1), Some(0.92), Some(18.8), mission::SPITZER, 2017, ExoplanetStatus::Confirmed),
    entry("hd-209458b", "HD 209458b", Some(3.5), Some(1.38), Some(7.6), mission::GROUND_BASED, 1999, ExoplanetStatus::Confirmed),
    entry("proxima-centauri-b", "Proxima Centauri b", Some(11.2), None, Some(11.1), mission::GROUND_BASED, 2016, ExoplanetStatus::Confirmed),
    entry("wasp-12b", "WASP-12b", Some(1.09), Some(1.9), Some(11.7), mission::GROUND_BASED, 2008, ExoplanetStatus::Confirmed),
    entry("hd-189733b", "HD 189733b", Some(2.22), Some(1.14), Some(7.7), mission::GROUND_BASED, 2005, ExoplanetStatus::Confirmed),
    entry("toi-1231b", "TOI-1231b", Some(24.2), Some(3.65), Some(12.4), mission::TESS, 2021, ExoplanetStatus::Confirmed),
    entry("toi-700d", "TOI-700d", Some(37.4), Some(1.19), Some(12.9), mission::TESS, 2020, ExoplanetStatus::Confirmed),
    entry("toi-1431b", "TOI-1431b", Some(2.7), Some(1.49), Some(8.3), mission::TESS, 2021, ExoplanetStatus::Confirmed),
    entry("toi-1695b", "TOI-1695b", Some(3.1), Some(1.79), Some(11.2), mission::TESS, 2022, ExoplanetStatus::Confirmed),
    entry("toi-1749b", "TOI-1749b", Some(2.4), Some(1.95), Some(13.1), mission::TESS, 2022, ExoplanetStatus::Confirmed),
    entry("lhs-1140b", "LHS 1140b", Some(24.7), Some(1.72), Some(14.2), mission::GROUND_BASED, 2017, ExoplanetStatus::Confirmed),
    entry("wolf-1061c", "Wolf 1061c", Some(17.9), Some(1.66), Some(10.1), mission::GROUND_BASED, 2015, ExoplanetStatus::Confirmed),
    entry("gj-1132b", "GJ 1132b", Some(1.63), Some(1.13), Some(13.5), mission::GROUND_BASED, 2015, ExoplanetStatus::Confirmed),
    entry("hd-85512b", "HD 85512b", Some(58.4), Some(1.7), Some(8.4), mission::GROUND_BASED, 2011, ExoplanetStatus::Confirmed),
    entry("hd-40307g", "HD 40307g", Some(197.8), Some(2.4), Some(7.1), mission::GROUND_BASED, 2012, ExoplanetStatus::Confirmed),
    entry("gj-667cc", "GJ 667Cc", Some(28.1), Some(1.54), Some(10.2), mission::GROUND_BASED, 2012, ExoplanetStatus::Confirmed),
    entry("trappist-1f", "TRAPPIST-1f", Some(9.2), Some(1.04), Some(18.8), mission::SPITZER, 2017, ExoplanetStatus::Confirmed),
    entry("trappist-1g", "TRAPPIST-1g", Some(12.4), Some(1.13), Some(18.8), mission::SPITZER, 2017, ExoplanetStatus::Confirmed),
    entry("trappist-1h", "TRAPPIST-1h", Some(18.8), Some(0.76), Some(18.8), mission::SPITZER, 2017, ExoplanetStatus::Confirmed),
    entry("wasp-39b", "WASP-39b", Some(4.06), Some(1.27), Some(12.1), mission::HUBBLE, 2011, ExoplanetStatus::Confirmed),
    entry("wasp-43b", "WASP-43b", Some(0.81), Some(1.04), Some(12.4), mission::HUBBLE, 2011, ExoplanetStatus::Confirmed),
    entry("wasp-121b", "WASP-121b", Some(1.27), Some(1.87), Some(10.4), mission::HUBBLE, 2015, ExoplanetStatus::Confirmed),
    entry("wasp-17b", "WASP-17b", Some(3.74), Some(1.99), Some(11.6), mission::HUBBLE, 2009, ExoplanetStatus::Confirmed),
    entry("wasp-96b", "WASP-96b", Some(3.4), Some(1.2), Some(12.2), mission::JAMES_WEBB, 2013, ExoplanetStatus::Confirmed),
    entry("wasp-39b-jwst", "WASP-39b (JWST)", Some(4.06), Some(1.27), Some(12.1), mission::JAMES_WEBB, 2022, ExoplanetStatus::Confirmed),
    entry("vhs-1256b", "VHS 1256b", Some(17000.0), Some(6.8), Some(18.8), mission::JAMES_WEBB, 2023, ExoplanetStatus::Confirmed),
    entry("hip-65426b", "HIP 65426b", Some(600.0), Some(1.5), Some(7.0), mission::JAMES_WEBB, 2022, ExoplanetStatus::Confirmed),
    entry("gj-1214b-jwst", "GJ 1214b (JWST)", Some(1.58), Some(2.74), Some(14.7), mission::JAMES_WEBB, 2022, ExoplanetStatus::Confirmed),
];

/// Fresh copy of the bundled catalog. Never empty, names are unique.
pub fn fallback_exoplanets() -> Vec<Exoplanet> {
    FALLBACK_CATALOG
        .iter()
        .map(|e| Exoplanet {
            id: e.id.to_string(),
            name: e.name.to_string(),
            orbital_period: e.orbital_period,
            planet_radius: e.planet_radius,
            stellar_magnitude: e.stellar_magnitude,
            mission: e.mission.to_string(),
            discovery_year: Some(e.discovery_year),
            status: e.status,
        })
        .collect()
}
