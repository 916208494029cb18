//! Discovery method -> mission label mapping

use exo_common::mission;

/// Substring rules, checked in order. The first rule with any matching
/// needle wins.
const SUBSTRING_RULES: &[(&[&str], &str)] = &[
    (&["Kepler", "K2"], mission::KEPLER),
    (&["TESS"], mission::TESS),
    (&["Spitzer"], mission::SPITZER),
    (&["Hubble"], mission::HUBBLE),
    (&["James Webb", "JWST"], mission::JAMES_WEBB),
    (
        &["Radial Velocity", "Imaging", "Microlensing", "Astrometry"],
        mission::GROUND_BASED,
    ),
];

/// Exact discovery-method names that carry no mission keyword.
static METHOD_TABLE: &[(&str, &str)] = &[
    ("Transit", mission::KEPLER),
    ("Transit Timing Variations", mission::KEPLER),
    ("Imaging", mission::GROUND_BASED),
    ("Radial Velocity", mission::GROUND_BASED),
    ("Microlensing", mission::GROUND_BASED),
    ("Astrometry", mission::GROUND_BASED),
    ("Orbital Brightness Modulation", mission::GROUND_BASED),
    ("Pulsar Timing", mission::GROUND_BASED),
    ("Disk Kinematics", mission::GROUND_BASED),
    ("Eclipse Timing Variations", mission::GROUND_BASED),
    ("Pulsation Timing Variations", mission::GROUND_BASED),
];

/// Map a raw discovery-method string to a mission label.
///
/// Unmapped methods are returned unchanged.
pub fn map_mission(discovery_method: &str) -> String {
    for (needles, label) in SUBSTRING_RULES {
        if needles.iter().any(|needle| discovery_method.contains(needle)) {
            return (*label).to_string();
        }
    }

    METHOD_TABLE
        .iter()
        .find(|(method, _)| *method == discovery_method)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| discovery_method.to_string())
}
