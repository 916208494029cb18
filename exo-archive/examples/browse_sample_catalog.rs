//! Browse the bundled sample catalog without touching the network.
//!
//! SEARCH, MISSION and SORT_BY environment variables drive the filter bar.

use anyhow::Result;
use exo_archive::module::archive::fallback_exoplanets;
use exo_archive::module::catalog::{filter_exoplanets, mission_distribution, paginate};
use exo_common::{MissionFilter, SortKey, StatusFilter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let search = std::env::var("SEARCH").unwrap_or_default();
    let mission = MissionFilter::from(std::env::var("MISSION").unwrap_or_else(|_| "all".to_string()));
    let sort_by: SortKey = std::env::var("SORT_BY")
        .unwrap_or_else(|_| "name".to_string())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let catalog = fallback_exoplanets();
    for (mission, count) in mission_distribution(&catalog) {
        tracing::info!("{}: {} planets", mission, count);
    }

    let filtered = filter_exoplanets(&catalog, &search, &StatusFilter::All, &mission, sort_by);
    let page = paginate(&filtered, 1, filtered.len().max(1));
    for planet in page.items {
        println!(
            "{:<24} {:<13} {}",
            planet.name,
            planet.mission,
            planet
                .orbital_period
                .map(|p| format!("{:.2} d", p))
                .unwrap_or_else(|| "N/A".to_string())
        );
    }
    println!("{}", page.summary());

    Ok(())
}
