use exo_archive::config;
use exo_archive::module::archive::{ExoplanetService, HttpTransport};
use exo_archive::module::catalog::{
    mission_distribution, paginate, status_distribution, visible_pages, year_distribution,
    CatalogStore, PageMarker,
};
use exo_archive::module::export;

use anyhow::Result;
use exo_common::Exoplanet;
use tokio_util::sync::CancellationToken;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = config::read_config(&config_path)?;

    // Initialize logging
    let _logging_guard =
        exo_archive::logging::init_logging(&config.log_dir, "exo-archive", &config.log_level)?;

    tracing::info!("Exo archive starting...");

    let archive = &config.archive;
    let transport = HttpTransport::new(archive.request_timeout())?;
    let service = ExoplanetService::new(transport, archive.endpoints(), archive.fetch_settings());
    tracing::info!(
        "Environment {:?}, TAP endpoint {}",
        archive.environment,
        service.endpoints().tap_sync
    );
    tracing::info!(
        "{} rows per bucket, broad query limit {}, concurrent buckets: {}",
        service.settings().rows_per_bucket,
        service.settings().broad_query_limit,
        service.settings().concurrent_buckets
    );
    let store = CatalogStore::new(service, archive.fetch_mode, archive.legacy_limit);

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, cancelling fetch");
            ctrl_c_token.cancel();
        }
    });

    let snapshot = store.refresh(&cancel).await?;
    if let Some(banner) = snapshot.source.banner() {
        tracing::warn!("{}", banner);
    }

    let counts = status_distribution(&snapshot.planets);
    tracing::info!(
        "Status: {} confirmed, {} candidate, {} false positive, {} unknown",
        counts.confirmed,
        counts.candidate,
        counts.false_positive,
        counts.unknown
    );
    for (mission, count) in mission_distribution(&snapshot.planets) {
        tracing::info!("Mission {}: {}", mission, count);
    }
    for (year, count) in year_distribution(&snapshot.planets) {
        tracing::debug!("Discovered in {}: {}", year, count);
    }

    let query = &config.query;
    let filtered = store.view(&query.criteria).await;
    let page = paginate(&filtered, query.page, query.per_page);

    print_table(page.items);
    println!("{}", page.summary());
    let markers = visible_pages(page.current, page.total_pages);
    if !markers.is_empty() {
        println!("Pages: {}", render_markers(&markers, page.current));
    }

    export::export_to_paths(&config.export, &filtered)?;

    Ok(())
}

fn print_table(planets: &[Exoplanet]) {
    println!(
        "{:<28} {:>12} {:>9} {:>6} {:<13} {:>5} {}",
        "Name", "Period (d)", "R (R⊕)", "Vmag", "Mission", "Year", "Status"
    );
    for planet in planets {
        println!(
            "{:<28} {:>12} {:>9} {:>6} {:<13} {:>5} {}",
            planet.name,
            fmt_value(planet.orbital_period, 2),
            fmt_value(planet.planet_radius, 2),
            fmt_value(planet.stellar_magnitude, 1),
            planet.mission,
            planet
                .discovery_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            planet.status
        );
    }
}

fn fmt_value(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "N/A".to_string(),
    }
}

fn render_markers(markers: &[PageMarker], current: usize) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Number(n) if *n == current => format!("[{}]", n),
            PageMarker::Number(n) => n.to_string(),
            PageMarker::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
