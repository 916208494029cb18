//! CSV / JSON export of a filtered collection

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use exo_common::Exoplanet;

use crate::config::ExportConfig;

/// Header row plus one row per planet. Unknown values become empty cells.
pub fn write_csv<W: Write>(writer: W, planets: &[Exoplanet]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for planet in planets {
        csv_writer
            .serialize(planet)
            .context(format!("Failed to write CSV row for {}", planet.name))?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, planets: &[Exoplanet]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, planets).context("Failed to serialize planets")?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write every configured export file. Returns how many files were written.
pub fn export_to_paths(config: &ExportConfig, planets: &[Exoplanet]) -> Result<usize> {
    let mut written = 0;

    if let Some(path) = &config.csv_path {
        write_csv(create(path)?, planets)?;
        tracing::info!("Exported {} planets to {:?}", planets.len(), path);
        written += 1;
    }

    if let Some(path) = &config.json_path {
        write_json(create(path)?, planets)?;
        tracing::info!("Exported {} planets to {:?}", planets.len(), path);
        written += 1;
    }

    Ok(written)
}

fn create(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create export directory: {:?}", parent))?;
    }
    File::create(path).context(format!("Failed to create export file: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::archive::fallback_exoplanets;

    fn sample() -> Vec<Exoplanet> {
        fallback_exoplanets()
            .into_iter()
            .filter(|p| p.name == "Kepler-22b" || p.name == "Proxima Centauri b")
            .collect()
    }

    #[test]
    fn test_csv_layout() {
        let mut out = Vec::new();
        write_csv(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "id,name,orbitalPeriod,planetRadius,stellarMagnitude,mission,discoveryYear,status"
        );
        assert_eq!(
            lines[1],
            "kepler-22b,Kepler-22b,289.9,2.38,11.7,Kepler,2011,confirmed"
        );
        // Unknown radius stays empty rather than zero
        assert_eq!(
            lines[2],
            "proxima-centauri-b,Proxima Centauri b,11.2,,11.1,Ground-based,2016,confirmed"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let planets = sample();
        let mut out = Vec::new();
        write_json(&mut out, &planets).unwrap();
        let parsed: Vec<Exoplanet> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, planets);
    }

    #[test]
    fn test_export_to_paths() {
        let dir = std::env::temp_dir().join(format!("exo-export-{}", uuid::Uuid::now_v7()));
        let config = ExportConfig {
            csv_path: Some(dir.join("nested/planets.csv")),
            json_path: Some(dir.join("planets.json")),
        };
        let written = export_to_paths(&config, &sample()).unwrap();
        assert_eq!(written, 2);
        assert!(dir.join("nested/planets.csv").exists());
        assert!(dir.join("planets.json").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_nothing_configured() {
        let written = export_to_paths(&ExportConfig::default(), &sample()).unwrap();
        assert_eq!(written, 0);
    }
}
