//! Sector × acquisition-source heatmap over a fixed 3×3 grid.

use serde::Serialize;

use crate::types::Client;

/// Sectors tracked on the heatmap, in display order.
pub const SECTORS: [&str; 3] = ["Tecnologia", "Marketing", "Consultoria"];

/// Acquisition sources tracked on the heatmap, in display order.
pub const SOURCES: [&str; 3] = ["Indicação", "Google Ads", "LinkedIn"];

/// Client count at which a cell renders fully saturated.
const SATURATION_COUNT: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub sector: &'static str,
    pub source: &'static str,
    pub count: usize,
    /// Linear fill 0–1, saturating at [`SATURATION_COUNT`] clients.
    pub intensity: f64,
}

/// Cross-tabulate clients by sector and source.
///
/// Sector and source fields are free text, so matching is a
/// case-insensitive substring test: "Tecnologia e Inovação" lands in the
/// Tecnologia row. Clients matching none of the fixed labels are silently
/// excluded. Always returns the full 3×3 grid in row-major display order,
/// zero-count cells included.
pub fn build_heatmap(clients: &[Client]) -> Vec<HeatmapCell> {
    SECTORS
        .iter()
        .flat_map(|&sector| SOURCES.iter().map(move |&source| (sector, source)))
        .map(|(sector, source)| {
            let count = clients
                .iter()
                .filter(|c| contains_ci(&c.sector, sector) && contains_ci(&c.source, source))
                .count();
            HeatmapCell {
                sector,
                source,
                count,
                intensity: (count as f64 / SATURATION_COUNT).min(1.0),
            }
        })
        .collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
