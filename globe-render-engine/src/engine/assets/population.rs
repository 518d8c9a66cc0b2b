use bevy::prelude::*;
use constants::tier::{self, PopulationTier, TierInfo, TIER_MAP};

/// One geocoded marker record.
///
/// Immutable once constructed; the derived tier and altitude are functions
/// of the population count alone and are fixed at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub population: f64,
    pub tier: PopulationTier,
    /// Marker column height as a fraction of the globe radius.
    pub render_altitude: f32,
}

impl PopulationPoint {
    /// Build a point from a raw (possibly malformed) population count.
    ///
    /// A NaN or negative count classifies into the flat catch-all bucket and
    /// is stored as zero so it never reaches geometry or formatting.
    pub fn new(latitude: f64, longitude: f64, raw_population: f64) -> Self {
        let info = tier::classify_population(raw_population);
        let render_altitude = tier::render_altitude(raw_population);
        let population = if raw_population.is_finite() && raw_population >= 0.0 {
            raw_population
        } else {
            0.0
        };
        Self {
            latitude,
            longitude,
            population,
            tier: info.tier,
            render_altitude,
        }
    }

    pub fn tier_info(&self) -> &'static TierInfo {
        TIER_MAP
            .iter()
            .find(|info| info.tier == self.tier)
            .unwrap_or(&TIER_MAP[TIER_MAP.len() - 1])
    }

    pub fn colour(&self) -> Color {
        self.tier_info().colour()
    }
}

/// Parsed dataset as a Bevy asset: the ordered point collection plus a count
/// of rows the parser had to drop.
#[derive(Asset, TypePath, Debug, Clone, Default)]
pub struct PopulationDataset {
    pub points: Vec<PopulationPoint>,
    pub skipped_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_fields_follow_the_population_count() {
        let point = PopulationPoint::new(48.85, 2.35, 8_000_000.0);
        assert_eq!(point.tier, PopulationTier::Large);
        assert_eq!(point.tier_info().hex, "#FF0000");
        assert!((point.render_altitude - 0.30).abs() < 1e-6);
    }

    #[test]
    fn malformed_counts_are_sanitised() {
        for raw in [f64::NAN, -12.0, f64::NEG_INFINITY] {
            let point = PopulationPoint::new(0.0, 0.0, raw);
            assert_eq!(point.population, 0.0);
            assert_eq!(point.tier, PopulationTier::Small);
            assert_eq!(point.render_altitude, 0.0);
        }
    }
}
