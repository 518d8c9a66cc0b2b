use bevy::prelude::*;

/// One population bucket driving marker colour and altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopulationTier {
    Mega,
    Large,
    Medium,
    Small,
}

pub struct TierInfo {
    pub tier: PopulationTier,
    /// Exclusive lower bound; a population qualifies with strict `>`.
    pub min_population: f64,
    pub hex: &'static str,
    pub rgb: [f32; 3],
    /// Empirically calibrated per tier; not derived from a shared formula.
    pub altitude_coefficient: f64,
    pub label: &'static str,
}

impl TierInfo {
    pub fn colour(&self) -> Color {
        Color::srgb(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// Ordered high to low; classification walks the table and the first
/// matching entry wins. The last entry is the catch-all bucket.
pub const TIER_MAP: &[TierInfo] = &[
    TierInfo {
        tier: PopulationTier::Mega,
        min_population: 1e7,
        hex: "#7851A9",
        rgb: [0.4706, 0.3176, 0.6627],
        altitude_coefficient: 0.0040,
        label: "mega city",
    },
    TierInfo {
        tier: PopulationTier::Large,
        min_population: 1e6,
        hex: "#FF0000",
        rgb: [1.0, 0.0, 0.0],
        altitude_coefficient: 0.0015,
        label: "large city",
    },
    TierInfo {
        tier: PopulationTier::Medium,
        min_population: 1e5,
        hex: "#FFD700",
        rgb: [1.0, 0.8431, 0.0],
        altitude_coefficient: 0.0011,
        label: "medium city",
    },
    TierInfo {
        tier: PopulationTier::Small,
        min_population: f64::NEG_INFINITY,
        hex: "#12db00",
        rgb: [0.0706, 0.8588, 0.0],
        altitude_coefficient: 0.0009,
        label: "small settlement",
    },
];

/// Classify a population count into its tier entry.
///
/// NaN fails every `>` comparison and lands in the catch-all bucket, so a
/// malformed count never leaves the table.
pub fn classify_population(population: f64) -> &'static TierInfo {
    TIER_MAP
        .iter()
        .find(|info| population > info.min_population)
        .unwrap_or(&TIER_MAP[TIER_MAP.len() - 1])
}

/// Marker altitude as a fraction of the globe radius.
///
/// The cube root compresses populations spanning several orders of magnitude
/// into a bounded visual range. Non-finite or negative counts render flat.
pub fn render_altitude(population: f64) -> f32 {
    if !population.is_finite() || population <= 0.0 {
        return 0.0;
    }
    (population.cbrt() * classify_population(population).altitude_coefficient) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_covers_every_count() {
        for p in [0.0, 1.0, 99_999.0, 5e5, 3e6, 2e7, 1e12, -4.0, f64::NAN] {
            let info = classify_population(p);
            assert!(TIER_MAP.iter().any(|t| t.tier == info.tier));
        }
    }

    #[test]
    fn boundaries_are_strict() {
        // Exactly on a threshold stays in the lower tier.
        assert_eq!(classify_population(1e7).tier, PopulationTier::Large);
        assert_eq!(classify_population(1e6).tier, PopulationTier::Medium);
        assert_eq!(classify_population(1e5).tier, PopulationTier::Small);

        assert_eq!(
            classify_population(1e7 + 1.0).tier,
            PopulationTier::Mega
        );
        assert_eq!(
            classify_population(1e6 + 1.0).tier,
            PopulationTier::Large
        );
        assert_eq!(
            classify_population(1e5 + 1.0).tier,
            PopulationTier::Medium
        );
    }

    #[test]
    fn eight_million_encodes_as_expected() {
        let info = classify_population(8_000_000.0);
        assert_eq!(info.tier, PopulationTier::Large);
        assert_eq!(info.hex, "#FF0000");
        // cbrt(8e6) = 200 exactly.
        assert!((render_altitude(8_000_000.0) - 0.30).abs() < 1e-6);
    }

    #[test]
    fn fifty_thousand_encodes_as_expected() {
        let info = classify_population(50_000.0);
        assert_eq!(info.tier, PopulationTier::Small);
        assert_eq!(info.hex, "#12db00");
        assert!((render_altitude(50_000.0) - 0.03316).abs() < 1e-4);
    }

    #[test]
    fn malformed_counts_render_flat_in_the_catch_all_bucket() {
        for p in [f64::NAN, -1.0, -1e9, f64::NEG_INFINITY] {
            assert_eq!(classify_population(p).tier, PopulationTier::Small);
            assert_eq!(render_altitude(p), 0.0);
        }
        assert_eq!(render_altitude(0.0), 0.0);
        assert_eq!(render_altitude(f64::INFINITY), 0.0);
    }

    #[test]
    fn altitude_increases_within_a_tier() {
        let pairs = [
            (2e5, 9e5),
            (2e6, 9e6),
            (2e7, 9e7),
            (10.0, 90_000.0),
        ];
        for (lo, hi) in pairs {
            assert_eq!(
                classify_population(lo).tier,
                classify_population(hi).tier
            );
            assert!(render_altitude(lo) < render_altitude(hi));
        }
    }

    #[test]
    fn tier_boundary_jumps_stay_bounded() {
        // Coefficients differ per tier, so altitude steps at each boundary.
        // The jump is expected; it just has to stay visually modest.
        for threshold in [1e5, 1e6, 1e7] {
            let below = render_altitude(threshold);
            let above = render_altitude(threshold + 1.0);
            let jump = (above - below).abs();
            assert!(jump > 0.0, "boundary at {threshold} should step");
            assert!(jump < 0.6, "boundary jump at {threshold} is {jump}");
        }
    }
}
