use msgcal_types::AggregateStatistics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest alpha a day with at least one message is mixed at.
pub const VISIBLE_FLOOR: f64 = 0.1;

/// How a raw daily count is normalised into a color intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityStrategy {
    /// `ln(count) / ln(max)`: shows general rhythm, flattens spikes
    #[default]
    #[serde(alias = "log")]
    Logarithmic,
    /// `count / median`: anything at or above a typical day saturates
    Median,
    /// `count / max`: highlights peak days
    Max,
    /// 1 for any active day
    Binary,
}

impl IntensityStrategy {
    /// Unclamped intensity for `count`.
    ///
    /// Not defined for `count == 0` (log) or a zero denominator; callers go
    /// through [`cell_alpha`] which handles both.
    pub fn raw_intensity(&self, count: u32, stats: &AggregateStatistics) -> f64 {
        let count = count as f64;
        let max = stats.max_count as f64;

        match self {
            IntensityStrategy::Logarithmic => count.ln() / max.ln(),
            IntensityStrategy::Median => count / stats.median_count,
            IntensityStrategy::Max => count / max,
            IntensityStrategy::Binary => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityStrategy::Logarithmic => "logarithmic",
            IntensityStrategy::Median => "median",
            IntensityStrategy::Max => "max",
            IntensityStrategy::Binary => "binary",
        }
    }
}

impl fmt::Display for IntensityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alpha used to mix a day's color.
///
/// Zero stays exactly zero. Any other count is clamped into
/// `[VISIBLE_FLOOR, 1]`; a non-finite strategy result (zero median, or
/// `max == 1` under the log strategy) means the day sits at the top of the
/// scale.
pub fn cell_alpha(strategy: IntensityStrategy, count: u32, stats: &AggregateStatistics) -> f64 {
    if count == 0 {
        return 0.0;
    }

    let raw = strategy.raw_intensity(count, stats);
    let clamped = if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        1.0
    };

    clamped.max(VISIBLE_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(max: u32, median: f64) -> AggregateStatistics {
        AggregateStatistics {
            max_count: max,
            median_count: median,
            ..Default::default()
        }
    }

    #[test]
    fn test_logarithmic_formula() {
        let s = stats(100, 5.0);
        let v = IntensityStrategy::Logarithmic.raw_intensity(10, &s);
        assert!((v - 0.5).abs() < 1e-12);
        assert_eq!(IntensityStrategy::Logarithmic.raw_intensity(100, &s), 1.0);
    }

    #[test]
    fn test_median_and_max_formulas() {
        let s = stats(40, 4.0);
        assert_eq!(IntensityStrategy::Median.raw_intensity(2, &s), 0.5);
        assert_eq!(IntensityStrategy::Median.raw_intensity(8, &s), 2.0);
        assert_eq!(IntensityStrategy::Max.raw_intensity(10, &s), 0.25);
    }

    #[test]
    fn test_binary_ignores_magnitude() {
        let s = stats(1000, 3.0);
        assert_eq!(IntensityStrategy::Binary.raw_intensity(1, &s), 1.0);
        assert_eq!(IntensityStrategy::Binary.raw_intensity(999, &s), 1.0);
    }

    #[test]
    fn test_binary_alpha_scenarios() {
        let s = stats(9, 2.0);
        assert_eq!(cell_alpha(IntensityStrategy::Binary, 5, &s), 1.0);
        assert_eq!(cell_alpha(IntensityStrategy::Binary, 0, &s), 0.0);
    }

    #[test]
    fn test_zero_count_is_never_floored() {
        let s = stats(50, 5.0);
        for strategy in [
            IntensityStrategy::Logarithmic,
            IntensityStrategy::Median,
            IntensityStrategy::Max,
            IntensityStrategy::Binary,
        ] {
            assert_eq!(cell_alpha(strategy, 0, &s), 0.0, "{}", strategy);
        }
    }

    #[test]
    fn test_floor_lifts_faint_days() {
        // ln(1) / ln(500) == 0, max-relative 1/500 == 0.002
        let s = stats(500, 20.0);
        assert_eq!(cell_alpha(IntensityStrategy::Logarithmic, 1, &s), VISIBLE_FLOOR);
        assert_eq!(cell_alpha(IntensityStrategy::Max, 1, &s), VISIBLE_FLOOR);
    }

    #[test]
    fn test_alpha_is_clamped_to_one() {
        let s = stats(50, 5.0);
        assert_eq!(cell_alpha(IntensityStrategy::Median, 40, &s), 1.0);
    }

    #[test]
    fn test_degenerate_denominators_saturate() {
        // Only ever one message per day: ln(1) / ln(1) is NaN.
        let single = stats(1, 1.0);
        assert_eq!(cell_alpha(IntensityStrategy::Logarithmic, 1, &single), 1.0);

        let no_median = stats(3, 0.0);
        assert_eq!(cell_alpha(IntensityStrategy::Median, 2, &no_median), 1.0);
    }

    #[test]
    fn test_config_names_accept_log_alias() {
        let parsed: IntensityStrategy = serde_json::from_str("\"log\"").unwrap();
        assert_eq!(parsed, IntensityStrategy::Logarithmic);
        assert_eq!(
            serde_json::to_string(&IntensityStrategy::Logarithmic).unwrap(),
            "\"logarithmic\""
        );
    }
}
