use serde::{Deserialize, Serialize};

/// How raw interest is reduced to two decimal places.
///
/// The policy is fixed for an entire run; it is never mixed within one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingPolicy {
    /// Round half away from zero to 2 decimals.
    #[default]
    Round,
    /// Discard sub-cent digits toward zero, never rounding up.
    Truncate,
}

impl RoundingPolicy {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            RoundingPolicy::Round => (value * 100.0).round() / 100.0,
            RoundingPolicy::Truncate => (value * 100.0).trunc() / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RoundingPolicy;

    #[test]
    fn round_is_half_away_from_zero() {
        assert_eq!(RoundingPolicy::Round.apply(0.005), 0.01);
        assert_eq!(RoundingPolicy::Round.apply(-0.005), -0.01);
    }

    #[test]
    fn truncate_discards_sub_cent_digits() {
        assert_eq!(RoundingPolicy::Truncate.apply(37.509), 37.5);
        assert_eq!(RoundingPolicy::Truncate.apply(-37.509), -37.5);
    }
}
