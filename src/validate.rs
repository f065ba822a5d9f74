use crate::MstOutcome;

/// Absolute weight tolerance absorbing summation-order differences between
/// the two engines.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Outcome of cross-checking the two engines. A failed validation names the
/// specific disagreement; nothing is retried or reconciled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    Pass,
    ConnectivityMismatch { prim: bool, kruskal: bool },
    WeightMismatch { prim: f64, kruskal: f64, difference: f64 },
}

impl Validation {
    pub fn passed(&self) -> bool {
        matches!(self, Validation::Pass)
    }
}

pub fn validate(prim: &MstOutcome, kruskal: &MstOutcome, tolerance: f64) -> Validation {
    if prim.is_connected != kruskal.is_connected {
        return Validation::ConnectivityMismatch {
            prim: prim.is_connected,
            kruskal: kruskal.is_connected,
        };
    }

    let difference = (prim.total_weight - kruskal.total_weight).abs();
    if difference > tolerance {
        return Validation::WeightMismatch {
            prim: prim.total_weight,
            kruskal: kruskal.total_weight,
            difference,
        };
    }

    Validation::Pass
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(total_weight: f64, is_connected: bool) -> MstOutcome {
        MstOutcome {
            total_weight,
            components: if is_connected { 1 } else { 2 },
            is_connected,
        }
    }

    #[test]
    fn test_agreement_passes() {
        let verdict = validate(&outcome(10.0, true), &outcome(10.004, true), DEFAULT_TOLERANCE);
        assert!(verdict.passed());
    }

    #[test]
    fn test_connectivity_disagreement_wins_over_weight() {
        let verdict = validate(&outcome(10.0, true), &outcome(99.0, false), DEFAULT_TOLERANCE);
        assert_eq!(
            verdict,
            Validation::ConnectivityMismatch { prim: true, kruskal: false }
        );
    }

    #[test]
    fn test_weight_over_tolerance_fails() {
        let verdict = validate(&outcome(10.0, true), &outcome(10.2, true), DEFAULT_TOLERANCE);
        match verdict {
            Validation::WeightMismatch { difference, .. } => {
                assert!((difference - 0.2).abs() < 1e-9);
            }
            other => panic!("expected a weight mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_difference_under_tolerance_passes() {
        // 0.0078125 is exact in binary, safely under the 0.01 default
        let verdict = validate(&outcome(0.25, true), &outcome(0.2578125, true), DEFAULT_TOLERANCE);
        assert!(verdict.passed());
    }
}
