use crate::validate::Validation;
use crate::MstOutcome;

/// One engine run with its wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct TimedOutcome {
    pub outcome: MstOutcome,
    pub seconds: f64,
}

/// Everything a run prints, in the fixed column order the analysis tooling
/// consumes:
///
/// `V,E,costPrim,timePrim,costKruskal,timeKruskal,isConnected,validationPassed`
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub num_vertices: usize,
    pub num_edges: usize,
    pub prim: TimedOutcome,
    pub kruskal: TimedOutcome,
    pub validation: Validation,
}

impl RunReport {
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{:.4},{:.6},{:.4},{:.6},{},{}",
            self.num_vertices,
            self.num_edges,
            self.prim.outcome.total_weight,
            self.prim.seconds,
            self.kruskal.outcome.total_weight,
            self.kruskal.seconds,
            self.prim.outcome.is_connected as u8,
            self.validation.passed() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(total_weight: f64, is_connected: bool, seconds: f64) -> TimedOutcome {
        TimedOutcome {
            outcome: MstOutcome { total_weight, components: 1, is_connected },
            seconds,
        }
    }

    #[test]
    fn test_csv_line_layout() {
        let report = RunReport {
            num_vertices: 4,
            num_edges: 5,
            prim: timed(3.0, true, 0.000125),
            kruskal: timed(3.0, true, 0.0005),
            validation: Validation::Pass,
        };

        assert_eq!(report.csv_line(), "4,5,3.0000,0.000125,3.0000,0.000500,1,1");
    }

    #[test]
    fn test_failed_validation_flags_the_line() {
        let report = RunReport {
            num_vertices: 2,
            num_edges: 1,
            prim: timed(1.0, true, 0.0),
            kruskal: timed(5.0, true, 0.0),
            validation: Validation::WeightMismatch { prim: 1.0, kruskal: 5.0, difference: 4.0 },
        };

        assert!(report.csv_line().ends_with(",1,0"));
    }
}
