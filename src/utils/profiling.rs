use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters and phase timings gathered during the most recent world step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepMetrics {
    pub integrate_time: Duration,
    pub pair_time: Duration,
    pub total_time: Duration,

    pub body_count: usize,
    pub pair_checks: usize,
    pub pairs_resolved: usize,
    pub wall_reflections: usize,
    /// Bodies pulled back inside after the pair pass.
    pub bodies_contained: usize,
}

impl StepMetrics {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Expected number of unordered pair checks for `body_count` bodies.
    pub fn pair_checks_for(body_count: usize) -> usize {
        body_count * body_count.saturating_sub(1) / 2
    }

    pub fn report(&self) {
        let total_us = self.total_time.as_micros() as f64;
        if total_us < 1.0 {
            return;
        }

        log::info!(
            "step: bodies {}, pair checks {}, pairs resolved {}, wall reflections {}, contained {}",
            self.body_count,
            self.pair_checks,
            self.pairs_resolved,
            self.wall_reflections,
            self.bodies_contained
        );
        log::info!(
            "  total {:.3} ms, integrate+walls {:.1}%, pairs {:.1}%",
            self.total_time.as_secs_f64() * 1000.0,
            (self.integrate_time.as_micros() as f64 / total_us) * 100.0,
            (self.pair_time.as_micros() as f64 / total_us) * 100.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_checks_are_triangular() {
        assert_eq!(StepMetrics::pair_checks_for(0), 0);
        assert_eq!(StepMetrics::pair_checks_for(1), 0);
        assert_eq!(StepMetrics::pair_checks_for(4), 6);
    }

    #[test]
    fn reset_clears_everything() {
        let mut metrics = StepMetrics {
            body_count: 3,
            pairs_resolved: 1,
            ..StepMetrics::default()
        };
        metrics.reset();
        assert_eq!(metrics, StepMetrics::default());
    }
}
