//! Cost-driven adaptive learning rate.

use serde::{Deserialize, Serialize};

/// Multiplier applied when the cost did not increase.
pub const GROWTH_FACTOR: f64 = 1.05;

/// Multiplier applied when the cost increased.
pub const BACKOFF_FACTOR: f64 = 0.5;

/// Step-size controller driven by the cross-entropy cost trend.
///
/// After each epoch the two most recent costs are compared: an increase
/// halves the rate, anything else grows it by 5%. This is a heuristic,
/// not a convergence guarantee — on noisy data it can oscillate, and no
/// floor or ceiling is enforced, so the rate can decay toward zero or
/// grow without bound. Clamping would change observable training
/// trajectories, so the raw heuristic is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveLearningRate {
    rate: f64,
}

impl AdaptiveLearningRate {
    /// Create a controller with the given initial rate.
    pub fn new(initial_rate: f64) -> Self {
        Self { rate: initial_rate }
    }

    /// The current step size.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Adjust the rate from the cost history.
    ///
    /// No-op until at least two costs have been recorded. A non-finite
    /// latest cost never compares greater than the previous one, so a
    /// degenerate cost grows the rate like any non-increase would.
    pub fn adjust(&mut self, cost_history: &[f64]) {
        if cost_history.len() < 2 {
            return;
        }
        let latest = cost_history[cost_history.len() - 1];
        let previous = cost_history[cost_history.len() - 2];
        if latest > previous {
            self.rate *= BACKOFF_FACTOR;
        } else {
            self.rate *= GROWTH_FACTOR;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn no_adjustment_with_fewer_than_two_costs() {
        let mut schedule = AdaptiveLearningRate::new(0.5);
        schedule.adjust(&[]);
        assert_eq!(schedule.rate(), 0.5);
        schedule.adjust(&[1.0]);
        assert_eq!(schedule.rate(), 0.5);
    }

    #[test]
    fn cost_increase_halves_rate() {
        let mut schedule = AdaptiveLearningRate::new(0.4);
        schedule.adjust(&[0.6, 0.7]);
        assert_abs_diff_eq!(schedule.rate(), 0.2);
    }

    #[test]
    fn cost_decrease_grows_rate_by_five_percent() {
        let mut schedule = AdaptiveLearningRate::new(0.4);
        schedule.adjust(&[0.7, 0.6]);
        assert_abs_diff_eq!(schedule.rate(), 0.42);
    }

    #[test]
    fn equal_costs_grow_rate() {
        let mut schedule = AdaptiveLearningRate::new(1.0);
        schedule.adjust(&[0.5, 0.5]);
        assert_abs_diff_eq!(schedule.rate(), GROWTH_FACTOR);
    }

    #[test]
    fn only_last_two_costs_matter() {
        let mut schedule = AdaptiveLearningRate::new(1.0);
        schedule.adjust(&[9.0, 0.1, 0.6, 0.7]);
        assert_abs_diff_eq!(schedule.rate(), BACKOFF_FACTOR);
    }

    #[test]
    fn nan_cost_grows_rate() {
        let mut schedule = AdaptiveLearningRate::new(1.0);
        schedule.adjust(&[0.5, f64::NAN]);
        assert_abs_diff_eq!(schedule.rate(), GROWTH_FACTOR);
    }

    #[test]
    fn rate_has_no_floor() {
        let mut schedule = AdaptiveLearningRate::new(1.0);
        for _ in 0..200 {
            schedule.adjust(&[0.5, 0.6]);
        }
        assert!(schedule.rate() > 0.0);
        assert!(schedule.rate() < 1e-50);
    }
}
