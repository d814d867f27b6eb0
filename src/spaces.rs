//! Box-shaped action/observation spaces
//!
//! The engine never enforces these; drivers use them to clip or sample actions.

use serde::{Deserialize, Serialize};

use crate::sim::RandomStream;

/// Per-dimension closed interval [low, high]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpace {
    pub low: Vec<f64>,
    pub high: Vec<f64>,
}

impl BoxSpace {
    pub fn new(low: Vec<f64>, high: Vec<f64>) -> Self {
        debug_assert_eq!(low.len(), high.len());
        Self { low, high }
    }

    pub fn dim(&self) -> usize {
        self.low.len()
    }

    /// True if `values` has the right length and every entry is in bounds
    pub fn contains(&self, values: &[f64]) -> bool {
        values.len() == self.dim()
            && values
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (lo, hi))| *v >= *lo && *v <= *hi)
    }

    /// Clamp each entry into its interval
    pub fn clip(&self, values: &mut [f64]) {
        for (v, (lo, hi)) in values.iter_mut().zip(self.low.iter().zip(&self.high)) {
            *v = v.clamp(*lo, *hi);
        }
    }

    /// Uniform sample; unbounded dimensions sample as zero clamped into range
    pub fn sample<R: RandomStream>(&self, rng: &mut R) -> Vec<f64> {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(lo, hi)| {
                let span = hi - lo;
                if span.is_finite() {
                    lo + rng.uniform(span)
                } else {
                    0.0_f64.clamp(*lo, *hi)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRng;

    #[test]
    fn test_contains_and_clip() {
        let space = BoxSpace::new(vec![-1.0, 0.0], vec![1.0, 2.0]);
        assert!(space.contains(&[0.5, 2.0]));
        assert!(!space.contains(&[1.5, 1.0]));
        assert!(!space.contains(&[0.0]));

        let mut action = [3.0, -4.0];
        space.clip(&mut action);
        assert_eq!(action, [1.0, 0.0]);
    }

    #[test]
    fn test_sample_in_bounds() {
        let space = BoxSpace::new(vec![-1.0, -1.0], vec![1.0, 1.0]);
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            let sample = space.sample(&mut rng);
            assert!(space.contains(&sample));
        }
    }

    #[test]
    fn test_sample_unbounded_dimension() {
        let space = BoxSpace::new(vec![f64::NEG_INFINITY, 5.0], vec![f64::INFINITY, f64::INFINITY]);
        let mut rng = SimRng::new(7);
        assert_eq!(space.sample(&mut rng), vec![0.0, 5.0]);
    }
}
