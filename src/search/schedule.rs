//! Logarithmic cooling.

/// Temperature as a function of the remaining step budget `x`:
///
/// `T(x) = exp(x / k) - 1`, with `k = max_steps / ln(T0 + 1)`.
///
/// This pins `T(max_steps) = T0` and `T(0) = 0`. Cooling is slow while the
/// budget is large and steepens near the end, so late steps behave almost
/// like pure descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogCooling {
    initial_temperature: f64,
    max_steps: u64,
    k: f64,
}

impl LogCooling {
    /// # Panics
    ///
    /// Panics if `max_steps == 0` or `initial_temperature` is not positive.
    pub fn new(initial_temperature: f64, max_steps: u64) -> Self {
        assert!(max_steps > 0, "cooling schedule needs at least one step");
        assert!(
            initial_temperature > 0.0,
            "initial temperature must be positive, got {initial_temperature}"
        );
        Self {
            initial_temperature,
            max_steps,
            k: max_steps as f64 / initial_temperature.ln_1p(),
        }
    }

    /// Temperature at the start of the schedule.
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Length of the schedule in steps.
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Temperature with `remaining` steps left.
    pub fn temperature(&self, remaining: u64) -> f64 {
        (remaining as f64 / self.k).exp_m1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_pinned() {
        for &(t0, steps) in &[(0.5, 1u64), (2.0, 1_000), (30.0, 1_000_000), (1e-3, 7)] {
            let cooling = LogCooling::new(t0, steps);
            let top = cooling.temperature(steps);
            assert!(
                (top - t0).abs() <= 1e-9 * t0.max(1.0),
                "T(max) = {top}, expected {t0}"
            );
            assert_eq!(cooling.temperature(0), 0.0);
        }
    }

    #[test]
    fn test_strictly_decreasing() {
        let cooling = LogCooling::new(3.0, 500);
        let mut prev = f64::INFINITY;
        for x in (0..=500).rev() {
            let t = cooling.temperature(x);
            assert!(t < prev);
            prev = t;
        }
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn test_zero_steps_panics() {
        LogCooling::new(1.0, 0);
    }
}
