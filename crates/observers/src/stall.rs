use numopt_core::Observer;

use crate::traits::{CanStopEarly, HasValue};

/// Stops a run once the function value stops changing.
///
/// A step counts as stalled when `|value - previous| <= tolerance`. The run is
/// stopped after `patience` consecutive stalled steps. This is useful for
/// objectives whose minimum is not zero, where the convergence test of the
/// solvers would never be met.
#[derive(Debug, Clone, PartialEq)]
pub struct StopWhenStalled {
    tolerance: f64,
    patience: usize,
    previous: Option<f64>,
    stalled: usize,
}

impl StopWhenStalled {
    /// Creates an observer that stops after `patience` stalled steps.
    ///
    /// A `patience` of zero is treated as one.
    #[must_use]
    pub fn new(tolerance: f64, patience: usize) -> Self {
        Self {
            tolerance,
            patience: patience.max(1),
            previous: None,
            stalled: 0,
        }
    }
}

impl<E: HasValue, A: CanStopEarly> Observer<E, A> for StopWhenStalled {
    fn observe(&mut self, event: &E) -> Option<A> {
        let value = event.value();

        match self.previous.replace(value) {
            Some(previous) if (value - previous).abs() <= self.tolerance => self.stalled += 1,
            _ => self.stalled = 0,
        }

        (self.stalled >= self.patience).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    struct Value(f64);

    impl HasValue for Value {
        fn value(&self) -> f64 {
            self.0
        }
    }

    fn feed(observer: &mut StopWhenStalled, values: &[f64]) -> Vec<Option<Stop>> {
        values
            .iter()
            .map(|&v| Observer::<Value, Stop>::observe(&mut *observer, &Value(v)))
            .collect()
    }

    #[test]
    fn stops_after_patience_stalled_steps() {
        let mut observer = StopWhenStalled::new(1e-3, 2);

        let actions = feed(&mut observer, &[5.0, 3.0, 2.9995, 2.9993]);

        assert_eq!(actions, vec![None, None, None, Some(Stop)]);
    }

    #[test]
    fn progress_resets_the_count() {
        let mut observer = StopWhenStalled::new(1e-3, 2);

        let actions = feed(&mut observer, &[1.0, 1.0, 0.5, 0.5]);

        assert_eq!(actions, vec![None, None, None, None]);
    }

    #[test]
    fn zero_patience_acts_like_one() {
        let mut observer = StopWhenStalled::new(0.1, 0);

        let actions = feed(&mut observer, &[1.0, 1.05]);

        assert_eq!(actions, vec![None, Some(Stop)]);
    }
}
