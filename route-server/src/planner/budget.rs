//! Metering for walk enumeration.

use std::convert::Infallible;

use super::config::LimitError;

/// Counts the steps taken by a walk-counting search.
///
/// Every recursive step of a walk counter calls [`Meter::tick`] before doing
/// any work, and the search stops as soon as a tick fails.
pub trait Meter {
    type Error;

    /// Record one step.
    fn tick(&mut self) -> Result<(), Self::Error>;
}

/// A meter that never runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmetered;

impl Meter for Unmetered {
    type Error = Infallible;

    fn tick(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// A fixed number of search steps, shared by every query run against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitBudget {
    limit: u64,
    used: u64,
}

impl VisitBudget {
    /// A budget of `limit` steps.
    pub fn new(limit: u64) -> Self {
        Self { limit, used: 0 }
    }

    /// Steps taken so far.
    pub fn used(&self) -> u64 {
        self.used
    }

    /// Steps left before the budget runs out.
    pub fn remaining(&self) -> u64 {
        self.limit - self.used
    }
}

impl Meter for VisitBudget {
    type Error = LimitError;

    fn tick(&mut self) -> Result<(), LimitError> {
        if self.used >= self.limit {
            return Err(LimitError::TooMuchWork { limit: self.limit });
        }
        self.used += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_runs_out() {
        let mut budget = VisitBudget::new(2);

        assert_eq!(budget.tick(), Ok(()));
        assert_eq!(budget.tick(), Ok(()));
        assert_eq!(budget.used(), 2);
        assert_eq!(budget.remaining(), 0);
        assert_eq!(budget.tick(), Err(LimitError::TooMuchWork { limit: 2 }));
        // Exhaustion does not count as a step.
        assert_eq!(budget.used(), 2);
    }

    #[test]
    fn zero_budget_rejects_first_step() {
        let mut budget = VisitBudget::new(0);
        assert_eq!(budget.tick(), Err(LimitError::TooMuchWork { limit: 0 }));
    }

    #[test]
    fn unmetered_always_ticks() {
        let mut meter = Unmetered;
        for _ in 0..1000 {
            let Ok(()) = meter.tick();
        }
    }
}
