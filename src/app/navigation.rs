// SPDX-License-Identifier: MPL-2.0
//! Asynchronous route transitions.
//!
//! Every request gets a generation number. Only the settlement of the most
//! recent request is applied; an older one that lands afterwards is dropped,
//! so a second locale switch supersedes the first.

use crate::routing::Route;

#[derive(Debug, Default)]
pub struct Navigator {
    generation: u64,
    pending: Option<u64>,
}

/// One requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub generation: u64,
    pub target: Route,
}

impl Navigation {
    /// Completes once the runtime has had a chance to render the pending
    /// state, then hands the target back.
    pub async fn settle(self) -> (u64, Route) {
        tokio::task::yield_now().await;
        (self.generation, self.target)
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition to `target`, superseding any in flight.
    pub fn begin(&mut self, target: Route) -> Navigation {
        self.generation += 1;
        if let Some(previous) = self.pending.replace(self.generation) {
            tracing::debug!(previous, next = self.generation, "navigation superseded");
        }
        Navigation {
            generation: self.generation,
            target,
        }
    }

    /// Returns whether a settled transition should be applied.
    pub fn finish(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            tracing::debug!(generation, "dropping stale navigation");
            false
        }
    }

    /// Generation of the most recent request; 0 before the first one.
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Locale, Pathname};

    #[test]
    fn latest_request_wins() {
        let mut navigator = Navigator::new();
        let first = navigator.begin(Route::new(Locale::En, Pathname::Users));
        let second = navigator.begin(Route::new(Locale::Fa, Pathname::Users));

        assert!(!navigator.finish(first.generation));
        assert!(navigator.is_pending());
        assert!(navigator.finish(second.generation));
        assert!(!navigator.is_pending());
    }

    #[test]
    fn generation_is_applied_once() {
        let mut navigator = Navigator::new();
        let navigation = navigator.begin(Route::new(Locale::En, Pathname::Home));
        assert!(navigator.finish(navigation.generation));
        assert!(!navigator.finish(navigation.generation));
    }

    #[tokio::test]
    async fn settle_returns_target() {
        let mut navigator = Navigator::new();
        let target = Route::new(Locale::En, Pathname::Users);
        let navigation = navigator.begin(target);
        let (generation, route) = navigation.settle().await;
        assert_eq!(route, target);
        assert!(navigator.finish(generation));
    }
}
