//! Kitchen-load estimation: per-station workloads and wait-time estimates.
//!
//! The estimator answers one question: given everything already promised to
//! customers, how long until a new order is ready? Stations work in parallel,
//! so the answer is the busiest station's total, not the sum of all stations.

use serde::{Deserialize, Serialize};

use porfirio_core::Seconds;

pub mod estimator;
pub mod load;
#[cfg(test)]
pub(crate) mod testutil;

pub use estimator::{EstimateBreakdown, WaitEstimator};
pub use load::{compute_queue_load, compute_station_seconds, OrderSource};

/// Total seconds of promised work per preparation station.
///
/// Only the three stations with a real prep delay appear here; stock and mix
/// items never contribute.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationLoad {
    pub barista_secs: Seconds,
    pub fryer_secs: Seconds,
    pub cold_secs: Seconds,
}

impl StationLoad {
    pub fn merge(&mut self, other: &StationLoad) {
        self.barista_secs = self.barista_secs.saturating_add(other.barista_secs);
        self.fryer_secs = self.fryer_secs.saturating_add(other.fryer_secs);
        self.cold_secs = self.cold_secs.saturating_add(other.cold_secs);
    }

    /// Seconds of work at the busiest station. Stations run concurrently, so
    /// this bounds the wait for the whole load.
    pub fn busiest_secs(&self) -> Seconds {
        self.barista_secs.max(self.fryer_secs).max(self.cold_secs)
    }

    pub fn is_idle(&self) -> bool {
        self.barista_secs == 0 && self.fryer_secs == 0 && self.cold_secs == 0
    }
}

/// Tunable kitchen capacity parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct KitchenConfig {
    /// Fryer baskets that cook batches concurrently within one round.
    pub fryer_baskets: u32,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self { fryer_baskets: 2 }
    }
}

impl KitchenConfig {
    /// Basket count guarded against a zero in hand-edited config.
    pub(crate) fn baskets(&self) -> u64 {
        self.fryer_baskets.max(1) as u64
    }
}
