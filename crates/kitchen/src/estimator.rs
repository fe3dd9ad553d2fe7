//! Wait-time estimation for a candidate order against the standing queue.

use serde::Serialize;

use porfirio_core::order::OrderLine;
use porfirio_core::Seconds;
use porfirio_menu::Catalog;

use crate::load::{compute_queue_load, compute_station_seconds, OrderSource};
use crate::{KitchenConfig, StationLoad};

/// Per-station detail behind one estimate, for callers that surface it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EstimateBreakdown {
    pub queued: StationLoad,
    pub incoming: StationLoad,
    pub wait_secs: Seconds,
}

/// Stateless estimator over an injected catalog and order source.
///
/// Every call re-reads the queue snapshot; two calls against the same store
/// state and candidate items return the same number. The estimate is
/// advisory only: concurrent customers may each get a number that ignores
/// the other's not-yet-persisted order, which is acceptable for a display
/// hint that neither reserves capacity nor gates placement.
pub struct WaitEstimator<C, S> {
    catalog: C,
    source: S,
    cfg: KitchenConfig,
}

impl<C, S> WaitEstimator<C, S>
where
    C: Catalog,
    S: OrderSource,
{
    pub fn new(catalog: C, source: S, cfg: KitchenConfig) -> Self {
        Self { catalog, source, cfg }
    }

    /// Load the candidate lines alone would put on each station.
    pub fn incoming_load(&self, lines: &[OrderLine]) -> StationLoad {
        compute_station_seconds(&self.catalog, lines, &self.cfg)
    }

    /// Standing load from every order still owed to customers.
    pub fn queue_load(&self) -> StationLoad {
        compute_queue_load(&self.catalog, &self.source, &self.cfg)
    }

    /// Estimated seconds until the candidate order is ready.
    ///
    /// Stations work in parallel, so the wait is the maximum of the
    /// per-station sums of queued plus incoming work — summing the stations
    /// would overstate it. Display flooring and minute conversion are the
    /// caller's concern.
    pub fn estimate_wait_secs(&self, lines: &[OrderLine]) -> Seconds {
        self.estimate(lines).wait_secs
    }

    pub fn estimate(&self, lines: &[OrderLine]) -> EstimateBreakdown {
        let queued = self.queue_load();
        let incoming = self.incoming_load(lines);
        let mut combined = queued;
        combined.merge(&incoming);
        EstimateBreakdown { queued, incoming, wait_secs: combined.busiest_secs() }
    }
}
