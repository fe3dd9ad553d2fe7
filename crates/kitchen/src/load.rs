//! Per-station workload computation for order lines and the standing queue.

use anyhow::Result;
use tracing::{debug, warn};

use porfirio_core::menu::Station;
use porfirio_core::order::{Order, OrderLine};
use porfirio_menu::Catalog;

use crate::{KitchenConfig, StationLoad};

/// Read access to the order queue. The estimator only ever needs the orders
/// still owed to customers (status received or in-progress).
pub trait OrderSource {
    fn active_orders(&self) -> Result<Vec<Order>>;
}

impl<S: OrderSource + ?Sized> OrderSource for &S {
    fn active_orders(&self) -> Result<Vec<Order>> {
        (**self).active_orders()
    }
}

/// Compute the preparation seconds each station needs for `lines`.
///
/// Lines whose menu id does not resolve are skipped; historical orders may
/// reference retired items and that must not poison the estimate. Barista and
/// cold work is strictly serial (`prep * qty`). Fryer work is batched: a line
/// needs `ceil(qty / batch_capacity)` batches, and with `fryer_baskets`
/// batches cooking concurrently it needs `ceil(batches / baskets)` sequential
/// rounds of the fixed per-batch duration. Stock and mix items cost nothing.
pub fn compute_station_seconds<C: Catalog>(
    catalog: &C,
    lines: &[OrderLine],
    cfg: &KitchenConfig,
) -> StationLoad {
    let mut load = StationLoad::default();
    for line in lines {
        let Some(item) = catalog.resolve(&line.menu_id) else {
            debug!(menu_id = %line.menu_id, "skipping line with unresolved menu id");
            continue;
        };
        let qty = line.qty as u64;
        let prep = item.prep_time_secs;
        match item.station {
            Station::Barista | Station::Unknown => {
                load.barista_secs = load.barista_secs.saturating_add(prep.saturating_mul(qty));
            }
            Station::Cold => {
                load.cold_secs = load.cold_secs.saturating_add(prep.saturating_mul(qty));
            }
            Station::Fryer => {
                // batch_capacity of 0 would divide by zero; treat it as 1.
                let cap = item.batch_capacity.max(1) as u64;
                let batches = qty.div_ceil(cap);
                let rounds = batches.div_ceil(cfg.baskets());
                load.fryer_secs = load.fryer_secs.saturating_add(rounds.saturating_mul(prep));
            }
            Station::Stock | Station::Mix => {}
        }
    }
    load
}

/// Sum the station loads of every active order in the queue.
///
/// An unreachable order store degrades to an empty queue rather than failing:
/// a slightly optimistic estimate is more useful to the customer than no
/// estimate, and the caller's own items are still accounted for.
pub fn compute_queue_load<C: Catalog, S: OrderSource>(
    catalog: &C,
    source: &S,
    cfg: &KitchenConfig,
) -> StationLoad {
    let orders = match source.active_orders() {
        Ok(orders) => orders,
        Err(err) => {
            warn!(%err, "order store unavailable, treating queue as empty");
            return StationLoad::default();
        }
    };
    let mut queued = StationLoad::default();
    for order in orders.iter().filter(|o| o.status.is_active()) {
        queued.merge(&compute_station_seconds(catalog, &order.items, cfg));
    }
    queued
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{cold, espresso, fryer_item, line, order_with, test_catalog};
    use anyhow::anyhow;
    use porfirio_core::order::OrderStatus;

    struct DownStore;

    impl OrderSource for DownStore {
        fn active_orders(&self) -> Result<Vec<Order>> {
            Err(anyhow!("backend offline"))
        }
    }

    struct FixedStore(Vec<Order>);

    impl OrderSource for FixedStore {
        fn active_orders(&self) -> Result<Vec<Order>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn barista_and_cold_are_serial_and_isolated() {
        let catalog = test_catalog();
        let cfg = KitchenConfig::default();
        let load = compute_station_seconds(&catalog, &[line(espresso(), 2), line(cold(), 1)], &cfg);
        assert_eq!(load.barista_secs, 360);
        assert_eq!(load.cold_secs, 240);
        assert_eq!(load.fryer_secs, 0);
    }

    #[test]
    fn fryer_rounds_follow_batch_and_basket_limits() {
        // cap 6, 2 baskets, 180 s per batch.
        let catalog = test_catalog();
        let cfg = KitchenConfig::default();
        for (qty, expected) in [(1, 180), (6, 180), (7, 180), (12, 180), (13, 360), (24, 360), (25, 540)] {
            let load = compute_station_seconds(&catalog, &[line(fryer_item(), qty)], &cfg);
            assert_eq!(load.fryer_secs, expected, "qty {qty}");
        }
    }

    #[test]
    fn single_basket_serializes_batches() {
        let catalog = test_catalog();
        let cfg = KitchenConfig { fryer_baskets: 1 };
        let load = compute_station_seconds(&catalog, &[line(fryer_item(), 13)], &cfg);
        // 3 batches, one per round.
        assert_eq!(load.fryer_secs, 540);
    }

    #[test]
    fn zero_quantity_contributes_nothing() {
        let catalog = test_catalog();
        let cfg = KitchenConfig::default();
        let load = compute_station_seconds(
            &catalog,
            &[line(espresso(), 0), line(fryer_item(), 0)],
            &cfg,
        );
        assert!(load.is_idle());
    }

    #[test]
    fn unknown_menu_ids_are_skipped() {
        let catalog = test_catalog();
        let cfg = KitchenConfig::default();
        let load = compute_station_seconds(
            &catalog,
            &[line("no_such_item", 3), line(espresso(), 1)],
            &cfg,
        );
        assert_eq!(load.barista_secs, 180);
        assert_eq!(load.fryer_secs, 0);
        assert_eq!(load.cold_secs, 0);
    }

    #[test]
    fn adding_a_line_never_decreases_load() {
        let catalog = test_catalog();
        let cfg = KitchenConfig::default();
        let base = vec![line(espresso(), 1), line(fryer_item(), 5)];
        let before = compute_station_seconds(&catalog, &base, &cfg);
        for extra in [espresso(), fryer_item(), cold()] {
            let mut lines = base.clone();
            lines.push(line(extra, 1));
            let after = compute_station_seconds(&catalog, &lines, &cfg);
            assert!(after.barista_secs >= before.barista_secs);
            assert!(after.fryer_secs >= before.fryer_secs);
            assert!(after.cold_secs >= before.cold_secs);
        }
    }

    #[test]
    fn same_input_same_output() {
        let catalog = test_catalog();
        let cfg = KitchenConfig::default();
        let lines = vec![line(fryer_item(), 13), line(espresso(), 2)];
        assert_eq!(
            compute_station_seconds(&catalog, &lines, &cfg),
            compute_station_seconds(&catalog, &lines, &cfg)
        );
    }

    #[test]
    fn queue_load_sums_active_orders_only() {
        let catalog = test_catalog();
        let cfg = KitchenConfig::default();
        let store = FixedStore(vec![
            order_with(1, OrderStatus::Received, vec![line(fryer_item(), 6)]),
            order_with(2, OrderStatus::InProgress, vec![line(espresso(), 1)]),
            order_with(3, OrderStatus::Delivered, vec![line(espresso(), 10)]),
            order_with(4, OrderStatus::Cancelled, vec![line(cold(), 10)]),
        ]);
        let queued = compute_queue_load(&catalog, &store, &cfg);
        assert_eq!(queued.fryer_secs, 180);
        assert_eq!(queued.barista_secs, 180);
        assert_eq!(queued.cold_secs, 0);
    }

    #[test]
    fn unreachable_store_degrades_to_empty_queue() {
        let catalog = test_catalog();
        let cfg = KitchenConfig::default();
        let queued = compute_queue_load(&catalog, &DownStore, &cfg);
        assert!(queued.is_idle());
    }
}
