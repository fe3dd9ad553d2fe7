use anyhow::Result;
use clap::Parser;
use tracing::info;

use porfirio_core::order::{OrderKind, OrderLine, PaymentMethod};
use porfirio_kitchen::{KitchenConfig, OrderSource, WaitEstimator};
use porfirio_menu::{house_menu, Catalog, StaticCatalog};
use porfirio_runtime::metrics::{MetricsRegistry, ServiceTimer};
use porfirio_runtime::init_tracing;
use porfirio_store::{InMemoryOrderStore, OrderDraft};

/// Seed a queue of active orders and estimate waits for candidate carts.
#[derive(Parser, Debug)]
struct Args {
    /// Fryer baskets cooking batches concurrently.
    #[arg(long, default_value_t = 2)]
    baskets: u32,
    /// Synthetic active orders to seed the queue with.
    #[arg(long, default_value_t = 8)]
    queued: u32,
}

fn cart_line(catalog: &StaticCatalog, menu_id: &str, qty: u32) -> Option<OrderLine> {
    let item = catalog.resolve(menu_id)?;
    Some(OrderLine {
        menu_id: item.id.clone(),
        qty,
        unit_price_cents: item.price_cents,
        note: None,
    })
}

fn display_minutes(wait_secs: u64) -> u64 {
    // The UI never shows less than 5 minutes.
    (wait_secs / 60).max(5)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!(?args, "eta_demo starting");

    let catalog = StaticCatalog::new(house_menu());
    let store = InMemoryOrderStore::new();
    let cfg = KitchenConfig { fryer_baskets: args.baskets };
    let estimator = WaitEstimator::new(&catalog, &store, cfg);
    let metrics = MetricsRegistry::default();
    let timer = ServiceTimer::start();

    // Deterministic queue: cycle through the house menu with a small skew.
    let rotation = [
        "churro_6",
        "espresso",
        "frappe_354",
        "churro_relleno_3",
        "latte",
        "malteada_473",
        "churro_12",
        "americano",
    ];
    for i in 0..args.queued {
        let menu_id = rotation[i as usize % rotation.len()];
        let qty = 1 + i % 3;
        let Some(line) = cart_line(&catalog, menu_id, qty) else {
            continue;
        };
        let eta = estimator.estimate_wait_secs(std::slice::from_ref(&line));
        metrics.inc_estimates_computed(1);
        let order = store.place(OrderDraft {
            customer_id: format!("GUEST{i:02}"),
            kind: OrderKind::Pickup { payment: PaymentMethod::CashOrTransfer },
            items: vec![line],
            eta_secs: eta,
        });
        metrics.inc_orders_placed(1);
        info!(order_id = order.id, menu_id, qty, eta_secs = eta, "queued order");
    }
    let active = store.active_orders()?.len() as u64;
    metrics.record_queue_active_peak(active);

    let carts: Vec<(&str, Vec<OrderLine>)> = vec![
        (
            "six churros",
            vec![cart_line(&catalog, "churro_6", 1).expect("house item")],
        ),
        (
            "coffee and frappe",
            vec![
                cart_line(&catalog, "espresso", 2).expect("house item"),
                cart_line(&catalog, "frappe_354", 1).expect("house item"),
            ],
        ),
        (
            "big fryer run",
            vec![
                cart_line(&catalog, "churro_12", 2).expect("house item"),
                cart_line(&catalog, "mini_churros", 1).expect("house item"),
            ],
        ),
        (
            "stale reference",
            vec![OrderLine {
                menu_id: "churro_retired".to_string(),
                qty: 3,
                unit_price_cents: 4_900,
                note: None,
            }],
        ),
    ];

    for (label, lines) in &carts {
        let label = *label;
        let breakdown = estimator.estimate(lines);
        metrics.inc_estimates_computed(1);
        metrics.record_wait_peak(breakdown.wait_secs);
        info!(
            label,
            barista = breakdown.queued.barista_secs + breakdown.incoming.barista_secs,
            fryer = breakdown.queued.fryer_secs + breakdown.incoming.fryer_secs,
            cold = breakdown.queued.cold_secs + breakdown.incoming.cold_secs,
            wait_secs = breakdown.wait_secs,
            display_min = display_minutes(breakdown.wait_secs),
            "estimated candidate cart"
        );
    }

    println!("{}", metrics.snapshot().to_json_line("eta_demo", Some(timer.elapsed())));
    Ok(())
}
