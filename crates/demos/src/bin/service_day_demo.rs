use std::collections::HashMap;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use porfirio_core::order::{OrderKind, OrderLine, OrderStatus, PaymentMethod};
use porfirio_kitchen::{KitchenConfig, WaitEstimator};
use porfirio_menu::{house_menu, Catalog, StaticCatalog};
use porfirio_rewards::{stars_for_purchase, RewardsAccount};
use porfirio_runtime::metrics::{MetricsRegistry, ServiceTimer};
use porfirio_runtime::init_tracing;
use porfirio_store::{InMemoryOrderStore, OrderDraft};
use porfirio_till::{consolidate, default_costs, CashCount, Shift, ShiftClosing};

/// Walk a compressed service day: orders, rewards, lifecycle, drawer closing.
#[derive(Parser, Debug)]
struct Args {
    /// Orders to run through the day.
    #[arg(long, default_value_t = 12)]
    orders: u32,
}

fn line(catalog: &StaticCatalog, menu_id: &str, qty: u32) -> OrderLine {
    let item = catalog.resolve(menu_id).expect("house item");
    OrderLine {
        menu_id: item.id.clone(),
        qty,
        unit_price_cents: item.price_cents,
        note: None,
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!(?args, "service_day_demo starting");

    let catalog = StaticCatalog::new(house_menu());
    let store = InMemoryOrderStore::new();
    let estimator = WaitEstimator::new(&catalog, &store, KitchenConfig::default());
    let metrics = MetricsRegistry::default();
    let timer = ServiceTimer::start();

    let customers = ["XK29QZ", "AB12CD", "QP88RT"];
    let mut accounts: HashMap<&str, RewardsAccount> = HashMap::new();
    let carts: [&[(&str, u32)]; 4] = [
        &[("churro_6", 1), ("chocolate_354", 2)],
        &[("chilaquiles", 1), ("cafe_olla", 1)],
        &[("malteada_473", 2), ("churro_relleno_1", 3)],
        &[("espresso", 1), ("frappe_354", 1), ("salsa_extra", 2)],
    ];

    let mut placed = Vec::new();
    for i in 0..args.orders {
        let customer = customers[i as usize % customers.len()];
        let cart = carts[i as usize % carts.len()];
        let items: Vec<OrderLine> = cart.iter().map(|(id, qty)| line(&catalog, id, *qty)).collect();
        let eta = estimator.estimate_wait_secs(&items);
        metrics.inc_estimates_computed(1);
        metrics.record_wait_peak(eta);
        let kind = if i % 2 == 0 {
            OrderKind::DineIn { table: format!("M{}", 1 + i % 6) }
        } else {
            OrderKind::Pickup { payment: PaymentMethod::MercadoPago }
        };
        let order = store.place(OrderDraft {
            customer_id: customer.to_string(),
            kind,
            items,
            eta_secs: eta,
        });
        metrics.inc_orders_placed(1);

        // One star per 10 pesos; malteadas punch the ice-cream card.
        let stars = stars_for_purchase(order.total_cents);
        let scoops: u32 = order
            .items
            .iter()
            .filter(|l| l.menu_id.starts_with("malteada"))
            .map(|l| l.qty)
            .sum();
        let account = accounts.entry(customer).or_default();
        let outcome = account.apply(stars, scoops);
        metrics.inc_stars_awarded(stars as u64);
        info!(
            order_id = order.id,
            customer,
            total_cents = order.total_cents,
            eta_secs = eta,
            stars,
            promoted = outcome.promoted_to_gold,
            free_drinks = outcome.free_drinks,
            "order placed"
        );
        placed.push(order.id);
    }

    for (customer, account) in &mut accounts {
        let customer = *customer;
        while account.can_redeem_scoop() {
            account.redeem_scoop()?;
            metrics.inc_scoops_redeemed(1);
            info!(customer, "free ice cream redeemed");
        }
    }

    // Kitchen works the queue down.
    for id in &placed {
        for status in [OrderStatus::InProgress, OrderStatus::Ready, OrderStatus::Delivered] {
            store.set_status(*id, status)?;
        }
    }

    // Close both shifts: cash in large bills, the remainder on the terminal.
    let sales: i64 = store
        .orders_with_status(&[OrderStatus::Delivered])
        .iter()
        .map(|o| o.total_cents)
        .sum();
    let half = sales / 2;
    let b100 = (half / 2 / 10_000) as u32;
    let closing = |shift: Shift, total: i64| ShiftClosing {
        date: "2026-08-24".to_string(),
        shift,
        count: CashCount {
            b100,
            card_cents: total - b100 as i64 * 10_000,
            ..CashCount::default()
        },
    };
    let closings = vec![closing(Shift::Morning, half), closing(Shift::Evening, sales - half)];
    for c in &closings {
        info!(
            closing_id = c.closing_id(),
            cash_cents = c.count.cash_total_cents(),
            total_cents = c.count.grand_total_cents(),
            "shift closed"
        );
    }

    let result = consolidate(&closings, &default_costs());
    info!(
        sales_cents = result.sales_cents,
        costs_cents = result.costs_cents,
        profit_cents = result.profit_cents,
        cash_to_return_cents = result.cash_to_return_cents,
        "period consolidated"
    );

    println!(
        "{}",
        metrics.snapshot().to_json_line("service_day_demo", Some(timer.elapsed()))
    );
    Ok(())
}
