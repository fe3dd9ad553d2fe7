//! Menu catalog: read-only item lookup plus the house menu data.

use std::collections::HashMap;

use porfirio_core::menu::{MenuItem, PromoWindow, Station};
use porfirio_core::{MoneyCents, Seconds};

/// Read-only point lookup over the menu.
///
/// `resolve` returning `None` means the id is unknown or the item has been
/// deactivated; callers skip such lines rather than treating them as errors,
/// since historical orders may reference retired items.
pub trait Catalog {
    fn resolve(&self, menu_id: &str) -> Option<&MenuItem>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn resolve(&self, menu_id: &str) -> Option<&MenuItem> {
        (**self).resolve(menu_id)
    }
}

/// Catalog backed by an in-memory index of the active menu.
///
/// Inactive items are dropped at construction, so they resolve as absent.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    index: HashMap<String, MenuItem>,
}

impl StaticCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let index = items
            .into_iter()
            .filter(|item| item.active)
            .map(|item| (item.id.clone(), item))
            .collect();
        Self { index }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.index.values()
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> {
        self.index.values().filter(move |item| item.category == category)
    }
}

impl Catalog for StaticCatalog {
    fn resolve(&self, menu_id: &str) -> Option<&MenuItem> {
        self.index.get(menu_id)
    }
}

fn item(
    id: &str,
    name: &str,
    category: &str,
    price_cents: MoneyCents,
    station: Station,
    prep_time_secs: Seconds,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        station,
        prep_time_secs,
        batch_capacity: 1,
        active: true,
        includes_drink: false,
        promo_window: None,
    }
}

fn fryer(
    id: &str,
    name: &str,
    category: &str,
    price_cents: MoneyCents,
    prep_time_secs: Seconds,
    batch_capacity: u32,
) -> MenuItem {
    MenuItem {
        batch_capacity,
        ..item(id, name, category, price_cents, Station::Fryer, prep_time_secs)
    }
}

fn breakfast(id: &str, name: &str, price_cents: MoneyCents, prep_time_secs: Seconds) -> MenuItem {
    MenuItem {
        includes_drink: true,
        ..item(id, name, "Desayunos", price_cents, Station::Stock, prep_time_secs)
    }
}

fn promo(id: &str, name: &str, price_cents: MoneyCents, window: PromoWindow) -> MenuItem {
    MenuItem {
        promo_window: Some(window),
        ..item(id, name, "Promociones", price_cents, Station::Mix, 0)
    }
}

/// The full house menu of Churrería Porfirio.
pub fn house_menu() -> Vec<MenuItem> {
    vec![
        fryer("churro_3", "Churros tradicionales (3 pzas)", "Churros", 4_900, 180, 6),
        fryer("churro_6", "Churros tradicionales (6 pzas)", "Churros", 7_900, 180, 6),
        fryer("churro_12", "Churros tradicionales (12 pzas)", "Churros", 14_900, 180, 6),
        fryer("churro_relleno_1", "Churro relleno (1 pza)", "Rellenos", 3_500, 210, 3),
        fryer("churro_relleno_3", "Churros rellenos (3 pzas)", "Rellenos", 9_900, 210, 3),
        fryer("mini_churros", "Mini churros (15 pzas)", "Mini Churros", 7_900, 240, 15),
        item("bunuelos", "Buñuelos (2 pzas)", "Postres", 4_900, Station::Stock, 0),
        item("carlota", "Carlota (fresa / vainilla / chocolate)", "Postres", 7_500, Station::Stock, 0),
        item("adelitas", "Adelitas (queso / española / jamón y queso)", "Antojitos", 13_900, Station::Stock, 0),
        item("salsa_extra", "Salsa extra (cajeta / chocolate / lechera)", "Extras", 1_500, Station::Stock, 0),
        breakfast("chilaquiles", "Chilaquiles (verde o roja) — incluye bebida 354 ml", 14_900, 480),
        breakfast("enchiladas", "Enchiladas (verde o roja) — incluye bebida 354 ml", 14_900, 540),
        breakfast("enfrijoladas", "Enfrijoladas — incluye bebida 354 ml", 14_900, 540),
        breakfast("molletes", "Molletes — incluye bebida 354 ml", 13_900, 420),
        breakfast("sincronizadas", "Sincronizadas — incluye bebida 354 ml", 12_900, 360),
        promo(
            "promo_viejos_tiempos",
            "Recordando viejos tiempos (1L chocolate + 6 churros)",
            22_900,
            PromoWindow::MORNING,
        ),
        promo(
            "promo_dulce_dia",
            "Empieza un dulce día (café de olla + churro relleno)",
            6_900,
            PromoWindow::MORNING,
        ),
        promo(
            "promo_granizados",
            "Congelando momentos (2 granizados 354 ml)",
            9_900,
            PromoWindow::AFTERNOON,
        ),
        item("espresso", "Espresso", "Café", 3_900, Station::Barista, 180),
        item("americano", "Americano", "Café", 4_500, Station::Barista, 180),
        item("cafe_olla", "Café de olla", "Café", 5_500, Station::Barista, 240),
        item("latte", "Café Latte", "Café", 6_500, Station::Barista, 240),
        item("mocha", "Mocha", "Café", 7_500, Station::Barista, 270),
        item("capuccino", "Capuccino", "Café", 7_500, Station::Barista, 270),
        item("chai_latte", "Chai Latte", "Café", 7_500, Station::Barista, 300),
        item("te_354", "Té (354 ml)", "Café", 4_000, Station::Barista, 180),
        item("chocolate_354", "Chocolate caliente 354 ml", "Chocolate", 7_900, Station::Barista, 240),
        item("chocolate_473", "Chocolate caliente 473 ml", "Chocolate", 8_900, Station::Barista, 300),
        item("frappe_354", "Frappe / Granizado 354 ml", "Bebidas frías", 7_900, Station::Cold, 240),
        item("frappe_473", "Frappe / Granizado 473 ml", "Bebidas frías", 8_900, Station::Cold, 270),
        item("malteada_354", "Malteada 354 ml", "Bebidas frías", 9_900, Station::Cold, 240),
        item("malteada_473", "Malteada 473 ml", "Bebidas frías", 11_500, Station::Cold, 270),
        item("refresco_355", "Refresco 355 ml", "Bebidas", 4_500, Station::Stock, 0),
        item("agua_500", "Agua natural 500 ml", "Bebidas", 3_000, Station::Stock, 0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn house_menu_ids_are_unique() {
        let menu = house_menu();
        let ids: HashSet<_> = menu.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), menu.len());
    }

    #[test]
    fn resolve_finds_active_items() {
        let catalog = StaticCatalog::new(house_menu());
        let churros = catalog.resolve("churro_6").unwrap();
        assert_eq!(churros.station, Station::Fryer);
        assert_eq!(churros.prep_time_secs, 180);
        assert_eq!(churros.batch_capacity, 6);
    }

    #[test]
    fn unknown_ids_resolve_as_absent() {
        let catalog = StaticCatalog::new(house_menu());
        assert!(catalog.resolve("churro_100").is_none());
    }

    #[test]
    fn inactive_items_are_dropped_from_the_index() {
        let mut menu = house_menu();
        for m in &mut menu {
            if m.id == "espresso" {
                m.active = false;
            }
        }
        let catalog = StaticCatalog::new(menu);
        assert!(catalog.resolve("espresso").is_none());
        assert!(catalog.resolve("latte").is_some());
    }

    #[test]
    fn promos_carry_their_windows() {
        let catalog = StaticCatalog::new(house_menu());
        let morning = catalog.resolve("promo_dulce_dia").unwrap();
        assert_eq!(morning.promo_window, Some(PromoWindow::MORNING));
        let afternoon = catalog.resolve("promo_granizados").unwrap();
        assert_eq!(afternoon.promo_window, Some(PromoWindow::AFTERNOON));
    }
}
