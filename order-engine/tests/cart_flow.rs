//! End-to-end cart flows against in-memory collaborators

use chrono::Utc;
use order_engine::cart::{AddonGroupInput, Cart, CartContext, CartInput, CartItemInput, CartPolicy};
use order_engine::error::CartError;
use order_engine::lookup::{CatalogLookup, PromoCodeLookup, RestaurantLookup};
use order_engine::store::{OrderNotifier, OrderStore, StoreError};
use shared::models::{
    AddonGroup, AddonOption, Customer, DeliveryZone, GeoPoint, Product, PromoCode, PromoCodeType,
    Restaurant, ZoneShape,
};
use shared::order::{DeliveryAddress, OrderSnapshot, OrderStatus, PaymentStatus};
use shared::types::TenantId;
use std::collections::HashMap;
use std::sync::Mutex;

const IN_ZONE: GeoPoint = GeoPoint { lat: 52.23, lng: 21.01 };
const OUT_OF_ZONE: GeoPoint = GeoPoint { lat: 40.0, lng: -3.7 };

/// In-memory catalog/restaurant/promo world
#[derive(Default)]
struct World {
    products: HashMap<String, Product>,
    addon_groups: HashMap<String, AddonGroup>,
    addon_options: HashMap<String, AddonOption>,
    restaurants: HashMap<String, Restaurant>,
    promo_codes: HashMap<String, PromoCode>,
}

impl CatalogLookup for World {
    fn find_product(&self, _tenant: &TenantId, id: &str) -> Option<Product> {
        self.products.get(id).cloned()
    }

    fn find_addon_group(&self, _tenant: &TenantId, id: &str) -> Option<AddonGroup> {
        self.addon_groups.get(id).cloned()
    }

    fn find_addon_option(&self, _tenant: &TenantId, id: &str) -> Option<AddonOption> {
        self.addon_options.get(id).cloned()
    }
}

impl RestaurantLookup for World {
    fn find_restaurant(&self, _tenant: &TenantId, id: &str) -> Option<Restaurant> {
        self.restaurants.get(id).cloned()
    }
}

impl PromoCodeLookup for World {
    fn find_by_code(&self, _tenant: &TenantId, code: &str) -> Option<PromoCode> {
        self.promo_codes.get(code).cloned()
    }
}

impl World {
    fn seed() -> Self {
        let mut world = Self::default();

        world.products.insert(
            "margherita".into(),
            Product {
                id: "margherita".into(),
                name: "Margherita".into(),
                description: Some("Tomato and mozzarella".into()),
                price: 10.0,
                category: Some("pizza".into()),
                is_active: true,
            },
        );
        world.products.insert(
            "calzone".into(),
            Product {
                id: "calzone".into(),
                name: "Calzone".into(),
                description: None,
                price: 12.5,
                category: Some("pizza".into()),
                is_active: true,
            },
        );
        world.products.insert(
            "retired".into(),
            Product {
                id: "retired".into(),
                name: "Old Special".into(),
                description: None,
                price: 9.0,
                category: None,
                is_active: false,
            },
        );

        world.addon_groups.insert(
            "toppings".into(),
            AddonGroup {
                id: "toppings".into(),
                product_id: "margherita".into(),
                name: "Extra toppings".into(),
            },
        );
        world.addon_groups.insert(
            "calzone-fillings".into(),
            AddonGroup {
                id: "calzone-fillings".into(),
                product_id: "calzone".into(),
                name: "Fillings".into(),
            },
        );
        world.addon_options.insert(
            "olives".into(),
            AddonOption {
                id: "olives".into(),
                group_id: "toppings".into(),
                name: "Olives".into(),
                extra_price: 1.5,
            },
        );
        world.addon_options.insert(
            "ham".into(),
            AddonOption {
                id: "ham".into(),
                group_id: "toppings".into(),
                name: "Ham".into(),
                extra_price: 2.0,
            },
        );

        world.restaurants.insert(
            "trattoria".into(),
            Restaurant {
                id: "trattoria".into(),
                name: "Trattoria Centrale".into(),
                delivery_zones: vec![DeliveryZone {
                    id: "center".into(),
                    name: "City center".into(),
                    shape: ZoneShape::Circle {
                        center: IN_ZONE,
                        radius_m: 5_000.0,
                    },
                    is_active: true,
                    delivery_cost: 5.0,
                    min_order_amount: 20.0,
                    min_order_for_free_delivery: Some(40.0),
                }],
            },
        );

        world.promo_codes.insert(
            "TEN".into(),
            PromoCode {
                id: "pc-ten".into(),
                code: "TEN".into(),
                kind: PromoCodeType::DiscountPercent,
                amount: 10.0,
                min_order_amount: 20.0,
                usage_limit: 0,
                usages: 0,
                connected_customer_id: None,
                can_use_multiple_times: true,
                expires_at: None,
                is_active: true,
            },
        );
        world.promo_codes.insert(
            "VIPONLY".into(),
            PromoCode {
                id: "pc-vip".into(),
                code: "VIPONLY".into(),
                kind: PromoCodeType::DiscountValue,
                amount: 5.0,
                min_order_amount: 0.0,
                usage_limit: 0,
                usages: 0,
                connected_customer_id: Some("customer-x".into()),
                can_use_multiple_times: true,
                expires_at: None,
                is_active: true,
            },
        );
        world.promo_codes.insert(
            "FREESHIP".into(),
            PromoCode {
                id: "pc-freeship".into(),
                code: "FREESHIP".into(),
                kind: PromoCodeType::FreeDelivery,
                amount: 0.0,
                min_order_amount: 0.0,
                usage_limit: 0,
                usages: 0,
                connected_customer_id: None,
                can_use_multiple_times: true,
                expires_at: None,
                is_active: true,
            },
        );

        world
    }

    fn ctx<'a>(&'a self, tenant: &'a TenantId) -> CartContext<'a> {
        CartContext {
            tenant,
            catalog: self,
            restaurants: self,
            promo_codes: self,
        }
    }
}

#[derive(Default)]
struct RecordingStore {
    orders: Mutex<Vec<OrderSnapshot>>,
}

impl OrderStore for RecordingStore {
    fn create(&self, snapshot: &OrderSnapshot) -> Result<(), StoreError> {
        self.orders.lock().unwrap().push(snapshot.clone());
        Ok(())
    }
}

struct FailingStore;

impl OrderStore for FailingStore {
    fn create(&self, _snapshot: &OrderSnapshot) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection reset".into()))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notified: Mutex<Vec<String>>,
}

impl OrderNotifier for RecordingNotifier {
    fn order_placed(&self, snapshot: &OrderSnapshot) {
        self.notified.lock().unwrap().push(snapshot.order_id.clone());
    }
}

fn tenant() -> TenantId {
    TenantId::new("tenant-1")
}

fn address_in_zone() -> DeliveryAddress {
    DeliveryAddress {
        street_and_number: Some("Nowy Swiat 15".into()),
        city: Some("Warsaw".into()),
        location: Some(IN_ZONE),
        ..Default::default()
    }
}

fn pickup_input(items: Vec<CartItemInput>) -> CartInput {
    CartInput {
        restaurant: "trattoria".into(),
        items,
        delivery_type: Some("own_pickup".into()),
        payment_method: Some("cash".into()),
        ..Default::default()
    }
}

fn item(id: &str, quantity: i64) -> CartItemInput {
    CartItemInput {
        id: id.into(),
        quantity,
        addon_groups: vec![],
    }
}

#[test]
fn pickup_order_totals() {
    // One item, unit price 10.00, quantity 2, no addons, pickup, no promo
    let world = World::seed();
    let tenant = tenant();
    let cart = Cart::from_input(
        world.ctx(&tenant),
        pickup_input(vec![item("margherita", 2)]),
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    assert_eq!(cart.item_sum(), 20.0);
    assert_eq!(cart.delivery_cost(), 0.0);
    assert_eq!(cart.discount(), 0.0);
    assert_eq!(cart.final_total(), 20.0);
}

#[test]
fn delivery_waived_above_zone_threshold() {
    // Item sum 50.00, zone cost 5.00, free delivery from 40.00
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 5)]);
    input.delivery_type = Some("delivery".into());
    input.delivery_address = Some(address_in_zone());

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    assert_eq!(cart.item_sum(), 50.0);
    assert_eq!(cart.delivery_cost(), 0.0);
    assert_eq!(cart.final_total(), 50.0);
}

#[test]
fn delivery_charged_below_zone_threshold() {
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 3)]);
    input.delivery_type = Some("delivery".into());
    input.delivery_address = Some(address_in_zone());

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    assert_eq!(cart.item_sum(), 30.0);
    assert_eq!(cart.delivery_cost(), 5.0);
    assert_eq!(cart.final_total(), 35.0);
    assert!(cart.min_order_satisfied());
}

#[test]
fn percent_promo_discount() {
    // 10% promo on item sum 100.00 with delivery
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 10)]);
    input.delivery_type = Some("delivery".into());
    input.delivery_address = Some(address_in_zone());
    input.promo_code = Some("TEN".into());

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    assert_eq!(cart.item_sum(), 100.0);
    // 100 >= 40 so delivery is waived by the zone threshold
    assert_eq!(cart.delivery_cost(), 0.0);
    assert_eq!(cart.discount(), 10.0);
    assert_eq!(cart.final_total(), cart.item_sum() + cart.delivery_cost() - 10.0);
}

#[test]
fn restricted_promo_strict_vs_lenient() {
    let world = World::seed();
    let tenant = tenant();
    let stranger = Customer {
        id: "customer-y".into(),
        email: None,
        name: None,
        promo_code_usages: vec![],
    };

    let mut input = pickup_input(vec![item("margherita", 2)]);
    input.promo_code = Some("VIPONLY".into());

    let err = Cart::from_input(
        world.ctx(&tenant),
        input.clone(),
        CartPolicy::customer(),
        Some(&stranger),
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, CartError::PromoCodeIneligible(_)));

    // Lenient mode drops the code and keeps the order
    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::point_of_sale(),
        Some(&stranger),
        Utc::now(),
    )
    .unwrap();
    assert_eq!(cart.discount(), 0.0);
    assert_eq!(cart.final_total(), 20.0);
}

#[test]
fn foreign_addon_group_rejected_at_construction() {
    // Addon group belonging to a different product than the line's product
    let world = World::seed();
    let tenant = tenant();
    let input = pickup_input(vec![CartItemInput {
        id: "margherita".into(),
        quantity: 1,
        addon_groups: vec![AddonGroupInput {
            id: "calzone-fillings".into(),
            selection: vec![],
        }],
    }]);

    let err = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, CartError::InvalidAddonGroup(_)));
}

#[test]
fn foreign_addon_option_rejected() {
    let mut world = World::seed();
    let tenant = tenant();
    // An option owned by the calzone group, selected under the margherita group
    world.addon_options.insert(
        "stray".into(),
        AddonOption {
            id: "stray".into(),
            group_id: "calzone-fillings".into(),
            name: "Stray".into(),
            extra_price: 1.0,
        },
    );

    let input = pickup_input(vec![CartItemInput {
        id: "margherita".into(),
        quantity: 1,
        addon_groups: vec![AddonGroupInput {
            id: "toppings".into(),
            selection: vec!["stray".into()],
        }],
    }]);

    let err = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, CartError::InvalidAddonOption(_)));
}

#[test]
fn addons_price_into_line_subtotal() {
    // 2 x (10.00 + 1.50 + 2.00) = 27.00
    let world = World::seed();
    let tenant = tenant();
    let input = pickup_input(vec![CartItemInput {
        id: "margherita".into(),
        quantity: 2,
        addon_groups: vec![AddonGroupInput {
            id: "toppings".into(),
            selection: vec!["olives".into(), "ham".into()],
        }],
    }]);

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();
    assert_eq!(cart.item_sum(), 27.0);
}

#[test]
fn duplicate_addon_options_count_twice() {
    // Double olives: 1 x (10.00 + 1.50 + 1.50) = 13.00
    let world = World::seed();
    let tenant = tenant();
    let input = pickup_input(vec![CartItemInput {
        id: "margherita".into(),
        quantity: 1,
        addon_groups: vec![AddonGroupInput {
            id: "toppings".into(),
            selection: vec!["olives".into(), "olives".into()],
        }],
    }]);

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();
    assert_eq!(cart.item_sum(), 13.0);
}

#[test]
fn inactive_product_rejected() {
    let world = World::seed();
    let tenant = tenant();
    let err = Cart::from_input(
        world.ctx(&tenant),
        pickup_input(vec![item("retired", 1)]),
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, CartError::InvalidProduct(_)));
}

#[test]
fn zero_quantity_rejected() {
    let world = World::seed();
    let tenant = tenant();
    let err = Cart::from_input(
        world.ctx(&tenant),
        pickup_input(vec![item("margherita", 0)]),
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, CartError::InvalidQuantity { .. }));
}

#[test]
fn free_delivery_promo_waives_cost() {
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 3)]);
    input.delivery_type = Some("delivery".into());
    input.delivery_address = Some(address_in_zone());
    input.promo_code = Some("FREESHIP".into());

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    // 30.00 is below the 40.00 zone threshold; only the promo waives it
    assert_eq!(cart.item_sum(), 30.0);
    assert_eq!(cart.delivery_cost(), 0.0);
    assert_eq!(cart.discount(), 0.0);
    assert_eq!(cart.final_total(), 30.0);
}

#[test]
fn out_of_zone_delivery_costs_nothing() {
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 3)]);
    input.delivery_type = Some("delivery".into());
    input.delivery_address = Some(DeliveryAddress {
        street_and_number: Some("Gran Via 1".into()),
        location: Some(OUT_OF_ZONE),
        ..Default::default()
    });

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    assert_eq!(cart.delivery_cost(), 0.0);
    assert!(cart.zone().is_none());
    // No zone, no minimum
    assert_eq!(cart.min_order(), 0.0);
    assert!(cart.min_order_satisfied());
}

#[test]
fn totals_are_idempotent() {
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 3)]);
    input.delivery_type = Some("delivery".into());
    input.delivery_address = Some(address_in_zone());
    input.promo_code = Some("TEN".into());
    input.tip = 2.5;

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    assert_eq!(cart.item_sum(), cart.item_sum());
    assert_eq!(cart.delivery_cost(), cart.delivery_cost());
    assert_eq!(cart.discount(), cart.discount());
    assert_eq!(cart.final_total(), cart.final_total());
}

#[test]
fn final_total_monotonic_in_tip() {
    let world = World::seed();
    let tenant = tenant();
    let mut previous = f64::MIN;
    for tip in [0.0, 1.0, 2.5, 10.0] {
        let mut input = pickup_input(vec![item("margherita", 2)]);
        input.tip = tip;
        let cart = Cart::from_input(
            world.ctx(&tenant),
            input,
            CartPolicy::customer(),
            None,
            Utc::now(),
        )
        .unwrap();
        assert!(cart.final_total() >= previous);
        previous = cart.final_total();
    }
}

#[test]
fn negative_tip_is_sanitized() {
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 2)]);
    input.tip = -3.0;

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();
    assert_eq!(cart.tip(), 0.0);
    assert_eq!(cart.final_total(), 20.0);
}

#[test]
fn checkout_cash_order_visible_and_notified() {
    let world = World::seed();
    let tenant = tenant();
    let store = RecordingStore::default();
    let notifier = RecordingNotifier::default();

    let cart = Cart::from_input(
        world.ctx(&tenant),
        pickup_input(vec![item("margherita", 2)]),
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    let snapshot = cart.checkout(None, &store, &notifier).unwrap();

    assert_eq!(snapshot.status, OrderStatus::New);
    assert_eq!(snapshot.payment_status, PaymentStatus::NotPaid);
    assert!(snapshot.is_visible);
    assert_eq!(snapshot.overall_sum, 20.0);
    assert_eq!(snapshot.final_total, 20.0);

    let stored = store.orders.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].order_id, snapshot.order_id);
    assert_eq!(
        notifier.notified.lock().unwrap().as_slice(),
        &[snapshot.order_id.clone()]
    );
}

#[test]
fn checkout_online_order_withheld_from_staff() {
    let world = World::seed();
    let tenant = tenant();
    let store = RecordingStore::default();
    let notifier = RecordingNotifier::default();

    let mut input = pickup_input(vec![item("margherita", 2)]);
    input.payment_method = Some("blik".into());

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();
    let snapshot = cart.checkout(None, &store, &notifier).unwrap();

    assert_eq!(snapshot.status, OrderStatus::WaitingForPayment);
    assert!(!snapshot.is_visible);
    // Stored, but staff not notified until payment confirms
    assert_eq!(store.orders.lock().unwrap().len(), 1);
    assert!(notifier.notified.lock().unwrap().is_empty());
}

#[test]
fn checkout_pos_order_accepted_and_paid() {
    let world = World::seed();
    let tenant = tenant();
    let store = RecordingStore::default();
    let notifier = RecordingNotifier::default();

    let input = CartInput {
        restaurant: "trattoria".into(),
        items: vec![item("calzone", 2)],
        delivery_type: Some("dine_in".into()),
        payment_method: Some("cash".into()),
        ..Default::default()
    };

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::point_of_sale(),
        None,
        Utc::now(),
    )
    .unwrap();
    let snapshot = cart.checkout(None, &store, &notifier).unwrap();

    assert_eq!(snapshot.status, OrderStatus::Accepted);
    assert_eq!(snapshot.payment_status, PaymentStatus::Paid);
    assert!(snapshot.is_visible);
    assert_eq!(snapshot.final_total, 25.0);
    assert_eq!(notifier.notified.lock().unwrap().len(), 1);
}

#[test]
fn checkout_store_failure_propagates_without_notification() {
    let world = World::seed();
    let tenant = tenant();
    let notifier = RecordingNotifier::default();

    let cart = Cart::from_input(
        world.ctx(&tenant),
        pickup_input(vec![item("margherita", 2)]),
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    let err = cart.checkout(None, &FailingStore, &notifier).unwrap_err();
    assert!(matches!(err, CartError::Store(StoreError::Unavailable(_))));
    assert!(notifier.notified.lock().unwrap().is_empty());
}

#[test]
fn snapshot_freezes_lines_and_addons() {
    let world = World::seed();
    let tenant = tenant();
    let store = RecordingStore::default();
    let notifier = RecordingNotifier::default();

    let input = pickup_input(vec![CartItemInput {
        id: "margherita".into(),
        quantity: 2,
        addon_groups: vec![AddonGroupInput {
            id: "toppings".into(),
            selection: vec!["olives".into(), "ham".into()],
        }],
    }]);

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();
    let snapshot = cart.checkout(None, &store, &notifier).unwrap();

    assert_eq!(snapshot.lines.len(), 1);
    let line = &snapshot.lines[0];
    assert_eq!(line.name, "Margherita");
    assert_eq!(line.description.as_deref(), Some("Tomato and mozzarella"));
    assert_eq!(line.quantity, 2);
    assert_eq!(line.subtotal, 27.0);

    let addon_names: Vec<&str> = line.addons.iter().map(|a| a.option_name.as_str()).collect();
    assert_eq!(addon_names, vec!["Olives", "Ham"]);
    assert!(line.addons.iter().all(|a| a.group_name == "Extra toppings"));
    assert!(line.addons.iter().all(|a| a.quantity == 1));
}

#[test]
fn overlapping_zones_resolve_in_stored_order() {
    let mut world = World::seed();
    let tenant = tenant();

    // Prepend a second, wider zone covering the same point
    let restaurant = world.restaurants.get_mut("trattoria").unwrap();
    let mut wide = restaurant.delivery_zones[0].clone();
    wide.id = "wide".into();
    wide.name = "Greater metro".into();
    wide.shape = ZoneShape::Circle {
        center: IN_ZONE,
        radius_m: 50_000.0,
    };
    wide.delivery_cost = 9.0;
    wide.min_order_for_free_delivery = None;
    restaurant.delivery_zones.insert(0, wide);

    let mut input = pickup_input(vec![item("margherita", 3)]);
    input.delivery_type = Some("delivery".into());
    input.delivery_address = Some(address_in_zone());

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();

    // The wider zone comes first in the list, so it wins despite being larger
    assert_eq!(cart.zone().unwrap().id, "wide");
    assert_eq!(cart.delivery_cost(), 9.0);
}

#[test]
fn unknown_restaurant_rejected() {
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 1)]);
    input.restaurant = "ghost-kitchen".into();

    let err = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, CartError::RestaurantNotFound(_)));
}

#[test]
fn strict_delivery_validation() {
    let world = World::seed();
    let tenant = tenant();

    let mut input = pickup_input(vec![item("margherita", 1)]);
    input.delivery_type = Some("teleport".into());
    let err = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, CartError::InvalidDeliveryType(_)));

    let mut input = pickup_input(vec![item("margherita", 1)]);
    input.delivery_type = Some("delivery".into());
    input.delivery_address = None;
    let err = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, CartError::InvalidDeliveryAddress));
}

#[test]
fn tip_flows_into_final_total() {
    let world = World::seed();
    let tenant = tenant();
    let mut input = pickup_input(vec![item("margherita", 2)]);
    input.tip = 3.45;

    let cart = Cart::from_input(
        world.ctx(&tenant),
        input,
        CartPolicy::customer(),
        None,
        Utc::now(),
    )
    .unwrap();
    assert_eq!(cart.final_total(), 23.45);

    let totals = cart.totals();
    assert_eq!(totals.item_sum, 20.0);
    assert_eq!(totals.tip, 3.45);
    assert_eq!(totals.final_total, 23.45);
}
