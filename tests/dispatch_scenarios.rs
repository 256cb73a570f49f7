//! End-to-end dispatch scenarios over the embedded Barcelona demo dataset.

use std::collections::HashSet;
use std::sync::Arc;

use courier_dispatch::catalog::OrderCatalog;
use courier_dispatch::config::DispatchConfig;
use courier_dispatch::demo_data::{demo_catalog, demo_directory};
use courier_dispatch::directory::CourierDirectory;
use courier_dispatch::domain::{Courier, Location, Order, Vehicle};
use courier_dispatch::selector::{DispatchError, OrderSelector};

fn demo_selector(config: DispatchConfig) -> OrderSelector {
    OrderSelector::new(
        config,
        Arc::new(demo_catalog().unwrap()),
        Arc::new(demo_directory().unwrap()),
    )
}

fn ids(orders: &[Order]) -> Vec<&str> {
    orders.iter().map(|o| o.id.as_str()).collect()
}

#[test]
fn list_all_returns_the_full_catalog_in_sequence() {
    let selector = demo_selector(DispatchConfig::default());
    let orders = selector.list_all();

    assert_eq!(
        ids(&orders),
        ["order-1", "order-2", "order-3", "order-4", "order-5"]
    );

    let expected = Order::new(
        "order-1",
        "I want a pizza cut into very small slices",
        Location::new(41.389, 2.1715),
        Location::new(41.3998, 2.1896),
    )
    .with_food(true);
    assert_eq!(orders[0], expected);
}

#[test]
fn courier_with_box_and_motorcycle_gets_everything_pizza_first() {
    let selector = demo_selector(DispatchConfig::default());
    let orders = selector.list_for_courier("courier-1").unwrap();

    assert_eq!(orders.len(), 5);
    // short-pickup, long-pickup (catalog order), vip, others
    assert_eq!(
        ids(&orders),
        ["order-1", "order-2", "order-5", "order-3", "order-4"]
    );
    assert!(orders[0].description.contains("pizza"));
}

#[test]
fn boxless_bicycle_courier_gets_hot_dog_then_vip_envelope() {
    let selector = demo_selector(DispatchConfig::default());
    let orders = selector.list_for_courier("courier-2").unwrap();

    // pizza, cake, and flamingo orders fall to the box rule; the hot dog
    // (long-pickup) outranks the VIP envelope (beyond long-pickup).
    assert_eq!(ids(&orders), ["order-5", "order-3"]);
    assert!(!orders[0].description.to_lowercase().contains("pizza"));
    assert!(orders[1].vip);
}

#[test]
fn boxless_motorcycle_courier_sees_the_same_two_orders() {
    let selector = demo_selector(DispatchConfig::default());
    let orders = selector.list_for_courier("courier-3").unwrap();

    assert_eq!(ids(&orders), ["order-5", "order-3"]);
}

#[test]
fn bicycle_courier_with_box_loses_only_the_long_delivery() {
    let selector = demo_selector(DispatchConfig::default());
    let orders = selector.list_for_courier("courier-4").unwrap();

    // The flamingo delivery is ~7.8 km; a bicycle cannot take it.
    assert_eq!(orders.len(), 4);
    assert_eq!(
        ids(&orders),
        ["order-1", "order-2", "order-5", "order-3"]
    );
}

#[test]
fn electric_scooter_is_long_delivery_capable() {
    let selector = demo_selector(DispatchConfig::default());
    let orders = selector.list_for_courier("courier-5").unwrap();

    assert_eq!(orders.len(), 5);
    assert!(ids(&orders).contains(&"order-4"));
}

#[test]
fn car_courier_cannot_take_the_long_delivery() {
    let selector = demo_selector(DispatchConfig::default());
    let orders = selector.list_for_courier("courier-6").unwrap();

    assert_eq!(ids(&orders), ["order-1", "order-2", "order-5", "order-3"]);
}

#[test]
fn adding_hot_dog_keyword_removes_the_hot_dog_order() {
    let config = DispatchConfig::default().with_box_keywords("pizza,cake,flamingo,hot dog");
    let selector = demo_selector(config);
    let orders = selector.list_for_courier("courier-2").unwrap();

    assert_eq!(ids(&orders), ["order-3"]);
}

#[test]
fn keyword_update_empties_a_board_whose_sole_order_matches() {
    let catalog = OrderCatalog::new(vec![Order::new(
        "order-9",
        "Hot dog with extra mustard",
        Location::new(41.389, 2.1715),
        Location::new(41.3998, 2.1896),
    )
    .with_food(true)]);
    let directory = CourierDirectory::new(vec![Courier::new(
        "courier-9",
        "Bruno",
        Location::new(41.387, 2.17),
        Vehicle::Bicycle,
    )]);

    let before = OrderSelector::new(
        DispatchConfig::default(),
        Arc::new(catalog.clone()),
        Arc::new(directory.clone()),
    );
    assert_eq!(before.list_for_courier("courier-9").unwrap().len(), 1);

    let after = OrderSelector::new(
        DispatchConfig::default().with_box_keywords("pizza,cake,flamingo,hot dog"),
        Arc::new(catalog),
        Arc::new(directory),
    );
    assert!(after.list_for_courier("courier-9").unwrap().is_empty());
}

#[test]
fn swapped_ranks_move_vip_ahead_of_short_pickup() {
    let config = DispatchConfig::default().with_priorities(4, 1, 2, 3, 0);
    let selector = demo_selector(config);
    let orders = selector.list_for_courier("courier-1").unwrap();

    // others first, short-pickup last
    assert_eq!(
        ids(&orders),
        ["order-4", "order-2", "order-5", "order-3", "order-1"]
    );

    let vip_pos = orders.iter().position(|o| o.vip).unwrap();
    let pizza_pos = orders.iter().position(|o| o.id == "order-1").unwrap();
    assert!(vip_pos < pizza_pos);
}

#[test]
fn unknown_courier_is_a_not_found_error() {
    let selector = demo_selector(DispatchConfig::default());
    let err = selector.list_for_courier("courier-404").unwrap_err();

    assert!(matches!(err, DispatchError::CourierNotFound(ref id) if id == "courier-404"));
    assert_eq!(err.to_string(), "Courier not found: courier-404");
}

#[test]
fn courier_results_are_a_subsequence_of_the_catalog_by_id() {
    let selector = demo_selector(DispatchConfig::default());
    let all_ids: HashSet<String> = selector.list_all().into_iter().map(|o| o.id).collect();

    for courier_id in ["courier-1", "courier-2", "courier-3", "courier-4"] {
        let result = selector.list_for_courier(courier_id).unwrap();
        let result_ids: Vec<&String> = result.iter().map(|o| &o.id).collect();

        let distinct: HashSet<&String> = result_ids.iter().copied().collect();
        assert_eq!(distinct.len(), result_ids.len(), "{courier_id}: duplicate ids");
        assert!(
            result_ids.iter().all(|id| all_ids.contains(*id)),
            "{courier_id}: unknown id in result"
        );
    }
}

#[test]
fn dispatch_is_idempotent() {
    let selector = demo_selector(DispatchConfig::default());

    let first = selector.list_for_courier("courier-1").unwrap();
    let second = selector.list_for_courier("courier-1").unwrap();
    assert_eq!(first, second);
}

#[test]
fn list_all_hands_out_a_defensive_copy() {
    let selector = demo_selector(DispatchConfig::default());

    let mut copy = selector.list_all();
    copy.clear();

    assert_eq!(selector.list_all().len(), 5);
}
