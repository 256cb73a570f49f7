//! Courier Dispatch - demo console

use std::sync::Arc;

use tracing::error;
use tracing_subscriber::EnvFilter;

use courier_dispatch::config::DispatchConfig;
use courier_dispatch::selector::OrderSelector;
use courier_dispatch::{console, demo_data};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("courier_dispatch=info".parse().unwrap()),
        )
        .init();

    console::print_banner();

    // A failed catalog or roster load is fatal: nothing can be served.
    let catalog = match demo_data::demo_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("order catalog failed to load: {e}");
            std::process::exit(1);
        }
    };
    let directory = match demo_data::demo_directory() {
        Ok(directory) => Arc::new(directory),
        Err(e) => {
            error!("courier roster failed to load: {e}");
            std::process::exit(1);
        }
    };

    console::print_summary(catalog.len(), directory.couriers().len());

    let selector = OrderSelector::new(
        DispatchConfig::default(),
        Arc::new(catalog),
        Arc::clone(&directory),
    );

    for courier in directory.couriers() {
        match selector.list_for_courier(&courier.id) {
            Ok(board) => console::print_board(courier, &board),
            Err(e) => error!("dispatch failed for {}: {e}", courier.id),
        }
    }
}
