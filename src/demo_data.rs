//! Embedded Barcelona demo dataset.
//!
//! Five orders around the Eixample and six couriers stationed near Plaça de
//! Catalunya. The data is embedded at compile time and parsed through the
//! same JSON loaders production data would use.
//!
//! The geometry is arranged so that, under the default configuration, the
//! pizza order is the only short-pickup order, the kebab and hot dog orders
//! sit in the long-pickup band, and the envelope (VIP) and flamingo orders
//! lie beyond it — with the flamingo delivery far enough to require a
//! long-delivery-capable vehicle.

use crate::catalog::{LoadError, OrderCatalog};
use crate::directory::CourierDirectory;

const ORDERS_JSON: &str = include_str!("../data/orders.json");
const COURIERS_JSON: &str = include_str!("../data/couriers.json");

/// Loads the demo order catalog.
///
/// # Examples
///
/// ```
/// use courier_dispatch::demo_data::demo_catalog;
///
/// let catalog = demo_catalog().unwrap();
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.orders()[0].id, "order-1");
/// ```
pub fn demo_catalog() -> Result<OrderCatalog, LoadError> {
    OrderCatalog::from_json_str(ORDERS_JSON)
}

/// Loads the demo courier roster.
///
/// # Examples
///
/// ```
/// use courier_dispatch::demo_data::demo_directory;
///
/// let directory = demo_directory().unwrap();
/// assert_eq!(directory.couriers().len(), 6);
/// assert!(directory.find_by_id("courier-1").is_some());
/// ```
pub fn demo_directory() -> Result<CourierDirectory, LoadError> {
    CourierDirectory::from_json_str(COURIERS_JSON)
}
