//! Courier order dispatch
//!
//! Filters a static order catalog down to what one courier may carry and
//! orders the result by configurable priority buckets.
//!
//! # Domain Model
//!
//! - [`Location`](domain::Location): Geographic point with haversine distance
//! - [`Order`](domain::Order): Delivery order with food/VIP attributes
//! - [`Courier`](domain::Courier): Courier with a vehicle and a box flag
//! - [`Vehicle`](domain::Vehicle): Closed set of courier vehicle types
//!
//! # Dispatch Rules
//!
//! - **Box rule**: couriers without an insulated box cannot carry orders
//!   whose description matches a configured keyword
//! - **Long-delivery rule**: deliveries beyond the long-delivery threshold
//!   need a motorcycle or electric scooter
//! - **Priority buckets**: eligible orders are bucketed by courier-to-pickup
//!   distance (short-pickup, long-pickup, then vip/food/others) and emitted
//!   ascending by configured rank

pub mod catalog;
pub mod config;
pub mod console;
pub mod demo_data;
pub mod directory;
pub mod domain;
pub mod selector;
