//! The dispatch core: eligibility filtering, distance bucketing, and priority
//! assembly.
//!
//! # Pipeline
//!
//! For one courier, the selector runs three pure stages over the immutable
//! catalog:
//!
//! 1. **Eligibility filter** — drop orders the courier cannot carry (box
//!    keywords, long-delivery vehicle rule).
//! 2. **Distance bucketing** — classify each eligible order into exactly one
//!    of five [`Bucket`]s from the courier-to-pickup distance and the order
//!    attributes.
//! 3. **Priority assembly** — concatenate the buckets ascending by configured
//!    rank, breaking rank ties by bucket declaration order.
//!
//! Catalog order is preserved end to end: the filter keeps a subsequence, each
//! bucket fills in catalog order, and assembly never re-sorts within a bucket.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::OrderCatalog;
use crate::config::DispatchConfig;
use crate::directory::CourierDirectory;
use crate::domain::{Courier, Order};

/// Error type for dispatch operations.
#[derive(Debug)]
pub enum DispatchError {
    /// No courier with the given ID exists in the directory.
    CourierNotFound(String),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::CourierNotFound(id) => write!(f, "Courier not found: {}", id),
        }
    }
}

impl std::error::Error for DispatchError {}

/// The five mutually exclusive priority buckets.
///
/// An eligible order lands in exactly one bucket. The variant order here is
/// the declaration order used to break rank ties deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Pickup within the short-pickup threshold.
    ShortPickup,
    /// Pickup between the short-pickup and long-pickup thresholds.
    LongPickup,
    /// Beyond the long-pickup threshold, VIP customer.
    Vip,
    /// Beyond the long-pickup threshold, food order for a non-VIP.
    Food,
    /// Beyond the long-pickup threshold, neither VIP nor food.
    Others,
}

impl Bucket {
    /// All buckets in declaration order, the rank-collision tie-break.
    pub const DECLARATION_ORDER: [Bucket; 5] = [
        Bucket::ShortPickup,
        Bucket::LongPickup,
        Bucket::Vip,
        Bucket::Food,
        Bucket::Others,
    ];

    /// Classifies one eligible order from its courier-to-pickup distance.
    ///
    /// The cases are evaluated first-match-wins and are exhaustive and
    /// disjoint as long as `short_pickup_distance <= long_pickup_distance`.
    /// VIP/food attributes only matter beyond the long-pickup threshold: a
    /// nearby VIP order is still short-pickup.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_dispatch::config::DispatchConfig;
    /// use courier_dispatch::domain::{Location, Order};
    /// use courier_dispatch::selector::Bucket;
    ///
    /// let config = DispatchConfig::default(); // short 0.5 km, long 1.0 km
    /// let vip = Order::new(
    ///     "order-1",
    ///     "Envelope",
    ///     Location::new(41.39, 2.17),
    ///     Location::new(41.40, 2.18),
    /// )
    /// .with_vip(true);
    ///
    /// assert_eq!(Bucket::classify(0.3, &vip, &config), Bucket::ShortPickup);
    /// assert_eq!(Bucket::classify(2.0, &vip, &config), Bucket::Vip);
    /// ```
    pub fn classify(pickup_distance_km: f64, order: &Order, config: &DispatchConfig) -> Bucket {
        if pickup_distance_km <= config.short_pickup_distance {
            Bucket::ShortPickup
        } else if pickup_distance_km <= config.long_pickup_distance {
            Bucket::LongPickup
        } else if order.vip {
            Bucket::Vip
        } else if order.food {
            Bucket::Food
        } else {
            Bucket::Others
        }
    }

    /// The configured rank of this bucket. Lower sorts first.
    fn priority(self, config: &DispatchConfig) -> i32 {
        match self {
            Bucket::ShortPickup => config.short_pickup_priority,
            Bucket::LongPickup => config.long_pickup_priority,
            Bucket::Vip => config.vip_priority,
            Bucket::Food => config.food_priority,
            Bucket::Others => config.others_priority,
        }
    }
}

/// Returns true if the courier may carry the order at all.
///
/// Both rules must pass:
/// - **Box rule**: a courier without a box rejects any order whose description
///   contains a configured box keyword (case-insensitive substring).
/// - **Long-delivery rule**: an order whose pickup-to-delivery distance
///   exceeds the long-delivery threshold needs a long-delivery-capable
///   vehicle.
fn is_eligible(order: &Order, courier: &Courier, config: &DispatchConfig) -> bool {
    if !courier.carries_box && config.requires_box(&order.description) {
        return false;
    }

    if order.delivery_distance_km() > config.long_delivery_distance
        && !courier.vehicle.is_long_delivery_capable()
    {
        return false;
    }

    true
}

/// Reduces the catalog to the orders the courier is allowed to carry.
///
/// Pure function of its inputs; the result is an order-preserving subsequence
/// of `orders`.
pub fn eligible_orders<'a>(
    orders: &'a [Order],
    courier: &Courier,
    config: &DispatchConfig,
) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| is_eligible(order, courier, config))
        .collect()
}

/// Concatenates the five buckets ascending by configured rank.
///
/// The sort is stable over the declaration-order list, so buckets sharing a
/// rank keep their declaration order.
fn assemble(mut buckets: [Vec<Order>; 5], config: &DispatchConfig) -> Vec<Order> {
    let mut by_rank = Bucket::DECLARATION_ORDER;
    by_rank.sort_by_key(|bucket| bucket.priority(config));

    let mut result = Vec::with_capacity(buckets.iter().map(Vec::len).sum());
    for bucket in by_rank {
        result.append(&mut buckets[bucket as usize]);
    }
    result
}

/// The order selector: produces a courier-specific prioritized order sequence.
///
/// Holds the immutable configuration plus shared references to the catalog and
/// the courier directory. Nothing is mutated after construction, so one
/// selector may serve concurrent callers without locking.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use courier_dispatch::catalog::OrderCatalog;
/// use courier_dispatch::config::DispatchConfig;
/// use courier_dispatch::directory::CourierDirectory;
/// use courier_dispatch::domain::{Courier, Location, Order, Vehicle};
/// use courier_dispatch::selector::OrderSelector;
///
/// let catalog = OrderCatalog::new(vec![Order::new(
///     "order-1",
///     "Envelope",
///     Location::new(41.39, 2.17),
///     Location::new(41.40, 2.18),
/// )]);
/// let directory = CourierDirectory::new(vec![Courier::new(
///     "courier-1",
///     "Marta",
///     Location::new(41.387, 2.17),
///     Vehicle::Motorcycle,
/// )]);
///
/// let selector = OrderSelector::new(
///     DispatchConfig::default(),
///     Arc::new(catalog),
///     Arc::new(directory),
/// );
///
/// let board = selector.list_for_courier("courier-1").unwrap();
/// assert_eq!(board.len(), 1);
/// assert!(selector.list_for_courier("courier-404").is_err());
/// ```
pub struct OrderSelector {
    config: DispatchConfig,
    catalog: Arc<OrderCatalog>,
    directory: Arc<CourierDirectory>,
}

impl OrderSelector {
    /// Creates a selector over a shared catalog and directory.
    pub fn new(
        config: DispatchConfig,
        catalog: Arc<OrderCatalog>,
        directory: Arc<CourierDirectory>,
    ) -> Self {
        Self {
            config,
            catalog,
            directory,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Returns the full catalog, unfiltered and unprioritized.
    ///
    /// The result is an owned copy; callers cannot reach catalog state
    /// through it.
    pub fn list_all(&self) -> Vec<Order> {
        self.catalog.orders().to_vec()
    }

    /// Returns the prioritized orders the given courier may carry.
    ///
    /// Resolves the courier, filters the catalog to eligible orders, buckets
    /// them by pickup distance, and concatenates the buckets by configured
    /// rank. Fails with [`DispatchError::CourierNotFound`] for an unknown ID.
    pub fn list_for_courier(&self, courier_id: &str) -> Result<Vec<Order>, DispatchError> {
        let courier = self
            .directory
            .find_by_id(courier_id)
            .ok_or_else(|| DispatchError::CourierNotFound(courier_id.to_string()))?;

        let eligible = eligible_orders(self.catalog.orders(), courier, &self.config);
        debug!(
            courier = %courier.id,
            catalog = self.catalog.len(),
            eligible = eligible.len(),
            "catalog filtered"
        );

        let mut buckets: [Vec<Order>; 5] = std::array::from_fn(|_| Vec::new());
        for order in eligible {
            let distance = courier.location.distance_km(&order.pickup);
            let bucket = Bucket::classify(distance, order, &self.config);
            buckets[bucket as usize].push(order.clone());
        }

        Ok(assemble(buckets, &self.config))
    }
}
