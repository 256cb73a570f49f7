//! Domain model for courier order dispatch.
//!
//! # Overview
//!
//! Models the dispatch problem with:
//! - Geographic [`Location`]s with haversine distance calculation
//! - Delivery [`Order`]s with food/VIP attributes and pickup/delivery points
//! - [`Courier`]s with a vehicle and an insulated-box capability flag
//! - [`Vehicle`] as a closed set of courier vehicle types
//!
//! All types are immutable value objects once loaded; the dispatch core only
//! reads them.

use serde::{Deserialize, Serialize};

/// Earth radius in kilometers for haversine calculation.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A geographic location with latitude and longitude.
///
/// Equality is exact field equality; two locations are the same point only if
/// both coordinates match bit-for-bit.
///
/// # Examples
///
/// ```
/// use courier_dispatch::domain::Location;
///
/// let placa_catalunya = Location::new(41.3870, 2.1700);
/// let sagrada_familia = Location::new(41.4036, 2.1744);
///
/// // Distance is approximately 1.9 km
/// let distance = placa_catalunya.distance_km(&sagrada_familia);
/// assert!(distance > 1.8 && distance < 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Calculates the great-circle distance in kilometers using the haversine formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_dispatch::domain::Location;
    ///
    /// let a = Location::new(0.0, 0.0);
    /// let b = Location::new(0.0, 1.0);
    ///
    /// // 1 degree of longitude at the equator is about 111 km
    /// let dist = a.distance_km(&b);
    /// assert!(dist > 111.0 && dist < 112.0);
    /// ```
    pub fn distance_km(&self, other: &Location) -> f64 {
        if self.latitude == other.latitude && self.longitude == other.longitude {
            return 0.0;
        }

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lon2 = other.longitude.to_radians();

        // Haversine formula
        let dlat = lat2 - lat1;
        let dlon = lon2 - lon1;
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

/// A courier vehicle type.
///
/// [`Vehicle::Motorcycle`] and [`Vehicle::ElectricScooter`] are the
/// long-delivery-capable vehicles: only they may carry orders whose
/// pickup-to-delivery distance exceeds the configured long-delivery threshold.
///
/// # Examples
///
/// ```
/// use courier_dispatch::domain::Vehicle;
///
/// assert!(Vehicle::Motorcycle.is_long_delivery_capable());
/// assert!(Vehicle::ElectricScooter.is_long_delivery_capable());
/// assert!(!Vehicle::Bicycle.is_long_delivery_capable());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vehicle {
    Car,
    Motorcycle,
    ElectricScooter,
    Bicycle,
    Walking,
}

impl Vehicle {
    /// Returns true if this vehicle may carry long-delivery orders.
    #[inline]
    pub fn is_long_delivery_capable(&self) -> bool {
        matches!(self, Vehicle::Motorcycle | Vehicle::ElectricScooter)
    }
}

/// A delivery order from the static catalog.
///
/// Orders are created once at startup and never mutated or deleted during the
/// process lifetime. The catalog position of an order is significant: dispatch
/// results preserve it within each priority bucket.
///
/// # Examples
///
/// ```
/// use courier_dispatch::domain::{Location, Order};
///
/// let order = Order::new(
///     "order-7",
///     "Sushi platter for two",
///     Location::new(41.39, 2.17),
///     Location::new(41.40, 2.18),
/// )
/// .with_food(true);
///
/// assert!(order.food);
/// assert!(!order.vip);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID within the catalog.
    pub id: String,
    /// Free-text description; matched against the configured box keywords.
    pub description: String,
    /// Whether the order contains food.
    pub food: bool,
    /// Whether the customer is a VIP.
    pub vip: bool,
    /// Where the courier picks the order up.
    pub pickup: Location,
    /// Where the courier delivers the order.
    pub delivery: Location,
}

impl Order {
    /// Creates a new order with `food` and `vip` unset.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        pickup: Location,
        delivery: Location,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            food: false,
            vip: false,
            pickup,
            delivery,
        }
    }

    /// Sets the food flag.
    pub fn with_food(mut self, food: bool) -> Self {
        self.food = food;
        self
    }

    /// Sets the VIP flag.
    pub fn with_vip(mut self, vip: bool) -> Self {
        self.vip = vip;
        self
    }

    /// Distance from pickup to delivery in kilometers.
    #[inline]
    pub fn delivery_distance_km(&self) -> f64 {
        self.pickup.distance_km(&self.delivery)
    }
}

/// A courier with a current location, vehicle, and box capability.
///
/// Courier records are owned by the
/// [`CourierDirectory`](crate::directory::CourierDirectory); the dispatch core
/// only reads them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    /// Unique courier ID.
    pub id: String,
    /// Courier name for display.
    pub name: String,
    /// Current location.
    pub location: Location,
    /// Vehicle the courier rides.
    pub vehicle: Vehicle,
    /// Whether the courier carries an insulated/secure delivery box.
    #[serde(rename = "box")]
    pub carries_box: bool,
}

impl Courier {
    /// Creates a new courier without a box.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Location,
        vehicle: Vehicle,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            vehicle,
            carries_box: false,
        }
    }

    /// Sets the box capability flag.
    pub fn with_box(mut self, carries_box: bool) -> Self {
        self.carries_box = carries_box;
        self
    }
}
