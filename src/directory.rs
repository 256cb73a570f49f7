//! Courier lookup by identifier.

use tracing::info;

use crate::catalog::LoadError;
use crate::domain::Courier;

/// Resolves courier identifiers to courier records.
///
/// The directory owns the courier roster; the dispatch core only reads it.
/// Like the order catalog it is initialized once and never mutated, so it can
/// be shared freely between concurrent callers.
#[derive(Clone, Debug)]
pub struct CourierDirectory {
    couriers: Vec<Courier>,
}

impl CourierDirectory {
    /// Creates a directory from an already-built roster.
    pub fn new(couriers: Vec<Courier>) -> Self {
        Self { couriers }
    }

    /// Parses a roster from a JSON array of courier records.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let couriers: Vec<Courier> = serde_json::from_str(json)?;
        info!(couriers = couriers.len(), "courier roster loaded");
        Ok(Self { couriers })
    }

    /// Looks a courier up by ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_dispatch::directory::CourierDirectory;
    /// use courier_dispatch::domain::{Courier, Location, Vehicle};
    ///
    /// let directory = CourierDirectory::new(vec![Courier::new(
    ///     "courier-1",
    ///     "Marta",
    ///     Location::new(41.387, 2.17),
    ///     Vehicle::Motorcycle,
    /// )]);
    ///
    /// assert!(directory.find_by_id("courier-1").is_some());
    /// assert!(directory.find_by_id("courier-404").is_none());
    /// ```
    pub fn find_by_id(&self, courier_id: &str) -> Option<&Courier> {
        self.couriers.iter().find(|c| c.id == courier_id)
    }

    /// All couriers in roster order.
    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }
}
