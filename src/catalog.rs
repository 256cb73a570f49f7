//! The immutable order catalog, loaded once at startup.

use std::path::Path;

use tracing::info;

use crate::domain::Order;

/// Error type for static data loading.
///
/// A failed catalog load at startup is fatal: no request can be served without
/// the catalog, so callers should report the error once and refuse to start.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to parse the JSON payload.
    Parse(serde_json::Error),
    /// I/O error reading a data file.
    Io(std::io::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Parse(e) => write!(f, "Parse error: {}", e),
            LoadError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// The full, immutable, ordered sequence of orders.
///
/// Loaded once before any request is served and never mutated afterward, so a
/// shared reference (or an `Arc`) can safely be handed to concurrent callers.
/// Sequence order is significant: dispatch preserves it within each priority
/// bucket.
///
/// # Examples
///
/// ```
/// use courier_dispatch::catalog::OrderCatalog;
///
/// let catalog = OrderCatalog::from_json_str(
///     r#"[{
///         "id": "order-1",
///         "description": "Two butter croissants",
///         "food": true,
///         "vip": false,
///         "pickup": { "latitude": 41.39, "longitude": 2.17 },
///         "delivery": { "latitude": 41.40, "longitude": 2.18 }
///     }]"#,
/// )
/// .unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.orders()[0].id, "order-1");
/// ```
#[derive(Clone, Debug)]
pub struct OrderCatalog {
    orders: Vec<Order>,
}

impl OrderCatalog {
    /// Creates a catalog from an already-built order sequence.
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Parses a catalog from a JSON array of order records.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let orders: Vec<Order> = serde_json::from_str(json)?;
        info!(orders = orders.len(), "order catalog loaded");
        Ok(Self { orders })
    }

    /// Reads and parses a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The orders in catalog sequence.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders in the catalog.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if the catalog holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
