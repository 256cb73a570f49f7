//! Dispatch configuration: distance thresholds, box keywords, bucket ranks.

/// Configuration for the order dispatch core.
///
/// Nine tunables: three distance thresholds in kilometers, a comma-separated
/// box keyword list, and five integer priority ranks, one per bucket. Ranks
/// need not be contiguous or distinct; lower rank values sort first, and rank
/// collisions are broken by bucket declaration order (short-pickup,
/// long-pickup, vip, food, others).
///
/// Bucket disjointness assumes `short_pickup_distance <= long_pickup_distance`.
/// The thresholds are not validated: with an inverted pair, every order beyond
/// `short_pickup_distance` is classified down the long-pickup/vip/food/others
/// path and the short-pickup bucket simply never fills past the short
/// threshold. That is a documented edge-case policy, not an error.
///
/// # Examples
///
/// ```
/// use courier_dispatch::config::DispatchConfig;
///
/// let config = DispatchConfig::default()
///     .with_box_keywords("pizza,cake,flamingo,hot dog")
///     .with_priorities(4, 1, 2, 3, 0);
///
/// assert_eq!(config.box_keywords(), ["pizza", "cake", "flamingo", "hot dog"]);
/// assert_eq!(config.others_priority, 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchConfig {
    /// Pickup-to-delivery distance (km) above which an order requires a
    /// long-delivery-capable vehicle.
    pub long_delivery_distance: f64,
    /// Courier-to-pickup distance (km) at or below which an order is
    /// short-pickup.
    pub short_pickup_distance: f64,
    /// Courier-to-pickup distance (km) at or below which an order is
    /// long-pickup (when it is not already short-pickup).
    pub long_pickup_distance: f64,
    /// Rank of the short-pickup bucket.
    pub short_pickup_priority: i32,
    /// Rank of the long-pickup bucket.
    pub long_pickup_priority: i32,
    /// Rank of the vip bucket.
    pub vip_priority: i32,
    /// Rank of the food bucket.
    pub food_priority: i32,
    /// Rank of the others bucket.
    pub others_priority: i32,
    /// Normalized box keywords: lowercase, trimmed, empty segments dropped.
    /// Computed once from the comma-separated configuration value.
    box_keywords: Vec<String>,
}

impl Default for DispatchConfig {
    /// The reference configuration: thresholds 5.0 / 0.5 / 1.0 km, keywords
    /// `"pizza,cake,flamingo"`, ranks 0..4 in declaration order.
    fn default() -> Self {
        Self {
            long_delivery_distance: 5.0,
            short_pickup_distance: 0.5,
            long_pickup_distance: 1.0,
            short_pickup_priority: 0,
            long_pickup_priority: 1,
            vip_priority: 2,
            food_priority: 3,
            others_priority: 4,
            box_keywords: normalize_keywords("pizza,cake,flamingo"),
        }
    }
}

impl DispatchConfig {
    /// Creates the reference configuration. Same as [`Default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the long-delivery distance threshold in kilometers.
    pub fn with_long_delivery_distance(mut self, km: f64) -> Self {
        self.long_delivery_distance = km;
        self
    }

    /// Sets the short-pickup distance threshold in kilometers.
    pub fn with_short_pickup_distance(mut self, km: f64) -> Self {
        self.short_pickup_distance = km;
        self
    }

    /// Sets the long-pickup distance threshold in kilometers.
    pub fn with_long_pickup_distance(mut self, km: f64) -> Self {
        self.long_pickup_distance = km;
        self
    }

    /// Sets the box keywords from a comma-separated list.
    ///
    /// Keywords are normalized once here: lowercased, trimmed, empty segments
    /// dropped. Matching later is a plain substring test against the
    /// lowercased order description.
    pub fn with_box_keywords(mut self, comma_separated: &str) -> Self {
        self.box_keywords = normalize_keywords(comma_separated);
        self
    }

    /// Sets all five bucket ranks at once, in declaration order.
    pub fn with_priorities(
        mut self,
        short_pickup: i32,
        long_pickup: i32,
        vip: i32,
        food: i32,
        others: i32,
    ) -> Self {
        self.short_pickup_priority = short_pickup;
        self.long_pickup_priority = long_pickup;
        self.vip_priority = vip;
        self.food_priority = food;
        self.others_priority = others;
        self
    }

    /// The normalized box keyword list.
    pub fn box_keywords(&self) -> &[String] {
        &self.box_keywords
    }

    /// Returns true if the description contains any box keyword,
    /// case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_dispatch::config::DispatchConfig;
    ///
    /// let config = DispatchConfig::default(); // pizza, cake, flamingo
    /// assert!(config.requires_box("Family-size PIZZA with olives"));
    /// assert!(!config.requires_box("Envelope with signed contracts"));
    /// ```
    pub fn requires_box(&self, description: &str) -> bool {
        let description = description.to_lowercase();
        self.box_keywords.iter().any(|kw| description.contains(kw))
    }
}

/// Splits a comma-separated keyword list into lowercase trimmed keywords.
fn normalize_keywords(comma_separated: &str) -> Vec<String> {
    comma_separated
        .split(',')
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect()
}
