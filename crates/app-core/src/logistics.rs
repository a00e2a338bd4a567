//! Logistics data provider
//!
//! Screens obtain drivers, trucks, trips, bids, loads and dashboard counters
//! through [`LogisticsSource`]. The only implementation today is
//! [`MockLogistics`], which serves the static fixtures after a simulated
//! network delay and never fails.
//!
//! # Example
//!
//! ```rust,no_run
//! use app_core::logistics::{LogisticsSource, MockLogistics, StatusFilter};
//! use app_core::domain::DriverStatus;
//!
//! # async fn demo() {
//! let source = MockLogistics::default();
//! let snapshot = source.fetch_all().await.unwrap();
//! let on_road = snapshot.drivers_with(StatusFilter::Only(DriverStatus::InTransit));
//! assert_eq!(on_road.len(), 1);
//! # }
//! ```

use crate::domain::{
    Bid, DashboardStats, Driver, DriverStatus, HasStatus, Load, LoadStatus, Status, Trip,
    TripStatus, Truck, TruckStatus,
};
use crate::fixtures;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default simulated latency of a fetch
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Fetch errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The source could not serve the request
    #[error("Logistics source unavailable: {0}")]
    Unavailable(String),

    /// The fetch was cancelled before it delivered
    #[error("Fetch cancelled")]
    Cancelled,
}

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Everything the home area needs, fetched in one go
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsSnapshot {
    /// Fleet drivers
    pub drivers: Vec<Driver>,
    /// Fleet trucks
    pub trucks: Vec<Truck>,
    /// Trips
    pub trips: Vec<Trip>,
    /// Bids
    pub bids: Vec<Bid>,
    /// Dashboard counters
    pub stats: DashboardStats,
}

impl LogisticsSnapshot {
    /// Trips currently on the road
    pub fn in_transit_trips(&self) -> Vec<Trip> {
        filter_by_status(&self.trips, StatusFilter::Only(TripStatus::InTransit))
    }

    /// Trucks currently on the road
    pub fn in_transit_trucks(&self) -> Vec<Truck> {
        filter_by_status(&self.trucks, StatusFilter::Only(TruckStatus::InTransit))
    }

    /// Drivers matching a filter
    pub fn drivers_with(&self, filter: StatusFilter<DriverStatus>) -> Vec<Driver> {
        filter_by_status(&self.drivers, filter)
    }

    /// Trucks matching a filter
    pub fn trucks_with(&self, filter: StatusFilter<TruckStatus>) -> Vec<Truck> {
        filter_by_status(&self.trucks, filter)
    }

    /// Trips matching a filter
    pub fn trips_with(&self, filter: StatusFilter<TripStatus>) -> Vec<Trip> {
        filter_by_status(&self.trips, filter)
    }

    /// Look up a trip by its navigation id
    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    /// Look up a truck by id
    pub fn truck(&self, id: &str) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id == id)
    }

    /// Look up a driver by id
    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }
}

/// Status filter chip on a list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter<S> {
    /// No filtering
    #[default]
    All,
    /// Keep only entities with this status
    Only(S),
}

impl<S: Status> StatusFilter<S> {
    /// Whether a status passes the filter
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Chip label
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

/// Filters offered by the drivers tab
pub fn driver_filters() -> [StatusFilter<DriverStatus>; 3] {
    [
        StatusFilter::All,
        StatusFilter::Only(DriverStatus::InTransit),
        StatusFilter::Only(DriverStatus::Available),
    ]
}

/// Filters offered by the trucks tab
pub fn truck_filters() -> [StatusFilter<TruckStatus>; 3] {
    [
        StatusFilter::All,
        StatusFilter::Only(TruckStatus::InTransit),
        StatusFilter::Only(TruckStatus::Available),
    ]
}

/// Filters offered by the trips tab
pub fn trip_filters() -> [StatusFilter<TripStatus>; 3] {
    [
        StatusFilter::All,
        StatusFilter::Only(TripStatus::InTransit),
        StatusFilter::Only(TripStatus::Scheduled),
    ]
}

/// Filters offered by the loads tab
pub fn load_filters() -> [StatusFilter<LoadStatus>; 3] {
    [
        StatusFilter::All,
        StatusFilter::Only(LoadStatus::Available),
        StatusFilter::Only(LoadStatus::Bidding),
    ]
}

/// Keep the entities passing `filter`, preserving their order
pub fn filter_by_status<T>(items: &[T], filter: StatusFilter<T::Status>) -> Vec<T>
where
    T: HasStatus + Clone,
{
    items.iter().filter(|item| filter.matches(item.status())).cloned().collect()
}

/// Source of logistics data
#[async_trait]
pub trait LogisticsSource: Send + Sync {
    /// Fetch drivers, trucks, trips, bids and stats
    async fn fetch_all(&self) -> Result<LogisticsSnapshot>;

    /// Fetch the load marketplace
    async fn fetch_loads(&self) -> Result<Vec<Load>>;
}

/// Fixture-backed source with simulated latency
#[derive(Debug, Clone)]
pub struct MockLogistics {
    delay: Duration,
}

impl Default for MockLogistics {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_DELAY)
    }
}

impl MockLogistics {
    /// Create a source that answers after `delay`
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured latency
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl LogisticsSource for MockLogistics {
    async fn fetch_all(&self) -> Result<LogisticsSnapshot> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "fetching logistics snapshot");
        tokio::time::sleep(self.delay).await;

        Ok(LogisticsSnapshot {
            drivers: fixtures::drivers(),
            trucks: fixtures::trucks(),
            trips: fixtures::trips(),
            bids: fixtures::bids(),
            stats: fixtures::dashboard_stats(),
        })
    }

    async fn fetch_loads(&self) -> Result<Vec<Load>> {
        tokio::time::sleep(self.delay).await;
        Ok(fixtures::loads())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_all_counts_after_delay() {
        let source = MockLogistics::default();
        let started = tokio::time::Instant::now();

        let snapshot = source.fetch_all().await.unwrap();

        assert!(started.elapsed() >= DEFAULT_FETCH_DELAY);
        assert_eq!(snapshot.drivers.len(), 3);
        assert_eq!(snapshot.trucks.len(), 3);
        assert_eq!(snapshot.trips.len(), 3);
        assert_eq!(snapshot.bids.len(), 2);
        assert_eq!(snapshot.stats.in_transit, 9);
    }

    #[tokio::test]
    async fn test_zero_delay_is_immediate() {
        let source = MockLogistics::new(Duration::ZERO);
        let started = Instant::now();
        let loads = source.fetch_loads().await.unwrap();
        assert_eq!(loads.len(), 4);
        assert!(started.elapsed() < Duration::from_millis(250));
    }

    #[test]
    fn test_filter_drivers_in_transit_preserves_order() {
        let drivers = fixtures::drivers();
        let mut extra = drivers[1].clone();
        extra.id = "4".to_string();
        let mut all = drivers.clone();
        all.push(extra);

        let filtered = filter_by_status(&all, StatusFilter::Only(DriverStatus::InTransit));

        let ids: Vec<_> = filtered.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
        assert!(filtered.iter().all(|d| d.status == DriverStatus::InTransit));
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let trips = fixtures::trips();
        assert_eq!(filter_by_status(&trips, StatusFilter::All), trips);
    }

    #[test]
    fn test_snapshot_helpers() {
        let snapshot = LogisticsSnapshot {
            drivers: fixtures::drivers(),
            trucks: fixtures::trucks(),
            trips: fixtures::trips(),
            bids: fixtures::bids(),
            stats: fixtures::dashboard_stats(),
        };

        assert_eq!(snapshot.in_transit_trips().len(), 2);
        assert_eq!(snapshot.in_transit_trucks().len(), 2);
        assert_eq!(snapshot.trips_with(StatusFilter::Only(TripStatus::Scheduled)).len(), 1);
        assert_eq!(snapshot.trucks_with(StatusFilter::Only(TruckStatus::Maintenance)).len(), 0);
        assert_eq!(snapshot.trip("3").map(|t| t.to.as_str()), Some("Pune"));
        assert!(snapshot.trip("99").is_none());
        assert_eq!(snapshot.truck("2").map(|t| t.driver.name.as_str()), Some("Suresh Kumar"));
        assert_eq!(snapshot.driver("3").map(|d| d.has_insurance), Some(false));
    }

    #[test]
    fn test_filter_chips() {
        let labels: Vec<_> = driver_filters().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "In Transit", "Available"]);

        let labels: Vec<_> = load_filters().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Available", "Bidding"]);

        assert_eq!(trip_filters()[2], StatusFilter::Only(TripStatus::Scheduled));
        assert_eq!(truck_filters()[1], StatusFilter::Only(TruckStatus::InTransit));
    }

    #[test]
    fn test_load_filter() {
        let bidding = filter_by_status(&fixtures::loads(), StatusFilter::Only(LoadStatus::Bidding));
        assert_eq!(bidding.len(), 1);
        assert_eq!(bidding[0].load_id, "LD 8274457");
    }
}
