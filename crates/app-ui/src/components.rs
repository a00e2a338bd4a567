//! View models for the shared cards and badges
//!
//! Each model is built from a domain record and carries exactly what the
//! card draws, so rendering code never inspects domain state itself.

use crate::theme::{Color, Palette, LIGHT};
use app_core::domain::{
    format_rupees, Bid, BidStatus, DashboardStats, Driver, DriverStatus, Load, LoadStatus, Status,
    Trip, TripStatus, Truck, TruckStatus,
};
use serde::Serialize;

// =============================================================================
// Status Badge
// =============================================================================

/// Badge color family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Green
    #[default]
    Success,
    /// Amber
    Warning,
    /// Red
    Error,
}

/// A pill with a short status label
///
/// Badges draw with the light palette in both themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    /// Text shown in the pill
    pub label: String,
    /// Color family
    pub variant: BadgeVariant,
}

impl StatusBadge {
    /// Create a badge
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    /// Pill fill
    pub fn background(&self) -> Color {
        match self.variant {
            BadgeVariant::Success => LIGHT.status_in_transit,
            BadgeVariant::Warning => LIGHT.warning,
            BadgeVariant::Error => LIGHT.error,
        }
    }

    /// Label color
    pub fn text_color(&self) -> Color {
        LIGHT.text_inverse
    }
}

/// Badge for a truck
pub fn truck_badge(status: TruckStatus) -> StatusBadge {
    let variant = match status {
        TruckStatus::InTransit | TruckStatus::Available => BadgeVariant::Success,
        TruckStatus::Maintenance => BadgeVariant::Warning,
    };
    StatusBadge::new(status.label(), variant)
}

/// Badge for a trip
pub fn trip_badge(status: TripStatus) -> StatusBadge {
    let variant = match status {
        TripStatus::InTransit | TripStatus::Completed => BadgeVariant::Success,
        TripStatus::Scheduled => BadgeVariant::Warning,
    };
    StatusBadge::new(status.label(), variant)
}

/// Badge for a bid
pub fn bid_badge(status: BidStatus) -> StatusBadge {
    let variant = match status {
        BidStatus::Accepted => BadgeVariant::Success,
        BidStatus::Pending => BadgeVariant::Warning,
        BidStatus::Rejected => BadgeVariant::Error,
    };
    StatusBadge::new(status.label(), variant)
}

/// Document tick shown on driver and truck cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationCheck {
    /// Document name
    pub label: &'static str,
    /// Whether the document is on file
    pub verified: bool,
}

impl VerificationCheck {
    /// Outline color of the tick box
    pub fn border_color(&self, palette: &Palette) -> Color {
        if self.verified {
            palette.success
        } else {
            palette.border
        }
    }
}

// =============================================================================
// Cards
// =============================================================================

/// Driver list card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverCard {
    /// Driver name
    pub name: String,
    /// Avatar URL
    pub avatar: String,
    /// Present only for assigned drivers
    pub badge: Option<StatusBadge>,
    /// License and insurance ticks
    pub checks: [VerificationCheck; 2],
}

impl DriverCard {
    /// Build the card for `driver`
    pub fn new(driver: &Driver) -> Self {
        let badge = (driver.status == DriverStatus::Assigned)
            .then(|| StatusBadge::new(DriverStatus::Assigned.label(), BadgeVariant::Success));

        Self {
            name: driver.name.clone(),
            avatar: driver.avatar.clone(),
            badge,
            checks: [
                VerificationCheck {
                    label: "License",
                    verified: driver.has_license,
                },
                VerificationCheck {
                    label: "Insurance",
                    verified: driver.has_insurance,
                },
            ],
        }
    }
}

/// Truck list card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruckCard {
    /// Plate number
    pub vehicle_number: String,
    /// "Location : <city>"
    pub location: String,
    /// Status badge
    pub badge: StatusBadge,
    /// Registration and insurance ticks
    pub checks: [VerificationCheck; 2],
    /// Assigned driver name
    pub driver_name: String,
    /// Assigned driver avatar
    pub driver_avatar: String,
}

impl TruckCard {
    /// Build the card for `truck`
    pub fn new(truck: &Truck) -> Self {
        Self {
            vehicle_number: truck.vehicle_number.clone(),
            location: format!("Location : {}", truck.location),
            badge: truck_badge(truck.status),
            checks: [
                VerificationCheck {
                    label: "Registration",
                    verified: truck.has_registration,
                },
                VerificationCheck {
                    label: "Insurance",
                    verified: truck.has_insurance,
                },
            ],
            driver_name: truck.driver.name.clone(),
            driver_avatar: truck.driver.avatar.clone(),
        }
    }
}

/// Trip list card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripCard {
    /// Trip id to pass to the details screen
    pub id: String,
    /// Display trip number
    pub trip_id: String,
    /// Origin city and start date
    pub origin: (String, String),
    /// Destination city and end date
    pub destination: (String, String),
    /// Status badge
    pub badge: StatusBadge,
}

impl TripCard {
    /// Build the card for `trip`
    pub fn new(trip: &Trip) -> Self {
        Self {
            id: trip.id.clone(),
            trip_id: trip.trip_id.clone(),
            origin: (trip.from.clone(), trip.start_date.clone()),
            destination: (trip.to.clone(), trip.end_date.clone()),
            badge: trip_badge(trip.status),
        }
    }
}

/// Bid list card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidCard {
    /// Trip the bid was placed on
    pub trip_id: String,
    /// "From → To"
    pub route: String,
    /// Formatted amount
    pub amount: String,
    /// Status badge
    pub badge: StatusBadge,
}

impl BidCard {
    /// Build the card for `bid`
    pub fn new(bid: &Bid) -> Self {
        Self {
            trip_id: bid.trip_id.clone(),
            route: format!("{} → {}", bid.from, bid.to),
            amount: format_rupees(bid.amount),
            badge: bid_badge(bid.status),
        }
    }
}

/// Load marketplace card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadCard {
    /// Display load number
    pub load_id: String,
    /// "From → To"
    pub route: String,
    /// Material and weight
    pub cargo: String,
    /// Quoted price
    pub price: String,
    /// Capitalized status
    pub status_label: &'static str,
    status: LoadStatus,
}

impl LoadCard {
    /// Build the card for `load`
    pub fn new(load: &Load) -> Self {
        Self {
            load_id: load.load_id.clone(),
            route: format!("{} → {}", load.from, load.to),
            cargo: format!("{} • {}", load.material, load.weight),
            price: load.price.clone(),
            status_label: load.status.label(),
            status: load.status,
        }
    }

    /// Status text color
    pub fn status_color(&self, palette: &Palette) -> Color {
        load_status_color(self.status, palette)
    }

    /// Status pill fill: the status color at 12% opacity
    pub fn status_tint(&self, palette: &Palette) -> String {
        format!("{}20", self.status_color(palette))
    }
}

/// Status color for a load
pub fn load_status_color(status: LoadStatus, palette: &Palette) -> Color {
    match status {
        LoadStatus::Available => palette.success,
        LoadStatus::Bidding => palette.warning,
        LoadStatus::Assigned => palette.text_secondary,
    }
}

/// Dashboard counter tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Ionicons name
    pub icon: &'static str,
    /// Caption
    pub label: &'static str,
    /// Zero-padded count
    pub value: String,
}

impl StatCard {
    /// Create a tile; the value is padded to two digits
    pub fn new(icon: &'static str, label: &'static str, value: u32) -> Self {
        Self {
            icon,
            label,
            value: format!("{:02}", value),
        }
    }

    /// The three dashboard tiles
    pub fn dashboard(stats: &DashboardStats) -> [StatCard; 3] {
        [
            StatCard::new("time-outline", "In Transit", stats.in_transit),
            StatCard::new("bus-outline", "Trucks", stats.trucks),
            StatCard::new("pricetags-outline", "Bids", stats.bids),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DARK;
    use app_core::fixtures;

    #[test]
    fn test_badge_colors() {
        assert_eq!(StatusBadge::new("x", BadgeVariant::Success).background(), "#22c55e");
        assert_eq!(StatusBadge::new("x", BadgeVariant::Warning).background(), "#f59e0b");
        assert_eq!(StatusBadge::new("x", BadgeVariant::Error).background(), "#ef4444");
        assert_eq!(StatusBadge::new("x", BadgeVariant::default()).text_color(), "#ffffff");
    }

    #[test]
    fn test_only_assigned_driver_gets_badge() {
        let cards: Vec<_> = fixtures::drivers().iter().map(DriverCard::new).collect();
        let badges: Vec<_> = cards.iter().map(|c| c.badge.as_ref().map(|b| b.label.as_str())).collect();

        assert_eq!(badges, vec![Some("Assigned"), None, None]);
    }

    #[test]
    fn test_driver_checks() {
        let vijay = DriverCard::new(&fixtures::drivers()[2]);
        assert!(vijay.checks[0].verified);
        assert!(!vijay.checks[1].verified);
        assert_eq!(vijay.checks[1].border_color(&LIGHT), LIGHT.border);
        assert_eq!(vijay.checks[0].border_color(&DARK), DARK.success);
    }

    #[test]
    fn test_truck_card() {
        let truck = &fixtures::trucks()[0];
        let card = TruckCard::new(truck);
        assert_eq!(card.location, format!("Location : {}", truck.location));
        assert_eq!(card.driver_name, truck.driver.name);
        assert_eq!(truck_badge(TruckStatus::Maintenance).variant, BadgeVariant::Warning);
    }

    #[test]
    fn test_trip_and_bid_badges() {
        assert_eq!(trip_badge(TripStatus::InTransit).label, "In Transit");
        assert_eq!(trip_badge(TripStatus::Scheduled).variant, BadgeVariant::Warning);
        assert_eq!(bid_badge(BidStatus::Rejected).variant, BadgeVariant::Error);

        let card = BidCard::new(&fixtures::bids()[0]);
        assert_eq!(card.amount, "₹45,000");
        assert_eq!(card.badge.label, "Pending");
    }

    #[test]
    fn test_load_status_colors() {
        let loads = fixtures::loads();
        let bidding = loads.iter().find(|l| l.status == LoadStatus::Bidding).unwrap();
        let card = LoadCard::new(bidding);

        assert_eq!(card.status_label, "Bidding");
        assert_eq!(card.status_color(&LIGHT), "#f59e0b");
        assert_eq!(card.status_tint(&LIGHT), "#f59e0b20");
        assert_eq!(load_status_color(LoadStatus::Assigned, &DARK), "#cbd5e1");
    }

    #[test]
    fn test_stat_cards_pad_values() {
        let tiles = StatCard::dashboard(&fixtures::dashboard_stats());
        let values: Vec<_> = tiles.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["09", "23", "11"]);
        assert_eq!(StatCard::new("x", "y", 120).value, "120");
    }
}
