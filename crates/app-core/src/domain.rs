//! Logistics domain entities
//!
//! Plain read-only records for drivers, trucks, trips, bids, loads and the
//! dashboard counters. Status fields are closed enumerations; they serialize
//! in kebab-case (`"in-transit"`) and field names in camelCase.

use serde::{Deserialize, Serialize};

/// Implemented by every status enumeration so list screens can filter generically
pub trait Status: Copy + Eq + std::fmt::Debug {
    /// Wire form of the status (e.g. `"in-transit"`)
    fn as_str(&self) -> &'static str;

    /// Human-readable label (e.g. `"In Transit"`)
    fn label(&self) -> &'static str;
}

/// Anything carrying a status
pub trait HasStatus {
    /// Status enumeration of the entity
    type Status: Status;

    /// Current status
    fn status(&self) -> Self::Status;
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => ($wire:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl Status for $name {
            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(format!("Unknown {}: {}", stringify!($name), s)),
                }
            }
        }
    };
}

status_enum! {
    /// Driver availability
    DriverStatus {
        /// Assigned to a truck
        Assigned => ("assigned", "Assigned"),
        /// Free for a new trip
        Available => ("available", "Available"),
        /// Currently driving a trip
        InTransit => ("in-transit", "In Transit"),
    }
}

status_enum! {
    /// Truck availability
    TruckStatus {
        /// On a trip
        InTransit => ("in-transit", "In Transit"),
        /// Free for a new trip
        Available => ("available", "Available"),
        /// Off the road
        Maintenance => ("maintenance", "Maintenance"),
    }
}

status_enum! {
    /// Trip progress
    TripStatus {
        /// On the road
        InTransit => ("in-transit", "In Transit"),
        /// Delivered
        Completed => ("completed", "Completed"),
        /// Not started yet
        Scheduled => ("scheduled", "Scheduled"),
    }
}

status_enum! {
    /// Bid outcome
    BidStatus {
        /// Awaiting shipper decision
        Pending => ("pending", "Pending"),
        /// Won
        Accepted => ("accepted", "Accepted"),
        /// Lost
        Rejected => ("rejected", "Rejected"),
    }
}

status_enum! {
    /// Load marketplace state
    LoadStatus {
        /// Open for bids
        Available => ("available", "Available"),
        /// Bidding in progress
        Bidding => ("bidding", "Bidding"),
        /// Given to a carrier
        Assigned => ("assigned", "Assigned"),
    }
}

/// A driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    /// Availability
    pub status: DriverStatus,
    /// Holds a verified driving license
    pub has_license: bool,
    /// Holds verified insurance
    pub has_insurance: bool,
}

/// A truck, with the driver assigned to it embedded by value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    /// Identifier
    pub id: String,
    /// Registration plate (e.g. "AP32 H 5643")
    pub vehicle_number: String,
    /// Last known location
    pub location: String,
    /// Availability
    pub status: TruckStatus,
    /// Registration verified
    pub has_registration: bool,
    /// Insurance verified
    pub has_insurance: bool,
    /// Assigned driver
    pub driver: Driver,
    /// Latitude of the last known position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude of the last known position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Truck {
    /// Coordinates when both are known
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// A trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Identifier used for navigation
    pub id: String,
    /// Display identifier (e.g. "ID 8274455")
    pub trip_id: String,
    /// Origin city
    pub from: String,
    /// Destination city
    pub to: String,
    /// Start date as displayed
    pub start_date: String,
    /// End date as displayed
    pub end_date: String,
    /// Progress
    pub status: TripStatus,
}

/// A bid on a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// Identifier
    pub id: String,
    /// Display identifier of the trip bid on
    pub trip_id: String,
    /// Amount in rupees
    pub amount: u64,
    /// Outcome
    pub status: BidStatus,
    /// Origin city
    pub from: String,
    /// Destination city
    pub to: String,
}

/// A load posted by a shipper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    /// Identifier
    pub id: String,
    /// Display identifier (e.g. "LD 8274455")
    pub load_id: String,
    /// Origin city
    pub from: String,
    /// Destination city
    pub to: String,
    /// Pickup date as displayed
    pub pickup_date: String,
    /// Delivery date as displayed
    pub delivery_date: String,
    /// Weight as displayed (e.g. "15 Tons")
    pub weight: String,
    /// Material carried
    pub material: String,
    /// Offered price as displayed
    pub price: String,
    /// Route distance as displayed
    pub distance: String,
    /// Shipper name
    pub shipper: String,
    /// Marketplace state
    pub status: LoadStatus,
}

/// Dashboard counters on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Trucks currently in transit
    pub in_transit: u32,
    /// Trucks in the fleet
    pub trucks: u32,
    /// Open bids
    pub bids: u32,
}

macro_rules! has_status {
    ($($entity:ty => $status:ty),+ $(,)?) => {
        $(
            impl HasStatus for $entity {
                type Status = $status;

                fn status(&self) -> $status {
                    self.status
                }
            }
        )+
    };
}

has_status! {
    Driver => DriverStatus,
    Truck => TruckStatus,
    Trip => TripStatus,
    Bid => BidStatus,
    Load => LoadStatus,
}

/// Format a rupee amount with Indian digit grouping (e.g. 145000 → "₹1,45,000")
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}
