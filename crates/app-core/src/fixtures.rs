//! Static mock fixtures standing in for backend data

use crate::domain::{
    Bid, BidStatus, DashboardStats, Driver, DriverStatus, Load, LoadStatus, Trip, TripStatus,
    Truck, TruckStatus,
};

fn driver(id: &str, name: &str, img: u8, status: DriverStatus, has_insurance: bool) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!("https://i.pravatar.cc/150?img={}", img),
        status,
        has_license: true,
        has_insurance,
    }
}

/// The three fleet drivers
pub fn drivers() -> Vec<Driver> {
    vec![
        driver("1", "Ramesh kamenani", 12, DriverStatus::Assigned, true),
        driver("2", "Suresh Kumar", 13, DriverStatus::InTransit, true),
        driver("3", "Vijay Singh", 14, DriverStatus::Available, false),
    ]
}

/// The three fleet trucks; truck N carries driver N
pub fn trucks() -> Vec<Truck> {
    let drivers = drivers();
    let rows = [
        ("1", "AP32 H 5643", "HYD, Kukatapalli", TruckStatus::InTransit, 17.4948, 78.3917),
        ("2", "TN09 AB 1234", "Chennai, T Nagar", TruckStatus::InTransit, 13.0418, 80.2341),
        ("3", "KA05 MN 7890", "Bangalore, Whitefield", TruckStatus::Available, 12.9698, 77.7499),
    ];

    rows.into_iter()
        .zip(drivers)
        .map(|((id, number, location, status, lat, lng), driver)| Truck {
            id: id.to_string(),
            vehicle_number: number.to_string(),
            location: location.to_string(),
            status,
            has_registration: true,
            has_insurance: true,
            driver,
            latitude: Some(lat),
            longitude: Some(lng),
        })
        .collect()
}

/// Trips shown on the trips tab
pub fn trips() -> Vec<Trip> {
    let rows = [
        ("1", "ID 8274455", "Hyderabad", "Visakhapatnam", "10, Jul 2025", "14 Jul,2025", TripStatus::InTransit),
        ("2", "ID 8274456", "Chennai", "Bangalore", "12, Jul 2025", "15 Jul,2025", TripStatus::InTransit),
        ("3", "ID 8274457", "Mumbai", "Pune", "15, Jul 2025", "16 Jul,2025", TripStatus::Scheduled),
    ];

    rows.into_iter()
        .map(|(id, trip_id, from, to, start, end, status)| Trip {
            id: id.to_string(),
            trip_id: trip_id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            status,
        })
        .collect()
}

/// Bids placed by the supplier
pub fn bids() -> Vec<Bid> {
    vec![
        Bid {
            id: "1".to_string(),
            trip_id: "ID 8274455".to_string(),
            amount: 45000,
            status: BidStatus::Pending,
            from: "Delhi".to_string(),
            to: "Jaipur".to_string(),
        },
        Bid {
            id: "2".to_string(),
            trip_id: "ID 8274456".to_string(),
            amount: 38000,
            status: BidStatus::Accepted,
            from: "Mumbai".to_string(),
            to: "Surat".to_string(),
        },
    ]
}

/// Loads open on the marketplace
pub fn loads() -> Vec<Load> {
    let rows = [
        ("1", "LD 8274455", "Mumbai", "Delhi", "25 Dec 2025", "28 Dec 2025", "15 Tons", "Electronics", "₹85,000", "1,400 km", "ABC Logistics", LoadStatus::Available),
        ("2", "LD 8274456", "Bangalore", "Chennai", "26 Dec 2025", "27 Dec 2025", "10 Tons", "Textiles", "₹35,000", "350 km", "XYZ Transport", LoadStatus::Available),
        ("3", "LD 8274457", "Hyderabad", "Pune", "24 Dec 2025", "26 Dec 2025", "20 Tons", "Construction Materials", "₹95,000", "560 km", "BuildCo Ltd", LoadStatus::Bidding),
        ("4", "LD 8274458", "Kolkata", "Bhubaneswar", "27 Dec 2025", "28 Dec 2025", "8 Tons", "FMCG Products", "₹28,000", "440 km", "FastMove Cargo", LoadStatus::Available),
    ];

    rows.into_iter()
        .map(
            |(id, load_id, from, to, pickup, delivery, weight, material, price, distance, shipper, status)| Load {
                id: id.to_string(),
                load_id: load_id.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                pickup_date: pickup.to_string(),
                delivery_date: delivery.to_string(),
                weight: weight.to_string(),
                material: material.to_string(),
                price: price.to_string(),
                distance: distance.to_string(),
                shipper: shipper.to_string(),
                status,
            },
        )
        .collect()
}

/// Dashboard counters
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats { in_transit: 9, trucks: 23, bids: 11 }
}
