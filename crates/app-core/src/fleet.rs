//! Add-driver and add-truck forms
//!
//! Submissions are mocked: a complete form resolves to a new fleet record
//! after the simulated latency, nothing is persisted, and an incomplete form
//! is ignored.

use crate::domain::{Driver, DriverStatus, Truck, TruckStatus};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_ID: AtomicU64 = AtomicU64::new(100);

fn next_id() -> String {
    NEXT_ID.fetch_add(1, Ordering::Relaxed).to_string()
}

/// Blood groups offered on the driver form
pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

/// Vehicle body types offered on the truck form
pub const VEHICLE_TYPES: [&str; 5] = ["Container", "Flatbed", "Tanker", "Refrigerated", "Dump Truck"];

/// Fuel types offered on the truck form
pub const FUEL_TYPES: [&str; 4] = ["Diesel", "Petrol", "CNG", "Electric"];

/// Add-driver form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverForm {
    /// Full name (required)
    pub full_name: String,
    /// Phone (required)
    pub phone: String,
    /// Email
    pub email: String,
    /// Address
    pub address: String,
    /// Driving license number (required)
    pub license_number: String,
    /// License expiry, DD/MM/YYYY
    pub license_expiry: String,
    /// Years of experience
    pub experience: String,
    /// One of [`BLOOD_GROUPS`]
    pub blood_group: String,
}

impl DriverForm {
    /// Select a blood group; unknown values are ignored
    pub fn select_blood_group(&mut self, group: &str) -> bool {
        if BLOOD_GROUPS.contains(&group) {
            self.blood_group = group.to_string();
            true
        } else {
            false
        }
    }

    /// Whether every required field is filled
    pub fn is_complete(&self) -> bool {
        [&self.full_name, &self.phone, &self.license_number]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Submit after `delay`; `None` when incomplete
    pub async fn submit(&self, delay: Duration) -> Option<Driver> {
        if !self.is_complete() {
            return None;
        }
        tokio::time::sleep(delay).await;

        let driver = Driver {
            id: next_id(),
            name: self.full_name.trim().to_string(),
            avatar: String::new(),
            status: DriverStatus::Available,
            has_license: true,
            has_insurance: false,
        };
        tracing::info!(driver_id = %driver.id, "driver added");
        Some(driver)
    }
}

/// Add-truck form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckForm {
    /// Plate number (required)
    pub vehicle_number: String,
    /// One of [`VEHICLE_TYPES`] (required)
    pub vehicle_type: String,
    /// Capacity in tons (required)
    pub capacity: String,
    /// Registration certificate number
    pub registration_number: String,
    /// Insurance policy number
    pub insurance_number: String,
    /// Model name
    pub model: String,
    /// Manufacturing year
    pub year: String,
    /// One of [`FUEL_TYPES`]
    pub fuel_type: String,
}

impl Default for TruckForm {
    fn default() -> Self {
        Self {
            vehicle_number: String::new(),
            vehicle_type: String::new(),
            capacity: String::new(),
            registration_number: String::new(),
            insurance_number: String::new(),
            model: String::new(),
            year: String::new(),
            fuel_type: FUEL_TYPES[0].to_string(),
        }
    }
}

impl TruckForm {
    /// Select a vehicle type; unknown values are ignored
    pub fn select_vehicle_type(&mut self, kind: &str) -> bool {
        if VEHICLE_TYPES.contains(&kind) {
            self.vehicle_type = kind.to_string();
            true
        } else {
            false
        }
    }

    /// Select a fuel type; unknown values are ignored
    pub fn select_fuel_type(&mut self, fuel: &str) -> bool {
        if FUEL_TYPES.contains(&fuel) {
            self.fuel_type = fuel.to_string();
            true
        } else {
            false
        }
    }

    /// Whether every required field is filled
    pub fn is_complete(&self) -> bool {
        [&self.vehicle_number, &self.vehicle_type, &self.capacity]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Submit after `delay` with `driver` assigned; `None` when incomplete
    pub async fn submit(&self, driver: Driver, delay: Duration) -> Option<Truck> {
        if !self.is_complete() {
            return None;
        }
        tokio::time::sleep(delay).await;

        let truck = Truck {
            id: next_id(),
            vehicle_number: self.vehicle_number.trim().to_uppercase(),
            location: String::new(),
            status: TruckStatus::Available,
            has_registration: !self.registration_number.trim().is_empty(),
            has_insurance: !self.insurance_number.trim().is_empty(),
            driver,
            latitude: None,
            longitude: None,
        };
        tracing::info!(truck_id = %truck.id, "truck added");
        Some(truck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_driver_form_required_fields() {
        let mut form = DriverForm::default();
        assert!(!form.is_complete());

        form.full_name = "Anil Rao".to_string();
        form.phone = "+91 90000 00000".to_string();
        assert!(!form.is_complete());

        form.license_number = "   ".to_string();
        assert!(!form.is_complete());

        form.license_number = "DL-0420110012345".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn test_blood_group_selection() {
        let mut form = DriverForm::default();
        assert!(form.select_blood_group("AB-"));
        assert!(!form.select_blood_group("C+"));
        assert_eq!(form.blood_group, "AB-");
    }

    #[test]
    fn test_truck_form_defaults_to_diesel() {
        let form = TruckForm::default();
        assert_eq!(form.fuel_type, "Diesel");
    }

    #[test]
    fn test_truck_chip_selection() {
        let mut form = TruckForm::default();
        assert!(form.select_vehicle_type("Tanker"));
        assert!(!form.select_vehicle_type("Spaceship"));
        assert!(form.select_fuel_type("CNG"));
        assert!(!form.select_fuel_type("Coal"));
        assert_eq!((form.vehicle_type.as_str(), form.fuel_type.as_str()), ("Tanker", "CNG"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_incomplete_driver_submit_is_ignored() {
        assert!(DriverForm::default().submit(Duration::from_millis(500)).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_submit_creates_available_driver() {
        let form = DriverForm {
            full_name: " Anil Rao ".to_string(),
            phone: "9000000000".to_string(),
            license_number: "DL-1".to_string(),
            ..Default::default()
        };

        let driver = form.submit(Duration::from_millis(500)).await.unwrap();
        assert_eq!(driver.name, "Anil Rao");
        assert_eq!(driver.status, DriverStatus::Available);
    }

    #[tokio::test(start_paused = true)]
    async fn test_truck_submit() {
        let mut form = TruckForm {
            vehicle_number: "ts08 ab 0001".to_string(),
            capacity: "20".to_string(),
            insurance_number: "POL-9".to_string(),
            ..Default::default()
        };
        let driver = fixtures::drivers().remove(2);
        assert!(form.submit(driver.clone(), Duration::ZERO).await.is_none());

        form.select_vehicle_type("Flatbed");
        let truck = form.submit(driver.clone(), Duration::from_millis(500)).await.unwrap();

        assert_eq!(truck.vehicle_number, "TS08 AB 0001");
        assert_eq!(truck.status, TruckStatus::Available);
        assert!(truck.has_insurance);
        assert!(!truck.has_registration);
        assert_eq!(truck.driver, driver);
    }

    #[tokio::test]
    async fn test_generated_ids_are_distinct() {
        let form = DriverForm {
            full_name: "A".to_string(),
            phone: "1".to_string(),
            license_number: "L".to_string(),
            ..Default::default()
        };
        let a = form.submit(Duration::ZERO).await.unwrap();
        let b = form.submit(Duration::ZERO).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
