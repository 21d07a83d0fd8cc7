//! Ride domain types as serialized by the backend.
//!
//! Field names and nesting match the backend's ride serializer exactly: a
//! ride embeds full passenger and driver profiles, which in turn embed a
//! user summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RideStatus {
    /// Requested by a passenger, no driver yet.
    Requested,
    /// Matched to a driver.
    Assigned,
    /// Accepted by the driver.
    Accepted,
    /// Driver heading to pickup.
    OnTheWay,
    /// Passenger on board.
    InProgress,
    /// Ride finished.
    Completed,
    /// Cancelled by either side.
    Cancelled,
    /// Status value this client does not know (older or newer backend).
    #[serde(other)]
    Unknown,
}

impl RideStatus {
    /// Whether the ride is still active from the driver's perspective.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::Assigned | Self::Accepted | Self::OnTheWay | Self::InProgress
        )
    }
}

/// Minimal user representation nested inside profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Whether the user is registered as a driver.
    pub is_driver: bool,
    /// Whether the user is registered as a passenger.
    pub is_passenger: bool,
}

/// Driver profile with live location and availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverProfile {
    /// Profile ID.
    pub id: i64,
    /// Owning user.
    pub user: UserSummary,
    /// Car model.
    pub car_model: String,
    /// License plate.
    pub car_plate: String,
    /// Last reported latitude.
    pub latitude: Option<f64>,
    /// Last reported longitude.
    pub longitude: Option<f64>,
    /// Whether the driver currently accepts rides.
    pub is_available: bool,
}

/// Passenger profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerProfile {
    /// Profile ID.
    pub id: i64,
    /// Owning user.
    pub user: UserSummary,
    /// Contact phone number.
    pub phone_number: String,
}

/// A ride as serialized by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    /// Ride ID.
    pub id: i64,
    /// Requesting passenger.
    pub passenger: PassengerProfile,
    /// Assigned driver, if any.
    pub driver: Option<DriverProfile>,
    /// Pickup address.
    pub pickup_location: String,
    /// Pickup latitude.
    pub pickup_lat: Option<f64>,
    /// Pickup longitude.
    pub pickup_lng: Option<f64>,
    /// Dropoff address.
    pub dropoff_location: String,
    /// Dropoff latitude.
    pub dropoff_lat: Option<f64>,
    /// Dropoff longitude.
    pub dropoff_lng: Option<f64>,
    /// Current lifecycle status.
    pub status: RideStatus,
    /// When the ride was requested.
    pub requested_at: DateTime<Utc>,
    /// When the ride completed, if it did.
    pub completed_at: Option<DateTime<Utc>>,
    /// Fare amount; the backend serializes decimals as strings.
    pub fare: Option<String>,
}
