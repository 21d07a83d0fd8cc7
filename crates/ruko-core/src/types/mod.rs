//! Shared domain types.

pub mod ride;

pub use ride::{DriverProfile, PassengerProfile, Ride, RideStatus, UserSummary};
