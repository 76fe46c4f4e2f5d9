pub mod ride;

pub use ride::{PaymentAttachment, Ride, RideStatus, VehicleType};
