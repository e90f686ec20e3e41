pub mod intent;
pub mod location;
pub mod response;
pub mod route;

pub use intent::{Preference, TravelIntent};
pub use location::{Coordinates, LocationKind, LocationSuggestion};
pub use response::ApiResponse;
pub use route::{Availability, ComfortLevel, RouteConstraints, RouteOption, Traffic, TransportMode};
