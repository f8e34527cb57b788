//! # linemap-transit
//!
//! Schedule core for drawing transit lines: direction resolution, service
//! calendars, and a real-time feed boundary.
//!
//! ## Features
//!
//! - **Immutable snapshots**: loader output becomes a thread-safe, query-ready view
//! - **Direction resolution**: the longest end-to-end trip stands in for each direction
//! - **Service calendars**: weekly patterns with punctual exception overrides
//! - **Soft-fail lookups**: missing data is an empty result, never a fault
//! - **Pluggable real-time transport**: script the HTTP exchanges in tests
//!
//! ## Example
//!
//! ```
//! use linemap_transit::prelude::*;
//!
//! let route = Route {
//!     id: RouteId::new("64"),
//!     agency_id: None,
//!     short_name: "64".into(),
//!     long_name: "Termini - San Pietro".into(),
//!     description: None,
//!     route_type: RouteType::Bus,
//!     url: None,
//!     color: None,
//!     text_color: None,
//! };
//!
//! let trip_id = TripId::new("64-morning");
//! let trip = Trip {
//!     id: trip_id.clone(),
//!     route_id: route.id.clone(),
//!     service_id: ServiceId::new("weekday"),
//!     headsign: Some("San Pietro".into()),
//!     short_name: None,
//!     direction: DirectionId::Outbound,
//!     block_id: None,
//!     shape_id: None,
//!     wheelchair_accessible: Availability::Unknown,
//!     bikes_allowed: Availability::Unknown,
//!     stop_times: Vec::new(),
//! };
//!
//! // Stop times arrive flat, the snapshot attaches them to their trips.
//! let stop_times = vec![
//!     StopTime::new(
//!         trip_id.clone(),
//!         StopId::new("TERMINI"),
//!         ServiceTime::new(8 * 3600),
//!         ServiceTime::new(8 * 3600),
//!         1,
//!     ),
//!     StopTime::new(
//!         trip_id.clone(),
//!         StopId::new("SPIETRO"),
//!         ServiceTime::new(9 * 3600),
//!         ServiceTime::new(9 * 3600),
//!         2,
//!     ),
//! ];
//! let stops = vec![
//!     Stop::new(StopId::new("TERMINI"), "Termini", 12.49, 41.90),
//!     Stop::new(StopId::new("SPIETRO"), "San Pietro", 12.30, 41.85),
//! ];
//!
//! let snapshot =
//!     ScheduleSnapshot::from_data(vec![route], vec![trip], stop_times, stops, vec![], vec![]);
//!
//! match snapshot.resolve_directions(&RouteId::new("64")) {
//!     Some(DirectionResolution::Single(candidate)) => {
//!         assert_eq!(candidate.label, "Termini → San Pietro");
//!         assert!(candidate.endpoint_km > 16.0);
//!     }
//!     other => panic!("unexpected resolution: {other:?}"),
//! }
//! ```

pub mod codec;
pub mod directions;
pub mod identifiers;
pub mod models;
pub mod realtime;
pub mod snapshot;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{parse_date, parse_flag};
    pub use crate::directions::{resolve_directions, DirectionCandidate, DirectionResolution};
    pub use crate::identifiers::*;
    pub use crate::models::*;
    pub use crate::realtime::{
        BoxError, FeedEndpoints, FeedError, FeedFetcher, FeedTransport, HttpTransport,
        TransportReply,
    };
    pub use crate::snapshot::ScheduleSnapshot;
    pub use crate::spatial::{haversine_km, EARTH_RADIUS_KM};
}

pub use prelude::*;
