//! The trip entity: one vehicle run along a route.

use crate::identifiers::{RouteId, ServiceId, ShapeId, TripId};
use crate::models::types::{Availability, DirectionId, StopTime};

/// Pure data holder for one trip. Exclusively owns its stop-time sequence.
///
/// Fields stay public so the loader can apply post-load corrections (for
/// example assigning a `shape_id`) before the snapshot is built; once shared
/// through a snapshot the trip is read-only.
#[derive(Clone, Debug)]
pub struct Trip {
    pub id: TripId,
    pub route_id: RouteId,
    pub service_id: ServiceId,
    pub headsign: Option<String>,
    pub short_name: Option<String>,
    pub direction: DirectionId,
    pub block_id: Option<String>,
    /// `None` or a dangling id both mean "no geometry available".
    pub shape_id: Option<ShapeId>,
    pub wheelchair_accessible: Availability,
    pub bikes_allowed: Availability,
    /// As delivered by the loader; ordering is NOT guaranteed here, use
    /// [`Trip::ordered_stop_times`].
    pub stop_times: Vec<StopTime>,
}

impl Trip {
    /// The stop-time sequence sorted by `stop_sequence` ascending, re-derived
    /// on every call from the owned collection.
    pub fn ordered_stop_times(&self) -> Vec<&StopTime> {
        let mut ordered: Vec<&StopTime> = self.stop_times.iter().collect();
        ordered.sort_by_key(|stop_time| stop_time.stop_sequence);
        ordered
    }

    /// First and last scheduled calls in sequence order, or `None` for trips
    /// too short to have distinct endpoints.
    pub fn endpoints(&self) -> Option<(&StopTime, &StopTime)> {
        if self.stop_times.len() < 2 {
            return None;
        }
        let ordered = self.ordered_stop_times();
        Some((ordered[0], ordered[ordered.len() - 1]))
    }

    /// Rider-facing description: headsign, else short name, else the id.
    pub fn describe(&self) -> String {
        self.headsign
            .clone()
            .or_else(|| self.short_name.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}
