//! Picks the representative trip for each travel direction of a route.
//!
//! A route usually carries dozens of trips per direction, many of them short
//! turns or late-night partials. The heuristic here keeps, per direction, the
//! trip whose first and last scheduled stops lie farthest apart on the globe:
//! the longest end-to-end itinerary stands in for the whole direction. When
//! both directions survive, the caller gets both and decides which to show.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::identifiers::StopId;
use crate::models::{DirectionId, Route, Stop, Trip};
use crate::spatial::haversine_km;

/// A trip chosen to stand in for one travel direction of a route.
#[derive(Clone, Debug)]
pub struct DirectionCandidate {
    pub direction: DirectionId,
    /// Rider-facing label, `"<first stop> → <last stop>"` when both endpoint
    /// stops resolve, otherwise `"Direction <code>"`.
    pub label: String,
    /// Great-circle distance between the trip's endpoint stops, kilometers.
    pub endpoint_km: f64,
    pub trip: Arc<Trip>,
}

impl DirectionCandidate {
    /// Conventional rendering color for this candidate's orientation.
    pub fn display_color(&self) -> &'static str {
        self.direction.display_color()
    }
}

/// Outcome of resolving a route into representative directional trips.
///
/// None of these are faults. The empty outcomes tell the caller to show an
/// empty-result message; [`Ambiguous`](Self::Ambiguous) asks the caller to
/// let the rider pick a direction.
#[derive(Clone, Debug)]
pub enum DirectionResolution {
    /// No trip in the snapshot belongs to the route.
    NoTripsFound,
    /// Trips exist but none could anchor a direction (too few stop calls, or
    /// endpoint stops missing from the dataset).
    NoDirectionsFound,
    /// Exactly one direction is represented.
    Single(DirectionCandidate),
    /// Both directions are represented, outbound first.
    Ambiguous(Vec<DirectionCandidate>),
}

impl DirectionResolution {
    /// All surviving candidates in display order (outbound before inbound).
    pub fn candidates(&self) -> &[DirectionCandidate] {
        match self {
            Self::NoTripsFound | Self::NoDirectionsFound => &[],
            Self::Single(only) => std::slice::from_ref(only),
            Self::Ambiguous(both) => both,
        }
    }
}

/// Resolves the representative trip(s) for `route`.
///
/// Trips whose endpoints cannot be resolved are skipped, not reported: a trip
/// with fewer than two stop calls has no endpoints, and a dangling stop id
/// means the dataset is incomplete for that trip. Ties on endpoint distance
/// keep the earliest trip in `trips` order, so repeated calls over the same
/// snapshot return the same candidates.
pub fn resolve_directions(
    route: &Route,
    trips: &[Arc<Trip>],
    stops: &HashMap<StopId, Arc<Stop>>,
) -> DirectionResolution {
    let mut saw_trip = false;
    let mut best_outbound: Option<(Arc<Trip>, f64)> = None;
    let mut best_inbound: Option<(Arc<Trip>, f64)> = None;

    for trip in trips.iter().filter(|trip| trip.route_id == route.id) {
        saw_trip = true;
        let Some((first, last)) = trip.endpoints() else {
            continue;
        };
        let (Some(origin), Some(terminus)) = (stops.get(&first.stop_id), stops.get(&last.stop_id))
        else {
            debug!(trip = %trip.id, "endpoint stop missing, trip not considered");
            continue;
        };
        let span_km = haversine_km(origin.location, terminus.location);

        let slot = match trip.direction {
            DirectionId::Outbound => &mut best_outbound,
            DirectionId::Inbound => &mut best_inbound,
        };
        if slot.as_ref().map_or(true, |(_, incumbent)| span_km > *incumbent) {
            *slot = Some((Arc::clone(trip), span_km));
        }
    }

    if !saw_trip {
        return DirectionResolution::NoTripsFound;
    }

    let outbound = best_outbound.map(|(trip, km)| candidate(trip, km, stops));
    let inbound = best_inbound.map(|(trip, km)| candidate(trip, km, stops));
    match (outbound, inbound) {
        (None, None) => DirectionResolution::NoDirectionsFound,
        (Some(only), None) | (None, Some(only)) => DirectionResolution::Single(only),
        (Some(out), Some(inb)) => DirectionResolution::Ambiguous(vec![out, inb]),
    }
}

fn candidate(
    trip: Arc<Trip>,
    endpoint_km: f64,
    stops: &HashMap<StopId, Arc<Stop>>,
) -> DirectionCandidate {
    // Labels come from a fresh sequence sort rather than the endpoints used
    // during scoring, so a label always reflects the trip as stored.
    let ordered = trip.ordered_stop_times();
    let label = ordered
        .first()
        .zip(ordered.last())
        .and_then(|(first, last)| {
            let origin = stops.get(&first.stop_id)?;
            let terminus = stops.get(&last.stop_id)?;
            Some(format!("{} → {}", origin.name, terminus.name))
        })
        .unwrap_or_else(|| format!("Direction {}", trip.direction.code()));

    DirectionCandidate {
        direction: trip.direction,
        label,
        endpoint_km,
        trip,
    }
}
