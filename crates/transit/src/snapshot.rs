//! Immutable, query-ready view of one loaded schedule dataset.
//!
//! An external loader parses the raw dataset and hands the materialized
//! collections to [`ScheduleSnapshot::from_data`] once. After that the
//! snapshot never changes: any number of threads may query it concurrently,
//! and a live reload means building a fresh snapshot and swapping the handle,
//! never mutating entities in place.
//!
//! Lookups fail soft. A missing route, trip, stop, or shape is an `Option`
//! `None` for the caller to handle, not an error; the dataset decides what
//! exists.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::directions::{resolve_directions, DirectionResolution};
use crate::identifiers::{RouteId, ServiceId, ShapeId, StopId, TripId};
use crate::models::{
    CalendarRecord, ExceptionType, Route, ServiceException, ServicePattern, ServiceStatus,
    ShapeRoute, Stop, StopTime, Trip,
};

pub struct ScheduleSnapshot {
    routes: Vec<Arc<Route>>,
    trips: Vec<Arc<Trip>>,
    routes_by_id: HashMap<RouteId, Arc<Route>>,
    trips_by_id: HashMap<TripId, Arc<Trip>>,
    stops_by_id: HashMap<StopId, Arc<Stop>>,
    shapes_by_id: HashMap<ShapeId, Arc<ShapeRoute>>,
    patterns: HashMap<ServiceId, ServicePattern>,
    /// Kept in dataset order; the first match for a (service, date) pair wins.
    exceptions: Vec<ServiceException>,
}

impl ScheduleSnapshot {
    /// Builds the snapshot from loader output.
    ///
    /// Stop times arrive as one flat collection and are attached to their
    /// trips here; stop times naming an unknown trip are dropped with a
    /// warning. Dangling route and stop references are kept and warned about
    /// once at build time; lookups against them stay soft. Trips and routes
    /// keep their dataset order, which makes every later query over the
    /// snapshot deterministic.
    pub fn from_data(
        routes: Vec<Route>,
        trips: Vec<Trip>,
        stop_times: Vec<StopTime>,
        stops: Vec<Stop>,
        shapes: Vec<ShapeRoute>,
        calendar: Vec<CalendarRecord>,
    ) -> Self {
        let mut by_trip: HashMap<TripId, Vec<StopTime>> = HashMap::new();
        for stop_time in stop_times {
            by_trip
                .entry(stop_time.trip_id.clone())
                .or_default()
                .push(stop_time);
        }

        let mut trip_list = Vec::with_capacity(trips.len());
        let mut trips_by_id = HashMap::with_capacity(trips.len());
        for mut trip in trips {
            if let Some(mut calls) = by_trip.remove(&trip.id) {
                trip.stop_times.append(&mut calls);
            }
            let trip = Arc::new(trip);
            trips_by_id.insert(trip.id.clone(), Arc::clone(&trip));
            trip_list.push(trip);
        }
        for (trip_id, orphaned) in by_trip {
            warn!(
                trip = %trip_id,
                count = orphaned.len(),
                "dropping stop times that reference an unknown trip"
            );
        }

        let mut route_list = Vec::with_capacity(routes.len());
        let mut routes_by_id = HashMap::with_capacity(routes.len());
        for route in routes {
            let route = Arc::new(route);
            routes_by_id.insert(route.id.clone(), Arc::clone(&route));
            route_list.push(route);
        }

        let stops_by_id: HashMap<_, _> = stops
            .into_iter()
            .map(|stop| (stop.id.clone(), Arc::new(stop)))
            .collect();
        let shapes_by_id: HashMap<_, _> = shapes
            .into_iter()
            .map(|shape| (shape.id.clone(), Arc::new(shape)))
            .collect();

        for trip in &trip_list {
            if !routes_by_id.contains_key(&trip.route_id) {
                warn!(trip = %trip.id, route = %trip.route_id, "trip references an unknown route");
            }
            for stop_time in &trip.stop_times {
                if !stops_by_id.contains_key(&stop_time.stop_id) {
                    warn!(
                        trip = %trip.id,
                        stop = %stop_time.stop_id,
                        "stop time references an unknown stop"
                    );
                }
            }
        }

        let mut patterns = HashMap::new();
        let mut exceptions = Vec::new();
        for record in calendar {
            match record {
                CalendarRecord::Recurring(pattern) => {
                    match patterns.entry(pattern.service_id.clone()) {
                        Entry::Vacant(slot) => {
                            slot.insert(pattern);
                        }
                        Entry::Occupied(_) => {
                            warn!(
                                service = %pattern.service_id,
                                "duplicate recurring calendar record ignored"
                            );
                        }
                    }
                }
                CalendarRecord::Exception(exception) => exceptions.push(exception),
            }
        }

        debug!(
            routes = route_list.len(),
            trips = trip_list.len(),
            stops = stops_by_id.len(),
            services = patterns.len(),
            "schedule snapshot built"
        );

        Self {
            routes: route_list,
            trips: trip_list,
            routes_by_id,
            trips_by_id,
            stops_by_id,
            shapes_by_id,
            patterns,
            exceptions,
        }
    }

    /// All routes in dataset order.
    pub fn routes(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.routes.iter()
    }

    /// All trips in dataset order.
    pub fn trips(&self) -> impl Iterator<Item = &Arc<Trip>> {
        self.trips.iter()
    }

    pub fn route(&self, id: &RouteId) -> Option<Arc<Route>> {
        self.routes_by_id.get(id).cloned()
    }

    pub fn trip(&self, id: &TripId) -> Option<Arc<Trip>> {
        self.trips_by_id.get(id).cloned()
    }

    pub fn stop(&self, id: &StopId) -> Option<Arc<Stop>> {
        self.stops_by_id.get(id).cloned()
    }

    pub fn shape(&self, id: &ShapeId) -> Option<Arc<ShapeRoute>> {
        self.shapes_by_id.get(id).cloned()
    }

    pub fn service_pattern(&self, id: &ServiceId) -> Option<&ServicePattern> {
        self.patterns.get(id)
    }

    /// Whether `service_id` runs on `date`.
    ///
    /// The first matching exception in dataset order wins outright, even for
    /// services that have no recurring pattern at all. Without an exception
    /// the recurring pattern decides, and a service the dataset never
    /// mentions comes back as [`ServiceStatus::UnknownService`] rather than
    /// a bare "inactive".
    pub fn service_status(&self, service_id: &ServiceId, date: NaiveDate) -> ServiceStatus {
        let exception = self
            .exceptions
            .iter()
            .find(|exception| &exception.service_id == service_id && exception.date == date);
        if let Some(exception) = exception {
            return match exception.exception {
                ExceptionType::Added => ServiceStatus::Active,
                ExceptionType::Removed => ServiceStatus::Inactive,
            };
        }
        match self.patterns.get(service_id) {
            Some(pattern) if pattern.runs_on(date) => ServiceStatus::Active,
            Some(_) => ServiceStatus::Inactive,
            None => ServiceStatus::UnknownService,
        }
    }

    /// [`service_status`](Self::service_status) collapsed to a boolean; an
    /// unknown service counts as not running.
    pub fn is_service_active(&self, service_id: &ServiceId, date: NaiveDate) -> bool {
        self.service_status(service_id, date).is_active()
    }

    /// Resolves the representative directional trip(s) for a route, or `None`
    /// when the route id itself is unknown.
    pub fn resolve_directions(&self, route_id: &RouteId) -> Option<DirectionResolution> {
        let route = self.routes_by_id.get(route_id)?;
        Some(resolve_directions(route, &self.trips, &self.stops_by_id))
    }

    /// The polyline for a trip's path. `None` covers both a trip without a
    /// shape id and a shape id the dataset does not contain.
    pub fn shape_for_trip(&self, trip: &Trip) -> Option<Arc<ShapeRoute>> {
        trip.shape_id.as_ref().and_then(|id| self.shape(id))
    }

    /// The stops a trip calls at, in sequence order. Calls whose stop is
    /// missing from the dataset are omitted.
    pub fn stops_for_trip(&self, trip: &Trip) -> Vec<Arc<Stop>> {
        trip.ordered_stop_times()
            .into_iter()
            .filter_map(|stop_time| self.stops_by_id.get(&stop_time.stop_id).cloned())
            .collect()
    }
}
