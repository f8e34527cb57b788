//! End-to-end checks over a small Rome-flavored dataset: build a snapshot,
//! resolve route directions, evaluate service calendars, fetch feed bytes.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use linemap_transit::prelude::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn bus_route(id: &str, short_name: &str, long_name: &str) -> Route {
    Route {
        id: RouteId::new(id),
        agency_id: Some("ATAC".to_string()),
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
        description: None,
        route_type: RouteType::Bus,
        url: None,
        color: Some("8B0000".to_string()),
        text_color: Some("FFFFFF".to_string()),
    }
}

fn bus_trip(id: &str, route_id: &str, direction: DirectionId, shape_id: Option<&str>) -> Trip {
    Trip {
        id: TripId::new(id),
        route_id: RouteId::new(route_id),
        service_id: ServiceId::new("WD"),
        headsign: None,
        short_name: None,
        direction,
        block_id: None,
        shape_id: shape_id.map(ShapeId::new),
        wheelchair_accessible: Availability::Available,
        bikes_allowed: Availability::Unknown,
        stop_times: Vec::new(),
    }
}

fn call(trip_id: &str, stop_id: &str, sequence: u32) -> StopTime {
    let departure = ServiceTime::new(7 * 3600 + sequence * 600);
    StopTime::new(TripId::new(trip_id), StopId::new(stop_id), departure, departure, sequence)
}

/// Route 64 with a full itinerary per direction, a short turn, a one-stop
/// stub, and a trip whose terminus is missing from the stop list.
fn rome() -> ScheduleSnapshot {
    let routes = vec![
        bus_route("64", "64", "Termini - San Pietro"),
        bus_route("8", "8", ""),
    ];
    let trips = vec![
        // Dangling terminus, loaded first so a bad skip would win ties.
        bus_trip("64-ghost", "64", DirectionId::Outbound, None),
        bus_trip("64-out-short", "64", DirectionId::Outbound, None),
        bus_trip("64-out-full", "64", DirectionId::Outbound, Some("shp-64-out")),
        bus_trip("64-stub", "64", DirectionId::Inbound, None),
        bus_trip("64-in-full", "64", DirectionId::Inbound, Some("shp-long-gone")),
        bus_trip("8-out", "8", DirectionId::Outbound, None),
    ];
    let stop_times = vec![
        call("64-ghost", "TERMINI", 1),
        call("64-ghost", "NOWHERE", 2),
        call("64-out-short", "TERMINI", 1),
        call("64-out-short", "ARGENTINA", 2),
        // Flat and out of order, as a loader would hand them over.
        call("64-out-full", "SPIETRO", 3),
        call("64-out-full", "TERMINI", 1),
        call("64-out-full", "ARGENTINA", 2),
        call("64-stub", "SPIETRO", 1),
        call("64-in-full", "SPIETRO", 1),
        call("64-in-full", "ARGENTINA", 2),
        call("64-in-full", "TERMINI", 3),
        call("8-out", "ARGENTINA", 1),
        call("8-out", "TERMINI", 2),
    ];
    let stops = vec![
        Stop::new(StopId::new("TERMINI"), "Termini", 12.49, 41.90),
        Stop::new(StopId::new("ARGENTINA"), "Largo Argentina", 12.476, 41.896),
        Stop::new(StopId::new("SPIETRO"), "San Pietro", 12.30, 41.85),
    ];
    let shapes = vec![ShapeRoute::new(
        ShapeId::new("shp-64-out"),
        vec![(12.49, 41.90), (12.476, 41.896), (12.30, 41.85)],
    )];
    let calendar = vec![
        CalendarRecord::Recurring(ServicePattern::new(
            ServiceId::new("WD"),
            ServiceDays::from_bools(true, true, true, true, true, false, false),
            date(2025, 1, 1),
            date(2025, 12, 31),
        )),
        CalendarRecord::Exception(ServiceException::new(
            ServiceId::new("WD"),
            date(2025, 1, 1),
            ExceptionType::Removed,
        )),
        CalendarRecord::Exception(ServiceException::new(
            ServiceId::new("FESTIVO"),
            date(2025, 6, 2),
            ExceptionType::Added,
        )),
    ];
    ScheduleSnapshot::from_data(routes, trips, stop_times, stops, shapes, calendar)
}

#[test]
fn route_64_surfaces_both_directions_for_the_caller() {
    let snapshot = rome();
    let resolution = snapshot
        .resolve_directions(&RouteId::new("64"))
        .expect("route 64 exists");

    let DirectionResolution::Ambiguous(both) = resolution else {
        panic!("expected both directions");
    };
    assert_eq!(both.len(), 2);

    let outbound = &both[0];
    assert_eq!(outbound.direction, DirectionId::Outbound);
    assert_eq!(outbound.trip.id, TripId::new("64-out-full"));
    assert_eq!(outbound.label, "Termini → San Pietro");

    let inbound = &both[1];
    assert_eq!(inbound.direction, DirectionId::Inbound);
    assert_eq!(inbound.trip.id, TripId::new("64-in-full"));
    assert_eq!(inbound.label, "San Pietro → Termini");

    // Same endpoints either way round, roughly 16.7 km across the city.
    assert_relative_eq!(outbound.endpoint_km, 16.685, max_relative = 2e-3);
    assert_relative_eq!(outbound.endpoint_km, inbound.endpoint_km);
    assert_ne!(outbound.display_color(), inbound.display_color());
}

#[test]
fn resolution_is_deterministic_across_calls() {
    let snapshot = rome();
    let ids = |resolution: &DirectionResolution| -> Vec<String> {
        resolution
            .candidates()
            .iter()
            .map(|candidate| candidate.trip.id.to_string())
            .collect()
    };
    let first = snapshot.resolve_directions(&RouteId::new("64")).expect("route 64 exists");
    let second = snapshot.resolve_directions(&RouteId::new("64")).expect("route 64 exists");
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn degenerate_trips_never_represent_a_direction() {
    let snapshot = rome();
    let resolution = snapshot
        .resolve_directions(&RouteId::new("64"))
        .expect("route 64 exists");
    for candidate in resolution.candidates() {
        assert_ne!(candidate.trip.id, TripId::new("64-ghost"));
        assert_ne!(candidate.trip.id, TripId::new("64-out-short"));
        assert_ne!(candidate.trip.id, TripId::new("64-stub"));
    }
}

#[test]
fn unknown_route_resolves_to_nothing() {
    let snapshot = rome();
    assert!(snapshot.resolve_directions(&RouteId::new("countryside-express")).is_none());
}

#[test]
fn weekday_calendar_with_a_holiday_exception() {
    let snapshot = rome();
    let wd = ServiceId::new("WD");

    // Monday and Saturday inside the range.
    assert!(snapshot.is_service_active(&wd, date(2025, 1, 6)));
    assert!(!snapshot.is_service_active(&wd, date(2025, 1, 4)));

    // New Year's Day falls on a Wednesday; the exception suppresses it.
    assert_eq!(snapshot.service_status(&wd, date(2025, 1, 1)), ServiceStatus::Inactive);

    // A Monday before the range opens counts for nothing.
    assert!(!snapshot.is_service_active(&wd, date(2024, 12, 30)));
}

#[test]
fn exception_only_service_runs_on_its_day_alone() {
    let snapshot = rome();
    let festivo = ServiceId::new("FESTIVO");
    assert_eq!(snapshot.service_status(&festivo, date(2025, 6, 2)), ServiceStatus::Active);
    assert_eq!(
        snapshot.service_status(&festivo, date(2025, 6, 9)),
        ServiceStatus::UnknownService
    );
    assert!(!snapshot.is_service_active(&festivo, date(2025, 6, 9)));
}

#[test]
fn dataset_date_and_flag_codecs() {
    assert_eq!(parse_date("20250101"), Some(date(2025, 1, 1)));
    assert_eq!(parse_date("invalid"), None);
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("2025-01-01"), None);

    assert!(parse_flag(" 1 "));
    assert!(!parse_flag("0"));
    assert!(!parse_flag(""));
}

#[test]
fn route_type_taxonomy_is_fixed() {
    let snapshot = rome();
    let route = snapshot.route(&RouteId::new("64")).expect("route 64 exists");
    assert_eq!(route.kind_description(), "Bus");
    assert_eq!(RouteType::from_code(999).description(), "Unknown");
}

#[test]
fn geometry_and_stop_sequences_travel_with_the_winning_trips() {
    let snapshot = rome();
    let outbound = snapshot.trip(&TripId::new("64-out-full")).expect("trip exists");

    let shape = snapshot.shape_for_trip(&outbound).expect("shape exists");
    assert_eq!(shape.point_count(), 3);

    let names: Vec<String> = snapshot
        .stops_for_trip(&outbound)
        .iter()
        .map(|stop| stop.name.clone())
        .collect();
    assert_eq!(names, ["Termini", "Largo Argentina", "San Pietro"]);

    // The inbound trip's shape id dangles, which reads as "no geometry".
    let inbound = snapshot.trip(&TripId::new("64-in-full")).expect("trip exists");
    assert!(snapshot.shape_for_trip(&inbound).is_none());
}

struct OneShotTransport {
    status: u16,
    body: &'static [u8],
}

impl FeedTransport for OneShotTransport {
    fn get(&self, _url: &str) -> Result<TransportReply, BoxError> {
        Ok(TransportReply {
            status: self.status,
            body: self.body.to_vec(),
        })
    }
}

struct UnreachableHost;

impl FeedTransport for UnreachableHost {
    fn get(&self, _url: &str) -> Result<TransportReply, BoxError> {
        Err("dns failure: feeds.example".into())
    }
}

fn feed_endpoints() -> FeedEndpoints {
    FeedEndpoints {
        trip_updates_url: "https://feeds.example/tu".to_string(),
        vehicle_positions_url: "https://feeds.example/vp".to_string(),
    }
}

#[test]
fn feed_bytes_pass_through_untouched_on_200() {
    let transport = OneShotTransport {
        status: 200,
        body: b"\x0a\x04live",
    };
    let fetcher = FeedFetcher::new(feed_endpoints(), transport);
    assert_eq!(fetcher.fetch_trip_updates().unwrap(), b"\x0a\x04live");
}

#[test]
fn non_200_and_transport_failures_are_typed_separately() {
    let fetcher = FeedFetcher::new(feed_endpoints(), OneShotTransport { status: 503, body: b"" });
    match fetcher.fetch_vehicle_positions() {
        Err(FeedError::HttpStatus { code: 503 }) => {}
        other => panic!("expected a 503 status error, got {other:?}"),
    }

    let fetcher = FeedFetcher::new(feed_endpoints(), UnreachableHost);
    match fetcher.fetch_vehicle_positions() {
        Err(FeedError::Transport { source }) => {
            assert!(source.to_string().contains("dns failure"));
        }
        other => panic!("expected a transport error, got {other:?}"),
    }
}
