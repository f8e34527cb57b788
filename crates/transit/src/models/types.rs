//! Core value types shared across the schedule entities.

use std::fmt;

use crate::identifiers::{StopId, TripId};

/// Mode of transportation for a route, from the standard integer taxonomy.
///
/// Codes outside the taxonomy are preserved in [`RouteType::Unknown`] rather
/// than rejected; the dataset decides what vehicles exist, not this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteType {
    Tram,
    Metro,
    Rail,
    Bus,
    Ferry,
    CableTram,
    AerialLift,
    Funicular,
    Unknown(i64),
}

impl RouteType {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Tram,
            1 => Self::Metro,
            2 => Self::Rail,
            3 => Self::Bus,
            4 => Self::Ferry,
            5 => Self::CableTram,
            6 => Self::AerialLift,
            7 => Self::Funicular,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Tram => 0,
            Self::Metro => 1,
            Self::Rail => 2,
            Self::Bus => 3,
            Self::Ferry => 4,
            Self::CableTram => 5,
            Self::AerialLift => 6,
            Self::Funicular => 7,
            Self::Unknown(other) => *other,
        }
    }

    /// Human-readable name of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Tram => "Tram",
            Self::Metro => "Metro",
            Self::Rail => "Rail",
            Self::Bus => "Bus",
            Self::Ferry => "Ferry",
            Self::CableTram => "CableTram",
            Self::AerialLift => "AerialLift",
            Self::Funicular => "Funicular",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Travel orientation of a trip (0 = outbound, 1 = inbound).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DirectionId {
    Outbound = 0,
    Inbound = 1,
}

impl DirectionId {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Outbound),
            1 => Some(Self::Inbound),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Conventional rendering color for this orientation. A display
    /// convention shared with the drawing layer, not a domain rule.
    pub fn display_color(&self) -> &'static str {
        match self {
            Self::Outbound => "#E53935",
            Self::Inbound => "#1E88E5",
        }
    }
}

/// Tri-state accessibility flag used for wheelchair boarding and bikes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Availability {
    /// No information in the dataset (code 0).
    #[default]
    Unknown,
    /// At least one rider can be accommodated (code 1).
    Available,
    /// Not possible on this trip (code 2).
    NotAvailable,
}

impl Availability {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Available,
            2 => Self::NotAvailable,
            _ => Self::Unknown,
        }
    }
}

/// A time of day on the service clock, in seconds since midnight.
///
/// Values past 24:00:00 are legal and mark post-midnight service attached to
/// the previous day (for example `25:04:00` is 1:04 the next morning).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceTime(u32);

impl ServiceTime {
    pub fn new(seconds_since_midnight: u32) -> Self {
        Self(seconds_since_midnight)
    }

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self(hours * 3600 + minutes * 60 + seconds)
    }

    /// Parses `H:MM:SS` / `HH:MM:SS`, hours unbounded. Malformed input yields
    /// `None`; the caller logs and moves on.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().splitn(3, ':');
        let hours: u32 = parts.next()?.parse().ok()?;
        let minutes = two_digit_field(parts.next()?)?;
        let seconds = two_digit_field(parts.next()?)?;
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        let total = hours.checked_mul(3600)?.checked_add(minutes * 60 + seconds)?;
        Some(Self(total))
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// True when the time spills past the nominal end of the service day.
    pub fn is_past_midnight(&self) -> bool {
        self.0 >= 24 * 3600
    }
}

fn two_digit_field(raw: &str) -> Option<u32> {
    if raw.len() != 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// A single scheduled call at a stop, owned by exactly one trip.
///
/// Identity within the dataset is the pair (trip, stop sequence); sequence
/// values order the calls along the trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopTime {
    pub trip_id: TripId,
    pub stop_id: StopId,
    pub arrival: ServiceTime,
    pub departure: ServiceTime,
    pub stop_sequence: u32,
}

impl StopTime {
    pub fn new(
        trip_id: TripId,
        stop_id: StopId,
        arrival: ServiceTime,
        departure: ServiceTime,
        stop_sequence: u32,
    ) -> Self {
        Self {
            trip_id,
            stop_id,
            arrival,
            departure,
            stop_sequence,
        }
    }
}
