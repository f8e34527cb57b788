//! Service-day calendar: recurring weekly patterns plus punctual exception
//! overrides, and the evaluator deciding whether a service runs on a date.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::identifiers::ServiceId;

/// Which weekdays a recurring service operates, packed as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ServiceDays(u8);

const DAY_LABELS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Mon"),
    (Weekday::Tue, "Tue"),
    (Weekday::Wed, "Wed"),
    (Weekday::Thu, "Thu"),
    (Weekday::Fri, "Fri"),
    (Weekday::Sat, "Sat"),
    (Weekday::Sun, "Sun"),
];

impl ServiceDays {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn every_day() -> Self {
        Self(0b0111_1111)
    }

    pub fn from_bools(
        monday: bool,
        tuesday: bool,
        wednesday: bool,
        thursday: bool,
        friday: bool,
        saturday: bool,
        sunday: bool,
    ) -> Self {
        let mut days = Self::none();
        for (weekday, flag) in [
            (Weekday::Mon, monday),
            (Weekday::Tue, tuesday),
            (Weekday::Wed, wednesday),
            (Weekday::Thu, thursday),
            (Weekday::Fri, friday),
            (Weekday::Sat, saturday),
            (Weekday::Sun, sunday),
        ] {
            if flag {
                days.set(weekday);
            }
        }
        days
    }

    pub fn set(&mut self, weekday: Weekday) {
        self.0 |= 1 << weekday.num_days_from_monday();
    }

    pub fn unset(&mut self, weekday: Weekday) {
        self.0 &= !(1 << weekday.num_days_from_monday());
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_monday()) != 0
    }

    fn weekday_count(&self) -> u32 {
        (self.0 & 0b0001_1111).count_ones()
    }

    fn weekend_count(&self) -> u32 {
        (self.0 & 0b0110_0000).count_ones()
    }

    /// Classifies the pattern for display: `"all days"`, `"weekdays only"`,
    /// `"weekend only"`, or the list of active day abbreviations.
    pub fn describe(&self) -> String {
        match (self.weekday_count(), self.weekend_count()) {
            (5, 2) => "all days".to_string(),
            (5, 0) => "weekdays only".to_string(),
            (0, n) if n > 0 => "weekend only".to_string(),
            (0, 0) => "no days".to_string(),
            _ => {
                let active: Vec<&str> = DAY_LABELS
                    .iter()
                    .filter(|(weekday, _)| self.contains(*weekday))
                    .map(|(_, label)| *label)
                    .collect();
                active.join(" ")
            }
        }
    }
}

/// Whether a punctual exception switches its service on or off for one date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExceptionType {
    /// The service runs on that date (code 1).
    Added,
    /// The service is suppressed on that date (code 2).
    Removed,
}

impl ExceptionType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Added),
            2 => Some(Self::Removed),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Added => 1,
            Self::Removed => 2,
        }
    }
}

/// Punctual override for a single (service, date) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceException {
    pub service_id: ServiceId,
    pub date: NaiveDate,
    pub exception: ExceptionType,
}

impl ServiceException {
    pub fn new(service_id: ServiceId, date: NaiveDate, exception: ExceptionType) -> Self {
        Self {
            service_id,
            date,
            exception,
        }
    }

    fn applies_to(&self, service_id: &ServiceId, date: NaiveDate) -> bool {
        self.date == date && &self.service_id == service_id
    }
}

/// Recurring weekly pattern bounded by an inclusive date range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServicePattern {
    pub service_id: ServiceId,
    pub days: ServiceDays,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ServicePattern {
    pub fn new(
        service_id: ServiceId,
        days: ServiceDays,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            service_id,
            days,
            start_date,
            end_date,
        }
    }

    /// Decides whether this service runs on `date`.
    ///
    /// The first exception matching (service, date) wins outright, overriding
    /// both the date range and the weekly flags. Otherwise dates outside
    /// `[start_date, end_date]` are inactive, and the weekday flag decides
    /// within the range.
    pub fn is_active_on(&self, date: NaiveDate, exceptions: &[ServiceException]) -> bool {
        if let Some(exception) = exceptions
            .iter()
            .find(|e| e.applies_to(&self.service_id, date))
        {
            return exception.exception == ExceptionType::Added;
        }
        self.runs_on(date)
    }

    /// The range and weekday check alone, ignoring exceptions.
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        if date < self.start_date || date > self.end_date {
            return false;
        }
        self.days.contains(date.weekday())
    }

    pub fn describe_days(&self) -> String {
        self.days.describe()
    }
}

/// One calendar record: exactly one of the two shapes, never both.
///
/// Equality is variant-aware. Both variants draw ids from one namespace, so
/// `service_id()` alone deliberately treats "any record of this service" as a
/// single bucket; compare whole records when the variant matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarRecord {
    Recurring(ServicePattern),
    Exception(ServiceException),
}

impl CalendarRecord {
    pub fn service_id(&self) -> &ServiceId {
        match self {
            Self::Recurring(pattern) => &pattern.service_id,
            Self::Exception(exception) => &exception.service_id,
        }
    }
}

/// Outcome of a snapshot-level validity query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Active,
    Inactive,
    /// Neither a recurring pattern nor an exception for the queried date is
    /// known for this service id.
    UnknownService,
}

impl ServiceStatus {
    /// Collapses the tri-state to a flag; unknown services do not run.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}
