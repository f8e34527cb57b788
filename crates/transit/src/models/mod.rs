//! Schedule entities, calendar types, and shared value types.

pub mod calendar;
pub mod route;
pub mod stop;
pub mod trip;
pub mod types;

// Re-exports for convenience
pub use calendar::{
    CalendarRecord, ExceptionType, ServiceDays, ServiceException, ServicePattern, ServiceStatus,
};
pub use route::Route;
pub use stop::{ShapeRoute, Stop};
pub use trip::Trip;
pub use types::{Availability, DirectionId, RouteType, ServiceTime, StopTime};
