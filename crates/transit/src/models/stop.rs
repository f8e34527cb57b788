//! Stops and shape polylines: the geographic side of the dataset.

use geo::{LineString, Point};

use crate::identifiers::{ShapeId, StopId};

/// A boarding location. Referenced by stop times, never owned by them.
///
/// `location` follows the geo convention: x is longitude, y is latitude.
#[derive(Clone, Debug)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub location: Point,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            location: Point::new(longitude, latitude),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }
}

/// The polyline geometry a trip follows, independent of its stop sequence.
#[derive(Clone, Debug)]
pub struct ShapeRoute {
    pub id: ShapeId,
    pub polyline: LineString,
}

impl ShapeRoute {
    pub fn new(id: ShapeId, points: Vec<(f64, f64)>) -> Self {
        Self {
            id,
            polyline: LineString::from(points),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.polyline.points()
    }

    pub fn point_count(&self) -> usize {
        self.polyline.0.len()
    }
}
