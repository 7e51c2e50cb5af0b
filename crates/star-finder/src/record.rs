//! A named body in the catalog and the parser for catalog lines.

use core::fmt;

/// A point in 3D space, as `[x, y, z]`.
pub type Point = [f64; 3];

/// A named body with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The name of the body, as it appears in the catalog.
    id: String,
    /// The position of the body.
    position: Point,
}

impl Record {
    /// Creates a new `Record`.
    #[must_use]
    pub fn new<S: Into<String>>(id: S, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }

    /// Parses a single catalog line of the form `<id>,<x>,<y>,<z>`.
    ///
    /// Returns `None` if the line does not split into exactly four fields or
    /// if any coordinate is not a finite decimal number. Whitespace around a
    /// coordinate is ignored; the id is kept verbatim.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let id = fields.next()?;
        let x = parse_coordinate(fields.next()?)?;
        let y = parse_coordinate(fields.next()?)?;
        let z = parse_coordinate(fields.next()?)?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(id, [x, y, z]))
    }

    /// The name of the body.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The position of the body.
    #[must_use]
    pub const fn position(&self) -> &Point {
        &self.position
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.position[0]
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.position[1]
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.position[2]
    }

    /// Squared Euclidean distance from the body to `query`.
    #[must_use]
    pub fn squared_distance_to(&self, query: &Point) -> f64 {
        distances::vectors::euclidean_sq::<f64, f64>(&self.position, query)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position;
        write!(f, "{}: ({x}, {y}, {z})", self.id)
    }
}

/// Parses a coordinate field, rejecting anything that is not finite.
fn parse_coordinate(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
