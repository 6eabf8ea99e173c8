//! Scene model: triangles paired with their fill colors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::parse_fill;
use crate::error::{TriSvgError, TriSvgResult};
use crate::extract::PathRecord;
use crate::path_data::parse_path_data;

// ==================== Primitives ====================

/// A point in SVG user space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Three vertices of a filled triangle, without the closing point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    /// Build a triangle from parsed path points.
    ///
    /// `raw` is the source `d` string, quoted in the error on a vertex count mismatch.
    pub fn from_points(points: &[Point], raw: &str) -> TriSvgResult<Self> {
        match points {
            [a, b, c] => Ok(Self([*a, *b, *c])),
            _ => Err(TriSvgError::malformed_path(
                raw,
                format!("expected 3 vertices, found {}", points.len()),
            )),
        }
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.0
    }

    /// Apply `f` to every vertex.
    pub fn map(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        let [a, b, c] = self.0;
        Self([f(a), f(b), f(c)])
    }
}

/// An RGB fill color.
///
/// Channels are kept as parsed; no range check is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl Color {
    pub const fn from_rgb(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [i64; 3] {
        [self.r, self.g, self.b]
    }
}

// ==================== Scene ====================

/// One triangle and the color it is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub triangle: Triangle,
    pub color: Color,
}

/// Largest x and y over every vertex of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Seed of the bounds reduction. Maxima never drop below zero.
    pub const ORIGIN: Bounds = Bounds { max_x: 0.0, max_y: 0.0 };

    pub fn include(self, p: Point) -> Self {
        Self {
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Midpoint of the `(0, 0)`..`(max_x, max_y)` box.
    pub fn half_extent(&self) -> Point {
        Point::new(self.max_x / 2.0, self.max_y / 2.0)
    }

    /// True when either maximum stayed at the zero seed.
    pub fn is_degenerate(&self) -> bool {
        self.max_x <= 0.0 || self.max_y <= 0.0
    }
}

/// All triangles of an image, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Parse geometry and color for every extracted record.
    ///
    /// Fails on the first record that lacks a fill or whose data does not parse,
    /// so triangles and colors can never drift out of step.
    pub fn from_records(records: &[PathRecord]) -> TriSvgResult<Self> {
        let shapes = records
            .iter()
            .map(Shape::from_record)
            .collect::<TriSvgResult<Vec<_>>>()?;
        debug!(triangles = shapes.len(), "scene built");
        Ok(Self { shapes })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.shapes.iter().map(|s| &s.triangle)
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.shapes.iter().map(|s| s.color)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.triangles().flat_map(|t| t.0)
    }

    /// Fold every vertex into a [`Bounds`], starting from [`Bounds::ORIGIN`].
    pub fn bounds(&self) -> Bounds {
        self.points().fold(Bounds::ORIGIN, Bounds::include)
    }
}

impl Shape {
    fn from_record(record: &PathRecord) -> TriSvgResult<Self> {
        let fill = record.fill.as_deref().ok_or(TriSvgError::MissingAttribute {
            index: record.index,
            attribute: "fill",
        })?;

        let points = parse_path_data(&record.d).map_err(|e| e.at_path(record.index))?;
        let triangle =
            Triangle::from_points(&points, &record.d).map_err(|e| e.at_path(record.index))?;
        let color = parse_fill(fill).map_err(|e| e.at_path(record.index))?;

        Ok(Self { triangle, color })
    }
}
