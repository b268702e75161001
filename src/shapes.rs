//! The four shape generators.
//!
//! Each generator takes the canvas bounds and a [`RandomSource`] and returns a
//! typed shape whose geometry stays inside the canvas. Shapes render their own
//! SVG fragment through [`fmt::Display`].

use crate::random::{Color, Opacity, RandomSource};
use std::f64::consts::PI;
use std::fmt;

/// Smallest radius a circle or polygon is drawn with.
pub const MIN_RADIUS: i64 = 10;
/// Smallest side length of a rectangle.
pub const MIN_RECT_SIDE: i64 = 20;
/// Maximum angular jitter applied to each polygon vertex, in radians.
pub const POLYGON_JITTER: f64 = 0.25;

/// The coordinate space every shape is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn w(self) -> i64 {
        i64::from(self.width)
    }

    fn h(self) -> i64 {
        i64::from(self.height)
    }

    /// Upper bound for circle and polygon radii.
    fn max_radius(self) -> i64 {
        self.w().min(self.h()) / 3
    }
}

/// The closed set of shape kinds the composer picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rect,
    Polygon,
    Path,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rect,
        ShapeKind::Polygon,
        ShapeKind::Path,
    ];

    /// Picks a kind uniformly at random.
    pub fn choose(rng: &mut impl RandomSource) -> Self {
        let last = Self::ALL.len() as i64 - 1;
        Self::ALL[rng.int(0, last) as usize]
    }

    pub fn generate(self, canvas: Canvas, rng: &mut impl RandomSource) -> Shape {
        match self {
            ShapeKind::Circle => Shape::Circle(Circle::random(canvas, rng)),
            ShapeKind::Rect => Shape::Rect(Rect::random(canvas, rng)),
            ShapeKind::Polygon => Shape::Polygon(Polygon::random(canvas, rng)),
            ShapeKind::Path => Shape::Path(Path::random(canvas, rng)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Path => "path",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One generated shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    Polygon(Polygon),
    Path(Path),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Path(_) => ShapeKind::Path,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(circle) => fmt::Display::fmt(circle, f),
            Shape::Rect(rect) => fmt::Display::fmt(rect, f),
            Shape::Polygon(polygon) => fmt::Display::fmt(polygon, f),
            Shape::Path(path) => fmt::Display::fmt(path, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: i64,
    pub cy: i64,
    pub r: i64,
    pub fill: Color,
    pub opacity: Opacity,
    pub stroke: Color,
    pub stroke_width: i64,
}

impl Circle {
    /// A circle that lies entirely inside `canvas`.
    pub fn random(canvas: Canvas, rng: &mut impl RandomSource) -> Self {
        let r = rng.int(MIN_RADIUS, canvas.max_radius());
        Self {
            cx: rng.int(r, canvas.w() - r),
            cy: rng.int(r, canvas.h() - r),
            r,
            fill: rng.color(),
            opacity: rng.opacity(),
            stroke: rng.color(),
            stroke_width: rng.int(0, 4),
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" opacity="{}" stroke="{}" stroke-width="{}"/>"#,
            self.cx, self.cy, self.r, self.fill, self.opacity, self.stroke, self.stroke_width
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: i64,
    pub opacity: Opacity,
    /// Corner radius.
    pub rx: i64,
}

impl Rect {
    /// A rectangle at most half the canvas in each dimension, fully inside it.
    pub fn random(canvas: Canvas, rng: &mut impl RandomSource) -> Self {
        let width = rng.int(MIN_RECT_SIDE, canvas.w() / 2);
        let height = rng.int(MIN_RECT_SIDE, canvas.h() / 2);
        Self {
            x: rng.int(0, canvas.w() - width),
            y: rng.int(0, canvas.h() - height),
            width,
            height,
            fill: rng.color(),
            stroke: rng.color(),
            stroke_width: rng.int(0, 4),
            opacity: rng.opacity(),
            rx: rng.int(0, 20),
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}" opacity="{}" rx="{}"/>"#,
            self.x,
            self.y,
            self.width,
            self.height,
            self.fill,
            self.stroke,
            self.stroke_width,
            self.opacity,
            self.rx
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<(f64, f64)>,
    pub fill: Color,
    pub opacity: Opacity,
}

impl Polygon {
    /// A jittered regular polygon with 3 to 8 sides.
    ///
    /// The circumscribing circle is placed like [`Circle::random`]. Jitter only
    /// rotates a vertex along that circle, so vertices are not re-clamped.
    pub fn random(canvas: Canvas, rng: &mut impl RandomSource) -> Self {
        let sides = rng.int(3, 8);
        let radius = rng.int(MIN_RADIUS, canvas.max_radius());
        let center_x = rng.int(radius, canvas.w() - radius) as f64;
        let center_y = rng.int(radius, canvas.h() - radius) as f64;
        let radius = radius as f64;

        let step = 2.0 * PI / sides as f64;
        let points = (0..sides)
            .map(|i| {
                let jitter = rng.unit() * 2.0 * POLYGON_JITTER - POLYGON_JITTER;
                let angle = i as f64 * step + jitter;
                (
                    center_x + radius * angle.cos(),
                    center_y + radius * angle.sin(),
                )
            })
            .collect();

        Self {
            points,
            fill: rng.color(),
            opacity: rng.opacity(),
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"<polygon points=""#)?;
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x:.2},{y:.2}")?;
        }
        write!(f, r#"" fill="{}" opacity="{}"/>"#, self.fill, self.opacity)
    }
}

/// One cubic Bézier command: two control points and an end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubicSegment {
    pub c1: (i64, i64),
    pub c2: (i64, i64),
    pub end: (i64, i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub start: (i64, i64),
    pub segments: Vec<CubicSegment>,
    pub stroke: Color,
    pub stroke_width: i64,
    pub opacity: Opacity,
}

impl Path {
    /// A closed, unfilled path of 1 to 3 cubic curves through random points.
    pub fn random(canvas: Canvas, rng: &mut impl RandomSource) -> Self {
        let segment_count = rng.int(1, 3);
        let start = random_point(canvas, rng);
        let segments = (0..segment_count)
            .map(|_| CubicSegment {
                c1: random_point(canvas, rng),
                c2: random_point(canvas, rng),
                end: random_point(canvas, rng),
            })
            .collect();

        Self {
            start,
            segments,
            stroke: rng.color(),
            stroke_width: rng.int(1, 5),
            opacity: rng.opacity(),
        }
    }

    /// The `d` attribute.
    pub fn data(&self) -> String {
        let mut d = format!("M {} {}", self.start.0, self.start.1);
        for seg in &self.segments {
            d.push_str(&format!(
                " C {} {} {} {} {} {}",
                seg.c1.0, seg.c1.1, seg.c2.0, seg.c2.1, seg.end.0, seg.end.1
            ));
        }
        d.push_str(" Z");
        d
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<path d="{}" stroke="{}" fill="none" stroke-width="{}" opacity="{}"/>"#,
            self.data(),
            self.stroke,
            self.stroke_width,
            self.opacity
        )
    }
}

fn random_point(canvas: Canvas, rng: &mut impl RandomSource) -> (i64, i64) {
    (rng.int(0, canvas.w()), rng.int(0, canvas.h()))
}
