//! Vector paths for renderers
//!
//! Renderers that only know how to stroke paths can take the output of
//! [`FaceGeometry::to_paths`] directly.

use serde::{Deserialize, Serialize};

use crate::face::{EyeShape, FaceGeometry};
use crate::geometry::{Circle, CubicBezier, LineSegment, Point, Rect};

/// Path command for building vector paths
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    /// Move to a point
    MoveTo { to: Point },
    /// Line to a point
    LineTo { to: Point },
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo {
            to: Point::new(x, y),
        });
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo {
            to: Point::new(x, y),
        });
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a circle path
    pub fn circle(center: Point, radius: f32) -> Self {
        // Approximate circle with 4 cubic Bézier curves
        let k = 0.552_284_75;
        let r = radius;
        let cx = center.x;
        let cy = center.y;

        Self::new()
            .move_to(cx + r, cy)
            .cubic_to(cx + r, cy + r * k, cx + r * k, cy + r, cx, cy + r)
            .cubic_to(cx - r * k, cy + r, cx - r, cy + r * k, cx - r, cy)
            .cubic_to(cx - r, cy - r * k, cx - r * k, cy - r, cx, cy - r)
            .cubic_to(cx + r * k, cy - r, cx + r, cy - r * k, cx + r, cy)
            .close()
    }

    /// Create a line path
    pub fn line(from: Point, to: Point) -> Self {
        Self::new().move_to(from.x, from.y).line_to(to.x, to.y)
    }

    /// Create a single-curve path
    pub fn curve(curve: &CubicBezier) -> Self {
        Self::new().move_to(curve.start.x, curve.start.y).cubic_to(
            curve.control1.x,
            curve.control1.y,
            curve.control2.x,
            curve.control2.y,
            curve.end.x,
            curve.end.y,
        )
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounding rectangle of all points, control points included
    pub fn bounds(&self) -> Rect {
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let points = self.commands.iter().flat_map(|cmd| match cmd {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } => vec![*to],
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => vec![*control1, *control2, *end],
            PathCommand::Close => Vec::new(),
        });

        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        } else {
            Rect::ZERO
        }
    }
}

impl From<&Circle> for Path {
    fn from(circle: &Circle) -> Self {
        Path::circle(circle.center, circle.radius)
    }
}

impl From<&LineSegment> for Path {
    fn from(line: &LineSegment) -> Self {
        Path::line(line.start, line.end)
    }
}

impl From<&CubicBezier> for Path {
    fn from(curve: &CubicBezier) -> Self {
        Path::curve(curve)
    }
}

impl From<&EyeShape> for Path {
    fn from(eye: &EyeShape) -> Self {
        match eye {
            EyeShape::Open(circle) => circle.into(),
            EyeShape::Closed(line) => line.into(),
        }
    }
}

impl FaceGeometry {
    /// Paths to stroke, in draw order: skull, left eye, right eye, mouth,
    /// left brow, right brow.
    pub fn to_paths(&self) -> [Path; 6] {
        [
            Path::from(&self.skull),
            Path::from(&self.left_eye),
            Path::from(&self.right_eye),
            Path::from(&self.mouth),
            Path::from(&self.left_brow),
            Path::from(&self.right_brow),
        ]
    }
}
