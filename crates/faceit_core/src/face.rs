//! Face geometry
//!
//! Maps bounds plus [`DrawParameters`] to the primitives of one face. Every
//! length is a fixed fraction of the skull radius (see [`ratios`]), so the
//! whole face scales with `scale` and with the shorter side of the bounds.
//!
//! ```rust
//! use faceit_core::{DrawParameters, FaceGeometry, Rect};
//!
//! let face = FaceGeometry::compute(Rect::new(0.0, 0.0, 200.0, 200.0), &DrawParameters::default());
//! assert!((face.skull.radius - 90.0).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Circle, CubicBezier, LineSegment, Point, Rect};
use crate::params::DrawParameters;

/// Skull radius divided by each of these gives the named length.
pub mod ratios {
    pub const SKULL_RADIUS_TO_EYE_OFFSET: f32 = 3.0;
    pub const SKULL_RADIUS_TO_EYE_RADIUS: f32 = 10.0;
    pub const SKULL_RADIUS_TO_MOUTH_WIDTH: f32 = 1.0;
    pub const SKULL_RADIUS_TO_MOUTH_HEIGHT: f32 = 3.0;
    pub const SKULL_RADIUS_TO_MOUTH_OFFSET: f32 = 3.0;
    pub const SKULL_RADIUS_TO_BROW_OFFSET: f32 = 5.0;
}

/// Clamp a curvature or tilt to [-1, 1]; non-finite values draw as 0
fn unit_clamp(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Which eye or brow, as seen by the viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// An eye is a circle when open and a flat line when closed
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EyeShape {
    Open(Circle),
    Closed(LineSegment),
}

impl EyeShape {
    pub fn center(&self) -> Point {
        match self {
            EyeShape::Open(circle) => circle.center,
            EyeShape::Closed(line) => line.midpoint(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EyeShape::Open(_))
    }

    /// Reflect across the vertical line `x = axis_x`
    pub fn mirrored_x(&self, axis_x: f32) -> Self {
        match self {
            EyeShape::Open(circle) => {
                EyeShape::Open(Circle::new(circle.center.mirrored_x(axis_x), circle.radius))
            }
            // Swap ends so the segment still runs left to right.
            EyeShape::Closed(line) => EyeShape::Closed(LineSegment::new(
                line.end.mirrored_x(axis_x),
                line.start.mirrored_x(axis_x),
            )),
        }
    }
}

/// Lays out the parts of a face inside a bounding rect.
///
/// Holds no state of its own; every method is a pure function of the bounds
/// and parameters it was built with.
#[derive(Clone, Copy, Debug)]
pub struct FaceLayout<'a> {
    bounds: Rect,
    params: &'a DrawParameters,
}

impl<'a> FaceLayout<'a> {
    pub fn new(bounds: Rect, params: &'a DrawParameters) -> Self {
        Self { bounds, params }
    }

    pub fn skull_radius(&self) -> f32 {
        self.bounds.min_side() / 2.0 * self.params.scale
    }

    pub fn skull_center(&self) -> Point {
        self.bounds.center()
    }

    pub fn skull(&self) -> Circle {
        Circle::new(self.skull_center(), self.skull_radius())
    }

    fn eye_radius(&self) -> f32 {
        self.skull_radius() / ratios::SKULL_RADIUS_TO_EYE_RADIUS
    }

    pub fn eye_center(&self, side: Side) -> Point {
        let offset = self.skull_radius() / ratios::SKULL_RADIUS_TO_EYE_OFFSET;
        self.skull_center().offset(side.sign() * offset, -offset)
    }

    pub fn eye_shape(&self, side: Side) -> EyeShape {
        let center = self.eye_center(side);
        let radius = self.eye_radius();
        if self.params.eyes_open {
            EyeShape::Open(Circle::new(center, radius))
        } else {
            EyeShape::Closed(LineSegment::new(
                center.offset(-radius, 0.0),
                center.offset(radius, 0.0),
            ))
        }
    }

    /// The rect whose top edge the mouth spans
    pub fn mouth_rect(&self) -> Rect {
        let radius = self.skull_radius();
        let width = radius / ratios::SKULL_RADIUS_TO_MOUTH_WIDTH;
        let height = radius / ratios::SKULL_RADIUS_TO_MOUTH_HEIGHT;
        let offset = radius / ratios::SKULL_RADIUS_TO_MOUTH_OFFSET;
        let center = self.skull_center();
        Rect::new(center.x - width / 2.0, center.y + offset, width, height)
    }

    /// Mouth curve from the top-left to the top-right of the mouth rect.
    ///
    /// Positive curvature pushes the control points down (+y), giving a
    /// smile; negative pulls them up into a frown.
    pub fn mouth_curve(&self) -> CubicBezier {
        let rect = self.mouth_rect();
        let smile_offset = unit_clamp(self.params.mouth_curvature) * rect.height();
        let third = rect.width() / 3.0;

        CubicBezier::new(
            rect.top_left(),
            Point::new(rect.min_x() + third, rect.min_y() + smile_offset),
            Point::new(rect.max_x() - third, rect.min_y() + smile_offset),
            rect.top_right(),
        )
    }

    /// Brow segment above an eye.
    ///
    /// The tilt is negated for the left brow so both brows lean the same way
    /// relative to the middle of the face.
    pub fn brow_segment(&self, side: Side) -> LineSegment {
        let tilt = match side {
            Side::Left => -self.params.eye_brow_tilt,
            Side::Right => self.params.eye_brow_tilt,
        };

        let center = self
            .eye_center(side)
            .offset(0.0, -self.skull_radius() / ratios::SKULL_RADIUS_TO_BROW_OFFSET);
        let half_width = self.eye_radius();
        let tilt_offset = unit_clamp(tilt) * half_width / 2.0;

        LineSegment::new(
            center.offset(-half_width, -tilt_offset),
            center.offset(half_width, tilt_offset),
        )
    }
}

/// Everything a renderer strokes to draw one face
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceGeometry {
    pub skull: Circle,
    pub left_eye: EyeShape,
    pub right_eye: EyeShape,
    pub mouth: CubicBezier,
    pub left_brow: LineSegment,
    pub right_brow: LineSegment,
    pub line_width: f32,
    pub color: Color,
}

impl FaceGeometry {
    pub fn compute(bounds: Rect, params: &DrawParameters) -> Self {
        let layout = FaceLayout::new(bounds, params);
        Self {
            skull: layout.skull(),
            left_eye: layout.eye_shape(Side::Left),
            right_eye: layout.eye_shape(Side::Right),
            mouth: layout.mouth_curve(),
            left_brow: layout.brow_segment(Side::Left),
            right_brow: layout.brow_segment(Side::Right),
            line_width: params.line_width,
            color: params.color,
        }
    }
}
