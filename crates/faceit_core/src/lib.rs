//! FaceIt Core
//!
//! The framework-independent part of a face-drawing widget:
//!
//! - **Expression model**: eyes, eyebrows and mouth with saturating steps
//! - **Draw parameters**: the continuous values an expression maps to
//! - **Face geometry**: skull, eyes, mouth and brows laid out in a rect
//! - **Store**: owns the expression and notifies renderers of changes
//!
//! Drawing, gesture recognition and view wiring belong to the host UI.
//!
//! # Example
//!
//! ```rust
//! use faceit_core::{DrawParameters, FaceGeometry, FacialExpression, Rect};
//! use faceit_core::expression::{EyeBrows, Eyes, Mouth};
//!
//! let face = FacialExpression::new(Eyes::Open, EyeBrows::Normal, Mouth::Smile);
//! let params = DrawParameters::from_expression(&face);
//!
//! let geometry = FaceGeometry::compute(Rect::new(0.0, 0.0, 200.0, 200.0), &params);
//! let mouth_offset = geometry.mouth.control1.y - geometry.mouth.start.y;
//! assert!((mouth_offset - 30.0).abs() < 1e-3);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod expression;
pub mod face;
pub mod geometry;
pub mod params;
pub mod path;
pub mod store;

pub use color::Color;
pub use config::{FaceConfig, StyleConfig};
pub use error::{FaceError, Result};
pub use expression::{EyeBrows, Eyes, FacialExpression, Mouth, Move, Ordered};
pub use face::{ratios, EyeShape, FaceGeometry, FaceLayout, Side};
pub use geometry::{Circle, CubicBezier, LineSegment, Point, Rect, Size};
pub use params::{eye_brow_tilt, mouth_curvature, DrawParameters};
pub use path::{Path, PathCommand};
pub use store::{FaceStore, SubscriptionHandle};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
