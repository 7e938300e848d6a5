//! Lume Field - host-driven point-field animation core
//!
//! Maintains a flat buffer of 2D positions and updates it once per frame
//! according to a pluggable motion effect:
//! - Density-driven sizing with reallocation only when the point count changes
//! - A shared lifecycle surface (canvas, density, speed, zoom, reset, step)
//! - Zero-copy position readback for the host's render loop
//! - Three effects: rising embers, an autofit parametric curve, and a
//!   minimal spiral
//!
//! The host owns timing and rendering; it feeds `step(dt)` and draws from
//! `positions()`. This crate never touches a display surface.

pub mod config;
pub mod curve;
pub mod effect;
pub mod field;
pub mod fire;
pub mod rand;
pub mod spiral;

pub use config::{FieldParams, MAX_POINTS, MIN_POINTS};
pub use curve::CurveEffect;
pub use effect::{Effect, FrameContext};
pub use field::PointField;
pub use fire::FireEffect;
pub use rand::FieldRng;
pub use spiral::SpiralEffect;
