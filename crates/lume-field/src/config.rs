//! Field parameters (programmatic setters or parsed from TOML) and tuning ranges

use lume_core::Result;
use serde::{Deserialize, Serialize};

/// Minimum active point count, regardless of density and canvas size
pub const MIN_POINTS: usize = 6_000;
/// Maximum active point count
pub const MAX_POINTS: usize = 120_000;

pub const DENSITY_MIN: f32 = 0.0005;
pub const DENSITY_MAX: f32 = 0.060;

pub const SPEED_MIN: f32 = 0.05;
pub const SPEED_MAX: f32 = 5.0;

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 4.0;

/// Lower bound on a single integration step, in seconds
pub const DT_MIN: f32 = 0.0001;
/// Upper bound on a single integration step (clamps big frame jumps)
pub const DT_MAX: f32 = 0.1;

/// Tuning parameters for one point field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldParams {
    /// Canvas width in device pixels; 0 until the host calls set_canvas
    pub width: i32,
    /// Canvas height in device pixels
    pub height: i32,
    /// Points per screen pixel (controls N)
    pub base_density: f32,
    /// Motion time multiplier
    pub speed: f32,
    /// Scale multiplier
    pub zoom: f32,
    /// Sinusoidal pulse on top of zoom (only effects that opt in honor it)
    pub zoom_auto: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            base_density: 0.005,
            speed: 1.0,
            zoom: 1.0,
            zoom_auto: false,
        }
    }
}

impl FieldParams {
    /// Parse FieldParams from a TOML document.
    ///
    /// The only failure is malformed TOML; unknown keys are ignored and
    /// out-of-range values are clamped as in [`from_toml`](Self::from_toml).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::value::Table = toml::from_str(source)?;
        Ok(Self::from_toml(&table))
    }

    /// Parse FieldParams from a TOML component table.
    ///
    /// Out-of-range values are clamped, never rejected; canvas size is left
    /// at its default unless both dimensions are positive.
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut params = Self::default();

        let width = table
            .get("width")
            .and_then(|v| v.as_integer())
            .unwrap_or(0) as i32;
        let height = table
            .get("height")
            .and_then(|v| v.as_integer())
            .unwrap_or(0) as i32;
        if width > 0 && height > 0 {
            params.width = width;
            params.height = height;
        }

        if let Some(v) = table.get("density") {
            params.base_density = toml_f32(v, params.base_density).clamp(DENSITY_MIN, DENSITY_MAX);
        }
        if let Some(v) = table.get("speed") {
            params.speed = toml_f32(v, params.speed).clamp(SPEED_MIN, SPEED_MAX);
        }
        if let Some(v) = table.get("zoom") {
            params.zoom = toml_f32(v, params.zoom).clamp(ZOOM_MIN, ZOOM_MAX);
        }
        if let Some(v) = table.get("zoom_auto") {
            params.zoom_auto = v.as_bool().unwrap_or(false);
        }

        params
    }

    /// Derived point count: density * pixels, clamped to [MIN_POINTS, MAX_POINTS].
    ///
    /// Only meaningful once both canvas dimensions are positive.
    pub fn target_point_count(&self) -> usize {
        let raw = self.base_density as f64 * self.width as f64 * self.height as f64;
        (raw.round() as usize).clamp(MIN_POINTS, MAX_POINTS)
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}
