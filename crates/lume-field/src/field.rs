//! Point-field lifecycle manager
//!
//! `PointField` owns the tuning parameters, the simulation clock, the RNG
//! and the positions buffer. The host configures it, calls `step(dt)` once
//! per frame, and reads positions back; the active effect does the rest.

use crate::config::{
    FieldParams, DENSITY_MAX, DENSITY_MIN, SPEED_MAX, SPEED_MIN, ZOOM_MAX, ZOOM_MIN,
};
use crate::effect::{Effect, FrameContext};
use crate::rand::FieldRng;
use lume_core::{LumeError, Result, Vec2};

/// Seed used by `PointField::new`; pick your own via `with_seed` for
/// reproducible runs.
pub const DEFAULT_SEED: u32 = 0xDEAD_BEEF;

/// A point field driven by one motion effect.
///
/// Single-threaded and host-driven: lifecycle calls and `step` happen one at
/// a time from one execution context. Multiple independent fields coexist
/// freely — there is no process-wide state.
///
/// The slice returned by [`positions`](Self::positions) is valid until the
/// next `&mut self` call; `set_canvas` and `set_density` may reallocate, so
/// the host re-borrows after any reconfiguration (the borrow checker
/// enforces this).
pub struct PointField<E: Effect> {
    params: FieldParams,
    t: f32,
    zoom_phase: f32,
    positions: Vec<Vec2>,
    effect: E,
    rng: FieldRng,
}

impl<E: Effect> PointField<E> {
    pub fn new(effect: E) -> Self {
        Self::with_seed(effect, DEFAULT_SEED)
    }

    pub fn with_seed(effect: E, seed: u32) -> Self {
        Self {
            params: FieldParams::default(),
            t: 0.0,
            zoom_phase: 0.0,
            positions: Vec::new(),
            effect,
            rng: FieldRng::new(seed),
        }
    }

    /// Set the canvas extent in device pixels. Non-positive dimensions are
    /// ignored and prior state is retained.
    pub fn set_canvas(&mut self, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }
        self.params.width = width;
        self.params.height = height;
        self.rebuild();
    }

    /// Set points-per-pixel density, clamped to [0.0005, 0.060].
    pub fn set_density(&mut self, density: f32) {
        self.params.base_density = density.clamp(DENSITY_MIN, DENSITY_MAX);
        self.rebuild();
    }

    /// Set the motion time multiplier, clamped to [0.05, 5.0].
    pub fn set_speed(&mut self, speed: f32) {
        self.params.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Set the scale multiplier, clamped to [0.5, 4.0].
    pub fn set_zoom(&mut self, zoom: f32) {
        self.params.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Toggle the sinusoidal auto-zoom pulse. Effects that don't honor zoom
    /// accept this without observable change.
    pub fn set_zoom_auto(&mut self, on: bool) {
        self.params.zoom_auto = on;
    }

    /// Clear the clock and return per-slot effect state to its spawn
    /// configuration. The effect part is skipped while the field is empty.
    pub fn reset(&mut self) {
        self.t = 0.0;
        self.zoom_phase = 0.0;
        if self.positions.is_empty() {
            return;
        }
        let mut ctx = FrameContext {
            width: self.params.width as f32,
            height: self.params.height as f32,
            speed: self.params.speed,
            zoom: self.params.zoom,
            zoom_auto: self.params.zoom_auto,
            t: &mut self.t,
            zoom_phase: &mut self.zoom_phase,
            rng: &mut self.rng,
        };
        self.effect.reset(&mut ctx);
    }

    /// Number of active points (0 while the field is empty)
    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    /// Zero-copy view of all positions as interleaved `[x0, y0, x1, y1, ...]`,
    /// length `2 * point_count()`.
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Bounds-checked read of slot `i`; the sentinel (-1, -1) if the index
    /// is out of range or the field is empty.
    pub fn position_at(&self, i: i32) -> Vec2 {
        match self.get(i) {
            Some(p) => *p,
            None => Vec2::new(-1.0, -1.0),
        }
    }

    /// Bounds-checked x coordinate of slot `i`; -1.0 if the index is out of
    /// range or the field is empty.
    pub fn position_x(&self, i: i32) -> f32 {
        match self.get(i) {
            Some(p) => p.x,
            None => -1.0,
        }
    }

    /// Bounds-checked y coordinate of slot `i`; -1.0 on invalid index.
    pub fn position_y(&self, i: i32) -> f32 {
        match self.get(i) {
            Some(p) => p.y,
            None => -1.0,
        }
    }

    /// Advance one animation frame. A no-op while the field is empty or the
    /// canvas is unset.
    pub fn step(&mut self, dt: f32) {
        if self.positions.is_empty() || self.params.width <= 0 || self.params.height <= 0 {
            return;
        }
        let mut ctx = FrameContext {
            width: self.params.width as f32,
            height: self.params.height as f32,
            speed: self.params.speed,
            zoom: self.params.zoom,
            zoom_auto: self.params.zoom_auto,
            t: &mut self.t,
            zoom_phase: &mut self.zoom_phase,
            rng: &mut self.rng,
        };
        self.effect.step(dt, &mut ctx, &mut self.positions);
    }

    /// Current tuning parameters
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Accumulated simulation time in seconds
    pub fn time(&self) -> f32 {
        self.t
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    fn get(&self, i: i32) -> Option<&Vec2> {
        if i < 0 {
            return None;
        }
        self.positions.get(i as usize)
    }

    /// Recompute the target point count and reallocate if it changed.
    ///
    /// Idempotent for an unchanged target, so resize ticks that land on the
    /// same count never reallocate. On any failure the field tears down to
    /// the empty state — subsequent calls behave as no-ops until a rebuild
    /// succeeds.
    fn rebuild(&mut self) {
        if self.params.width <= 0 || self.params.height <= 0 {
            return;
        }
        let target = self.params.target_point_count();
        if target == self.positions.len() && !self.positions.is_empty() {
            return;
        }

        self.positions = Vec::new();
        if let Err(err) = self.try_rebuild(target) {
            log::warn!("field rebuild failed, dropping to empty state: {err}");
            self.positions = Vec::new();
            return;
        }
        log::debug!(
            "field rebuilt: {} points for {}x{} ({})",
            target,
            self.params.width,
            self.params.height,
            self.effect.name()
        );
    }

    fn try_rebuild(&mut self, target: usize) -> Result<()> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(target)
            .map_err(|_| LumeError::AllocationFailed(target))?;
        buffer.resize(target, Vec2::ZERO);
        self.positions = buffer;

        let mut ctx = FrameContext {
            width: self.params.width as f32,
            height: self.params.height as f32,
            speed: self.params.speed,
            zoom: self.params.zoom,
            zoom_auto: self.params.zoom_auto,
            t: &mut self.t,
            zoom_phase: &mut self.zoom_phase,
            rng: &mut self.rng,
        };
        self.effect.rebuild(&mut ctx, &mut self.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_POINTS, MIN_POINTS};
    use crate::curve::CurveEffect;
    use crate::fire::FireEffect;
    use crate::spiral::SpiralEffect;

    #[test]
    fn small_canvas_clamps_to_min_points() {
        let mut field = PointField::new(SpiralEffect::new());
        field.set_density(0.005);
        field.set_canvas(800, 600);
        // 0.005 * 800 * 600 = 2400, below the floor
        assert_eq!(field.point_count(), MIN_POINTS);
    }

    #[test]
    fn large_canvas_clamps_to_max_points() {
        let mut field = PointField::new(SpiralEffect::new());
        field.set_canvas(2000, 2000);
        field.set_density(0.06);
        // 0.06 * 2000 * 2000 = 240000, above the ceiling
        assert_eq!(field.point_count(), MAX_POINTS);
    }

    #[test]
    fn point_count_always_in_bounds() {
        for density in [-1.0, 0.0, 0.0005, 0.01, 0.06, 99.0] {
            let mut field = PointField::new(FireEffect::new());
            field.set_density(density);
            field.set_canvas(1280, 720);
            let n = field.point_count();
            assert!((MIN_POINTS..=MAX_POINTS).contains(&n), "density {density} gave {n}");
        }
    }

    #[test]
    fn rebuild_is_idempotent_for_same_canvas() {
        let mut field = PointField::new(FireEffect::new());
        field.set_canvas(800, 600);
        let before = field.positions().as_ptr();
        field.set_canvas(800, 600);
        let after = field.positions().as_ptr();
        assert_eq!(before, after, "unchanged canvas must not reallocate");
    }

    #[test]
    fn invalid_canvas_is_ignored() {
        let mut field = PointField::new(SpiralEffect::new());
        field.set_canvas(0, 600);
        field.set_canvas(-800, -600);
        assert_eq!(field.point_count(), 0);

        field.set_canvas(800, 600);
        let n = field.point_count();
        field.set_canvas(800, 0);
        assert_eq!(field.point_count(), n, "prior state must be retained");
    }

    #[test]
    fn sentinel_on_out_of_range_index() {
        let mut field = PointField::new(FireEffect::new());
        assert_eq!(field.position_x(0), -1.0, "empty field returns sentinel");

        field.set_canvas(800, 600);
        let n = field.point_count() as i32;
        assert_eq!(field.position_x(-1), -1.0);
        assert_eq!(field.position_x(n), -1.0);
        assert_eq!(field.position_y(n), -1.0);
        assert_eq!(field.position_at(n), lume_core::Vec2::new(-1.0, -1.0));
        assert_ne!(field.position_y(0), -1.0);
    }

    #[test]
    fn step_before_canvas_is_noop() {
        let mut field = PointField::new(CurveEffect::new());
        field.step(0.016);
        assert_eq!(field.point_count(), 0);
        assert_eq!(field.time(), 0.0);
    }

    #[test]
    fn positions_slice_length_matches_count() {
        let mut field = PointField::new(CurveEffect::new());
        field.set_canvas(800, 600);
        assert_eq!(field.positions().len(), 2 * field.point_count());
    }

    #[test]
    fn reset_clears_clock() {
        let mut field = PointField::new(SpiralEffect::new());
        field.set_canvas(640, 480);
        field.step(0.016);
        assert!(field.time() > 0.0);
        field.reset();
        assert_eq!(field.time(), 0.0);
    }

    #[test]
    fn parameter_setters_clamp() {
        let mut field = PointField::new(SpiralEffect::new());
        field.set_speed(1000.0);
        field.set_zoom(0.0);
        assert_eq!(field.params().speed, 5.0);
        assert_eq!(field.params().zoom, 0.5);
    }

    #[test]
    fn independent_fields_do_not_interfere() {
        let mut a = PointField::with_seed(FireEffect::new(), 1);
        let mut b = PointField::with_seed(FireEffect::new(), 1);
        a.set_canvas(400, 300);
        b.set_canvas(400, 300);
        a.step(0.016);
        b.step(0.016);
        assert_eq!(a.positions(), b.positions(), "same seed, same trajectory");

        // Stepping one must not affect the other
        a.step(0.016);
        assert_ne!(a.positions(), b.positions());
    }
}
