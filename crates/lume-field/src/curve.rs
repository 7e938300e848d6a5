//! "Curve" effect: a time-varying parametric curve autofit into the canvas
//!
//! Stateless per slot: every frame each index is pushed through a fixed
//! seed formula and a time-varying mapping, then the whole cloud is scaled
//! and centered so it stays framed no matter what shape the formula is
//! currently tracing.

use crate::config::DT_MIN;
use crate::effect::{Effect, FrameContext};
use lume_core::{Result, Vec2};
use std::f32::consts::{PI, TAU};

/// Clock rate in mapped-time units per second at speed 1
const TIME_RATE: f32 = PI / 20.0 * 60.0;
/// Fraction of the canvas the fitted cloud may occupy
const MARGIN: f32 = 0.92;
/// Auto-zoom pulse amplitude (±6%)
const PULSE_AMPLITUDE: f32 = 0.06;
/// Auto-zoom pulse frequency in cycles per second
const PULSE_HZ: f32 = 0.08;

pub struct CurveEffect;

impl CurveEffect {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CurveEffect {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed seed pair for a slot: ((i+1) mod 200, (i+1) div 43).
/// Derived from the index each frame, never stored.
fn slot_seed(i: usize) -> (f32, f32) {
    let ii = i + 1;
    ((ii % 200) as f32, (ii / 43) as f32)
}

/// The mapping function: seed pair + time -> a point in curve space
fn map_point(xv: f32, yv: f32, t: f32) -> Vec2 {
    let k = 5.0 * (xv / 14.0).cos() * (yv / 30.0).cos();
    let e = yv / 8.0 - 13.0;
    let d = (k * k + e * e) / 59.0 + 4.0;

    let q = 60.0 - 3.0 * (k.atan2(e) * e).sin() + k * (3.0 + (4.0 / d) * (d * d - t * 2.0).sin());
    let c = d / 2.0 + e / 99.0 - t / 18.0;

    Vec2::new(q * c.sin(), (q + d * 9.0) * c.cos())
}

impl Effect for CurveEffect {
    fn name(&self) -> &str {
        "curve"
    }

    fn accepts_zoom_auto(&self) -> bool {
        true
    }

    fn rebuild(&mut self, _ctx: &mut FrameContext, _positions: &mut [Vec2]) -> Result<()> {
        // No per-slot state; the seed formula covers initialization.
        Ok(())
    }

    fn reset(&mut self, _ctx: &mut FrameContext) {}

    fn step(&mut self, dt: f32, ctx: &mut FrameContext, positions: &mut [Vec2]) {
        // No upper clamp: the autofit makes large jumps safe, they just
        // skip ahead in the animation.
        let dt = dt.max(DT_MIN);
        *ctx.t += TIME_RATE * dt * ctx.speed;

        let zoom_now = if ctx.zoom_auto {
            *ctx.zoom_phase += dt;
            ctx.zoom * (1.0 + PULSE_AMPLITUDE * (TAU * PULSE_HZ * *ctx.zoom_phase).sin())
        } else {
            ctx.zoom
        };

        // First pass: map every slot into curve space, tracking the
        // bounding box. Mapped points land in the positions buffer so the
        // projection pass can transform in place instead of re-evaluating.
        let t = *ctx.t;
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for (i, slot) in positions.iter_mut().enumerate() {
            let (xv, yv) = slot_seed(i);
            let m = map_point(xv, yv, t);
            min_x = min_x.min(m.x);
            max_x = max_x.max(m.x);
            min_y = min_y.min(m.y);
            max_y = max_y.max(m.y);
            *slot = m;
        }

        // A collapsed box would blow up the division; a unit extent gives a
        // stable (if distorted) frame instead.
        let mut bw = max_x - min_x;
        let mut bh = max_y - min_y;
        if bw < 1e-4 {
            bw = 1.0;
        }
        if bh < 1e-4 {
            bh = 1.0;
        }

        let base_scale = (ctx.width * MARGIN / bw).min(ctx.height * MARGIN / bh);
        let scale = base_scale * zoom_now;

        let off_x = ctx.width * 0.5 - (min_x + max_x) * 0.5 * scale;
        let off_y = ctx.height * 0.5 - (min_y + max_y) * 0.5 * scale;

        // Second pass: project curve space to screen space.
        for slot in positions.iter_mut() {
            slot.x = slot.x * scale + off_x;
            slot.y = slot.y * scale + off_y;
        }
    }
}
