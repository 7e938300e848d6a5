//! "Spiral" effect: minimal effect exercising the whole lifecycle contract
//!
//! No per-slot state at all — each point is a pure function of its
//! normalized index and the clock. Useful as a starting point for new
//! effects and as the simplest proof of the shared interface.

use crate::config::{DT_MAX, DT_MIN};
use crate::effect::{Effect, FrameContext};
use lume_core::{Result, Vec2};

pub struct SpiralEffect;

impl SpiralEffect {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpiralEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for SpiralEffect {
    fn name(&self) -> &str {
        "spiral"
    }

    fn rebuild(&mut self, _ctx: &mut FrameContext, _positions: &mut [Vec2]) -> Result<()> {
        Ok(())
    }

    fn reset(&mut self, _ctx: &mut FrameContext) {}

    fn step(&mut self, dt: f32, ctx: &mut FrameContext, positions: &mut [Vec2]) {
        let dt = dt.clamp(DT_MIN, DT_MAX);
        *ctx.t += dt * ctx.speed;

        let t = *ctx.t;
        let cx = ctx.width * 0.5;
        let cy = ctx.height * 0.5;
        let min_dim = ctx.width.min(ctx.height);
        let base_radius = min_dim * 0.35 * ctx.zoom;

        let n = positions.len() as f32;
        for (i, slot) in positions.iter_mut().enumerate() {
            let u = i as f32 / n;

            let angle = u * 16.0 + t * 0.8;
            let wobble = 0.1 * (6.0 * u + t * 1.5).sin();
            let r = base_radius * (0.3 + 0.7 * u) * (1.0 + wobble);

            slot.x = cx + angle.cos() * r;
            slot.y = cy + (angle * 1.3).sin() * r * 0.6;
        }
    }
}
