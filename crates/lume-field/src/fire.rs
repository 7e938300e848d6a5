//! "Fire" effect: glowing embers rising from the bottom edge
//!
//! One particle per field slot, same lifetime as the field. A particle that
//! leaves the top of the canvas or burns out is respawned in place — slots
//! are reused forever, never freed.

use crate::config::{DT_MAX, DT_MIN};
use crate::effect::{Effect, FrameContext};
use lume_core::{LumeError, Result, Vec2};

/// Upward acceleration (rising hot air), scaled by speed
const ACCEL: f32 = -40.0;
/// A particle this far above the top edge is gone
const TOP_MARGIN: f32 = -20.0;
/// Soft horizontal containment beyond the canvas edges
const SIDE_MARGIN: f32 = 10.0;

/// One ember
#[derive(Clone, Copy, Debug, Default)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity in pixels/second; negative = upward
    pub vy: f32,
    /// Remaining lifetime in seconds
    pub life: f32,
    /// Starting lifetime
    pub max_life: f32,
}

pub struct FireEffect {
    particles: Vec<Particle>,
}

impl FireEffect {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Per-slot particle state, for hosts that want more than positions
    /// (and for tests)
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Default for FireEffect {
    fn default() -> Self {
        Self::new()
    }
}

/// Respawn a particle near the bottom of the canvas.
///
/// Speed scales both the spawn velocity and the acceleration applied in
/// `step`, so a faster fire burns faster rather than merely skipping ahead.
fn respawn(p: &mut Particle, ctx: &mut FrameContext) {
    p.x = ctx.rng.next_f32() * ctx.width;
    p.y = ctx.height - ctx.rng.next_f32() * 10.0;

    // -50..-200 px/s, slight variation per particle so the column looks organic
    let base_vy = -(50.0 + 150.0 * ctx.rng.next_f32());
    p.vy = base_vy * ctx.speed;

    p.max_life = 0.6 + 0.6 * ctx.rng.next_f32(); // 0.6..1.2 seconds
    p.life = p.max_life;
}

impl Effect for FireEffect {
    fn name(&self) -> &str {
        "fire"
    }

    // zoom and zoom_auto are accepted for interface compatibility but have
    // no observable effect here; accepts_zoom_auto stays false.

    fn rebuild(&mut self, ctx: &mut FrameContext, positions: &mut [Vec2]) -> Result<()> {
        let n = positions.len();
        self.particles = Vec::new();

        let mut particles = Vec::new();
        particles
            .try_reserve_exact(n)
            .map_err(|_| LumeError::AllocationFailed(n))?;

        for slot in positions.iter_mut() {
            let mut p = Particle::default();
            respawn(&mut p, ctx);
            *slot = Vec2::new(p.x, p.y);
            particles.push(p);
        }
        self.particles = particles;
        Ok(())
    }

    fn reset(&mut self, ctx: &mut FrameContext) {
        for p in &mut self.particles {
            respawn(p, ctx);
        }
    }

    fn step(&mut self, dt: f32, ctx: &mut FrameContext, positions: &mut [Vec2]) {
        let dt = dt.clamp(DT_MIN, DT_MAX);
        *ctx.t += dt;

        for (p, slot) in self.particles.iter_mut().zip(positions.iter_mut()) {
            // Semi-implicit Euler: position from current velocity, then the
            // velocity update. Not exact, but cheap and stable.
            p.y += p.vy * dt;
            p.vy += ACCEL * ctx.speed * dt;
            p.life -= dt;

            if p.y < TOP_MARGIN || p.life <= 0.0 {
                respawn(p, ctx);
            } else {
                // Gentle horizontal jitter so the column isn't uniform
                p.x += (ctx.rng.next_f32() - 0.5) * 10.0 * dt;
                p.x = p.x.clamp(-SIDE_MARGIN, ctx.width + SIDE_MARGIN);
            }

            *slot = Vec2::new(p.x, p.y);
        }
    }
}
