//! Motion effect trait

use crate::rand::FieldRng;
use lume_core::{Result, Vec2};

/// Per-call view of the field's tuning parameters and clock, handed to an
/// effect by the field manager.
///
/// `t` and `zoom_phase` are owned by the field; effects advance them at
/// their own rate (the ember effect accumulates raw seconds, the curve
/// effect a fixed rate scaled by speed).
pub struct FrameContext<'a> {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub zoom: f32,
    pub zoom_auto: bool,
    pub t: &'a mut f32,
    pub zoom_phase: &'a mut f32,
    pub rng: &'a mut FieldRng,
}

/// A motion effect that fills the positions buffer once per frame
///
/// The field manager is generic over this trait and never knows which
/// concrete effect is active. All effects share one lifecycle: `rebuild`
/// after every reallocation, `reset` on host request, `step` once per frame.
pub trait Effect {
    /// Human-readable name for this effect
    fn name(&self) -> &str;

    /// Whether the auto-zoom pulse has any observable effect.
    /// Effects that ignore zoom entirely keep the default.
    fn accepts_zoom_auto(&self) -> bool {
        false
    }

    /// Called after the field allocated a fresh buffer of `positions.len()`
    /// slots. The effect initializes every slot; a returned error tears the
    /// whole field down to the empty state.
    fn rebuild(&mut self, ctx: &mut FrameContext, positions: &mut [Vec2]) -> Result<()>;

    /// Called on host reset, after the field cleared its clock.
    /// Per-slot effect state (if any) returns to its spawn configuration.
    fn reset(&mut self, ctx: &mut FrameContext);

    /// Advance one frame: clamp `dt` to the effect's bound, advance the
    /// clock, and write a position into every slot.
    fn step(&mut self, dt: f32, ctx: &mut FrameContext, positions: &mut [Vec2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Still;

    impl Effect for Still {
        fn name(&self) -> &str {
            "still"
        }

        fn rebuild(&mut self, _ctx: &mut FrameContext, _positions: &mut [Vec2]) -> Result<()> {
            Ok(())
        }

        fn reset(&mut self, _ctx: &mut FrameContext) {}

        fn step(&mut self, dt: f32, ctx: &mut FrameContext, _positions: &mut [Vec2]) {
            *ctx.t += dt;
        }
    }

    #[test]
    fn zoom_auto_defaults_off() {
        assert!(!Still.accepts_zoom_auto());
        assert_eq!(Still.name(), "still");
    }
}
