//! Hold-gesture state machine.
//!
//! Pressing and holding grows `hold_progress` toward 1; once it
//! completes, continuing to hold walks it back down (`reversing`).
//! Releasing snaps the progress to whichever end is nearer, faster
//! than the hold itself. Pure clamp arithmetic, deterministic, and a
//! no-op at `dt = 0`.

use crate::constants::{
    HOLD_GROW_RATE, HOLD_REVERSE_ARM, HOLD_REVERSE_RESET, HOLD_SNAP_RATE, HOLD_SNAP_SPLIT,
};
use crate::state::SceneState;

pub fn advance_hold(state: &mut SceneState, dt: f64) {
    if state.holding {
        if state.reversing {
            state.hold_progress = (state.hold_progress - dt * HOLD_GROW_RATE).max(0.0);
        } else {
            state.hold_progress = (state.hold_progress + dt * HOLD_GROW_RATE).min(1.0);
        }
    } else if state.hold_progress > HOLD_SNAP_SPLIT {
        state.hold_progress = (state.hold_progress + dt * HOLD_SNAP_RATE).min(1.0);
    } else {
        state.hold_progress = (state.hold_progress - dt * HOLD_SNAP_RATE).max(0.0);
    }

    let p = state.hold_progress;

    if state.holding && p > HOLD_REVERSE_ARM && !state.reversing {
        state.reversing = true;
        log::debug!("hold complete; return phase armed");
    }
    // Hysteresis: only a near-empty bar re-arms the next hold cycle.
    if p < HOLD_REVERSE_RESET {
        if state.reversing {
            log::debug!("hold cycle reset");
        }
        state.reversing = false;
    }
}
