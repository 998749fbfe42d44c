// Amp Ramping
//
// The amplification coefficient moves linearly from its initial value to
// a target over a governance-set window. Interpolation uses integer
// division of the positive difference, so the live value rounds toward
// the initial amp while ramping.

use serde::{Deserialize, Serialize};

/// Where a pool sits in its amp ramp timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmpRampState {
    /// No ramp scheduled: target equals the initial amp
    Stable,
    /// Inside the ramp window, interpolating
    Ramping,
    /// Past the window; the target amp holds from here on
    Terminal,
}

/// Effective amp at `now`, interpolated along `[ramp_start, ramp_stop]`
pub fn get_current_amp(
    initial_amp: u64,
    target_amp: u64,
    ramp_start: i64,
    ramp_stop: i64,
    now: i64,
) -> u64 {
    if now >= ramp_stop || ramp_stop == ramp_start {
        return target_amp;
    }
    if now <= ramp_start {
        return initial_amp;
    }
    let elapsed = (now - ramp_start) as u128;
    let duration = (ramp_stop - ramp_start) as u128;
    if target_amp > initial_amp {
        let step = (target_amp - initial_amp) as u128 * elapsed / duration;
        initial_amp + step as u64
    } else {
        let step = (initial_amp - target_amp) as u128 * elapsed / duration;
        initial_amp - step as u64
    }
}

/// Classify the ramp timeline at `now`. Terminal is absorbing: once the
/// window has passed, the state never leaves it.
pub fn ramp_state(
    initial_amp: u64,
    target_amp: u64,
    ramp_start: i64,
    ramp_stop: i64,
    now: i64,
) -> AmpRampState {
    if target_amp == initial_amp || ramp_stop == ramp_start {
        return AmpRampState::Stable;
    }
    if now >= ramp_stop {
        return AmpRampState::Terminal;
    }
    if now >= ramp_start {
        return AmpRampState::Ramping;
    }
    AmpRampState::Stable
}
