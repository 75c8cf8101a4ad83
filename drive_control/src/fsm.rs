//! The control state machine, kept pure: transitions are planned from a
//! finger count alone, and the cooldown gate takes its notion of "now" as a
//! parameter.  Key signaling lives in [`crate::controller`].

use std::time::{Duration, Instant};

/// Default minimum interval between accepted commands.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(50);

// ════════════════════════════════════════════════════════════════════════════
// ControlState / KeyAction
// ════════════════════════════════════════════════════════════════════════════

/// The discrete driving command state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlState {
    Gas,
    Brake,
    Neutral,
}

impl ControlState {
    pub fn label(&self) -> &'static str {
        match self {
            ControlState::Gas => "GAS",
            ControlState::Brake => "BRAKE",
            ControlState::Neutral => "NEUTRAL",
        }
    }
}

/// The two logical game keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    Gas,
    Brake,
}

/// One planned key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press(GameKey),
    Release(GameKey),
}

// ════════════════════════════════════════════════════════════════════════════
// plan_for — the pure transition table
// ════════════════════════════════════════════════════════════════════════════

/// Plan the state and key events for a finger count.
///
/// The release always precedes the press so gas and brake are never held
/// simultaneously.  Events are planned even when the state repeats; a fresh
/// press on an already-held key is harmless and keeps the mapping stateless.
pub fn plan_for(finger_count: u8) -> (ControlState, [KeyAction; 2]) {
    use GameKey::*;
    use KeyAction::*;
    match finger_count {
        0 => (ControlState::Brake, [Release(Gas), Press(Brake)]),
        5 => (ControlState::Gas, [Release(Brake), Press(Gas)]),
        _ => (ControlState::Neutral, [Release(Gas), Release(Brake)]),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ControlFsm — cooldown-gated state holder
// ════════════════════════════════════════════════════════════════════════════

/// Three-state machine with a minimum re-trigger interval.
///
/// Starts in [`ControlState::Neutral`] with the gate open, so the first
/// command is always accepted.
#[derive(Debug)]
pub struct ControlFsm {
    state: ControlState,
    last_command: Option<Instant>,
    cooldown: Duration,
}

impl ControlFsm {
    pub fn new(cooldown: Duration) -> Self {
        ControlFsm {
            state: ControlState::Neutral,
            last_command: None,
            cooldown,
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Feed one finger-count observation at time `now`.
    ///
    /// Returns the planned key events when the command is accepted, or
    /// `None` while the cooldown is still running (state unchanged, nothing
    /// to signal).
    pub fn step_at(&mut self, finger_count: u8, now: Instant) -> Option<[KeyAction; 2]> {
        if let Some(last) = self.last_command {
            if now.duration_since(last) < self.cooldown {
                return None;
            }
        }
        self.last_command = Some(now);

        let (state, actions) = plan_for(finger_count);
        self.state = state;
        Some(actions)
    }
}

impl Default for ControlFsm {
    fn default() -> Self {
        ControlFsm::new(DEFAULT_COOLDOWN)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use GameKey::*;
    use KeyAction::*;

    #[test]
    fn plan_matches_gesture_table() {
        assert_eq!(plan_for(0), (ControlState::Brake, [Release(Gas), Press(Brake)]));
        assert_eq!(plan_for(5), (ControlState::Gas, [Release(Brake), Press(Gas)]));
        for n in 1..5u8 {
            assert_eq!(plan_for(n), (ControlState::Neutral, [Release(Gas), Release(Brake)]));
        }
    }

    #[test]
    fn starts_neutral_and_accepts_first_command() {
        let mut fsm = ControlFsm::default();
        assert_eq!(fsm.state(), ControlState::Neutral);
        assert!(fsm.step_at(5, Instant::now()).is_some());
        assert_eq!(fsm.state(), ControlState::Gas);
    }

    #[test]
    fn second_call_within_cooldown_is_a_noop() {
        let mut fsm = ControlFsm::default();
        let t0 = Instant::now();
        fsm.step_at(5, t0);

        // Different count, 10 ms later: gated, state stays Gas.
        let gated = fsm.step_at(0, t0 + Duration::from_millis(10));
        assert!(gated.is_none());
        assert_eq!(fsm.state(), ControlState::Gas);
    }

    #[test]
    fn call_exactly_at_cooldown_is_accepted() {
        let mut fsm = ControlFsm::default();
        let t0 = Instant::now();
        fsm.step_at(5, t0);
        assert!(fsm.step_at(0, t0 + DEFAULT_COOLDOWN).is_some());
        assert_eq!(fsm.state(), ControlState::Brake);
    }

    #[test]
    fn fist_after_gas_swaps_pedals() {
        let mut fsm = ControlFsm::default();
        let t0 = Instant::now();
        fsm.step_at(5, t0);
        let actions = fsm.step_at(0, t0 + Duration::from_millis(60)).unwrap();
        assert_eq!(actions, [Release(Gas), Press(Brake)]);
        assert_eq!(fsm.state(), ControlState::Brake);
    }

    #[test]
    fn spaced_sequence_runs_the_full_table() {
        // [5, 5, 0, 2, 3] at >50 ms spacing.
        let mut fsm = ControlFsm::default();
        let t0 = Instant::now();
        let mut seen = Vec::new();
        for (i, count) in [5u8, 5, 0, 2, 3].into_iter().enumerate() {
            let now = t0 + Duration::from_millis(60 * i as u64);
            assert!(fsm.step_at(count, now).is_some());
            seen.push(fsm.state());
        }
        assert_eq!(
            seen,
            [
                ControlState::Gas,
                ControlState::Gas,
                ControlState::Brake,
                ControlState::Neutral,
                ControlState::Neutral,
            ]
        );
    }

    #[test]
    fn repeated_count_still_replans_events() {
        let mut fsm = ControlFsm::default();
        let t0 = Instant::now();
        let first = fsm.step_at(5, t0).unwrap();
        let second = fsm.step_at(5, t0 + Duration::from_millis(60)).unwrap();
        assert_eq!(first, second);
    }
}
