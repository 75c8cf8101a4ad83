//! The effectful adapter around [`ControlFsm`]: resolves planned key
//! actions against the configured gas/brake key names and signals them
//! through a [`KeyTap`] backend.

use std::time::{Duration, Instant};

use crate::fsm::{ControlFsm, ControlState, GameKey, KeyAction};
use crate::keys::KeyTap;

// ════════════════════════════════════════════════════════════════════════════
// GameController
// ════════════════════════════════════════════════════════════════════════════

/// Drives the game from per-frame finger counts.
///
/// Owns the FSM, the key backend, and the two configured key names.  Call
/// [`control`](GameController::control) once per processed frame and
/// [`cleanup`](GameController::cleanup) on every exit path so no key is left
/// stuck pressed.
pub struct GameController {
    fsm: ControlFsm,
    keys: Box<dyn KeyTap>,
    gas_key: String,
    brake_key: String,
}

impl GameController {
    pub fn new(keys: Box<dyn KeyTap>, gas_key: &str, brake_key: &str, cooldown: Duration) -> Self {
        GameController {
            fsm: ControlFsm::new(cooldown),
            keys,
            gas_key: gas_key.to_string(),
            brake_key: brake_key.to_string(),
        }
    }

    /// Current control state (unchanged between accepted commands).
    pub fn state(&self) -> ControlState {
        self.fsm.state()
    }

    /// Feed one finger-count observation; returns the (possibly unchanged)
    /// control state.
    pub fn control(&mut self, finger_count: u8) -> ControlState {
        self.control_at(finger_count, Instant::now())
    }

    /// [`control`](GameController::control) with an explicit clock, for
    /// exercising the cooldown gate deterministically.
    pub fn control_at(&mut self, finger_count: u8, now: Instant) -> ControlState {
        if let Some(actions) = self.fsm.step_at(finger_count, now) {
            for action in actions {
                self.perform(action);
            }
        }
        self.fsm.state()
    }

    /// Release both game keys unconditionally.  Safe to call from any
    /// state, any number of times.
    pub fn cleanup(&mut self) {
        self.keys.release(&self.gas_key);
        self.keys.release(&self.brake_key);
    }

    fn perform(&mut self, action: KeyAction) {
        let (key, press) = match action {
            KeyAction::Press(k) => (k, true),
            KeyAction::Release(k) => (k, false),
        };
        let name = match key {
            GameKey::Gas => &self.gas_key,
            GameKey::Brake => &self.brake_key,
        };
        if press {
            self.keys.press(name);
        } else {
            self.keys.release(name);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
