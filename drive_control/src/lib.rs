//! # drive_control
//!
//! The driving-control half of the hand_drive controller: a three-state
//! machine (Gas / Brake / Neutral) fed by per-frame finger counts, gated by
//! a command cooldown, and wired to simulated gas/brake key presses.
//!
//! ## Finger count → control
//!
//! | Count | Key events | New state |
//! |---|---|---|
//! | 0 (fist) | release gas, press brake | Brake |
//! | 5 (open hand) | release brake, press gas | Gas |
//! | anything else | release both | Neutral |
//!
//! Calls arriving within the cooldown window (50 ms by default) are no-ops:
//! no key events, previous state reported unchanged.
//!
//! Key injection goes through the [`keys::KeyTap`] seam; the real backend
//! is `enigo`, and a null backend exists for headless runs.  Events are
//! fire-and-forget — failures are logged and never surface as errors.

pub mod controller;
pub mod fsm;
pub mod keys;

pub use controller::GameController;
pub use fsm::{plan_for, ControlFsm, ControlState, GameKey, KeyAction};
pub use keys::{EnigoTap, KeyTap, NullTap};
