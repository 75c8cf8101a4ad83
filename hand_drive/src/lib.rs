//! # hand_drive
//!
//! Drive a game with your hand: a webcam feed runs through a hand-landmark
//! detector, extended fingers are counted, and the count is mapped to
//! simulated gas/brake key presses.
//!
//! ## Gesture → Key mapping
//!
//! | Gesture | Fingers | Keys |
//! |---|---|---|
//! | Open hand | 5 | hold gas (default: right arrow) |
//! | Closed fist | 0 | hold brake (default: left arrow) |
//! | Anything else | 1–4 | release both |
//!
//! Commands are rate-limited to one per 50 ms; between accepted commands
//! the previous control state persists.
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: digit keys pose a synthetic hand, so
//!   the full pipeline runs with no webcam and no Python environment.
//! * `camera` — **Webcam mode**: captures frames via `nokhwa` and detects
//!   landmarks with the MediaPipe hand landmarker in a Python subprocess.
//!
//! ## Window keys
//!
//! | Key | Action |
//! |---|---|
//! | `Q` / close | quit (always releases both game keys) |
//! | `I` | toggle the instruction overlay |
//! | `0`–`5` | (sim mode) pose that many extended fingers |
//! | `H` | (sim mode) hide / show the synthetic hand |
//!
//! ## Camera-setup constraint
//!
//! The thumb classifier assumes a mirrored preview (the default).  Disable
//! `flip_camera` and thumb detection inverts — see the `hand_gesture` docs.

pub mod app;
pub mod config;
pub mod fps;
pub mod source;
pub mod visualizer;

#[cfg(feature = "camera")]
pub mod camera;
#[cfg(feature = "camera")]
pub mod detector;
