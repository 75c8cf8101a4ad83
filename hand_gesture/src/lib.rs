//! # hand_gesture
//!
//! Hand-landmark types, the extended-finger classifier, and the gesture
//! namer behind the `hand_drive` webcam driving controller.
//!
//! ## Gesture → Control mapping
//!
//! | Fingers extended | Gesture | Driving control |
//! |---|---|---|
//! | 5 (open hand) | Gas | accelerate |
//! | 0 (closed fist) | Brake | brake |
//! | 2 (index + middle) | Neutral | release both |
//! | anything else | Fingers: N | release both |
//!
//! The classifier works on the 21-point normalized landmark scheme produced
//! by the MediaPipe hand landmarker (see [`landmarks`]); it is purely
//! per-frame and carries no temporal state.
//!
//! ## Camera-orientation constraint
//!
//! Thumb extension is judged by comparing x-coordinates of the thumb tip and
//! its second joint.  This only reads correctly on a **mirrored** camera
//! feed (the default in `hand_drive`).  Run with an unmirrored feed and the
//! thumb classification inverts.  This coupling is deliberate and kept
//! explicit rather than silently compensated.

pub mod fingers;
pub mod landmarks;
pub mod namer;

pub use fingers::{count_fingers, FingerStates};
pub use landmarks::{HandLandmarks, Landmark};
pub use namer::Gesture;
