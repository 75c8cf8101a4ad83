//! Frame acquisition — real webcam and keyboard simulation.
//!
//! The pipeline consumes [`Frame`]s through the [`HandSource`] trait and
//! doesn't care whether they came from hardware or the simulator.  The
//! webcam backend lives in [`crate::camera`] (feature `camera`); the
//! simulator here synthesizes full 21-point hand poses so the classifier,
//! namer, control FSM, and overlay all run the identical code path.

use anyhow::Result;

use hand_gesture::landmarks::{index, Landmark};
use hand_gesture::HandLandmarks;

use crate::config::AppConfig;

// ════════════════════════════════════════════════════════════════════════════
// Frame
// ════════════════════════════════════════════════════════════════════════════

/// One acquired frame: pixels ready for the window blit, plus the first
/// detected hand (if any).  Ephemeral — owned by one loop iteration.
pub struct Frame {
    pub width: usize,
    pub height: usize,
    /// Row-major `0x00RRGGBB` pixels, already mirrored when configured.
    pub pixels: Vec<u32>,
    pub hand: Option<HandLandmarks>,
}

// ════════════════════════════════════════════════════════════════════════════
// HandSource trait — unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Simulation command forwarded from the window's keyboard polling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimCommand {
    /// Pose a synthetic hand with this many extended fingers (0–5).
    ShowFingers(u8),
    /// Hide or re-show the synthetic hand.
    ToggleHand,
}

/// Anything that can produce frames with optional hand landmarks.
pub trait HandSource {
    /// Negotiated frame size; fixed for the life of the source.
    fn dimensions(&self) -> (usize, usize);

    /// Block for the next frame.  An error here ends the session.
    fn next_frame(&mut self) -> Result<Frame>;

    /// React to a simulation command.  Hardware sources ignore these.
    fn handle(&mut self, _cmd: SimCommand) {}

    /// Short mode name for the status bar.
    fn mode_label(&self) -> &'static str;
}

// ════════════════════════════════════════════════════════════════════════════
// Synthetic hand poses
// ════════════════════════════════════════════════════════════════════════════

/// Which fingers a simulated count extends: counts 1–4 raise index→pinky in
/// order, 5 adds the thumb.  Count 2 therefore reads as the Neutral peace
/// sign downstream.
pub fn sim_states(count: u8) -> [bool; 5] {
    let count = count.min(5);
    if count == 5 {
        return [true; 5];
    }
    let mut states = [false; 5];
    for finger in 1..=count as usize {
        states[finger] = true;
    }
    states
}

/// Build a full 21-point pose with the given fingers extended, laid out in
/// normalized coordinates under the mirrored-feed convention (extended
/// thumb tip lies left of its IP joint).
pub fn sim_pose(states: [bool; 5]) -> HandLandmarks {
    let mut pts = [Landmark::default(); 21];
    let lm = |x: f32, y: f32| Landmark { x, y, z: 0.0 };

    pts[index::WRIST] = lm(0.52, 0.80);

    // Thumb chain angles off the palm toward the left edge.
    pts[index::THUMB_CMC] = lm(0.46, 0.72);
    pts[index::THUMB_MCP] = lm(0.42, 0.66);
    pts[index::THUMB_IP] = lm(0.38, 0.61);
    pts[index::THUMB_TIP] = if states[0] { lm(0.30, 0.58) } else { lm(0.43, 0.63) };

    // Four fingers in columns, knuckles on a shared row.
    for (k, &extended) in states[1..].iter().enumerate() {
        let base = 4 * k + index::INDEX_MCP; // mcp, pip, dip, tip
        let x = 0.44 + 0.045 * k as f32;
        pts[base] = lm(x, 0.58);
        if extended {
            pts[base + 1] = lm(x, 0.46);
            pts[base + 2] = lm(x, 0.38);
            pts[base + 3] = lm(x, 0.30);
        } else {
            pts[base + 1] = lm(x, 0.50);
            pts[base + 2] = lm(x, 0.56);
            pts[base + 3] = lm(x, 0.60);
        }
    }

    HandLandmarks {
        points: pts,
        confidence: 1.0,
        handedness: "Right".to_string(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimSource — keyboard-driven synthetic hand (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Frame source that renders a flat backdrop and a posable synthetic hand.
///
/// Digit keys pick the extended-finger count; `H` hides the hand, which
/// exercises the no-hand path (finger count 0, brake by default).
pub struct SimSource {
    width: usize,
    height: usize,
    backdrop: Vec<u32>,
    finger_count: u8,
    hand_visible: bool,
}

impl SimSource {
    pub fn new(cfg: &AppConfig) -> Self {
        let width = cfg.camera_width as usize;
        let height = cfg.camera_height as usize;

        // Static vertical gradient, darkening toward the bottom.
        let mut backdrop = Vec::with_capacity(width * height);
        for row in 0..height {
            let shade = 0x38 - (0x18 * row / height.max(1)) as u32;
            let color = (shade << 16) | (shade << 8) | (shade + 0x10);
            backdrop.extend(std::iter::repeat(color).take(width));
        }

        SimSource {
            width,
            height,
            backdrop,
            finger_count: 5,
            hand_visible: true,
        }
    }
}

impl HandSource for SimSource {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn next_frame(&mut self) -> Result<Frame> {
        let hand = self
            .hand_visible
            .then(|| sim_pose(sim_states(self.finger_count)));
        Ok(Frame {
            width: self.width,
            height: self.height,
            pixels: self.backdrop.clone(),
            hand,
        })
    }

    fn handle(&mut self, cmd: SimCommand) {
        match cmd {
            SimCommand::ShowFingers(n) => {
                self.finger_count = n.min(5);
                self.hand_visible = true;
            }
            SimCommand::ToggleHand => self.hand_visible = !self.hand_visible,
        }
    }

    fn mode_label(&self) -> &'static str {
        "simulation"
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_gesture::count_fingers;

    #[test]
    fn sim_states_raise_index_first() {
        assert_eq!(sim_states(0), [false; 5]);
        assert_eq!(sim_states(1), [false, true, false, false, false]);
        assert_eq!(sim_states(2), [false, true, true, false, false]);
        assert_eq!(sim_states(5), [true; 5]);
        assert_eq!(sim_states(9), [true; 5]);
    }

    #[test]
    fn sim_poses_round_trip_through_the_classifier() {
        for n in 0..=5u8 {
            let states = sim_states(n);
            let (count, classified) = count_fingers(&sim_pose(states));
            assert_eq!(count, n, "count {} pose", n);
            assert_eq!(classified, states, "count {} pose", n);
        }
    }

    #[test]
    fn hidden_hand_yields_no_landmarks() {
        let mut src = SimSource::new(&AppConfig::default());
        src.handle(SimCommand::ToggleHand);
        let frame = src.next_frame().unwrap();
        assert!(frame.hand.is_none());
        src.handle(SimCommand::ToggleHand);
        assert!(src.next_frame().unwrap().hand.is_some());
    }

    #[test]
    fn show_fingers_reveals_and_reposes() {
        let mut src = SimSource::new(&AppConfig::default());
        src.handle(SimCommand::ToggleHand);
        src.handle(SimCommand::ShowFingers(2));
        let frame = src.next_frame().unwrap();
        let hand = frame.hand.expect("hand should be visible again");
        assert_eq!(count_fingers(&hand).0, 2);
    }

    #[test]
    fn frame_matches_configured_dimensions() {
        let cfg = AppConfig::default();
        let mut src = SimSource::new(&cfg);
        let frame = src.next_frame().unwrap();
        assert_eq!(frame.width, cfg.camera_width as usize);
        assert_eq!(frame.height, cfg.camera_height as usize);
        assert_eq!(frame.pixels.len(), frame.width * frame.height);
    }
}
