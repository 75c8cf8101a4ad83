//! Extended-finger classification.
//!
//! Purely per-frame threshold comparisons on landmark positions — no
//! hysteresis, no temporal smoothing.  A dropped or jittery detection frame
//! simply reclassifies from scratch on the next one.

use crate::landmarks::{HandLandmarks, SECOND_JOINTS, TIPS};

// ════════════════════════════════════════════════════════════════════════════
// FingerStates
// ════════════════════════════════════════════════════════════════════════════

/// Ordered extended/not-extended flags: thumb, index, middle, ring, pinky.
pub type FingerStates = [bool; 5];

/// Finger positions within a [`FingerStates`] vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

// ════════════════════════════════════════════════════════════════════════════
// count_fingers
// ════════════════════════════════════════════════════════════════════════════

/// Classify which fingers are extended and return the count with the
/// per-finger vector.
///
/// * Thumb: extended when its tip lies left of its IP joint in image space
///   (`tip.x < joint.x`).  **Only valid for a mirrored camera feed** — see
///   the crate docs.
/// * Index–pinky: extended when the tip lies above its PIP joint
///   (`tip.y < joint.y`; image y grows downward).
pub fn count_fingers(hand: &HandLandmarks) -> (u8, FingerStates) {
    let mut states = [false; 5];

    states[Finger::Thumb as usize] =
        hand.points[TIPS[0]].x < hand.points[SECOND_JOINTS[0]].x;

    for i in 1..5 {
        states[i] = hand.points[TIPS[i]].y < hand.points[SECOND_JOINTS[i]].y;
    }

    let count = states.iter().filter(|&&s| s).count() as u8;
    (count, states)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Landmark;

    /// Build a hand with the requested per-finger extension pattern.
    ///
    /// Joints sit on a fixed row; an extended finger places its tip above
    /// the joint (smaller y), a curled one below.  The thumb works on x
    /// under the mirrored convention (extended = tip left of joint).
    fn hand_with(states: FingerStates) -> HandLandmarks {
        let mut pts = [Landmark { x: 0.5, y: 0.5, z: 0.0 }; 21];

        // Thumb: joint at x=0.40; tip left (0.30) when extended, right
        // (0.50) when curled.
        pts[SECOND_JOINTS[0]] = Landmark { x: 0.40, y: 0.55, z: 0.0 };
        pts[TIPS[0]].x = if states[0] { 0.30 } else { 0.50 };

        for i in 1..5 {
            let x = 0.40 + 0.05 * i as f32;
            pts[SECOND_JOINTS[i]] = Landmark { x, y: 0.40, z: 0.0 };
            pts[TIPS[i]] = Landmark {
                x,
                y: if states[i] { 0.25 } else { 0.55 },
                z: 0.0,
            };
        }
        HandLandmarks::from_points(pts)
    }

    #[test]
    fn closed_fist_counts_zero() {
        let (count, states) = count_fingers(&hand_with([false; 5]));
        assert_eq!(count, 0);
        assert_eq!(states, [false; 5]);
    }

    #[test]
    fn open_hand_counts_five() {
        let (count, states) = count_fingers(&hand_with([true; 5]));
        assert_eq!(count, 5);
        assert_eq!(states, [true; 5]);
    }

    #[test]
    fn peace_sign_counts_two() {
        let pattern = [false, true, true, false, false];
        let (count, states) = count_fingers(&hand_with(pattern));
        assert_eq!(count, 2);
        assert_eq!(states, pattern);
    }

    #[test]
    fn thumb_only_depends_on_x_ordering() {
        // Same pose, thumb tip swapped to the other side of its joint.
        let (c_ext, s_ext) = count_fingers(&hand_with([true, false, false, false, false]));
        let (c_curl, s_curl) = count_fingers(&hand_with([false; 5]));
        assert_eq!((c_ext, s_ext[0]), (1, true));
        assert_eq!((c_curl, s_curl[0]), (0, false));
    }

    #[test]
    fn each_finger_classified_independently() {
        for i in 0..5 {
            let mut pattern = [false; 5];
            pattern[i] = true;
            let (count, states) = count_fingers(&hand_with(pattern));
            assert_eq!(count, 1, "finger {} alone", i);
            assert_eq!(states, pattern);
        }
    }
}
