//! Gesture naming — pure, display-only mapping from a finger classification
//! to a human-readable label.  The driving FSM works from the raw count;
//! this exists for the on-screen status bar.

use crate::fingers::{Finger, FingerStates};

// ════════════════════════════════════════════════════════════════════════════
// Gesture
// ════════════════════════════════════════════════════════════════════════════

/// Recognized gesture label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Closed fist — zero fingers extended.
    Brake,
    /// Open hand — all five fingers extended.
    Gas,
    /// Exactly index + middle extended (peace sign).
    Neutral,
    /// Any other pattern; carries the finger count.
    Other(u8),
}

impl Gesture {
    /// Name a gesture from a finger count and per-finger state vector.
    pub fn from_fingers(count: u8, states: &FingerStates) -> Gesture {
        match count {
            0 => Gesture::Brake,
            5 => Gesture::Gas,
            2 if states[Finger::Index as usize] && states[Finger::Middle as usize] => {
                Gesture::Neutral
            }
            n => Gesture::Other(n),
        }
    }

    /// Status-bar label.
    pub fn label(&self) -> String {
        match self {
            Gesture::Brake => "Brake".to_string(),
            Gesture::Gas => "Gas".to_string(),
            Gesture::Neutral => "Neutral".to_string(),
            Gesture::Other(n) => format!("Fingers: {}", n),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fist_is_brake() {
        let g = Gesture::from_fingers(0, &[false; 5]);
        assert_eq!(g, Gesture::Brake);
        assert_eq!(g.label(), "Brake");
    }

    #[test]
    fn open_hand_is_gas() {
        let g = Gesture::from_fingers(5, &[true; 5]);
        assert_eq!(g, Gesture::Gas);
        assert_eq!(g.label(), "Gas");
    }

    #[test]
    fn index_middle_pair_is_neutral() {
        let g = Gesture::from_fingers(2, &[false, true, true, false, false]);
        assert_eq!(g, Gesture::Neutral);
        assert_eq!(g.label(), "Neutral");
    }

    #[test]
    fn other_two_finger_pairs_are_not_neutral() {
        // Count 2 without index+middle falls through to the generic label.
        let g = Gesture::from_fingers(2, &[true, false, false, false, true]);
        assert_eq!(g, Gesture::Other(2));
        assert_eq!(g.label(), "Fingers: 2");
    }

    #[test]
    fn fallback_carries_count() {
        for n in [1u8, 3, 4] {
            let g = Gesture::from_fingers(n, &[true; 5]);
            assert_eq!(g, Gesture::Other(n));
            assert_eq!(g.label(), format!("Fingers: {}", n));
        }
    }

    #[test]
    fn naming_is_deterministic() {
        let states = [false, true, true, false, false];
        let a = Gesture::from_fingers(2, &states);
        let b = Gesture::from_fingers(2, &states);
        assert_eq!(a, b);
        assert_eq!(a.label(), b.label());
    }
}
