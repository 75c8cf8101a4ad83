//! The 21-point normalized hand-landmark scheme.
//!
//! Coordinates follow the MediaPipe hand landmarker convention: `x` and `y`
//! are normalized to the image (0.0–1.0, y grows downward), `z` is depth
//! relative to the wrist.  A [`HandLandmarks`] set is ephemeral — produced
//! for one frame and dropped with it.

// ════════════════════════════════════════════════════════════════════════════
// Landmark indices — fixed anatomical numbering
// ════════════════════════════════════════════════════════════════════════════

/// Landmark indices in the fixed 21-point anatomical numbering.
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// Fingertip indices, thumb → pinky.
pub const TIPS: [usize; 5] = [4, 8, 12, 16, 20];

/// Second-joint indices paired with [`TIPS`] for the extension test.
/// Thumb uses its IP joint; the four fingers use their PIP joints.
pub const SECOND_JOINTS: [usize; 5] = [3, 6, 10, 14, 18];

/// Skeleton edges between landmark indices, used by the overlay renderer.
pub const CONNECTIONS: [(usize, usize); 21] = [
    // thumb
    (0, 1), (1, 2), (2, 3), (3, 4),
    // index
    (0, 5), (5, 6), (6, 7), (7, 8),
    // middle
    (5, 9), (9, 10), (10, 11), (11, 12),
    // ring
    (9, 13), (13, 14), (14, 15), (15, 16),
    // pinky
    (13, 17), (17, 18), (18, 19), (19, 20),
    // palm base
    (0, 17),
];

// ════════════════════════════════════════════════════════════════════════════
// Landmark / HandLandmarks
// ════════════════════════════════════════════════════════════════════════════

/// One normalized hand landmark.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    /// 0.0–1.0, normalized to image width.
    pub x: f32,
    /// 0.0–1.0, normalized to image height; larger is lower in the image.
    pub y: f32,
    /// Depth relative to the wrist.  Unused by the classifier.
    pub z: f32,
}

/// One detected hand: the full 21-point set plus detection metadata.
#[derive(Clone, Debug)]
pub struct HandLandmarks {
    pub points: [Landmark; 21],
    /// Detector confidence, 0.0–1.0.
    pub confidence: f32,
    /// "Left" or "Right" as reported by the detector.
    pub handedness: String,
}

impl HandLandmarks {
    /// Build a set from raw points with neutral metadata.
    pub fn from_points(points: [Landmark; 21]) -> Self {
        HandLandmarks {
            points,
            confidence: 1.0,
            handedness: String::new(),
        }
    }

    /// Project every landmark into pixel coordinates.
    pub fn to_pixels(&self, width: f32, height: f32) -> Vec<(f32, f32)> {
        self.points
            .iter()
            .map(|lm| (lm.x * width, lm.y * height))
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_and_joints_pair_up() {
        assert_eq!(TIPS.len(), SECOND_JOINTS.len());
        for (tip, joint) in TIPS.iter().zip(SECOND_JOINTS.iter()) {
            assert!(tip > joint, "tip {} should follow joint {}", tip, joint);
        }
        assert_eq!(TIPS[0], index::THUMB_TIP);
        assert_eq!(SECOND_JOINTS[0], index::THUMB_IP);
    }

    #[test]
    fn connections_stay_in_range() {
        for (a, b) in CONNECTIONS {
            assert!(a < 21 && b < 21);
        }
    }

    #[test]
    fn to_pixels_scales_by_frame_size() {
        let mut pts = [Landmark::default(); 21];
        pts[index::WRIST] = Landmark { x: 0.5, y: 0.25, z: 0.0 };
        let hand = HandLandmarks::from_points(pts);
        let px = hand.to_pixels(640.0, 480.0);
        assert_eq!(px.len(), 21);
        assert_eq!(px[index::WRIST], (320.0, 120.0));
    }
}
