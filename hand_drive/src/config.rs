//! Application configuration.
//!
//! One immutable struct with compile-time defaults, passed into each
//! component's constructor.  Nothing here is read from disk or mutated at
//! runtime.

use std::time::Duration;

use drive_control::ControlState;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // ── camera ────────────────────────────────────────────────────────────
    pub camera_index: u32,
    /// Requested capture width; the negotiated width may differ and is what
    /// drives the window layout.
    pub camera_width: u32,
    pub camera_height: u32,
    /// Mirror the feed horizontally.  The thumb classifier depends on this
    /// being on; turn it off and thumb detection inverts.
    pub flip_camera: bool,

    // ── landmark detection ────────────────────────────────────────────────
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,

    // ── game control ──────────────────────────────────────────────────────
    pub gas_key: String,
    pub brake_key: String,
    /// Minimum interval between accepted control commands.
    pub command_cooldown: Duration,

    // ── UI ────────────────────────────────────────────────────────────────
    pub fps_target: u32,
    /// Height of the status bar appended below the camera frame, pixels.
    pub status_bar_height: usize,
    pub gas_color: u32,
    pub brake_color: u32,
    pub neutral_color: u32,
    pub text_color: u32,
}

impl AppConfig {
    /// Status-bar color for a control state (green / red / yellow).
    pub fn state_color(&self, state: ControlState) -> u32 {
        match state {
            ControlState::Gas => self.gas_color,
            ControlState::Brake => self.brake_color,
            ControlState::Neutral => self.neutral_color,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            camera_index: 0,
            camera_width: 640,
            camera_height: 480,
            flip_camera: true,

            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,

            gas_key: "right".to_string(),
            brake_key: "left".to_string(),
            command_cooldown: Duration::from_millis(50),

            fps_target: 30,
            status_bar_height: 80,
            gas_color: 0x0000CC44,     // green
            brake_color: 0x00DD2222,   // red
            neutral_color: 0x00DDCC22, // yellow
            text_color: 0x00EEEEEE,
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
    fn defaults_match_the_documented_setup() {
        let cfg = AppConfig::default();
        assert_eq!((cfg.camera_width, cfg.camera_height), (640, 480));
        assert!(cfg.flip_camera);
        assert_eq!(cfg.min_detection_confidence, 0.7);
        assert_eq!(cfg.command_cooldown, Duration::from_millis(50));
        assert_eq!(cfg.fps_target, 30);
        assert_eq!(cfg.gas_key, "right");
        assert_eq!(cfg.brake_key, "left");
    }

    #[test]
    fn state_colors_are_distinct() {
        let cfg = AppConfig::default();
        let gas = cfg.state_color(ControlState::Gas);
        let brake = cfg.state_color(ControlState::Brake);
        let neutral = cfg.state_color(ControlState::Neutral);
        assert_ne!(gas, brake);
        assert_ne!(gas, neutral);
        assert_ne!(brake, neutral);
    }
}
