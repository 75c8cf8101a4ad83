//! Webcam frame source (feature `camera`).
//!
//! Captures RGB frames through `nokhwa`, mirrors them when configured, and
//! runs each one through the MediaPipe detector.  The requested resolution
//! is only a request — the negotiated format is read back and becomes the
//! layout for everything downstream.

use anyhow::{Context, Result};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
};
use nokhwa::Camera;

use crate::config::AppConfig;
use crate::detector::MediaPipeDetector;
use crate::source::{Frame, HandSource};

// ════════════════════════════════════════════════════════════════════════════
// CameraSource
// ════════════════════════════════════════════════════════════════════════════

/// Frame source backed by a real webcam plus the MediaPipe subprocess.
pub struct CameraSource {
    camera: Camera,
    detector: MediaPipeDetector,
    width: u32,
    height: u32,
    flip: bool,
}

impl CameraSource {
    /// Open the camera by index and start the detector.  Failure here is
    /// fatal — the app never enters its loop.
    pub fn open(cfg: &AppConfig) -> Result<Self> {
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(
                Resolution::new(cfg.camera_width, cfg.camera_height),
                FrameFormat::MJPEG,
                cfg.fps_target,
            ),
        ));

        let mut camera = Camera::new(CameraIndex::Index(cfg.camera_index), requested)
            .with_context(|| format!("opening camera {}", cfg.camera_index))?;
        camera.open_stream().context("starting camera stream")?;

        // What we asked for and what we got can differ.
        let resolution = camera.resolution();
        if resolution.width() != cfg.camera_width || resolution.height() != cfg.camera_height {
            log::info!(
                "camera negotiated {}x{} (requested {}x{})",
                resolution.width(),
                resolution.height(),
                cfg.camera_width,
                cfg.camera_height
            );
        }

        let detector = MediaPipeDetector::spawn(
            cfg.min_detection_confidence,
            cfg.min_tracking_confidence,
        )
        .context("starting hand detector")?;

        Ok(CameraSource {
            camera,
            detector,
            width: resolution.width(),
            height: resolution.height(),
            flip: cfg.flip_camera,
        })
    }
}

impl HandSource for CameraSource {
    fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    fn next_frame(&mut self) -> Result<Frame> {
        let raw = self.camera.frame().context("reading camera frame")?;
        let image = raw
            .decode_image::<RgbFormat>()
            .context("decoding camera frame")?;
        let mut rgb = image.into_raw();

        // Mirror before detection so the landmarks match the preview (and
        // the thumb heuristic's mirrored-feed assumption holds).
        if self.flip {
            mirror_rows(&mut rgb, self.width as usize);
        }

        // Detection failures inside a frame degrade to "no hand" — the
        // session only ends on camera errors.
        let hand = match self.detector.detect(&rgb, self.width, self.height) {
            Ok(hand) => hand,
            Err(e) => {
                log::warn!("hand detection failed: {:#}", e);
                None
            }
        };

        Ok(Frame {
            width: self.width as usize,
            height: self.height as usize,
            pixels: rgb_to_pixels(&rgb),
            hand,
        })
    }

    fn mode_label(&self) -> &'static str {
        "camera"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pixel helpers
// ────────────────────────────────────────────────────────────────────────────

/// Flip each row of a packed RGB buffer in place.
fn mirror_rows(rgb: &mut [u8], width: usize) {
    for row in rgb.chunks_exact_mut(width * 3) {
        let mut left = 0;
        let mut right = width - 1;
        while left < right {
            for c in 0..3 {
                row.swap(left * 3 + c, right * 3 + c);
            }
            left += 1;
            right -= 1;
        }
    }
}

/// Pack RGB bytes into `0x00RRGGBB` words for the window blit.
fn rgb_to_pixels(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_swaps_row_ends() {
        // 3 pixels wide, 1 row: red, green, blue → blue, green, red.
        let mut rgb = vec![255, 0, 0, 0, 255, 0, 0, 0, 255];
        mirror_rows(&mut rgb, 3);
        assert_eq!(rgb, vec![0, 0, 255, 0, 255, 0, 255, 0, 0]);
    }

    #[test]
    fn mirror_twice_is_identity() {
        let original: Vec<u8> = (0..4 * 2 * 3).map(|i| i as u8).collect();
        let mut rgb = original.clone();
        mirror_rows(&mut rgb, 4);
        mirror_rows(&mut rgb, 4);
        assert_eq!(rgb, original);
    }

    #[test]
    fn rgb_packs_into_0rgb_words() {
        let rgb = [0x12, 0x34, 0x56, 0xFF, 0x00, 0x80];
        assert_eq!(rgb_to_pixels(&rgb), vec![0x00123456, 0x00FF0080]);
    }
}
