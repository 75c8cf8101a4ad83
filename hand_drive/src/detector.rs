//! MediaPipe hand-landmark detection via a Python subprocess.
//!
//! The hand landmarker has no native Rust build, so frames are piped to
//! `detect_hand.py` as a little-endian `(width, height, channels)` header
//! followed by raw RGB bytes; the script answers one JSON line per frame:
//!
//! ```text
//! {"hands": [{"handedness": "Right", "score": 0.93, "landmarks": [{"x":..,"y":..,"z":..}, ...]}]}
//! ```
//!
//! # Setup
//!
//! ```text
//! python3 -m venv .venv && .venv/bin/pip install mediapipe numpy
//! ```
//!
//! The script ships next to this crate's manifest and is also looked up in
//! the working directory.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Command, Stdio};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use hand_gesture::{HandLandmarks, Landmark};

// ════════════════════════════════════════════════════════════════════════════
// Wire format
// ════════════════════════════════════════════════════════════════════════════

#[derive(Deserialize, Debug)]
struct LandmarkJson {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Deserialize, Debug)]
struct HandJson {
    handedness: String,
    score: f32,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Deserialize, Debug)]
struct DetectionResult {
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// MediaPipeDetector
// ════════════════════════════════════════════════════════════════════════════

/// Hand landmark detector backed by the MediaPipe subprocess.
pub struct MediaPipeDetector {
    process: Child,
    stdout_reader: BufReader<ChildStdout>,
    min_confidence: f32,
}

impl MediaPipeDetector {
    /// Start the subprocess and wait for its READY handshake.
    pub fn spawn(min_detection_confidence: f32, min_tracking_confidence: f32) -> Result<Self> {
        let script = find_script().context("locating detect_hand.py")?;
        let python = find_python();

        log::info!("starting MediaPipe hand detector: {:?}", script);

        let mut process = Command::new(&python)
            .arg(&script)
            .arg(min_detection_confidence.to_string())
            .arg(min_tracking_confidence.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("starting {:?}", python))?;

        let stdout = process.stdout.take().context("taking detector stdout")?;
        let mut stdout_reader = BufReader::new(stdout);

        let mut ready = String::new();
        stdout_reader
            .read_line(&mut ready)
            .context("waiting for detector handshake")?;
        if ready.trim() != "READY" {
            bail!("detector did not signal READY, got: {:?}", ready.trim());
        }
        log::info!("MediaPipe hand detector ready");

        Ok(MediaPipeDetector {
            process,
            stdout_reader,
            min_confidence: min_detection_confidence,
        })
    }

    /// Detect the first sufficiently-confident hand in an RGB frame.
    ///
    /// Returns `Ok(None)` both when no hand is visible and when the
    /// detector reports a recoverable error for the frame.
    pub fn detect(&mut self, rgb: &[u8], width: u32, height: u32) -> Result<Option<HandLandmarks>> {
        let expected = (width * height * 3) as usize;
        if rgb.len() != expected {
            bail!("frame byte length {} != {}x{}x3", rgb.len(), width, height);
        }

        let stdin = self.process.stdin.as_mut().context("detector stdin gone")?;
        stdin.write_all(&width.to_le_bytes())?;
        stdin.write_all(&height.to_le_bytes())?;
        stdin.write_all(&3u32.to_le_bytes())?;
        stdin.write_all(rgb)?;
        stdin.flush()?;

        let mut response = String::new();
        self.stdout_reader
            .read_line(&mut response)
            .context("reading detector response")?;
        if response.is_empty() {
            bail!("detector subprocess closed its pipe");
        }

        let result: DetectionResult = serde_json::from_str(&response)
            .with_context(|| format!("parsing detector response: {}", response.trim()))?;

        if let Some(error) = result.error {
            log::warn!("detector error: {}", error);
            return Ok(None);
        }

        for hand in result.hands {
            if hand.score < self.min_confidence {
                continue;
            }
            if hand.landmarks.len() != 21 {
                log::warn!("expected 21 landmarks, got {}", hand.landmarks.len());
                continue;
            }
            let mut points = [Landmark::default(); 21];
            for (point, lm) in points.iter_mut().zip(hand.landmarks.iter()) {
                *point = Landmark { x: lm.x, y: lm.y, z: lm.z };
            }
            return Ok(Some(HandLandmarks {
                points,
                confidence: hand.score,
                handedness: hand.handedness,
            }));
        }
        Ok(None)
    }
}

impl Drop for MediaPipeDetector {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Script / interpreter lookup
// ────────────────────────────────────────────────────────────────────────────

fn find_script() -> Result<PathBuf> {
    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("detect_hand.py");
    if bundled.exists() {
        return Ok(bundled);
    }
    let local = std::env::current_dir()?.join("detect_hand.py");
    if local.exists() {
        return Ok(local);
    }
    bail!(
        "detect_hand.py not found (looked in {:?} and the working directory)",
        bundled.parent().unwrap_or_else(|| std::path::Path::new("."))
    );
}

fn find_python() -> PathBuf {
    let venv = std::env::current_dir()
        .map(|d| d.join(".venv/bin/python"))
        .unwrap_or_default();
    if venv.exists() {
        venv
    } else {
        PathBuf::from("python3")
    }
}
