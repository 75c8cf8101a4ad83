//! The main application loop.
//!
//! Single-threaded, frame-at-a-time: acquire → classify → name → control →
//! render → poll → sleep.  All state lives on this call chain; the only
//! suspension point is the frame-pacing sleep.  Whatever way the loop exits,
//! teardown releases both game keys before the camera and window go down.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};

use drive_control::keys::open_key_output;
use drive_control::GameController;
use hand_gesture::{count_fingers, Gesture};

use crate::config::AppConfig;
use crate::fps::FpsCounter;
use crate::source::HandSource;
use crate::visualizer::Visualizer;

/// Run the full application.  Entry point called from `main.rs`.
pub fn run(cfg: AppConfig) -> Result<()> {
    // ── Frame source (webcam with `camera`, simulator otherwise) ──────────
    #[cfg(feature = "camera")]
    let mut source = crate::camera::CameraSource::open(&cfg).context("opening camera")?;
    #[cfg(not(feature = "camera"))]
    let mut source = crate::source::SimSource::new(&cfg);

    // Negotiated resolution drives all layout downstream.
    let (width, height) = source.dimensions();
    log::info!("{} source at {}x{}", source.mode_label(), width, height);

    let mut vis = Visualizer::new(width, height, &cfg)
        .map_err(|e| anyhow!("opening preview window: {}", e))?;

    let mut controller = GameController::new(
        open_key_output(),
        &cfg.gas_key,
        &cfg.brake_key,
        cfg.command_cooldown,
    );

    // Keys must not stay stuck pressed, whether the loop ended cleanly or
    // bailed on a frame error.
    let result = drive_loop(&cfg, &mut source, &mut vis, &mut controller);
    controller.cleanup();
    log::info!("released game keys, shutting down");
    result
}

// ════════════════════════════════════════════════════════════════════════════
// drive_loop — one iteration per frame
// ════════════════════════════════════════════════════════════════════════════

fn drive_loop(
    cfg: &AppConfig,
    source: &mut dyn HandSource,
    vis: &mut Visualizer,
    controller: &mut GameController,
) -> Result<()> {
    let frame_budget = Duration::from_secs_f32(1.0 / cfg.fps_target.max(1) as f32);
    let mut fps = FpsCounter::new();
    let mut show_instructions = true;

    while vis.is_open() {
        let started = Instant::now();

        // 1. Acquire; a read failure ends the session (no retries).
        let frame = source.next_frame().context("reading frame")?;

        // 2. Classify the first detected hand.  No hand counts as zero
        //    fingers downstream, same as a closed fist.
        let (finger_count, gesture_label) = match &frame.hand {
            Some(hand) => {
                let (count, states) = count_fingers(hand);
                (count, Gesture::from_fingers(count, &states).label())
            }
            None => (0, "No hand detected".to_string()),
        };

        // 3. Control (cooldown-gated inside).
        let state = controller.control(finger_count);

        // 4. Render.
        let smoothed_fps = fps.tick();
        vis.render(
            &frame,
            &gesture_label,
            finger_count,
            state,
            smoothed_fps,
            show_instructions,
        );

        // 5. Application input.
        let input = vis.poll_input();
        if input.quit {
            log::info!("quit requested");
            break;
        }
        if input.toggle_instructions {
            show_instructions = !show_instructions;
        }
        if let Some(cmd) = input.sim {
            source.handle(cmd);
        }

        // 6. Pace to the target frame rate.
        if let Some(rest) = frame_budget.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SimCommand, SimSource};
    use drive_control::{ControlState, NullTap};

    fn controller(cfg: &AppConfig) -> GameController {
        GameController::new(
            Box::new(NullTap),
            &cfg.gas_key,
            &cfg.brake_key,
            cfg.command_cooldown,
        )
    }

    #[test]
    fn sim_pipeline_walks_the_expected_states() {
        // Full pipeline: sim poses through the classifier into the
        // controller, with commands spaced one cooldown apart.
        let cfg = AppConfig::default();
        let mut source = SimSource::new(&cfg);
        let mut gc = controller(&cfg);
        let t0 = Instant::now();

        let mut states = Vec::new();
        for (i, n) in [5u8, 5, 0, 2, 3].into_iter().enumerate() {
            source.handle(SimCommand::ShowFingers(n));
            let frame = source.next_frame().unwrap();
            let hand = frame.hand.expect("sim hand visible");
            let (count, _) = count_fingers(&hand);
            states.push(gc.control_at(count, t0 + cfg.command_cooldown * (i as u32 + 1)));
        }
        assert_eq!(
            states,
            [
                ControlState::Gas,
                ControlState::Gas,
                ControlState::Brake,
                ControlState::Neutral,
                ControlState::Neutral,
            ]
        );
    }

    #[test]
    fn missing_hand_counts_as_fist_and_brakes() {
        let cfg = AppConfig::default();
        let mut source = SimSource::new(&cfg);
        let mut gc = controller(&cfg);

        source.handle(SimCommand::ToggleHand);
        let frame = source.next_frame().unwrap();
        assert!(frame.hand.is_none());

        // No hand → count 0, same path the loop takes.
        let state = gc.control_at(0, Instant::now());
        assert_eq!(state, ControlState::Brake);
    }
}
