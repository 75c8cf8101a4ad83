//! Software-rendered preview window using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ ┌─ instructions (toggle with I) ──┐         │
//! │ │ open hand = gas …               │         │
//! │ └─────────────────────────────────┘         │
//! │                                             │
//! │            camera frame + hand skeleton     │
//! │                                             │
//! ├─────────────────────────────────────────────┤
//! │ FPS: 29.7   Gesture: Gas (5 fingers)   GAS  │  ← status bar
//! └─────────────────────────────────────────────┘
//! ```

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use drive_control::ControlState;
use hand_gesture::landmarks::CONNECTIONS;
use hand_gesture::HandLandmarks;

use crate::config::AppConfig;
use crate::source::{Frame, SimCommand};

// ════════════════════════════════════════════════════════════════════════════
// Drawing constants
// ════════════════════════════════════════════════════════════════════════════

const STATUS_BG: u32 = 0x00101010;
const SKELETON_COLOR: u32 = 0x0033CC66;
const JOINT_COLOR: u32 = 0x00DD4444;
const OVERLAY_TITLE: u32 = 0x00FFD700;
const TEXT_SCALE: usize = 2;

// ════════════════════════════════════════════════════════════════════════════
// WindowInput
// ════════════════════════════════════════════════════════════════════════════

/// One frame's worth of polled application keyboard input.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowInput {
    pub quit: bool,
    pub toggle_instructions: bool,
    pub sim: Option<SimCommand>,
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf: Vec<u32>,
    frame_w: usize,
    frame_h: usize,
    status_h: usize,
    cfg: AppConfig,
}

impl Visualizer {
    /// Open the preview window sized to the negotiated frame plus the
    /// status bar.
    pub fn new(frame_w: usize, frame_h: usize, cfg: &AppConfig) -> Result<Self, String> {
        let win_h = frame_h + cfg.status_bar_height;
        let mut window = Window::new(
            "Hand Drive — gesture game controller",
            frame_w,
            win_h,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        // The app loop paces itself to the target FPS.
        window.limit_update_rate(None);

        Ok(Visualizer {
            window,
            buf: vec![0; frame_w * win_h],
            frame_w,
            frame_h,
            status_h: cfg.status_bar_height,
            cfg: cfg.clone(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Poll application keys (distinct from the simulated game keys).
    pub fn poll_input(&mut self) -> WindowInput {
        let mut input = WindowInput::default();
        if !self.window.is_open() || self.window.is_key_pressed(Key::Q, KeyRepeat::No) {
            input.quit = true;
            return input;
        }
        if self.window.is_key_pressed(Key::I, KeyRepeat::No) {
            input.toggle_instructions = true;
        }
        if self.window.is_key_pressed(Key::H, KeyRepeat::No) {
            input.sim = Some(SimCommand::ToggleHand);
        }
        const DIGITS: [Key; 6] = [Key::Key0, Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5];
        for (n, key) in DIGITS.iter().enumerate() {
            if self.window.is_key_pressed(*key, KeyRepeat::No) {
                input.sim = Some(SimCommand::ShowFingers(n as u8));
            }
        }
        input
    }

    /// Render one frame: camera image, hand skeleton, instruction overlay,
    /// and the status bar.
    pub fn render(
        &mut self,
        frame: &Frame,
        gesture_label: &str,
        finger_count: u8,
        state: ControlState,
        fps: f32,
        show_instructions: bool,
    ) {
        self.blit_frame(frame);

        if let Some(hand) = &frame.hand {
            self.draw_skeleton(hand);
        }
        if show_instructions {
            self.draw_instructions();
        }
        self.draw_status_bar(gesture_label, finger_count, state, fps);

        let w = self.frame_w;
        let h = self.frame_h + self.status_h;
        self.window.update_with_buffer(&self.buf, w, h).ok();
    }

    // ── Frame blit ────────────────────────────────────────────────────────

    fn blit_frame(&mut self, frame: &Frame) {
        let copy_w = frame.width.min(self.frame_w);
        for row in 0..frame.height.min(self.frame_h) {
            let src = &frame.pixels[row * frame.width..row * frame.width + copy_w];
            let dst = row * self.frame_w;
            self.buf[dst..dst + copy_w].copy_from_slice(src);
        }
    }

    // ── Hand skeleton ─────────────────────────────────────────────────────

    fn draw_skeleton(&mut self, hand: &HandLandmarks) {
        let px = hand.to_pixels(self.frame_w as f32, self.frame_h as f32);

        for (a, b) in CONNECTIONS {
            self.draw_line(px[a], px[b], SKELETON_COLOR);
        }
        for &(x, y) in &px {
            self.fill_rect(
                (x as isize - 2).max(0) as usize,
                (y as isize - 2).max(0) as usize,
                4,
                4,
                JOINT_COLOR,
            );
        }
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: u32) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 + dx * t;
            let y = from.1 + dy * t;
            if x >= 0.0 && y >= 0.0 {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
    }

    // ── Instruction overlay ───────────────────────────────────────────────

    fn draw_instructions(&mut self) {
        let mut lines = vec![
            format!("open hand (5 fingers) = gas ({})", self.cfg.gas_key),
            format!("closed fist (0 fingers) = brake ({})", self.cfg.brake_key),
            "other gestures = no action".to_string(),
            "q quit, i toggle this box".to_string(),
        ];
        if cfg!(not(feature = "camera")) {
            lines.push("sim: 0-5 pose fingers, h hide hand".to_string());
        }

        let line_h = 6 * TEXT_SCALE + 4;
        let box_w = 440.min(self.frame_w.saturating_sub(20));
        let box_h = (lines.len() + 1) * line_h + 16;
        self.shade_rect(10, 10, box_w, box_h, 0.7);

        self.draw_label("CONTROLS:", 20, 18, OVERLAY_TITLE, TEXT_SCALE);
        for (i, line) in lines.iter().enumerate() {
            let y = 18 + (i + 1) * line_h;
            self.draw_label(line, 20, y, self.cfg.text_color, TEXT_SCALE);
        }
    }

    /// Blend a rectangle toward black by `alpha` (0.0 = untouched).
    fn shade_rect(&mut self, x: usize, y: usize, w: usize, h: usize, alpha: f32) {
        let keep = 1.0 - alpha.clamp(0.0, 1.0);
        let win_h = self.frame_h + self.status_h;
        for row in y..(y + h).min(win_h) {
            for col in x..(x + w).min(self.frame_w) {
                let c = self.buf[row * self.frame_w + col];
                let r = ((c >> 16 & 0xFF) as f32 * keep) as u32;
                let g = ((c >> 8 & 0xFF) as f32 * keep) as u32;
                let b = ((c & 0xFF) as f32 * keep) as u32;
                self.buf[row * self.frame_w + col] = (r << 16) | (g << 8) | b;
            }
        }
    }

    // ── Status bar ────────────────────────────────────────────────────────

    fn draw_status_bar(&mut self, gesture_label: &str, finger_count: u8, state: ControlState, fps: f32) {
        let top = self.frame_h;
        self.fill_rect(0, top, self.frame_w, self.status_h, STATUS_BG);

        self.draw_label(
            &format!("FPS: {:.1}", fps),
            10,
            top + 12,
            self.cfg.text_color,
            TEXT_SCALE,
        );
        self.draw_label(
            &format!("Gesture: {} ({} fingers)", gesture_label, finger_count),
            10,
            top + 44,
            self.cfg.text_color,
            TEXT_SCALE,
        );

        let state_text = match state {
            ControlState::Gas => format!("GAS ({})", self.cfg.gas_key),
            ControlState::Brake => format!("BRAKE ({})", self.cfg.brake_key),
            ControlState::Neutral => "NEUTRAL".to_string(),
        };
        let text_w = state_text.len() * 4 * TEXT_SCALE;
        let x = self.frame_w.saturating_sub(text_w + 12);
        self.draw_label(&state_text, x, top + 44, self.cfg.state_color(state), TEXT_SCALE);
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let win_h = self.frame_h + self.status_h;
        for row in y..(y + h).min(win_h) {
            for col in x..(x + w).min(self.frame_w) {
                self.buf[row * self.frame_w + col] = color;
            }
        }
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.frame_w && y < self.frame_h + self.status_h {
            self.buf[y * self.frame_w + x] = color;
        }
    }

    /// Minimal bitmap font — 3×5 glyphs scaled up by an integer factor.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32, scale: usize) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect(cx + col * scale, y + row * scale, scale, scale, color);
                    }
                }
            }
            cx += 4 * scale; // 3 wide + 1 gap
            if cx + 4 * scale > self.frame_w {
                break;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_character_has_a_glyph() {
        // Characters that appear in status-bar and overlay strings must not
        // fall through to the fallback dot.
        let fallback = char_glyph('\u{7f}');
        for ch in "FPS: 29.1 Gesture: Fingers: 5 GAS (right) BRAKE NEUTRAL q-h,=".chars() {
            if ch == ' ' {
                continue;
            }
            assert_ne!(char_glyph(ch), fallback, "missing glyph for {:?}", ch);
        }
    }

    #[test]
    fn glyphs_fit_three_columns() {
        for ch in "abcdefghijklmnopqrstuvwxyz0123456789()/-.,:=+".chars() {
            for row in char_glyph(ch) {
                assert!(row <= 0b111, "glyph row out of range for {:?}", ch);
            }
        }
    }
}
