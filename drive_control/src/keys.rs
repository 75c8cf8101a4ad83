//! Simulated keyboard output.
//!
//! [`KeyTap`] is the seam between the control logic and the host input
//! system.  The real backend injects OS-level key events through `enigo`;
//! the null backend swallows them for headless or test runs.  All signaling
//! is fire-and-forget: failures are logged, never returned.

use enigo::{Direction, Enigo, Key, Keyboard, Settings};

// ════════════════════════════════════════════════════════════════════════════
// KeyTap trait — unified interface for real and null output
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can hold down and release a named key.
pub trait KeyTap {
    fn press(&mut self, key: &str);
    fn release(&mut self, key: &str);
}

// ════════════════════════════════════════════════════════════════════════════
// Key-name parsing
// ════════════════════════════════════════════════════════════════════════════

/// Map a configured key name to an `enigo` key.
///
/// Named arrows and modifiers are matched case-insensitively; any single
/// character falls through to a unicode key.  Unknown multi-character names
/// yield `None`.
pub fn parse_key(name: &str) -> Option<Key> {
    let lower = name.to_ascii_lowercase();
    let key = match lower.as_str() {
        "right" => Key::RightArrow,
        "left" => Key::LeftArrow,
        "up" => Key::UpArrow,
        "down" => Key::DownArrow,
        "space" => Key::Space,
        "enter" | "return" => Key::Return,
        "shift" => Key::Shift,
        "ctrl" | "control" => Key::Control,
        "alt" => Key::Alt,
        _ => {
            let mut chars = lower.chars();
            let first = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Key::Unicode(first)
        }
    };
    Some(key)
}

// ════════════════════════════════════════════════════════════════════════════
// EnigoTap — real OS key injection
// ════════════════════════════════════════════════════════════════════════════

/// Key output backed by an `enigo` connection to the host input system.
pub struct EnigoTap {
    enigo: Enigo,
}

impl EnigoTap {
    pub fn new() -> Result<Self, String> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| format!("enigo init failed: {:?}", e))?;
        Ok(EnigoTap { enigo })
    }

    fn tap(&mut self, name: &str, direction: Direction) {
        let Some(key) = parse_key(name) else {
            log::warn!("unknown key name {:?} — event dropped", name);
            return;
        };
        if let Err(e) = self.enigo.key(key, direction) {
            log::warn!("key event {:?} {:?} failed: {:?}", name, direction, e);
        }
    }
}

impl KeyTap for EnigoTap {
    fn press(&mut self, key: &str) {
        self.tap(key, Direction::Press);
    }
    fn release(&mut self, key: &str) {
        self.tap(key, Direction::Release);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// NullTap — headless / test backend
// ════════════════════════════════════════════════════════════════════════════

/// Key output that goes nowhere.
pub struct NullTap;

impl KeyTap for NullTap {
    fn press(&mut self, _key: &str) {}
    fn release(&mut self, _key: &str) {}
}

// ════════════════════════════════════════════════════════════════════════════
// open_key_output — pick the best available backend
// ════════════════════════════════════════════════════════════════════════════

/// Open the real key backend, falling back to [`NullTap`] with a warning
/// when the host input system is unavailable (e.g. no display server).
pub fn open_key_output() -> Box<dyn KeyTap> {
    match EnigoTap::new() {
        Ok(tap) => Box::new(tap),
        Err(e) => {
            log::warn!("{} — game keys will not be injected", e);
            Box::new(NullTap)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
