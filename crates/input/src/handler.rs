//! Held-key state for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key counts as held until it is released or until no press/repeat for it
//! has been seen for `key_release_timeout_ms`.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::action_for_key;
use crate::types::{Action, InputProvider};

// Long enough to bridge the gap between OS key-repeat events so a held key
// does not flicker between pressed and released.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 200;

/// Pressed/released state for each [`Action`].
#[derive(Debug, Clone)]
pub struct KeyState {
    /// Timestamp (ms) of the last press/repeat per action, `None` when released.
    held: [Option<u64>; 4],
    key_release_timeout_ms: Option<u64>,
}

fn slot(action: Action) -> usize {
    match action {
        Action::RotateLeft => 0,
        Action::RotateRight => 1,
        Action::MoveForward => 2,
        Action::MoveBackward => 3,
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            held: [None; 4],
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// Override the release timeout; `None` trusts the terminal's release events.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u64> {
        self.key_release_timeout_ms
    }

    pub fn press(&mut self, action: Action, now_ms: u64) {
        self.held[slot(action)] = Some(now_ms);
    }

    pub fn release(&mut self, action: Action) {
        self.held[slot(action)] = None;
    }

    /// Feed a terminal key event. Returns the action it affected, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent, now_ms: u64) -> Option<Action> {
        let action = action_for_key(key.code)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(action, now_ms),
            KeyEventKind::Release => self.release(action),
        }
        Some(action)
    }

    /// Auto-release keys whose last press is older than the timeout.
    pub fn expire(&mut self, now_ms: u64) {
        let Some(timeout) = self.key_release_timeout_ms else {
            return;
        };
        for held in &mut self.held {
            if let Some(at) = *held {
                if now_ms.saturating_sub(at) > timeout {
                    *held = None;
                }
            }
        }
    }

    /// Currently held actions, in [`Action::ALL`] order.
    pub fn pressed(&self) -> ArrayVec<Action, 4> {
        Action::ALL
            .into_iter()
            .filter(|&action| self.is_pressed(action))
            .collect()
    }

    pub fn reset(&mut self) {
        self.held = [None; 4];
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for KeyState {
    fn is_pressed(&self, action: Action) -> bool {
        self.held[slot(action)].is_some()
    }
}
