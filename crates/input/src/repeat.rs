//! DAS/ARR key repeat for terminal environments.
//!
//! Terminals mostly deliver key presses only, so a quiet-period timeout
//! stands in for the missing release events.
//!
//! Only a few actions benefit from auto-repeat: single-stepping the
//! simulation and adjusting the step interval. Everything else is a one-shot
//! toggle and goes straight through [`crate::map::action_for_key`].

use std::time::Instant;

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{SimAction, REPEAT_ARR_MS, REPEAT_DAS_MS};

/// Actions that repeat while their key is held.
fn repeat_action(code: KeyCode) -> Option<SimAction> {
    match code {
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('.') => Some(SimAction::StepOnce),
        KeyCode::Char(']') => Some(SimAction::SpeedUp),
        KeyCode::Char('[') => Some(SimAction::SlowDown),
        _ => None,
    }
}

/// Tracks the held key for DAS/ARR handling.
#[derive(Debug, Clone)]
pub struct KeyRepeater {
    held: Option<SimAction>,
    last_key_time: Instant,
    das_timer: u32,
    arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

// Without key-up events a single tap would otherwise look held forever; a
// short quiet window ends the hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl KeyRepeater {
    pub fn new() -> Self {
        Self::with_config(REPEAT_DAS_MS, REPEAT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            das_timer: 0,
            arr_accumulator: 0,
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Handle a key press.
    ///
    /// Returns the action to perform immediately, or `None` when the press is
    /// a terminal auto-repeat of the already-held key (the repeater paces
    /// those itself) or the key is not a repeatable one.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<SimAction> {
        let action = repeat_action(code)?;
        self.last_key_time = Instant::now();
        if self.held == Some(action) {
            None
        } else {
            self.held = Some(action);
            self.das_timer = 0;
            self.arr_accumulator = 0;
            Some(action)
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(action) = repeat_action(code) {
            if self.held == Some(action) {
                self.release();
            }
        }
    }

    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<SimAction, 8> {
        let mut actions = ArrayVec::<SimAction, 8>::new();

        // A quiet period counts as a release.
        if self.held.is_some()
            && self.last_key_time.elapsed().as_millis() as u32 > self.key_release_timeout_ms
        {
            self.release();
        }

        if let Some(action) = self.held {
            let prev_das = self.das_timer;
            self.das_timer += elapsed_ms;

            if self.das_timer >= self.das_delay {
                // Only time past the DAS threshold accrues toward repeats.
                self.arr_accumulator += if prev_das < self.das_delay {
                    self.das_timer - self.das_delay
                } else {
                    elapsed_ms
                };
                while self.arr_accumulator >= self.arr_rate {
                    let _ = actions.try_push(action);
                    self.arr_accumulator -= self.arr_rate;
                }
            }
        } else {
            self.das_timer = 0;
            self.arr_accumulator = 0;
        }

        actions
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.last_key_time = Instant::now();
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }

    fn release(&mut self) {
        self.held = None;
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }
}

impl Default for KeyRepeater {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_step_key_repeats_after_das_delay() {
        let mut rep = KeyRepeater::with_config(100, 25);

        assert_eq!(
            rep.handle_key_press(KeyCode::Char('n')),
            Some(SimAction::StepOnce)
        );

        // 99ms held: DAS has not expired.
        let actions = rep.update(99);
        assert!(actions.is_empty());

        // DAS boundary reached, but no excess has accrued toward ARR yet.
        let actions = rep.update(1);
        assert!(actions.is_empty());

        // One ARR interval past DAS: one repeat.
        let actions = rep.update(25);
        assert_eq!(actions.as_slice(), &[SimAction::StepOnce]);

        // And one more per interval after that.
        let actions = rep.update(25);
        assert_eq!(actions.as_slice(), &[SimAction::StepOnce]);
    }

    #[test]
    fn test_holding_swallows_terminal_repeat_presses() {
        let mut rep = KeyRepeater::with_config(100, 25);

        assert_eq!(
            rep.handle_key_press(KeyCode::Char('n')),
            Some(SimAction::StepOnce)
        );
        // The terminal re-sends the press while the key is held down.
        assert_eq!(rep.handle_key_press(KeyCode::Char('n')), None);
        assert_eq!(rep.handle_key_press(KeyCode::Char('N')), None);
    }

    #[test]
    fn test_switching_keys_resets_the_repeat_timers() {
        let mut rep = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert_eq!(
            rep.handle_key_press(KeyCode::Char(']')),
            Some(SimAction::SpeedUp)
        );
        let _ = rep.update(150);

        // Switching to the other speed key fires immediately and restarts DAS.
        assert_eq!(
            rep.handle_key_press(KeyCode::Char('[')),
            Some(SimAction::SlowDown)
        );
        assert!(rep.update(99).is_empty());
        let actions = rep.update(26);
        assert_eq!(actions.as_slice(), &[SimAction::SlowDown]);
    }

    #[test]
    fn test_held_key_auto_releases_after_quiet_timeout() {
        let mut rep = KeyRepeater::with_config(100, 25);
        rep.key_release_timeout_ms = 50;

        assert_eq!(
            rep.handle_key_press(KeyCode::Char('n')),
            Some(SimAction::StepOnce)
        );
        assert_eq!(rep.held, Some(SimAction::StepOnce));

        // Backdate the press so the quiet window has already passed.
        rep.last_key_time = Instant::now() - Duration::from_millis(51);

        let actions = rep.update(0);
        assert!(actions.is_empty());
        assert_eq!(rep.held, None);
    }

    #[test]
    fn test_non_repeat_key_does_not_extend_auto_release_timeout() {
        let mut rep = KeyRepeater::with_config(100, 25);
        rep.key_release_timeout_ms = 50;

        assert_eq!(
            rep.handle_key_press(KeyCode::Char('n')),
            Some(SimAction::StepOnce)
        );

        // Backdate the press, then hit a one-shot key.
        rep.last_key_time = Instant::now() - Duration::from_millis(51);
        assert_eq!(rep.handle_key_press(KeyCode::Char(' ')), None);

        // The stale step key still auto-releases.
        let actions = rep.update(0);
        assert!(actions.is_empty());
        assert_eq!(rep.held, None);
    }

    #[test]
    fn test_explicit_release_stops_repeats() {
        let mut rep = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert_eq!(
            rep.handle_key_press(KeyCode::Char('n')),
            Some(SimAction::StepOnce)
        );
        rep.handle_key_release(KeyCode::Char('n'));

        assert!(rep.update(200).is_empty());
    }

    #[test]
    fn test_default_auto_release_timeout_is_non_zero() {
        let rep = KeyRepeater::new();
        assert!(rep.key_release_timeout_ms() > 0);
    }

    #[test]
    fn test_reset_drops_the_held_key() {
        let mut rep = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert_eq!(
            rep.handle_key_press(KeyCode::Char('n')),
            Some(SimAction::StepOnce)
        );
        assert!(!rep.update(200).is_empty(), "expected repeats before reset");

        rep.reset();
        assert!(rep.update(200).is_empty(), "reset should stop repeats");
    }
}
