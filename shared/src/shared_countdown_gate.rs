use std::fmt;

use chrono::NaiveDateTime;

use crate::constants::{
    COUNTDOWN_TICK_MS, GATE_PASSWORD, GATE_USERNAME, LOGIN_ERROR, LOGIN_ERROR_CLEAR_MS, SHAKE_MS,
    UNLOCK_FADE_MS,
};
use crate::timers::{TimerId, Timers};

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockReason {
    CountdownElapsed,
    Credentials,
}

/// Whole days, hours, minutes and seconds left until the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Zero-padded display fields in days, hours, minutes, seconds order.
    pub fn padded(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d, h, m, s] = self.padded();
        write!(f, "{}:{}:{}:{}", d, h, m, s)
    }
}

/// Time left until `target`, or `None` once `now` has reached it.
pub fn remaining_until(target: NaiveDateTime, now: NaiveDateTime) -> Option<Remaining> {
    let delta = target.signed_duration_since(now).num_milliseconds();
    if delta <= 0 {
        None
    } else {
        Some(Remaining::from_millis(delta))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    Mismatch,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Mismatch => f.write_str(LOGIN_ERROR),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Exact, case-sensitive match against the configured pair.
pub fn check_credentials(username: &str, password: &str) -> Result<(), CredentialError> {
    if username == GATE_USERNAME && password == GATE_PASSWORD {
        Ok(())
    } else {
        Err(CredentialError::Mismatch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    Tick,
    FadeComplete,
    ClearShake,
    ClearError,
}

/// Side effects the page has to perform outside of rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEffect {
    Celebrate,
}

/// The lock screen: counts down to a fixed instant and opens either when
/// it passes or when the right credentials are entered. Once open it never
/// locks again.
#[derive(Debug, Clone)]
pub struct CountdownGate {
    target: NaiveDateTime,
    lock: LockState,
    unlock_reason: Option<UnlockReason>,
    remaining: Remaining,
    tick_timer: Option<TimerId>,
    shake_timer: Option<TimerId>,
    error_timer: Option<TimerId>,
    error: Option<CredentialError>,
    shaking: bool,
    shake_count: u32,
    fading: bool,
    hidden: bool,
}

impl CountdownGate {
    pub fn new(target: NaiveDateTime) -> Self {
        Self {
            target,
            lock: LockState::Locked,
            unlock_reason: None,
            remaining: Remaining::default(),
            tick_timer: None,
            shake_timer: None,
            error_timer: None,
            error: None,
            shaking: false,
            shake_count: 0,
            fading: false,
            hidden: false,
        }
    }

    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    pub fn unlock_reason(&self) -> Option<UnlockReason> {
        self.unlock_reason
    }

    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// Number of shakes started so far. A failure during a running shake
    /// bumps it while `is_shaking` stays true, so the page can restart the
    /// animation.
    pub fn shake_count(&self) -> u32 {
        self.shake_count
    }

    /// True between unlock and the gate being hidden.
    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Arms the periodic tick and runs the first one immediately.
    pub fn start<T: Timers<GateEvent>>(&mut self, now: NaiveDateTime, timers: &mut T) {
        if !self.is_locked() || self.tick_timer.is_some() {
            return;
        }
        self.tick_timer = Some(timers.every(COUNTDOWN_TICK_MS, GateEvent::Tick));
        self.tick(now, timers);
    }

    pub fn handle<T: Timers<GateEvent>>(
        &mut self,
        event: GateEvent,
        now: NaiveDateTime,
        timers: &mut T,
    ) -> Option<GateEffect> {
        match event {
            GateEvent::Tick => {
                self.tick(now, timers);
                None
            }
            GateEvent::FadeComplete => {
                if self.lock == LockState::Unlocked && !self.hidden {
                    self.fading = false;
                    self.hidden = true;
                    log::debug!("lock screen hidden");
                    Some(GateEffect::Celebrate)
                } else {
                    None
                }
            }
            GateEvent::ClearShake => {
                self.shake_timer = None;
                self.shaking = false;
                None
            }
            GateEvent::ClearError => {
                self.error_timer = None;
                self.error = None;
                None
            }
        }
    }

    /// Checks the typed credentials. A mismatch shows the error message and
    /// the shake animation; the gate itself stays locked.
    pub fn submit_credentials<T: Timers<GateEvent>>(
        &mut self,
        username: &str,
        password: &str,
        timers: &mut T,
    ) -> Result<(), CredentialError> {
        if !self.is_locked() {
            return Ok(());
        }

        match check_credentials(username, password) {
            Ok(()) => {
                self.clear_feedback(timers);
                self.unlock(UnlockReason::Credentials, timers);
                Ok(())
            }
            Err(err) => {
                log::debug!("lock screen credentials rejected");
                self.clear_feedback(timers);
                self.error = Some(err.clone());
                self.shaking = true;
                self.shake_count += 1;
                self.shake_timer = Some(timers.after(SHAKE_MS, GateEvent::ClearShake));
                self.error_timer = Some(timers.after(LOGIN_ERROR_CLEAR_MS, GateEvent::ClearError));
                Err(err)
            }
        }
    }

    fn tick<T: Timers<GateEvent>>(&mut self, now: NaiveDateTime, timers: &mut T) {
        if !self.is_locked() {
            return;
        }
        match remaining_until(self.target, now) {
            Some(remaining) => self.remaining = remaining,
            None => {
                self.remaining = Remaining::default();
                self.unlock(UnlockReason::CountdownElapsed, timers);
            }
        }
    }

    fn unlock<T: Timers<GateEvent>>(&mut self, reason: UnlockReason, timers: &mut T) {
        if !self.is_locked() {
            return;
        }
        log::info!("lock screen unlocked: {:?}", reason);
        self.lock = LockState::Unlocked;
        self.unlock_reason = Some(reason);
        if let Some(id) = self.tick_timer.take() {
            timers.cancel(id);
        }
        self.fading = true;
        timers.after(UNLOCK_FADE_MS, GateEvent::FadeComplete);
    }

    fn clear_feedback<T: Timers<GateEvent>>(&mut self, timers: &mut T) {
        if let Some(id) = self.shake_timer.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.error_timer.take() {
            timers.cancel(id);
        }
        self.shaking = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COUNTDOWN_TARGET;
    use crate::timers::VirtualTimers;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap()
    }

    /// Runs the gate against the virtual clock. `start` is the wall time at
    /// virtual time zero, so repeated calls keep moving forward.
    fn drive(
        gate: &mut CountdownGate,
        timers: &mut VirtualTimers<GateEvent>,
        start: NaiveDateTime,
        by_ms: u64,
    ) -> Vec<GateEffect> {
        let mut effects = Vec::new();
        timers.advance(by_ms, |event, t| {
            let now = start + Duration::milliseconds(t.now_ms() as i64);
            effects.extend(gate.handle(event, now, t));
        });
        effects
    }

    #[test]
    fn test_target_matches_calendar_date() {
        assert_eq!(*COUNTDOWN_TARGET, at(2025, 10, 22, 0, 0, 0));
    }

    #[test]
    fn test_two_seconds_before_target() {
        let remaining = remaining_until(at(2025, 10, 22, 0, 0, 0), at(2025, 10, 21, 23, 59, 58));
        let remaining = remaining.unwrap();
        assert_eq!(remaining.to_string(), "00:00:00:02");
        assert_eq!(remaining.padded(), ["00", "00", "00", "02"].map(String::from));
    }

    #[test]
    fn test_remaining_breakdown() {
        let ms = 3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6 * MS_PER_SECOND + 999;
        let remaining = Remaining::from_millis(ms);
        assert_eq!(
            remaining,
            Remaining { days: 3, hours: 4, minutes: 5, seconds: 6 }
        );
        assert_eq!(remaining.to_string(), "03:04:05:06");
        assert_eq!(Remaining::from_millis(120 * MS_PER_DAY).to_string(), "120:00:00:00");
    }

    #[test]
    fn test_no_remaining_at_or_after_target() {
        let target = at(2025, 10, 22, 0, 0, 0);
        assert!(remaining_until(target, target).is_none());
        assert!(remaining_until(target, at(2025, 10, 23, 1, 0, 0)).is_none());
    }

    #[test]
    fn test_start_ticks_immediately_and_every_second() {
        let start = at(2025, 10, 21, 23, 59, 50);
        let mut gate = CountdownGate::new(at(2025, 10, 22, 0, 0, 0));
        let mut timers = VirtualTimers::new();

        gate.start(start, &mut timers);
        assert_eq!(gate.remaining().to_string(), "00:00:00:10");

        drive(&mut gate, &mut timers, start, 3000);
        assert_eq!(gate.remaining().to_string(), "00:00:00:07");
        assert!(gate.is_locked());
    }

    #[test]
    fn test_countdown_keeps_moving_across_steps() {
        let start = at(2025, 10, 21, 23, 59, 50);
        let mut gate = CountdownGate::new(at(2025, 10, 22, 0, 0, 0));
        let mut timers = VirtualTimers::new();
        gate.start(start, &mut timers);

        let mut seen = Vec::new();
        for _ in 0..4 {
            drive(&mut gate, &mut timers, start, 2000);
            seen.push(gate.remaining().seconds);
        }
        assert_eq!(seen, vec![8, 6, 4, 2]);

        drive(&mut gate, &mut timers, start, 2000);
        assert!(!gate.is_locked());
    }

    #[test]
    fn test_countdown_expiry_unlocks_once() {
        let start = at(2025, 10, 21, 23, 59, 58);
        let mut gate = CountdownGate::new(at(2025, 10, 22, 0, 0, 0));
        let mut timers = VirtualTimers::new();
        gate.start(start, &mut timers);

        // Ticks at +1s (1 second left) and +2s (target reached).
        let effects = drive(&mut gate, &mut timers, start, 2000);
        assert!(effects.is_empty());
        assert_eq!(gate.lock_state(), LockState::Unlocked);
        assert_eq!(gate.unlock_reason(), Some(UnlockReason::CountdownElapsed));
        assert_eq!(timers.cancellations(), 1);
        assert!(gate.is_fading());

        // Another tick delivered after unlock changes nothing.
        let effects = gate.handle(GateEvent::Tick, start + Duration::seconds(5), &mut timers);
        assert!(effects.is_none());
        assert_eq!(timers.cancellations(), 1);

        let effects = drive(&mut gate, &mut timers, start, 10_000);
        assert_eq!(effects, vec![GateEffect::Celebrate]);
        assert!(gate.is_hidden());
        assert!(!gate.is_fading());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_start_after_target_unlocks_immediately() {
        let mut gate = CountdownGate::new(at(2025, 10, 22, 0, 0, 0));
        let mut timers = VirtualTimers::new();
        gate.start(at(2026, 1, 1, 0, 0, 0), &mut timers);

        assert!(!gate.is_locked());
        assert_eq!(timers.cancellations(), 1);
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_correct_credentials_unlock() {
        let start = at(2025, 1, 1, 0, 0, 0);
        let mut gate = CountdownGate::new(*COUNTDOWN_TARGET);
        let mut timers = VirtualTimers::new();
        gate.start(start, &mut timers);

        assert!(gate
            .submit_credentials("@rdhgstwn", "Denbagus@180802", &mut timers)
            .is_ok());
        assert_eq!(gate.unlock_reason(), Some(UnlockReason::Credentials));
        assert_eq!(timers.cancellations(), 1);
        assert!(gate.error_message().is_none());

        let effects = drive(&mut gate, &mut timers, start, u64::from(UNLOCK_FADE_MS));
        assert_eq!(effects, vec![GateEffect::Celebrate]);

        // Already open: another submission is a no-op.
        assert!(gate.submit_credentials("x", "y", &mut timers).is_ok());
        assert!(gate.error_message().is_none());
    }

    #[test]
    fn test_wrong_credentials_show_error_that_clears() {
        let start = at(2025, 1, 1, 0, 0, 0);
        let mut gate = CountdownGate::new(*COUNTDOWN_TARGET);
        let mut timers = VirtualTimers::new();
        gate.start(start, &mut timers);

        let err = gate
            .submit_credentials("@rdhgstwn", "denbagus@180802", &mut timers)
            .unwrap_err();
        assert_eq!(err, CredentialError::Mismatch);
        assert!(gate.is_locked());
        assert_eq!(gate.error_message().as_deref(), Some(LOGIN_ERROR));
        assert!(gate.is_shaking());

        drive(&mut gate, &mut timers, start, u64::from(SHAKE_MS));
        assert!(!gate.is_shaking());
        assert!(gate.error_message().is_some());

        drive(&mut gate, &mut timers, start, u64::from(LOGIN_ERROR_CLEAR_MS - SHAKE_MS));
        assert!(gate.error_message().is_none());
        assert!(gate.is_locked());
        assert_eq!(timers.cancellations(), 0);
    }

    #[test]
    fn test_repeated_failure_restarts_error_timer() {
        let start = at(2025, 1, 1, 0, 0, 0);
        let mut gate = CountdownGate::new(*COUNTDOWN_TARGET);
        let mut timers = VirtualTimers::new();

        assert!(gate.submit_credentials("", "", &mut timers).is_err());
        drive(&mut gate, &mut timers, start, 2000);
        assert!(gate.submit_credentials(" @rdhgstwn", "Denbagus@180802", &mut timers).is_err());

        // The first failure's clear deadline passes; the message from the
        // second failure stays up for its own full delay.
        drive(&mut gate, &mut timers, start, 1500);
        assert!(gate.error_message().is_some());
        drive(&mut gate, &mut timers, start, 1500);
        assert!(gate.error_message().is_none());
    }

    #[test]
    fn test_failure_during_shake_starts_a_new_shake() {
        let start = at(2025, 1, 1, 0, 0, 0);
        let mut gate = CountdownGate::new(*COUNTDOWN_TARGET);
        let mut timers = VirtualTimers::new();

        assert!(gate.submit_credentials("a", "b", &mut timers).is_err());
        assert_eq!(gate.shake_count(), 1);
        drive(&mut gate, &mut timers, start, 200);
        assert!(gate.is_shaking());

        assert!(gate.submit_credentials("a", "c", &mut timers).is_err());
        assert!(gate.is_shaking());
        assert_eq!(gate.shake_count(), 2);

        // The first shake's deadline passes; the second runs its full length.
        drive(&mut gate, &mut timers, start, u64::from(SHAKE_MS) - 200);
        assert!(gate.is_shaking());
        drive(&mut gate, &mut timers, start, 200);
        assert!(!gate.is_shaking());
        assert_eq!(gate.shake_count(), 2);
    }

    #[test]
    fn test_check_credentials_is_exact() {
        assert!(check_credentials(GATE_USERNAME, GATE_PASSWORD).is_ok());
        assert!(check_credentials("@RDHGSTWN", GATE_PASSWORD).is_err());
        assert!(check_credentials(GATE_USERNAME, "Denbagus@180802 ").is_err());
        assert!(check_credentials(GATE_PASSWORD, GATE_USERNAME).is_err());
    }
}
