use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

/// Local wall-clock instant at which the lock screen opens by itself.
pub static COUNTDOWN_TARGET: Lazy<NaiveDateTime> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(2025, 10, 22)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("countdown target is a valid calendar date")
});

// Lock screen credentials. This is a themed greeting gate, not access
// control: the values ship in the bundle and are compared verbatim.
pub const GATE_USERNAME: &str = "@rdhgstwn";
pub const GATE_PASSWORD: &str = "Denbagus@180802";

pub const COUNTDOWN_TICK_MS: u32 = 1000;
pub const UNLOCK_FADE_MS: u32 = 1000;
pub const LOGIN_ERROR_CLEAR_MS: u32 = 3000;
pub const SHAKE_MS: u32 = 500;

pub const LOGIN_ERROR: &str = "Username atau password salah!";

pub const THEME_STORAGE_KEY: &str = "theme";

pub const PAGE_LOAD_CONFETTI_DELAY_MS: u32 = 1000;
pub const SECRET_SCROLL_DELAY_MS: u32 = 100;
