pub mod use_theme;
pub mod use_timers;
