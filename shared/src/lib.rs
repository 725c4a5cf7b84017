pub mod constants;
pub mod effects;
pub mod gallery;
pub mod playlist;
pub mod shared_countdown_gate;
pub mod shared_prize_wheel;
pub mod theme;
pub mod timers;
