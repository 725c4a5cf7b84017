pub mod floating_hearts;
pub mod gallery;
pub mod lock_screen;
pub mod music_player;
pub mod secret_message;
pub mod sparkles;
