use crate::timers::{TimerId, Timers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub name: &'static str,
    pub artist: &'static str,
    pub url: &'static str,
}

pub static PLAYLIST: [Track; 5] = [
    Track { name: "Blue", artist: "Yung Kai", url: "Music/yung kai - blue.mp3" },
    Track { name: "Golden Hour", artist: "JVKE", url: "Music/JVKE - golden hour.mp3" },
    Track {
        name: "BIRDS OF A FEATHER",
        artist: "Billie Eilish",
        url: "Music/Billie Eilish - BIRDS OF A FEATHER.mp3",
    },
    Track { name: "Here With Me", artist: "D4vd", url: "Music/d4vd - Here With Me.mp3" },
    Track {
        name: "FIFTY FIFTY (피프티피프티)",
        artist: "Cupid",
        url: "Music/Cupid - LIVE IN STUDIO FIFTY FIFTY (피프티피프티).mp3",
    },
];

pub const DEFAULT_VOLUME: f64 = 0.5;
pub const AUTOPLAY_UNMUTE_DELAY_MS: u32 = 500;
pub const PROMPT_DISMISS_MS: u32 = 8000;
pub const PROMPT_FADE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Mute,
    Down,
    Up,
}

impl VolumeIcon {
    pub fn for_level(volume: f64, muted: bool) -> Self {
        if muted || volume <= 0.0 {
            Self::Mute
        } else if volume < 0.5 {
            Self::Down
        } else {
            Self::Up
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Mute => "fas fa-volume-mute",
            Self::Down => "fas fa-volume-down",
            Self::Up => "fas fa-volume-up",
        }
    }
}

/// What the audio element should do after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Unmute,
    PromptFade,
    PromptRemove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptState {
    #[default]
    Hidden,
    Visible,
    Fading,
}

/// Looping playlist with the autoplay fallback prompt.
#[derive(Debug, Clone)]
pub struct Player {
    tracks: &'static [Track],
    current: usize,
    is_playing: bool,
    volume: f64,
    muted: bool,
    progress: f64,
    prompt: PromptState,
    prompt_timer: Option<TimerId>,
    autoplay_attempted: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(&PLAYLIST)
    }
}

impl Player {
    pub fn new(tracks: &'static [Track]) -> Self {
        Self {
            tracks,
            current: 0,
            is_playing: false,
            volume: DEFAULT_VOLUME,
            muted: false,
            progress: 0.0,
            prompt: PromptState::Hidden,
            prompt_timer: None,
            autoplay_attempted: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&'static Track> {
        self.tracks.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Playback position in percent of the track.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn prompt(&self) -> PromptState {
        self.prompt
    }

    pub fn volume_icon(&self) -> VolumeIcon {
        VolumeIcon::for_level(self.volume, self.muted)
    }

    /// Autoplay starts muted, which browsers usually allow. The page calls
    /// this once it is visible; only the first call returns true and the
    /// caller should then try to play.
    pub fn begin_autoplay(&mut self) -> bool {
        if self.autoplay_attempted {
            return false;
        }
        self.autoplay_attempted = true;
        self.muted = true;
        true
    }

    pub fn autoplay_started<T: Timers<PlayerEvent>>(&mut self, timers: &mut T) {
        timers.after(AUTOPLAY_UNMUTE_DELAY_MS, PlayerEvent::Unmute);
    }

    /// The browser refused to start playback without a gesture.
    pub fn play_refused<T: Timers<PlayerEvent>>(&mut self, timers: &mut T) {
        if self.prompt != PromptState::Hidden {
            return;
        }
        log::info!("playback refused, asking for a click");
        self.prompt = PromptState::Visible;
        self.prompt_timer = Some(timers.after(PROMPT_DISMISS_MS, PlayerEvent::PromptFade));
    }

    /// The play button inside the prompt.
    pub fn accept_prompt<T: Timers<PlayerEvent>>(&mut self, timers: &mut T) -> PlaybackCommand {
        if let Some(id) = self.prompt_timer.take() {
            timers.cancel(id);
        }
        self.prompt = PromptState::Hidden;
        self.toggle()
    }

    pub fn handle<T: Timers<PlayerEvent>>(&mut self, event: PlayerEvent, timers: &mut T) {
        match event {
            PlayerEvent::Unmute => {
                self.muted = false;
                self.is_playing = true;
            }
            PlayerEvent::PromptFade => {
                self.prompt_timer = None;
                if self.prompt == PromptState::Visible {
                    self.prompt = PromptState::Fading;
                    self.prompt_timer = Some(timers.after(PROMPT_FADE_MS, PlayerEvent::PromptRemove));
                }
            }
            PlayerEvent::PromptRemove => {
                self.prompt_timer = None;
                self.prompt = PromptState::Hidden;
            }
        }
    }

    /// Play/pause button. The playing flag flips even if the browser later
    /// refuses to play; the refusal shows the prompt instead.
    pub fn toggle(&mut self) -> PlaybackCommand {
        let command = if self.is_playing {
            PlaybackCommand::Pause
        } else {
            self.muted = false;
            PlaybackCommand::Play
        };
        self.is_playing = !self.is_playing;
        command
    }

    /// Returns whether the new track should start playing right away.
    pub fn next(&mut self) -> bool {
        self.change_track(1)
    }

    pub fn previous(&mut self) -> bool {
        self.change_track(-1)
    }

    /// The current track finished.
    pub fn track_ended(&mut self) -> bool {
        self.next()
    }

    fn change_track(&mut self, direction: isize) -> bool {
        let len = self.tracks.len() as isize;
        if len > 0 {
            self.current = (self.current as isize + direction).rem_euclid(len) as usize;
        }
        self.progress = 0.0;
        self.is_playing
    }

    /// Slider value in percent.
    pub fn set_volume(&mut self, percent: f64) {
        self.volume = (percent / 100.0).clamp(0.0, 1.0);
    }

    /// Mute button. Returns the value the slider should show.
    pub fn toggle_mute(&mut self) -> f64 {
        self.muted = !self.muted;
        if self.muted {
            0.0
        } else {
            self.volume * 100.0
        }
    }

    pub fn update_progress(&mut self, current_time: f64, duration: f64) {
        if let Some(percent) = progress_percent(current_time, duration) {
            self.progress = percent;
        }
    }
}

/// `None` while the duration is still unknown.
pub fn progress_percent(current_time: f64, duration: f64) -> Option<f64> {
    if duration.is_finite() && duration > 0.0 {
        Some(current_time / duration * 100.0)
    } else {
        None
    }
}

/// Seek target for a click at `fraction` of the progress bar.
pub fn seek_time(fraction: f64, duration: f64) -> Option<f64> {
    if duration.is_finite() && duration > 0.0 {
        Some(fraction.clamp(0.0, 1.0) * duration)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::VirtualTimers;

    #[test]
    fn test_tracks_wrap_around() {
        let mut player = Player::default();
        assert!(!player.previous());
        assert_eq!(player.current_index(), 4);
        assert_eq!(player.current_track().map(|t| t.artist), Some("Cupid"));
        player.next();
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn test_track_end_loops_and_keeps_playing() {
        let mut player = Player::default();
        assert_eq!(player.toggle(), PlaybackCommand::Play);
        player.update_progress(30.0, 120.0);
        assert_eq!(player.progress(), 25.0);

        for _ in 0..PLAYLIST.len() {
            assert!(player.track_ended());
        }
        assert_eq!(player.current_index(), 0);
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn test_toggle_flips_playing() {
        let mut player = Player::default();
        assert!(player.begin_autoplay());
        assert!(player.is_muted());
        assert_eq!(player.toggle(), PlaybackCommand::Play);
        assert!(player.is_playing());
        assert!(!player.is_muted());
        assert_eq!(player.toggle(), PlaybackCommand::Pause);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_autoplay_unmutes_after_delay() {
        let mut player = Player::default();
        let mut timers = VirtualTimers::new();
        assert!(player.begin_autoplay());
        player.autoplay_started(&mut timers);
        assert!(!player.is_playing());

        timers.advance(u64::from(AUTOPLAY_UNMUTE_DELAY_MS), |event, t| player.handle(event, t));
        assert!(player.is_playing());
        assert!(!player.is_muted());
    }

    #[test]
    fn test_autoplay_is_attempted_once() {
        let mut player = Player::default();
        let mut timers = VirtualTimers::new();
        assert!(!player.is_muted());
        assert_eq!(player.prompt(), PromptState::Hidden);

        // Nothing is scheduled until the page is shown and autoplay begins.
        timers.advance(60_000, |event, t| player.handle(event, t));
        assert_eq!(player.prompt(), PromptState::Hidden);

        assert!(player.begin_autoplay());
        assert!(!player.begin_autoplay());
        player.play_refused(&mut timers);
        assert_eq!(player.prompt(), PromptState::Visible);

        // The prompt's dismissal is measured from the refusal, not page load.
        timers.advance(u64::from(PROMPT_DISMISS_MS) - 1, |event, t| player.handle(event, t));
        assert_eq!(player.prompt(), PromptState::Visible);
        timers.advance(1, |event, t| player.handle(event, t));
        assert_eq!(player.prompt(), PromptState::Fading);
    }

    #[test]
    fn test_volume_icon_levels() {
        assert_eq!(VolumeIcon::for_level(0.8, true), VolumeIcon::Mute);
        assert_eq!(VolumeIcon::for_level(0.0, false), VolumeIcon::Mute);
        assert_eq!(VolumeIcon::for_level(0.3, false), VolumeIcon::Down);
        assert_eq!(VolumeIcon::for_level(0.5, false), VolumeIcon::Up);
        assert_eq!(VolumeIcon::Down.class_name(), "fas fa-volume-down");
    }

    #[test]
    fn test_mute_restores_slider() {
        let mut player = Player::default();
        player.set_volume(70.0);
        assert_eq!(player.toggle_mute(), 0.0);
        assert_eq!(player.volume_icon(), VolumeIcon::Mute);
        assert!((player.toggle_mute() - 70.0).abs() < 1e-9);
        assert_eq!(player.volume_icon(), VolumeIcon::Up);
    }

    #[test]
    fn test_prompt_auto_dismisses() {
        let mut player = Player::default();
        let mut timers = VirtualTimers::new();
        player.play_refused(&mut timers);
        player.play_refused(&mut timers);
        assert_eq!(player.prompt(), PromptState::Visible);
        assert_eq!(timers.pending(), 1);

        timers.advance(u64::from(PROMPT_DISMISS_MS), |event, t| player.handle(event, t));
        assert_eq!(player.prompt(), PromptState::Fading);
        timers.advance(u64::from(PROMPT_FADE_MS), |event, t| player.handle(event, t));
        assert_eq!(player.prompt(), PromptState::Hidden);
    }

    #[test]
    fn test_accepting_prompt_plays() {
        let mut player = Player::default();
        let mut timers = VirtualTimers::new();
        player.play_refused(&mut timers);

        assert_eq!(player.accept_prompt(&mut timers), PlaybackCommand::Play);
        assert_eq!(player.prompt(), PromptState::Hidden);
        assert_eq!(timers.cancellations(), 1);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_progress_needs_duration() {
        assert_eq!(progress_percent(10.0, f64::NAN), None);
        assert_eq!(progress_percent(10.0, 0.0), None);
        assert_eq!(progress_percent(10.0, 40.0), Some(25.0));
        assert_eq!(seek_time(0.5, 200.0), Some(100.0));
        assert_eq!(seek_time(1.5, 200.0), Some(200.0));
        assert_eq!(seek_time(0.5, f64::INFINITY), None);
    }
}
