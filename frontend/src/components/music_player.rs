use std::cell::RefCell;
use std::rc::Rc;

use greeting_shared::playlist::{seek_time, DEFAULT_VOLUME, PlaybackCommand, Player, PlayerEvent, PromptState};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::hooks::use_timers::{use_timers, with_timers, TimersHandle};
use crate::styles;

fn apply_output(audio_ref: &NodeRef, player: &Player) {
    if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
        audio.set_volume(player.volume());
        audio.set_muted(player.is_muted());
    }
}

/// Everything a player control needs to drive the audio element.
#[derive(Clone)]
struct Deck {
    player: Rc<RefCell<Player>>,
    audio_ref: NodeRef,
    timers: TimersHandle<PlayerEvent>,
    redraw: UseForceUpdateHandle,
}

impl Deck {
    fn audio(&self) -> Option<HtmlAudioElement> {
        self.audio_ref.cast::<HtmlAudioElement>()
    }

    fn load_current(&self) {
        if let (Some(audio), Some(track)) = (self.audio(), self.player.borrow().current_track()) {
            audio.set_src(&get_asset_url(track.url));
        }
    }

    /// Calls `play()` and reports whether the browser allowed it.
    fn start(&self, on_result: impl FnOnce(&Deck, bool) + 'static) {
        let Some(audio) = self.audio() else {
            return;
        };
        match audio.play() {
            Ok(promise) => {
                let deck = self.clone();
                spawn_local(async move {
                    let allowed = match JsFuture::from(promise).await {
                        Ok(_) => true,
                        Err(e) => {
                            log::info!("Playback refused: {:?}", e);
                            false
                        }
                    };
                    on_result(&deck, allowed);
                });
            }
            Err(e) => {
                log::warn!("Failed to start playback: {:?}", e);
                on_result(self, false);
            }
        }
    }

    fn refused(&self) {
        with_timers(&self.timers, |t| self.player.borrow_mut().play_refused(t));
        self.redraw.force_update();
    }

    fn autoplay(&self) {
        if !self.player.borrow_mut().begin_autoplay() {
            return;
        }
        self.load_current();
        apply_output(&self.audio_ref, &self.player.borrow());
        self.start(|deck, allowed| {
            if allowed {
                with_timers(&deck.timers, |t| deck.player.borrow_mut().autoplay_started(t));
            } else {
                deck.refused();
            }
        });
    }

    fn run(&self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::Play => {
                apply_output(&self.audio_ref, &self.player.borrow());
                self.start(|deck, allowed| {
                    if !allowed {
                        deck.refused();
                    }
                });
            }
            PlaybackCommand::Pause => {
                if let Some(audio) = self.audio() {
                    if let Err(e) = audio.pause() {
                        log::warn!("Failed to pause: {:?}", e);
                    }
                }
            }
        }
        self.redraw.force_update();
    }

    fn track_changed(&self, keep_playing: bool) {
        self.load_current();
        if keep_playing {
            self.run(PlaybackCommand::Play);
        } else {
            self.redraw.force_update();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MusicPlayerProps {
    /// Autoplay waits until the page is actually visible.
    pub active: bool,
}

#[function_component(MusicPlayer)]
pub fn music_player(props: &MusicPlayerProps) -> Html {
    let player = use_mut_ref(Player::default);
    let audio_ref = use_node_ref();
    let progress_ref = use_node_ref();
    let redraw = use_force_update();
    // Shown slider position; muting parks it at zero without losing the volume.
    let slider = use_state(|| DEFAULT_VOLUME * 100.0);

    let timers = {
        let player = player.clone();
        let audio_ref = audio_ref.clone();
        let redraw = redraw.clone();
        use_timers(move |event: PlayerEvent, timers| {
            player.borrow_mut().handle(event, timers);
            apply_output(&audio_ref, &player.borrow());
            redraw.force_update();
        })
    };

    let deck = Deck {
        player: player.clone(),
        audio_ref: audio_ref.clone(),
        timers,
        redraw,
    };

    {
        let deck = deck.clone();
        use_effect_with(props.active, move |active| {
            if *active {
                deck.autoplay();
            }
            || ()
        });
    }

    let on_toggle = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| {
            let command = deck.player.borrow_mut().toggle();
            deck.run(command);
        })
    };

    let on_next = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| {
            let keep_playing = deck.player.borrow_mut().next();
            deck.track_changed(keep_playing);
        })
    };

    let on_previous = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| {
            let keep_playing = deck.player.borrow_mut().previous();
            deck.track_changed(keep_playing);
        })
    };

    let on_ended = {
        let deck = deck.clone();
        Callback::from(move |_: Event| {
            let keep_playing = deck.player.borrow_mut().track_ended();
            deck.track_changed(keep_playing);
        })
    };

    let on_time_update = {
        let deck = deck.clone();
        Callback::from(move |_: Event| {
            if let Some(audio) = deck.audio() {
                deck.player
                    .borrow_mut()
                    .update_progress(audio.current_time(), audio.duration());
                deck.redraw.force_update();
            }
        })
    };

    let on_seek = {
        let deck = deck.clone();
        let progress_ref = progress_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let (Some(audio), Some(bar)) = (deck.audio(), progress_ref.cast::<HtmlElement>()) else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            if rect.width() <= 0.0 {
                return;
            }
            let fraction = (f64::from(e.client_x()) - rect.left()) / rect.width();
            if let Some(time) = seek_time(fraction, audio.duration()) {
                audio.set_current_time(time);
            }
        })
    };

    let on_volume = {
        let deck = deck.clone();
        let slider = slider.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().parse::<f64>() {
                Ok(percent) => {
                    slider.set(percent);
                    deck.player.borrow_mut().set_volume(percent);
                    apply_output(&deck.audio_ref, &deck.player.borrow());
                    deck.redraw.force_update();
                }
                Err(e) => log::warn!("Bad volume value {:?}: {}", input.value(), e),
            }
        })
    };

    let on_mute = {
        let deck = deck.clone();
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| {
            slider.set(deck.player.borrow_mut().toggle_mute());
            apply_output(&deck.audio_ref, &deck.player.borrow());
            deck.redraw.force_update();
        })
    };

    let on_accept_prompt = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| {
            let command = with_timers(&deck.timers, |t| deck.player.borrow_mut().accept_prompt(t));
            if let Some(command) = command {
                deck.run(command);
            }
        })
    };

    let player = player.borrow();
    let (track_name, track_artist) = player
        .current_track()
        .map(|track| (track.name, track.artist))
        .unwrap_or(("", ""));
    let play_icon = if player.is_playing() { "fas fa-pause" } else { "fas fa-play" };

    let prompt = match player.prompt() {
        PromptState::Hidden => html! {},
        state => html! {
            <div
                class={classes!(
                    "music-prompt", "fixed", "top-1/2", "left-1/2", "z-[2000]", "text-center",
                    "bg-white", "dark:bg-gray-800", "p-8", "rounded-2xl",
                    "shadow-[0_20px_60px_rgba(255,105,180,0.3)]",
                    if state == PromptState::Fading { "prompt-fade-out" } else { "prompt-scale-in" },
                )}
            >
                <div class="text-5xl text-pink-500 mb-4">{"🎵"}</div>
                <p class={classes!(styles::TEXT_BODY, "mb-5", "text-lg")}>
                    {"Klik untuk memutar playlist ulang tahun"}
                </p>
                <button onclick={on_accept_prompt} class={styles::BUTTON_PRIMARY}>
                    {"Putar Musik"}
                </button>
            </div>
        },
    };

    html! {
        <section id="music" class={styles::SECTION}>
            <h2 class={styles::TEXT_H2}>{"Playlist Spesial"}</h2>
            <div class={classes!(styles::CARD, "max-w-md", "mx-auto")}>
                <audio
                    ref={audio_ref}
                    id="audioPlayer"
                    preload="auto"
                    onended={on_ended}
                    ontimeupdate={on_time_update}
                />
                <div class="text-center mb-4">
                    <p id="trackName" class="text-xl font-semibold text-pink-600 dark:text-pink-300">
                        {track_name}
                    </p>
                    <p id="trackArtist" class={styles::TEXT_SMALL}>{track_artist}</p>
                </div>
                <div
                    ref={progress_ref}
                    onclick={on_seek}
                    class="h-2 w-full rounded-full bg-pink-100 dark:bg-gray-700 cursor-pointer overflow-hidden"
                >
                    <div
                        id="progress"
                        class="h-full bg-gradient-to-r from-pink-400 to-pink-600"
                        style={format!("width: {:.2}%;", player.progress())}
                    />
                </div>
                <div class="flex items-center justify-center gap-4 mt-6">
                    <button onclick={on_previous} class={styles::BUTTON_ICON} aria-label="Lagu sebelumnya">
                        <i class="fas fa-backward"></i>
                    </button>
                    <button onclick={on_toggle} class={styles::BUTTON_ROUND} aria-label="Putar atau jeda">
                        <i class={play_icon}></i>
                    </button>
                    <button onclick={on_next} class={styles::BUTTON_ICON} aria-label="Lagu berikutnya">
                        <i class="fas fa-forward"></i>
                    </button>
                </div>
                <div class="flex items-center gap-3 mt-6">
                    <button onclick={on_mute} class={styles::BUTTON_ICON} aria-label="Bisukan">
                        <i class={player.volume_icon().class_name()}></i>
                    </button>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        value={format!("{}", slider.round())}
                        oninput={on_volume}
                        class="w-full accent-pink-500"
                    />
                </div>
            </div>
            { prompt }
        </section>
    }
}
