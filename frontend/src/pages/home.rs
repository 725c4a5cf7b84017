use gloo_timers::callback::Timeout;
use greeting_shared::constants::PAGE_LOAD_CONFETTI_DELAY_MS;
use yew::prelude::*;

use crate::base::Base;
use crate::components::{
    gallery::Gallery, lock_screen::LockScreen, music_player::MusicPlayer,
    secret_message::SecretMessage,
};
use crate::confetti;
use crate::pages::prize_wheel::PrizeWheel;
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    // The lock screen covers everything on load, so the page counts as
    // loaded once it has faded away.
    let unlocked = use_state(|| false);

    let on_unlock = {
        let unlocked = unlocked.clone();
        Callback::from(move |_: ()| unlocked.set(true))
    };

    use_effect_with(*unlocked, |unlocked| {
        let timeout = unlocked
            .then(|| Timeout::new(PAGE_LOAD_CONFETTI_DELAY_MS, confetti::celebrate));
        move || drop(timeout)
    });

    html! {
        <Base>
            <LockScreen {on_unlock} />
            <header class={classes!(styles::SECTION, "min-h-[80vh]", "flex", "flex-col", "items-center", "justify-center", "text-center")}>
                <p class="text-6xl mb-6 animate-bounce">{"🎂"}</p>
                <h1 class={styles::TEXT_H1}>{"Selamat Ulang Tahun!"}</h1>
                <p class={classes!(styles::TEXT_BODY, "mt-4", "text-lg", "max-w-xl")}>
                    {"Hari ini tentang kamu. Scroll ke bawah, ada kejutan kecil yang menunggu."}
                </p>
            </header>
            <Gallery />
            <PrizeWheel />
            <MusicPlayer active={*unlocked} />
            <SecretMessage />
        </Base>
    }
}
