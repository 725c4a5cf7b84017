use gloo_timers::callback::Timeout;
use greeting_shared::constants::SECRET_SCROLL_DELAY_MS;
use web_sys::ScrollLogicalPosition;
use yew::prelude::*;

use crate::base::scroll_to_element;
use crate::confetti;
use crate::styles;

const SECRET_ID: &str = "secret";

#[function_component(SecretMessage)]
pub fn secret_message() -> Html {
    let revealed = use_state(|| false);

    let onclick = {
        let revealed = revealed.clone();
        Callback::from(move |_: MouseEvent| {
            revealed.set(true);
            confetti::celebrate();
            // Give the message a frame to render before scrolling to it.
            Timeout::new(SECRET_SCROLL_DELAY_MS, || {
                scroll_to_element(SECRET_ID, ScrollLogicalPosition::Center);
            })
            .forget();
        })
    };

    html! {
        <section id="message" class={classes!(styles::SECTION, "text-center")}>
            <h2 class={styles::TEXT_H2}>{"Ada Pesan Rahasia"}</h2>
            <button {onclick} class={styles::BUTTON_PRIMARY}>
                <i class="fas fa-envelope-open-text mr-2"></i>
                {"Buka Pesan"}
            </button>
            if *revealed {
                <div id={SECRET_ID} class={classes!(styles::CARD, "mt-8", "max-w-2xl", "mx-auto", "reveal-in")}>
                    <p class="text-4xl mb-4">{"💌"}</p>
                    <p class={classes!(styles::TEXT_BODY, "text-lg", "leading-relaxed")}>
                        {"Selamat ulang tahun, sayang. Terima kasih sudah selalu ada dan \
                          membuat hari-hariku jauh lebih indah. Semoga tahun ini membawa \
                          banyak tawa dan mimpi yang satu per satu jadi nyata."}
                    </p>
                    <p class="mt-6 text-pink-600 dark:text-pink-300 font-semibold">
                        {"Aku sayang kamu ❤"}
                    </p>
                </div>
            }
        </section>
    }
}
