use chrono::{Local, NaiveDateTime};
use greeting_shared::constants::COUNTDOWN_TARGET;
use greeting_shared::shared_countdown_gate::{CountdownGate, GateEffect, GateEvent};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::confetti;
use crate::hooks::use_timers::{use_timers, with_timers};
use crate::styles;

const UNIT_LABELS: [&str; 4] = ["Hari", "Jam", "Menit", "Detik"];

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct LockScreenProps {
    /// Fired once, when the gate has faded out and the page is visible.
    pub on_unlock: Callback<()>,
}

/// Covers the page until the birthday arrives or the right login is typed.
#[function_component(LockScreen)]
pub fn lock_screen(props: &LockScreenProps) -> Html {
    let gate = use_mut_ref(|| CountdownGate::new(*COUNTDOWN_TARGET));
    let force_update = use_force_update();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let timers = {
        let gate = gate.clone();
        let force_update = force_update.clone();
        let on_unlock = props.on_unlock.clone();
        use_timers(move |event: GateEvent, timers| {
            let effect = gate.borrow_mut().handle(event, now(), timers);
            if let Some(GateEffect::Celebrate) = effect {
                confetti::celebrate();
                on_unlock.emit(());
            }
            force_update.force_update();
        })
    };

    {
        let gate = gate.clone();
        let timers = timers.clone();
        let force_update = force_update.clone();
        use_effect_with((), move |_| {
            with_timers(&timers, |t| gate.borrow_mut().start(now(), t));
            force_update.force_update();
            || ()
        });
    }

    let onsubmit = {
        let gate = gate.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = input_value(&username_ref);
            let password = input_value(&password_ref);
            let result = with_timers(&timers, |t| {
                gate.borrow_mut().submit_credentials(&username, &password, t)
            });
            if let Some(Ok(())) = result {
                log::info!("Lock screen opened with credentials");
            }
            force_update.force_update();
        })
    };

    let gate = gate.borrow();
    if gate.is_hidden() {
        return html! {};
    }

    // Two identical animations; switching between them restarts the shake
    // when a new failure lands while the previous one is still running.
    let shake_class = gate.is_shaking().then_some(if gate.shake_count() % 2 == 0 {
        "shake-again"
    } else {
        "shake"
    });

    let remaining = gate.remaining().padded();
    let units = remaining.iter().zip(UNIT_LABELS).map(|(value, label)| {
        html! {
            <div class="flex flex-col items-center w-16 sm:w-20 py-3 rounded-xl bg-white/20">
                <span class="text-3xl sm:text-4xl font-bold text-white">{value.clone()}</span>
                <span class="text-xs uppercase tracking-wide text-pink-100">{label}</span>
            </div>
        }
    });

    html! {
        <div
            id="lockScreen"
            class={classes!(
                "fixed", "inset-0", "z-[3000]", "flex", "items-center", "justify-center",
                "bg-gradient-to-br", "from-pink-400", "to-pink-700", "p-4",
                "transition-opacity", "duration-1000",
                gate.is_fading().then_some("opacity-0"),
            )}
        >
            <div class="w-full max-w-md text-center">
                <div class="text-5xl mb-4">{"🔒"}</div>
                <h1 class="text-2xl sm:text-3xl font-bold text-white mb-2">
                    {"Sabar ya, belum waktunya!"}
                </h1>
                <p class="text-pink-100 mb-6">{"Halaman ini terbuka saat hari ulang tahunmu tiba"}</p>
                <div class="flex justify-center gap-3 mb-8">
                    { for units }
                </div>
                <form
                    {onsubmit}
                    class={classes!(styles::CARD, "text-left", shake_class)}
                >
                    <label class={styles::TEXT_LABEL} for="lockUsername">{"Username"}</label>
                    <input
                        ref={username_ref}
                        id="lockUsername"
                        type="text"
                        autocomplete="off"
                        class={styles::INPUT}
                    />
                    <label class={classes!(styles::TEXT_LABEL, "mt-4")} for="lockPassword">
                        {"Password"}
                    </label>
                    <input
                        ref={password_ref}
                        id="lockPassword"
                        type="password"
                        class={styles::INPUT}
                    />
                    {
                        if let Some(message) = gate.error_message() {
                            html! { <p class={classes!(styles::TEXT_ERROR, "mt-3")}>{message}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "w-full", "mt-6")}>
                        <i class="fas fa-unlock mr-2"></i>
                        {"Buka"}
                    </button>
                </form>
            </div>
        </div>
    }
}
