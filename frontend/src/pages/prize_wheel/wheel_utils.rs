use greeting_shared::shared_prize_wheel::Prize;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub prize: Option<&'static Prize>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(prize) = props.prize else {
        return html! {};
    };

    html! {
        <div id="wheelResult" class="mt-8 flex flex-col items-center justify-center">
            <div
                class="flex items-center gap-3 px-6 py-4 rounded-xl text-white font-bold text-xl shadow-lg border-2 border-white/60 animate-bounce"
                style={format!("background: {};", prize.color)}
            >
                <span class="text-3xl">{prize.icon}</span>
                <span>{format!("Selamat! Kamu dapat {}", prize.text)}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    html! {
        <button
            id="spinBtn"
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={classes!(styles::BUTTON_PRIMARY, "mt-8")}
        >
            if props.is_spinning {
                <i class="fas fa-spinner fa-spin mr-2"></i>
                {"Berputar..."}
            } else {
                <i class="fas fa-sync-alt mr-2"></i>
                {"Putar!"}
            }
        </button>
    }
}
