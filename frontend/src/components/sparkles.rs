use greeting_shared::effects::{scatter_sparkles, SPARKLE_COUNT};
use rand::thread_rng;
use yew::prelude::*;

#[function_component(Sparkles)]
pub fn sparkles() -> Html {
    let sparkles = use_state(|| scatter_sparkles(&mut thread_rng(), SPARKLE_COUNT));

    html! {
        <div class="sparkles fixed inset-0 z-0 pointer-events-none" aria-hidden="true">
            { for sparkles.iter().map(|sparkle| html! {
                <div class="sparkle" style={sparkle.style()} />
            }) }
        </div>
    }
}
