use greeting_shared::effects::{FloatingHeart, HEART_INTERVAL_MS, HEART_LIFETIME_MS};
use greeting_shared::timers::Timers;
use rand::thread_rng;
use yew::prelude::*;

use crate::hooks::use_timers::{use_timers, with_timers};

#[derive(Debug, Clone, Copy)]
enum HeartEvent {
    Spawn,
    Expire(u64),
}

#[function_component(FloatingHearts)]
pub fn floating_hearts() -> Html {
    let hearts = use_mut_ref(Vec::<FloatingHeart>::new);
    let next_id = use_mut_ref(|| 0u64);
    let force_update = use_force_update();

    let timers = {
        let hearts = hearts.clone();
        let force_update = force_update.clone();
        use_timers(move |event: HeartEvent, timers| {
            match event {
                HeartEvent::Spawn => {
                    let id = {
                        let mut next_id = next_id.borrow_mut();
                        *next_id += 1;
                        *next_id
                    };
                    hearts
                        .borrow_mut()
                        .push(FloatingHeart::random(id, &mut thread_rng()));
                    timers.after(HEART_LIFETIME_MS, HeartEvent::Expire(id));
                }
                HeartEvent::Expire(id) => hearts.borrow_mut().retain(|heart| heart.id != id),
            }
            force_update.force_update();
        })
    };

    use_effect_with((), move |_| {
        with_timers(&timers, |t| t.every(HEART_INTERVAL_MS, HeartEvent::Spawn));
        || ()
    });

    let hearts = hearts.borrow();
    html! {
        <div aria-hidden="true">
            { for hearts.iter().map(|heart| html! {
                <div key={heart.id} style={heart.style()}>{"❤"}</div>
            }) }
        </div>
    }
}
