mod wheel_canvas;
mod wheel_utils;

use greeting_shared::shared_prize_wheel::{WheelEvent, WheelState};
use rand::thread_rng;
use yew::prelude::*;

use crate::confetti;
use crate::hooks::use_timers::{use_timers, with_timers};
use crate::styles;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

#[function_component(PrizeWheel)]
pub fn prize_wheel() -> Html {
    let wheel = use_mut_ref(WheelState::new);
    let force_update = use_force_update();

    let timers = {
        let wheel = wheel.clone();
        let force_update = force_update.clone();
        use_timers(move |event: WheelEvent, _| {
            let prize = wheel.borrow_mut().handle(event);
            if let Some(prize) = prize {
                confetti::celebrate_prize(prize);
            }
            force_update.force_update();
        })
    };

    let on_spin = {
        let wheel = wheel.clone();
        Callback::from(move |_: MouseEvent| {
            let plan = with_timers(&timers, |t| wheel.borrow_mut().spin(&mut thread_rng(), t));
            if let Some(Some(plan)) = plan {
                log::debug!("spinning {:.1} degrees", plan.total_rotation());
                force_update.force_update();
            }
        })
    };

    let wheel = wheel.borrow();
    html! {
        <section id="wheel" class={classes!(styles::SECTION, "text-center")}>
            <h2 class={styles::TEXT_H2}>{"Putar Roda Hadiah"}</h2>
            <p class={classes!(styles::TEXT_BODY, "mb-8")}>
                {"Putar rodanya dan lihat hadiah apa yang kamu dapat!"}
            </p>
            <WheelCanvas rotation={wheel.current_rotation()} />
            <SpinButton is_spinning={wheel.is_spinning()} onclick={on_spin} />
            <ResultDisplay prize={wheel.last_prize()} />
        </section>
    }
}
