use gloo_events::EventListener;
use greeting_shared::gallery::{Lightbox, LightboxKey};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::styles;

fn set_page_scroll(locked: bool) {
    let body = gloo_utils::body();
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("Failed to set body overflow: {:?}", e);
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_mut_ref(Lightbox::default);
    let force_update = use_force_update();
    let is_open = lightbox.borrow().is_open();

    {
        let lightbox = lightbox.clone();
        let force_update = force_update.clone();
        use_effect_with((), move |_| {
            let document = gloo_utils::document();
            let listener = EventListener::new(&document, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Some(key) = LightboxKey::from_key(&event.key()) {
                    if lightbox.borrow_mut().handle_key(key) {
                        force_update.force_update();
                    }
                }
            });
            move || drop(listener)
        });
    }

    use_effect_with(is_open, |is_open| {
        set_page_scroll(*is_open);
        || set_page_scroll(false)
    });

    let step = |direction: isize| {
        let lightbox = lightbox.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            lightbox.borrow_mut().step(direction);
            force_update.force_update();
        })
    };

    let on_close = {
        let lightbox = lightbox.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: MouseEvent| {
            lightbox.borrow_mut().close();
            force_update.force_update();
        })
    };

    // Only clicks on the dark backdrop itself close the viewer.
    let on_backdrop = {
        let on_close = on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(e);
            }
        })
    };

    let view = lightbox.borrow();
    let thumbnails = view.images().iter().enumerate().map(|(index, src)| {
        let onclick = {
            let lightbox = lightbox.clone();
            let force_update = force_update.clone();
            let src = src.clone();
            Callback::from(move |_: MouseEvent| {
                if lightbox.borrow_mut().open(&src) {
                    force_update.force_update();
                }
            })
        };
        html! {
            <div
                key={src.clone()}
                {onclick}
                class="gallery-item overflow-hidden rounded-xl shadow-md cursor-pointer aspect-square"
            >
                <img
                    src={get_asset_url(src)}
                    alt={format!("Kenangan {}", index + 1)}
                    loading="lazy"
                    class="w-full h-full object-cover hover:scale-110 transition-transform duration-500"
                />
            </div>
        }
    });

    let modal = match view.current_src().filter(|_| view.is_open()) {
        Some(src) => html! {
            <div id="imageModal" onclick={on_backdrop} class={styles::OVERLAY}>
                <button
                    onclick={on_close}
                    class="absolute top-4 right-6 text-4xl text-white hover:text-pink-300"
                    aria-label="Tutup"
                >
                    {"×"}
                </button>
                <button
                    onclick={step(-1)}
                    class="absolute left-4 text-4xl text-white hover:text-pink-300"
                    aria-label="Sebelumnya"
                >
                    <i class="fas fa-chevron-left"></i>
                </button>
                <img
                    id="modalImage"
                    src={get_asset_url(src)}
                    alt="Foto"
                    class="max-w-[90vw] max-h-[85vh] rounded-lg shadow-2xl"
                />
                <button
                    onclick={step(1)}
                    class="absolute right-4 text-4xl text-white hover:text-pink-300"
                    aria-label="Berikutnya"
                >
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        },
        None => html! {},
    };

    html! {
        <section id="gallery" class={styles::SECTION}>
            <h2 class={styles::TEXT_H2}>{"Galeri Kenangan"}</h2>
            <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4">
                { for thumbnails }
            </div>
            { modal }
        </section>
    }
}
