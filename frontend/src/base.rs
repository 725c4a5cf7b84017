use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::floating_hearts::FloatingHearts;
use crate::components::sparkles::Sparkles;
use crate::hooks::use_theme::use_theme;
use crate::styles;

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("gallery", "Galeri"),
    ("wheel", "Hadiah"),
    ("music", "Musik"),
    ("message", "Pesan"),
];

/// Smoothly scrolls the element with `id` into view. Missing elements are
/// ignored.
pub fn scroll_to_element(id: &str, block: ScrollLogicalPosition) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(block);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No element #{} to scroll to", id),
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let theme = use_theme();

    let nav_links = NAV_SECTIONS.into_iter().map(|(id, label)| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_element(id, ScrollLogicalPosition::Start);
        });
        html! {
            <a href={format!("#{}", id)} class={styles::NAV_LINK} {onclick}>{label}</a>
        }
    });

    html! {
        <div class={classes!(theme.theme.is_dark().then_some("dark"))}>
            <div class={styles::PAGE}>
                <Sparkles />
                <FloatingHearts />
                <nav class={styles::NAV}>
                    <div class={styles::NAV_INNER}>
                        <span class={styles::NAV_BRAND}>
                            <i class="fas fa-heart mr-2"></i>
                            {"Happy Birthday"}
                        </span>
                        <div class="flex items-center space-x-2">
                            <div class="hidden md:flex items-center space-x-1">
                                { for nav_links }
                            </div>
                            <button
                                onclick={theme.toggle.clone()}
                                class={styles::BUTTON_ICON}
                                aria-label="Ganti tema"
                            >
                                <i id="themeIcon" class={theme.theme.icon_class()}></i>
                            </button>
                        </div>
                    </div>
                </nav>
                <main class="relative pt-16">
                    { props.children.clone() }
                </main>
                <footer class="relative z-10 py-8 text-center">
                    <p class={styles::TEXT_SMALL}>
                        {"Dibuat dengan "}<i class="fas fa-heart text-pink-500"></i>{" untuk kamu"}
                    </p>
                </footer>
            </div>
        </div>
    }
}
