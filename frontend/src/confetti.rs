use gloo_timers::callback::Timeout;
use greeting_shared::effects::{celebration_bursts, prize_burst, ConfettiBurst};
use greeting_shared::shared_prize_wheel::Prize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Provided by the canvas-confetti script loaded in index.html.
    #[wasm_bindgen(js_name = confetti, catch)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Fires one burst. A missing confetti script only costs the effect.
pub fn burst(options: &ConfettiBurst) {
    let json = match serde_json::to_string(options) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to encode confetti options: {}", e);
            return;
        }
    };
    let result = js_sys::JSON::parse(&json).and_then(|value| confetti_js(&value));
    if let Err(e) = result {
        log::warn!("Confetti unavailable: {:?}", e);
    }
}

/// The three-burst celebration.
pub fn celebrate() {
    for scheduled in celebration_bursts() {
        if scheduled.delay_ms == 0 {
            burst(&scheduled.burst);
        } else {
            Timeout::new(scheduled.delay_ms, move || burst(&scheduled.burst)).forget();
        }
    }
}

pub fn celebrate_prize(prize: &Prize) {
    burst(&prize_burst(prize));
}
