use greeting_shared::shared_prize_wheel::{draw_wheel, WheelSurface, PRIZES, SPIN_DURATION_MS};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 400;

/// Draws wheel segments onto a 2d canvas context around its center.
struct CanvasSurface {
    context: CanvasRenderingContext2d,
    center: f64,
    radius: f64,
}

impl CanvasSurface {
    fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let size = f64::from(canvas.width().min(canvas.height()));
        Some(Self {
            context,
            center: size / 2.0,
            radius: size / 2.0 - 10.0,
        })
    }
}

impl WheelSurface for CanvasSurface {
    fn fill_segment(&mut self, start_deg: f64, end_deg: f64, color: &str) {
        let ctx = &self.context;
        ctx.begin_path();
        ctx.move_to(self.center, self.center);
        let _ = ctx.arc(
            self.center,
            self.center,
            self.radius,
            start_deg.to_radians(),
            end_deg.to_radians(),
        );
        ctx.close_path();
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.set_stroke_style_str("#ffffff");
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    fn draw_icon(&mut self, angle_deg: f64, icon: &str) {
        let ctx = &self.context;
        ctx.save();
        let _ = ctx.translate(self.center, self.center);
        let _ = ctx.rotate(angle_deg.to_radians());
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_font("28px sans-serif");
        let _ = ctx.fill_text(icon, self.radius * 0.75, 0.0);
        ctx.restore();
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
}

/// The wheel is painted once; spinning only changes the CSS rotation, and
/// the transition runs exactly as long as the reveal delay.
#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            match canvas_ref.cast::<HtmlCanvasElement>().and_then(|c| CanvasSurface::from_canvas(&c)) {
                Some(mut surface) => draw_wheel(&mut surface, &PRIZES),
                None => log::warn!("Wheel canvas has no 2d context"),
            }
            || ()
        });
    }

    let style = format!(
        "transform: rotate({:.3}deg); transition: transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99);",
        props.rotation, SPIN_DURATION_MS
    );

    html! {
        <div class="relative mx-auto w-full max-w-[400px] aspect-square">
            // Pointer sits at the top of the wheel.
            <div class="absolute left-1/2 -top-2 z-10 -translate-x-1/2 w-0 h-0 border-l-[15px] border-r-[15px] border-t-[30px] border-l-transparent border-r-transparent border-t-pink-700 dark:border-t-pink-300" />
            <canvas
                ref={canvas_ref}
                id="wheelCanvas"
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full h-full rounded-full shadow-2xl"
                {style}
            />
            <div class="absolute inset-0 m-auto w-14 h-14 rounded-full bg-white dark:bg-gray-800 shadow-lg flex items-center justify-center text-2xl">
                {"🎀"}
            </div>
        </div>
    }
}
