use leptos::{html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

/// One star per this many square pixels of viewport.
const STAR_DENSITY_PX2: f64 = 8000.0;

#[derive(Debug, Clone, Copy)]
struct Star {
    x: f64,
    y: f64,
    size: f64,
    opacity: f64,
    twinkle_speed: f64,
    twinkle_offset: f64,
}

fn generate_stars(width: f64, height: f64) -> Vec<Star> {
    let count = ((width * height) / STAR_DENSITY_PX2).floor() as usize;
    (0..count)
        .map(|_| Star {
            x: js_sys::Math::random() * width,
            y: js_sys::Math::random() * height,
            size: js_sys::Math::random() * 2.0 + 0.5,
            opacity: js_sys::Math::random() * 0.8 + 0.2,
            twinkle_speed: js_sys::Math::random() * 0.02 + 0.005,
            twinkle_offset: js_sys::Math::random() * std::f64::consts::TAU,
        })
        .collect()
}

fn draw(ctx: &CanvasRenderingContext2d, width: f64, height: f64, stars: &[Star], time: f64) {
    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(0.0, 0.0, width, height);

    for star in stars {
        let twinkle = (time * star.twinkle_speed + star.twinkle_offset).sin() * 0.3 + 0.7;
        let opacity = star.opacity * twinkle;

        if let Ok(gradient) =
            ctx.create_radial_gradient(star.x, star.y, 0.0, star.x, star.y, star.size * 2.0)
        {
            let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {opacity})"));
            let _ = gradient
                .add_color_stop(0.5, &format!("rgba(255, 255, 255, {})", opacity * 0.5));
            let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            let _ = ctx.arc(star.x, star.y, star.size * 2.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }

        // bright center dot
        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {opacity})"));
        ctx.begin_path();
        let _ = ctx.arc(star.x, star.y, star.size * 0.5, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}

/// Full-viewport twinkling-star background, redrawn every animation frame.
/// Stars are regenerated on resize so density stays proportional to the
/// viewport; the frame loop and resize listener stop on unmount.
#[component]
pub fn Starfield() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let stars = StoredValue::new(Vec::<Star>::new());

    let resize = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let width = window()
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        stars.set_value(generate_stars(width, height));
    };

    Effect::new(move |_| resize());
    let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| resize());

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let Ok(Some(ctx)) = canvas.get_context("2d") else {
            return;
        };
        let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
            return;
        };
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        stars.with_value(|stars| draw(&ctx, width, height, stars, args.timestamp));
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 -z-10 pointer-events-none"
            aria-hidden="true"
        ></canvas>
    }
}
