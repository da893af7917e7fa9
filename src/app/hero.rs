use std::f64::consts::TAU;

use leptos::{
    ev::MouseEvent,
    html,
    prelude::*,
    web_sys::{CanvasRenderingContext2d, HtmlCanvasElement},
};
use leptos_use::{use_window_size, UseWindowSizeReturn};
use wasm_bindgen::{JsCast, JsValue};

use super::scheduler::{use_animator, use_animator_with, FrameScheduler};
use crate::particles::{ParticleField, ParticleFrame, PARTICLE_COUNT};
use crate::profile::profile;
use crate::ripple::{Ripple, Ripples, RIPPLE_LIFETIME};
use crate::typing::{Cursor, Snapshot, TypingState};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = profile();
    let hero_ref = NodeRef::<html::Section>::new();
    let (snapshot, typing) = use_animator::<TypingState>(Snapshot::default());
    let (cursor_visible, cursor) = use_animator::<Cursor>(true);
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let (particles, field) =
        use_animator_with::<ParticleField, _>(ParticleFrame::default(), FrameScheduler);
    let ripples = RwSignal::new(Ripples::default());
    let UseWindowSizeReturn { width, height } = use_window_size();

    let resize_field = field.clone();
    Effect::watch(
        || (),
        move |_, _, _| {
            if let Err(e) = typing.start_phrases(&profile.phrases) {
                log::warn!("Hero headline not animated: {e}");
            }
            cursor.start(Cursor::default());
            field.start(ParticleField::new(
                width.get_untracked(),
                height.get_untracked(),
                PARTICLE_COUNT,
                js_sys::Math::random,
            ));
        },
        true,
    );

    Effect::watch(
        move || (width.get(), height.get()),
        move |(w, h), _, _| resize_field.update(|f| f.resize(*w, *h)),
        false,
    );

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        particles.with(|frame| {
            if let Err(e) = draw_particles(&canvas, frame) {
                log::warn!("Couldn't draw particles: {e:?}");
            }
        });
    });

    let on_click = move |ev: MouseEvent| {
        let Some(el) = hero_ref.get_untracked() else {
            return;
        };
        let x = (ev.page_x() - el.offset_left()) as f64;
        let y = (ev.page_y() - el.offset_top()) as f64;
        if let Some(id) = ripples.try_update(|r| r.spawn(x, y)) {
            set_timeout(
                move || {
                    _ = ripples.try_update(|r| r.remove(id));
                },
                RIPPLE_LIFETIME,
            );
        }
    };

    view! {
        <section
            id="hero"
            node_ref=hero_ref
            on:click=on_click
            class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-purple-600 via-pink-600 to-blue-600"
        >
            <canvas
                node_ref=canvas_ref
                class="absolute inset-0 w-full h-full pointer-events-none"
                aria-hidden="true"
            />
            <For
                each=move || ripples.get().active().to_vec()
                key=|r| r.id
                children=move |r: Ripple| {
                    view! {
                        <span
                            class="absolute w-4 h-4 -ml-2 -mt-2 rounded-full bg-white/40 animate-ping pointer-events-none"
                            style:left=format!("{}px", r.x)
                            style:top=format!("{}px", r.y)
                        />
                    }
                }
            />
            <div class="relative z-10 max-w-4xl px-4 text-center text-white">
                <h1 class="text-4xl md:text-6xl font-bold min-h-[8rem] md:min-h-[10rem]">
                    {move || snapshot.get().text}
                    <span class=move || {
                        if cursor_visible.get() { "opacity-100" } else { "opacity-0" }
                    }>"|"</span>
                </h1>
                {move || {
                    snapshot
                        .get()
                        .complete
                        .then(|| {
                            view! {
                                <p class="mt-6 text-lg md:text-xl text-white/90">
                                    {profile.tagline.clone()}
                                </p>
                            }
                        })
                }}
                <div class="mt-10 flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#experience"
                        class="px-8 py-3 rounded-full bg-white text-purple-700 font-semibold shadow-lg hover:scale-105 transition-transform"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 rounded-full border-2 border-white text-white font-semibold hover:bg-white hover:text-purple-700 transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>
                <p class="mt-8 text-sm text-white/70">"Click anywhere to create ripples"</p>
            </div>
        </section>
    }
}

fn draw_particles(canvas: &HtmlCanvasElement, frame: &ParticleFrame) -> Result<(), JsValue> {
    let (width, height) = (frame.width.max(0.0) as u32, frame.height.max(0.0) as u32);
    // resizing clears the canvas, so only do it when the field changed size
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    let Some(ctx) = canvas.get_context("2d")? else {
        return Ok(());
    };
    let ctx = ctx.dyn_into::<CanvasRenderingContext2d>()?;

    ctx.clear_rect(0.0, 0.0, frame.width, frame.height);
    ctx.set_line_width(1.0);
    for link in &frame.links {
        ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {:.3})", link.alpha));
        ctx.begin_path();
        ctx.move_to(link.x1, link.y1);
        ctx.line_to(link.x2, link.y2);
        ctx.stroke();
    }
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
    for p in &frame.particles {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}
