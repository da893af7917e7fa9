use std::time::Duration;

use leptos::{prelude::*, web_sys::HtmlElement};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::profile::profile;
use crate::spy::{active_section, SectionBounds};

/// Page sections in navigation order: `(element id, label)`.
pub const SECTIONS: [(&str, &str); 5] = [
    ("hero", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

const MENU_CLOSE_DELAY: Duration = Duration::from_millis(500);

fn section_bounds(id: &'static str) -> Option<SectionBounds<'static>> {
    let el = document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        id,
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    })
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg bg-gradient-to-r from-purple-600 to-pink-600 text-white shadow-lg"
    } else {
        "px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let profile = profile();
    let (active, set_active) = signal(SECTIONS[0].0);
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    Effect::watch(
        move || scroll_y.get(),
        move |y, _, _| {
            let bounds = SECTIONS
                .iter()
                .filter_map(|&(id, _)| section_bounds(id))
                .collect::<Vec<_>>();
            // outside every section: keep the last highlight
            if let Some(id) = active_section(&bounds, *y) {
                set_active.set(id);
            }
        },
        true,
    );

    let close_menu = move || {
        set_timeout(
            move || {
                _ = set_menu_open.try_set(false);
            },
            MENU_CLOSE_DELAY,
        )
    };

    let nav_links = move |mobile: bool| {
        SECTIONS
            .iter()
            .map(|&(id, label)| {
                view! {
                    <a
                        href=format!("#{id}")
                        class=move || {
                            let base = nav_class(active.get() == id);
                            if mobile { format!("block w-full {base}") } else { base.to_string() }
                        }
                        on:click=move |_| close_menu()
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 w-full z-40 backdrop-blur-md bg-white/90 border-b border-gray-200/50 shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    <a href="#hero" class="flex items-center space-x-3">
                        <div class="w-12 h-12 bg-gradient-to-r from-purple-600 to-pink-600 rounded-xl flex items-center justify-center shadow-lg">
                            <span class="text-white font-bold text-xl">
                                {profile.initials.clone()}
                            </span>
                        </div>
                        <div class="hidden sm:block">
                            <p class="font-bold text-xl text-purple-700">{profile.name.clone()}</p>
                            <p class="text-sm text-gray-600">{profile.role.clone()}</p>
                        </div>
                    </a>
                    <div class="hidden md:flex items-center space-x-1">{nav_links(false)}</div>
                    <div class="flex items-center space-x-3">
                        <a
                            href=profile.resume.href.clone()
                            download=profile.resume.download_name.clone()
                            class="hidden sm:flex items-center px-4 py-2 rounded-lg border border-purple-600 text-purple-600 hover:bg-purple-600 hover:text-white transition-colors"
                        >
                            "Resume"
                        </a>
                        <button
                            class="md:hidden w-12 h-12 rounded-full bg-gray-100 hover:bg-gray-200"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden border-t border-gray-200/50 bg-white/95 px-4 py-6 space-y-3">
                    {nav_links(true)}
                    <a
                        href=profile.resume.href.clone()
                        download=profile.resume.download_name.clone()
                        class="block w-full px-4 py-3 rounded-lg border-2 border-purple-600 text-purple-600"
                    >
                        "Download Resume"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
