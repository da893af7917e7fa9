use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::experience::Experience;
use super::header::Header;
use super::hero::Hero;
use super::skills::Skills;
use crate::profile::profile;

const LOADING_DELAY: Duration = Duration::from_millis(2000);

#[component]
pub fn HomePage() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    Effect::watch(
        || (),
        move |_, _, _| {
            set_timeout(
                move || {
                    _ = set_loading.try_set(false);
                },
                LOADING_DELAY,
            )
        },
        true,
    );

    view! {
        <Title text=profile().role.clone() />
        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            <div class="min-h-screen bg-white text-gray-900">
                <Header />
                <main>
                    <Hero />
                    <About />
                    <Skills />
                    <Experience />
                    <Contact />
                </main>
                <Footer />
            </div>
        </Show>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-purple-600 via-pink-600 to-blue-600">
            <div class="w-16 h-16 border-4 border-white border-t-transparent rounded-full animate-spin" />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let profile = profile();
    view! {
        <footer class="py-8 text-center bg-gray-900">
            <p class="text-gray-400">
                {format!(
                    "© {} {}. Built with Rust & Leptos",
                    env!("BUILD_YEAR"),
                    profile.name,
                )}
            </p>
        </footer>
    }
}
