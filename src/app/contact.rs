use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

#[cfg(feature = "ssr")]
use crate::contact::relay::FormRelay;
use crate::contact::{ContactMessage, SubmitStatus, STATUS_RESET_DELAY};
use crate::profile::profile;

#[server]
pub async fn send_contact(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    let msg = ContactMessage::new(&name, &email, &message);
    msg.validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let relay = FormRelay::from_env(&profile().contact.form_endpoint).map_err(|e| {
        tracing::error!("Couldn't set up form relay: {e}");
        ServerFnError::new("Couldn't deliver message")
    })?;
    relay.submit(&msg).await.map_err(|e| {
        tracing::error!(endpoint = relay.endpoint(), "{e}");
        ServerFnError::new("Couldn't deliver message")
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let profile = profile();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(SubmitStatus::Idle);
    let (invalid, set_invalid) = signal(None::<String>);
    let reset_timer = StoredValue::new(None::<TimeoutHandle>);

    let clear_timer = move || {
        _ = reset_timer.try_update_value(|t| {
            if let Some(handle) = t.take() {
                handle.clear();
            }
        });
    };
    on_cleanup(clear_timer);

    // a newer status always replaces a pending reset
    let show_status = move |next: SubmitStatus| {
        clear_timer();
        _ = set_status.try_set(next);
        if next.resets() {
            let handle = set_timeout_with_handle(
                move || {
                    _ = set_status.try_set(SubmitStatus::Idle);
                },
                STATUS_RESET_DELAY,
            )
            .ok();
            _ = reset_timer.try_set_value(handle);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }
        let (Some(name), Some(email), Some(body)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            show_status(SubmitStatus::Failed);
            return;
        };
        let msg = ContactMessage::new(&name.value(), &email.value(), &body.value());
        if let Err(e) = msg.validate() {
            set_invalid.set(Some(e.to_string()));
            return;
        }
        set_invalid.set(None);
        show_status(SubmitStatus::Sending);
        spawn_local(async move {
            let res = send_contact(msg.name, msg.email, msg.message).await;
            match &res {
                Ok(()) => {
                    name.set_value("");
                    email.set_value("");
                    body.set_value("");
                }
                Err(e) => log::warn!("Contact form submit failed: {e}"),
            }
            show_status(SubmitStatus::from_result(&res));
        });
    };

    view! {
        <section
            id="contact"
            class="py-20 px-4 bg-gradient-to-br from-purple-600 via-pink-600 to-blue-600 text-white"
        >
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-4">"Let's Work Together"</h2>
                <p class="text-center text-white/80 mb-12">
                    "Have a project in mind or just want to say hello? Drop me a message."
                </p>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <div>
                            <p class="text-sm text-white/70">"Email"</p>
                            <a
                                href=format!("mailto:{}", profile.contact.email)
                                class="text-lg font-semibold"
                            >
                                {profile.contact.email.clone()}
                            </a>
                        </div>
                        <div>
                            <p class="text-sm text-white/70">"Location"</p>
                            <p class="text-lg font-semibold">{profile.contact.location.clone()}</p>
                        </div>
                        <div class="flex gap-4">
                            {profile
                                .contact
                                .socials
                                .iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-3xl hover:scale-110 transition-transform"
                                            aria-label=s.label.clone()
                                        >
                                            <i class=s.icon.clone() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <form class="space-y-4" on:submit=on_submit>
                        <input
                            node_ref=name_ref
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            required
                            class="w-full px-4 py-3 rounded-lg bg-white/20 placeholder-white/70 focus:outline-none focus:ring-2 focus:ring-white"
                        />
                        <input
                            node_ref=email_ref
                            type="email"
                            name="email"
                            placeholder="Your Email"
                            required
                            class="w-full px-4 py-3 rounded-lg bg-white/20 placeholder-white/70 focus:outline-none focus:ring-2 focus:ring-white"
                        />
                        <textarea
                            node_ref=message_ref
                            name="message"
                            placeholder="Your Message"
                            rows="4"
                            required
                            class="w-full px-4 py-3 rounded-lg bg-white/20 placeholder-white/70 focus:outline-none focus:ring-2 focus:ring-white"
                        />
                        <button
                            type="submit"
                            disabled=move || status.get().is_sending()
                            class="w-full py-3 rounded-lg bg-white text-purple-700 font-semibold disabled:opacity-60"
                        >
                            {move || status.get().button_label()}
                        </button>
                        {move || {
                            invalid.get().map(|e| view! { <p class="text-yellow-200">{e}</p> })
                        }}
                        {move || {
                            let status = status.get();
                            status
                                .notice()
                                .map(|text| {
                                    let class = if status == SubmitStatus::Sent {
                                        "p-4 rounded-lg bg-green-500/90"
                                    } else {
                                        "p-4 rounded-lg bg-red-500/90"
                                    };
                                    view! { <div class=class>{text}</div> }
                                })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}
