use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::SiteConfig;
use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, SOCIAL_LINKS};
use crate::relay::{
    dismissed_phase, settle_submission, ContactFields, EmailJs, EmailRelay, SubmitPhase,
    SUCCESS_NOTICE_MS,
};

const MAP_EMBED_SRC: &str =
    "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d121058.9!2d73.79!3d18.62!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bc2b9c9bf177051!2sPune%2C%20Maharashtra!5e0!3m2!1sen!2sin!4v1";

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let relay = StoredValue::new(EmailJs::new(config.relay));

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let dismiss = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = dismiss.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // a dismiss timer armed by an earlier success must not fire into
        // this attempt
        if let Some(handle) = dismiss.get_value() {
            handle.clear();
            dismiss.set_value(None);
        }
        let fields = ContactFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if !fields.is_complete() {
            phase.set(SubmitPhase::Error("Please fill in all fields.".to_string()));
            return;
        }
        phase.set(SubmitPhase::Submitting);
        spawn_local(async move {
            let result = relay.get_value().submit(&fields).await;
            if let Err(err) = &result {
                log::error!("contact submission failed: {err}");
            }
            let outcome = settle_submission(result);
            if outcome.clear_fields {
                set_name(String::new());
                set_email(String::new());
                set_subject(String::new());
                set_message(String::new());
            }
            let succeeded = outcome.phase == SubmitPhase::Success;
            phase.set(outcome.phase);
            if succeeded {
                // success is a notice, not persistent state
                let handle = set_timeout_with_handle(
                    move || phase.set(dismissed_phase(phase.get_untracked())),
                    Duration::from_millis(SUCCESS_NOTICE_MS),
                )
                .ok();
                dismiss.set_value(handle);
            }
        });
    };

    let submitting = move || phase.with(|p| *p == SubmitPhase::Submitting);

    let info_row = |label: &'static str, body: AnyView| {
        view! {
            <div class="flex items-start">
                <div class="mt-1 mr-4 flex-shrink-0 bg-teal-500/10 p-3 rounded-full border border-teal-500/20 w-11 h-11"></div>
                <div>
                    <h4 class="text-sm font-medium text-gray-300 mb-1">{label}</h4>
                    {body}
                </div>
            </div>
        }
    };

    view! {
        <section id="contact" class="py-20 bg-black">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-4xl font-bold text-center mb-4 text-white">"Get In Touch"</h2>
                <div class="w-20 h-1 bg-teal-500 mx-auto mb-12"></div>

                <div class="max-w-6xl mx-auto">
                    <div class="grid grid-cols-1 lg:grid-cols-5 gap-10">
                        <div class="lg:col-span-2 space-y-6">
                            <div class="bg-gray-900/60 backdrop-blur-lg rounded-2xl p-6 border border-gray-800 shadow-xl space-y-5">
                                <h3 class="text-xl font-bold text-white mb-6">
                                    "Contact Information"
                                </h3>
                                {info_row(
                                    "Email",
                                    view! {
                                        <a
                                            href=format!("mailto:{CONTACT_EMAIL}")
                                            class="text-white hover:text-teal-400 transition-colors"
                                        >
                                            {CONTACT_EMAIL}
                                        </a>
                                    }
                                        .into_any(),
                                )}
                                {info_row(
                                    "Phone",
                                    view! {
                                        <a
                                            href=format!(
                                                "tel:{}",
                                                CONTACT_PHONE.replace(' ', ""),
                                            )
                                            class="text-white hover:text-teal-400 transition-colors"
                                        >
                                            {CONTACT_PHONE}
                                        </a>
                                    }
                                        .into_any(),
                                )}
                                {info_row(
                                    "Location",
                                    view! { <p class="text-white">{CONTACT_LOCATION}</p> }
                                        .into_any(),
                                )}
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        info_row(
                                            link.label,
                                            view! {
                                                <a
                                                    href=link.href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-white hover:text-teal-400 transition-colors"
                                                >
                                                    {link.href}
                                                </a>
                                            }
                                                .into_any(),
                                        )
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="lg:col-span-3 space-y-6">
                            <div class="bg-gray-900/60 backdrop-blur-lg rounded-2xl p-6 border border-gray-800 shadow-xl">
                                <h3 class="text-xl font-bold text-white mb-6">"Send Me a Message"</h3>

                                {move || {
                                    phase
                                        .with(|p| match p {
                                            SubmitPhase::Success => {
                                                Some(
                                                    view! {
                                                        <div class="bg-teal-500/10 p-4 rounded-lg text-teal-400 mb-6 border border-teal-500/20">
                                                            "Thank you for your message! I'll get back to you soon."
                                                        </div>
                                                    }
                                                        .into_any(),
                                                )
                                            }
                                            SubmitPhase::Error(msg) => {
                                                Some(
                                                    view! {
                                                        <div class="bg-red-500/10 p-4 rounded-lg text-red-400 mb-6 border border-red-500/20">
                                                            {msg.clone()}
                                                        </div>
                                                    }
                                                        .into_any(),
                                                )
                                            }
                                            _ => None,
                                        })
                                }}

                                <form class="space-y-6" on:submit=on_submit>
                                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                                        <input
                                            type="text"
                                            name="name"
                                            placeholder="Your Name"
                                            required=true
                                            prop:value=name
                                            on:input=move |ev| set_name(event_target_value(&ev))
                                            class="w-full px-4 py-3 border border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500 bg-gray-800 text-white"
                                        />
                                        <input
                                            type="email"
                                            name="email"
                                            placeholder="Your Email"
                                            required=true
                                            prop:value=email
                                            on:input=move |ev| set_email(event_target_value(&ev))
                                            class="w-full px-4 py-3 border border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500 bg-gray-800 text-white"
                                        />
                                    </div>
                                    <input
                                        type="text"
                                        name="subject"
                                        placeholder="Subject"
                                        required=true
                                        prop:value=subject
                                        on:input=move |ev| set_subject(event_target_value(&ev))
                                        class="w-full px-4 py-3 border border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500 bg-gray-800 text-white"
                                    />
                                    <textarea
                                        name="message"
                                        placeholder="Your Message"
                                        rows=5
                                        required=true
                                        prop:value=message
                                        on:input=move |ev| set_message(event_target_value(&ev))
                                        class="w-full px-4 py-3 border border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500 bg-gray-800 text-white"
                                    ></textarea>
                                    <button
                                        type="submit"
                                        disabled=submitting
                                        class="w-full px-6 py-3 bg-teal-500 hover:bg-teal-600 disabled:bg-gray-700 disabled:text-gray-400 text-black font-semibold rounded-lg transition-all duration-300"
                                    >
                                        {move || {
                                            if submitting() { "Sending..." } else { "Send Message" }
                                        }}
                                    </button>
                                </form>
                            </div>

                            <div class="bg-gray-900/60 backdrop-blur-lg rounded-2xl overflow-hidden border border-gray-800 shadow-xl">
                                <iframe
                                    src=MAP_EMBED_SRC
                                    title="Location map"
                                    class="w-full h-64 border-0"
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                ></iframe>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
