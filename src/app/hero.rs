use std::time::Duration;

use leptos::prelude::*;

use super::navbar::scroll_to_anchor;
use crate::content::{CONTACT_EMAIL, HERO_ROLES, OWNER_NAME, SOCIAL_LINKS};
use crate::typewriter::Typewriter;

/// Hero section: typewriter headline plus the role rotator, social links,
/// and the résumé modal.
#[component]
pub fn Hero() -> impl IntoView {
    let tw = RwSignal::new(Typewriter::new(OWNER_NAME, HERO_ROLES));
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // Chain one timeout per tick; the delay depends on the current phase.
    // The cycle has no terminal state, so the chain only stops on unmount.
    Effect::new(move |_| {
        let delay = tw.with(|t| t.delay_ms());
        let handle = set_timeout_with_handle(
            move || tw.update(|t| t.tick()),
            Duration::from_millis(delay),
        )
        .ok();
        pending.set_value(handle);
    });
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    let (show_resume, set_show_resume) = signal(false);

    let name_complete = move || tw.with(|t| t.name_complete());

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center text-white relative overflow-hidden"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center max-w-4xl mx-auto">
                    <div class="inline-flex items-center px-4 py-2 bg-gray-800 rounded-full text-sm text-gray-300 mb-8 border border-gray-700">
                        <span class="w-2 h-2 bg-teal-500 rounded-full mr-2 animate-pulse"></span>
                        "Available for opportunities! Let's connect"
                    </div>

                    <div class="mb-6">
                        <h2 class="text-2xl font-medium text-gray-300 mb-4">"Hello, I'm"</h2>
                        <h1 class="text-5xl sm:text-6xl md:text-7xl font-bold mb-4">
                            <span class="text-white">{move || tw.with(|t| t.name_text())}</span>
                            {move || {
                                (!name_complete())
                                    .then(|| {
                                        view! {
                                            <span class="animate-pulse text-teal-500">"|"</span>
                                        }
                                    })
                            }}
                        </h1>
                        {move || {
                            name_complete()
                                .then(|| {
                                    view! {
                                        <div class="text-2xl sm:text-3xl md:text-4xl font-medium h-16 flex items-center justify-center">
                                            <span class="text-teal-400">
                                                {move || tw.with(|t| t.role_text())}
                                            </span>
                                            <span class="animate-pulse ml-1 text-teal-500">"|"</span>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <p class="text-xl text-gray-400 mb-8 max-w-3xl mx-auto leading-relaxed">
                        "I'm a student at "
                        <strong>"Pimpri Chinchwad College of Engineering, Pune"</strong>
                        ", passionate about building innovative software solutions and exploring cutting-edge technologies. Currently pursuing Computer Engineering with expertise in Data Structures, Full-Stack Development, and Machine Learning."
                    </p>

                    <div class="flex flex-wrap justify-center gap-4 mb-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-full text-gray-300 hover:text-white transition-all duration-300 border border-gray-700 hover:border-gray-600"
                                    >
                                        <i class=link.icon_class></i>
                                        <span>{link.label}</span>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            class="flex items-center gap-2 px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-full text-gray-300 hover:text-white transition-all duration-300 border border-gray-700 hover:border-gray-600"
                        >
                            <span>"Email"</span>
                        </a>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="#contact"
                            class="px-8 py-4 bg-teal-500 hover:bg-teal-600 text-black font-semibold rounded-full transition-all duration-300 shadow-lg hover:shadow-xl transform hover:scale-105"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_anchor("contact");
                            }
                        >
                            "Get in Touch"
                        </a>
                        <button
                            class="px-8 py-4 border-2 border-gray-600 hover:border-teal-500 text-white hover:text-teal-400 rounded-full transition-all duration-300 font-semibold hover:bg-gray-900"
                            on:click=move |_| set_show_resume(true)
                        >
                            "View Resume"
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                show_resume()
                    .then(|| {
                        view! {
                            <div class="fixed inset-0 bg-black/90 backdrop-blur-sm flex items-center justify-center z-50 p-4">
                                <div class="bg-gray-900 rounded-2xl shadow-2xl w-full max-w-4xl h-[80vh] relative overflow-hidden">
                                    <button
                                        class="absolute top-3 right-3 text-white hover:text-teal-400 text-2xl"
                                        aria-label="Close resume"
                                        on:click=move |_| set_show_resume(false)
                                    >
                                        "✕"
                                    </button>
                                    <iframe
                                        src="/resume.pdf"
                                        title="Resume"
                                        class="w-full h-full rounded-xl"
                                    ></iframe>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
