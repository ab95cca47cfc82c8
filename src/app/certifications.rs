use leptos::{html, prelude::*};

use crate::content::CERTIFICATIONS;
use crate::lightbox::{use_lightbox_keys, Lightbox};
use crate::reveal::{reveal_slide_class, stagger_delay, use_reveal};

#[component]
pub fn Certifications() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(CERTIFICATIONS.len()));
    use_lightbox_keys(lightbox);

    view! {
        <section id="certifications" class="py-20 bg-black">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-4xl font-bold text-center mb-4 text-white">"Certifications"</h2>
                <div class="w-20 h-1 bg-teal-500 mx-auto mb-12"></div>

                <div class="max-w-6xl mx-auto">
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {CERTIFICATIONS
                            .iter()
                            .enumerate()
                            .map(|(index, cert)| {
                                let node = NodeRef::<html::Div>::new();
                                let revealed = use_reveal(node);
                                view! {
                                    <div
                                        node_ref=node
                                        class=move || {
                                            format!(
                                                "bg-gray-900 rounded-xl overflow-hidden border border-gray-800 hover:border-teal-500 transition-all duration-700 ease-out cursor-pointer {}",
                                                reveal_slide_class(revealed()),
                                            )
                                        }
                                        style=stagger_delay(index)
                                        on:click=move |_| lightbox.update(|lb| lb.open(index))
                                    >
                                        <img
                                            src=cert.image
                                            alt=cert.title
                                            class="w-full h-44 object-cover"
                                        />
                                        <div class="p-5">
                                            <h3 class="text-lg font-bold text-white mb-1">
                                                {cert.title}
                                            </h3>
                                            <p class="text-teal-400 text-sm">{cert.issuer}</p>
                                            <p class="text-gray-400 text-sm">{cert.date}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            {move || {
                lightbox()
                    .selected()
                    .map(|index| {
                        let cert = &CERTIFICATIONS[index];
                        view! {
                            <div class="fixed inset-0 bg-black/90 backdrop-blur-sm flex items-center justify-center z-50 p-4">
                                <div class="relative max-w-3xl w-full">
                                    <button
                                        class="absolute -top-10 right-0 text-white hover:text-teal-400 text-2xl"
                                        aria-label="Close"
                                        on:click=move |_| lightbox.update(|lb| lb.close())
                                    >
                                        "✕"
                                    </button>
                                    <button
                                        class="absolute left-2 top-1/2 -translate-y-1/2 text-white hover:text-teal-400 text-3xl"
                                        aria-label="Previous certificate"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            lightbox.update(|lb| lb.previous());
                                        }
                                    >
                                        "‹"
                                    </button>
                                    <img
                                        src=cert.image
                                        alt=cert.title
                                        class="w-full rounded-xl shadow-2xl"
                                    />
                                    <button
                                        class="absolute right-2 top-1/2 -translate-y-1/2 text-white hover:text-teal-400 text-3xl"
                                        aria-label="Next certificate"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            lightbox.update(|lb| lb.next());
                                        }
                                    >
                                        "›"
                                    </button>
                                    <div class="text-center mt-4">
                                        <h3 class="text-white text-lg font-bold">{cert.title}</h3>
                                        <p class="text-gray-400 text-sm">
                                            {cert.issuer} " · " {cert.date}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
