use leptos::{html, prelude::*};

use crate::content::PHOTOS;
use crate::lightbox::{use_lightbox_keys, Lightbox};
use crate::reveal::{reveal_scale_class, stagger_delay, use_reveal};

#[component]
pub fn Gallery() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(PHOTOS.len()));
    use_lightbox_keys(lightbox);

    view! {
        <section id="gallery" class="py-20 bg-gray-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-4xl font-bold text-center mb-4 text-white">"Photo Gallery"</h2>
                <div class="w-20 h-1 bg-teal-500 mx-auto mb-12"></div>

                <div class="max-w-6xl mx-auto grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PHOTOS
                        .iter()
                        .enumerate()
                        .map(|(index, photo)| {
                            let node = NodeRef::<html::Div>::new();
                            let revealed = use_reveal(node);
                            view! {
                                <div
                                    node_ref=node
                                    class=move || {
                                        format!(
                                            "group relative rounded-xl overflow-hidden border border-gray-800 hover:border-teal-500 transition-all duration-700 ease-out cursor-pointer {}",
                                            reveal_scale_class(revealed()),
                                        )
                                    }
                                    style=stagger_delay(index)
                                    on:click=move |_| lightbox.update(|lb| lb.open(index))
                                >
                                    <img
                                        src=photo.src
                                        alt=photo.alt
                                        class="w-full h-64 object-cover group-hover:scale-105 transition-transform duration-500"
                                    />
                                    <div class="absolute inset-x-0 bottom-0 bg-gradient-to-t from-black/80 to-transparent p-4">
                                        <h3 class="text-white font-bold">{photo.title}</h3>
                                        <p class="text-gray-300 text-sm">{photo.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                lightbox()
                    .selected()
                    .map(|index| {
                        let photo = &PHOTOS[index];
                        view! {
                            <div class="fixed inset-0 bg-black/90 backdrop-blur-sm flex items-center justify-center z-50 p-4">
                                <div class="relative max-w-4xl w-full">
                                    <button
                                        class="absolute -top-10 right-0 text-white hover:text-teal-400 text-2xl"
                                        aria-label="Close"
                                        on:click=move |_| lightbox.update(|lb| lb.close())
                                    >
                                        "✕"
                                    </button>
                                    <button
                                        class="absolute left-2 top-1/2 -translate-y-1/2 text-white hover:text-teal-400 text-3xl"
                                        aria-label="Previous photo"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            lightbox.update(|lb| lb.previous());
                                        }
                                    >
                                        "‹"
                                    </button>
                                    <img
                                        src=photo.src
                                        alt=photo.alt
                                        class="w-full max-h-[75vh] object-contain rounded-xl shadow-2xl"
                                    />
                                    <button
                                        class="absolute right-2 top-1/2 -translate-y-1/2 text-white hover:text-teal-400 text-3xl"
                                        aria-label="Next photo"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            lightbox.update(|lb| lb.next());
                                        }
                                    >
                                        "›"
                                    </button>
                                    <div class="text-center mt-4">
                                        <h3 class="text-white text-lg font-bold">{photo.title}</h3>
                                        <p class="text-gray-400 text-sm">{photo.description}</p>
                                        <p class="text-gray-500 text-xs mt-1">
                                            {index + 1} " / " {PHOTOS.len()}
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
