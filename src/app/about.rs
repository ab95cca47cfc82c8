use leptos::prelude::*;
use leptos_use::utils::Pausable;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::content::SOCIAL_LINKS;
use crate::counter::eased_count;

/// Animates from 0 to `end` over `duration_ms` with ease-out-quart easing,
/// driven by the animation-frame loop until the end value is reached.
#[component]
fn Counter(end: u32, duration_ms: f64, suffix: &'static str) -> impl IntoView {
    let (count, set_count) = signal(0u32);
    let (finished, set_finished) = signal(false);
    let elapsed = StoredValue::new(0.0f64);

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let t = elapsed.get_value() + args.delta;
        elapsed.set_value(t);
        let (value, done) = eased_count(end, duration_ms, t);
        set_count(value);
        if done {
            set_finished(true);
        }
    });
    Effect::new(move |_| {
        if finished() {
            pause();
        }
    });

    view! {
        <div class="text-4xl font-bold text-teal-400 mb-2">
            {move || format!("{}{}", count(), suffix)}
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-black">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-4xl font-bold text-center mb-4 text-white">"About Me"</h2>
                    <div class="w-20 h-1 bg-teal-500 mx-auto mb-12"></div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-10 items-center mb-12">
                        <div class="prose prose-lg max-w-none text-justify">
                            <p class="text-gray-300 mb-6 leading-relaxed text-lg">
                                "I'm a Computer Engineering student at Pimpri Chinchwad College of Engineering, passionate about building innovative software solutions and exploring cutting-edge technologies."
                            </p>
                            <p class="text-gray-300 mb-6 leading-relaxed text-lg">
                                "With a strong foundation in data structures, algorithms, and web development, I enjoy tackling complex challenges and creating user-centric applications. My academic journey has equipped me with skills in various programming languages and frameworks."
                            </p>
                            <p class="text-gray-300 leading-relaxed text-lg">
                                "Beyond academics, I take pride in my leadership roles with the ISTE Students' Chapter and PCCOE ACM Student Chapter, where I've helped organize events, grow membership, and foster a collaborative learning environment."
                            </p>
                        </div>

                        <div class="flex justify-center">
                            <div class="relative rounded-full w-80 h-80">
                                <div class="rounded-full p-1 bg-black border-2 border-teal-500 shadow-[0_0_20px_rgba(20,255,200,0.5)] transition-all duration-500 ease-in-out hover:scale-105 w-full h-full">
                                    <img
                                        src="/photos/siddhesh.png"
                                        alt="Siddhesh Patil"
                                        class="rounded-full w-full h-full object-cover"
                                    />
                                </div>
                                <div class="absolute inset-0 rounded-full bg-black/80 flex items-center justify-center gap-6 opacity-0 hover:opacity-100 transition-opacity duration-300">
                                    {SOCIAL_LINKS
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <a
                                                    href=link.href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-white hover:text-teal-400 text-2xl"
                                                    title=link.label
                                                >
                                                    <i class=link.icon_class></i>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 text-center">
                        <div class="bg-gray-900 rounded-xl p-6 border border-gray-700 hover:border-teal-500 transition-all duration-300">
                            <Counter end=3 duration_ms=2000.0 suffix="+" />
                            <p class="text-gray-300">"Years of Coding Experience"</p>
                        </div>
                        <div class="bg-gray-900 rounded-xl p-6 border border-gray-700 hover:border-teal-500 transition-all duration-300">
                            <Counter end=5 duration_ms=2500.0 suffix="+" />
                            <p class="text-gray-300">"Projects Completed"</p>
                        </div>
                        <div class="bg-gray-900 rounded-xl p-6 border border-gray-700 hover:border-teal-500 transition-all duration-300">
                            <Counter end=10 duration_ms=3000.0 suffix="+" />
                            <p class="text-gray-300">"Events Organized"</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
