use leptos::{html, prelude::*};

use crate::content::EDUCATION;
use crate::reveal::{reveal_class, use_reveal};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 bg-gray-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-4xl font-bold text-center mb-4 text-white">"Education"</h2>
                <div class="w-20 h-1 bg-teal-500 mx-auto mb-12"></div>

                <div class="max-w-4xl mx-auto">
                    <div class="relative">
                        // timeline line
                        <div class="absolute left-0 md:left-1/2 transform md:-translate-x-1/2 top-0 bottom-0 w-1 bg-teal-500/30"></div>

                        <div class="space-y-12">
                            {EDUCATION
                                .iter()
                                .enumerate()
                                .map(|(index, edu)| {
                                    let node = NodeRef::<html::Div>::new();
                                    let revealed = use_reveal(node);
                                    let side = if index % 2 == 0 {
                                        "md:flex-row-reverse"
                                    } else {
                                        ""
                                    };
                                    view! {
                                        <div
                                            node_ref=node
                                            class=move || {
                                                format!(
                                                    "relative flex flex-col md:flex-row md:items-center transition-all duration-700 ease-out {side} {}",
                                                    reveal_class(revealed()),
                                                )
                                            }
                                        >
                                            <div class="absolute left-0 md:left-1/2 transform -translate-x-1/2 w-4 h-4 rounded-full bg-teal-500 border-4 border-gray-900"></div>
                                            <div class="md:w-1/2"></div>
                                            <div class="md:w-1/2 ml-8 md:ml-0 md:px-8">
                                                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-teal-500 transition-all duration-300">
                                                    <h3 class="text-xl font-bold text-white mb-2">
                                                        {edu.degree}
                                                    </h3>
                                                    <p class="text-teal-400 font-medium mb-1">
                                                        {edu.institution}
                                                    </p>
                                                    <p class="text-gray-400 text-sm mb-1">
                                                        {edu.location} " · " {edu.period}
                                                    </p>
                                                    <p class="text-gray-300 text-sm">{edu.grade}</p>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
