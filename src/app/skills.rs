use leptos::prelude::*;

use crate::content::{filter_skills, SkillCategory, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    // `None` is the "all" filter
    let (active, set_active) = signal(None::<SkillCategory>);

    let filter_button = move |category: Option<SkillCategory>, label: &'static str| {
        let class = move || {
            if active() == category {
                "px-4 py-2 rounded-full text-sm transition-all duration-300 bg-teal-500 text-black font-semibold"
            } else {
                "px-4 py-2 rounded-full text-sm transition-all duration-300 bg-gray-800 text-gray-300 hover:bg-gray-700 hover:text-white border border-gray-700"
            }
        };
        view! {
            <button class=class on:click=move |_| set_active(category)>
                {label}
            </button>
        }
    };

    view! {
        <section id="skills" class="py-20 bg-gray-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-4xl font-bold text-center mb-4 text-white">"Technical Skills"</h2>
                <div class="w-20 h-1 bg-teal-500 mx-auto mb-12"></div>

                <div class="max-w-4xl mx-auto">
                    <div class="flex flex-wrap justify-center gap-2 mb-12">
                        {filter_button(None, "All Skills")}
                        {SKILL_CATEGORIES
                            .iter()
                            .map(|c| filter_button(Some(*c), c.label()))
                            .collect_view()}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {move || {
                            filter_skills(active())
                                .into_iter()
                                .map(|skill| {
                                    view! {
                                        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-teal-500 transition-all duration-300">
                                            <div class="flex justify-between items-center mb-2">
                                                <h3 class="font-medium text-white">{skill.name}</h3>
                                                <span class="text-sm text-gray-400">
                                                    {skill.level} "%"
                                                </span>
                                            </div>
                                            <div class="w-full bg-gray-700 rounded-full h-2.5">
                                                <div
                                                    class="bg-gradient-to-r from-teal-500 to-teal-400 h-2.5 rounded-full transition-all duration-1000 ease-out"
                                                    style=format!("width: {}%", skill.level)
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
