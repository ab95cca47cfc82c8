use leptos::{html, prelude::*};

use crate::content::{filter_achievements, AchievementCategory, ACHIEVEMENT_CATEGORIES};
use crate::reveal::{reveal_class, use_reveal};

fn category_badge(category: AchievementCategory) -> &'static str {
    match category {
        AchievementCategory::Research => "📖",
        AchievementCategory::Competitive => "⌨",
        AchievementCategory::Leadership => "🏆",
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    let (active, set_active) = signal(None::<AchievementCategory>);

    let filter_button = move |category: Option<AchievementCategory>, label: &'static str| {
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
        <section id="achievements" class="py-20 bg-gray-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-4xl font-bold text-center mb-4 text-white">"Achievements"</h2>
                <div class="w-20 h-1 bg-teal-500 mx-auto mb-12"></div>

                <div class="max-w-5xl mx-auto">
                    <div class="flex flex-wrap justify-center gap-2 mb-12">
                        {filter_button(None, "All")}
                        {ACHIEVEMENT_CATEGORIES
                            .iter()
                            .map(|c| filter_button(Some(*c), c.label()))
                            .collect_view()}
                    </div>

                    <div class="grid grid-cols-1 gap-8">
                        {move || {
                            filter_achievements(active())
                                .into_iter()
                                .map(|achievement| {
                                    let node = NodeRef::<html::Div>::new();
                                    let revealed = use_reveal(node);
                                    view! {
                                        <div
                                            node_ref=node
                                            class=move || {
                                                format!(
                                                    "bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-teal-500 transition-all duration-700 ease-out flex items-start space-x-6 {}",
                                                    reveal_class(revealed()),
                                                )
                                            }
                                        >
                                            <div class="flex-shrink-0 p-4 bg-teal-500/10 rounded-full border border-teal-500/20 text-teal-400 text-2xl">
                                                {category_badge(achievement.category)}
                                            </div>
                                            <div>
                                                <h3 class="text-xl font-bold text-white mb-2">
                                                    {achievement.title}
                                                </h3>
                                                <p class="text-gray-300">{achievement.description}</p>
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
