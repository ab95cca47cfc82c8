use leptos::{html, prelude::*};

use crate::content::{Project, PROJECTS};
use crate::reveal::{reveal_class, stagger_delay, use_reveal};

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node);

    view! {
        <div
            node_ref=node
            class=move || {
                format!(
                    "bg-gray-800 rounded-xl overflow-hidden border border-gray-700 hover:border-teal-500 transition-all duration-700 ease-out flex flex-col {}",
                    reveal_class(revealed()),
                )
            }
            style=stagger_delay(index)
        >
            <img src=project.image alt=project.title class="w-full h-48 object-cover" />
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-bold text-white mb-2">{project.title}</h3>
                <p class="text-gray-300 text-sm mb-4">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-teal-500/10 text-teal-400 text-xs rounded-full border border-teal-500/20">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <ul class="text-gray-400 text-sm space-y-1 mb-4 list-disc list-inside">
                    {project.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                </ul>

                <div class="flex gap-4 mt-auto">
                    {project
                        .link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-teal-400 hover:text-teal-300 text-sm font-medium"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-300 hover:text-white text-sm font-medium"
                                >
                                    "GitHub"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-4xl font-bold text-center mb-4 text-white">"Projects"</h2>
                <div class="w-20 h-1 bg-teal-500 mx-auto mb-12"></div>

                <div class="max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
