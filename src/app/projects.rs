use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::SectionHeading;
use crate::content::{portfolio, Project};
use crate::sections::Section;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4 relative">
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeading text="Featured Projects" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {portfolio()
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    // cards cascade in 100ms apart
    let delay = format!("animation-delay: {}ms", index * 100);

    view! {
        <div
            class="bg-slate-900/50 backdrop-blur-sm rounded-2xl overflow-hidden border border-cyan-500/20 hover:border-cyan-500/50 transition-all duration-500 hover:transform hover:scale-105 hover:shadow-2xl hover:shadow-cyan-500/20 group"
            style=delay
        >
            <div class=format!(
                "h-2 bg-gradient-to-r {} group-hover:h-3 transition-all duration-300",
                project.gradient.classes(),
            )></div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-3 group-hover:text-cyan-400 transition-colors">
                    {project.title.as_str()}
                </h3>
                <p class="text-gray-400 mb-4 text-sm leading-relaxed">
                    {project.description.as_str()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech_tags()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-slate-800/50 text-cyan-400 rounded-full text-xs border border-cyan-500/30 hover:border-cyan-500 hover:bg-cyan-500/10 transition-all cursor-default">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.github_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-gray-400 hover:text-cyan-400 transition-all hover:scale-110 transform"
                    >
                        <i class="devicon-github-original text-xl"></i>
                        <span class="text-sm">"Code"</span>
                    </a>
                    <a
                        href=project.live_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-cyan-400 hover:text-blue-400 transition-all hover:scale-110 transform"
                    >
                        <Icon glyph=Glyph::ExternalLink class="w-5 h-5" />
                        <span class="text-sm">"Live Demo"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}
