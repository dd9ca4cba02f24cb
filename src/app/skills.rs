use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{portfolio, Skill};
use crate::sections::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-4 bg-slate-800/30 relative">
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeading text="Skills & Technologies" />
                <div class="space-y-6">
                    {portfolio()
                        .skills
                        .iter()
                        .map(|skill| view! { <SkillBar skill /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="group">
            <div class="flex justify-between mb-2">
                <span class="font-semibold text-lg group-hover:text-cyan-400 transition-colors">
                    {skill.name.as_str()}
                </span>
                <span class="text-cyan-400 font-bold">{format!("{}%", skill.level.get())}</span>
            </div>
            <div class="h-4 bg-slate-900/50 rounded-full overflow-hidden border border-cyan-500/20 group-hover:border-cyan-500/50 transition-all">
                <div
                    class="h-full bg-gradient-to-r from-cyan-500 to-blue-600 rounded-full transition-all duration-1000 relative overflow-hidden"
                    style=skill.level.width_style()
                >
                    <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white/30 to-transparent animate-shimmer"></div>
                </div>
            </div>
        </div>
    }
}
