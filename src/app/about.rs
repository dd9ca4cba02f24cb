use leptos::prelude::*;

use super::SectionHeading;
use crate::content::portfolio;
use crate::sections::Section;

const CARD_CLASS: &str = "transform hover:scale-105 transition-transform duration-300 p-6 bg-slate-800/30 rounded-xl backdrop-blur-sm border border-cyan-500/20 hover:border-cyan-500/50";

#[component]
pub fn About() -> impl IntoView {
    let content = portfolio();

    view! {
        <section id=Section::About.id() class="py-20 px-4 relative">
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeading text="About Me" />
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="space-y-6">
                        {content
                            .about
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class=CARD_CLASS>
                                        <h3 class="text-xl font-bold text-cyan-400 mb-3">
                                            {format!("{} {}", card.icon, card.title)}
                                        </h3>
                                        <p class="text-gray-300 leading-relaxed">{card.body.as_str()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="space-y-6">
                        <div class=CARD_CLASS>
                            <h3 class="text-xl font-bold text-cyan-400 mb-3">"🎓 Education"</h3>
                            <div class="space-y-3 text-gray-300">
                                {content
                                    .education
                                    .iter()
                                    .map(|edu| {
                                        view! {
                                            <div>
                                                <p class="font-semibold">{edu.degree.as_str()}</p>
                                                <p class="text-sm text-gray-400">{edu.institution.as_str()}</p>
                                                <p class="text-xs text-cyan-400">{edu.years.as_str()}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class=CARD_CLASS>
                            <h3 class="text-xl font-bold text-cyan-400 mb-3">"🏆 Certifications"</h3>
                            <div class="space-y-2 text-gray-300">
                                {content
                                    .certifications
                                    .iter()
                                    .map(|cert| {
                                        view! {
                                            <div class="flex items-center gap-2">
                                                <span class="text-cyan-400">"✓"</span>
                                                <span class="text-sm">{cert.as_str()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
