use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use crate::content::portfolio;
use crate::sections::Section;

static BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = &portfolio().contact;

    view! {
        <section id=Section::Contact.id() class="py-20 px-4 bg-slate-800/30 relative">
            <div class="max-w-4xl mx-auto text-center relative z-10">
                <h2 class="text-4xl md:text-5xl font-bold mb-8 bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                    {contact.heading.as_str()}
                </h2>
                <p class="text-xl text-gray-300 mb-12">{contact.pitch.as_str()}</p>
                <div class="flex flex-wrap justify-center gap-6">
                    <a
                        href=contact.mailto()
                        class="flex items-center gap-3 px-6 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-full hover:scale-110 transform transition-all shadow-lg hover:shadow-cyan-500/50 group"
                    >
                        <Icon glyph=Glyph::Mail class="w-5 h-5 group-hover:animate-bounce" />
                        <span>{contact.email.as_str()}</span>
                    </a>
                    {contact
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=format!("{} Profile", social.label)
                                    class="flex items-center gap-3 px-6 py-3 border-2 border-cyan-400 rounded-full hover:bg-cyan-400/10 transition-all hover:scale-110 transform group"
                                >
                                    <i class=format!(
                                        "{} text-xl group-hover:rotate-12 transition-transform",
                                        social.kind.icon_class(),
                                    )></i>
                                    <span>{social.label.as_str()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-8 text-gray-400">
                    <p>"📱 " {contact.phone.as_str()}</p>
                    <p class="mt-2">"📍 " {contact.location.as_str()}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let footer = &portfolio().footer;

    view! {
        <footer class="py-8 px-4 border-t border-cyan-500/20 text-center text-gray-400 bg-slate-900/50 backdrop-blur-sm relative z-10">
            <p>{format!("© {BUILD_YEAR} {}. {}", footer.holder, footer.built_with)}</p>
            <p class="text-sm mt-2 text-cyan-400/60">{footer.tagline.as_str()}</p>
        </footer>
    }
}
