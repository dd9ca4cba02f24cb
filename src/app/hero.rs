use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::PageState;
use crate::content::portfolio;
use crate::sections::Section;

#[component]
pub fn Hero(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let state = expect_context::<PageState>();
    let profile = &portfolio().profile;

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-cyan-600/10 to-blue-600/10"></div>

            // floating blobs
            <div class="absolute top-20 left-10 w-20 h-20 bg-cyan-400/10 rounded-full blur-xl animate-float"></div>
            <div class="absolute top-40 right-20 w-32 h-32 bg-blue-400/10 rounded-full blur-xl animate-float [animation-delay:1s]"></div>
            <div class="absolute bottom-20 left-1/4 w-24 h-24 bg-purple-400/10 rounded-full blur-xl animate-float [animation-delay:2s]"></div>

            <div class=move || {
                if visible.get() {
                    "max-w-4xl mx-auto px-4 text-center relative z-10 transition-all duration-1000 opacity-100 translate-y-0"
                } else {
                    "max-w-4xl mx-auto px-4 text-center relative z-10 transition-all duration-1000 opacity-0 translate-y-10"
                }
            }>
                <div class="mb-6 relative">
                    <Icon glyph=Glyph::Code class="w-20 h-20 mx-auto text-cyan-400 animate-bounce" />
                    <div class="absolute top-0 left-1/2 transform -translate-x-1/2 w-32 h-32 bg-cyan-400/20 rounded-full blur-2xl animate-pulse"></div>
                </div>
                <h1 class="text-5xl md:text-7xl font-bold mb-4 bg-gradient-to-r from-cyan-400 via-blue-400 to-purple-500 bg-clip-text text-transparent animate-gradient">
                    {profile.name.as_str()}
                </h1>
                <h2 class="text-3xl md:text-4xl font-semibold mb-6 text-cyan-400">
                    {profile.headline.as_str()}
                </h2>
                <p class="text-xl md:text-2xl text-gray-300 mb-4 animate-fade-in">
                    {profile.tagline.as_str()}
                </p>
                <p class="text-lg text-gray-400 mb-8 animate-fade-in">
                    "📍 " {profile.location.as_str()}
                </p>
                <div class="flex justify-center gap-4 animate-fade-in [animation-delay:0.3s]">
                    <button
                        class="px-8 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-full font-semibold hover:scale-105 transform transition-all shadow-lg hover:shadow-cyan-500/50 relative overflow-hidden group"
                        on:click=move |_| state.scroll_to(Section::Projects)
                    >
                        <span class="relative z-10">"View My Work"</span>
                        <div class="absolute inset-0 bg-gradient-to-r from-blue-600 to-cyan-500 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                    </button>
                    <button
                        class="px-8 py-3 border-2 border-cyan-400 rounded-full font-semibold hover:bg-cyan-400/10 transition-all hover:scale-105 transform"
                        on:click=move |_| state.scroll_to(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
                <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <Icon glyph=Glyph::ChevronDown class="w-8 h-8 text-cyan-400" />
                </div>
            </div>
        </section>
    }
}
