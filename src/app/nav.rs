use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::PageState;
use crate::sections::Section;

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <nav class="fixed top-0 w-full bg-slate-900/70 backdrop-blur-xl z-50 border-b border-cyan-500/20 shadow-lg shadow-cyan-500/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-2xl font-bold bg-gradient-to-r from-cyan-400 via-blue-400 to-purple-500 bg-clip-text text-transparent animate-pulse"></div>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <DesktopLink section /> })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| state.menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let glyph = if state.menu_open.get() { Glyph::Close } else { Glyph::Menu };
                            view! { <Icon glyph class="w-6 h-6" /> }
                        }}
                    </button>
                </div>
            </div>
            <Show when=move || state.menu_open.get()>
                <div class="md:hidden bg-slate-800/95 backdrop-blur-xl border-t border-cyan-500/20 animate-fade-in">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="block w-full text-left px-3 py-2 hover:bg-cyan-500/10 rounded transition-all duration-300"
                                        on:click=move |_| state.scroll_to(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn DesktopLink(section: Section) -> impl IntoView {
    let state = expect_context::<PageState>();
    let is_active = move || state.active.get() == section;

    view! {
        <button
            class=move || {
                if is_active() {
                    "relative group text-cyan-400 hover:text-cyan-400 transition-all duration-300"
                } else {
                    "relative group hover:text-cyan-400 transition-all duration-300"
                }
            }
            on:click=move |_| state.scroll_to(section)
        >
            {section.label()}
            <span class=move || {
                if is_active() {
                    "absolute -bottom-1 left-0 w-full h-0.5 bg-gradient-to-r from-cyan-400 to-blue-500 transform transition-transform duration-300 scale-x-100"
                } else {
                    "absolute -bottom-1 left-0 w-full h-0.5 bg-gradient-to-r from-cyan-400 to-blue-500 transform transition-transform duration-300 scale-x-0 group-hover:scale-x-100"
                }
            }></span>
        </button>
    }
}
