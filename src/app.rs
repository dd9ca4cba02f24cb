mod about;
mod contact;
mod hero;
mod icons;
mod nav;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::content::portfolio;
use crate::observer::{active_section, ClientPosition, GlowPosition, Pointer, SectionBounds};
use crate::sections::Section;

use about::About;
use contact::{ContactSection, Footer};
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content={env!("BUILD_TIME")} />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner = portfolio().profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta name="description" content=portfolio().profile.tagline.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Page-wide navigation state shared with every section through context.
#[derive(Debug, Clone, Copy)]
struct PageState {
    active: RwSignal<Section>,
    menu_open: RwSignal<bool>,
}

impl PageState {
    fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
            menu_open: RwSignal::new(false),
        }
    }

    fn set_active(self, section: Section) {
        if self.active.get_untracked() != section {
            log::debug!("active section: {section}");
            self.active.set(section);
        }
    }

    /// Smooth-scrolls to `section`, marks it active and closes the mobile menu.
    fn scroll_to(self, section: Section) {
        match document().get_element_by_id(section.id()) {
            Some(el) => {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            None => log::warn!("no element with id #{section}"),
        }
        self.set_active(section);
        self.menu_open.set(false);
    }
}

impl ClientPosition for MouseEvent {
    fn client_x(&self) -> i32 {
        MouseEvent::client_x(self)
    }

    fn client_y(&self) -> i32 {
        MouseEvent::client_y(self)
    }
}

fn measure_sections() -> Vec<(Section, SectionBounds)> {
    let doc = document();
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let rect = doc.get_element_by_id(section.id())?.get_bounding_client_rect();
            Some((
                section,
                SectionBounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                },
            ))
        })
        .collect()
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let state = PageState::new();
    provide_context(state);

    // effects only run in the browser, so the hero fades in after hydration
    let visible = RwSignal::new(false);
    Effect::new(move |_| visible.set(true));

    let pointer = RwSignal::new(Pointer::default());
    let glow = Memo::new(move |_| GlowPosition::from_pointer(pointer.get()));
    let _ = use_event_listener(use_window(), leptos::ev::mousemove, move |ev| {
        pointer.set(Pointer::from_event(&ev));
    });

    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
        if let Some(section) = active_section(measure_sections()) {
            state.set_active(section);
        }
    });

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-cyan-900 to-slate-900 text-white overflow-hidden">
            <Background glow />
            <NavBar />
            <Hero visible />
            <About />
            <Skills />
            <Projects />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn Background(glow: Memo<GlowPosition>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div
                class="glow absolute w-96 h-96 bg-cyan-500/20 rounded-full blur-3xl animate-pulse"
                style=move || glow.get().primary_style()
            ></div>
            <div
                class="glow absolute w-96 h-96 bg-blue-500/20 rounded-full blur-3xl animate-pulse [animation-delay:1s]"
                style=move || glow.get().secondary_style()
            ></div>
        </div>
    }
}

/// Centered gradient heading used by every content section.
#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl md:text-5xl font-bold mb-12 text-center bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
            {text}
        </h2>
    }
}
