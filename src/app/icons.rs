use leptos::prelude::*;

/// Stroke icons drawn inline; brand logos come from the devicon font instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Code,
    ChevronDown,
    Menu,
    Close,
    Mail,
    ExternalLink,
}

#[component]
pub fn Icon(glyph: Glyph, #[prop(optional)] class: &'static str) -> impl IntoView {
    let paths = match glyph {
        Glyph::Code => view! {
            <polyline points="16 18 22 12 16 6" />
            <polyline points="8 6 2 12 8 18" />
        }
        .into_any(),
        Glyph::ChevronDown => view! { <path d="m6 9 6 6 6-6" /> }.into_any(),
        Glyph::Menu => view! {
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="18" y2="18" />
        }
        .into_any(),
        Glyph::Close => view! {
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        }
        .into_any(),
        Glyph::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        }
        .into_any(),
        Glyph::ExternalLink => view! {
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        }
        .into_any(),
    };

    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}
