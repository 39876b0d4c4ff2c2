//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::palette::Color;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let style = format!(
        "background-color: {}; color: {};",
        Color::DarkBlue,
        Color::DarkBlue.foreground()
    );

    view! {
        <div class="landing-section landing-not-found" style=style>
            <div class="landing-not-found-body">
                <Icon name=icons::COMPASS class="landing-not-found-icon" />

                // Error code
                <h1 class="landing-not-found-code">"404"</h1>

                <h2 class="landing-section-heading">"This orbit is empty"</h2>

                <p class="landing-text-body">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="landing-btn-primary">
                    "Back to the ecosystem"
                </A>
            </div>
        </div>
    }
}
