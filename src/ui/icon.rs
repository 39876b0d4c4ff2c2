use leptos::prelude::*;

/// Public path of an SVG asset under `/images`
pub fn asset_path(name: &str) -> String {
    format!("/images/{}.svg", name)
}

#[component]
pub fn Icon(
    /// Asset name without the .svg extension
    name: &'static str,
    /// Alternative text; empty marks the image as decorative
    #[prop(default = "")]
    alt: &'static str,
    /// CSS classes for styling
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=asset_path(name)
            class=class
            alt=alt
            draggable="false"
        />
    }
}

/// Predefined asset names
pub mod icons {
    pub const PLANET: &str = crate::core::scene::PLANET_IMAGE;
    pub const COMPASS: &str = "compass";
}
