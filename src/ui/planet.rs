//! Planet scene
//!
//! The planet section is taller than the viewport and pins a stage holding
//! the illustration and the text panel. Inline styles are rendered at
//! progress 0 so the page is correct before hydration; after hydration the
//! scroll animator takes over the same elements through [`PlanetHandles`].

use leptos::html;
use leptos::prelude::*;

use crate::core::palette::Color;
use crate::core::scene::{PIN_VIEWPORTS, Subject, orbit_style};
use crate::core::timeline::{SceneFrame, SceneTimeline};
use crate::ui::icon::{Icon, asset_path, icons};
use crate::ui::scroll_animator::use_scroll_animator;

/// Node handles the scroll animator writes to
#[derive(Clone, Copy)]
pub struct PlanetHandles {
    /// Measured to derive scroll progress
    pub section: NodeRef<html::Section>,
    pub orbit: NodeRef<html::Div>,
    pub icons: [NodeRef<html::Img>; 3],
    pub texts: [NodeRef<html::Div>; 3],
}

impl PlanetHandles {
    pub fn new() -> Self {
        Self {
            section: NodeRef::new(),
            orbit: NodeRef::new(),
            icons: std::array::from_fn(|_| NodeRef::new()),
            texts: std::array::from_fn(|_| NodeRef::new()),
        }
    }
}

impl Default for PlanetHandles {
    fn default() -> Self {
        Self::new()
    }
}

/// Pinned section hosting the planet scene and its copy
#[component]
pub fn PlanetSection(index: usize, descriptor: &'static str) -> impl IntoView {
    let handles = PlanetHandles::new();
    let initial = SceneTimeline::new().frame_at(0.0);

    use_scroll_animator(handles);

    let style = format!(
        "background-color: {}; height: {}vh;",
        Color::Blue,
        (PIN_VIEWPORTS + 1) * 100
    );

    view! {
        <section
            node_ref=handles.section
            class="landing-section landing-planet-section"
            data-section=index.to_string()
            data-descriptor=descriptor
            style=style
        >
            <div class="landing-planet-stage">
                <PlanetScene handles=handles initial=initial />
                <TextPanel handles=handles initial=initial />
            </div>
        </section>
    }
}

/// Background planet with three orbiting icons
#[component]
pub fn PlanetScene(handles: PlanetHandles, initial: SceneFrame) -> impl IntoView {
    let orbit = format!("{} transform: {};", orbit_style(), initial.orbit);

    view! {
        <div class="landing-planet-container">
            <Icon name=icons::PLANET alt="Ecosystem" class="landing-planet-background" />
            <div node_ref=handles.orbit class="landing-orbit" style=orbit>
                {Subject::ALL
                    .into_iter()
                    .map(|subject| {
                        let i = subject.index();
                        let style = format!(
                            "{} transform: {};",
                            subject.placement().style(),
                            initial.icons[i]
                        );
                        view! {
                            <img
                                node_ref=handles.icons[i]
                                class="landing-orbit-icon"
                                src=asset_path(subject.icon())
                                alt=subject.label()
                                draggable="false"
                                style=style
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Stacked text blocks, one visible per checkpoint
#[component]
fn TextPanel(handles: PlanetHandles, initial: SceneFrame) -> impl IntoView {
    view! {
        <div class="landing-text-panel">
            {Subject::ALL
                .into_iter()
                .map(|subject| {
                    let i = subject.index();
                    let block = subject.text();
                    let state = initial.texts[i];
                    let class = if block.absolute {
                        "landing-text-block landing-text-absolute"
                    } else {
                        "landing-text-block"
                    };
                    let style = format!(
                        "transform: {}; opacity: {};",
                        state.css_transform(),
                        state.opacity
                    );
                    view! {
                        <div node_ref=handles.texts[i] class=class style=style>
                            <h3 class="landing-text-heading">{block.heading}</h3>
                            <p class="landing-text-body">{block.body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
