//! Binds the planet scene to the scroll position
//!
//! On mount the scene's node handles become animation targets of one
//! scroll trigger; on cleanup the trigger is killed, which drops the
//! animator and every element it held.

use crate::ui::planet::PlanetHandles;

#[cfg(not(feature = "ssr"))]
use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
impl crate::core::animator::AnimationTarget for web_sys::HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }
}

/// Attach the scroll animator to the scene for the lifetime of the caller
pub fn use_scroll_animator(handles: PlanetHandles) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::animator::{self, SceneTargets, ScrollAnimator};
        use crate::core::scroll::{self, SectionRect};
        use leptos::ev;
        use wasm_bindgen::JsCast;

        scroll::register_scroll_plugin(|| {
            // Shared dispatch for every trigger; lives as long as the page
            let _ = window_event_listener(ev::scroll, |_| scroll::refresh_all());
            let _ = window_event_listener(ev::resize, |_| scroll::refresh_all());
        });

        Effect::new(move |_| {
            let Some(section) = handles.section.get() else {
                return;
            };

            let targets: SceneTargets<web_sys::HtmlElement> = SceneTargets {
                orbit: handles
                    .orbit
                    .get()
                    .map(|el| el.unchecked_into::<web_sys::HtmlElement>()),
                icons: handles
                    .icons
                    .map(|icon| icon.get().map(|el| el.unchecked_into::<web_sys::HtmlElement>())),
                texts: handles
                    .texts
                    .map(|text| text.get().map(|el| el.unchecked_into::<web_sys::HtmlElement>())),
            };

            let measure = move || {
                let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
                let rect = section.get_bounding_client_rect();
                Some((
                    SectionRect {
                        top: rect.top(),
                        height: rect.height(),
                    },
                    viewport_height,
                ))
            };

            let id = animator::attach(ScrollAnimator::new(targets), measure);
            on_cleanup(move || {
                animator::detach(id);
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = handles;
    }
}
