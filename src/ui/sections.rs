//! Section renderer
//!
//! Maps planned section blocks to full-viewport views. The planet block
//! renders the pinned [`PlanetSection`] instead of a heading.

use leptos::prelude::*;

use crate::core::sections::{SectionBlock, SectionContent, plan_sections};
use crate::ui::planet::PlanetSection;

/// Render one block per descriptor, in order
#[component]
pub fn SectionRenderer(sections: &'static [&'static str]) -> impl IntoView {
    let blocks = plan_sections(sections);

    view! {
        <main class="landing-sections">
            {blocks
                .into_iter()
                .map(|block| view! { <SectionView block=block /> })
                .collect_view()}
        </main>
    }
}

#[component]
fn SectionView(block: SectionBlock) -> impl IntoView {
    match block.content {
        SectionContent::Planet => view! {
            <PlanetSection index=block.index descriptor=block.descriptor />
        }
        .into_any(),
        SectionContent::Heading => {
            let style = format!(
                "background-color: {}; color: {};",
                block.background,
                block.background.foreground()
            );
            view! {
                <section
                    class="landing-section"
                    data-section=block.index.to_string()
                    data-descriptor=block.descriptor
                    style=style
                >
                    <h2 class="landing-section-heading">{block.heading()}</h2>
                </section>
            }
            .into_any()
        }
    }
}
