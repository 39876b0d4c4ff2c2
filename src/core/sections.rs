//! Section descriptors and page layout planning
//!
//! A page is an ordered list of descriptors. Each descriptor is either a
//! palette color name or the [`PLANET_MARKER`]. Planning turns descriptors
//! into blocks without touching the DOM, so the renderer only has to map
//! blocks to views.

use super::palette::Color;

/// Descriptor that places the planet scene
pub const PLANET_MARKER: &str = "planet";

/// Sections of the landing page, top to bottom
pub const LANDING_SECTIONS: &[&str] = &["blue", "darkBlue", PLANET_MARKER, "darkBlue", "blue"];

/// What a section block contains
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionContent {
    /// Plain full-viewport block with a heading
    Heading,
    /// The pinned planet scene
    Planet,
}

/// A planned section block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionBlock {
    /// Position on the page, starting at 0
    pub index: usize,
    /// Descriptor this block was planned from
    pub descriptor: &'static str,
    pub background: Color,
    pub content: SectionContent,
}

impl SectionBlock {
    pub fn is_planet(&self) -> bool {
        self.content == SectionContent::Planet
    }

    /// Heading text shown on plain blocks
    pub fn heading(&self) -> String {
        format!("Section {}", self.index + 1)
    }
}

/// Plan one block per descriptor, preserving order
pub fn plan_sections(descriptors: &[&'static str]) -> Vec<SectionBlock> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, &descriptor)| {
            if descriptor == PLANET_MARKER {
                SectionBlock {
                    index,
                    descriptor,
                    background: Color::Blue,
                    content: SectionContent::Planet,
                }
            } else {
                SectionBlock {
                    index,
                    descriptor,
                    background: Color::resolve(descriptor),
                    content: SectionContent::Heading,
                }
            }
        })
        .collect()
}
