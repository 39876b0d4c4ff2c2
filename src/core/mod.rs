//! Page model and scroll animation logic, independent of the DOM

pub mod animator;
#[cfg(feature = "ssr")]
pub mod config;
pub mod keyframes;
pub mod palette;
pub mod scene;
pub mod scroll;
pub mod sections;
pub mod timeline;

pub use animator::{AnimationTarget, SceneTargets, ScrollAnimator};
pub use keyframes::{Checkpoint, KeyframeSet, TextState, Transform};
pub use palette::Color;
pub use scene::{Subject, TEXT_BLOCKS, TextBlock};
pub use sections::{LANDING_SECTIONS, PLANET_MARKER, SectionBlock, SectionContent, plan_sections};
pub use timeline::{SceneFrame, SceneTimeline};
