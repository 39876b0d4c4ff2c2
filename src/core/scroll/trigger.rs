//! Progress of a pinned section from its viewport geometry

use crate::core::keyframes::clamp_progress;

/// Bounding box of a section relative to the viewport, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    /// Distance from the viewport top to the section top; negative once scrolled past
    pub top: f64,
    pub height: f64,
}

/// Scrubbed trigger spanning "section top at viewport top" to
/// "section bottom at viewport bottom"
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollTrigger {
    last_progress: Option<f64>,
}

impl ScrollTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress of the section through the viewport, in `[0, 1]`
    pub fn progress(rect: SectionRect, viewport_height: f64) -> f64 {
        let distance = rect.height - viewport_height;
        if distance <= 0.0 {
            // Nothing to scrub: the section fits in the viewport
            return if rect.top <= 0.0 { 1.0 } else { 0.0 };
        }
        clamp_progress(-rect.top / distance)
    }

    /// Measure the section and return the new progress if it changed
    pub fn update(&mut self, rect: SectionRect, viewport_height: f64) -> Option<f64> {
        let progress = Self::progress(rect, viewport_height);
        if self.last_progress == Some(progress) {
            return None;
        }
        self.last_progress = Some(progress);
        Some(progress)
    }

    pub fn last_progress(&self) -> Option<f64> {
        self.last_progress
    }
}
