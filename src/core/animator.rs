//! Scroll animator for the planet scene
//!
//! The animator owns opaque handles to the scene's elements and writes the
//! sampled [`SceneFrame`] into them. It knows nothing about the DOM: the
//! view layer implements [`AnimationTarget`] for its element type.

use super::scene::Subject;
use super::scroll::{self, ScrollTrigger, SectionRect, TriggerId};
use super::timeline::{SceneFrame, SceneTimeline};

/// Something whose inline style can be written
pub trait AnimationTarget {
    fn set_style(&self, property: &str, value: &str);
}

/// Handles to every animated element of the scene.
///
/// A missing handle makes writes to that element inert.
#[derive(Clone, Debug)]
pub struct SceneTargets<T> {
    pub orbit: Option<T>,
    pub icons: [Option<T>; 3],
    pub texts: [Option<T>; 3],
}

impl<T> Default for SceneTargets<T> {
    fn default() -> Self {
        Self {
            orbit: None,
            icons: [None, None, None],
            texts: [None, None, None],
        }
    }
}

/// Drives the scene targets from one shared progress value
pub struct ScrollAnimator<T> {
    targets: SceneTargets<T>,
    timeline: SceneTimeline,
    trigger: ScrollTrigger,
}

impl<T: AnimationTarget> ScrollAnimator<T> {
    pub fn new(targets: SceneTargets<T>) -> Self {
        Self {
            targets,
            timeline: SceneTimeline::new(),
            trigger: ScrollTrigger::new(),
        }
    }

    /// Jump every track to `progress` and write the result
    pub fn seek(&self, progress: f64) -> SceneFrame {
        let frame = self.timeline.frame_at(progress);
        self.apply(&frame);
        frame
    }

    /// Re-measure after a scroll or resize; writes only when progress moved
    pub fn on_scroll(&mut self, rect: SectionRect, viewport_height: f64) -> Option<SceneFrame> {
        let progress = self.trigger.update(rect, viewport_height)?;
        Some(self.seek(progress))
    }

    pub fn targets(&self) -> &SceneTargets<T> {
        &self.targets
    }

    fn apply(&self, frame: &SceneFrame) {
        if let Some(orbit) = &self.targets.orbit {
            orbit.set_style("transform", &frame.orbit.to_string());
        }
        for subject in Subject::ALL {
            let i = subject.index();
            if let Some(icon) = &self.targets.icons[i] {
                icon.set_style("transform", &frame.icons[i].to_string());
            }
            if let Some(text) = &self.targets.texts[i] {
                text.set_style("transform", &frame.texts[i].css_transform());
                text.set_style("opacity", &frame.texts[i].opacity.to_string());
            }
        }
    }
}

/// Register the animator as a scroll trigger and sync it once.
///
/// `measure` returns the section rect and viewport height, or `None` when
/// the section is not in the document; the refresh is then skipped.
pub fn attach<T, M>(mut animator: ScrollAnimator<T>, mut measure: M) -> TriggerId
where
    T: AnimationTarget + 'static,
    M: FnMut() -> Option<(SectionRect, f64)> + 'static,
{
    let id = scroll::register(move || {
        if let Some((rect, viewport_height)) = measure() {
            animator.on_scroll(rect, viewport_height);
        }
    });
    scroll::refresh(id);
    id
}

/// Kill the trigger and drop the animator with its targets
pub fn detach(id: TriggerId) -> bool {
    scroll::kill(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keyframes::TextState;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingTarget {
        styles: Rc<RefCell<HashMap<String, String>>>,
    }

    impl RecordingTarget {
        fn style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl AnimationTarget for RecordingTarget {
        fn set_style(&self, property: &str, value: &str) {
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
        }
    }

    fn full_targets() -> SceneTargets<RecordingTarget> {
        SceneTargets {
            orbit: Some(RecordingTarget::default()),
            icons: std::array::from_fn(|_| Some(RecordingTarget::default())),
            texts: std::array::from_fn(|_| Some(RecordingTarget::default())),
        }
    }

    fn text_style(targets: &SceneTargets<RecordingTarget>, i: usize) -> (String, String) {
        let text = targets.texts[i].as_ref().unwrap();
        (
            text.style("transform").unwrap(),
            text.style("opacity").unwrap(),
        )
    }

    #[test]
    fn test_seek_start_shows_first_pair() {
        let animator = ScrollAnimator::new(full_targets());
        animator.seek(0.0);
        let targets = animator.targets();

        assert_eq!(
            targets.orbit.as_ref().unwrap().style("transform").unwrap(),
            "rotate(0deg) scale(1)"
        );
        assert_eq!(
            targets.icons[0].as_ref().unwrap().style("transform").unwrap(),
            "rotate(360deg) scale(1.35)"
        );
        assert_eq!(
            targets.icons[1].as_ref().unwrap().style("transform").unwrap(),
            "rotate(360deg) scale(1)"
        );
        assert_eq!(text_style(targets, 0), ("translateY(0%)".into(), "1".into()));
        assert_eq!(text_style(targets, 1), ("translateY(100%)".into(), "0".into()));
        assert_eq!(text_style(targets, 2), ("translateY(100%)".into(), "0".into()));
    }

    #[test]
    fn test_seek_middle_transfers_to_second_pair() {
        let animator = ScrollAnimator::new(full_targets());
        let frame = animator.seek(0.5);
        let targets = animator.targets();

        assert_eq!(frame.emphasized(), Some(Subject::Shoppers));
        assert_eq!(
            targets.icons[1].as_ref().unwrap().style("transform").unwrap(),
            "rotate(240deg) scale(1.35)"
        );
        assert_eq!(text_style(targets, 0), ("translateY(-100%)".into(), "0".into()));
        assert_eq!(text_style(targets, 1), ("translateY(0%)".into(), "1".into()));
    }

    #[test]
    fn test_seek_end_rests_on_third_pair() {
        let animator = ScrollAnimator::new(full_targets());
        let frame = animator.seek(1.0);

        assert_eq!(frame.emphasized(), Some(Subject::Employers));
        assert_eq!(frame.texts[2], TextState::SHOWN);
        assert_eq!(
            text_style(animator.targets(), 2),
            ("translateY(0%)".into(), "1".into())
        );
    }

    #[test]
    fn test_missing_targets_are_inert() {
        let mut targets = full_targets();
        targets.orbit = None;
        targets.icons[2] = None;
        let animator = ScrollAnimator::new(targets);

        let frame = animator.seek(1.0);
        assert_eq!(frame.orbit.rotate, 240.0);

        let empty: ScrollAnimator<RecordingTarget> = ScrollAnimator::new(SceneTargets::default());
        empty.seek(0.5);
    }

    #[test]
    fn test_on_scroll_writes_only_on_change() {
        let mut animator = ScrollAnimator::new(full_targets());
        let rect = SectionRect {
            top: -1200.0,
            height: 3200.0,
        };

        assert!(animator.on_scroll(rect, 800.0).is_some());
        assert!(animator.on_scroll(rect, 800.0).is_none());
    }

    #[test]
    fn test_attach_syncs_and_detach_tears_down() {
        scroll::kill_all();
        let targets = full_targets();
        let orbit = targets.orbit.clone().unwrap();
        let top = Rc::new(Cell::new(0.0));
        let scroll_top = top.clone();

        let id = attach(ScrollAnimator::new(targets), move || {
            Some((
                SectionRect {
                    top: scroll_top.get(),
                    height: 3200.0,
                },
                800.0,
            ))
        });
        assert_eq!(scroll::active_count(), 1);
        assert_eq!(orbit.style("transform").unwrap(), "rotate(0deg) scale(1)");

        top.set(-2400.0);
        scroll::refresh_all();
        assert_eq!(orbit.style("transform").unwrap(), "rotate(240deg) scale(1)");

        assert!(detach(id));
        assert_eq!(scroll::active_count(), 0);

        top.set(-1200.0);
        scroll::refresh_all();
        assert_eq!(orbit.style("transform").unwrap(), "rotate(240deg) scale(1)");
    }

    #[test]
    fn test_attach_without_section_skips_refresh() {
        scroll::kill_all();
        let targets = full_targets();
        let orbit = targets.orbit.clone().unwrap();

        let id = attach(ScrollAnimator::new(targets), || None);

        assert!(orbit.style("transform").is_none());
        detach(id);
        assert_eq!(scroll::active_count(), 0);
    }

    #[test]
    fn test_remount_leaves_no_residual_triggers() {
        scroll::kill_all();
        for _ in 0..5 {
            let id = attach(ScrollAnimator::new(full_targets()), || None);
            detach(id);
        }
        assert_eq!(scroll::active_count(), 0);
    }
}
