//! The planet scene timeline
//!
//! One timeline holds every keyframe track of the scene. Sampling it with a
//! single progress value produces a [`SceneFrame`], so the orbit, icons and
//! text blocks always move together.

use super::keyframes::{
    Checkpoint, EMPHASIS_SCALE, KeyframeSet, REST_SCALE, TextState, Transform,
};
use super::scene::Subject;

/// Orbit rotation across the checkpoints
const ORBIT_ROTATION: [f64; 3] = [0.0, 120.0, 240.0];

/// Icon counter-rotation across the checkpoints
const ICON_ROTATION: [f64; 3] = [360.0, 240.0, 120.0];

/// Interpolated values of every animated element at one progress value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneFrame {
    pub progress: f64,
    pub orbit: Transform,
    pub icons: [Transform; 3],
    pub texts: [TextState; 3],
}

impl SceneFrame {
    /// Subject whose icon is enlarged, if any is fully enlarged
    pub fn emphasized(&self) -> Option<Subject> {
        Subject::ALL
            .into_iter()
            .find(|subject| self.icons[subject.index()].is_emphasized())
    }

    /// Subject whose text block is fully visible, if any
    pub fn visible_text(&self) -> Option<Subject> {
        Subject::ALL
            .into_iter()
            .find(|subject| self.texts[subject.index()].is_visible())
    }
}

/// Keyframe tracks of the planet scene
#[derive(Clone, Debug, PartialEq)]
pub struct SceneTimeline {
    orbit: KeyframeSet<Transform>,
    icons: [KeyframeSet<Transform>; 3],
    texts: [KeyframeSet<TextState>; 3],
}

impl SceneTimeline {
    pub fn new() -> Self {
        Self {
            orbit: KeyframeSet::new(
                Transform::new(ORBIT_ROTATION[0], REST_SCALE),
                Transform::new(ORBIT_ROTATION[1], REST_SCALE),
                Transform::new(ORBIT_ROTATION[2], REST_SCALE),
            ),
            icons: Subject::ALL.map(icon_track),
            texts: Subject::ALL.map(text_track),
        }
    }

    /// Sample every track at the same progress value
    pub fn frame_at(&self, progress: f64) -> SceneFrame {
        SceneFrame {
            progress,
            orbit: self.orbit.sample(progress),
            icons: self.icons.map(|track| track.sample(progress)),
            texts: self.texts.map(|track| track.sample(progress)),
        }
    }

    pub fn frame_at_checkpoint(&self, checkpoint: Checkpoint) -> SceneFrame {
        self.frame_at(checkpoint.progress())
    }
}

impl Default for SceneTimeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter-rotation with a scale pulse at the subject's own checkpoint
fn icon_track(subject: Subject) -> KeyframeSet<Transform> {
    let frame = |checkpoint: Checkpoint| {
        let scale = if checkpoint.index() == subject.index() {
            EMPHASIS_SCALE
        } else {
            REST_SCALE
        };
        Transform::new(ICON_ROTATION[checkpoint.index()], scale)
    };
    KeyframeSet::new(
        frame(Checkpoint::Start),
        frame(Checkpoint::Middle),
        frame(Checkpoint::End),
    )
}

/// Below before the subject's checkpoint, shown at it, above after it
fn text_track(subject: Subject) -> KeyframeSet<TextState> {
    let frame = |checkpoint: Checkpoint| match checkpoint.index().cmp(&subject.index()) {
        std::cmp::Ordering::Less => TextState::BELOW,
        std::cmp::Ordering::Equal => TextState::SHOWN,
        std::cmp::Ordering::Greater => TextState::ABOVE,
    };
    KeyframeSet::new(
        frame(Checkpoint::Start),
        frame(Checkpoint::Middle),
        frame(Checkpoint::End),
    )
}
