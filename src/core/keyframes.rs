//! Keyframe sets bound to scroll progress
//!
//! Every keyframe set holds exactly one value per [`Checkpoint`], so all
//! sets share the progress domain `[0, 1]` and stay in step when sampled
//! with the same progress value.

use derive_more::Display;

/// Scale of the emphasized icon
pub const EMPHASIS_SCALE: f64 = 1.35;

/// Scale of icons at rest
pub const REST_SCALE: f64 = 1.0;

/// Named progress points of the planet timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Checkpoint {
    #[display("0%")]
    Start,
    #[display("50%")]
    Middle,
    #[display("100%")]
    End,
}

impl Checkpoint {
    pub const ALL: [Checkpoint; 3] = [Checkpoint::Start, Checkpoint::Middle, Checkpoint::End];

    /// Progress value of this checkpoint
    pub fn progress(&self) -> f64 {
        match self {
            Checkpoint::Start => 0.0,
            Checkpoint::Middle => 0.5,
            Checkpoint::End => 1.0,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Checkpoint::Start => 0,
            Checkpoint::Middle => 1,
            Checkpoint::End => 2,
        }
    }

    /// Checkpoint closest to a progress value
    pub fn nearest(progress: f64) -> Self {
        let progress = clamp_progress(progress);
        if progress < 0.25 {
            Checkpoint::Start
        } else if progress < 0.75 {
            Checkpoint::Middle
        } else {
            Checkpoint::End
        }
    }
}

/// Clamp a progress value into `[0, 1]`; NaN maps to 0
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Values that can be interpolated between keyframes
pub trait Tween: Copy {
    fn tween(self, to: Self, t: f64) -> Self;
}

/// Rotation and scale of an animated element
#[derive(Clone, Copy, Debug, PartialEq, Display)]
#[display("rotate({rotate}deg) scale({scale})")]
pub struct Transform {
    /// Rotation in degrees
    pub rotate: f64,
    pub scale: f64,
}

impl Transform {
    pub const fn new(rotate: f64, scale: f64) -> Self {
        Self { rotate, scale }
    }

    pub fn is_emphasized(&self) -> bool {
        self.scale >= EMPHASIS_SCALE
    }
}

impl Tween for Transform {
    fn tween(self, to: Self, t: f64) -> Self {
        Self {
            rotate: lerp(self.rotate, to.rotate, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }
}

/// Vertical offset and opacity of a text block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextState {
    /// Offset as a percentage of the block's own height
    pub y_percent: f64,
    pub opacity: f64,
}

impl TextState {
    /// Waiting below the stage
    pub const BELOW: TextState = TextState::new(100.0, 0.0);
    /// Fully visible in place
    pub const SHOWN: TextState = TextState::new(0.0, 1.0);
    /// Slid out above the stage
    pub const ABOVE: TextState = TextState::new(-100.0, 0.0);

    pub const fn new(y_percent: f64, opacity: f64) -> Self {
        Self { y_percent, opacity }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity >= 1.0 && self.y_percent == 0.0
    }

    /// CSS `transform` value
    pub fn css_transform(&self) -> String {
        format!("translateY({}%)", self.y_percent)
    }
}

impl Tween for TextState {
    fn tween(self, to: Self, t: f64) -> Self {
        Self {
            y_percent: lerp(self.y_percent, to.y_percent, t),
            opacity: lerp(self.opacity, to.opacity, t),
        }
    }
}

/// Values at the 0%, 50% and 100% checkpoints
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeSet<T> {
    frames: [T; 3],
}

impl<T: Tween> KeyframeSet<T> {
    pub const fn new(start: T, middle: T, end: T) -> Self {
        Self {
            frames: [start, middle, end],
        }
    }

    /// Value at a checkpoint
    pub fn at(&self, checkpoint: Checkpoint) -> T {
        self.frames[checkpoint.index()]
    }

    /// Linearly interpolated value at a progress value
    pub fn sample(&self, progress: f64) -> T {
        let progress = clamp_progress(progress);
        let [start, middle, end] = self.frames;
        if progress <= 0.5 {
            start.tween(middle, progress / 0.5)
        } else {
            middle.tween(end, (progress - 0.5) / 0.5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORBIT: KeyframeSet<Transform> = KeyframeSet::new(
        Transform::new(0.0, 1.0),
        Transform::new(120.0, 1.0),
        Transform::new(240.0, 1.0),
    );

    #[test]
    fn test_sample_hits_checkpoints_exactly() {
        for checkpoint in Checkpoint::ALL {
            assert_eq!(ORBIT.sample(checkpoint.progress()), ORBIT.at(checkpoint));
        }
    }

    #[test]
    fn test_sample_interpolates_linearly() {
        assert_eq!(ORBIT.sample(0.25).rotate, 60.0);
        assert_eq!(ORBIT.sample(0.75).rotate, 180.0);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        assert_eq!(ORBIT.sample(-3.0), ORBIT.at(Checkpoint::Start));
        assert_eq!(ORBIT.sample(7.5), ORBIT.at(Checkpoint::End));
        assert_eq!(ORBIT.sample(f64::NAN), ORBIT.at(Checkpoint::Start));
    }

    #[test]
    fn test_nearest_checkpoint() {
        assert_eq!(Checkpoint::nearest(0.0), Checkpoint::Start);
        assert_eq!(Checkpoint::nearest(0.2), Checkpoint::Start);
        assert_eq!(Checkpoint::nearest(0.5), Checkpoint::Middle);
        assert_eq!(Checkpoint::nearest(0.8), Checkpoint::End);
        assert_eq!(Checkpoint::nearest(2.0), Checkpoint::End);
    }

    #[test]
    fn test_transform_css() {
        assert_eq!(
            Transform::new(240.0, 1.35).to_string(),
            "rotate(240deg) scale(1.35)"
        );
    }

    #[test]
    fn test_text_state_midway() {
        let state = TextState::BELOW.tween(TextState::SHOWN, 0.5);
        assert_eq!(state, TextState::new(50.0, 0.5));
        assert!(!state.is_visible());
        assert!(TextState::SHOWN.is_visible());
        assert_eq!(TextState::ABOVE.css_transform(), "translateY(-100%)");
    }

    #[test]
    fn test_checkpoint_display() {
        assert_eq!(Checkpoint::Middle.to_string(), "50%");
    }
}
