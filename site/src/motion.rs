//! Entrance animation parameters.
//!
//! A [`Motion`] is a pair of [`Pose`]s plus timing. Blocks start in the
//! hidden pose and transition to the visible one once revealed; the browser
//! does the tweening through CSS transitions.

/// Opacity, vertical offset (px) and scale of a block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f32,
    /// Vertical offset in CSS pixels, positive is down
    pub y: f32,
    /// Uniform scale factor
    pub scale: f32,
}

impl Pose {
    /// Fully visible, in place.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    /// CSS `transform` value for this pose.
    pub fn transform(&self) -> String {
        match (self.y == 0.0, self.scale == 1.0) {
            (true, true) => "none".to_string(),
            (false, true) => format!("translateY({}px)", self.y),
            (true, false) => format!("scale({})", self.scale),
            (false, false) => format!("translateY({}px) scale({})", self.y, self.scale),
        }
    }
}

/// Hidden and visible poses plus timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Pose before the block is revealed
    pub hidden: Pose,
    /// Pose after the block is revealed
    pub visible: Pose,
    /// Transition duration in seconds
    pub duration: f32,
    /// Delay between consecutive staggered children, in seconds
    pub stagger_children: f32,
}

/// Fade in while rising 60px. Used for the hero lines.
pub const FADE_IN_UP: Motion = Motion {
    hidden: Pose {
        opacity: 0.0,
        y: 60.0,
        scale: 1.0,
    },
    visible: Pose::REST,
    duration: 0.6,
    stagger_children: 0.0,
};

/// Plain fade that releases its children one after another.
pub const STAGGER_CONTAINER: Motion = Motion {
    hidden: Pose {
        opacity: 0.0,
        y: 0.0,
        scale: 1.0,
    },
    visible: Pose::REST,
    duration: 0.3,
    stagger_children: 0.2,
};

/// Short rise for headings and cards entering the viewport.
pub const RISE: Motion = Motion {
    hidden: Pose {
        opacity: 0.0,
        y: 20.0,
        scale: 1.0,
    },
    visible: Pose::REST,
    duration: 0.5,
    stagger_children: 0.0,
};

/// Grow from 95% while fading in.
pub const ZOOM_IN: Motion = Motion {
    hidden: Pose {
        opacity: 0.0,
        y: 0.0,
        scale: 0.95,
    },
    visible: Pose::REST,
    duration: 0.5,
    stagger_children: 0.0,
};

impl Motion {
    /// Inline CSS for the current phase, with a start delay in seconds.
    pub fn style(&self, revealed: bool, delay: f32) -> String {
        let pose = if revealed { self.visible } else { self.hidden };
        format!(
            "opacity:{};transform:{};transition:opacity {d:.2}s ease-out {delay:.2}s,transform {d:.2}s ease-out {delay:.2}s",
            pose.opacity,
            pose.transform(),
            d = self.duration,
            delay = delay,
        )
    }

    /// Start delay of the `index`-th staggered child.
    pub fn child_delay(&self, index: usize) -> f32 {
        self.stagger_children * index as f32
    }
}
