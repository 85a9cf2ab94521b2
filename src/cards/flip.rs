//! Card flip animation.
//!
//! A flip is a half turn around the vertical axis. The visible face swaps
//! once per flip: on the first frame that starts past the half-way point,
//! or on the final frame if no frame landed past it (very short flips at
//! low frame rates).
//!
//! The animation is frame-driven. Call [`FlipAnimation::advance`] once per
//! frame with the frame delta and read [`FlipAnimation::yaw_degrees`] and
//! [`FlipAnimation::showing_front`] to draw.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Degrees turned by one flip.
pub const HALF_TURN_DEGREES: f32 = 180.0;

/// Hermite smooth-step on `[0, 1]`.
#[must_use]
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Rotation state of one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlipAnimation {
    duration: Duration,
    elapsed: Duration,
    rotating: bool,
    showing_front: bool,
    face_swapped: bool,
    start_yaw: f32,
    yaw: f32,
}

impl FlipAnimation {
    /// Create an idle, face-down animation.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        assert!(!duration.is_zero(), "Flip duration must be non-zero");
        Self {
            duration,
            elapsed: Duration::ZERO,
            rotating: false,
            showing_front: false,
            face_swapped: false,
            start_yaw: 0.0,
            yaw: 0.0,
        }
    }

    /// Is a flip in progress?
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Is the front (face-up side) currently drawn?
    #[must_use]
    pub fn showing_front(&self) -> bool {
        self.showing_front
    }

    /// Current rotation around the vertical axis, in degrees.
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw
    }

    /// Start a flip.
    ///
    /// Returns `false` (and does nothing) while a flip is already running.
    pub fn start(&mut self) -> bool {
        if self.rotating {
            return false;
        }
        self.rotating = true;
        self.elapsed = Duration::ZERO;
        self.face_swapped = false;
        self.start_yaw = self.yaw;
        true
    }

    /// Flip back to the back face.
    ///
    /// Only starts when idle and the front is showing.
    pub fn flip_back(&mut self) -> bool {
        if self.rotating || !self.showing_front {
            return false;
        }
        self.start()
    }

    /// Advance one frame.
    pub fn advance(&mut self, dt: Duration) {
        if !self.rotating {
            return;
        }

        if self.elapsed < self.duration {
            let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
            self.yaw = self.start_yaw + HALF_TURN_DEGREES * smooth_step(t);

            if !self.face_swapped && t > 0.5 {
                self.swap_face();
            }

            self.elapsed += dt;
        } else {
            self.yaw = self.start_yaw + HALF_TURN_DEGREES;
            if !self.face_swapped {
                self.swap_face();
            }
            self.rotating = false;
        }
    }

    fn swap_face(&mut self) {
        self.showing_front = !self.showing_front;
        self.face_swapped = true;
    }
}
