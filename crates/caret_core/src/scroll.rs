//! Scroll compensation.
//!
//! While content scrolls, the caret is not re-resolved on every tick.
//! Instead the anchor's vertical displacement is sampled once per frame and
//! published as an offset. Two equal samples in a row mean the scroll has
//! settled; the tracker then does one non-animated resolution.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScrollPhase {
    #[default]
    Idle,
    Sampling {
        /// Displacement seen on the previous frame, `None` before the first sample.
        previous: Option<f32>,
    },
}

/// Result of one frame's sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollStep {
    /// Displacement changed (or this was the first sample); sample again next frame.
    Moving(f32),
    /// Displacement repeated; back to idle.
    Settled(f32),
}

impl ScrollStep {
    pub fn offset(self) -> f32 {
        match self {
            ScrollStep::Moving(diff) | ScrollStep::Settled(diff) => diff,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScrollCompensator {
    phase: ScrollPhase,
}

impl ScrollCompensator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_sampling(&self) -> bool {
        matches!(self.phase, ScrollPhase::Sampling { .. })
    }

    /// Start a sampling loop. Returns `false` if one is already running, in
    /// which case the notification is absorbed by the running loop.
    pub fn begin(&mut self) -> bool {
        if self.is_sampling() {
            return false;
        }
        self.phase = ScrollPhase::Sampling { previous: None };
        true
    }

    /// Feed this frame's displacement (`anchor top - anchor top at resolution`).
    ///
    /// Must only be called while sampling.
    pub fn sample(&mut self, diff: f32) -> ScrollStep {
        match self.phase {
            ScrollPhase::Sampling {
                previous: Some(prev),
            } if prev == diff => {
                self.phase = ScrollPhase::Idle;
                ScrollStep::Settled(diff)
            }
            _ => {
                self.phase = ScrollPhase::Sampling {
                    previous: Some(diff),
                };
                ScrollStep::Moving(diff)
            }
        }
    }

    /// Leave the loop without settling, e.g. when the anchor is gone.
    pub fn abort(&mut self) {
        self.phase = ScrollPhase::Idle;
    }
}
