//! Input sources for headless runs.
//!
//! [`InputSource`] is the seam between the panels and whatever samples the
//! controllers. Two implementations ship with the crate:
//! - [`ScriptedInput`] replays frames from a JSON script
//! - [`RandomInput`] generates a seeded random walk, useful for soak runs
//!
//! # Script Format
//!
//! ```json
//! {
//!   "frames": [
//!     { "hold": 5, "left": { "thumbstick": { "x": 1.0, "y": 0.0 } } },
//!     { "left": {} },
//!     { "left": { "trigger": true } }
//!   ]
//! }
//! ```
//!
//! `hold` repeats a step for that many frames (default 1). A hand that is
//! absent from a step is untracked for those frames.

use serde::{Deserialize, Serialize};

use crate::resources::input::StickSample;
use crate::systems::input::{ControllerSample, InputFrame};

pub trait InputSource {
    /// Next frame of input, or `None` when the source is exhausted.
    fn next_frame(&mut self) -> Option<InputFrame>;
}

fn one() -> u32 {
    1
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScriptStep {
    #[serde(default = "one")]
    pub hold: u32,
    #[serde(flatten)]
    pub frame: InputFrame,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct InputScript {
    pub frames: Vec<ScriptStep>,
}

impl InputScript {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid input script: {}", e))
    }

    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {}: {}", path, e))?;
        Self::from_json(&text)
    }

    /// Total number of frames once holds are expanded.
    pub fn frame_count(&self) -> usize {
        self.frames.iter().map(|s| s.hold as usize).sum()
    }
}

pub struct ScriptedInput {
    script: InputScript,
    step: usize,
    emitted: u32,
}

impl ScriptedInput {
    pub fn new(script: InputScript) -> Self {
        Self {
            script,
            step: 0,
            emitted: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_frame(&mut self) -> Option<InputFrame> {
        loop {
            let step = self.script.frames.get(self.step)?;
            if self.emitted < step.hold {
                self.emitted += 1;
                return Some(step.frame);
            }
            self.step += 1;
            self.emitted = 0;
        }
    }
}

/// Both controllers tracked; sticks hop between neutral, cardinal pushes and
/// diagonals, buttons are pressed occasionally.
pub struct RandomInput {
    rng: fastrand::Rng,
    remaining: usize,
    left: StickSample,
    right: StickSample,
}

impl RandomInput {
    pub fn new(seed: u64, frames: usize) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            remaining: frames,
            left: StickSample::NEUTRAL,
            right: StickSample::NEUTRAL,
        }
    }

    fn next_stick(rng: &mut fastrand::Rng, current: StickSample) -> StickSample {
        // Sticks are held for a while before moving on.
        if rng.u32(0..4) != 0 {
            return current;
        }
        match rng.u32(0..6) {
            0 | 1 => StickSample::NEUTRAL,
            2 => StickSample::new(0.0, 1.0),
            3 => StickSample::new(0.0, -1.0),
            4 => StickSample::new(if rng.bool() { 1.0 } else { -1.0 }, 0.0),
            _ => {
                let angle = rng.f32() * std::f32::consts::TAU;
                StickSample::new(angle.sin(), angle.cos())
            }
        }
    }
}

impl InputSource for RandomInput {
    fn next_frame(&mut self) -> Option<InputFrame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.left = Self::next_stick(&mut self.rng, self.left);
        self.right = Self::next_stick(&mut self.rng, self.right);
        let left = ControllerSample {
            thumbstick: self.left,
            trigger: self.rng.u32(0..20) == 0,
            thumbstick_button: self.rng.u32(0..50) == 0,
        };
        let right = ControllerSample {
            thumbstick: self.right,
            trigger: false,
            thumbstick_button: self.rng.u32(0..50) == 0,
        };
        Some(InputFrame::both(left, right))
    }
}
