use bevy_ecs::prelude::Component;

use crate::direction::{Direction, DirectionDebounce, classify_direction};
use crate::resources::input::{Handedness, StickSample, XrInputState};

/// Which controller a [`StickNavigator`] listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickBinding {
    Hand(Handedness),
    /// Right stick while it is deflected, left stick otherwise.
    ActiveStick,
}

impl StickBinding {
    /// Hand to read this frame.
    pub fn resolve(self, input: &XrInputState) -> Handedness {
        match self {
            StickBinding::Hand(hand) => hand,
            StickBinding::ActiveStick => input.active_stick_hand(),
        }
    }
}

/// Turns a panel's thumbstick samples into one navigation step per push.
#[derive(Component, Clone, Debug)]
pub struct StickNavigator {
    pub binding: StickBinding,
    pub threshold: f32,
    debounce: DirectionDebounce,
}

impl StickNavigator {
    pub fn new(binding: StickBinding, threshold: f32) -> Self {
        Self {
            binding,
            threshold,
            debounce: DirectionDebounce::new(),
        }
    }

    /// Classify and debounce one frame's sample.
    pub fn poll(&mut self, sample: StickSample) -> Option<Direction> {
        self.debounce.feed(classify_direction(sample, self.threshold))
    }

    pub fn held(&self) -> Direction {
        self.debounce.previous()
    }
}
