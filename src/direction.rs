//! Thumbstick direction classification and debouncing.
//!
//! This module has no ECS dependencies: it can be driven from a frame
//! callback, a test harness, or the systems in [`crate::systems`].
//!
//! - [`classify_direction`] turns an analog sample into a [`Direction`]
//! - [`DirectionDebounce`] turns a stream of directions into edge-triggered
//!   navigation events (one per physical push)

use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

use crate::resources::input::StickSample;

/// Default stick magnitude above which a push is classified.
pub const DEFAULT_THRESHOLD: f32 = 0.7;

/// Discrete direction of a thumbstick push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// `true` for the four navigable directions.
    pub fn is_navigable(self) -> bool {
        self != Direction::None
    }
}

/// Map an angle (radians, measured from the up axis, positive towards the
/// right) to a direction band.
///
/// Bands are exclusive at their edges and leave dead zones around the
/// diagonals where nothing is classified.
pub fn direction_from_angle(angle: f32) -> Direction {
    let abs = angle.abs();
    if abs < FRAC_PI_6 {
        Direction::Up
    } else if abs > FRAC_PI_6 * 5.0 {
        Direction::Down
    } else if abs > FRAC_PI_3 && abs < FRAC_PI_3 * 2.0 {
        if angle > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else {
        Direction::None
    }
}

/// Classify a stick sample.
///
/// Samples whose magnitude does not exceed `threshold` yield
/// [`Direction::None`].
pub fn classify_direction(sample: StickSample, threshold: f32) -> Direction {
    if sample.magnitude() <= threshold {
        return Direction::None;
    }
    direction_from_angle(sample.x.atan2(sample.y))
}

/// Edge-triggered filter over classified directions.
///
/// A held stick produces a single event; the stick must return to neutral
/// (or change direction) before the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionDebounce {
    previous: Direction,
}

impl DirectionDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's direction. Returns the direction to act on, if any.
    pub fn feed(&mut self, current: Direction) -> Option<Direction> {
        let fire = current.is_navigable() && current != self.previous;
        self.previous = current;
        fire.then_some(current)
    }

    /// Direction seen on the last fed frame.
    pub fn previous(&self) -> Direction {
        self.previous
    }
}
